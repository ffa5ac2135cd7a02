#[cfg(test)]
mod tests {
    use crate::{
        run_recorded_evolution_strategy, CallbackAction, EsConfigBuilder, EsIntermediate,
        OptimizationRecorder,
    };
    use evostrat_testfunctions::quadratic;
    use ndarray::Array1;

    #[test]
    fn test_optimization_recorder() {
        let recorder = OptimizationRecorder::new("test_function".to_string());

        // Create a callback
        let mut callback = recorder.create_callback();

        // Test a few callback invocations
        let intermediate1 = EsIntermediate {
            x: Array1::from(vec![1.0, 2.0]),
            fun: 5.0,
            rho: 1.0,
            iter: 1,
        };
        let action1 = callback(&intermediate1);
        assert!(matches!(action1, CallbackAction::Continue));

        let intermediate2 = EsIntermediate {
            x: Array1::from(vec![0.5, 1.0]),
            fun: 1.25,
            rho: 0.5,
            iter: 2,
        };
        let action2 = callback(&intermediate2);
        assert!(matches!(action2, CallbackAction::Continue));

        // Check records
        let records = recorder.get_records();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].iteration, 1);
        assert_eq!(records[0].x, vec![1.0, 2.0]);
        assert_eq!(records[0].best_result, 5.0);
        assert!(records[0].is_improvement);

        assert_eq!(records[1].iteration, 2);
        assert_eq!(records[1].x, vec![0.5, 1.0]);
        assert_eq!(records[1].best_result, 1.25);
        assert_eq!(records[1].rho, 0.5);
        assert!(records[1].is_improvement);

        assert_eq!(recorder.get_best_solution(), Some((vec![0.5, 1.0], 1.25)));
    }

    #[test]
    fn test_recorded_optimization() {
        // Test recording with a short (1+1)-ES run on the quadratic function
        let bounds = vec![(-5.0, 5.0), (-5.0, 5.0)];
        let config = EsConfigBuilder::new().seed(42).build();
        let outdir = tempfile::tempdir().expect("tempdir");

        let result = run_recorded_evolution_strategy(
            "quadratic",
            quadratic,
            &bounds,
            Some(200),
            None,
            config,
            outdir.path().to_str().unwrap(),
        );

        assert!(result.is_ok());
        let (report, csv_path) = result.unwrap();
        assert!(report.fun <= report.population_energies[0]);

        // Check that CSV file was created
        assert!(std::path::Path::new(&csv_path).exists());

        // Read and verify CSV content
        let csv_content = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
        let lines: Vec<&str> = csv_content.trim().split('\n').collect();

        // Should have header plus one row per iteration
        assert!(lines.len() > 1, "CSV should have header plus data rows");
        assert!(lines[0].starts_with("iteration,x0,x1,best_result,rho,is_improvement"));
        assert_eq!(lines.len() - 1, report.nit);
    }
}

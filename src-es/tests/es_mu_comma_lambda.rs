use evostrat_es::{evolution_strategy, EsConfigBuilder, Strategy};
use evostrat_testfunctions::sphere;

#[test]
fn test_es_mcl_sphere_selection_correctness() {
    // (mu,lambda)-ES with mu=5, lambda=10 on the sphere for 200 iterations.
    // Survivors come from the final offspring alone, so the reported best is
    // the minimum of the final population and the population is sorted.
    let bounds = vec![(-10.0, 10.0), (-10.0, 10.0)];
    let config = EsConfigBuilder::new()
        .seed(60)
        .strategy(Strategy::MuCommaLambda)
        .mu(5)
        .lam(10)
        .build();

    let report = evolution_strategy(sphere, &bounds, None, Some(200), config).unwrap();

    assert_eq!(report.population.nrows(), 5);
    let e = &report.population_energies;
    for i in 1..e.len() {
        assert!(e[i - 1] <= e[i], "survivors not sorted ascending");
    }
    assert_eq!(report.fun, e[0]);
    // 5 initial evaluations plus 10 per iteration
    assert_eq!(report.nfev, 5 + 10 * 200);
    for &xi in report.x.iter() {
        assert!((-10.0..=10.0).contains(&xi));
    }
}

#[test]
fn test_es_mcl_replication_when_mu_exceeds_lambda() {
    // mu=12 > lambda=5: survivor list is built from ceil(12/5) sorted blocks
    let bounds = vec![(-10.0, 10.0), (-10.0, 10.0)];
    let config = EsConfigBuilder::new()
        .seed(61)
        .strategy(Strategy::MuCommaLambda)
        .mu(12)
        .lam(5)
        .build();

    let report = evolution_strategy(sphere, &bounds, None, Some(50), config).unwrap();

    assert_eq!(report.population.nrows(), 12);
    let e = &report.population_energies;
    // block structure: entries repeat with period lambda
    for i in 0..12 - 5 {
        assert_eq!(e[i], e[i + 5], "block replication broken at {}", i);
    }
    assert_eq!(report.fun, e[0]);
}

#[test]
fn test_es_mcl_can_regress_but_reports_final_population() {
    // Parents are discarded, so the final best may be worse than an earlier
    // generation's best; the report must still reflect the final population
    let bounds = vec![(-10.0, 10.0), (-10.0, 10.0)];
    let config = EsConfigBuilder::new()
        .seed(62)
        .strategy(Strategy::MuCommaLambda)
        .mu(5)
        .lam(10)
        .build();

    let report = evolution_strategy(sphere, &bounds, None, Some(100), config).unwrap();
    let min = report
        .population_energies
        .iter()
        .cloned()
        .fold(f64::INFINITY, f64::min);
    assert_eq!(report.fun, min);
}

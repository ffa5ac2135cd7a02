use evostrat_es::{evolution_strategy, EsConfig, EsConfigBuilder, Strategy};
use evostrat_testfunctions::{rastrigin, sphere};

fn config(strategy: Strategy, seed: u64) -> EsConfig {
    let mut b = EsConfigBuilder::new().strategy(strategy).seed(seed);
    if matches!(strategy, Strategy::MuPlusLambda | Strategy::MuCommaLambda) {
        b = b.mu(8).lam(16);
    }
    b.build()
}

#[test]
fn test_same_seed_reproduces_the_whole_run() {
    let bounds = vec![(-5.12, 5.12); 3];
    for strategy in [
        Strategy::OnePlusOne,
        Strategy::MuPlusOne,
        Strategy::MuPlusLambda,
        Strategy::MuCommaLambda,
    ] {
        let a = evolution_strategy(rastrigin, &bounds, Some(2_000), None, config(strategy, 77))
            .unwrap();
        let b = evolution_strategy(rastrigin, &bounds, Some(2_000), None, config(strategy, 77))
            .unwrap();

        assert_eq!(a.fun, b.fun, "{}: fitness differs", strategy);
        assert_eq!(a.x, b.x, "{}: best vector differs", strategy);
        assert_eq!(a.nfev, b.nfev, "{}: evaluation count differs", strategy);
        assert_eq!(a.nit, b.nit, "{}: iteration count differs", strategy);
        assert_eq!(
            a.population_energies, b.population_energies,
            "{}: final population differs",
            strategy
        );
    }
}

#[test]
fn test_runs_share_no_state() {
    // Back-to-back runs with the same seed see identical random streams;
    // nothing leaks from one run into the next
    let bounds = vec![(-10.0, 10.0), (-10.0, 10.0)];
    let first = evolution_strategy(
        sphere,
        &bounds,
        Some(500),
        None,
        config(Strategy::OnePlusOne, 5),
    )
    .unwrap();
    for _ in 0..3 {
        let again = evolution_strategy(
            sphere,
            &bounds,
            Some(500),
            None,
            config(Strategy::OnePlusOne, 5),
        )
        .unwrap();
        assert_eq!(first.x, again.x);
        assert_eq!(first.fun, again.fun);
    }
}

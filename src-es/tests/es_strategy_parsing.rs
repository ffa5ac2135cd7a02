use evostrat_es::Strategy;

#[test]
fn test_parse_strategy_spellings() {
    assert!(matches!("1+1".parse::<Strategy>().unwrap(), Strategy::OnePlusOne));
    assert!(matches!("(1+1)-ES".parse::<Strategy>().unwrap(), Strategy::OnePlusOne));
    assert!(matches!("(mu+1)".parse::<Strategy>().unwrap(), Strategy::MuPlusOne));
    assert!(matches!(
        "mu+lambda".parse::<Strategy>().unwrap(),
        Strategy::MuPlusLambda
    ));
    assert!(matches!(
        "(mu, lambda)-es".parse::<Strategy>().unwrap(),
        Strategy::MuCommaLambda
    ));
    assert!("es".parse::<Strategy>().is_err());
}

#[test]
fn test_display_round_trips() {
    for strategy in [
        Strategy::OnePlusOne,
        Strategy::MuPlusOne,
        Strategy::MuPlusLambda,
        Strategy::MuCommaLambda,
    ] {
        let printed = strategy.to_string();
        let parsed: Strategy = printed.parse().unwrap();
        assert_eq!(parsed, strategy);
    }
}

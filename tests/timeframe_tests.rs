use coinscope::error::CoreError;
use coinscope::model::Timeframe;

#[test]
fn accepts_every_listed_token() {
    let tokens = [
        "1s", "5s", "10s", "15s", "30s", "45s", "1m", "2m", "3m", "5m", "10m", "15m", "30m",
        "45m", "1h", "12h", "23h", "1d", "7d", "29d", "1M", "6M", "11M", "1Y", "4Y", "max",
    ];
    for token in tokens {
        let tf = Timeframe::parse(token).unwrap_or_else(|e| panic!("{}: {}", token, e));
        assert_eq!(tf.to_string(), token);
    }
}

#[test]
fn rejects_unlisted_or_malformed_tokens() {
    for token in [
        "", "h", "0h", "24h", "30d", "12M", "5Y", "7s", "4m", "1w", "1H", "-1h", "1.5h", "MAX",
        "abc",
    ] {
        let err = Timeframe::parse(token).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidArgument(_)),
            "token {:?}",
            token
        );
    }
}

#[test]
fn step_sizes() {
    let cases = [
        ("1s", 1_000u64),
        ("15m", 900_000),
        ("4h", 14_400_000),
        ("1d", 86_400_000),
        ("1M", 2_629_746_000),
        ("1Y", 31_556_952_000),
        ("max", 0),
    ];
    for (token, step) in cases {
        assert_eq!(Timeframe::parse(token).unwrap().step_ms(), step, "{}", token);
    }
}

#[test]
fn default_point_counts_scale_with_step() {
    assert_eq!(Timeframe::Minutes(15).default_point_count(), 60);
    assert_eq!(Timeframe::Hours(1).default_point_count(), 60);
    assert_eq!(Timeframe::Hours(4).default_point_count(), 96);
    assert_eq!(Timeframe::Days(1).default_point_count(), 96);
    assert_eq!(Timeframe::Days(7).default_point_count(), 168);
    assert_eq!(Timeframe::Days(29).default_point_count(), 120);
    assert_eq!(Timeframe::Years(1).default_point_count(), 100);
    assert_eq!(Timeframe::Max.default_point_count(), 100);
}

#[test]
fn labels() {
    assert_eq!(Timeframe::Hours(1).label(), "1 hour");
    assert_eq!(Timeframe::Minutes(15).label(), "15 minutes");
    assert_eq!(Timeframe::Max.label(), "Since existence");
}

#[test]
fn all_is_ordered_and_ends_with_max() {
    let all = Timeframe::all();
    assert_eq!(all.len(), 6 + 8 + 23 + 29 + 11 + 4 + 1);
    assert_eq!(all.last(), Some(&Timeframe::Max));
    let steps: Vec<u64> = all[..all.len() - 1].iter().map(Timeframe::step_ms).collect();
    assert!(steps.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn serde_uses_token_strings() {
    let tf: Timeframe = serde_json::from_str("\"3M\"").unwrap();
    assert_eq!(tf, Timeframe::Months(3));
    assert_eq!(serde_json::to_string(&Timeframe::Minutes(5)).unwrap(), "\"5m\"");
    assert!(serde_json::from_str::<Timeframe>("\"2w\"").is_err());
}

use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in [Ease::Linear, Ease::EaseInOut] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_on_unit_interval() {
    for ease in [Ease::Linear, Ease::EaseInOut] {
        let mut prev = ease.apply(0.0);
        for i in 1..=1000 {
            let v = ease.apply(i as f32 / 1000.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::EaseInOut.apply(-1.0), 0.0);
    assert_eq!(Ease::EaseInOut.apply(2.0), 1.0);
    assert_eq!(Ease::EaseInOut.apply(0.5), 0.5);
}

#[test]
fn parses_cli_names() {
    assert_eq!("linear".parse::<Ease>().unwrap(), Ease::Linear);
    assert_eq!("Ease-In-Out".parse::<Ease>().unwrap(), Ease::EaseInOut);
    assert!("bounce".parse::<Ease>().is_err());
    assert_eq!(
        serde_json::to_string(&Ease::EaseInOut).unwrap(),
        "\"ease-in-out\""
    );
}

use tabslide::{Easing, ScrollBehavior, ScrollError};

// =============================================================================
// Curve Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.25), 0.25);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert!((Easing::EaseIn.apply(0.25) - 0.0625).abs() < 1e-12);
}

#[test]
fn test_easing_ease_out() {
    // t * (2 - t)
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert!(Easing::EaseOut.apply(0.25) > 0.25);
}

#[test]
fn test_easing_ease_in_out() {
    assert_eq!(Easing::EaseInOut.apply(0.25), 0.125);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert_eq!(Easing::EaseInOut.apply(0.75), 0.875);
}

#[test]
fn test_easing_boundaries() {
    for easing in Easing::ALL {
        assert_eq!(easing.apply(0.0), 0.0, "{easing} at 0");
        assert_eq!(easing.apply(1.0), 1.0, "{easing} at 1");
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in Easing::ALL {
        let mut prev = 0.0;
        for i in 1..=100 {
            let t = i as f64 / 100.0;
            let value = easing.apply(t);
            assert!(value >= prev, "{easing} not monotonic at t={t}");
            prev = value;
        }
    }
}

// =============================================================================
// Name Parsing
// =============================================================================

#[test]
fn test_easing_names() {
    assert_eq!("ease-in-out".parse::<Easing>(), Ok(Easing::EaseInOut));
    assert_eq!(Easing::names(), ["linear", "ease-in", "ease-out", "ease-in-out"]);
}

#[test]
fn test_unknown_easing_lists_supported_names() {
    let err = "bounce".parse::<Easing>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "scroller does not support an easing option of \"bounce\". \
         Supported options are linear,ease-in,ease-out,ease-in-out"
    );
}

#[test]
fn test_behavior_resolves_curve_and_duration() {
    assert_eq!(ScrollBehavior::default(), ScrollBehavior::Auto);
    assert_eq!(ScrollBehavior::Auto.easing(), Easing::Linear);
    assert!(ScrollBehavior::Auto.duration().is_zero());
    assert_eq!(ScrollBehavior::Smooth.easing(), Easing::EaseInOut);
    assert_eq!(ScrollBehavior::Smooth.duration().as_millis(), 300);
}

#[test]
fn test_unknown_behavior_is_unsupported_easing() {
    let err = "bounce".parse::<ScrollBehavior>().unwrap_err();
    assert!(matches!(
        err,
        ScrollError::UnsupportedEasing { ref name, .. } if name == "bounce"
    ));
}

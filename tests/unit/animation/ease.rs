use super::*;

const ALL: [Ease; 3] = [
    Ease::Linear,
    Ease::Power { exponent: 1.1 },
    Ease::Power { exponent: 2.0 },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn out_of_range_clamps_exactly() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.5), 1.0);
        assert_eq!(ease.apply(f64::NAN), 0.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn scroll_blend_curve_lags_linear() {
    let t = 0.5;
    let g = Ease::SCROLL_BLEND.apply(t);
    assert!((g - 0.5f64.powf(1.1)).abs() < 1e-12);
    assert!(g < t);
}

#[test]
fn power_rejects_non_positive_exponent() {
    assert!(Ease::Power { exponent: 1.1 }.is_well_formed());
    assert!(!Ease::Power { exponent: 0.0 }.is_well_formed());
    assert!(!Ease::Power { exponent: f64::INFINITY }.is_well_formed());
}

#[test]
fn serde_shape_is_externally_tagged() {
    let json = serde_json::to_string(&Ease::Power { exponent: 2.0 }).unwrap();
    assert_eq!(json, r#"{"Power":{"exponent":2.0}}"#);
    let linear: Ease = serde_json::from_str(r#""Linear""#).unwrap();
    assert_eq!(linear, Ease::Linear);
}

use approx::assert_relative_eq;
use atmo_layers::*;
use proptest::prelude::*;

fn name_at(km: f64) -> Option<&'static str> {
    classify(km).map(|l| l.name)
}

/// Largest f64 strictly below `x` (x > 0).
fn just_below(x: f64) -> f64 {
    f64::from_bits(x.to_bits() - 1)
}

#[test]
fn boundaries_are_bit_exact() {
    let cases = [
        (15.0, "Troposphere", "Stratosphere"),
        (50.0, "Stratosphere", "Mesosphere"),
        (85.0, "Mesosphere", "Thermosphere"),
        (600.0, "Thermosphere", "Exosphere"),
    ];
    for (boundary, below, at) in cases {
        assert_eq!(name_at(boundary), Some(at), "at {boundary}");
        assert_eq!(name_at(just_below(boundary)), Some(below), "below {boundary}");
    }
    assert_eq!(name_at(just_below(10_000.0)), Some("Exosphere"));
    assert_eq!(name_at(10_000.0), None);
}

#[test]
fn seven_nines_below_boundaries() {
    assert_eq!(name_at(14.9999999), Some("Troposphere"));
    assert_eq!(name_at(49.9999999), Some("Stratosphere"));
    assert_eq!(name_at(84.9999999), Some("Mesosphere"));
    assert_eq!(name_at(599.9999999), Some("Thermosphere"));
}

#[test]
fn end_to_end_scenarios() {
    let r = describe(0.0, "km").unwrap();
    assert_eq!(r.layer, Some("Troposphere"));
    assert_eq!(r.input.altitude_km, 0.0);

    let r = describe(62.1371, "mi").unwrap();
    assert_relative_eq!(r.input.altitude_km, 99.9999, epsilon = 1e-3);
    assert_eq!(r.layer, Some("Thermosphere"));
    assert_eq!(r.input.unit, Unit::Mi);

    assert_eq!(describe(600.0, "km").unwrap().layer, Some("Exosphere"));

    let r = describe(-1.0, "km").unwrap();
    assert_eq!(r.layer, None);
    assert_eq!(r.note(), Some(OUT_OF_RANGE_NOTE));

    assert_eq!(describe(9999.0, "km").unwrap().layer, Some("Exosphere"));
    assert_eq!(describe(20000.0, "km").unwrap().layer, None);
}

#[test]
fn bogus_unit_produces_no_report() {
    let err = describe(100.0, "bogus").unwrap_err();
    assert_eq!(err, Error::InvalidUnit("bogus".to_string()));
    assert_eq!(err.to_string(), "unit must be 'km' or 'mi', got 'bogus'");
}

#[test]
fn every_layer_is_reachable_from_its_lower_bound() {
    for layer in LAYERS.iter() {
        assert_eq!(classify(layer.min_km), Some(layer));
    }
}

proptest! {
    #[test]
    fn negative_altitudes_are_unclassified(x in -1.0e12f64..0.0) {
        prop_assert!(classify(x).is_none());
    }

    #[test]
    fn altitudes_above_cap_are_unclassified(x in 10_000.0f64..1.0e12) {
        prop_assert!(classify(x).is_none());
    }

    #[test]
    fn modeled_range_always_matches_its_own_interval(x in 0.0f64..10_000.0) {
        let layer = classify(x).expect("covered altitude");
        prop_assert!(x >= layer.min_km);
        prop_assert!(layer.max_km.map_or(true, |max| x < max));
    }

    #[test]
    fn miles_conversion_classifies_like_direct_product(m in -100.0f64..7_000.0) {
        let via_converter = to_km(m, "mi").unwrap();
        prop_assert_eq!(via_converter, m * 1.609344);
        prop_assert_eq!(classify(via_converter), classify(m * KM_PER_MILE));
    }

    #[test]
    fn describe_is_idempotent(x in -20_000.0f64..20_000.0, miles in any::<bool>()) {
        let unit = if miles { "mi" } else { "km" };
        let a = serde_json::to_string(&describe(x, unit).unwrap()).unwrap();
        let b = serde_json::to_string(&describe(x, unit).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }
}

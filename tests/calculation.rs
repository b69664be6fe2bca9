//! 측정값 → 결과 파이프라인 회귀 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use gold_karat_toolbox::purity::{
    compute_calculation, CalculationError, DeltaFlag, InvalidInputReason, MeasurementInput,
    PurityCategory,
};

#[test]
fn typical_17k_piece() {
    // 10.50 g / 9.80 g, 20°C → 체적 0.70 cm³, 밀도 15.00 g/cm³
    let r = compute_calculation(&MeasurementInput::new(10.50, 9.80, Some(20.0))).unwrap();
    assert_relative_eq!(r.volume, 0.70, epsilon = 1e-9);
    assert_relative_eq!(r.density, 15.00, epsilon = 1e-9);
    assert_abs_diff_eq!(r.gold_percent, 5.3 / 9.62 * 100.0, epsilon = 1e-6);
    assert_abs_diff_eq!(r.karat_from_percent, 13.2225, epsilon = 1e-3);
    assert_eq!(r.karat_from_density, Some(17.0));
    assert_eq!(r.karat_density_range.as_deref(), Some("14.70–15.20"));
    assert_eq!(r.final_range_min, 12.0);
    assert_eq!(r.final_range_max, 18.0);
    assert_eq!(r.final_range_label, "12K–18K");
    assert_eq!(r.category, PurityCategory::Medium);
    assert_eq!(r.category_label, "Medium");
    assert_eq!(r.delta_karat, Some(3.8));
    assert_eq!(r.delta_flag, DeltaFlag::Warn);
}

#[test]
fn below_table_is_indeterminate_and_very_low() {
    let r = compute_calculation(&MeasurementInput::new(5.0, 4.0, None)).unwrap();
    assert_relative_eq!(r.density, 5.0);
    assert_eq!(r.gold_percent, 0.0);
    assert_eq!(r.karat_from_percent, 0.0);
    assert_eq!(r.karat_from_density, None);
    assert_eq!(r.karat_density_range, None);
    assert_eq!((r.final_range_min, r.final_range_max), (0.0, 1.0));
    assert_eq!(r.category, PurityCategory::VeryLow);
    assert_eq!(r.delta_karat, None);
    assert_eq!(r.delta_flag, DeltaFlag::Ok);
    assert_eq!(r.delta_note, "no density-based comparator available.");
}

#[test]
fn equal_weights_are_rejected_before_computing() {
    let err = compute_calculation(&MeasurementInput::new(1.0, 1.0, None)).unwrap_err();
    assert_eq!(
        err,
        CalculationError::InvalidInput(InvalidInputReason::AirNotHeavier {
            air: 1.0,
            water: 1.0
        })
    );
}

#[test]
fn non_positive_and_non_numeric_inputs_are_rejected() {
    for (air, water) in [(0.0, -1.0), (-2.0, -3.0), (2.0, 0.0), (f64::NAN, 1.0)] {
        let err = compute_calculation(&MeasurementInput::new(air, water, None)).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidInput(_)), "{air}/{water}");
    }
    let err = MeasurementInput::parse("ten", "9", None).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidInput(_)));
}

#[test]
fn cold_and_warm_water_shift_density() {
    let nominal = compute_calculation(&MeasurementInput::new(10.5, 9.8, Some(20.0))).unwrap();
    let cold = compute_calculation(&MeasurementInput::new(10.5, 9.8, Some(4.0))).unwrap();
    let warm = compute_calculation(&MeasurementInput::new(10.5, 9.8, Some(35.0))).unwrap();
    assert_eq!(cold.water_density, 0.9997);
    assert_eq!(warm.water_density, 0.9957);
    assert!(cold.density > warm.density);
    assert!(nominal.density > cold.density);
}

#[test]
fn missing_temperature_matches_twenty_degrees() {
    let none = compute_calculation(&MeasurementInput::new(19.3, 18.3, None)).unwrap();
    let twenty = compute_calculation(&MeasurementInput::new(19.3, 18.3, Some(20.0))).unwrap();
    assert_eq!(none, twenty);
}

#[test]
fn near_pure_gold_reads_very_high() {
    // 19.2 g/cm³ → 24K 구간
    let r = compute_calculation(&MeasurementInput::new(19.2, 18.2, Some(20.0))).unwrap();
    assert_eq!(r.karat_from_density, Some(24.0));
    assert_abs_diff_eq!(r.karat_from_percent, 9.5 / 9.62 * 24.0, epsilon = 1e-6);
    assert_eq!(r.final_range_min, 22.5);
    assert_eq!(r.final_range_max, 24.0);
    assert_eq!(r.final_range_label, "22.5K–24K");
    assert_eq!(r.category, PurityCategory::VeryHigh);
    assert_eq!(r.delta_flag, DeltaFlag::Ok);
}

#[test]
fn repeated_calls_are_identical() {
    let input = MeasurementInput::new(7.77, 7.31, Some(12.5));
    let a = compute_calculation(&input).unwrap();
    let b = compute_calculation(&input).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.density.to_bits(), b.density.to_bits());
}

#[test]
fn invariants_hold_over_input_sweep() {
    for air_step in 1..=40 {
        let air = air_step as f64 * 0.5;
        for ratio_step in 1..=30 {
            // 수중/공기 비율 0.03~0.99
            let water = air * (ratio_step as f64 * 0.033);
            for temp in [None, Some(5.0), Some(20.0), Some(40.0)] {
                let r = compute_calculation(&MeasurementInput::new(air, water, temp)).unwrap();
                assert!(r.density > 0.0);
                assert!((0.0..=100.0).contains(&r.gold_percent));
                assert!((0.0..=24.0).contains(&r.karat_from_percent));
                assert!(r.final_range_min <= r.final_range_max);
                assert!(r.final_range_min >= 0.0 && r.final_range_max <= 24.0);
                assert_eq!((r.final_range_min * 2.0).fract(), 0.0);
                if let Some(d) = r.delta_karat {
                    assert_eq!(r.delta_flag == DeltaFlag::Warn, d >= 2.0);
                }
            }
        }
    }
}

#[test]
fn result_serializes_to_json() {
    let r = compute_calculation(&MeasurementInput::new(10.5, 9.8, Some(20.0))).unwrap();
    let json: serde_json::Value = serde_json::to_value(&r).unwrap();
    assert_eq!(json["delta_flag"], "WARN");
    assert_eq!(json["category"], "Medium");
    assert_eq!(json["final_range_label"], "12K–18K");
}

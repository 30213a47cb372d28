use homa_core::models::measurements::MeasurementSet;
use homa_core::models::scores::RiskCategory;
use homa_scoring::advice::{recommendations, summary, FOLLOW_UP};
use homa_scoring::compute;
use homa_scoring::interpret::{interpret, BmiBand, InsulinSensitivity, TygBand};

#[test]
fn bmi_bands() {
    assert_eq!(BmiBand::of(18.49), BmiBand::Underweight);
    assert_eq!(BmiBand::of(18.5), BmiBand::Normal);
    assert_eq!(BmiBand::of(24.99), BmiBand::Normal);
    assert_eq!(BmiBand::of(25.0), BmiBand::Overweight);
    assert_eq!(BmiBand::of(30.0), BmiBand::Obese);
}

#[test]
fn homa_ir_bands() {
    assert_eq!(InsulinSensitivity::of(0.8), InsulinSensitivity::Optimal);
    assert_eq!(InsulinSensitivity::of(1.0), InsulinSensitivity::Normal);
    assert_eq!(InsulinSensitivity::of(2.22), InsulinSensitivity::EarlyResistance);
    assert_eq!(InsulinSensitivity::of(2.9), InsulinSensitivity::SignificantResistance);
}

#[test]
fn tyg_bands() {
    assert_eq!(TygBand::of(8.49), TygBand::Low);
    assert_eq!(TygBand::of(8.82), TygBand::Moderate);
    assert_eq!(TygBand::of(9.0), TygBand::High);
}

#[test]
fn interpretation_follows_computed_indices() {
    let m = MeasurementSet {
        height_cm: Some(175.0),
        weight_kg: Some(70.0),
        ..Default::default()
    };
    let reading = interpret(&compute(&m));
    assert_eq!(reading.bmi, Some(BmiBand::Normal));
    assert_eq!(reading.homa_ir, None);
    assert_eq!(reading.tyg_index, None);
}

#[test]
fn recommendations_target_findings() {
    let m = MeasurementSet {
        height_cm: Some(160.0),
        weight_kg: Some(80.0),
        waist_cm: Some(104.0),
        systolic_bp: Some(142.0),
        fasting_glucose: Some(96.0),
        ..Default::default()
    };
    let advice = recommendations(&m, &compute(&m));
    assert_eq!(advice.len(), 4);
    assert!(advice[0].contains("abdominal obesity"));
    assert!(advice[1].contains("blood pressure"));
    assert!(advice[2].contains("weight management"));
    assert_eq!(advice[3], FOLLOW_UP);
}

#[test]
fn healthy_profile_only_gets_follow_up() {
    let m = MeasurementSet::default();
    assert_eq!(recommendations(&m, &compute(&m)), vec![FOLLOW_UP]);
}

#[test]
fn summary_per_category() {
    assert!(summary(RiskCategory::Low).contains("good"));
    assert!(summary(RiskCategory::Moderate).contains("concern"));
    assert_eq!(summary(RiskCategory::High), summary(RiskCategory::VeryHigh));
}

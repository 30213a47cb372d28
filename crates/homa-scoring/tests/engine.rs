use homa_core::models::measurements::{HistoryFlag, MeasurementSet, NumericField};
use homa_core::models::scores::{RiskCategory, SpeedometerZone};
use homa_scoring::{breakdown, compute};

fn with(values: &[(NumericField, f64)]) -> MeasurementSet {
    let mut m = MeasurementSet::default();
    for &(field, value) in values {
        field.set(&mut m, Some(value));
    }
    m
}

#[test]
fn empty_set_is_green_and_zero() {
    let result = compute(&MeasurementSet::default());
    assert_eq!(result.bmi, None);
    assert_eq!(result.homa_ir, None);
    assert_eq!(result.tyg_index, None);
    assert_eq!(result.waist_score, 0);
    assert_eq!(result.total_score, 0);
    assert_eq!(result.speedometer_zone, SpeedometerZone::Green);
    assert_eq!(result.risk_category, RiskCategory::Low);
    assert!(breakdown(&MeasurementSet::default()).is_empty());
}

#[test]
fn compute_is_deterministic_and_leaves_input_alone() {
    let m = with(&[
        (NumericField::HeightCm, 168.0),
        (NumericField::WeightKg, 81.3),
        (NumericField::FastingGlucose, 112.0),
        (NumericField::FastingInsulin, 14.2),
        (NumericField::Triglycerides, 190.0),
        (NumericField::WaistCm, 97.5),
    ]);
    let before = m.clone();

    let first = compute(&m);
    let second = compute(&m);
    assert_eq!(first, second);
    assert_eq!(first.bmi.map(f64::to_bits), second.bmi.map(f64::to_bits));
    assert_eq!(m, before);
}

#[test]
fn bmi_from_height_and_weight() {
    let m = with(&[(NumericField::HeightCm, 175.0), (NumericField::WeightKg, 70.0)]);
    assert_eq!(compute(&m).bmi, Some(22.86));
}

#[test]
fn bmi_needs_positive_inputs() {
    for (h, w) in [(0.0, 70.0), (175.0, 0.0), (-175.0, 70.0), (175.0, -1.0)] {
        let m = with(&[(NumericField::HeightCm, h), (NumericField::WeightKg, w)]);
        assert_eq!(compute(&m).bmi, None, "height {h} weight {w}");
    }
    assert_eq!(compute(&with(&[(NumericField::HeightCm, 175.0)])).bmi, None);
}

#[test]
fn homa_ir_from_glucose_and_insulin() {
    let m = with(&[
        (NumericField::FastingGlucose, 90.0),
        (NumericField::FastingInsulin, 10.0),
    ]);
    assert_eq!(compute(&m).homa_ir, Some(2.22));
}

#[test]
fn zero_glucose_omits_homa_ir_without_panicking() {
    let m = with(&[
        (NumericField::FastingGlucose, 0.0),
        (NumericField::FastingInsulin, 10.0),
    ]);
    let result = compute(&m);
    assert_eq!(result.homa_ir, None);
    assert_eq!(result.tyg_index, None);
    assert_eq!(result.total_score, 0);
}

#[test]
fn tyg_index_is_natural_log() {
    // ln(150 * 90 / 2) = ln(6750) = 8.8173
    let m = with(&[
        (NumericField::Triglycerides, 150.0),
        (NumericField::FastingGlucose, 90.0),
    ]);
    assert_eq!(compute(&m).tyg_index, Some(8.82));
}

#[test]
fn tyg_index_absent_for_non_positive_product() {
    let m = with(&[
        (NumericField::Triglycerides, -150.0),
        (NumericField::FastingGlucose, -90.0),
    ]);
    assert_eq!(compute(&m).tyg_index, None);
}

#[test]
fn non_finite_inputs_are_ignored() {
    let m = with(&[
        (NumericField::HeightCm, f64::NAN),
        (NumericField::WeightKg, 70.0),
        (NumericField::FastingGlucose, f64::INFINITY),
        (NumericField::FastingInsulin, 10.0),
        (NumericField::Hemoglobin, f64::NAN),
    ]);
    let result = compute(&m);
    assert_eq!(result.bmi, None);
    assert_eq!(result.homa_ir, None);
    assert_eq!(result.total_score, 0);
}

#[test]
fn waist_threshold_is_strict() {
    assert_eq!(compute(&with(&[(NumericField::WaistCm, 85.0)])).waist_score, 0);
    let over = compute(&with(&[(NumericField::WaistCm, 85.01)]));
    assert_eq!(over.waist_score, 20);
    assert_eq!(over.total_score, 20);
}

#[test]
fn history_flags_add_ten_and_family_flags_add_five() {
    let mut m = MeasurementSet::default();
    m.history_smoker = Some(true);
    assert_eq!(compute(&m).total_score, 10);

    m.family_diabetes = Some(true);
    assert_eq!(compute(&m).total_score, 15);

    m.history_alcohol = Some(false);
    assert_eq!(compute(&m).total_score, 15);
}

#[test]
fn every_flag_ticked_scores_ninety_five() {
    let mut m = MeasurementSet::default();
    for flag in HistoryFlag::ALL {
        flag.set(&mut m, Some(true));
    }
    let result = compute(&m);
    assert_eq!(result.total_score, 8 * 10 + 3 * 5);
    assert_eq!(result.speedometer_zone, SpeedometerZone::Red);
    assert_eq!(result.risk_category, RiskCategory::VeryHigh);
}

#[test]
fn abnormal_hemoglobin_adds_five() {
    assert_eq!(compute(&with(&[(NumericField::Hemoglobin, 11.0)])).total_score, 5);
    assert_eq!(compute(&with(&[(NumericField::Hemoglobin, 15.0)])).total_score, 0);
    assert_eq!(compute(&with(&[(NumericField::Hemoglobin, 18.5)])).total_score, 5);
    assert_eq!(compute(&with(&[(NumericField::Hemoglobin, 12.0)])).total_score, 0);
    assert_eq!(compute(&with(&[(NumericField::Hemoglobin, 18.0)])).total_score, 0);
}

#[test]
fn every_lab_rule_fires_once() {
    let abnormal = with(&[
        (NumericField::Hemoglobin, 10.0),
        (NumericField::WbcCount, 12.0),
        (NumericField::PlateletCount, 100.0),
        (NumericField::TotalCholesterol, 240.0),
        (NumericField::LdlCholesterol, 130.0),
        (NumericField::HdlCholesterol, 35.0),
        (NumericField::Triglycerides, 151.0),
        (NumericField::SgptAlt, 41.0),
        (NumericField::SgotAst, 55.0),
        (NumericField::Creatinine, 1.5),
        (NumericField::UricAcid, 7.5),
        (NumericField::Tsh, 5.2),
    ]);
    // 12 labs at 5 points. Triglycerides alone cannot form a TyG index.
    assert_eq!(compute(&abnormal).total_score, 60);

    let normal = with(&[
        (NumericField::Hemoglobin, 14.0),
        (NumericField::WbcCount, 7.0),
        (NumericField::PlateletCount, 250.0),
        (NumericField::TotalCholesterol, 200.0),
        (NumericField::LdlCholesterol, 100.0),
        (NumericField::HdlCholesterol, 40.0),
        (NumericField::Triglycerides, 150.0),
        (NumericField::SgptAlt, 40.0),
        (NumericField::SgotAst, 40.0),
        (NumericField::Creatinine, 0.9),
        (NumericField::UricAcid, 7.0),
        (NumericField::Tsh, 2.0),
    ]);
    assert_eq!(compute(&normal).total_score, 0);
}

#[test]
fn zero_lab_reading_counts_as_not_recorded() {
    assert_eq!(compute(&with(&[(NumericField::Hemoglobin, 0.0)])).total_score, 0);
    assert_eq!(compute(&with(&[(NumericField::Tsh, 0.0)])).total_score, 0);
}

#[test]
fn negative_lab_reading_is_graded() {
    assert_eq!(compute(&with(&[(NumericField::Hemoglobin, -1.0)])).total_score, 5);
    assert_eq!(compute(&with(&[(NumericField::HdlCholesterol, -1.0)])).total_score, 5);
}

#[test]
fn unscored_fields_add_nothing() {
    let m = with(&[
        (NumericField::Hba1c, 9.5),
        (NumericField::SystolicBp, 180.0),
        (NumericField::BloodUrea, 90.0),
        (NumericField::T4, 20.0),
    ]);
    assert_eq!(compute(&m).total_score, 0);
}

#[test]
fn homa_ir_threshold_uses_rounded_value() {
    // 2.5 exactly does not score.
    let at = with(&[
        (NumericField::FastingGlucose, 101.25),
        (NumericField::FastingInsulin, 10.0),
    ]);
    let result = compute(&at);
    assert_eq!(result.homa_ir, Some(2.5));
    assert_eq!(result.total_score, 0);

    // 126 * 10 / 405 = 3.11
    let over = with(&[
        (NumericField::FastingGlucose, 126.0),
        (NumericField::FastingInsulin, 10.0),
    ]);
    assert_eq!(compute(&over).total_score, 10);
}

#[test]
fn tyg_above_threshold_scores_ten() {
    // ln(140 * 100 / 2) = 8.85; triglycerides 140 is itself normal.
    let m = with(&[
        (NumericField::Triglycerides, 140.0),
        (NumericField::FastingGlucose, 100.0),
    ]);
    let result = compute(&m);
    assert_eq!(result.tyg_index, Some(8.85));
    assert_eq!(result.total_score, 10);
}

#[test]
fn combined_profile_reaches_high_zone() {
    let mut m = with(&[
        (NumericField::WaistCm, 102.0),
        (NumericField::FastingGlucose, 126.0),
        (NumericField::FastingInsulin, 18.0),
        (NumericField::Triglycerides, 220.0),
        (NumericField::HdlCholesterol, 34.0),
    ]);
    m.history_smoker = Some(true);

    // waist 20 + smoker 10 + homa 10 + tyg 10 + tg 5 + hdl 5
    let result = compute(&m);
    assert_eq!(result.total_score, 60);
    assert_eq!(result.speedometer_zone, SpeedometerZone::OrangeRed);
    assert_eq!(result.risk_category, RiskCategory::High);
}

#[test]
fn breakdown_sums_to_total() {
    let mut m = with(&[
        (NumericField::WaistCm, 90.0),
        (NumericField::FastingGlucose, 110.0),
        (NumericField::FastingInsulin, 15.0),
        (NumericField::Hemoglobin, 11.0),
    ]);
    m.family_hypertension = Some(true);
    m.history_cva = Some(true);

    let items = breakdown(&m);
    let ids: Vec<_> = items.iter().map(|c| c.rule_id.as_str()).collect();
    assert_eq!(
        ids,
        ["waist", "history_cva", "family_hypertension", "homa_ir", "hemoglobin"]
    );
    let sum: u32 = items.iter().map(|c| c.points).sum();
    assert_eq!(sum, compute(&m).total_score);
    assert_eq!(sum, 20 + 10 + 5 + 10 + 5);
}

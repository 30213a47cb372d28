use homa_core::models::measurements::MeasurementSet;
use homa_core::models::patient::{NewPatient, Sex};
use homa_core::models::scores::{RiskCategory, ScoreResult, SpeedometerZone};
use homa_storage::assessments::AssessmentRecord;
use homa_storage::error::StorageError;
use homa_storage::Store;
use uuid::Uuid;

fn store_with_patient() -> (Store, Uuid) {
    let store = Store::in_memory().unwrap();
    let patient = store
        .insert_patient(NewPatient {
            name: "Lakshmi".to_string(),
            age: 61,
            sex: Sex::Female,
            phone: None,
            email: Some("lakshmi@example.com".to_string()),
        })
        .unwrap();
    (store, patient.id)
}

fn record(patient_id: Uuid) -> AssessmentRecord {
    AssessmentRecord {
        patient_id,
        measurements: MeasurementSet {
            height_cm: Some(158.0),
            weight_kg: Some(66.5),
            waist_cm: Some(92.0),
            fasting_glucose: Some(104.0),
            fasting_insulin: Some(12.5),
            hemoglobin: Some(11.2),
            history_menopause: Some(true),
            family_diabetes: Some(false),
            ..Default::default()
        },
        scores: ScoreResult {
            bmi: Some(26.64),
            homa_ir: Some(3.21),
            tyg_index: None,
            waist_score: 20,
            total_score: 45,
            speedometer_zone: SpeedometerZone::BlueRed,
            risk_category: RiskCategory::Moderate,
        },
        lab_notes: Some("Sample haemolysed, repeat CBC".to_string()),
        recorded_by: Some(Uuid::new_v4()),
    }
}

#[test]
fn insert_round_trips_every_column() {
    let (store, patient_id) = store_with_patient();
    let saved = store.insert_assessment(record(patient_id)).unwrap();

    let fetched = store.get_assessment(saved.id).unwrap();
    assert_eq!(fetched, saved);
    assert_eq!(fetched.measurements.history_menopause, Some(true));
    assert_eq!(fetched.measurements.family_diabetes, Some(false));
    assert_eq!(fetched.measurements.history_smoker, None);
    assert_eq!(fetched.measurements.tsh, None);
}

#[test]
fn unknown_patient_is_rejected() {
    let (store, _) = store_with_patient();
    let err = store.insert_assessment(record(Uuid::new_v4())).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "patient", .. }));
    assert_eq!(store.counts().unwrap().assessments, 0);
}

#[test]
fn listing_joins_patient_and_filters() {
    let (store, patient_id) = store_with_patient();
    let other = store
        .insert_patient(NewPatient {
            name: "Suresh".to_string(),
            age: 39,
            sex: Sex::Male,
            phone: None,
            email: None,
        })
        .unwrap();

    let first = store.insert_assessment(record(patient_id)).unwrap();
    let second = store.insert_assessment(record(patient_id)).unwrap();
    store.insert_assessment(record(other.id)).unwrap();

    let all = store.list_assessments(None).unwrap();
    assert_eq!(all.len(), 3);

    let mine = store.list_assessments(Some(patient_id)).unwrap();
    let ids: Vec<_> = mine.iter().map(|s| s.assessment.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(mine.iter().all(|s| s.patient_name == "Lakshmi"
        && s.patient_age == 61
        && s.patient_sex == Sex::Female));
}

#[test]
fn deleting_patient_cascades() {
    let (store, patient_id) = store_with_patient();
    let saved = store.insert_assessment(record(patient_id)).unwrap();

    store.delete_patient(patient_id).unwrap();
    assert!(matches!(
        store.get_assessment(saved.id),
        Err(StorageError::NotFound { entity: "assessment", .. })
    ));
    assert_eq!(store.counts().unwrap().assessments, 0);
}

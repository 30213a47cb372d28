use homa_core::models::patient::{NewPatient, PatientChanges, Sex};
use homa_storage::error::StorageError;
use homa_storage::Store;
use uuid::Uuid;

fn new_patient(name: &str) -> NewPatient {
    NewPatient {
        name: name.to_string(),
        age: 47,
        sex: Sex::Male,
        phone: Some("9963721999".to_string()),
        email: None,
    }
}

#[test]
fn insert_then_get() {
    let store = Store::in_memory().unwrap();
    let created = store.insert_patient(new_patient("Ravi Kumar")).unwrap();

    let fetched = store.get_patient(created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.created_at, fetched.updated_at);
    assert!(store.patient_exists(created.id).unwrap());
}

#[test]
fn missing_patient_is_not_found() {
    let store = Store::in_memory().unwrap();
    let err = store.get_patient(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "patient", .. }));
    assert!(!store.patient_exists(Uuid::new_v4()).unwrap());
}

#[test]
fn list_is_newest_first() {
    let store = Store::in_memory().unwrap();
    let first = store.insert_patient(new_patient("First")).unwrap();
    let second = store.insert_patient(new_patient("Second")).unwrap();

    let ids: Vec<_> = store.list_patients().unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[test]
fn partial_update_keeps_untouched_fields() {
    let store = Store::in_memory().unwrap();
    let created = store.insert_patient(new_patient("Meena")).unwrap();

    let updated = store
        .update_patient(
            created.id,
            PatientChanges {
                age: Some(48),
                sex: Some(Sex::Female),
                phone: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Meena");
    assert_eq!(updated.age, 48);
    assert_eq!(updated.sex, Sex::Female);
    assert_eq!(updated.phone, None);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(store.get_patient(created.id).unwrap(), updated);
}

#[test]
fn update_and_delete_missing_patient() {
    let store = Store::in_memory().unwrap();
    let id = Uuid::new_v4();
    let changes = PatientChanges {
        name: Some("Nobody".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        store.update_patient(id, changes),
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete_patient(id),
        Err(StorageError::NotFound { .. })
    ));
}

#[test]
fn delete_removes_patient() {
    let store = Store::in_memory().unwrap();
    let created = store.insert_patient(new_patient("Temp")).unwrap();
    store.delete_patient(created.id).unwrap();
    assert!(store.list_patients().unwrap().is_empty());
    assert_eq!(store.counts().unwrap().patients, 0);
}

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homa.db");

    let id = {
        let store = Store::open(&path).unwrap();
        store.insert_patient(new_patient("Persisted")).unwrap().id
    };

    let reopened = Store::open(&path).unwrap();
    assert_eq!(reopened.get_patient(id).unwrap().name, "Persisted");
}

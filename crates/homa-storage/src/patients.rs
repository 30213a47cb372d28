use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use homa_core::models::patient::{NewPatient, Patient, PatientChanges};

use crate::db::{self, Store};
use crate::error::StorageError;

const PATIENT_COLUMNS: &str = "id, name, age, sex, phone, email, created_at, updated_at";

impl Store {
    pub fn insert_patient(&self, new: NewPatient) -> Result<Patient, StorageError> {
        let now = db::now();
        let patient = Patient {
            id: Uuid::new_v4(),
            name: new.name,
            age: new.age,
            sex: new.sex,
            phone: new.phone,
            email: new.email,
            created_at: now,
            updated_at: now,
        };

        self.conn()?.execute(
            "INSERT INTO patients (id, name, age, sex, phone, email, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                patient.id.to_string(),
                patient.name,
                patient.age,
                patient.sex.as_str(),
                patient.phone,
                patient.email,
                patient.created_at.as_microsecond(),
                patient.updated_at.as_microsecond(),
            ],
        )?;

        tracing::info!(patient_id = %patient.id, "patient registered");
        Ok(patient)
    }

    pub fn get_patient(&self, id: Uuid) -> Result<Patient, StorageError> {
        self.conn()?
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?1"),
                params![id.to_string()],
                patient_from_row,
            )
            .optional()?
            .ok_or_else(|| StorageError::not_found("patient", id))
    }

    pub fn patient_exists(&self, id: Uuid) -> Result<bool, StorageError> {
        let found: Option<i64> = self
            .conn()?
            .query_row(
                "SELECT 1 FROM patients WHERE id = ?1",
                params![id.to_string()],
                |r| r.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// All patients, most recently registered first.
    pub fn list_patients(&self) -> Result<Vec<Patient>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients ORDER BY created_at DESC, rowid DESC"
        ))?;
        let patients = stmt
            .query_map([], patient_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(patients)
    }

    pub fn update_patient(&self, id: Uuid, changes: PatientChanges) -> Result<Patient, StorageError> {
        let mut patient = self.get_patient(id)?;
        changes.apply(&mut patient);
        patient.updated_at = db::now();

        let updated = self.conn()?.execute(
            "UPDATE patients
             SET name = ?1, age = ?2, sex = ?3, phone = ?4, email = ?5, updated_at = ?6
             WHERE id = ?7",
            params![
                patient.name,
                patient.age,
                patient.sex.as_str(),
                patient.phone,
                patient.email,
                patient.updated_at.as_microsecond(),
                id.to_string(),
            ],
        )?;
        if updated == 0 {
            return Err(StorageError::not_found("patient", id));
        }

        tracing::info!(patient_id = %id, "patient updated");
        Ok(patient)
    }

    /// Delete a patient together with their assessments.
    pub fn delete_patient(&self, id: Uuid) -> Result<(), StorageError> {
        let deleted = self
            .conn()?
            .execute("DELETE FROM patients WHERE id = ?1", params![id.to_string()])?;
        if deleted == 0 {
            return Err(StorageError::not_found("patient", id));
        }
        tracing::info!(patient_id = %id, "patient deleted");
        Ok(())
    }
}

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: db::parsed_column(row, "id")?,
        name: row.get("name")?,
        age: row.get("age")?,
        sex: db::parsed_column(row, "sex")?,
        phone: row.get("phone")?,
        email: row.get("email")?,
        created_at: db::timestamp_column(row, "created_at")?,
        updated_at: db::timestamp_column(row, "updated_at")?,
    })
}

use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use homa_core::models::staff::Staff;

use crate::db::{self, Store};
use crate::error::StorageError;

const STAFF_COLUMNS: &str = "id, name, email, phone, role, is_active, password_hash, created_at";

impl Store {
    /// Insert a staff account. Emails are unique.
    pub fn insert_staff(&self, staff: &Staff) -> Result<(), StorageError> {
        self.conn()?
            .execute(
                "INSERT INTO staff (id, name, email, phone, role, is_active, password_hash, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    staff.id.to_string(),
                    staff.name,
                    staff.email,
                    staff.phone,
                    staff.role.as_str(),
                    staff.is_active,
                    staff.password_hash,
                    staff.created_at.as_microsecond(),
                ],
            )
            .map_err(|e| db::conflict_on_unique(e, format!("email already registered: {}", staff.email)))?;

        tracing::info!(staff_id = %staff.id, role = %staff.role, "staff account created");
        Ok(())
    }

    pub fn find_staff_by_email(&self, email: &str) -> Result<Option<Staff>, StorageError> {
        let staff = self
            .conn()?
            .query_row(
                &format!("SELECT {STAFF_COLUMNS} FROM staff WHERE email = ?1"),
                params![email],
                staff_from_row,
            )
            .optional()?;
        Ok(staff)
    }

    pub fn get_staff(&self, id: Uuid) -> Result<Staff, StorageError> {
        self.conn()?
            .query_row(
                &format!("SELECT {STAFF_COLUMNS} FROM staff WHERE id = ?1"),
                params![id.to_string()],
                staff_from_row,
            )
            .optional()?
            .ok_or_else(|| StorageError::not_found("staff", id))
    }

    pub fn set_staff_active(&self, id: Uuid, active: bool) -> Result<(), StorageError> {
        let updated = self.conn()?.execute(
            "UPDATE staff SET is_active = ?1 WHERE id = ?2",
            params![active, id.to_string()],
        )?;
        if updated == 0 {
            return Err(StorageError::not_found("staff", id));
        }
        tracing::info!(staff_id = %id, active, "staff activation changed");
        Ok(())
    }
}

fn staff_from_row(row: &Row<'_>) -> rusqlite::Result<Staff> {
    Ok(Staff {
        id: db::parsed_column(row, "id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        role: db::parsed_column(row, "role")?,
        is_active: row.get("is_active")?,
        password_hash: row.get("password_hash")?,
        created_at: db::timestamp_column(row, "created_at")?,
    })
}

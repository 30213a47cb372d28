use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidField(
                "Sex must be male, female, or other".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: u8,
    pub sex: Sex,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Untrusted patient fields as submitted by a client.
///
/// Used for both registration and partial updates; see
/// [`crate::validation`] for the rules applied to each.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A validated registration.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub age: u8,
    pub sex: Sex,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientChanges {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub sex: Option<Sex>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl PatientChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.sex.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }

    pub fn apply(self, patient: &mut Patient) {
        if let Some(name) = self.name {
            patient.name = name;
        }
        if let Some(age) = self.age {
            patient.age = age;
        }
        if let Some(sex) = self.sex {
            patient.sex = sex;
        }
        if let Some(phone) = self.phone {
            patient.phone = Some(phone).filter(|p| !p.is_empty());
        }
        if let Some(email) = self.email {
            patient.email = Some(email).filter(|e| !e.is_empty());
        }
    }
}

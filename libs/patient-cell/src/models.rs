use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::services::validation::ValidationIssue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationIssue::InvalidFormat {
                field: "gender",
                expected: "Male or Female",
            }),
        }
    }
}

/// Raw input of the "Add New Patient" form.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePatientForm {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub blood_type: String,
    pub contact_phone: String,
    pub contact_email: String,
    /// Comma separated, e.g. "Diabetes, Hypertension".
    pub medical_history: String,
    /// Name only; the title is added when the payload is built.
    pub doctor_assigned: String,
}

impl Default for CreatePatientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 1,
            gender: Gender::Male,
            blood_type: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            medical_history: String::new(),
            doctor_assigned: String::new(),
        }
    }
}

/// Raw input of the "Update Patient" form.
///
/// Text fields left empty are unchanged. Age and gender are unchanged when `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePatientForm {
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub blood_type: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub medical_history: String,
    pub doctor_assigned: String,
}

/// Body of `POST /create_patients`. Absent optionals are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub blood_type: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    #[serde(rename = "Medical_History", alias = "medical_history")]
    pub medical_history: Option<Vec<String>>,
    pub doctor_assigned: String,
}

/// Body of `PUT /patients/{id}`. Only fields that are `Some` go on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(
        rename = "Medical_History",
        alias = "medical_history",
        skip_serializing_if = "Option::is_none"
    )]
    pub medical_history: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_assigned: Option<String>,
}

impl PatientUpdate {
    pub fn is_empty(&self) -> bool {
        *self == PatientUpdate::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Age,
    Gender,
    BloodType,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Age, SortField::Gender, SortField::BloodType];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Age => "age",
            SortField::Gender => "gender",
            SortField::BloodType => "blood_type",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s.trim())
            .ok_or(ValidationIssue::InvalidFormat {
                field: "sort_by",
                expected: "one of age, gender, blood_type",
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ValidationIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ValidationIssue::InvalidFormat {
                field: "order",
                expected: "asc or desc",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortQuery {
    pub sort_by: SortField,
    pub order: SortOrder,
}

/// Response of `GET /sort_patient`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortedPatients {
    #[serde(default)]
    pub sorted_patients: Vec<serde_json::Value>,
}

use thiserror::Error;

use crate::models::{CreatePatientForm, NewPatient, PatientUpdate, UpdatePatientForm};

/// Title put in front of the doctor's name before it is sent.
pub const DOCTOR_TITLE: &str = "Dr ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Please provide at least one field to update.")]
    NothingToUpdate,
}

/// Splits comma separated conditions and trims each one.
///
/// Empty entries from doubled or trailing commas are kept.
pub fn parse_medical_history(raw: &str) -> Vec<String> {
    raw.split(',').map(|entry| entry.trim().to_string()).collect()
}

/// `None` when the doctor's name is blank.
pub fn titled_doctor(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() {
        None
    } else {
        Some(format!("{DOCTOR_TITLE}{name}"))
    }
}

fn non_empty(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

pub fn build_create_payload(form: &CreatePatientForm) -> NewPatient {
    NewPatient {
        name: form.name.clone(),
        age: form.age,
        gender: form.gender,
        blood_type: form.blood_type.clone(),
        contact_phone: form.contact_phone.clone(),
        contact_email: non_empty(&form.contact_email),
        medical_history: (!form.medical_history.is_empty())
            .then(|| parse_medical_history(&form.medical_history)),
        doctor_assigned: titled_doctor(&form.doctor_assigned).unwrap_or_default(),
    }
}

pub fn build_update_payload(form: &UpdatePatientForm) -> Result<PatientUpdate, PayloadError> {
    let update = PatientUpdate {
        name: non_empty(&form.name),
        age: form.age,
        gender: form.gender,
        blood_type: non_empty(&form.blood_type),
        contact_phone: non_empty(&form.contact_phone),
        contact_email: non_empty(&form.contact_email),
        medical_history: (!form.medical_history.is_empty())
            .then(|| parse_medical_history(&form.medical_history)),
        doctor_assigned: titled_doctor(&form.doctor_assigned),
    };

    if update.is_empty() {
        return Err(PayloadError::NothingToUpdate);
    }

    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::models::Gender;

    fn create_form() -> CreatePatientForm {
        CreatePatientForm {
            name: "Ada Lovelace".to_string(),
            age: 36,
            gender: Gender::Female,
            blood_type: "A+".to_string(),
            contact_phone: "555-0100".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_history_is_split_and_trimmed() {
        let form = CreatePatientForm {
            medical_history: "Diabetes, Hypertension".to_string(),
            ..create_form()
        };
        let payload = build_create_payload(&form);

        assert_eq!(
            payload.medical_history,
            Some(vec!["Diabetes".to_string(), "Hypertension".to_string()])
        );
    }

    #[test]
    fn test_history_keeps_empty_entries() {
        assert_eq!(parse_medical_history("a,,b,"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_create_payload_wire_shape() {
        let form = CreatePatientForm {
            contact_email: "ada@example.org".to_string(),
            medical_history: "Asthma".to_string(),
            doctor_assigned: "  House ".to_string(),
            ..create_form()
        };

        assert_eq!(
            serde_json::to_value(build_create_payload(&form)).unwrap(),
            json!({
                "name": "Ada Lovelace",
                "age": 36,
                "gender": "Female",
                "blood_type": "A+",
                "contact_phone": "555-0100",
                "contact_email": "ada@example.org",
                "Medical_History": ["Asthma"],
                "doctor_assigned": "Dr House"
            })
        );
    }

    #[test]
    fn test_create_payload_sends_null_for_missing_optionals() {
        let value = serde_json::to_value(build_create_payload(&create_form())).unwrap();

        assert_eq!(value["contact_email"], json!(null));
        assert_eq!(value["Medical_History"], json!(null));
        assert_eq!(value["doctor_assigned"], json!(""));
    }

    #[test]
    fn test_update_with_nothing_changed_is_rejected() {
        assert_eq!(
            build_update_payload(&UpdatePatientForm::default()),
            Err(PayloadError::NothingToUpdate)
        );
    }

    #[test]
    fn test_update_with_single_field() {
        let form = UpdatePatientForm {
            blood_type: "O-".to_string(),
            ..Default::default()
        };
        let payload = build_update_payload(&form).unwrap();

        assert_eq!(serde_json::to_value(payload).unwrap(), json!({"blood_type": "O-"}));
    }

    #[test]
    fn test_update_includes_explicit_floor_age() {
        let form = UpdatePatientForm { age: Some(1), ..Default::default() };
        let payload = build_update_payload(&form).unwrap();

        assert_eq!(serde_json::to_value(payload).unwrap(), json!({"age": 1}));
    }

    #[test]
    fn test_update_titles_doctor_and_parses_history() {
        let form = UpdatePatientForm {
            gender: Some(Gender::Male),
            medical_history: "Flu ,Cold".to_string(),
            doctor_assigned: "Watson".to_string(),
            ..Default::default()
        };
        let payload = build_update_payload(&form).unwrap();

        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({
                "gender": "Male",
                "Medical_History": ["Flu", "Cold"],
                "doctor_assigned": "Dr Watson"
            })
        );
    }

    #[test]
    fn test_blank_doctor_is_not_a_change() {
        let form = UpdatePatientForm { doctor_assigned: "   ".to_string(), ..Default::default() };
        assert_eq!(build_update_payload(&form), Err(PayloadError::NothingToUpdate));
    }
}

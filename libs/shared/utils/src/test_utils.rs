use serde_json::{json, Value};

use shared_config::AppConfig;

pub struct TestConfig {
    pub api_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl TestConfig {
    /// Points the config at a mock server, e.g. `MockServer::uri()`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            patient_api_base_url: self.api_base_url.clone(),
        }
    }
}

pub struct MockPatientResponses;

impl MockPatientResponses {
    pub fn patient_response(id: &str, name: &str, age: u32, blood_type: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "age": age,
            "gender": "Female",
            "blood_type": blood_type,
            "contact_phone": "555-0100",
            "contact_email": null,
            "Medical_History": ["Asthma"],
            "doctor_assigned": "Dr House"
        })
    }

    pub fn patient_list_response() -> Value {
        json!([
            Self::patient_response("P001", "Ada Lovelace", 36, "A+"),
            Self::patient_response("P002", "Grace Hopper", 85, "O-"),
        ])
    }

    pub fn sorted_patients_response(patients: Value) -> Value {
        json!({ "sorted_patients": patients })
    }

    pub fn message_response(message: &str) -> Value {
        json!({ "message": message })
    }

    pub fn error_response(detail: &str) -> Value {
        json!({ "detail": detail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default().to_app_config();
        assert_eq!(config.api_base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_patient_fixture_shape() {
        let patients = MockPatientResponses::patient_list_response();
        let patients = patients.as_array().unwrap();

        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0]["id"], "P001");
        assert_eq!(patients[1]["blood_type"], "O-");
    }
}

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use shared_client::RestClient;
use shared_config::AppConfig;
use shared_models::error::ApiError;

use crate::models::{NewPatient, PatientUpdate, SortQuery, SortedPatients};

pub struct PatientService {
    client: RestClient,
}

impl PatientService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: RestClient::new(config),
        }
    }

    pub async fn create_patient(&self, patient: &NewPatient) -> Result<Value, ApiError> {
        debug!("Creating new patient record for: {}", patient.name);

        self.client.request(
            Method::POST,
            "/create_patients",
            Some(to_body(patient)?),
        ).await
    }

    pub async fn list_patients(&self) -> Result<Vec<Value>, ApiError> {
        debug!("Fetching all patients");

        self.client.request(Method::GET, "/patients", None).await
    }

    pub async fn sort_patients(&self, query: &SortQuery) -> Result<Vec<Value>, ApiError> {
        debug!("Sorting patients by {} ({})", query.sort_by, query.order);

        let path = format!(
            "/sort_patient?sort_by={}&order={}",
            query.sort_by.as_str(),
            query.order.as_str()
        );
        let sorted: SortedPatients = self.client.request(Method::GET, &path, None).await?;

        Ok(sorted.sorted_patients)
    }

    pub async fn update_patient(
        &self,
        patient_id: &str,
        update: &PatientUpdate,
    ) -> Result<Value, ApiError> {
        debug!("Updating patient record: {}", patient_id);

        let path = format!("/patients/{}", urlencoding::encode(patient_id.trim()));
        self.client.request(Method::PUT, &path, Some(to_body(update)?)).await
    }

    pub async fn delete_patient(&self, patient_id: &str) -> Result<Value, ApiError> {
        debug!("Deleting patient record: {}", patient_id);

        let path = format!("/delete_patient/{}", urlencoding::encode(patient_id.trim()));
        self.client.request(Method::DELETE, &path, None).await
    }
}

fn to_body<T: serde::Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

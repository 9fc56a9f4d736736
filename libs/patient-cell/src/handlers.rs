use serde_json::Value;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::error::ApiError;

use crate::models::{CreatePatientForm, SortQuery, UpdatePatientForm};
use crate::render::Renderer;
use crate::services::payload::{build_create_payload, build_update_payload, PayloadError};
use crate::services::validation::{
    advise_field, check_create_form, check_update_form, validate_patient_id, TextField, ValidationIssue,
};
use crate::services::PatientService;

/// Why an operation stopped before sending a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Invalid(ValidationIssue),
    NothingToUpdate,
}

#[derive(Debug)]
pub enum DashboardOutcome {
    Completed,
    /// Local validation failed; no request was sent.
    Rejected(Rejection),
    /// The request was sent and failed. The failure has already been rendered.
    Failed(ApiError),
}

impl DashboardOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, DashboardOutcome::Completed)
    }
}

/// Runs the five dashboard operations against the patient API.
///
/// Every operation sends at most one request and reports through the renderer.
/// Failures never escape as errors so the dashboard stays usable for the next action.
pub struct Dashboard<R: Renderer> {
    service: PatientService,
    renderer: R,
}

impl<R: Renderer> Dashboard<R> {
    pub fn new(config: &AppConfig, renderer: R) -> Self {
        Self {
            service: PatientService::new(config),
            renderer,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Checks one field as it is entered and shows any problem as an advisory.
    /// Nothing is sent; the blocking check still runs on submit.
    pub fn advise(&mut self, field: TextField, value: &str) -> Option<ValidationIssue> {
        let issue = advise_field(field, value)?;
        self.renderer.advisory(&issue.to_string());
        Some(issue)
    }

    pub async fn create_patient(&mut self, form: &CreatePatientForm) -> DashboardOutcome {
        if let Err(issue) = check_create_form(form) {
            return self.reject(Rejection::Invalid(issue));
        }

        let payload = build_create_payload(form);
        match self.service.create_patient(&payload).await {
            Ok(_) => {
                info!("Patient created: {}", payload.name);
                self.renderer.success("Patient added successfully!");
                DashboardOutcome::Completed
            }
            Err(error) => self.report_failure(error, "Server error", "Unknown error"),
        }
    }

    pub async fn list_patients(&mut self) -> DashboardOutcome {
        match self.service.list_patients().await {
            Ok(patients) => self.show(&patients),
            Err(error) => self.report_failure(error, "Could not load patients", "no details from server"),
        }
    }

    pub async fn sort_patients(&mut self, query: &SortQuery) -> DashboardOutcome {
        match self.service.sort_patients(query).await {
            Ok(patients) => self.show(&patients),
            Err(error) => self.report_failure(error, "Sort failed", "Something went wrong"),
        }
    }

    pub async fn update_patient(&mut self, patient_id: &str, form: &UpdatePatientForm) -> DashboardOutcome {
        if let Err(issue) = validate_patient_id(patient_id).and_then(|_| check_update_form(form)) {
            return self.reject(Rejection::Invalid(issue));
        }

        let update = match build_update_payload(form) {
            Ok(update) => update,
            Err(PayloadError::NothingToUpdate) => return self.reject(Rejection::NothingToUpdate),
        };

        match self.service.update_patient(patient_id, &update).await {
            Ok(_) => {
                info!("Patient updated: {}", patient_id);
                self.renderer.success("Patient updated successfully!");
                DashboardOutcome::Completed
            }
            Err(error) => self.report_failure(error, "Error", "Unknown error"),
        }
    }

    pub async fn delete_patient(&mut self, patient_id: &str) -> DashboardOutcome {
        if let Err(issue) = validate_patient_id(patient_id) {
            return self.reject(Rejection::Invalid(issue));
        }

        match self.service.delete_patient(patient_id).await {
            Ok(_) => {
                info!("Patient deleted: {}", patient_id);
                self.renderer.success("Patient deleted successfully!");
                DashboardOutcome::Completed
            }
            Err(error) => self.report_failure(error, "Error", "Unknown error"),
        }
    }

    fn show(&mut self, patients: &[Value]) -> DashboardOutcome {
        debug!("Rendering {} patient records", patients.len());
        self.renderer.table(patients);
        DashboardOutcome::Completed
    }

    fn reject(&mut self, rejection: Rejection) -> DashboardOutcome {
        let message = match &rejection {
            Rejection::Invalid(issue) => issue.to_string(),
            Rejection::NothingToUpdate => PayloadError::NothingToUpdate.to_string(),
        };
        debug!("Request not sent: {}", message);
        self.renderer.warning(&message);
        DashboardOutcome::Rejected(rejection)
    }

    fn report_failure(&mut self, error: ApiError, context: &str, fallback: &str) -> DashboardOutcome {
        let message = match &error {
            ApiError::Remote { body, .. } => format!("{}: {}", context, body.message_or(fallback)),
            ApiError::Transport(cause) => format!("Request failed: {}", cause),
            ApiError::Decode(cause) => format!("{}: unexpected response from server ({})", context, cause),
            ApiError::Encode(cause) => format!("{}: could not prepare request ({})", context, cause),
        };
        self.renderer.error(&message);
        DashboardOutcome::Failed(error)
    }
}

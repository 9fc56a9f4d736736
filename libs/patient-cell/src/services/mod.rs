pub mod patient;
pub mod payload;
pub mod validation;

pub use patient::PatientService;

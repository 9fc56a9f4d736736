use clap::{Parser, Subcommand};

use patient_cell::models::{CreatePatientForm, Gender, SortField, SortOrder, SortQuery, UpdatePatientForm};

#[derive(Parser)]
#[command(name = "patient-dashboard")]
#[command(version)]
#[command(about = "Add, view, sort, update and delete patient records", long_about = None)]
pub struct Cli {
    /// Patient API base URL (overrides PATIENT_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print patient tables as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new patient
    Create {
        /// Letters and spaces only
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value_t = 1)]
        age: u32,

        #[arg(long, default_value = "Male")]
        gender: Gender,

        /// e.g. A+, O-
        #[arg(long, default_value = "")]
        blood_type: String,

        /// Digits and '-' only
        #[arg(long = "phone", default_value = "")]
        contact_phone: String,

        #[arg(long = "email", default_value = "")]
        contact_email: String,

        /// Comma separated, e.g. "Diabetes, Hypertension"
        #[arg(long = "history", default_value = "")]
        medical_history: String,

        /// Name only; "Dr" is added automatically
        #[arg(long = "doctor", default_value = "")]
        doctor_assigned: String,
    },

    /// Show all patients
    List,

    /// Show patients sorted by a field
    Sort {
        #[arg(long, default_value = "age")]
        sort_by: SortField,

        #[arg(long, default_value = "asc")]
        order: SortOrder,
    },

    /// Change selected fields of a patient
    Update {
        /// Patient ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        gender: Option<Gender>,

        #[arg(long)]
        blood_type: Option<String>,

        #[arg(long = "phone")]
        contact_phone: Option<String>,

        #[arg(long = "email")]
        contact_email: Option<String>,

        #[arg(long = "history")]
        medical_history: Option<String>,

        #[arg(long = "doctor")]
        doctor_assigned: Option<String>,
    },

    /// Delete a patient
    Delete {
        /// Patient ID
        id: String,
    },

    /// Interactive menu
    Menu,
}

/// A one-shot operation, with its form already filled in from the arguments.
pub enum Operation {
    Create(CreatePatientForm),
    List,
    Sort(SortQuery),
    Update { id: String, form: UpdatePatientForm },
    Delete { id: String },
}

impl Commands {
    /// `None` for the interactive menu.
    pub fn into_operation(self) -> Option<Operation> {
        let operation = match self {
            Commands::Create {
                name,
                age,
                gender,
                blood_type,
                contact_phone,
                contact_email,
                medical_history,
                doctor_assigned,
            } => Operation::Create(CreatePatientForm {
                name,
                age,
                gender,
                blood_type,
                contact_phone,
                contact_email,
                medical_history,
                doctor_assigned,
            }),
            Commands::List => Operation::List,
            Commands::Sort { sort_by, order } => Operation::Sort(SortQuery { sort_by, order }),
            Commands::Update {
                id,
                name,
                age,
                gender,
                blood_type,
                contact_phone,
                contact_email,
                medical_history,
                doctor_assigned,
            } => Operation::Update {
                id,
                form: UpdatePatientForm {
                    name: name.unwrap_or_default(),
                    age,
                    gender,
                    blood_type: blood_type.unwrap_or_default(),
                    contact_phone: contact_phone.unwrap_or_default(),
                    contact_email: contact_email.unwrap_or_default(),
                    medical_history: medical_history.unwrap_or_default(),
                    doctor_assigned: doctor_assigned.unwrap_or_default(),
                },
            },
            Commands::Delete { id } => Operation::Delete { id },
            Commands::Menu => return None,
        };
        Some(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("patient-dashboard").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_create_arguments_fill_form() {
        let cli = parse(&[
            "create", "--name", "Ada Lovelace", "--age", "36", "--gender", "female",
            "--blood-type", "A+", "--phone", "555-0100", "--history", "Asthma, Flu",
        ]);

        let Some(Operation::Create(form)) = cli.command.and_then(Commands::into_operation) else {
            panic!("expected a create operation");
        };
        assert_eq!(form.name, "Ada Lovelace");
        assert_eq!(form.age, 36);
        assert_eq!(form.gender, Gender::Female);
        assert_eq!(form.contact_email, "");
        assert_eq!(form.medical_history, "Asthma, Flu");
    }

    #[test]
    fn test_update_leaves_unset_fields_unchanged() {
        let cli = parse(&["--base-url", "http://localhost:8000", "update", "P001", "--blood-type", "O-"]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));

        let Some(Operation::Update { id, form }) = cli.command.and_then(Commands::into_operation) else {
            panic!("expected an update operation");
        };
        assert_eq!(id, "P001");
        assert_eq!(
            form,
            UpdatePatientForm { blood_type: "O-".to_string(), ..Default::default() }
        );
    }

    #[test]
    fn test_sort_rejects_unknown_field() {
        let result = Cli::try_parse_from(["patient-dashboard", "sort", "--sort-by", "name"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sort_defaults() {
        let cli = parse(&["sort", "--json"]);
        assert!(cli.json);
        let Some(Operation::Sort(query)) = cli.command.and_then(Commands::into_operation) else {
            panic!("expected a sort operation");
        };
        assert_eq!(query, SortQuery { sort_by: SortField::Age, order: SortOrder::Asc });
    }
}

use dialoguer::{theme::ColorfulTheme, Input, Select};

use patient_cell::handlers::Dashboard;
use patient_cell::models::{CreatePatientForm, Gender, SortField, SortOrder, SortQuery, UpdatePatientForm};
use patient_cell::render::Renderer;
use patient_cell::router::MenuChoice;
use patient_cell::services::validation::{validate_age, TextField};

/// Interactive loop: pick an operation, fill in its form, repeat until Quit.
///
/// Fields are checked as soon as they are entered; problems are shown but do
/// not stop the form. The dashboard repeats the same checks before sending.
pub async fn run<R: Renderer>(dashboard: &mut Dashboard<R>) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let labels: Vec<&str> = MenuChoice::ALL.iter().map(MenuChoice::label).collect();

    loop {
        let index = Select::with_theme(&theme)
            .with_prompt("Menu")
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuChoice::from_index(index) {
            Some(MenuChoice::AddPatient) => {
                let form = prompt_create_form(&theme, dashboard)?;
                dashboard.create_patient(&form).await;
            }
            Some(MenuChoice::ViewAll) => {
                dashboard.list_patients().await;
            }
            Some(MenuChoice::SortPatients) => {
                let query = prompt_sort_query(&theme)?;
                dashboard.sort_patients(&query).await;
            }
            Some(MenuChoice::UpdatePatient) => {
                let id = prompt_patient_id(&theme, "Enter Patient ID")?;
                let form = prompt_update_form(&theme, dashboard)?;
                dashboard.update_patient(&id, &form).await;
            }
            Some(MenuChoice::DeletePatient) => {
                let id = prompt_patient_id(&theme, "Enter Patient ID to Delete")?;
                dashboard.delete_patient(&id).await;
            }
            Some(MenuChoice::Quit) | None => return Ok(()),
        }
    }
}

/// Reads a free-text field and shows any advisory problem right away.
fn advised_text<R: Renderer>(
    theme: &ColorfulTheme,
    dashboard: &mut Dashboard<R>,
    prompt: &str,
    field: TextField,
) -> dialoguer::Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    dashboard.advise(field, &value);
    Ok(value)
}

fn plain_text(theme: &ColorfulTheme, prompt: &str) -> dialoguer::Result<String> {
    Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
}

fn prompt_patient_id(theme: &ColorfulTheme, prompt: &str) -> dialoguer::Result<String> {
    plain_text(theme, prompt)
}

fn prompt_create_form<R: Renderer>(
    theme: &ColorfulTheme,
    dashboard: &mut Dashboard<R>,
) -> dialoguer::Result<CreatePatientForm> {
    let name = advised_text(theme, dashboard, "Name", TextField::Name)?;
    let age: u32 = Input::with_theme(theme)
        .with_prompt("Age")
        .default(1)
        .validate_with(|age: &u32| validate_age(*age))
        .interact_text()?;
    let gender = Gender::ALL[Select::with_theme(theme)
        .with_prompt("Gender")
        .items(&Gender::ALL)
        .default(0)
        .interact()?];
    let blood_type = advised_text(theme, dashboard, "Blood Type (e.g. A+, O-)", TextField::BloodType)?;
    let contact_phone = advised_text(theme, dashboard, "Contact Phone", TextField::Phone)?;
    let contact_email = advised_text(theme, dashboard, "Contact Email (optional)", TextField::Email)?;
    let doctor_assigned = plain_text(theme, "Doctor Assigned (name only, Dr is added automatically)")?;
    let medical_history = plain_text(theme, "Medical History (comma separated)")?;

    Ok(CreatePatientForm {
        name,
        age,
        gender,
        blood_type,
        contact_phone,
        contact_email,
        medical_history,
        doctor_assigned,
    })
}

fn prompt_update_form<R: Renderer>(
    theme: &ColorfulTheme,
    dashboard: &mut Dashboard<R>,
) -> dialoguer::Result<UpdatePatientForm> {
    let name = advised_text(theme, dashboard, "New Name (optional)", TextField::Name)?;
    let age: String = Input::with_theme(theme)
        .with_prompt("New Age (optional)")
        .allow_empty(true)
        .validate_with(|raw: &String| -> Result<(), String> {
            if raw.trim().is_empty() {
                return Ok(());
            }
            let age = raw.trim().parse::<u32>().map_err(|_| "Age must be a whole number".to_string())?;
            validate_age(age).map_err(|issue| issue.to_string())
        })
        .interact_text()?;
    let age = age.trim().parse::<u32>().ok();

    let gender_choices = ["(unchanged)", "Male", "Female"];
    let gender = match Select::with_theme(theme)
        .with_prompt("New Gender (optional)")
        .items(&gender_choices)
        .default(0)
        .interact()?
    {
        0 => None,
        index => Gender::ALL.get(index - 1).copied(),
    };

    let blood_type = advised_text(theme, dashboard, "New Blood Type (optional)", TextField::BloodType)?;
    let contact_phone = advised_text(theme, dashboard, "New Contact Phone (optional)", TextField::Phone)?;
    let contact_email = advised_text(theme, dashboard, "New Contact Email (optional)", TextField::Email)?;
    let medical_history = plain_text(theme, "New Medical History (comma separated, optional)")?;
    let doctor_assigned = plain_text(theme, "New Doctor Assigned (optional)")?;

    Ok(UpdatePatientForm {
        name,
        age,
        gender,
        blood_type,
        contact_phone,
        contact_email,
        medical_history,
        doctor_assigned,
    })
}

fn prompt_sort_query(theme: &ColorfulTheme) -> dialoguer::Result<SortQuery> {
    let sort_by = SortField::ALL[Select::with_theme(theme)
        .with_prompt("Sort by")
        .items(&SortField::ALL)
        .default(0)
        .interact()?];
    let order = SortOrder::ALL[Select::with_theme(theme)
        .with_prompt("Order")
        .items(&SortOrder::ALL)
        .default(0)
        .interact()?];

    Ok(SortQuery { sort_by, order })
}

use std::fmt;

/// Entries of the dashboard's navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPatient,
    ViewAll,
    SortPatients,
    UpdatePatient,
    DeletePatient,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddPatient,
        MenuChoice::ViewAll,
        MenuChoice::SortPatients,
        MenuChoice::UpdatePatient,
        MenuChoice::DeletePatient,
        MenuChoice::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddPatient => "Add Patient",
            MenuChoice::ViewAll => "View All",
            MenuChoice::SortPatients => "Sort Patients",
            MenuChoice::UpdatePatient => "Update Patient",
            MenuChoice::DeletePatient => "Delete Patient",
            MenuChoice::Quit => "Quit",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

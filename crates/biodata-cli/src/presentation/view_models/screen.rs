use biodata_types::{Field, ViewName};
use serde::Serialize;

/// Everything needed to draw one screen: navigation bar plus the active view
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub nav: NavViewModel,
    pub body: ScreenBody,
}

impl ScreenViewModel {
    pub fn view(&self) -> ViewName {
        match self.body {
            ScreenBody::Home(_) => ViewName::Home,
            ScreenBody::Profile(_) => ViewName::Profile,
            ScreenBody::Edit(_) => ViewName::Edit,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ScreenBody {
    Home(HomeViewModel),
    Profile(ProfileViewModel),
    Edit(EditFormViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct NavViewModel {
    pub items: Vec<NavItemViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItemViewModel {
    pub view: ViewName,
    pub label: String,
    pub path: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeViewModel {
    pub title: String,
    pub rows: Vec<RecordRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordRowViewModel {
    pub field: Field,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileViewModel {
    pub title: String,
    pub name: String,
    pub about: String,
    /// None when the record has no picture
    pub picture_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditFormViewModel {
    pub title: String,
    pub state: String,
    pub fields: Vec<FormFieldViewModel>,
    pub error_count: usize,
    pub submit_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormFieldViewModel {
    pub field: Field,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub focused: bool,
}

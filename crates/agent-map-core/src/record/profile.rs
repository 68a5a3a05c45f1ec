use serde::{Deserialize, Serialize};

/// Contact details shown above the grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub manager: String,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Partial profile edit; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub manager: Option<String>,
}

impl ProfileUpdate {
    pub fn apply(&self, profile: &mut Profile) {
        if let Some(name) = &self.name {
            profile.name = name.trim().to_string();
        }
        if let Some(mobile) = &self.mobile {
            profile.mobile = mobile.trim().to_string();
        }
        if let Some(email) = &self.email {
            profile.email = email.trim().to_string();
        }
        if let Some(manager) = &self.manager {
            profile.manager = manager.trim().to_string();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.mobile.is_none() && self.email.is_none() && self.manager.is_none()
    }
}

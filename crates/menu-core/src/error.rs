use thiserror::Error;

/// A required element could not be found when binding the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("navigation toggle not found: no element matches `{selector}`")]
    MissingTrigger { selector: String },
    #[error("navigation menu not found: no element matches `{selector}`")]
    MissingContainer { selector: String },
}

impl BindingError {
    pub fn selector(&self) -> &str {
        match self {
            Self::MissingTrigger { selector } | Self::MissingContainer { selector } => {
                selector.as_str()
            }
        }
    }
}

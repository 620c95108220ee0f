#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid value for {field}: '{value}'")]
    Validation { field: &'static str, value: String },

    #[error("The tags limit of {limit} items is exceeded")]
    TagLimitExceeded { limit: usize },

    #[error("Invalid video parameters: {0}")]
    Parameters(#[from] serde_json::Error),
}

impl CoreError {
    /// Build a [`CoreError::Validation`] for `field`, rendering the rejected value.
    pub fn validation(field: &'static str, value: impl ToString) -> Self {
        let value = value.to_string();
        tracing::debug!(field, value = %value, "Rejected video field");
        Self::Validation { field, value }
    }
}

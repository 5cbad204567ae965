use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormplotError {
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Render error: {0}")]
    Render(String),
}

impl NormplotError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        NormplotError::InvalidParameter {
            message: message.into(),
        }
    }
}

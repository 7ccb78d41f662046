use thiserror::Error;

/// Why a submission attempt ended without sending anything.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("email address did not pass verification")]
    InvalidEmail,
    #[error("email relay rejected the message")]
    DeliveryRejected,
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
}

impl ContactError {
    /// Text shown in the error toast.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::InvalidEmail => "Please enter a valid email address".to_string(),
            ContactError::DeliveryRejected => {
                "Failed to send the message, please try again".to_string()
            }
            ContactError::MissingField(field) => format!("Please fill in your {}", field),
        }
    }
}

/// Failure talking to the verification API. Always treated as an invalid address.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("verification request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

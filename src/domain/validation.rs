use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    SingleRecipientRequired { operation: &'static str },
    MultipleRecipientsRequired { operation: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::SingleRecipientRequired { operation } => {
                write!(f, "{operation} accepts a single-recipient request only")
            }
            Self::MultipleRecipientsRequired { operation } => {
                write!(f, "{operation} accepts a multiple-recipients request only")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

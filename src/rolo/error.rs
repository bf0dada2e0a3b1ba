use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Name cannot be blank")]
    NameFormat,

    #[error("Wrong phone format {0}: expected exactly 10 digits")]
    PhoneFormat(String),

    #[error("Invalid email format: {0}")]
    EmailFormat(String),

    #[error("Invalid date format {0}: use DD.MM.YYYY")]
    DateFormat(String),

    #[error("Birthday window {0} is not a whole number of days between {min} and {max}", min = crate::book::WINDOW_MIN_DAYS, max = crate::book::WINDOW_MAX_DAYS)]
    RangeFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;

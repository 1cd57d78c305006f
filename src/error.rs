use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse roster JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Volunteer '{0}' has not signed up for a job yet")]
    NotSignedUp(String),

    #[error("Job '{job}' does not offer the shift '{shift}'")]
    ShiftNotOffered { job: String, shift: String },

    #[error("Job '{job}' lists the shift '{shift}' more than once")]
    RepeatedShift { job: String, shift: String },

    #[error("No shift labelled '{0}' exists in the roster")]
    UnknownShift(String),

    #[error("The roster offers no jobs")]
    NoJobs,

    #[error("No job named '{0}' exists in the roster")]
    UnknownJob(String),

    #[error("No volunteer named '{0}' exists in the roster")]
    UnknownVolunteer(String),

    #[error("Job '{0}' is listed more than once")]
    DuplicateJob(String),

    #[error("Volunteer '{0}' is listed more than once")]
    DuplicateVolunteer(String),
}

pub type Result<T> = std::result::Result<T, Error>;

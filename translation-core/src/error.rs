use thiserror::Error;

/// Errors reported back to the caller in the protocol error envelope
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("payload.{0} is required")]
    MissingField(&'static str),

    #[error("invalid payload.{field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("payload.modified_timestamp must be an integer")]
    InvalidTimestamp,

    #[error("unknown command")]
    UnknownCommand(String),
}

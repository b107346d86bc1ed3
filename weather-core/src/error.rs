use thiserror::Error;

/// Structural failure while mapping provider JSON onto a domain entity.
///
/// A payload that decodes but breaks a business rule is not an error; that
/// case is reported by [`crate::model::Validatable::is_valid`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected a JSON object for {0}")]
    NotAnObject(&'static str),

    #[error("invalid value for field '{key}': {source}")]
    InvalidField {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("field '{key}' is not an integer: {value}")]
    NotNumeric { key: String, value: String },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a finder request. The model layer never interprets these.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("request to weather provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("weather provider responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode provider response: {0}")]
    Decode(#[from] DecodeError),

    #[error("coordinate out of range: lat={lat:?}, lon={lon:?}")]
    InvalidCoordinate { lat: Option<f64>, lon: Option<f64> },
}

use std::error::Error;
use std::fmt;

/// Failure of a geocoding call. A response that parses but names no location
/// is not an error; see [`crate::geocoder::Location::is_resolved`].
#[derive(Debug)]
pub enum GeocodeError {
    Config(String),
    Network(String),
    Status { status: u16, body: String },
    JsonParse(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Config(msg) => write!(f, "Geocoder config error: {msg}"),
            GeocodeError::Network(msg) => write!(f, "Network error: {msg}"),
            GeocodeError::Status { status, body } => write!(f, "Geocoder HTTP {status}: {body}"),
            GeocodeError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl Error for GeocodeError {}

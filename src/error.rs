use std::fmt;

#[derive(Debug)]
pub enum CliError {
    Http(reqwest::Error),
    Registry(String),
    InvalidObject(String),
    BaseFile(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Xml(quick_xml::DeError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Http(e) => write!(f, "HTTP error: {e}"),
            CliError::Registry(msg) => write!(f, "Registry error: {msg}"),
            CliError::InvalidObject(msg) => write!(f, "Object error: {msg}"),
            CliError::BaseFile(msg) => write!(f, "Base file error: {msg}"),
            CliError::Io(e) => write!(f, "IO error: {e}"),
            CliError::Json(e) => write!(f, "JSON error: {e}"),
            CliError::Xml(e) => write!(f, "XML error: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        CliError::Http(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<quick_xml::DeError> for CliError {
    fn from(e: quick_xml::DeError) -> Self {
        CliError::Xml(e)
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

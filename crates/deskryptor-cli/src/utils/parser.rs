use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Dataset source cannot be empty.")]
    EmptySource,

    #[error("Invalid URL '{0}'. Expected 'http://host/path' or 'https://host/path'.")]
    InvalidUrl(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidAssignment(String),
}

/// Where the three dataset documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    Directory(PathBuf),
    /// Base URL without a trailing slash.
    Remote(String),
}

/// Interprets a `data.source` value. Anything with an http(s) scheme is a remote base URL,
/// everything else is a directory path.
pub fn parse_location(source: &str) -> Result<DatasetLocation, ParseError> {
    let source = source.trim();
    if source.is_empty() {
        return Err(ParseError::EmptySource);
    }

    let lower = source.to_ascii_lowercase();
    for scheme in ["http://", "https://"] {
        if let Some(rest) = lower.strip_prefix(scheme) {
            if rest.trim_matches('/').is_empty() {
                return Err(ParseError::InvalidUrl(source.to_string()));
            }
            return Ok(DatasetLocation::Remote(
                source.trim_end_matches('/').to_string(),
            ));
        }
    }

    Ok(DatasetLocation::Directory(PathBuf::from(source)))
}

/// Splits a `KEY=VALUE` override at the first `=`.
pub fn parse_assignment(pair: &str) -> Result<(&str, &str), ParseError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(ParseError::InvalidAssignment(pair.to_string())),
    }
}

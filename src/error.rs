//! Error types for malpip-assistant

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a rule table. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum RuleStoreError {
    #[error("cannot open rule table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed rule table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{table} table is missing required column '{column}'")]
    MissingColumn { table: &'static str, column: &'static str },

    #[error("{table} table row {row} has no value for '{column}'")]
    MissingField {
        table: &'static str,
        row: usize,
        column: &'static str,
    },

    #[error("{table} table row {row} has {found} fields, header has {expected}")]
    ExtraFields {
        table: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{table} table contains duplicate id '{id}' (row {row})")]
    DuplicateId {
        table: &'static str,
        id: String,
        row: usize,
    },
}

/// Errors raised by an explanation client.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("API key not set (expected environment variable {0})")]
    MissingApiKey(String),

    #[error("cannot connect to {0}")]
    Connection(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("cannot parse model response: {0}")]
    ResponseParsing(String),

    #[error("model returned no content")]
    EmptyResponse,
}

//! Rule table loading
//!
//! Reads rule tables from CSV files once at startup. Any missing file,
//! missing column, short or over-long row, or duplicate identifier aborts
//! the load; a table is never partially loaded.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::Config;
use crate::error::RuleStoreError;
use crate::rules::{InteractionRule, MalpipRule, RuleSet, RuleTable, TableRow};

/// Load every rule table named by the configuration
pub fn load(config: &Config) -> Result<RuleSet, RuleStoreError> {
    let malpip = load_table::<MalpipRule>(&config.malpip_path())?;

    match config.ddi_path() {
        Some(path) => {
            let interactions = load_table::<InteractionRule>(&path)?;
            Ok(RuleSet::combined(malpip, interactions))
        }
        None => Ok(RuleSet::malpip_only(malpip)),
    }
}

/// Load a single rule table from a CSV file
pub fn load_table<R: TableRow>(path: &Path) -> Result<RuleTable<R>, RuleStoreError> {
    let file = File::open(path).map_err(|source| RuleStoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_table(file).map_err(|e| match e {
        LoadError::Csv(source) => RuleStoreError::Csv {
            path: path.to_path_buf(),
            source,
        },
        LoadError::Store(e) => e,
    })?;

    tracing::info!(
        table = R::TABLE,
        path = %path.display(),
        rows = table.len(),
        "loaded rule table"
    );

    Ok(table)
}

/// Read a rule table from any CSV source
pub fn read_table<R: TableRow, T: Read>(source: T) -> Result<RuleTable<R>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    // Map each required column to its position in the header row
    let headers = reader.headers()?.clone();
    let mut positions = Vec::with_capacity(R::COLUMNS.len());
    for &column in R::COLUMNS {
        let position = headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}') == column)
            .ok_or(RuleStoreError::MissingColumn {
                table: R::TABLE,
                column,
            })?;
        positions.push(position);
    }

    let mut rows = Vec::new();
    let mut seen = HashSet::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 1;

        // An unquoted comma shifts every later field; never load such a row
        if record.len() > headers.len() {
            return Err(RuleStoreError::ExtraFields {
                table: R::TABLE,
                row,
                expected: headers.len(),
                found: record.len(),
            }
            .into());
        }

        let mut fields = Vec::with_capacity(positions.len());
        for (&position, &column) in positions.iter().zip(R::COLUMNS) {
            let value = record.get(position).ok_or(RuleStoreError::MissingField {
                table: R::TABLE,
                row,
                column,
            })?;
            fields.push(value);
        }

        let rule = R::from_fields(&fields);
        if !seen.insert(rule.id().to_string()) {
            return Err(RuleStoreError::DuplicateId {
                table: R::TABLE,
                id: rule.id().to_string(),
                row,
            }
            .into());
        }
        rows.push(rule);
    }

    Ok(RuleTable::new(rows))
}

/// Failure while reading a table from an anonymous source
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Store(#[from] RuleStoreError),
}

//! MALPIP criteria records
//!
//! One row per potentially inappropriate medication criterion.

use serde::Serialize;

use crate::rules::TableRow;

/// A MALPIP criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalpipRule {
    /// Unique identifier for this rule
    pub rule_id: String,

    /// Drug class this criterion applies to
    pub drug_class: String,

    /// Comma-separated example drug names
    pub example_drugs: String,

    /// Clinical statement, shown to the user unmodified
    pub practice_statement_verbatim: String,
}

impl MalpipRule {
    pub fn new(
        rule_id: impl Into<String>,
        drug_class: impl Into<String>,
        example_drugs: impl Into<String>,
        practice_statement_verbatim: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            drug_class: drug_class.into(),
            example_drugs: example_drugs.into(),
            practice_statement_verbatim: practice_statement_verbatim.into(),
        }
    }

    /// Example drug names, trimmed, in listed order. Empty tokens are kept.
    pub fn example_drug_tokens(&self) -> impl Iterator<Item = &str> {
        self.example_drugs.split(',').map(str::trim)
    }
}

impl TableRow for MalpipRule {
    const TABLE: &'static str = "MALPIP";
    const COLUMNS: &'static [&'static str] = &[
        "rule_id",
        "drug_class",
        "example_drugs",
        "practice_statement_verbatim",
    ];

    fn from_fields(fields: &[&str]) -> Self {
        Self::new(fields[0], fields[1], fields[2], fields[3])
    }

    fn id(&self) -> &str {
        &self.rule_id
    }
}

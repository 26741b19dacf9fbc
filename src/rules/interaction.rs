//! Drug-drug interaction records

use serde::Serialize;

use crate::rules::TableRow;

/// A pairwise drug-drug interaction rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionRule {
    /// Unique identifier for this interaction
    pub ddi_id: String,

    /// First participant
    pub drug1: String,

    /// Second participant
    pub drug2: String,

    /// Clinical statement, shown to the user unmodified
    pub interaction_statement_verbatim: String,

    pub severity: String,

    pub recommendation: String,
}

impl InteractionRule {
    pub fn new(
        ddi_id: impl Into<String>,
        drug1: impl Into<String>,
        drug2: impl Into<String>,
        interaction_statement_verbatim: impl Into<String>,
        severity: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            ddi_id: ddi_id.into(),
            drug1: drug1.into(),
            drug2: drug2.into(),
            interaction_statement_verbatim: interaction_statement_verbatim.into(),
            severity: severity.into(),
            recommendation: recommendation.into(),
        }
    }
}

impl TableRow for InteractionRule {
    const TABLE: &'static str = "DDI";
    const COLUMNS: &'static [&'static str] = &[
        "ddi_id",
        "drug1",
        "drug2",
        "interaction_statement_verbatim",
        "severity",
        "recommendation",
    ];

    fn from_fields(fields: &[&str]) -> Self {
        Self::new(fields[0], fields[1], fields[2], fields[3], fields[4], fields[5])
    }

    fn id(&self) -> &str {
        &self.ddi_id
    }
}

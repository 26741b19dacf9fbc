//! Rule tables for malpip-assistant
//!
//! Defines the MALPIP and drug-drug interaction records and the immutable
//! tables that hold them.

pub mod interaction;
pub mod malpip;
pub mod store;

pub use interaction::InteractionRule;
pub use malpip::MalpipRule;

/// A record type that can be read from one row of a rule table.
pub trait TableRow: Sized {
    /// Table name used in log lines and error messages
    const TABLE: &'static str;

    /// Required columns, identifier column first
    const COLUMNS: &'static [&'static str];

    /// Build a record from field values given in `COLUMNS` order
    fn from_fields(fields: &[&str]) -> Self;

    /// Unique identifier of this record
    fn id(&self) -> &str;
}

/// An ordered, read-only table of rules
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable<R> {
    rows: Vec<R>,
}

impl<R> RuleTable<R> {
    /// Create a table from rows, keeping their order
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Create an empty table
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Iterate rows in table order
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a, R> IntoIterator for &'a RuleTable<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// The rule tables loaded for this process.
///
/// The MALPIP table is always present. The interaction table is absent in
/// the single-table variant.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub malpip: RuleTable<MalpipRule>,
    pub interactions: Option<RuleTable<InteractionRule>>,
}

impl RuleSet {
    /// Single-table variant: MALPIP criteria only
    pub fn malpip_only(malpip: RuleTable<MalpipRule>) -> Self {
        Self {
            malpip,
            interactions: None,
        }
    }

    /// Combined variant: MALPIP criteria plus drug-drug interactions
    pub fn combined(
        malpip: RuleTable<MalpipRule>,
        interactions: RuleTable<InteractionRule>,
    ) -> Self {
        Self {
            malpip,
            interactions: Some(interactions),
        }
    }

    /// Whether the interaction table is part of this rule set
    pub fn has_interactions(&self) -> bool {
        self.interactions.is_some()
    }
}

//! MALPIP criteria matching
//!
//! A criterion matches when its drug class, or any one of its example drugs,
//! occurs in the case text.

use crate::engine::common::{contains_term, normalize};
use crate::rules::{MalpipRule, RuleTable};

/// Lowercased trigger terms of one MALPIP row
#[derive(Debug, Clone)]
pub struct MalpipTriggers {
    drug_class: String,
    example_drugs: Vec<String>,
}

impl MalpipTriggers {
    /// Lowercase the trigger fields of a rule
    pub fn compile(rule: &MalpipRule) -> Self {
        Self {
            drug_class: normalize(&rule.drug_class),
            example_drugs: rule
                .example_drug_tokens()
                .map(normalize)
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }

    /// Check normalized case text against these triggers
    pub fn matches(&self, case_text: &str) -> bool {
        contains_term(case_text, &self.drug_class)
            || self
                .example_drugs
                .iter()
                .any(|drug| contains_term(case_text, drug))
    }
}

/// Compile triggers for every row, in table order
pub fn compile(table: &RuleTable<MalpipRule>) -> Vec<MalpipTriggers> {
    table.iter().map(MalpipTriggers::compile).collect()
}

/// Rows of `table` whose triggers occur in normalized `case_text`
pub fn matching_rows<'a>(
    case_text: &str,
    table: &'a RuleTable<MalpipRule>,
    triggers: &[MalpipTriggers],
) -> Vec<&'a MalpipRule> {
    if case_text.is_empty() {
        return Vec::new();
    }

    table
        .iter()
        .zip(triggers)
        .filter(|(_, t)| t.matches(case_text))
        .map(|(rule, _)| rule)
        .collect()
}

/// Match case text against a MALPIP table
pub fn match_rules<'a>(case_text: &str, table: &'a RuleTable<MalpipRule>) -> Vec<&'a MalpipRule> {
    let triggers = compile(table);
    matching_rows(&normalize(case_text), table, &triggers)
}

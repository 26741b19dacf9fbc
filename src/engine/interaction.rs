//! Drug-drug interaction matching
//!
//! An interaction matches only when both participants occur in the case text.

use crate::engine::common::{contains_term, normalize};
use crate::rules::{InteractionRule, RuleTable};

/// Lowercased participants of one interaction row
#[derive(Debug, Clone)]
pub struct InteractionTriggers {
    drug1: String,
    drug2: String,
}

impl InteractionTriggers {
    pub fn compile(rule: &InteractionRule) -> Self {
        Self {
            drug1: normalize(&rule.drug1),
            drug2: normalize(&rule.drug2),
        }
    }

    /// Both participants must be mentioned
    pub fn matches(&self, case_text: &str) -> bool {
        contains_term(case_text, &self.drug1) && contains_term(case_text, &self.drug2)
    }
}

pub fn compile(table: &RuleTable<InteractionRule>) -> Vec<InteractionTriggers> {
    table.iter().map(InteractionTriggers::compile).collect()
}

/// Rows of `table` whose participants both occur in normalized `case_text`
pub fn matching_rows<'a>(
    case_text: &str,
    table: &'a RuleTable<InteractionRule>,
    triggers: &[InteractionTriggers],
) -> Vec<&'a InteractionRule> {
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

/// Match case text against an interaction table
pub fn match_rules<'a>(
    case_text: &str,
    table: &'a RuleTable<InteractionRule>,
) -> Vec<&'a InteractionRule> {
    let triggers = compile(table);
    matching_rows(&normalize(case_text), table, &triggers)
}

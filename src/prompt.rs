//! Prompt composition
//!
//! Turns matched rules and the case text into the single request body sent
//! to the explanation model. Rule statements are copied verbatim.

use crate::engine::MatchReport;
use crate::rules::{InteractionRule, MalpipRule};

/// One context line for a matched MALPIP rule
pub fn malpip_line(rule: &MalpipRule) -> String {
    format!(
        "MALPIP: {} – {}",
        rule.drug_class, rule.practice_statement_verbatim
    )
}

/// One context line for a matched interaction rule
pub fn interaction_line(rule: &InteractionRule) -> String {
    format!(
        "DDI: {} + {} – {} (Severity: {})",
        rule.drug1, rule.drug2, rule.interaction_statement_verbatim, rule.severity
    )
}

/// Newline-joined MALPIP context block; empty when nothing matched
pub fn malpip_context(rules: &[&MalpipRule]) -> String {
    rules
        .iter()
        .map(|r| malpip_line(r))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Newline-joined interaction context block; empty when nothing matched
pub fn interaction_context(rules: &[&InteractionRule]) -> String {
    rules
        .iter()
        .map(|r| interaction_line(r))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the request body for the explanation model.
///
/// The interaction section is present only when the report comes from a
/// rule set with an interaction table. Empty context blocks are still
/// emitted so the model reasons from the case text alone.
pub fn compose(case_text: &str, matches: &MatchReport<'_>) -> String {
    let mut prompt = String::new();

    match &matches.interactions {
        Some(_) => prompt.push_str(
            "You are a clinical assistant using MALPIP criteria and a list of severe DDIs.\n",
        ),
        None => prompt.push_str("You are a clinical assistant using MALPIP criteria.\n"),
    }
    prompt.push_str(&format!("Patient case: {}\n\n", case_text));

    prompt.push_str("Relevant MALPIP rules:\n");
    prompt.push_str(&malpip_context(&matches.malpip));
    prompt.push_str("\n\n");

    match &matches.interactions {
        Some(interactions) => {
            prompt.push_str("Relevant DDIs:\n");
            prompt.push_str(&interaction_context(interactions));
            prompt.push_str("\n\n");
            prompt.push_str(
                "Based on these, explain clearly which medications may be potentially inappropriate and why,\n\
                 and which combinations may be dangerous.\n",
            );
        }
        None => prompt.push_str(
            "Based on these, explain clearly which medications may be potentially inappropriate and why.\n",
        ),
    }

    prompt
}

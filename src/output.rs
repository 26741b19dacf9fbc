//! Report output for malpip-assistant
//!
//! Renders an analysis as a terminal report or as a JSON document.

use serde::Serialize;

use crate::client::redact::redact_secrets;
use crate::engine::MatchReport;
use crate::error::RemoteError;

/// Notice shown when no rule in either table matched
pub const NO_MATCH_NOTICE: &str =
    "No specific MALPIP rules or DDIs matched. The model will still analyze based on context.";

/// Notice shown when the MALPIP-only rule set had no match
pub const NO_MALPIP_MATCH_NOTICE: &str =
    "No specific MALPIP rules matched. The model will still analyze based on context.";

/// Pick the no-match notice for the tables that were searched
pub fn no_match_notice(matches: &MatchReport<'_>) -> &'static str {
    if matches.interactions.is_some() {
        NO_MATCH_NOTICE
    } else {
        NO_MALPIP_MATCH_NOTICE
    }
}

/// Outcome of the explanation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum Explanation {
    /// Text returned by the model
    Generated(String),

    /// The request failed; the message has secrets redacted
    Failed(String),

    /// No request was made (dry run)
    Skipped,
}

impl Explanation {
    /// Record a client failure, redacting any secret it echoes
    pub fn from_error(error: &RemoteError) -> Self {
        let message = redact_secrets(&error.to_string());
        tracing::warn!(error = %message, "explanation request failed");
        Explanation::Failed(message)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Explanation::Failed(_))
    }
}

/// Everything produced for one case
#[derive(Debug, Clone, Serialize)]
pub struct Analysis<'a> {
    pub case_text: String,
    pub matches: MatchReport<'a>,
    pub prompt: String,
    pub explanation: Explanation,
}

/// Serialized shape of a JSON report
#[derive(Serialize)]
struct JsonReport<'r, 'a> {
    case_text: &'r str,
    matches: &'r MatchReport<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<&'r str>,
    explanation: &'r Explanation,
}

impl Analysis<'_> {
    /// Process exit code for this analysis
    pub fn exit_code(&self) -> i32 {
        if self.explanation.is_failed() {
            2
        } else {
            0
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self, show_prompt: bool) -> String {
        let report = JsonReport {
            case_text: &self.case_text,
            matches: &self.matches,
            prompt: show_prompt.then_some(self.prompt.as_str()),
            explanation: &self.explanation,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Render a human-readable report
    pub fn to_text(&self, show_prompt: bool) -> String {
        let mut out = String::new();

        if self.matches.is_empty() {
            out.push_str(&format!("[info] {}\n\n", no_match_notice(&self.matches)));
        }

        if show_prompt {
            out.push_str("== Prompt ==\n");
            out.push_str(&self.prompt);
            out.push_str("\n\n");
        }

        match &self.explanation {
            Explanation::Generated(text) => {
                out.push_str("== Explanation ==\n");
                out.push_str(text);
                out.push_str("\n\n");
            }
            Explanation::Failed(message) => {
                out.push_str(&format!("[error] Explanation unavailable: {}\n\n", message));
            }
            Explanation::Skipped => {}
        }

        if !self.matches.malpip.is_empty() {
            out.push_str("== Matched MALPIP Rules (verbatim) ==\n");
            for rule in &self.matches.malpip {
                out.push_str(&format!("Rule ID: {}\n", rule.rule_id));
                out.push_str(&format!("Drug class: {}\n", rule.drug_class));
                out.push_str(&format!(
                    "Practice statement: {}\n\n",
                    rule.practice_statement_verbatim
                ));
            }
        }

        if let Some(interactions) = self.matches.interactions.as_ref().filter(|i| !i.is_empty()) {
            out.push_str("== Matched DDI Rules (verbatim) ==\n");
            for rule in interactions {
                out.push_str(&format!("DDI ID: {}\n", rule.ddi_id));
                out.push_str(&format!("Drugs: {} + {}\n", rule.drug1, rule.drug2));
                out.push_str(&format!(
                    "Interaction: {}\n",
                    rule.interaction_statement_verbatim
                ));
                out.push_str(&format!("Severity: {}\n", rule.severity));
                out.push_str(&format!("Recommendation: {}\n\n", rule.recommendation));
            }
        }

        out
    }
}

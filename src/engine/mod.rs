//! Case engine for malpip-assistant
//!
//! Coordinates matching, prompt composition and the explanation call.

pub mod common;
pub mod interaction;
pub mod malpip;

use serde::Serialize;

use crate::client::ExplanationClient;
use crate::output::{Analysis, Explanation};
use crate::prompt;
use crate::rules::{InteractionRule, MalpipRule, RuleSet};

use self::interaction::InteractionTriggers;
use self::malpip::MalpipTriggers;

/// Rules matched for one case, in table order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport<'a> {
    pub malpip: Vec<&'a MalpipRule>,

    /// `None` when the rule set has no interaction table
    pub interactions: Option<Vec<&'a InteractionRule>>,
}

impl MatchReport<'_> {
    /// True when no rule in any table matched
    pub fn is_empty(&self) -> bool {
        self.malpip.is_empty() && self.interactions.as_ref().map_or(true, |i| i.is_empty())
    }

    /// Total number of matched rules
    pub fn len(&self) -> usize {
        self.malpip.len() + self.interactions.as_ref().map_or(0, |i| i.len())
    }
}

/// The main case engine
pub struct CaseEngine {
    rules: RuleSet,
    malpip_triggers: Vec<MalpipTriggers>,
    interaction_triggers: Option<Vec<InteractionTriggers>>,
}

impl CaseEngine {
    /// Create a new engine over a loaded rule set
    pub fn new(rules: RuleSet) -> Self {
        let malpip_triggers = malpip::compile(&rules.malpip);
        let interaction_triggers = rules.interactions.as_ref().map(interaction::compile);

        Self {
            rules,
            malpip_triggers,
            interaction_triggers,
        }
    }

    /// Match case text against every loaded table
    pub fn matches(&self, case_text: &str) -> MatchReport<'_> {
        let normalized = common::normalize(case_text);

        let malpip = malpip::matching_rows(&normalized, &self.rules.malpip, &self.malpip_triggers);

        let interactions = match (&self.rules.interactions, &self.interaction_triggers) {
            (Some(table), Some(triggers)) => {
                Some(interaction::matching_rows(&normalized, table, triggers))
            }
            _ => None,
        };

        let report = MatchReport {
            malpip,
            interactions,
        };
        tracing::debug!(matched = report.len(), "matched case text");
        report
    }

    /// Compose the explanation prompt for a case
    pub fn compose(&self, case_text: &str, matches: &MatchReport<'_>) -> String {
        prompt::compose(case_text, matches)
    }

    /// Match, compose and, when a client is given, request an explanation.
    ///
    /// Without a client the explanation is skipped (dry run). A client
    /// failure is recorded in the analysis rather than returned as an error,
    /// so the matched rules can still be shown.
    pub fn analyze(&self, case_text: &str, client: Option<&dyn ExplanationClient>) -> Analysis<'_> {
        let matches = self.matches(case_text);
        if matches.is_empty() {
            tracing::info!("no rules matched; explanation will use case text only");
        }

        let prompt = self.compose(case_text, &matches);

        let explanation = match client {
            None => Explanation::Skipped,
            Some(client) => match client.generate(&prompt) {
                Ok(text) => Explanation::Generated(text),
                Err(e) => Explanation::from_error(&e),
            },
        };

        Analysis {
            case_text: case_text.to_string(),
            matches,
            prompt,
            explanation,
        }
    }

    /// Get the loaded rules
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

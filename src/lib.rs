//! malpip-assistant - MALPIP and drug-drug interaction case assistant
//!
//! This library matches free-text patient cases against MALPIP criteria and
//! drug-drug interaction rules, then asks a language model to explain the
//! matches.
//!
//! # Features
//!
//! - **Rule tables**: MALPIP and DDI tables loaded once from CSV
//! - **Substring matching**: case-insensitive, order-preserving
//! - **Prompt composition**: matched statements passed through verbatim
//! - **Explanation client**: OpenAI-compatible endpoint behind a trait
//! - **Reports**: terminal text or JSON
//!
//! # Example
//!
//! ```
//! use malpip_assistant::{CaseEngine, MalpipRule, RuleSet, RuleTable};
//!
//! let malpip = RuleTable::new(vec![MalpipRule::new(
//!     "MALPIP-01",
//!     "benzodiazepine",
//!     "lorazepam, diazepam",
//!     "Avoid benzodiazepines in patients with dementia.",
//! )]);
//! let engine = CaseEngine::new(RuleSet::malpip_only(malpip));
//!
//! let report = engine.matches("taking diazepam for anxiety");
//! assert_eq!(report.malpip.len(), 1);
//!
//! let prompt = engine.compose("taking diazepam for anxiety", &report);
//! assert!(prompt.contains("MALPIP: benzodiazepine"));
//! ```

pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod prompt;
pub mod rules;

// Re-exports for convenience
pub use client::{ExplanationClient, MockExplanationClient, OpenAiClient};
pub use config::{Config, OutputFormat};
pub use engine::{CaseEngine, MatchReport};
pub use error::{RemoteError, RuleStoreError};
pub use input::CaseInput;
pub use output::{Analysis, Explanation};
pub use rules::{InteractionRule, MalpipRule, RuleSet, RuleTable};

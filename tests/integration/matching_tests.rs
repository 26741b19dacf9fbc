//! Integration tests for rule matching against the sample tables

use std::path::PathBuf;

use malpip_assistant::engine::{interaction, malpip};
use malpip_assistant::rules::store::load_table;
use malpip_assistant::{CaseEngine, InteractionRule, MalpipRule, RuleSet, RuleTable};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn engine() -> CaseEngine {
    let malpip = load_table::<MalpipRule>(&data_path("malpip_rules.csv")).unwrap();
    let ddi = load_table::<InteractionRule>(&data_path("ddi_rules.csv")).unwrap();
    CaseEngine::new(RuleSet::combined(malpip, ddi))
}

fn malpip_ids(case: &str) -> Vec<String> {
    engine()
        .matches(case)
        .malpip
        .iter()
        .map(|r| r.rule_id.clone())
        .collect()
}

fn ddi_ids(case: &str) -> Vec<String> {
    engine()
        .matches(case)
        .interactions
        .unwrap_or_default()
        .iter()
        .map(|r| r.ddi_id.clone())
        .collect()
}

// ============================================================================
// MALPIP matching
// ============================================================================

#[test]
fn test_drug_class_mentioned() {
    assert_eq!(malpip_ids("Patient on benzodiazepine daily"), vec!["MALPIP-01"]);
    assert!(malpip_ids("patient on a new diet").is_empty());
}

#[test]
fn test_example_drug_mentioned() {
    assert_eq!(malpip_ids("taking diazepam for anxiety"), vec!["MALPIP-01"]);
    assert_eq!(malpip_ids("Quetiapine 25 mg at night"), vec!["MALPIP-02"]);
}

#[test]
fn test_multiple_rules_in_table_order() {
    let ids = malpip_ids("Donepezil started; also on haloperidol and lorazepam");
    assert_eq!(ids, vec!["MALPIP-01", "MALPIP-02", "MALPIP-04"]);
}

#[test]
fn test_ssri_example_drug() {
    assert_eq!(malpip_ids("citalopram 40mg"), vec!["MALPIP-05"]);
}

// ============================================================================
// DDI matching
// ============================================================================

#[test]
fn test_interaction_needs_both_drugs() {
    assert_eq!(ddi_ids("on warfarin and aspirin"), vec!["DDI-01"]);
    assert!(ddi_ids("on warfarin only").is_empty());
}

#[test]
fn test_multi_word_participant() {
    assert_eq!(
        ddi_ids("Spironolactone 25mg and Potassium Chloride 600mg"),
        vec!["DDI-04"]
    );
    assert!(ddi_ids("spironolactone and potassium").is_empty());
}

#[test]
fn test_combined_case() {
    let engine = engine();
    let report = engine.matches("Citalopram 20mg, donepezil 10mg, warfarin, aspirin 81mg");
    let malpip: Vec<_> = report.malpip.iter().map(|r| r.rule_id.as_str()).collect();
    let ddi: Vec<_> = report
        .interactions
        .as_ref()
        .unwrap()
        .iter()
        .map(|r| r.ddi_id.as_str())
        .collect();

    assert_eq!(malpip, vec!["MALPIP-04", "MALPIP-05"]);
    assert_eq!(ddi, vec!["DDI-01", "DDI-02"]);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_case_matches_nothing() {
    let engine = engine();
    let report = engine.matches("");
    assert!(report.malpip.is_empty());
    assert_eq!(report.interactions, Some(vec![]));
}

#[test]
fn test_blank_rows_never_match() {
    let table = RuleTable::new(vec![
        MalpipRule::new("BLANK", "", "", "Never shown."),
        MalpipRule::new("COMMAS", "", " , ,", "Never shown."),
    ]);
    for case in ["a", "anything at all", " ", "lorazepam, diazepam"] {
        assert!(malpip::match_rules(case, &table).is_empty(), "matched {:?}", case);
    }

    let ddi = RuleTable::new(vec![InteractionRule::new("BLANK", "", "", "x", "y", "z")]);
    assert!(interaction::match_rules("anything", &ddi).is_empty());
}

#[test]
fn test_substring_inside_longer_word_still_matches() {
    let table = RuleTable::new(vec![MalpipRule::new("R1", "ssri", "", "x")]);
    assert_eq!(malpip::match_rules("Classrights reviewed", &table).len(), 1);
}

#[test]
fn test_matching_is_deterministic() {
    let engine = engine();
    let case = "lorazepam, haloperidol, clarithromycin and simvastatin";
    let first = engine.matches(case);
    for _ in 0..5 {
        assert_eq!(engine.matches(case), first);
    }
}

#[test]
fn test_matching_leaves_tables_untouched() {
    let engine = engine();
    let before = engine.rules().clone();
    let _ = engine.matches("DIAZEPAM warfarin ASPIRIN");
    assert_eq!(engine.rules(), &before);
}

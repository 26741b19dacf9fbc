//! Integration tests for the match, compose and explain flow

use malpip_assistant::{
    CaseEngine, CaseInput, Explanation, InteractionRule, MalpipRule, MockExplanationClient,
    RuleSet, RuleTable,
};

fn malpip_table() -> RuleTable<MalpipRule> {
    RuleTable::new(vec![
        MalpipRule::new(
            "MALPIP-01",
            "benzodiazepine",
            "lorazepam, diazepam",
            "Avoid benzodiazepines in older adults with dementia.",
        ),
        MalpipRule::new(
            "MALPIP-02",
            "antipsychotic",
            "haloperidol, quetiapine",
            "Avoid antipsychotics for behavioural symptoms of dementia.",
        ),
    ])
}

fn ddi_table() -> RuleTable<InteractionRule> {
    RuleTable::new(vec![InteractionRule::new(
        "DDI-01",
        "warfarin",
        "aspirin",
        "Concomitant use increases the risk of major bleeding.",
        "Severe",
        "Monitor INR.",
    )])
}

fn combined() -> CaseEngine {
    CaseEngine::new(RuleSet::combined(malpip_table(), ddi_table()))
}

#[test]
fn test_full_flow_with_matches() {
    let engine = combined();
    let client = MockExplanationClient::new("Lorazepam and the warfarin/aspirin pair are concerns.");
    let case = CaseInput::from_text("84F with dementia on Lorazepam 1mg, warfarin and aspirin.\n");

    let analysis = engine.analyze(&case.case_text, Some(&client));

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];
    assert!(prompt.contains("Patient case: 84F with dementia on Lorazepam 1mg, warfarin and aspirin.\n"));
    assert!(prompt.contains(
        "MALPIP: benzodiazepine – Avoid benzodiazepines in older adults with dementia."
    ));
    assert!(prompt.contains(
        "DDI: warfarin + aspirin – Concomitant use increases the risk of major bleeding. (Severity: Severe)"
    ));

    let text = analysis.to_text(false);
    assert!(text.contains("Lorazepam and the warfarin/aspirin pair are concerns."));
    assert!(text.contains("Rule ID: MALPIP-01"));
    assert!(text.contains("Recommendation: Monitor INR."));
    assert_eq!(analysis.exit_code(), 0);
}

#[test]
fn test_no_matches_still_explained() {
    let engine = combined();
    let client = MockExplanationClient::new("Nothing flagged.");
    let analysis = engine.analyze("Healthy 30 y/o, no medications", Some(&client));

    assert!(analysis.matches.is_empty());
    assert!(client.prompts()[0].contains("Patient case: Healthy 30 y/o, no medications"));
    assert!(client.prompts()[0].contains("Relevant MALPIP rules:\n\n"));
    assert_eq!(analysis.explanation, Explanation::Generated("Nothing flagged.".to_string()));

    let text = analysis.to_text(false);
    assert!(text.contains("No specific MALPIP rules or DDIs matched"));
}

#[test]
fn test_client_failure_surfaces_notice() {
    let engine = combined();
    let client = MockExplanationClient::failing("https://api.example.invalid/v1");
    let analysis = engine.analyze("on haloperidol", Some(&client));

    let text = analysis.to_text(false);
    assert!(text.contains("Explanation unavailable: cannot connect to https://api.example.invalid/v1"));
    assert!(text.contains("Rule ID: MALPIP-02"));
    assert_eq!(analysis.exit_code(), 2);
}

#[test]
fn test_single_table_variant_prompt() {
    let engine = CaseEngine::new(RuleSet::malpip_only(malpip_table()));
    let client = MockExplanationClient::new("ok");
    let analysis = engine.analyze("warfarin, aspirin and quetiapine", Some(&client));

    assert!(analysis.matches.interactions.is_none());
    assert_eq!(analysis.matches.malpip.len(), 1);
    assert!(!client.prompts()[0].contains("Relevant DDIs"));
}

#[test]
fn test_json_report_lists_matches() {
    let engine = combined();
    let analysis = engine.analyze("diazepam with warfarin and aspirin", None);
    let value: serde_json::Value = serde_json::from_str(&analysis.to_json(true)).unwrap();

    assert_eq!(value["matches"]["malpip"][0]["rule_id"], "MALPIP-01");
    assert_eq!(value["matches"]["interactions"][0]["ddi_id"], "DDI-01");
    assert_eq!(value["explanation"]["status"], "skipped");
    assert!(value["prompt"].as_str().unwrap().contains("Relevant DDIs:"));
}

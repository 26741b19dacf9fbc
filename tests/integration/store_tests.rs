//! Integration tests for loading rule tables from disk

use std::io::Write;

use malpip_assistant::rules::store;
use malpip_assistant::{Config, RuleStoreError};
use tempfile::NamedTempFile;

const MALPIP_CSV: &str = "rule_id,drug_class,example_drugs,practice_statement_verbatim\n\
                          R1,benzodiazepine,\"lorazepam, diazepam\",\"Avoid, especially at night.\"\n";

const DDI_CSV: &str = "ddi_id,drug1,drug2,interaction_statement_verbatim,severity,recommendation\n\
                       D1,warfarin,aspirin,Bleeding risk.,Severe,Avoid.\n";

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn config_for(malpip: &NamedTempFile, ddi: Option<&NamedTempFile>) -> Config {
    let mut config = Config::default();
    config.rules.malpip_path = malpip.path().to_string_lossy().to_string();
    match ddi {
        Some(ddi) => config.rules.ddi_path = Some(ddi.path().to_string_lossy().to_string()),
        None => config.rules.ddi_enabled = false,
    }
    config
}

#[test]
fn test_load_combined() {
    let malpip = write_csv(MALPIP_CSV);
    let ddi = write_csv(DDI_CSV);

    let rules = store::load(&config_for(&malpip, Some(&ddi))).unwrap();
    assert_eq!(rules.malpip.len(), 1);
    assert_eq!(rules.interactions.as_ref().unwrap().len(), 1);
    assert_eq!(
        rules.malpip.rows()[0].practice_statement_verbatim,
        "Avoid, especially at night."
    );
}

#[test]
fn test_load_single_table_variant() {
    let malpip = write_csv(MALPIP_CSV);
    let rules = store::load(&config_for(&malpip, None)).unwrap();
    assert!(!rules.has_interactions());
}

#[test]
fn test_missing_ddi_file_is_fatal() {
    let malpip = write_csv(MALPIP_CSV);
    let mut config = config_for(&malpip, None);
    config.rules.ddi_enabled = true;
    config.rules.ddi_path = Some("/nonexistent/ddi_rules.csv".to_string());

    let err = store::load(&config).unwrap_err();
    assert!(matches!(err, RuleStoreError::Io { .. }));
}

#[test]
fn test_malformed_ddi_table_is_fatal() {
    let malpip = write_csv(MALPIP_CSV);
    let ddi = write_csv("ddi_id,drug1,drug2,severity\nD1,warfarin,aspirin,Severe\n");

    let err = store::load(&config_for(&malpip, Some(&ddi))).unwrap_err();
    match err {
        RuleStoreError::MissingColumn { table, column } => {
            assert_eq!(table, "DDI");
            assert_eq!(column, "interaction_statement_verbatim");
        }
        other => panic!("Expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_short_row_reports_row_and_column() {
    let malpip = write_csv(
        "rule_id,drug_class,example_drugs,practice_statement_verbatim\nR1,ssri,citalopram\n",
    );
    let err = store::load(&config_for(&malpip, None)).unwrap_err();
    assert!(err.to_string().contains("row 1"));
    assert!(err.to_string().contains("practice_statement_verbatim"));
}

#[test]
fn test_unquoted_comma_in_statement_is_fatal() {
    let malpip = write_csv(MALPIP_CSV);
    let ddi = write_csv(
        "ddi_id,drug1,drug2,interaction_statement_verbatim,severity,recommendation\n\
         D1,warfarin,aspirin,Bleeding risk.,Severe,Avoid.\n\
         D2,clarithromycin,simvastatin,Raises exposure, causes myopathy.,Severe,Suspend.\n",
    );

    let err = store::load(&config_for(&malpip, Some(&ddi))).unwrap_err();
    match err {
        RuleStoreError::ExtraFields {
            table,
            row,
            expected,
            found,
        } => {
            assert_eq!(table, "DDI");
            assert_eq!(row, 2);
            assert_eq!(expected, 6);
            assert_eq!(found, 7);
        }
        other => panic!("Expected ExtraFields, got {:?}", other),
    }
}

#[test]
fn test_invalid_utf8_is_csv_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"rule_id,drug_class,example_drugs,practice_statement_verbatim\nR1,\xff\xfe,x,y\n")
        .unwrap();
    file.flush().unwrap();

    let err = store::load(&config_for(&file, None)).unwrap_err();
    assert!(matches!(err, RuleStoreError::Csv { .. }));
}

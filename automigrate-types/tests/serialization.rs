use automigrate_types::fix::{FixStatus, FixSummary};
use automigrate_types::metadata::InstallationMetadata;
use automigrate_types::run::MigrationRun;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn fix_status_serializes_snake_case() {
    let succeeded = serde_json::to_value(FixStatus::Succeeded).expect("serialize");
    let check_failed = serde_json::to_value(FixStatus::CheckFailed).expect("serialize");
    let manual_succeeded = serde_json::to_value(FixStatus::ManualSucceeded).expect("serialize");
    let unnecessary = serde_json::to_value(FixStatus::Unnecessary).expect("serialize");

    assert_eq!(succeeded, serde_json::json!("succeeded"));
    assert_eq!(check_failed, serde_json::json!("check_failed"));
    assert_eq!(manual_succeeded, serde_json::json!("manual_succeeded"));
    assert_eq!(unnecessary, serde_json::json!("unnecessary"));
}

#[test]
fn fix_status_round_trips() {
    for status in [
        FixStatus::Succeeded,
        FixStatus::Failed,
        FixStatus::CheckFailed,
        FixStatus::ManualSucceeded,
        FixStatus::Manual,
        FixStatus::Skipped,
        FixStatus::Unnecessary,
    ] {
        let value = serde_json::to_value(status).expect("serialize status");
        let back: FixStatus = serde_json::from_value(value).expect("deserialize status");
        assert_eq!(back, status);
    }
}

#[test]
fn fix_summary_omits_empty_failed_map() {
    let summary = FixSummary {
        succeeded: vec!["csf-2-to-3".to_string()],
        ..Default::default()
    };

    let value = serde_json::to_value(&summary).expect("serialize summary");
    assert!(value.get("failed").is_none());
    assert_eq!(value["succeeded"], serde_json::json!(["csf-2-to-3"]));
}

#[test]
fn fix_summary_deserializes_with_missing_categories() {
    let summary: FixSummary =
        serde_json::from_str(r#"{"manual": ["mdx-gfm"]}"#).expect("deserialize");
    assert_eq!(summary.manual, vec!["mdx-gfm"]);
    assert!(summary.succeeded.is_empty());
    assert!(summary.failed.is_empty());
    assert!(summary.skipped.is_empty());
}

#[test]
fn migration_run_round_trips() {
    let mut run = MigrationRun::new("migration-storybook.log");
    run.fix_results
        .insert("autodocs".to_string(), FixStatus::Succeeded);
    run.fix_results
        .insert("mdx-gfm".to_string(), FixStatus::Skipped);
    run.fix_summary.succeeded.push("autodocs".to_string());
    run.fix_summary.skipped.push("mdx-gfm".to_string());

    let json = serde_json::to_string(&run).expect("serialize run");
    let back: MigrationRun = serde_json::from_str(&json).expect("deserialize run");

    assert_eq!(back.schema, automigrate_types::schema::AUTOMIGRATE_RUN_V1);
    assert_eq!(back.fix_results.get("autodocs"), Some(&FixStatus::Succeeded));
    assert_eq!(back.log_file, "migration-storybook.log");
}

#[test]
fn installation_metadata_omits_missing_dedupe_command() {
    let meta = InstallationMetadata {
        dependencies: BTreeMap::from([(
            "react".to_string(),
            vec!["18.2.0".to_string(), "18.3.0".to_string()],
        )]),
        dedupe_command: None,
    };

    let value = serde_json::to_value(&meta).expect("serialize metadata");
    assert!(value.get("dedupe_command").is_none());
    assert_eq!(
        value["dependencies"]["react"],
        serde_json::json!(["18.2.0", "18.3.0"])
    );
}

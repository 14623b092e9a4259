use slicepie_runner::config::ScenarioConfig;
use slicepie_runner::reporting::export::{export_report, SCENARIO_DIR_PREFIX_LEN};
use slicepie_runner::runner::{run_scenario, ScenarioReport};

fn make_report() -> ScenarioReport {
    let mut config = ScenarioConfig::template(2);
    config.cofounders[0].name = Some("Ada".to_string());
    config.cofounders[1].name = Some("Grace".to_string());
    config.cofounders[1].idea_value = 25_000.0;
    run_scenario(&config).unwrap()
}

#[test]
fn test_export_writes_json_and_csv() {
    let temp_dir = tempfile::tempdir().unwrap();
    let report = make_report();

    let paths = export_report(temp_dir.path(), &report, false).unwrap();
    assert!(paths.report_json.exists());
    assert!(paths.results_csv.exists());
    assert!(paths.report_markdown.is_none());
    assert_eq!(
        paths.scenario_dir.file_name().unwrap().to_str().unwrap(),
        report.scenario_hash.short(SCENARIO_DIR_PREFIX_LEN)
    );
}

#[test]
fn test_export_with_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let report = make_report();

    let paths = export_report(temp_dir.path(), &report, true).unwrap();
    let md_path = paths.report_markdown.unwrap();
    let md = std::fs::read_to_string(md_path).unwrap();
    assert!(md.contains("| Ada |"));
    assert!(md.contains("| Grace |"));
}

#[test]
fn test_exported_json_reloads() {
    let temp_dir = tempfile::tempdir().unwrap();
    let report = make_report();

    let paths = export_report(temp_dir.path(), &report, false).unwrap();
    let text = std::fs::read_to_string(&paths.report_json).unwrap();
    let back: ScenarioReport = serde_json::from_str(&text).unwrap();
    assert_eq!(back.scenario_hash, report.scenario_hash);
    assert_eq!(back.results.len(), 2);
    assert_eq!(back.results[1].cofounder.name, "Grace");
}

#[test]
fn test_exported_csv_rows() {
    let temp_dir = tempfile::tempdir().unwrap();
    let report = make_report();

    let paths = export_report(temp_dir.path(), &report, false).unwrap();
    let mut reader = csv::Reader::from_path(&paths.results_csv).unwrap();
    let headers = reader.headers().unwrap().clone();
    let name_col = headers.iter().position(|h| h == "name").unwrap();
    let pct_col = headers.iter().position(|h| h == "percentage").unwrap();

    let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][name_col], "Ada");
    let pct_sum: f64 = rows.iter().map(|r| r[pct_col].parse::<f64>().unwrap()).sum();
    assert!((pct_sum - 100.0).abs() < 1e-6);
}

#[test]
fn test_same_scenario_same_folder() {
    let temp_dir = tempfile::tempdir().unwrap();
    let a = export_report(temp_dir.path(), &make_report(), false).unwrap();
    let b = export_report(temp_dir.path(), &make_report(), true).unwrap();
    assert_eq!(a.scenario_dir, b.scenario_dir);
}

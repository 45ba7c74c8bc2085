use anyhow::Result;
use table_drills::core::ConfigProvider;
use table_drills::utils::validation::Validate;
use table_drills::{DrillConfig, DrillEngine, DrillError, FilePipeline, LocalStorage};
use tempfile::TempDir;

fn config_for(kind: &str, input: &str, output: &str, formats: &str) -> Result<DrillConfig> {
    let content = format!(
        r#"
[drill]
kind = "{}"

[input]
path = "{}"

[output]
path = "{}"
formats = {}
"#,
        kind, input, output, formats
    );
    let config = DrillConfig::from_toml_str(&content)?;
    config.validate()?;
    Ok(config)
}

fn engine_for(
    temp_dir: &TempDir,
    config: DrillConfig,
) -> DrillEngine<FilePipeline<LocalStorage, DrillConfig>> {
    let base = temp_dir.path().display().to_string().replace('\\', "/");
    let source = LocalStorage::new(base.clone());
    let sink = LocalStorage::new(config.output_path().to_string());
    DrillEngine::new(FilePipeline::new(source, sink, config))
}

#[test]
fn test_rich_count_from_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("store.csv"),
        "store_id,customer_id,amount\n6,1,191\n7,2,1700\n8,3,500\n9,2,620\n",
    )?;

    let output_dir = temp_dir.path().join("out").display().to_string().replace('\\', "/");
    let config = config_for("rich-count", "store.csv", &output_dir, r#"["csv", "json"]"#)?;
    let written = engine_for(&temp_dir, config).run()?;

    assert_eq!(written.len(), 2);
    let csv = std::fs::read_to_string(temp_dir.path().join("out/rich-count.csv"))?;
    assert_eq!(csv, "rich_count\n1\n");

    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("out/rich-count.json"))?)?;
    assert_eq!(json, serde_json::json!([{ "rich_count": 1 }]));
    Ok(())
}

#[test]
fn test_rank_scores_from_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("scores.json"),
        r#"[
            {"id": 1, "score": 3.5},
            {"id": 2, "score": 3.65},
            {"id": 3, "score": 4.0},
            {"id": 4, "score": 3.85},
            {"id": 5, "score": 4.0},
            {"id": 6, "score": 3.65}
        ]"#,
    )?;

    let output_dir = temp_dir.path().join("out").display().to_string().replace('\\', "/");
    let config = config_for("rank-scores", "scores.json", &output_dir, r#"["csv"]"#)?;
    engine_for(&temp_dir, config).run()?;

    let csv = std::fs::read_to_string(temp_dir.path().join("out/rank-scores.csv"))?;
    assert_eq!(
        csv,
        "score,rank\n4,1\n4,1\n3.85,2\n3.65,3\n3.65,3\n3.5,4\n"
    );
    Ok(())
}

#[test]
fn test_bad_input_reports_schema_error_and_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("scores.csv"), "id,points\n1,10\n")?;

    let output_dir = temp_dir.path().join("out").display().to_string().replace('\\', "/");
    let config = config_for("rank-scores", "scores.csv", &output_dir, r#"["csv"]"#)?;
    let err = engine_for(&temp_dir, config).run().unwrap_err();

    assert!(matches!(err, DrillError::InvalidSchema { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[test]
fn test_missing_input_file_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("out").display().to_string().replace('\\', "/");
    let config = config_for("rich-count", "absent.csv", &output_dir, r#"["json"]"#)?;

    let err = engine_for(&temp_dir, config).run().unwrap_err();
    assert!(matches!(err, DrillError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
    Ok(())
}

#[test]
fn test_empty_json_input_produces_empty_results() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("empty.json"), "[]")?;
    let output_dir = temp_dir.path().join("out").display().to_string().replace('\\', "/");

    let config = config_for("rank-scores", "empty.json", &output_dir, r#"["csv"]"#)?;
    engine_for(&temp_dir, config).run()?;
    let csv = std::fs::read_to_string(temp_dir.path().join("out/rank-scores.csv"))?;
    assert_eq!(csv, "score,rank\n");

    let config = config_for("rich-count", "empty.json", &output_dir, r#"["json"]"#)?;
    engine_for(&temp_dir, config).run()?;
    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("out/rich-count.json"))?)?;
    assert_eq!(json, serde_json::json!([{ "rich_count": 0 }]));
    Ok(())
}

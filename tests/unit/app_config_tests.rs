/*!
 * Tests for pipeline configuration
 */

use anyhow::Result;
use std::path::{Path, PathBuf};

use otioflow::app_config::Config;

/// The staging layout hangs off the project root
#[test]
fn test_config_forRoot_shouldDeriveStagingLayout() {
    let config = Config::for_root("/projects/show");

    assert_eq!(
        config.data_dir(),
        Path::new("/projects/show/data/timelineprocessing")
    );
    assert_eq!(
        config.timeline_ref_dir(),
        Path::new("/projects/show/data/timelineprocessing/timeline_ref")
    );
    assert_eq!(
        config.timeline_edited_dir(),
        Path::new("/projects/show/data/timelineprocessing/timeline_edited")
    );
}

/// The bridge script resolves inside the scripts directory
#[test]
fn test_config_bridgeScriptPath_shouldJoinScriptsDir() {
    let mut config = Config::for_root("/projects/show");
    config.scripts_dir = PathBuf::from("/opt/otioflow/scripts");

    assert_eq!(
        config.bridge_script_path(),
        Path::new("/opt/otioflow/scripts/resolvebridge.py")
    );
}

/// The default configuration validates
#[test]
fn test_validate_withDefaults_shouldSucceed() -> Result<()> {
    Config::default().validate()
}

/// An empty launcher is rejected
#[test]
fn test_validate_withEmptyLauncher_shouldFail() {
    let mut config = Config::default();
    config.script_launcher.clear();

    assert!(config.validate().is_err());
}

/// An empty project root is rejected
#[test]
fn test_validate_withEmptyProjectRoot_shouldFail() {
    let mut config = Config::default();
    config.project_root = PathBuf::new();

    assert!(config.validate().is_err());
}

/// Omitted fields deserialize to their defaults
#[test]
fn test_deserialize_withMinimalJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{ "project_root": "/projects/show" }"#)?;

    assert_eq!(config.project_root, PathBuf::from("/projects/show"));
    assert_eq!(config.script_launcher, vec!["uv", "run"]);
    assert_eq!(config.bridge_script, "resolvebridge.py");
    Ok(())
}

use std::fs;

use anyhow::Result;
use tempfile::tempdir;
use ue_launcher::{
    cli::parse_directives,
    launch::{codec, ConfigModel, ConsoleFlow, DirectiveOutcome, LaunchDispatcher, SystemLauncher},
    settings::LauncherSettings,
};

use crate::common::{fixture, run_launcher, write_project};

#[test]
fn derive_directive_writes_first_free_slot() -> Result<()> {
    let temp = tempdir()?;
    let project_dir = temp.path().join("projects/Foo");
    fs::create_dir_all(&project_dir)?;
    let project = project_dir.join("Foo.uproject");
    fs::copy(fixture("tests/fixtures/Foo.uproject"), &project)?;

    let settings = LauncherSettings::load_from_path(fixture("tests/fixtures/launcher_valid.toml"))?;
    let mut dispatcher =
        LaunchDispatcher::from_settings(settings, SystemLauncher, ConsoleFlow::new(Vec::new()));
    let raw = format!("-g \"{}\"", project.display());
    let report = dispatcher.dispatch(&parse_directives(&raw));

    assert!(report.is_success(), "{:?}", report.results);
    let expected = ConfigModel {
        engine: "/engines/5.1".into(),
        tool: "Editor".into(),
        project: project.to_string_lossy().into_owned(),
        params: Vec::new(),
    };
    match &report.results[0].result {
        Ok(DirectiveOutcome::Saved { path, config }) => {
            assert_eq!(path, &project_dir.join("LaunchConf_0.cfg"));
            assert_eq!(config, &expected);
        }
        other => panic!("Unexpected result: {other:?}"),
    }

    let saved = fs::read_to_string(project_dir.join("LaunchConf_0.cfg"))?;
    assert_eq!(codec::deserialize(&saved)?, expected);
    Ok(())
}

#[test]
fn derive_via_binary_never_overwrites() -> Result<()> {
    let temp = tempdir()?;
    let project_dir = temp.path().join("Foo");
    let project = write_project(&project_dir, "Foo.uproject", "5.1")?;
    for index in 0..5 {
        fs::write(
            project_dir.join(format!("LaunchConf_{index}.cfg")),
            format!("existing {index}"),
        )?;
    }

    let settings = fixture("tests/fixtures/launcher_valid.toml");
    let padded = format!("{}   ", project.display());
    let output = run_launcher(
        temp.path(),
        &[
            "--settings",
            settings.to_str().expect("utf-8 fixture path"),
            "-g",
            &padded,
        ],
    )?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    for index in 0..5 {
        let content = fs::read_to_string(project_dir.join(format!("LaunchConf_{index}.cfg")))?;
        assert_eq!(content, format!("existing {index}"));
    }
    let saved = codec::deserialize(&fs::read_to_string(
        project_dir.join("LaunchConf_5.cfg"),
    )?)?;
    assert_eq!(saved.project, project.to_string_lossy());
    assert_eq!(saved.engine, "/engines/5.1");
    assert_eq!(saved.tool, "Editor");
    Ok(())
}

#[test]
fn derive_for_missing_project_fails_with_message() -> Result<()> {
    let temp = tempdir()?;
    let missing = temp.path().join("Nope/Nope.uproject");
    let output = run_launcher(
        temp.path(),
        &["-g", missing.to_str().expect("utf-8 path")],
    )?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("-g"), "stderr: {stderr}");
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
    Ok(())
}

use std::fs;

use anyhow::Result;
use tempfile::tempdir;
use ue_launcher::launch::{codec, ConfigModel};

use crate::common::{fixture, run_launcher, BINARY_PATH};

#[test]
fn no_directives_prints_empty_config() -> Result<()> {
    let temp = tempdir()?;
    let output = run_launcher(temp.path(), &[])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(codec::deserialize(&stdout)?, ConfigModel::default());
    Ok(())
}

#[test]
fn edit_directive_prints_loaded_config() -> Result<()> {
    let temp = tempdir()?;
    let file = fixture("tests/fixtures/LaunchConf_sample.uejson");
    let output = run_launcher(temp.path(), &["-e", file.to_str().expect("utf-8 path")])?;

    assert!(output.status.success());
    let printed = codec::deserialize(&String::from_utf8(output.stdout)?)?;
    assert_eq!(printed.engine, "/engines/5.1");
    assert_eq!(printed.params, vec!["-log".to_string()]);
    Ok(())
}

#[test]
fn unknown_directives_fall_through_quietly() -> Result<()> {
    let temp = tempdir()?;
    let output = run_launcher(temp.path(), &["-z", "whatever"])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "no interactive flow for -z");
    Ok(())
}

#[test]
fn invalid_settings_file_is_fatal() -> Result<()> {
    let temp = tempdir()?;
    let settings = temp.path().join("launcher.toml");
    fs::write(&settings, "[launcher]\nextension = \"\"\n")?;

    let output = run_launcher(temp.path(), &[])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("launcher.extension"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn help_lists_directives() -> Result<()> {
    let output = std::process::Command::new(BINARY_PATH).arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["-e <FILE>", "-c <FILE>", "-g <PROJECT>", "--settings"] {
        assert!(stdout.contains(needle), "help should mention {needle}: {stdout}");
    }
    Ok(())
}

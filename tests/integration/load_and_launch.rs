use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::Result;
use tempfile::tempdir;
use ue_launcher::{
    cli::parse_directives,
    launch::{
        codec, ConfigModel, ConsoleFlow, LaunchDispatcher, LaunchReceipt, ProcessLauncher,
    },
    lib::errors::LaunchError,
    settings::LauncherSettings,
};

use crate::common::{fixture, run_launcher};

#[derive(Default)]
struct RecordingLauncher {
    launched: RefCell<Vec<(String, String, String)>>,
}

impl ProcessLauncher for RecordingLauncher {
    fn launch(&self, config: &ConfigModel) -> Result<LaunchReceipt, LaunchError> {
        self.launched.borrow_mut().push((
            config.engine.clone(),
            config.tool.clone(),
            config.project.clone(),
        ));
        Ok(LaunchReceipt {
            binary: PathBuf::from(&config.engine),
            args: vec![config.project.clone()],
            pid: None,
        })
    }
}

#[test]
fn launch_directive_passes_saved_triple() -> Result<()> {
    let temp = tempdir()?;
    let file = temp.path().join("LaunchConf_0.uejson");
    fs::write(
        &file,
        r#"{"Engine": "/engines/5.1", "Tool": "Editor", "Project": "/projects/Foo/Foo.uproject"}"#,
    )?;

    let mut dispatcher = LaunchDispatcher::from_settings(
        LauncherSettings::default(),
        RecordingLauncher::default(),
        ConsoleFlow::new(Vec::new()),
    );
    let report = dispatcher.dispatch(&parse_directives(&format!("-c \"{}\"", file.display())));

    assert!(report.is_success());
    assert!(!report.interactive);
    assert_eq!(
        *dispatcher.launcher().launched.borrow(),
        vec![(
            "/engines/5.1".to_string(),
            "Editor".to_string(),
            "/projects/Foo/Foo.uproject".to_string()
        )]
    );
    Ok(())
}

#[test]
fn launch_fixture_with_unknown_keys() -> Result<()> {
    let file = fixture("tests/fixtures/LaunchConf_sample.uejson");
    let mut dispatcher = LaunchDispatcher::from_settings(
        LauncherSettings::default(),
        RecordingLauncher::default(),
        ConsoleFlow::new(Vec::new()),
    );
    let report = dispatcher.dispatch(&parse_directives(&format!("-c \"{}\"", file.display())));

    assert!(report.is_success());
    assert_eq!(dispatcher.launcher().launched.borrow().len(), 1);
    assert_eq!(dispatcher.launcher().launched.borrow()[0].1, "Editor");
    Ok(())
}

#[test]
fn launch_with_missing_binary_exits_nonzero() -> Result<()> {
    let temp = tempdir()?;
    let engine = temp.path().join("engines/5.1");
    fs::create_dir_all(&engine)?;
    let file = temp.path().join("LaunchConf_0.uejson");
    let config = ConfigModel {
        engine: engine.to_string_lossy().into_owned(),
        tool: "Editor".into(),
        project: "/projects/Foo/Foo.uproject".into(),
        params: Vec::new(),
    };
    fs::write(&file, codec::serialize(&config)?)?;

    let output = run_launcher(temp.path(), &["-c", file.to_str().expect("utf-8 path")])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("-c"), "stderr: {stderr}");
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn launch_with_empty_config_reports_unresolved_engine() -> Result<()> {
    let temp = tempdir()?;
    let output = run_launcher(temp.path(), &["-c", "missing.uejson"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("has no `engine`"), "stderr: {stderr}");
    Ok(())
}

#[cfg(unix)]
#[test]
fn launch_via_binary_spawns_tool() -> Result<()> {
    use std::path::Path;

    use ue_launcher::lib::platform;

    let temp = tempdir()?;
    let engine = temp.path().join("engines/5.1");
    let binary = platform::tool_binary_path(&engine, "Editor");
    fs::create_dir_all(binary.parent().expect("binary has parent"))?;
    let target = ["/bin/true", "/usr/bin/true"]
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .expect("a `true` binary is available");
    std::os::unix::fs::symlink(target, &binary)?;

    let file = temp.path().join("LaunchConf_0.uejson");
    let config = ConfigModel {
        engine: engine.to_string_lossy().into_owned(),
        tool: "Editor".into(),
        project: "/projects/Foo/Foo.uproject".into(),
        params: Vec::new(),
    };
    fs::write(&file, codec::serialize(&config)?)?;

    let output = run_launcher(temp.path(), &["-c", "LaunchConf_0.uejson"])?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn relative_project_saved_by_derive_launches_from_elsewhere() -> Result<()> {
    use std::path::Path;

    use ue_launcher::{
        launch::{build_launch_args, SystemLauncher},
        lib::platform,
    };

    use crate::common::write_project;

    let temp = tempdir()?;
    let engine = temp.path().join("engines/5.1");
    let binary = platform::tool_binary_path(&engine, "Editor");
    fs::create_dir_all(binary.parent().expect("binary has parent"))?;
    let target = ["/bin/true", "/usr/bin/true"]
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .expect("a `true` binary is available");
    std::os::unix::fs::symlink(target, &binary)?;

    let work = temp.path().join("work");
    write_project(&work, "Foo.uproject", "5.1")?;
    let settings = temp.path().join("launcher.toml");
    fs::write(
        &settings,
        format!(
            "[launcher]\ntool = \"Editor\"\n\n[engines]\n\"5.1\" = \"{}\"\n",
            engine.display()
        ),
    )?;
    let settings_arg = settings.to_str().expect("utf-8 path");

    let output = run_launcher(&work, &["--settings", settings_arg, "-g", "Foo.uproject"])?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let saved = codec::deserialize(&fs::read_to_string(work.join("LaunchConf_0.uejson"))?)?;
    let project = Path::new(&saved.project);
    assert!(project.is_absolute(), "saved project: {}", saved.project);
    assert!(project.is_file(), "saved project: {}", saved.project);

    let (planned, args) = SystemLauncher::plan(&saved)?;
    assert_eq!(planned, binary);
    assert_eq!(args, build_launch_args(&saved));
    assert!(Path::new(&args[0]).is_file(), "tool argument: {}", args[0]);

    let output = run_launcher(
        temp.path(),
        &["--settings", settings_arg, "-c", "work/LaunchConf_0.uejson"],
    )?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}

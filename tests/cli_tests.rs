// here we drive the built binary end to end
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

// RUST_BACKTRACE=1 cargo test --test cli_tests -- --nocapture

fn tool() -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("private-key-jwt")?;
    cmd.env("NO_COLOR", "1").env_remove("PRIVATE_KEY_JWT_OUTPUT_DIR");
    Ok(cmd)
}

fn json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("scratch dir readable")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

#[test]
fn test_force_flag_writes_files_in_working_directory() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = tool()?;
    cmd.current_dir(dir.path()).arg("-f");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("----- PRIVATE KEY SECTION -----"))
        .stdout(predicate::str::contains("----- PUBLIC KEY SECTION -----"))
        .stdout(predicate::str::contains("Files written to"))
        .stdout(predicate::str::contains("All done - Live long and prosper"))
        .stdout(predicate::str::contains("Press").not());

    let files = json_files(dir.path());
    assert_eq!(files.len(), 2, "expected two json files, got {:?}", files);

    let private_path = files
        .iter()
        .find(|p| p.to_string_lossy().ends_with("_private.json"))
        .expect("private file");
    let kid = private_path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .trim_end_matches("_private.json")
        .to_string();
    assert_eq!(kid.len(), 32);

    let private: Value = serde_json::from_str(&fs::read_to_string(private_path)?)?;
    let public_path = dir.path().join(format!("{}_public.json", kid));
    let public: Value = serde_json::from_str(&fs::read_to_string(public_path)?)?;
    assert_eq!(private["kid"], kid.as_str());
    assert_eq!(public["kid"], kid.as_str());
    assert_eq!(public["n"], private["n"]);
    Ok(())
}

#[test]
fn test_output_dir_from_environment() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = tool()?;
    cmd.env("PRIVATE_KEY_JWT_OUTPUT_DIR", dir.path()).arg("-f");

    cmd.assert().success();
    assert_eq!(json_files(dir.path()).len(), 2);
    Ok(())
}

#[test]
fn test_interactive_skip_writes_nothing() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = tool()?;
    cmd.current_dir(dir.path()).write_stdin("n\n\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Press 's' to save the files as json"))
        .stdout(predicate::str::contains("For next time, you can pass -f"))
        .stdout(predicate::str::contains("Files NOT written to disk"))
        .stdout(predicate::str::contains("Press enter to exit"));

    assert!(json_files(dir.path()).is_empty());
    Ok(())
}

#[test]
fn test_interactive_save_with_s() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = tool()?;
    cmd.current_dir(dir.path()).write_stdin("s\n\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Files written to"));

    assert_eq!(json_files(dir.path()).len(), 2);
    Ok(())
}

#[test]
fn test_no_help_flag_and_unknown_args_ignored() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = tool()?;
    cmd.current_dir(dir.path()).args(["--help", "-x", "-f"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage").not())
        .stdout(predicate::str::contains("Files written to"));
    Ok(())
}

#[test]
fn test_app_settings_lines_use_single_quotes() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = tool()?;
    cmd.current_dir(dir.path()).arg("-f");

    let output = cmd.output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    let after = |label: &str, nth: usize| -> String {
        let idx = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.starts_with(label))
            .nth(nth)
            .map(|(i, _)| i)
            .unwrap_or_else(|| panic!("no line starting with {}", label));
        lines[idx + 1].to_string()
    };

    let private_raw = after("Json (as it can be stored in e.g. Azure Key Vault)", 0);
    let private_app = after("appSettings compatible:", 0);
    let public_raw = after("Json (as it can be stored in e.g. sql db)", 0);
    let public_app = after("appSettings compatible:", 1);

    assert_eq!(private_app, private_raw.replace('"', "'"));
    assert_eq!(public_app, public_raw.replace('"', "'"));
    assert!(private_raw.starts_with("{\"kty\":\"RSA\""));
    Ok(())
}

#[test]
fn test_write_failure_exits_with_status_one() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("does").join("not").join("exist");
    let mut cmd = tool()?;
    cmd.current_dir(dir.path())
        .env("PRIVATE_KEY_JWT_OUTPUT_DIR", &missing)
        .args(["-f", "-o"]);

    let assert = cmd
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to write file"))
        .stdout(predicate::str::contains("All done").not());

    let stderr = String::from_utf8(assert.get_output().stderr.clone())?;
    assert_eq!(stderr.matches("Failed to write file").count(), 1);
    assert!(!missing.exists());
    Ok(())
}

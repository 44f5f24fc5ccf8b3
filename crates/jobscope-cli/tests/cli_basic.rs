//! CLI end-to-end tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use indoc::indoc;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const PROFILE: &str = indoc! {r#"
    version: "1.0"
    last_updated: 2026-09-01
    energy_drains:
      interpersonal_conflict:
        severity: severe
        trigger: conflict
    energy_generators:
      visible_progress:
        strength: core_need
      tool_building:
        strength: strong
    core_strengths:
      - name: tool_building
        level: expert
"#};

const TASKS: &str = indoc! {r#"
    tasks:
      - description: Build internal deploy tooling
        time_share: 40-50%
        characteristics:
          conflict_exposure: low
          alignment_clarity: high
          authority_ambiguity: low
          progress_visibility: high
          autonomy_level: high
          decision_speed: fast
          learning_required: low
          uses_systems_thinking: false
          uses_tool_building: true
          uses_debugging: false
          uses_technical_writing: false
          uses_mentoring: false
          uses_data_analysis: false
          uses_infrastructure: false
          collaboration_type: solo
          meeting_intensity: low
          requires_sync_communication: false
          timezone_spread: narrow
"#};

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_jobscope"))
        .args(args)
        .env("JOBSCOPE_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute jobscope");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_profile_init_refuses_overwrite() {
    let data = TempDir::new().unwrap();

    let (code, stdout, _) = run_cli(data.path(), &["profile", "init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Profile created:"));
    assert!(data.path().join("profile.yaml").exists());

    let (code, _, stderr) = run_cli(data.path(), &["profile", "init"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("--force"));

    let (code, _, _) = run_cli(data.path(), &["profile", "init", "--force"]);
    assert_eq!(code, 0);
}

#[test]
fn test_profile_show_json() {
    let data = TempDir::new().unwrap();
    run_cli(data.path(), &["profile", "init"]);

    let (code, stdout, _) = run_cli(data.path(), &["profile", "show", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["version"], "1.0");
}

#[test]
fn test_profile_show_without_profile_fails() {
    let data = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(data.path(), &["profile", "show"]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_profile_validate_rejects_unknown_drain() {
    let data = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let good = write(&work, "good.yaml", PROFILE);
    let (code, stdout, _) = run_cli(data.path(), &["profile", "validate", &good]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ok: profile v1.0"));

    let bad = write(
        &work,
        "bad.yaml",
        &PROFILE.replace("interpersonal_conflict:", "office_politics:"),
    );
    let (code, _, _) = run_cli(data.path(), &["profile", "validate", &bad]);
    assert_eq!(code, 1);
}

#[test]
fn test_profile_update_bumps_version_and_archives() {
    let data = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    run_cli(data.path(), &["profile", "init"]);

    // The draft claims 9.9; the stored version still advances by one minor step.
    let draft = write(&work, "draft.yaml", &PROFILE.replace("\"1.0\"", "\"9.9\""));
    let (code, stdout, _) = run_cli(data.path(), &["profile", "update", &draft]);
    assert_eq!(code, 0);
    assert!(stdout.contains("v1.0 -> v1.1"));

    let (code, stdout, _) = run_cli(data.path(), &["profile", "history"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("v1.0"));
    assert!(stdout.contains("v1.1 (current"));

    let (code, stdout, _) = run_cli(
        data.path(),
        &["profile", "show", "--version", "1.0", "--json"],
    );
    assert_eq!(code, 0);
    let archived: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(archived["version"], "1.0");
}

#[test]
fn test_matrix_classify_json() {
    let data = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let profile = write(&work, "profile.yaml", PROFILE);
    let tasks = write(&work, "acme.yaml", TASKS);

    let (code, stdout, _) = run_cli(
        data.path(),
        &["matrix", "classify", &tasks, "--profile", &profile, "--json"],
    );
    assert_eq!(code, 0);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["company"], "acme");
    assert_eq!(parsed["tasks"][0]["quadrant"], "mutual");
    assert_eq!(parsed["synthesis"]["distribution"]["mutual"]["percentage"], 45);
    assert_eq!(parsed["synthesis"]["sustainability"], "MEDIUM");
    assert_eq!(
        parsed["synthesis"]["decision_factors"][0],
        "CAUTION: 45% mutual quadrant is below 60% minimum"
    );

    // Not saved unless asked.
    assert!(!data.path().join("companies").exists());
}

#[test]
fn test_matrix_classify_explain() {
    let data = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let profile = write(&work, "profile.yaml", PROFILE);
    let tasks = write(&work, "acme.yaml", TASKS);

    let (code, stdout, _) = run_cli(
        data.path(),
        &["matrix", "classify", &tasks, "--profile", &profile, "--explain"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Sustainability: MEDIUM"));
    assert!(stdout.contains("strength +2 (good at), energy +5 (energizing)"));
    assert!(stdout.contains("generators: visible_progress, tool_building"));
}

#[test]
fn test_matrix_classify_reports_bad_time_share() {
    let data = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let profile = write(&work, "profile.yaml", PROFILE);
    let tasks = write(&work, "acme.yaml", &TASKS.replace("40-50%", "lots"));

    let (code, _, stderr) = run_cli(
        data.path(),
        &["matrix", "classify", &tasks, "--profile", &profile],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid time share 'lots'"), "{stderr}");
}

#[test]
fn test_matrix_save_show_and_list() {
    let data = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let profile = write(&work, "profile.yaml", PROFILE);
    let tasks = write(&work, "tasks.yaml", TASKS);

    let (code, stdout, _) = run_cli(
        data.path(),
        &[
            "matrix", "classify", &tasks, "--profile", &profile, "--company", "Acme Corp", "--save",
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Saved:"));
    assert!(data
        .path()
        .join("companies/acme-corp/energy_matrix.yaml")
        .exists());

    let (code, stdout, _) = run_cli(data.path(), &["matrix", "show", "Acme Corp", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["company"], "Acme Corp");
    assert_eq!(parsed["profile_version"], "1.0");

    let (code, stdout, _) = run_cli(data.path(), &["matrix", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("acme-corp"));
    assert!(stdout.contains("MEDIUM"));
}

#[test]
fn test_matrix_show_flags_stale_profile() {
    let data = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let profile = write(&work, "profile.yaml", PROFILE);
    let tasks = write(&work, "tasks.yaml", TASKS);

    run_cli(data.path(), &["profile", "init"]);
    run_cli(
        data.path(),
        &["matrix", "classify", &tasks, "--profile", &profile, "--company", "acme", "--save"],
    );

    let (_, _, stderr) = run_cli(data.path(), &["matrix", "show", "acme"]);
    assert!(!stderr.contains("note:"));

    run_cli(data.path(), &["profile", "update", &profile]);
    let (code, _, stderr) = run_cli(data.path(), &["matrix", "show", "acme"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("note: evaluated with profile v1.0; current profile is v1.1"));
}

#[test]
fn test_matrix_show_missing_company() {
    let data = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(data.path(), &["matrix", "show", "nobody"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("nobody"));
}

#[test]
fn test_config_get_set() {
    let data = TempDir::new().unwrap();

    let (code, stdout, _) = run_cli(
        data.path(),
        &["config", "get", "matrix.thresholds.green_minimum"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "60");

    let (code, _, _) = run_cli(
        data.path(),
        &["config", "set", "matrix.thresholds.red_maximum", "25"],
    );
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(data.path(), &["config", "get", "matrix.thresholds.red_maximum"]);
    assert_eq!(stdout.trim(), "25");

    let (code, _, _) = run_cli(
        data.path(),
        &["config", "set", "matrix.thresholds.red_maximum", "150"],
    );
    assert_eq!(code, 1);

    let (code, _, stderr) = run_cli(data.path(), &["config", "get", "matrix.thresholds.nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("valid keys: matrix.thresholds.green_minimum"), "{stderr}");

    let (code, stdout, _) = run_cli(data.path(), &["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("matrix.thresholds.red_maximum = 25"));
    assert!(stdout.contains("evaluation.warn_on_stale_profile = true"));
}

#[test]
fn test_completions_bash() {
    let data = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(data.path(), &["completions", "--shell", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("jobscope"));
}

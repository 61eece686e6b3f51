//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bagua() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("bagua").unwrap();
    // Keep user config out of the tests.
    cmd.env("HOME", std::env::temp_dir())
        .env_remove("BAGUA_DATASET")
        .env_remove("BAGUA_ANSWER_SEED")
        .env_remove("RUST_LOG");
    cmd
}

const SMALL_DATASET: &str = r#"{
  "palaces": [
    {
      "name": "乾宫",
      "hexagrams": [
        { "name": "乾为天", "lines": [1, 1, 1, 1, 1, 1] },
        { "name": "天风姤", "lines": [0, 1, 1, 1, 1, 1] }
      ]
    },
    {
      "name": "a/b palace",
      "hexagrams": [
        { "name": "坤为地", "lines": [0, 0, 0, 0, 0, 0] }
      ]
    }
  ]
}"#;

fn write_dataset(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("palaces.json");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn list_bundled_palaces() {
    bagua()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("乾宫"))
        .stdout(predicate::str::contains("兑宫"))
        .stdout(predicate::str::contains("/memory/%E4%B9%BE%E5%AE%AB"))
        .stdout(predicate::str::contains("8 palace(s)"));
}

#[test]
fn list_json() {
    let output = bagua()
        .arg("list")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0]["name"], "乾宫");
    assert_eq!(entries[0]["preview"][0], "solid");
}

#[test]
fn list_empty_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, r#"{"palaces": []}"#);

    bagua()
        .arg("list")
        .arg("--dataset")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No palaces in dataset."));
}

#[test]
fn rust_log_enables_library_debug() {
    bagua()
        .env("RUST_LOG", "bagua_core=debug")
        .arg("list")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded dataset"));
}

#[test]
fn rust_log_debug_covers_resolution() {
    bagua()
        .env("RUST_LOG", "debug")
        .arg("open")
        .arg("/memory/x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("loaded dataset"))
        .stderr(predicate::str::contains("palace not found: x"));
}

#[test]
fn default_log_level_hides_debug() {
    bagua()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded dataset").not());
}

#[test]
fn memory_view() {
    bagua()
        .arg("memory")
        .arg("坤宫")
        .assert()
        .success()
        .stdout(predicate::str::contains("地雷复"))
        .stdout(predicate::str::contains("水地比"))
        .stdout(predicate::str::contains("/test/%E5%9D%A4%E5%AE%AB"));
}

#[test]
fn memory_unknown_palace() {
    bagua()
        .arg("memory")
        .arg("无宫")
        .assert()
        .failure()
        .stderr(predicate::str::contains("palace not found: 无宫"));
}

#[test]
fn open_escaped_path() {
    bagua()
        .arg("open")
        .arg("/memory/%E4%B9%BE%E5%AE%AB")
        .assert()
        .success()
        .stdout(predicate::str::contains("火天大有"));
}

#[test]
fn open_name_with_slash() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SMALL_DATASET);

    bagua()
        .arg("--dataset")
        .arg(&path)
        .arg("open")
        .arg("/memory/a%2Fb%20palace")
        .assert()
        .success()
        .stdout(predicate::str::contains("坤为地"));
}

#[test]
fn open_invalid_path() {
    bagua()
        .arg("open")
        .arg("/settings")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown view: settings"));
}

#[test]
fn test_session_over_stdin() {
    bagua()
        .arg("test")
        .arg("乾宫")
        .write_stdin("toggle 1 1\nsubmit\nretest\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hexagram 1 line 1 -> yin"))
        .stdout(predicate::str::contains("错误"))
        .stdout(predicate::str::contains("Score: 0/8"))
        .stdout(predicate::str::contains("Answers cleared."));
}

#[test]
fn test_all_correct_with_small_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SMALL_DATASET);

    bagua()
        .arg("test")
        .arg("乾宫")
        .arg("--dataset")
        .arg(&path)
        .write_stdin("name 1 乾为天\nname 2 天风姤\nsubmit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2/2"));
}

#[test]
fn test_neutral_seed_fails_untouched_lines() {
    bagua()
        .arg("test")
        .arg("乾宫")
        .arg("--seed")
        .arg("yin")
        .write_stdin("name 1 乾为天\nsubmit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0/8"));
}

#[test]
fn test_writes_report() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("result.html");

    bagua()
        .arg("test")
        .arg("震宫")
        .arg("--report")
        .arg(&report)
        .write_stdin("name 1 震为雷\nsubmit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Test report"));

    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.contains("震为雷"));
    assert!(html.contains("1/8 正确"));
}

#[test]
fn seed_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bagua.toml"), "answer_seed = \"yang\"\n").unwrap();

    // 坤为地 is all yin, so a yang seed fails it even with the right name.
    bagua()
        .current_dir(dir.path())
        .arg("test")
        .arg("坤宫")
        .write_stdin("name 1 坤为地\nsubmit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0/8"));
}

#[test]
fn validate_bundled() {
    bagua()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("8 palaces, 64 hexagrams, 6 lines each"))
        .stdout(predicate::str::contains("Dataset valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        r#"{"palaces":[{"name":"x","hexagrams":[]},{"name":"x","hexagrams":[]}]}"#,
    );

    bagua()
        .arg("validate")
        .arg("--dataset")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate palace name: x"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_dataset() {
    bagua()
        .arg("validate")
        .arg("--dataset")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn export_study_page() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("study.html");

    bagua()
        .arg("export")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("id=\"/memory/%E4%B9%BE%E5%AE%AB\""));
    assert!(html.contains("雷泽归妹"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    bagua()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created bagua.toml"))
        .stdout(predicate::str::contains("Created palaces.json"));

    assert!(dir.path().join("bagua.toml").exists());
    assert!(dir.path().join("palaces.json").exists());

    // The starter config points at the copied dataset.
    bagua()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("palaces.json"))
        .stdout(predicate::str::contains("Dataset valid."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    bagua().current_dir(dir.path()).arg("init").assert().success();

    bagua()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    bagua()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eight Palaces hexagram study tool"));
}

#[test]
fn version_output() {
    bagua()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bagua"));
}

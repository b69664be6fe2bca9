//! 일회성 명령(calc/table) 실행 테스트.
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn work_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "gold_karat_toolbox_cli_{}_{name}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn toolbox() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gold_karat_toolbox"))
}

#[test]
fn calc_works_without_writable_config() {
    let dir = work_dir("calc");
    let config = dir.join("missing_dir").join("config.toml");
    let out = toolbox()
        .current_dir(&dir)
        .args(["--lang", "en", "--config"])
        .arg(&config)
        .args(["calc", "--air", "10.5", "--water", "9.8", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["final_range_label"], "12K–18K");
    assert!(!config.exists());
    assert!(!dir.join("config.toml").exists());
}

#[test]
fn table_does_not_create_default_config() {
    let dir = work_dir("table");
    let out = toolbox()
        .current_dir(&dir)
        .args(["--lang", "en", "table", "--filter", "18", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(!rows.as_array().unwrap().is_empty());
    assert!(!dir.join("config.toml").exists());
}

#[test]
fn invalid_weights_exit_with_failure() {
    let dir = work_dir("invalid");
    let out = toolbox()
        .current_dir(&dir)
        .args(["--lang", "en", "calc", "--air", "1", "--water", "1"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("error:"));
}

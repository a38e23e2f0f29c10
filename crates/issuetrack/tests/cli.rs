// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests that run the compiled `issuetrack` binary.

use std::process::Command;

fn issuetrack(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_issuetrack"));
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("DB_URL")
        .env_remove("API_SERVER_PORT")
        .env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd
}

#[test]
fn schema_subcommand_prints_sdl() {
    let dir = tempfile::tempdir().unwrap();
    let output = issuetrack(dir.path()).arg("schema").output().unwrap();
    assert!(output.status.success());

    let sdl = String::from_utf8(output.stdout).unwrap();
    assert!(sdl.contains("scalar GraphQLDate"));
    assert!(sdl.contains("issueAdd(issue: IssueInputs!): Issue!"));
}

#[test]
fn config_subcommand_prints_resolved_toml() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("issuetrack.toml"),
        "[service]\nabout_message = \"From the file\"\n",
    )
    .unwrap();

    let output = issuetrack(dir.path())
        .arg("config")
        .env("ISSUETRACK_SERVER_PORT", "4100")
        .env("DB_URL", "/var/tmp/legacy.db")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let rendered: toml::Value = toml::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(rendered["service"]["about_message"].as_str(), Some("From the file"));
    assert_eq!(rendered["server"]["port"].as_integer(), Some(4100));
    assert_eq!(
        rendered["storage"]["database_path"].as_str(),
        Some("/var/tmp/legacy.db")
    );
}

#[test]
fn invalid_config_file_exits_with_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[server]\nprot = 3000\n").unwrap();

    let output = issuetrack(dir.path())
        .arg("config")
        .arg("--config")
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("prot"), "stderr: {stderr}");
}

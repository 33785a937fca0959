//! The postboard binary: argument handling and headless commands.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{free_port, temp_config};
use serde_json::json;
use std::process::{Command, Output};

fn postboard(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_postboard"))
        .args(args)
        .output()
        .expect("Failed to run postboard")
}

#[test]
fn help_lists_options_and_commands() {
    let output = postboard(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--config"));
    for command in ["list", "add", "edit", "delete"] {
        assert!(stdout.contains(command), "missing {}", command);
    }
}

#[test]
fn unreadable_config_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");
    let output = postboard(&["--config", missing.to_str().unwrap(), "list"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read config file"));
}

#[test]
fn list_against_unreachable_service_fails() {
    let (_dir, path) = temp_config("");
    let base_url = format!("http://127.0.0.1:{}", free_port());
    let output = postboard(&[
        "--config",
        path.to_str().unwrap(),
        "--base-url",
        &base_url,
        "list",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: Failed to fetch posts"));
}

#[tokio::test]
async fn list_and_add_against_mock_service() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::posts(json!([
        {"id": 1, "author": "A", "body": "B"},
    ])))
    .await;
    mock.enqueue_response(MockResponse::post(json!({"id": 2, "author": "X", "body": "Y"})))
        .await;

    let (_dir, path) = temp_config(&format!("[api]\nbase_url = \"{}\"\n", mock.base_url()));
    let config = path.to_str().unwrap().to_string();

    let list = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || postboard(&["--config", &config, "list"]))
            .await
            .unwrap()
    };
    assert!(list.status.success());
    assert!(String::from_utf8_lossy(&list.stdout).contains("#1 A: B"));

    let add = tokio::task::spawn_blocking(move || {
        postboard(&["--config", &config, "add", "--author", "X", "--body", "Y"])
    })
    .await
    .unwrap();
    assert!(add.status.success());
    assert!(String::from_utf8_lossy(&add.stdout).contains("Created #2 X: Y"));

    let requests = mock.captured_requests().await;
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].json(), json!({"author": "X", "body": "Y"}));
}

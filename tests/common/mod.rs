//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use postboard::api::HttpPostsApi;
use postboard::config::ApiConfig;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// A local port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Client pointed at `base_url`.
pub fn api_for(base_url: &str) -> HttpPostsApi {
    HttpPostsApi::new(&ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    })
    .expect("Failed to build client")
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

#![allow(dead_code)]

use anyhow::Context as _;
use rest_mcp_test_support::{MockBackend, ScriptedResponse};
use rest_mcp_tools::config::Credential;
use rest_mcp_tools::server::RestToolServer;
use serde_json::{Value, json};
use std::process::{Child, Command, Stdio};

/// A mock dev.to mounted under `/api`, and a server pointed at it.
pub async fn devto_against_mock(
    response: ScriptedResponse,
    api_key: Option<&str>,
) -> anyhow::Result<(MockBackend, RestToolServer)> {
    let backend = MockBackend::start(response).await?;
    let config = rest_mcp_devto::backend_config(
        &format!("{}/api", backend.base_url()),
        api_key.and_then(|k| Credential::non_empty(k.to_string())),
    )?;
    let server = rest_mcp_devto::server(config)?;
    Ok((backend, server))
}

pub fn ok_json() -> ScriptedResponse {
    ScriptedResponse::json(200, &json!({"ok": true}))
}

pub fn spawn_devto_mcp(base_url: &str) -> anyhow::Result<Child> {
    let bin = env!("CARGO_BIN_EXE_devto-mcp");
    Command::new(bin)
        .arg("--base-url")
        .arg(base_url)
        .arg("--log-level")
        .arg("warn")
        .env_remove("DEVTO_API_KEY")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn devto-mcp")
}

pub fn rpc_line(id: Option<u64>, method: &str, params: Value) -> String {
    let mut msg = json!({"jsonrpc": "2.0", "method": method, "params": params});
    if let Some(id) = id {
        msg["id"] = json!(id);
    }
    format!("{msg}\n")
}

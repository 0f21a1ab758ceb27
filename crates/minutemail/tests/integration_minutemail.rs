use anyhow::Context as _;
use rest_mcp_test_support::{MockBackend, ScriptedResponse};
use rest_mcp_tools::RestToolsError;
use rest_mcp_tools::config::Credential;
use rest_mcp_tools::server::RestToolServer;
use rest_mcp_tools::tool::ToolOutcome;
use serde_json::json;
use std::process::{Command, Stdio};

const KEY: &str = "mm-secret";

async fn minutemail_against_mock(
    response: ScriptedResponse,
) -> anyhow::Result<(MockBackend, RestToolServer)> {
    let backend = MockBackend::start(response).await?;
    let config = rest_mcp_minutemail::backend_config(
        &format!("{}/v1", backend.base_url()),
        Credential::non_empty(KEY.to_string()),
    )?;
    let server = rest_mcp_minutemail::server(config)?;
    Ok((backend, server))
}

#[test]
fn catalog_has_eighteen_tools() -> anyhow::Result<()> {
    let catalog = rest_mcp_minutemail::catalog()?;
    assert_eq!(catalog.len(), 18);
    for tool in catalog.tools() {
        assert!(tool.requires_auth || tool.method == "GET", "{}", tool.name);
    }
    Ok(())
}

#[test]
fn missing_key_is_a_startup_error() -> anyhow::Result<()> {
    let config = rest_mcp_minutemail::backend_config("http://127.0.0.1:9/v1", None)?;
    let err = rest_mcp_minutemail::server(config).expect_err("no key must not start");
    assert!(matches!(err, RestToolsError::Config(_)), "{err:?}");
    assert!(
        err.to_string().contains(
            "MinuteMail API key is required. Set the MINUTEMAIL_API_KEY environment variable."
        ),
        "{err}"
    );
    Ok(())
}

#[test]
fn binary_exits_nonzero_without_key() -> anyhow::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_minutemail-mcp"))
        .arg("--base-url")
        .arg("http://127.0.0.1:9/v1")
        .env_remove("MINUTEMAIL_API_KEY")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .context("run minutemail-mcp")?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout is reserved for MCP");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MINUTEMAIL_API_KEY"), "{stderr}");
    Ok(())
}

#[test]
fn blank_key_flag_falls_back_to_missing() -> anyhow::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_minutemail-mcp"))
        .args(["--api-key", "   ", "--base-url", "http://127.0.0.1:9/v1"])
        .env_remove("MINUTEMAIL_API_KEY")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .context("run minutemail-mcp")?;
    assert!(!output.status.success());
    Ok(())
}

#[tokio::test]
async fn every_call_sends_one_bearer_header() -> anyhow::Result<()> {
    let (backend, server) =
        minutemail_against_mock(ScriptedResponse::json(200, &json!([]))).await?;

    server.call("list_mailboxes", json!({})).await;
    server.call("list_archived_mailboxes", json!({})).await;
    server
        .call("list_messages", json!({"mailboxId": "mb_1"}))
        .await;

    let reqs = backend.requests();
    assert_eq!(reqs.len(), 3);
    for req in &reqs {
        assert_eq!(req.header_values("authorization"), vec!["Bearer mm-secret"]);
        assert_eq!(req.header("accept"), Some("application/json"));
    }
    assert_eq!(reqs[0].path, "/v1/mailboxes");
    assert_eq!(reqs[1].path, "/v1/archived-mailboxes");
    assert_eq!(reqs[2].path, "/v1/mailboxes/mb_1/mails");
    Ok(())
}

#[tokio::test]
async fn create_mailbox_without_arguments_sends_empty_object() -> anyhow::Result<()> {
    let created = json!({"id": "mb_9", "address": "x@minutemail.co"});
    let (backend, server) =
        minutemail_against_mock(ScriptedResponse::json(201, &created)).await?;

    let out = server.call("create_mailbox", json!({})).await;
    assert_eq!(out, ToolOutcome::Success(created));

    let req = backend.single_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/v1/mailboxes");
    assert_eq!(req.body_json(), Some(json!({})));
    Ok(())
}

#[tokio::test]
async fn create_mailbox_sends_set_fields_only() -> anyhow::Result<()> {
    let (backend, server) =
        minutemail_against_mock(ScriptedResponse::json(201, &json!({"id": "mb"}))).await?;

    server
        .call("create_mailbox", json!({"expiresIn": 30, "recoverable": true}))
        .await;
    let req = backend.single_request();
    assert_eq!(req.body_json(), Some(json!({"expiresIn": 30, "recoverable": true})));
    Ok(())
}

#[tokio::test]
async fn create_mailbox_drops_blank_domain_and_tag() -> anyhow::Result<()> {
    let (backend, server) =
        minutemail_against_mock(ScriptedResponse::json(201, &json!({"id": "mb"}))).await?;

    server
        .call(
            "create_mailbox",
            json!({"domain": "", "tag": "", "expiresIn": 5}),
        )
        .await;
    let req = backend.single_request();
    assert_eq!(req.body_json(), Some(json!({"expiresIn": 5})));
    Ok(())
}

#[tokio::test]
async fn expires_in_outside_range_is_rejected_locally() -> anyhow::Result<()> {
    let (backend, server) =
        minutemail_against_mock(ScriptedResponse::json(201, &json!({}))).await?;

    for bad in [0, 61] {
        let out = server
            .call("create_mailbox", json!({"expiresIn": bad}))
            .await;
        assert!(out.is_failure(), "expiresIn {bad} accepted");
        assert!(out.display_text().contains("expiresIn"), "{}", out.display_text());
    }
    assert_eq!(backend.request_count(), 0);
    Ok(())
}

#[tokio::test]
async fn bulk_delete_sends_ids_in_delete_body() -> anyhow::Result<()> {
    let (backend, server) = minutemail_against_mock(ScriptedResponse::no_content()).await?;

    let out = server
        .call("bulk_delete_mailboxes", json!({"ids": ["a", "b"]}))
        .await;
    assert_eq!(out, ToolOutcome::Success(json!({"success": true})));

    let req = backend.single_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/v1/mailboxes");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.body_json(), Some(json!({"ids": ["a", "b"]})));
    Ok(())
}

#[tokio::test]
async fn bulk_delete_requires_ids() -> anyhow::Result<()> {
    let (backend, server) = minutemail_against_mock(ScriptedResponse::no_content()).await?;

    let out = server
        .call("bulk_delete_messages", json!({"mailboxId": "mb"}))
        .await;
    assert!(out.is_failure());
    assert_eq!(backend.request_count(), 0);
    Ok(())
}

#[tokio::test]
async fn reactivate_posts_without_body() -> anyhow::Result<()> {
    let (backend, server) =
        minutemail_against_mock(ScriptedResponse::json(200, &json!({"id": "mb_new"}))).await?;

    let out = server
        .call("reactivate_archived_mailbox", json!({"id": "arch_1"}))
        .await;
    assert_eq!(out, ToolOutcome::Success(json!({"id": "mb_new"})));

    let req = backend.single_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/v1/archived-mailboxes/arch_1/reactivate");
    assert!(req.body.is_empty());
    Ok(())
}

#[tokio::test]
async fn attachment_content_passes_through() -> anyhow::Result<()> {
    let payload = json!({"filename": "a.txt", "content": "aGVsbG8="});
    let (backend, server) =
        minutemail_against_mock(ScriptedResponse::json(200, &payload)).await?;

    let out = server
        .call(
            "get_attachment",
            json!({"mailboxId": "mb", "mailId": "m 1", "attachmentId": "att"}),
        )
        .await;
    assert_eq!(out, ToolOutcome::Success(payload));
    assert_eq!(
        backend.single_request().path,
        "/v1/mailboxes/mb/mails/m%201/attachments/att"
    );
    Ok(())
}

#[tokio::test]
async fn coded_error_renders_status_code_and_message() -> anyhow::Result<()> {
    let (_backend, server) = minutemail_against_mock(ScriptedResponse::json(
        404,
        &json!({"code": "mailbox_not_found", "message": "Mailbox not found"}),
    ))
    .await?;

    let out = server.call("get_mailbox", json!({"mailboxId": "nope"})).await;
    assert_eq!(
        out,
        ToolOutcome::Failure("[404] mailbox_not_found: Mailbox not found".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn non_json_error_uses_unknown_error_code() -> anyhow::Result<()> {
    let (_backend, server) = minutemail_against_mock(ScriptedResponse::raw(
        500,
        Some("text/plain"),
        "boom",
    ))
    .await?;

    let out = server.call("list_mailboxes", json!({})).await;
    assert_eq!(
        out.display_text(),
        "[500] unknown_error: Internal Server Error"
    );
    Ok(())
}

use super::ids;
use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

fn archived_id(description: &'static str) -> ParamSpec {
    ParamSpec::string("id", description).in_path()
}

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        ToolDef::get(
            "list_archived_mailboxes",
            "/archived-mailboxes",
            "List all archived mailboxes",
        )
        .build()?,
        ToolDef::get(
            "get_archived_mailbox",
            "/archived-mailboxes/{id}",
            "Get details of a specific archived mailbox",
        )
        .param(archived_id("The archived mailbox ID"))
        .build()?,
        // POST without a body.
        ToolDef::post(
            "reactivate_archived_mailbox",
            "/archived-mailboxes/{id}/reactivate",
            "Reactivate an archived mailbox, creating a new empty mailbox at the same address",
        )
        .param(archived_id("The archived mailbox ID to reactivate"))
        .build()?,
        ToolDef::delete(
            "delete_archived_mailbox",
            "/archived-mailboxes/{id}",
            "Permanently delete a single archived mailbox",
        )
        .acknowledge()
        .param(archived_id("The archived mailbox ID to delete"))
        .build()?,
        ToolDef::delete(
            "bulk_delete_archived_mailboxes",
            "/archived-mailboxes",
            "Permanently delete multiple archived mailboxes atomically",
        )
        .acknowledge()
        .param(ids("Array of archived mailbox IDs to delete"))
        .build()?,
    ])
}

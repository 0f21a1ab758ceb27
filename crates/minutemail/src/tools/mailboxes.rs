use super::ids;
use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        // Always sends a body, `{}` when nothing is set. Blank domain and tag are left out.
        ToolDef::post("create_mailbox", "/mailboxes", "Create a new temporary mailbox")
            .params([
                ParamSpec::string("domain", "Email domain to use")
                    .in_body()
                    .omit_blank(),
                ParamSpec::integer("expiresIn", "TTL in minutes (1-60)")
                    .range(1, 60)
                    .in_body(),
                ParamSpec::boolean(
                    "recoverable",
                    "If true, the address is archived after expiry for later reuse",
                )
                .in_body(),
                ParamSpec::string("tag", "Optional label for the mailbox")
                    .in_body()
                    .omit_blank(),
            ])
            .build()?,
        ToolDef::get("list_mailboxes", "/mailboxes", "List all active mailboxes")
            .param(ParamSpec::string("address", "Filter by email address"))
            .build()?,
        ToolDef::get(
            "get_mailbox",
            "/mailboxes/{mailboxId}",
            "Get details of a specific mailbox",
        )
        .param(super::mailbox_id())
        .build()?,
        ToolDef::delete(
            "delete_mailbox",
            "/mailboxes/{mailboxId}",
            "Delete a single mailbox",
        )
        .acknowledge()
        .param(ParamSpec::string("mailboxId", "The mailbox ID to delete").in_path())
        .build()?,
        ToolDef::delete(
            "bulk_delete_mailboxes",
            "/mailboxes",
            "Delete multiple mailboxes atomically",
        )
        .acknowledge()
        .param(ids("Array of mailbox IDs to delete"))
        .build()?,
    ])
}

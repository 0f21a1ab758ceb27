use super::{ids, mail_id, mailbox_id};
use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

fn attachment_id(description: &'static str) -> ParamSpec {
    ParamSpec::string("attachmentId", description).in_path()
}

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        ToolDef::get(
            "list_attachments",
            "/mailboxes/{mailboxId}/mails/{mailId}/attachments",
            "List all attachments in a specific email",
        )
        .params([mailbox_id(), mail_id("The message ID")])
        .build()?,
        // Content comes back Base64-encoded inside the JSON payload; passed through as is.
        ToolDef::get(
            "get_attachment",
            "/mailboxes/{mailboxId}/mails/{mailId}/attachments/{attachmentId}",
            "Download a specific attachment (content returned as Base64)",
        )
        .params([
            mailbox_id(),
            mail_id("The message ID"),
            attachment_id("The attachment ID"),
        ])
        .build()?,
        ToolDef::delete(
            "delete_attachment",
            "/mailboxes/{mailboxId}/mails/{mailId}/attachments/{attachmentId}",
            "Delete a specific attachment",
        )
        .acknowledge()
        .params([
            mailbox_id(),
            mail_id("The message ID"),
            attachment_id("The attachment ID to delete"),
        ])
        .build()?,
        ToolDef::delete(
            "bulk_delete_attachments",
            "/mailboxes/{mailboxId}/mails/{mailId}/attachments",
            "Delete multiple attachments atomically",
        )
        .acknowledge()
        .params([
            mailbox_id(),
            mail_id("The message ID"),
            ids("Array of attachment IDs to delete"),
        ])
        .build()?,
    ])
}

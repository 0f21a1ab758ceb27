use super::{ids, mail_id, mailbox_id};
use rest_mcp_tools::Result;
use rest_mcp_tools::tool::ToolDef;

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        ToolDef::get(
            "list_messages",
            "/mailboxes/{mailboxId}/mails",
            "List all emails in a mailbox",
        )
        .param(mailbox_id())
        .build()?,
        ToolDef::get(
            "get_message",
            "/mailboxes/{mailboxId}/mails/{mailId}",
            "Get a specific email from a mailbox",
        )
        .params([mailbox_id(), mail_id("The message ID")])
        .build()?,
        ToolDef::delete(
            "delete_message",
            "/mailboxes/{mailboxId}/mails/{mailId}",
            "Delete a specific email from a mailbox",
        )
        .acknowledge()
        .params([mailbox_id(), mail_id("The message ID to delete")])
        .build()?,
        ToolDef::delete(
            "bulk_delete_messages",
            "/mailboxes/{mailboxId}/mails",
            "Delete multiple emails from a mailbox atomically",
        )
        .acknowledge()
        .params([mailbox_id(), ids("Array of message IDs to delete")])
        .build()?,
    ])
}

mod archived_mailboxes;
mod attachments;
mod mailboxes;
mod messages;

use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

pub(crate) fn all() -> Result<Vec<ToolDef>> {
    let mut tools = Vec::new();
    tools.extend(mailboxes::tools()?);
    tools.extend(archived_mailboxes::tools()?);
    tools.extend(messages::tools()?);
    tools.extend(attachments::tools()?);
    Ok(tools)
}

fn mailbox_id() -> ParamSpec {
    ParamSpec::string("mailboxId", "The mailbox ID").in_path()
}

fn mail_id(description: &'static str) -> ParamSpec {
    ParamSpec::string("mailId", description).in_path()
}

/// Bulk deletes send `DELETE` with `{"ids": [...]}` as the body.
fn ids(description: &'static str) -> ParamSpec {
    ParamSpec::string_array("ids", description).required().in_body()
}

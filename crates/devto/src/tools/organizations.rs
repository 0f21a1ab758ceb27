use super::paging;
use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

fn org_username() -> ParamSpec {
    ParamSpec::string("username", "The organization's username").in_path()
}

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        ToolDef::get(
            "get_organization",
            "/organizations/{username}",
            "Get an organization's profile by username",
        )
        .param(org_username())
        .build()?,
        ToolDef::get(
            "list_organization_users",
            "/organizations/{username}/users",
            "List members of an organization",
        )
        .param(org_username())
        .params(paging())
        .build()?,
        ToolDef::get(
            "list_organization_articles",
            "/organizations/{username}/articles",
            "List articles published by an organization",
        )
        .param(org_username())
        .params(paging())
        .build()?,
    ])
}

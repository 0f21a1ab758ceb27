mod articles;
mod comments;
mod display_ads;
mod misc;
mod organizations;
mod pages;
mod users;

use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

pub(crate) fn all() -> Result<Vec<ToolDef>> {
    let mut tools = Vec::new();
    tools.extend(articles::tools()?);
    tools.extend(comments::tools()?);
    tools.extend(users::tools()?);
    tools.extend(organizations::tools()?);
    tools.extend(misc::tools()?);
    tools.extend(pages::tools()?);
    tools.extend(display_ads::tools()?);
    Ok(tools)
}

/// `page` and `per_page` (1–1000).
fn paging() -> [ParamSpec; 2] {
    [
        ParamSpec::integer("page", "Page number (default: 1)"),
        ParamSpec::integer("per_page", "Items per page").range(1, 1000),
    ]
}

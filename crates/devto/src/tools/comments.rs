use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        ToolDef::get(
            "list_comments",
            "/comments",
            "List comments for an article or podcast episode",
        )
        .params([
            ParamSpec::integer("a_id", "Article ID to fetch comments for"),
            ParamSpec::integer("p_id", "Podcast episode ID to fetch comments for"),
        ])
        .build()?,
        ToolDef::get(
            "get_comment",
            "/comments/{id}",
            "Get a single comment and all its descendants",
        )
        .param(ParamSpec::string("id", "The comment ID code").in_path())
        .build()?,
    ])
}

use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

const TEMPLATES: &[&str] = &["contained", "full_within_layout", "nav_bar_included", "json"];

/// Page fields. On create the first four are required; on update everything is optional.
fn page_fields(create: bool) -> Vec<ParamSpec> {
    let req = |p: ParamSpec| if create { p.required() } else { p };
    vec![
        req(ParamSpec::string("title", "Page title").in_body()),
        req(ParamSpec::string("slug", "URL slug for the page").in_body()),
        req(ParamSpec::string("description", "Page description").in_body()),
        req(ParamSpec::string("template", "Page layout template")
            .one_of(TEMPLATES)
            .in_body()),
        ParamSpec::string("body_markdown", "Page body in Markdown").in_body(),
        ParamSpec::string("body_json", "Page body as JSON (for json template)").in_body(),
        ParamSpec::boolean("is_top_level_path", "Whether to use a top-level URL path").in_body(),
    ]
}

fn page_id(description: &'static str) -> ParamSpec {
    ParamSpec::integer("id", description).in_path()
}

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        ToolDef::get("list_pages", "/pages", "List all custom pages on the platform").build()?,
        ToolDef::get("get_page", "/pages/{id}", "Get a specific custom page by ID")
            .param(page_id("The page ID"))
            .build()?,
        ToolDef::post(
            "create_page",
            "/pages",
            "Create a new custom page (requires authentication)",
        )
        .params(page_fields(true))
        .build()?,
        ToolDef::put(
            "update_page",
            "/pages/{id}",
            "Update an existing custom page (requires authentication)",
        )
        .param(page_id("The page ID to update"))
        .params(page_fields(false))
        .build()?,
        ToolDef::delete(
            "delete_page",
            "/pages/{id}",
            "Delete a custom page (requires authentication)",
        )
        .acknowledge()
        .param(page_id("The page ID to delete"))
        .build()?,
    ])
}

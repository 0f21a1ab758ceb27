use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

const AD_TYPES: &[&str] = &["in_house", "community", "external"];

fn ad_fields(create: bool) -> Vec<ParamSpec> {
    let req = |p: ParamSpec| if create { p.required() } else { p };
    vec![
        req(ParamSpec::string("name", "Ad name (internal reference)").in_body()),
        req(ParamSpec::string("body_markdown", "Ad body in Markdown").in_body()),
        req(ParamSpec::string("placement_area", "Where the ad is displayed").in_body()),
        ParamSpec::boolean("approved", "Whether the ad is approved").in_body(),
        ParamSpec::boolean("published", "Whether the ad is live").in_body(),
        ParamSpec::string("tag_list", "Comma-separated tag list to target").in_body(),
        ParamSpec::string("type_of", "Ad type").one_of(AD_TYPES).in_body(),
    ]
}

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        ToolDef::get(
            "list_display_ads",
            "/display_ads",
            "List all display ads (requires admin privileges)",
        )
        .auth(true)
        .build()?,
        ToolDef::get(
            "get_display_ad",
            "/display_ads/{id}",
            "Get a specific display ad by ID (requires admin privileges)",
        )
        .auth(true)
        .param(ParamSpec::integer("id", "The display ad ID").in_path())
        .build()?,
        ToolDef::post(
            "create_display_ad",
            "/display_ads",
            "Create a new display ad (requires admin privileges)",
        )
        .params(ad_fields(true))
        .build()?,
        ToolDef::put(
            "update_display_ad",
            "/display_ads/{id}",
            "Update an existing display ad (requires admin privileges)",
        )
        .param(ParamSpec::integer("id", "The display ad ID to update").in_path())
        .params(ad_fields(false))
        .build()?,
        ToolDef::put(
            "unpublish_display_ad",
            "/display_ads/{id}/unpublish",
            "Unpublish a display ad (requires admin privileges)",
        )
        .acknowledge()
        .param(ParamSpec::integer("id", "The display ad ID to unpublish").in_path())
        .build()?,
    ])
}

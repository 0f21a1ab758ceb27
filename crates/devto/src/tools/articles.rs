use super::paging;
use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

const STATES: &[&str] = &["fresh", "rising", "all"];

/// Writable article fields, all sent under `{"article": {...}}`.
fn article_fields(title_required: bool) -> Vec<ParamSpec> {
    let title = ParamSpec::string("title", "Article title").in_body();
    vec![
        if title_required { title.required() } else { title },
        ParamSpec::string("body_markdown", "Article body in Markdown").in_body(),
        ParamSpec::boolean("published", "Publish immediately (default: false = draft)").in_body(),
        ParamSpec::string_array("tags", "Array of tag strings").in_body(),
        ParamSpec::string("series", "Series name to add this article to").in_body(),
        ParamSpec::string("canonical_url", "Canonical URL if cross-posting").in_body(),
        ParamSpec::string("description", "Article description/summary").in_body(),
        ParamSpec::string("main_image", "Cover image URL").in_body(),
        ParamSpec::integer("organization_id", "Publish under an organization").in_body(),
    ]
}

fn my_articles(name: &'static str, path: &'static str, description: &'static str) -> Result<ToolDef> {
    ToolDef::get(name, path, description)
        .auth(true)
        .params(paging())
        .build()
}

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        ToolDef::get(
            "list_articles",
            "/articles",
            "List articles on dev.to with optional filters",
        )
        .params(paging())
        .params([
            ParamSpec::string("tag", "Filter by tag slug"),
            ParamSpec::string("tags", "Comma-separated list of tags to include"),
            ParamSpec::string("tags_exclude", "Comma-separated list of tags to exclude"),
            ParamSpec::string("username", "Filter by author username"),
            ParamSpec::string("state", "Filter by article state").one_of(STATES),
            ParamSpec::integer("top", "Return top articles from the last N days"),
            ParamSpec::integer("collection_id", "Filter by collection ID"),
        ])
        .build()?,
        ToolDef::get(
            "list_latest_articles",
            "/articles/latest",
            "List the latest articles ordered by publish date",
        )
        .params(paging())
        .build()?,
        ToolDef::get(
            "get_article_by_id",
            "/articles/{id}",
            "Get a specific article by its ID",
        )
        .param(ParamSpec::integer("id", "The article ID").in_path())
        .build()?,
        ToolDef::get(
            "get_article_by_path",
            "/articles/{username}/{slug}",
            "Get a specific article by author username and slug",
        )
        .params([
            ParamSpec::string("username", "The author's username").in_path(),
            ParamSpec::string("slug", "The article slug").in_path(),
        ])
        .build()?,
        ToolDef::get("list_videos", "/videos", "List articles with video content")
            .params(paging())
            .build()?,
        ToolDef::post(
            "create_article",
            "/articles",
            "Create a new article (requires authentication)",
        )
        .wrap_body("article")
        .params(article_fields(true))
        .build()?,
        ToolDef::put(
            "update_article",
            "/articles/{id}",
            "Update an existing article (requires authentication, must be article owner)",
        )
        .wrap_body("article")
        .param(ParamSpec::integer("id", "The article ID to update").in_path())
        .params(article_fields(false))
        .build()?,
        my_articles(
            "list_my_articles",
            "/articles/me",
            "List the authenticated user's articles (most recent first)",
        )?,
        my_articles(
            "list_my_published_articles",
            "/articles/me/published",
            "List the authenticated user's published articles",
        )?,
        my_articles(
            "list_my_unpublished_articles",
            "/articles/me/unpublished",
            "List the authenticated user's unpublished (draft) articles",
        )?,
        my_articles(
            "list_all_my_articles",
            "/articles/me/all",
            "List all of the authenticated user's articles (published and drafts)",
        )?,
        ToolDef::put(
            "unpublish_article",
            "/articles/{id}/unpublish",
            "Unpublish an article (requires admin or moderator privileges)",
        )
        .acknowledge()
        .params([
            ParamSpec::integer("id", "The article ID to unpublish").in_path(),
            ParamSpec::string("note", "Reason for unpublishing"),
        ])
        .build()?,
    ])
}

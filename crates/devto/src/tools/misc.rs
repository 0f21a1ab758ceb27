//! Tags, followers, podcasts, profile images, reactions and the reading list.

use super::paging;
use rest_mcp_tools::Result;
use rest_mcp_tools::schema::ParamSpec;
use rest_mcp_tools::tool::ToolDef;

const REACTION_CATEGORIES: &[&str] = &["like", "unicorn", "exploding_head", "raised_hands", "fire"];
const REACTABLE_TYPES: &[&str] = &["Article", "Comment", "User"];

/// Reactions take their arguments in the query string, not the body.
fn reaction_params() -> [ParamSpec; 3] {
    [
        ParamSpec::string("category", "Reaction type")
            .one_of(REACTION_CATEGORIES)
            .required(),
        ParamSpec::integer("reactable_id", "ID of the item to react to").required(),
        ParamSpec::string("reactable_type", "Type of item to react to")
            .one_of(REACTABLE_TYPES)
            .required(),
    ]
}

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        ToolDef::get("list_tags", "/tags", "List popular tags ordered by usage")
            .params(paging())
            .build()?,
        ToolDef::get(
            "list_followed_tags",
            "/follows/tags",
            "List tags the authenticated user follows (requires authentication)",
        )
        .auth(true)
        .build()?,
        ToolDef::get(
            "list_followers",
            "/followers/users",
            "List users who follow the authenticated user (requires authentication)",
        )
        .auth(true)
        .params(paging())
        .param(ParamSpec::string("sort", "Sort field (default: created_at)"))
        .build()?,
        ToolDef::get(
            "list_podcast_episodes",
            "/podcast_episodes",
            "List podcast episodes",
        )
        .params(paging())
        .param(ParamSpec::string("username", "Filter by podcast username"))
        .build()?,
        ToolDef::get(
            "get_profile_image",
            "/profile_images/{username}",
            "Get a user's or organization's profile image URLs (requires authentication)",
        )
        .auth(true)
        .param(ParamSpec::string("username", "The username to fetch the profile image for").in_path())
        .build()?,
        ToolDef::post(
            "create_reaction",
            "/reactions",
            "Add a reaction to an article, comment, or user (requires authentication)",
        )
        .params(reaction_params())
        .build()?,
        ToolDef::post(
            "toggle_reaction",
            "/reactions/toggle",
            "Toggle a reaction: creates it if absent, removes it if present (requires authentication)",
        )
        .params(reaction_params())
        .build()?,
        ToolDef::get(
            "list_reading_list",
            "/readinglist",
            "List the authenticated user's reading list (requires authentication)",
        )
        .auth(true)
        .params(paging())
        .build()?,
    ])
}

use rest_mcp_tools::Result;
use rest_mcp_tools::schema::{ParamSpec, ParamType};
use rest_mcp_tools::tool::ToolDef;

pub(super) fn tools() -> Result<Vec<ToolDef>> {
    Ok(vec![
        ToolDef::get(
            "get_current_user",
            "/users/me",
            "Get the authenticated user's profile (requires authentication)",
        )
        .auth(true)
        .build()?,
        ToolDef::get(
            "get_user",
            "/users/{id}",
            "Get a user's profile by ID (requires authentication)",
        )
        .auth(true)
        .param(ParamSpec::new("id", ParamType::IntegerOrString, "The user ID or username").in_path())
        .build()?,
        ToolDef::put(
            "unpublish_user",
            "/users/{id}/unpublish",
            "Unpublish all of a user's articles and comments (requires admin/mod privileges)",
        )
        .acknowledge()
        .param(ParamSpec::integer("id", "The user ID to unpublish").in_path())
        .build()?,
        ToolDef::put(
            "suspend_user",
            "/users/{id}/suspend",
            "Suspend a user, preventing new posts (requires admin/mod privileges)",
        )
        .acknowledge()
        .param(ParamSpec::integer("id", "The user ID to suspend").in_path())
        .build()?,
        ToolDef::post(
            "invite_user",
            "/admin/users",
            "Invite a new user to the platform (requires super_admin privileges)",
        )
        .params([
            ParamSpec::string("email", "Email address of the user to invite")
                .format("email")
                .required()
                .in_body(),
            ParamSpec::string("name", "Full name of the user to invite")
                .required()
                .in_body(),
        ])
        .build()?,
    ])
}

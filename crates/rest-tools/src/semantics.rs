//! MCP tool annotations derived from HTTP method semantics.

use reqwest::Method;
use rmcp::model::ToolAnnotations;

/// Annotations for a REST-backed tool.
///
/// `openWorldHint` is always `true` (every tool talks to a remote service). GET is read-only,
/// POST is neither destructive nor idempotent, PUT and DELETE are destructive and idempotent.
/// Other methods only get `openWorldHint`.
#[must_use]
pub fn annotations_for_method(method: &Method, title: Option<String>) -> ToolAnnotations {
    let (read_only, destructive, idempotent) = if method == Method::GET {
        (Some(true), Some(false), Some(true))
    } else if method == Method::POST {
        (Some(false), Some(false), Some(false))
    } else if method == Method::PUT || method == Method::DELETE {
        (Some(false), Some(true), Some(true))
    } else {
        (None, None, None)
    };

    ToolAnnotations {
        title,
        read_only_hint: read_only,
        destructive_hint: destructive,
        idempotent_hint: idempotent,
        open_world_hint: Some(true),
    }
}

/// `list_my_articles` → `List my articles`.
#[must_use]
pub fn title_from_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_method_is_open_world() {
        for m in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            assert_eq!(annotations_for_method(&m, None).open_world_hint, Some(true));
        }
    }

    #[test]
    fn get_is_read_only_and_idempotent() {
        let a = annotations_for_method(&Method::GET, None);
        assert_eq!(a.read_only_hint, Some(true));
        assert_eq!(a.destructive_hint, Some(false));
        assert_eq!(a.idempotent_hint, Some(true));
    }

    #[test]
    fn writes_are_not_read_only() {
        let post = annotations_for_method(&Method::POST, None);
        assert_eq!(post.read_only_hint, Some(false));
        assert_eq!(post.idempotent_hint, Some(false));

        let delete = annotations_for_method(&Method::DELETE, Some("Delete page".to_string()));
        assert_eq!(delete.destructive_hint, Some(true));
        assert_eq!(delete.title.as_deref(), Some("Delete page"));
    }

    #[test]
    fn unlisted_methods_only_set_open_world() {
        let a = annotations_for_method(&Method::PATCH, None);
        assert_eq!(a.read_only_hint, None);
        assert_eq!(a.destructive_hint, None);
        assert_eq!(a.idempotent_hint, None);
    }

    #[test]
    fn titles_come_from_snake_case_names() {
        assert_eq!(title_from_name("list_my_articles"), "List my articles");
        assert_eq!(title_from_name("get_user"), "Get user");
        assert_eq!(title_from_name(""), "");
    }
}

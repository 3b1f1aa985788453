//! Delete-confirmation target.

/// Form action for deleting `recipe_id`.
///
/// The identifier is interpolated verbatim; the endpoint validates it.
pub fn delete_action(prefix: &str, recipe_id: &str) -> String {
    format!("{}{}", prefix, recipe_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;

    #[test]
    fn test_numeric_identifier() {
        let config = UiConfig::default();
        assert_eq!(
            delete_action(&config.delete_action_prefix, "42"),
            "/delete_recipe/42"
        );
    }

    #[test]
    fn test_identifier_is_not_escaped() {
        let prefix = "/delete_recipe/";
        for id in ["", "abc", "7/../admin", "a b", "%2F", "null"] {
            assert_eq!(delete_action(prefix, id), format!("/delete_recipe/{}", id));
        }
    }
}

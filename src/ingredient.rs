//! Ingredient checklist styling.

/// Inline styles applied to an ingredient row and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientStyle {
    pub opacity: &'static str,
    pub text_decoration: &'static str,
}

impl IngredientStyle {
    pub const CHECKED: IngredientStyle = IngredientStyle {
        opacity: "0.6",
        text_decoration: "line-through",
    };

    pub const UNCHECKED: IngredientStyle = IngredientStyle {
        opacity: "1",
        text_decoration: "none",
    };

    pub fn for_checked(checked: bool) -> Self {
        if checked { Self::CHECKED } else { Self::UNCHECKED }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_dims_and_strikes() {
        let style = IngredientStyle::for_checked(true);
        assert_eq!(style.opacity, "0.6");
        assert_eq!(style.text_decoration, "line-through");
    }

    #[test]
    fn test_toggle_round_trip() {
        let original = IngredientStyle::for_checked(false);
        assert_ne!(IngredientStyle::for_checked(true), original);
        assert_eq!(IngredientStyle::for_checked(false), original);
        assert_eq!(original, IngredientStyle::UNCHECKED);
    }
}

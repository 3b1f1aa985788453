//! Selectors, attributes and class names the server-rendered markup provides.
//!
//! Every binding in the browser crate looks elements up through these
//! constants, so this module is the full list of what a template must supply.

/// Bootstrap event fired on the modal before it becomes visible.
pub const MODAL_SHOW_EVENT: &str = "show.bs.modal";
pub const DELETE_MODAL: &str = "#deleteModal";
pub const DELETE_FORM: &str = "#delete-form";
/// Attribute on the delete trigger carrying the recipe identifier.
pub const RECIPE_ID_ATTR: &str = "data-recipe-id";

pub const RATING: &str = ".star-rating";
pub const RATING_INPUTS: &str = ".star-rating input";
pub const RATING_LABELS: &str = "label";

pub const TOOLTIPS: &str = "[data-bs-toggle=\"tooltip\"]";

pub const ALERTS: &str = ".alert";
/// Opts an alert out of auto-dismiss.
pub const ALERT_PERMANENT: &str = "alert-permanent";

pub const FADE_IN_TARGETS: &str = ".card";
pub const VISIBLE_CLASS: &str = "visible";

pub const INGREDIENT_ITEM: &str = ".ingredient-item";
pub const INGREDIENT_CHECKBOXES: &str = ".ingredient-item input[type=\"checkbox\"]";
pub const INGREDIENT_LABEL: &str = "label";

pub const SHARE_BUTTON: &str = "#shareBtn";

pub const VALIDATED_FORMS: &str = "form.needs-validation";
pub const WAS_VALIDATED: &str = "was-validated";

pub const SEARCH_INPUTS: &str = ".search-input";

pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";

pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const BACK_TO_TOP_CLASS: &str = "back-to-top";

pub const NAVBAR: &str = ".navbar";

pub const LAZY_IMAGES: &str = "img.lazy";
pub const LAZY_CLASS: &str = "lazy";
pub const DEFERRED_SRC_ATTR: &str = "data-src";

pub const PRINT_TRIGGERS: &str = "[data-action=\"print\"]";

pub const TOAST_CONTAINER_ID: &str = "toastContainer";
pub const TOAST_CONTAINER_CLASS: &str = "toast-container position-fixed bottom-0 end-0 p-3";

/// Prefix for configuration overrides read from `<body>` attributes.
pub const CONFIG_ATTR_PREFIX: &str = "data-ui-";

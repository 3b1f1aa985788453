//! # recipe-ui
//!
//! Interaction layer for a recipe-sharing website.
//!
//! The site renders its pages on the server; this crate holds the decisions
//! behind the page behaviors layered on top (delete confirmation, star
//! ratings, alert auto-dismiss, share/copy, ingredient checklists, form
//! validation, debounced search, scroll effects, lazy images and toasts).
//! It has no DOM dependency: the `wasm-ui` crate binds each piece to browser
//! events, and everything here runs and tests natively.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use recipe_ui::{VirtualClock, debounce};
//!
//! let clock = VirtualClock::new();
//! let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! let search = debounce(clock.clone(), Duration::from_millis(300), move |q: String| {
//!     sink.borrow_mut().push(q)
//! });
//!
//! search.call("pas".to_string());
//! search.call("pasta".to_string());
//! clock.advance(Duration::from_millis(300));
//!
//! assert_eq!(*seen.borrow(), vec!["pasta".to_string()]);
//! ```

pub mod alert;
pub mod clipboard;
pub mod config;
pub mod debounce;
pub mod delete;
pub mod error;
pub mod ingredient;
pub mod markup;
pub mod rating;
pub mod schedule;
pub mod scroll;
pub mod search;
pub mod share;
pub mod toast;
pub mod validation;
pub mod visibility;

pub use alert::AlertDismisser;
pub use clipboard::{Clipboard, copy_with_feedback};
pub use config::{RatingPalette, UiConfig};
pub use debounce::{Debouncer, debounce};
pub use delete::delete_action;
pub use error::{ConfigError, ShareError, UiError};
pub use ingredient::IngredientStyle;
pub use rating::{StarColor, star_colors, to_number};
pub use schedule::{Scheduler, Task, TimerId, VirtualClock};
pub use scroll::{BackToTop, NavbarController, NavbarState, anchor_target};
pub use search::{LogSearch, SearchHandler, search_debouncer};
pub use share::{ShareOutcome, SharePayload, SharePlatform, ShareStrategy, Sharer};
pub use toast::{Toast, ToastKind, ToastSink, Toaster};
pub use validation::{SubmitDecision, SubmitGate};
pub use visibility::{FadeIn, LazyImage};

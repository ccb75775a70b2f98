//! Reusable TUI widgets.

pub mod alert;
pub mod form;
pub mod toast;

pub use alert::{centered, draw_alert};
pub use form::{FocusRing, FormField, InputKind, draw_form};
pub use toast::{Toast, draw_toast};

//! Reusable UI pieces shared across pages: the navigation bar, toasts, icons,
//! loading and error states.

pub mod error_template;
pub mod icons;
pub mod loader;
pub mod navbar;
pub mod toaster;

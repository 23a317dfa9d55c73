//! Error page rendered by the router fallback and error boundaries.
//!
//! On the server it also sets the HTTP status of the response from the first
//! [`AppError`] it finds.

use http::status::StatusCode;
use leptos::{
    html::{a, div, h1, p},
    prelude::*,
};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders every [`AppError`] found in `outside_errors` (server) or `errors`
/// (client). With neither, an empty page with a way home is shown.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors.map_or_else(
        || errors.unwrap_or_else(|| RwSignal::new(Errors::default())),
        RwSignal::new,
    );
    let errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div().class("grid place-content-center py-24 px-4 text-center").child((
        h1().class("mb-6 text-3xl font-bold").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        For(
            ForProps::builder()
                .each(move || errors.clone().into_iter().enumerate())
                .key(|(index, _error)| *index)
                .children(|(_, error)| {
                    p().class("text-lg tracking-widest uppercase text-muted-foreground")
                        .child(format!("{} | {error}", error.status_code().as_u16()))
                })
                .build(),
        ),
        a().href("/")
            .class("mt-8 font-semibold text-primary hover:underline")
            .child("Back to StyleGenie"),
    ))
}

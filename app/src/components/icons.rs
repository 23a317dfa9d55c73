//! Inline SVG rendering for `icondata` glyphs and the brand mark.

use icondata::Icon;
use leptos::{
    html::{div, span},
    prelude::*,
    svg::svg,
};

/// Render `icon` as an inline, decorative SVG sized by `class`.
pub fn icon(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", icon.fill.unwrap_or("currentColor"))
        .attr("stroke", icon.stroke)
        .attr("stroke-width", icon.stroke_width)
        .attr("stroke-linecap", icon.stroke_linecap)
        .attr("stroke-linejoin", icon.stroke_linejoin)
        .attr("aria-hidden", "true")
        .attr("focusable", "false")
        .attr("innerHTML", icon.data)
        .class(class)
}

/// Square gradient tile with the StyleGenie spark, used next to the wordmark.
pub fn logo_mark(class: &'static str) -> impl IntoView {
    div()
        .class(class)
        .class("inline-flex justify-center items-center text-white bg-gradient-to-br from-primary to-orange-500")
        .child((
            icon(icondata::FiStar, "size-1/2"),
            span().class("sr-only").child("StyleGenie"),
        ))
}

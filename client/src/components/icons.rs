//! Inline SVG icons.

use leptos::prelude::*;

use crate::util::class_names::merge_classes;

/// Lucide "user" glyph.
#[component]
pub fn UserIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    let class = merge_classes(["lucide lucide-user", class.as_str()]);
    view! {
        <svg
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"></path>
            <circle cx="12" cy="7" r="4"></circle>
        </svg>
    }
}

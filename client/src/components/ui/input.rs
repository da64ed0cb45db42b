//! Single-line text input.
//!
//! The input is uncontrolled: it has no reactive `value` binding, so the
//! browser element owns whatever the user types and drops it on unmount.

use leptos::prelude::*;

use crate::util::class_names::merge_classes;

const INPUT_BASE: &str = "flex h-9 w-full rounded-md border border-input bg-transparent px-3 py-1 text-base shadow-sm \
     transition-colors placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-1 \
     focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

/// Value of the rendered `type` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
        }
    }
}

#[component]
pub fn Input(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] kind: InputKind,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = merge_classes([INPUT_BASE, class.as_str()]);
    let kind = kind.as_str();
    view! { <input id=id type=kind placeholder=placeholder class=class/> }
}

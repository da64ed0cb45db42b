//! Multi-line text area.

use leptos::prelude::*;

use crate::util::class_names::merge_classes;

const TEXTAREA_BASE: &str = "flex min-h-[60px] w-full rounded-md border border-input bg-transparent px-3 py-2 \
     text-base shadow-sm placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-1 \
     focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

/// Uncontrolled text area. `default_value` is written as the element's
/// initial content; later edits stay in the element.
#[component]
pub fn Textarea(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = merge_classes([TEXTAREA_BASE, class.as_str()]);
    view! { <textarea id=id placeholder=placeholder class=class>{default_value}</textarea> }
}

//! Form label.

use leptos::prelude::*;

use crate::util::class_names::merge_classes;

const LABEL_BASE: &str =
    "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70";

/// Label bound to the control whose `id` equals `html_for`.
#[component]
pub fn Label(
    #[prop(into)] html_for: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = merge_classes([LABEL_BASE, class.as_str()]);
    view! {
        <label for=html_for class=class>
            {children()}
        </label>
    }
}

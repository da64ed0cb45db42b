//! Card container and its header/title/description/content slots.

use leptos::prelude::*;

use crate::util::class_names::merge_classes;

const CARD_BASE: &str = "rounded-xl border bg-card text-card-foreground shadow";
const CARD_HEADER_BASE: &str = "flex flex-col space-y-1.5 p-6";
const CARD_TITLE_BASE: &str = "font-semibold leading-none tracking-tight";
const CARD_DESCRIPTION_BASE: &str = "text-sm text-muted-foreground";
const CARD_CONTENT_BASE: &str = "p-6 pt-0";

/// Bordered card. `id` lets pages and tests address a specific card.
#[component]
pub fn Card(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = merge_classes([CARD_BASE, class.as_str()]);
    view! {
        <div id=id class=class>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = merge_classes([CARD_HEADER_BASE, class.as_str()]);
    view! { <div class=class>{children()}</div> }
}

/// Card title, rendered as an `h3` so it sits below the page `h1`.
#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = merge_classes([CARD_TITLE_BASE, class.as_str()]);
    view! { <h3 class=class>{children()}</h3> }
}

#[component]
pub fn CardDescription(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = merge_classes([CARD_DESCRIPTION_BASE, class.as_str()]);
    view! { <p class=class>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = merge_classes([CARD_CONTENT_BASE, class.as_str()]);
    view! { <div class=class>{children()}</div> }
}

//! Circular avatar with an image and a textual fallback.
//!
//! A blank image source renders no `<img>` at all, leaving the fallback
//! visible. With a real source the image is stacked over the fallback.

use leptos::prelude::*;

use crate::util::class_names::merge_classes;

const AVATAR_BASE: &str = "relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full";
const AVATAR_IMAGE_BASE: &str = "absolute inset-0 aspect-square h-full w-full";
const AVATAR_FALLBACK_BASE: &str = "flex h-full w-full items-center justify-center rounded-full bg-muted";

/// Source to render, or `None` when it is blank.
pub fn avatar_source(src: &str) -> Option<String> {
    let src = src.trim();
    (!src.is_empty()).then(|| src.to_owned())
}

#[component]
pub fn Avatar(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = merge_classes([AVATAR_BASE, class.as_str()]);
    view! { <span class=class>{children()}</span> }
}

#[component]
pub fn AvatarImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = merge_classes([AVATAR_IMAGE_BASE, class.as_str()]);
    avatar_source(&src).map(|src| view! { <img class=class src=src alt=alt/> })
}

#[component]
pub fn AvatarFallback(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = merge_classes([AVATAR_FALLBACK_BASE, class.as_str()]);
    view! { <span class=class>{children()}</span> }
}

//! Helpers for asserting on server-rendered component markup.

use leptos::prelude::*;

/// Render a view to an HTML string inside a fresh reactive owner.
pub(crate) fn render_html<V: IntoView>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

pub(crate) fn occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Opening tag of the first element with `id="{id}"`.
pub(crate) fn tag_with_id<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    let at = html.find(&format!("id=\"{id}\""))?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(&html[start..=end])
}

/// Opening tag of the nearest `<{tag}` element that precedes `text`.
pub(crate) fn tag_before<'a>(html: &'a str, tag: &str, text: &str) -> Option<&'a str> {
    let at = html.find(text)?;
    let start = html[..at].rfind(&format!("<{tag}"))?;
    let end = start + html[start..].find('>')?;
    Some(&html[start..=end])
}

/// Classes listed in an opening tag's `class` attribute.
pub(crate) fn class_list(tag: &str) -> Vec<&str> {
    tag.split("class=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .map(|classes| classes.split_whitespace().collect())
        .unwrap_or_default()
}

pub(crate) fn has_classes(tag: &str, expected: &[&str]) -> bool {
    let classes = class_list(tag);
    expected.iter().all(|c| classes.contains(c))
}

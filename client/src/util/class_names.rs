//! Tailwind class list merging for the UI primitives.
//!
//! Primitives carry a base class list and accept a caller `class` prop. When
//! both name a utility from the same group (two background colors, two
//! heights) the caller's class wins and the base class is dropped, so the
//! rendered list never carries conflicting utilities. Variant prefixes such
//! as `hover:` or `md:` are part of the group key: `bg-accent` and
//! `hover:bg-accent` never conflict.
//!
//! Shorthands also drop the earlier longhands they cover: a later `p-4`
//! removes an earlier `px-2`, and a later `rounded-lg` removes an earlier
//! `rounded-t-none`. The reverse is not a conflict; `rounded-t-none` after
//! `rounded-md` keeps both.

use std::collections::HashSet;

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const DISPLAYS: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "hidden", "contents",
];
const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

/// Side and corner radius groups. Two-letter corners come first so
/// `rounded-tl-md` is not read as `rounded-t`.
const RADIUS_SIDES: &[&str] = &[
    "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl", "rounded-ss", "rounded-se", "rounded-ee",
    "rounded-es", "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-s", "rounded-e",
];

/// Prefix groups, longest prefixes first so `min-h-` is not read as `h-`.
const PREFIX_GROUPS: &[&str] = &[
    "min-h-", "max-h-", "min-w-", "max-w-", "space-y-", "space-x-", "grid-cols-", "leading-", "tracking-",
    "opacity-", "gap-", "bg-", "px-", "py-", "pt-", "pb-", "pl-", "pr-", "mx-", "my-", "mt-", "mb-", "ml-",
    "mr-", "h-", "w-", "p-", "m-",
];

/// Groups whose classes a later shorthand removes on top of its own group.
const COVERED_GROUPS: &[(&str, &[&str])] = &[
    ("p-", &["px-", "py-", "pt-", "pb-", "pl-", "pr-"]),
    ("px-", &["pl-", "pr-"]),
    ("py-", &["pt-", "pb-"]),
    ("m-", &["mx-", "my-", "mt-", "mb-", "ml-", "mr-"]),
    ("mx-", &["ml-", "mr-"]),
    ("my-", &["mt-", "mb-"]),
    ("rounded", RADIUS_SIDES),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
];

/// Merge class fragments left to right; later fragments override earlier ones.
///
/// Each fragment may hold several whitespace-separated classes. Empty
/// fragments are ignored and exact duplicates collapse to their last
/// occurrence.
pub fn merge_classes<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    let classes: Vec<&str> = fragments.into_iter().flat_map(str::split_whitespace).collect();

    let mut taken = HashSet::new();
    let mut kept = Vec::with_capacity(classes.len());
    for class in classes.into_iter().rev() {
        let (modifiers, group) = class_group(class);
        if !taken.insert(format!("{modifiers}{group}")) {
            continue;
        }
        for covered in covered_groups(group) {
            taken.insert(format!("{modifiers}{covered}"));
        }
        kept.push(class);
    }
    kept.reverse();
    kept.join(" ")
}

/// Key under which two classes are considered to conflict.
pub(crate) fn group_key(class: &str) -> String {
    let (modifiers, group) = class_group(class);
    format!("{modifiers}{group}")
}

/// Split a class into its modifier prefix (variants plus `!`) and its
/// utility group.
fn class_group(class: &str) -> (String, &str) {
    let (variants, utility) = split_variants(class);
    let important = utility.starts_with('!');
    let utility = utility.trim_start_matches('!').trim_start_matches('-');
    let modifiers = format!("{variants}{}", if important { "!" } else { "" });
    (modifiers, utility_group(utility))
}

/// Split `md:hover:bg-x` into (`md:hover:`, `bg-x`). Colons inside an
/// arbitrary value (`bg-[url(a:b)]`) do not count as variant separators.
fn split_variants(class: &str) -> (&str, &str) {
    let bracket = class.find('[').unwrap_or(class.len());
    match class[..bracket].rfind(':') {
        Some(i) => (&class[..=i], &class[i + 1..]),
        None => ("", class),
    }
}

fn utility_group(utility: &str) -> &str {
    if DISPLAYS.contains(&utility) {
        return "display";
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        if TEXT_SIZES.contains(&rest) {
            return "text-size";
        }
        if TEXT_ALIGNS.contains(&rest) {
            return "text-align";
        }
        return "text-color";
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        if FONT_WEIGHTS.contains(&rest) {
            return "font-weight";
        }
        return "font-family";
    }
    if utility == "shadow" {
        return "shadow-size";
    }
    if let Some(rest) = utility.strip_prefix("shadow-") {
        if SHADOW_SIZES.contains(&rest) || rest.starts_with('[') {
            return "shadow-size";
        }
        return "shadow-color";
    }
    if utility == "rounded" || utility.starts_with("rounded-") {
        return radius_group(utility);
    }
    PREFIX_GROUPS
        .iter()
        .find(|prefix| utility.starts_with(*prefix))
        .copied()
        .unwrap_or(utility)
}

fn radius_group(utility: &str) -> &'static str {
    RADIUS_SIDES
        .iter()
        .find(|side| {
            utility
                .strip_prefix(**side)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
        })
        .copied()
        .unwrap_or("rounded")
}

fn covered_groups(group: &str) -> &'static [&'static str] {
    COVERED_GROUPS
        .iter()
        .find(|(shorthand, _)| *shorthand == group)
        .map(|(_, covered)| *covered)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "class_names_test.rs"]
mod class_names_test;

//! Button with style variants.
//!
//! Buttons render `type="button"` and take no click handler: the profile
//! screen's actions are placeholders until their behavior is wired.

use leptos::prelude::*;

use crate::util::class_names::merge_classes;

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm \
     font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring \
     disabled:pointer-events-none disabled:opacity-50";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground shadow hover:bg-primary/90",
            Self::Destructive => "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90",
            Self::Outline => "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground",
            Self::Secondary => "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-4 py-2",
            Self::Sm => "h-8 rounded-md px-3 text-xs",
            Self::Lg => "h-10 rounded-md px-8",
            Self::Icon => "h-9 w-9",
        }
    }
}

/// Full class list for a button: base, then variant, then size, then caller.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    merge_classes([BUTTON_BASE, variant.classes(), size.classes(), class])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = button_classes(variant, size, &class);
    view! {
        <button type="button" class=class>
            {children()}
        </button>
    }
}

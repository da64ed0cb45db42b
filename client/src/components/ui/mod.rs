//! Presentational primitives used by every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections and pages compose these leaves and never style raw elements
//! themselves. Each primitive has a base class list; a caller `class` prop is
//! merged on top with [`crate::util::class_names::merge_classes`], so callers
//! can override a base utility without producing conflicting classes.

pub mod avatar;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod textarea;

pub use avatar::{Avatar, AvatarFallback, AvatarImage, avatar_source};
pub use button::{Button, ButtonSize, ButtonVariant, button_classes};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use input::{Input, InputKind};
pub use label::Label;
pub use textarea::Textarea;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ui` holds the styled primitives. Everything else composes them into
//! dashboard chrome (`site_header`, `ranking_board`) and the profile settings
//! screen (`profile`).

pub mod icons;
pub mod profile;
pub mod ranking_board;
pub mod site_header;
pub mod ui;

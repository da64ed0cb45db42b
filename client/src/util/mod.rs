//! Small helpers shared by components.

pub mod class_names;

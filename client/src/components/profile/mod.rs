//! Profile settings sections and the layout that arranges them.
//!
//! ARCHITECTURE
//! ============
//! Each section is a self-contained card with no props and no shared state.
//! Form fields are uncontrolled, so whatever the user types lives in the DOM
//! element until the page unmounts. Action buttons are inert placeholders.

pub mod bio_section;
pub mod logout_section;
pub mod password_section;
pub mod profile_image_section;
pub mod profile_layout;

pub use bio_section::BioSection;
pub use logout_section::LogoutSection;
pub use password_section::PasswordSection;
pub use profile_image_section::ProfileImageSection;
pub use profile_layout::ProfileLayout;

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

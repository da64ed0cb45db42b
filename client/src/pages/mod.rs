//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are thin shells: each one places components and owns no state.

pub mod home;
pub mod not_found;
pub mod profile;

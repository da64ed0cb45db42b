//! Typed application routes.
//!
//! The router in [`crate::app`] and every in-app link read their paths from
//! [`AppRoute`], so a path only ever changes here.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Profile,
}

impl AppRoute {
    pub const ALL: [Self; 2] = [Self::Home, Self::Profile];

    /// Absolute path used in links.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Profile => "/profile",
        }
    }

    /// Single router segment for this route (empty for the root).
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Resolve a request path, ignoring any query string, fragment, or
    /// trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

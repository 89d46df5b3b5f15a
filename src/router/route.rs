//! Route table
//!
//! The four pages of the dashboard and how a fragment string resolves to one.

use serde::{Deserialize, Serialize};

use crate::icon::Icon;

/// A page of the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Dashboard,
    Academics,
    Schedule,
    Profile,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Route::Dashboard,
            Route::Academics,
            Route::Schedule,
            Route::Profile,
        ]
    }

    /// Resolve a path or fragment to a route
    ///
    /// Total: leading `#` and `/` are ignored, and anything that is not a
    /// known path (including the empty string) resolves to the dashboard.
    pub fn resolve(path: &str) -> Route {
        match normalize(path) {
            "academics" => Route::Academics,
            "schedule" => Route::Schedule,
            "profile" => Route::Profile,
            _ => Route::Dashboard,
        }
    }

    /// Canonical fragment for this route
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Academics => "academics",
            Route::Schedule => "schedule",
            Route::Profile => "profile",
        }
    }

    /// Fragment link target, e.g. `#profile`
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Academics => "Academics",
            Route::Schedule => "Schedule",
            Route::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Route::Dashboard => Icon::Dashboard,
            Route::Academics => Icon::GraduationCap,
            Route::Schedule => Icon::Calendar,
            Route::Profile => Icon::User,
        }
    }

    /// Whether a navigation link for this route is highlighted at `path`
    ///
    /// Only exact matches highlight, except that an empty path highlights the
    /// dashboard link.
    pub fn is_active_for(&self, path: &str) -> bool {
        let path = normalize(path);
        path == self.path() || (path.is_empty() && *self == Route::Dashboard)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Strip the fragment marker and leading slashes
pub fn normalize(path: &str) -> &str {
    path.trim_start_matches('#').trim_start_matches('/')
}

/// Entry in the sidebar and bottom navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub icon: Icon,
}

impl NavItem {
    pub fn href(&self) -> String {
        self.route.href()
    }
}

/// Navigation entries in display order
pub fn nav_items() -> Vec<NavItem> {
    Route::all()
        .iter()
        .map(|&route| NavItem {
            route,
            label: route.label(),
            icon: route.icon(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_routes() {
        for route in Route::all() {
            assert_eq!(Route::resolve(route.path()), *route);
            assert_eq!(Route::resolve(&format!("#{}", route.path())), *route);
        }
    }

    #[test]
    fn test_resolve_defaults_to_dashboard() {
        for path in ["", "/", "#", "#/", "xyz", "Academics", "academics/extra", "dashboard"] {
            assert_eq!(Route::resolve(path), Route::Dashboard, "path {:?}", path);
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for path in ["", "xyz", "schedule", "#profile"] {
            let once = Route::resolve(path);
            assert_eq!(Route::resolve(once.path()), once);
        }
    }

    #[test]
    fn test_active_link() {
        assert!(Route::Dashboard.is_active_for(""));
        assert!(Route::Dashboard.is_active_for("/"));
        assert!(Route::Dashboard.is_active_for("dashboard"));
        assert!(!Route::Dashboard.is_active_for("xyz"));
        assert!(Route::Schedule.is_active_for("#schedule"));
        assert!(!Route::Schedule.is_active_for("profile"));
    }

    #[test]
    fn test_href_resolves_back() {
        assert_eq!(Route::Profile.href(), "#profile");
        for route in Route::all() {
            assert_eq!(Route::resolve(&route.href()), *route);
        }
    }

    #[test]
    fn test_nav_items() {
        let items = nav_items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1].href(), "#academics");
        assert_eq!(items[3].label, "Profile");
    }
}

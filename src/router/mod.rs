//! Navigation
//!
//! Keeps a single current path in sync with the location fragment:
//!
//! ```text
//!   navigate(path) ──► Location::set_fragment ──► subscribers
//!   hashchange     ──► sync_from_location     ──► subscribers
//! ```
//!
//! `sync_from_location` never writes the fragment back, and a fragment equal
//! to the current path is ignored, so the browser's echo of our own write is
//! harmless.
//!
//! # Example
//!
//! ```rust
//! use campus::router::{MemoryLocation, Route, Router};
//!
//! let location = MemoryLocation::default();
//! let mut router = Router::new(location.clone());
//! assert_eq!(router.current_route(), Route::Dashboard);
//!
//! router.go(Route::Schedule);
//! assert_eq!(location.fragment_string(), "schedule");
//! ```

mod location;
mod route;

pub use location::{Location, MemoryLocation};
pub use route::{nav_items, normalize, NavItem, Route};

/// Handle returned by [`Router::on_route_change`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(Route)>;

/// Fragment-synchronised router
pub struct Router<L: Location> {
    location: L,
    current: String,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
}

impl<L: Location> Router<L> {
    /// Create a router starting at the location's current fragment
    pub fn new(location: L) -> Self {
        let current = location.fragment();
        tracing::debug!("Router starting at {:?} ({})", current, Route::resolve(&current));
        Self {
            location,
            current,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Path as last navigated or observed
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Route the current path resolves to
    pub fn current_route(&self) -> Route {
        Route::resolve(&self.current)
    }

    /// Navigate to an arbitrary path
    ///
    /// The fragment is always written; subscribers hear about it only when
    /// the path actually changed.
    pub fn navigate(&mut self, path: &str) {
        let path = path.trim_start_matches('#');
        self.location.set_fragment(path);
        self.apply(path);
    }

    /// Navigate to a route's canonical path
    pub fn go(&mut self, route: Route) {
        self.navigate(route.path());
    }

    /// Pick up an externally changed fragment (back/forward, manual edit)
    ///
    /// Returns the new route if the path changed.
    pub fn sync_from_location(&mut self) -> Option<Route> {
        let fragment = self.location.fragment();
        if self.apply(&fragment) {
            Some(self.current_route())
        } else {
            None
        }
    }

    /// Register a callback invoked with the new route after each change
    pub fn on_route_change(&mut self, listener: impl FnMut(Route) + 'static) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback; returns whether it was registered
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    fn apply(&mut self, path: &str) -> bool {
        if path == self.current {
            return false;
        }
        self.current = path.to_string();
        let route = self.current_route();
        tracing::debug!("Route changed to {} (path {:?})", route, self.current);
        for (_, listener) in self.listeners.iter_mut() {
            listener(route);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(router: &mut Router<MemoryLocation>) -> Rc<RefCell<Vec<Route>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        router.on_route_change(move |r| sink.borrow_mut().push(r));
        seen
    }

    #[test]
    fn test_initial_route_from_fragment() {
        assert_eq!(Router::new(MemoryLocation::at("#profile")).current_route(), Route::Profile);
        assert_eq!(Router::new(MemoryLocation::default()).current_route(), Route::Dashboard);
    }

    #[test]
    fn test_navigate_round_trip() {
        let location = MemoryLocation::default();
        let mut router = Router::new(location.clone());

        for path in ["academics", "xyz", "schedule", "", "profile"] {
            router.navigate(path);
            assert_eq!(router.current_path(), path);
            assert_eq!(location.fragment_string(), path);
            assert_eq!(router.current_route(), Route::resolve(path));
        }
    }

    #[test]
    fn test_listeners_fire_once_per_change() {
        let mut router = Router::new(MemoryLocation::default());
        let seen = recorder(&mut router);

        router.go(Route::Academics);
        router.go(Route::Academics);
        router.navigate("xyz");

        assert_eq!(*seen.borrow(), vec![Route::Academics, Route::Dashboard]);
    }

    #[test]
    fn test_external_change_does_not_write_back() {
        let location = MemoryLocation::default();
        let mut router = Router::new(location.clone());
        let seen = recorder(&mut router);

        location.simulate_external("schedule");
        assert_eq!(router.sync_from_location(), Some(Route::Schedule));
        assert_eq!(location.writes(), 0);

        // echo of the same fragment is ignored
        assert_eq!(router.sync_from_location(), None);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_navigate_echo_is_ignored() {
        let location = MemoryLocation::default();
        let mut router = Router::new(location.clone());
        let seen = recorder(&mut router);

        router.go(Route::Profile);
        assert_eq!(router.sync_from_location(), None);
        assert_eq!(*seen.borrow(), vec![Route::Profile]);
        assert_eq!(location.writes(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut router = Router::new(MemoryLocation::default());
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let sub = router.on_route_change(move |_| *sink.borrow_mut() += 1);

        router.go(Route::Schedule);
        assert!(router.unsubscribe(sub));
        assert!(!router.unsubscribe(sub));
        router.go(Route::Profile);

        assert_eq!(*count.borrow(), 1);
    }
}

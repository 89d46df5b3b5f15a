//! Fragment-backed navigation
//!
//! Wraps the core [`Router`] around `window.location.hash`. The router is
//! only borrowed inside these methods and the reactive path is set after the
//! borrow ends, so effects reading [`Navigation::route`] never re-enter it.

use std::cell::RefCell;
use std::rc::Rc;

use campus::router::{Location, Route, Router};
use leptos::*;

/// `window.location.hash`, without the leading `#`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowLocation;

impl Location for WindowLocation {
    fn fragment(&self) -> String {
        window()
            .location()
            .hash()
            .map(|h| h.trim_start_matches('#').to_string())
            .unwrap_or_default()
    }

    fn set_fragment(&self, fragment: &str) {
        if let Err(e) = window().location().set_hash(fragment) {
            tracing::warn!("Failed to set location hash: {:?}", e);
        }
    }
}

#[derive(Clone)]
pub struct Navigation {
    router: Rc<RefCell<Router<WindowLocation>>>,
    path: RwSignal<String>,
}

impl Navigation {
    fn new() -> Self {
        let mut router = Router::new(WindowLocation);
        router.on_route_change(|route| tracing::info!("Showing {}", route));
        let path = create_rw_signal(router.current_path().to_string());
        Self {
            router: Rc::new(RefCell::new(router)),
            path,
        }
    }

    /// Current path, tracked
    pub fn path(&self) -> Signal<String> {
        self.path.into()
    }

    /// Current route, changing only when the resolved page changes
    pub fn route(&self) -> Memo<Route> {
        let path = self.path;
        create_memo(move |_| path.with(|p| Route::resolve(p)))
    }

    pub fn go(&self, route: Route) {
        let path = {
            let mut router = self.router.borrow_mut();
            router.go(route);
            router.current_path().to_string()
        };
        self.path.set(path);
    }

    /// Pick up back/forward or a hand-edited fragment
    fn sync(&self) {
        let changed = {
            let mut router = self.router.borrow_mut();
            router
                .sync_from_location()
                .map(|_| router.current_path().to_string())
        };
        if let Some(path) = changed {
            self.path.set(path);
        }
    }
}

/// Create navigation, listen for `hashchange`, and provide it as context
pub fn provide_navigation() -> Navigation {
    let navigation = Navigation::new();

    let listener = navigation.clone();
    let handle = window_event_listener(ev::hashchange, move |_| listener.sync());
    on_cleanup(move || handle.remove());

    provide_context(navigation.clone());
    navigation
}

pub fn use_navigation() -> Navigation {
    use_context::<Navigation>().expect("Navigation not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn window_location_round_trip() {
        WindowLocation.set_fragment("schedule");
        assert_eq!(WindowLocation.fragment(), "schedule");

        let router = Router::new(WindowLocation);
        assert_eq!(router.current_route(), Route::Schedule);
    }

    #[wasm_bindgen_test]
    fn router_writes_window_hash() {
        let mut router = Router::new(WindowLocation);
        router.go(Route::Profile);
        assert_eq!(window().location().hash().unwrap(), "#profile");
    }
}

/// Client-side router
///
/// Owns the current location and its back/forward history. The app shell
/// is the only subscriber: every navigation call reports whether the
/// location changed, and the shell rebuilds the page when it did.

use tracing::debug;

/// The screen bound to a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Solution,
    Check,
}

impl Route {
    /// Map a path to its screen. Unknown paths fall back to Solution.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/check" => Route::Check,
            _ => Route::Solution,
        }
    }

    /// Canonical path of the screen
    pub fn path(self) -> &'static str {
        match self {
            Route::Solution => "/",
            Route::Check => "/check",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    /// Visited locations, oldest first; never empty
    history: Vec<String>,
    /// Index of the current location in `history`
    cursor: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn location(&self) -> &str {
        &self.history[self.cursor]
    }

    pub fn route(&self) -> Route {
        Route::from_path(self.location())
    }

    /// Go to `path`, discarding forward history.
    ///
    /// Returns the new route, or `None` when `path` is already current.
    pub fn navigate(&mut self, path: &str) -> Option<Route> {
        if path == self.location() {
            return None;
        }

        self.history.truncate(self.cursor + 1);
        self.history.push(path.to_string());
        self.cursor += 1;
        debug!("Navigated to {}", path);
        Some(self.route())
    }

    /// Step back one entry; `None` at the start of history
    pub fn back(&mut self) -> Option<Route> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        debug!("Back to {}", self.location());
        Some(self.route())
    }

    /// Step forward one entry; `None` at the end of history
    pub fn forward(&mut self) -> Option<Route> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        debug!("Forward to {}", self.location());
        Some(self.route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_mapping_is_total() {
        assert_eq!(Route::from_path("/"), Route::Solution);
        assert_eq!(Route::from_path("/check"), Route::Check);
        assert_eq!(Route::from_path("/check/"), Route::Solution);
        assert_eq!(Route::from_path("/nowhere"), Route::Solution);
        assert_eq!(Route::from_path(""), Route::Solution);
    }

    #[test]
    fn test_navigate_then_back() {
        let mut router = Router::default();
        assert_eq!(router.navigate("/check"), Some(Route::Check));
        assert_eq!(router.location(), "/check");

        assert_eq!(router.back(), Some(Route::Solution));
        assert_eq!(router.location(), "/");
        assert_eq!(router.route(), Route::Solution);
    }

    #[test]
    fn test_forward_after_back() {
        let mut router = Router::default();
        router.navigate("/check");
        router.back();

        assert_eq!(router.forward(), Some(Route::Check));
        assert_eq!(router.forward(), None);
    }

    #[test]
    fn test_navigate_drops_forward_history() {
        let mut router = Router::default();
        router.navigate("/check");
        router.back();
        router.navigate("/about");

        assert_eq!(router.forward(), None);
        assert_eq!(router.route(), Route::Solution);
        assert_eq!(router.back(), Some(Route::Solution));
        assert_eq!(router.location(), "/");
    }

    #[test]
    fn test_navigate_to_current_location_is_noop() {
        let mut router = Router::default();
        assert_eq!(router.navigate("/"), None);
        assert_eq!(router.back(), None);
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut router = Router::new("/check");
        assert_eq!(router.back(), None);
        assert_eq!(router.route(), Route::Check);
    }

    #[test]
    fn test_route_paths_round_trip() {
        for route in [Route::Solution, Route::Check] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}

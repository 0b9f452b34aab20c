//! Path router and the static navigation table.
//!
//! The router owns the current location. Views only read it: the bottom
//! navigation compares each item's path against [`Router::current_path`] to
//! decide which entry is active.

use crate::constants::{ROUTE_DASHBOARD, ROUTE_NOTIFICATIONS, ROUTE_ROOT, ROUTE_SETTINGS, ROUTE_TASKS};
use crate::icons::Icon;

/// One entry of the bottom navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// Navigation entries, in display order
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        path: ROUTE_DASHBOARD,
        label: "Dashboard",
        icon: Icon::Dashboard,
    },
    NavItem {
        path: ROUTE_TASKS,
        label: "Tasks",
        icon: Icon::Tasks,
    },
    NavItem {
        path: ROUTE_NOTIFICATIONS,
        label: "Notifications",
        icon: Icon::Notification,
    },
    NavItem {
        path: ROUTE_SETTINGS,
        label: "Settings",
        icon: Icon::Settings,
    },
];

/// Look up the navigation item with exactly this path
pub fn nav_item_for(path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.path == path)
}

/// Screens the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Tasks,
    Notifications,
    Settings,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path {
            ROUTE_DASHBOARD => Page::Dashboard,
            ROUTE_TASKS => Page::Tasks,
            ROUTE_NOTIFICATIONS => Page::Notifications,
            ROUTE_SETTINGS => Page::Settings,
            _ => Page::NotFound,
        }
    }
}

/// Holds the current location and a back stack
#[derive(Debug, Clone)]
pub struct Router {
    current: String,
    default_route: String,
    history: Vec<String>,
}

impl Router {
    /// Start at `default_route`
    pub fn new(default_route: impl Into<String>) -> Self {
        let default_route = default_route.into();
        Self {
            current: default_route.clone(),
            default_route,
            history: Vec::new(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    pub fn current_page(&self) -> Page {
        Page::from_path(&self.current)
    }

    /// Go to `path`; "/" resolves to the default route. Returns whether the location changed.
    pub fn navigate(&mut self, path: &str) -> bool {
        let target = if path == ROUTE_ROOT { self.default_route.as_str() } else { path };
        if target == self.current {
            return false;
        }

        log::debug!("Router: {} -> {}", self.current, target);
        let previous = std::mem::replace(&mut self.current, target.to_string());
        self.history.push(previous);
        true
    }

    /// Return to the previous location, if any
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Move to the next/previous navigation item, wrapping around.
    /// From a path outside the table, starts at the first item.
    pub fn cycle(&mut self, forward: bool) -> bool {
        let len = NAV_ITEMS.len();
        let next = match NAV_ITEMS.iter().position(|item| item.path == self.current) {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        self.navigate(NAV_ITEMS[next].path)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(ROUTE_DASHBOARD)
    }
}

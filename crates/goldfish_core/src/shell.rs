//! Route and tab mapping for the four screens.
//!
//! # Invariants
//! - Tab order is fixed: Home, Birthdays, Tasks, Recurring Events.
//! - The only navigation state is the current route.

use std::fmt::{Display, Formatter};

/// One of the four screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Birthdays,
    Tasks,
    RecurringEvents,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Birthdays => "/birthdays",
            Self::Tasks => "/tasks",
            Self::RecurringEvents => "/recurring-events",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        TABS.iter()
            .find(|tab| tab.route.path() == path)
            .map(|tab| tab.route)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Birthdays => "Birthdays",
            Self::Tasks => "Tasks",
            Self::RecurringEvents => "Recurring Events",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Tab bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub label: &'static str,
    pub route: Route,
}

pub const TABS: [Tab; 4] = [
    Tab {
        label: "Home",
        route: Route::Home,
    },
    Tab {
        label: "Birthdays",
        route: Route::Birthdays,
    },
    Tab {
        label: "Tasks",
        route: Route::Tasks,
    },
    Tab {
        label: "Recurring Events",
        route: Route::RecurringEvents,
    },
];

/// Index of the tab whose path equals `path`, if any.
pub fn tab_index(path: &str) -> Option<usize> {
    TABS.iter().position(|tab| tab.route.path() == path)
}

/// Current-route holder for the application frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shell {
    current: Route,
}

impl Shell {
    pub fn new(current: Route) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Selected tab index for the current route.
    pub fn selected_tab(&self) -> Option<usize> {
        tab_index(self.current.path())
    }

    /// Switches to the tab at `index`. Out-of-range indexes are ignored.
    pub fn navigate(&mut self, index: usize) -> Route {
        if let Some(tab) = TABS.get(index) {
            self.current = tab.route;
        }
        self.current
    }

    pub fn navigate_to(&mut self, route: Route) {
        self.current = route;
    }
}

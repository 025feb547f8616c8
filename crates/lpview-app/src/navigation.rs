//! Screen stack
//!
//! Two named screens: `Home` is the root and `Second` is pushed on top of it
//! when a launch is opened. The stack never grows past that.

use std::fmt;

use lpview_core::prelude::*;
use lpview_core::LaunchId;

/// A named screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Launchpad list
    Home,
    /// Single launch details
    Second,
}

impl Screen {
    /// Header title shown while the screen is on top
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Launchpads",
            Screen::Second => "Launch Details",
        }
    }

    /// Route name
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Second => "Second",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters passed when pushing `Second`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// Raw identifier as selected; validated when the screen mounts
    pub launch_id: Option<String>,
}

impl RouteParams {
    pub fn launch(id: &LaunchId) -> Self {
        Self {
            launch_id: Some(id.as_str().to_string()),
        }
    }

    /// Resolve the launch identifier for the detail screen
    ///
    /// Missing or blank identifiers are a [`Error::NavigationParamMissing`].
    pub fn resolve_launch_id(&self) -> Result<LaunchId> {
        self.launch_id
            .as_deref()
            .and_then(LaunchId::parse)
            .ok_or_else(|| Error::navigation_param_missing(Screen::Second.name()))
    }
}

/// One entry on the stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub screen: Screen,
    pub params: RouteParams,
}

/// Stack of routes with `Home` fixed at the bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    routes: Vec<Route>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStack {
    pub fn new() -> Self {
        Self {
            routes: vec![Route {
                screen: Screen::Home,
                params: RouteParams::default(),
            }],
        }
    }

    pub fn current(&self) -> &Route {
        // The root route is never popped
        &self.routes[self.routes.len() - 1]
    }

    pub fn current_screen(&self) -> Screen {
        self.current().screen
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.routes.len() > 1
    }

    /// Show `Second` with `params`
    ///
    /// If `Second` is already on top it is replaced rather than stacked.
    pub fn push_second(&mut self, params: RouteParams) {
        if self.current_screen() == Screen::Second {
            self.routes.pop();
        }
        self.routes.push(Route {
            screen: Screen::Second,
            params,
        });
    }

    /// Pop the top route; a no-op on `Home`
    pub fn pop(&mut self) -> Option<Route> {
        if self.can_go_back() {
            self.routes.pop()
        } else {
            None
        }
    }
}

//! Role-gated navigation
//!
//! Routes, the sidebar entries each role sees, and resolution of a requested
//! path against the caller's session. This only gates what the UI offers;
//! it is not a permission system.

use log::debug;

use crate::auth::Role;
use crate::auth::Session;

/// A page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    AddClient,
    MyClients,
    VisitNotes,
    SearchClient,
    AllClients,
    VisitNotesManager,
    ManageAgents,
    DuplicateChecker,
    Reports,
    SystemSettings,
    Profile,
}

impl Route {
    /// Every route, in declaration order.
    pub const ALL: [Route; 13] = [
        Route::Login,
        Route::Dashboard,
        Route::AddClient,
        Route::MyClients,
        Route::VisitNotes,
        Route::SearchClient,
        Route::AllClients,
        Route::VisitNotesManager,
        Route::ManageAgents,
        Route::DuplicateChecker,
        Route::Reports,
        Route::SystemSettings,
        Route::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::AddClient => "/add-client",
            Route::MyClients => "/my-clients",
            Route::VisitNotes => "/visit-notes",
            Route::SearchClient => "/search",
            Route::AllClients => "/all-clients",
            Route::VisitNotesManager => "/visit-notes-manager",
            Route::ManageAgents => "/manage-agents",
            Route::DuplicateChecker => "/duplicate-checker",
            Route::Reports => "/reports",
            Route::SystemSettings => "/system-settings",
            Route::Profile => "/profile",
        }
    }

    /// Default sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::AddClient => "Add Client",
            Route::MyClients => "My Clients",
            Route::VisitNotes => "Visit Notes",
            Route::SearchClient => "Search Client",
            Route::AllClients => "All Clients",
            Route::VisitNotesManager => "Visit Notes Manager",
            Route::ManageAgents => "Manage Agents",
            Route::DuplicateChecker => "Duplicate Checker",
            Route::Reports => "Reports",
            Route::SystemSettings => "System Settings",
            Route::Profile => "Profile",
        }
    }

    /// Looks up a route by exact path.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

impl NavItem {
    const fn new(route: Route, label: &'static str) -> Self {
        Self { route, label }
    }

    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

const AGENT_NAV: [NavItem; 5] = [
    NavItem::new(Route::Dashboard, "Dashboard"),
    NavItem::new(Route::AddClient, "Add Client"),
    NavItem::new(Route::MyClients, "My Clients"),
    NavItem::new(Route::VisitNotes, "Visit Notes"),
    NavItem::new(Route::SearchClient, "Search Client"),
];

// Admins see "Search" for the same page agents call "Search Client".
const ADMIN_NAV: [NavItem; 9] = [
    NavItem::new(Route::Dashboard, "Dashboard"),
    NavItem::new(Route::AllClients, "All Clients"),
    NavItem::new(Route::VisitNotesManager, "Visit Notes Manager"),
    NavItem::new(Route::AddClient, "Add Client"),
    NavItem::new(Route::ManageAgents, "Manage Agents"),
    NavItem::new(Route::SearchClient, "Search"),
    NavItem::new(Route::DuplicateChecker, "Duplicate Checker"),
    NavItem::new(Route::Reports, "Reports"),
    NavItem::new(Route::SystemSettings, "System Settings"),
];

/// Sidebar entries for a role, in display order.
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => &ADMIN_NAV,
        Role::Agent => &AGENT_NAV,
    }
}

/// Whether a role may open a route.
///
/// A route is reachable when it is in the role's sidebar; the profile page
/// is reachable for everyone signed in.
pub fn can_access(role: Role, route: Route) -> bool {
    route == Route::Profile || nav_items(role).iter().any(|item| item.route == route)
}

/// Outcome of resolving a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Render this route.
    Allow(Route),
    /// Send the user elsewhere (login, or the dashboard from `/`).
    Redirect(Route),
    /// Known route the role does not see.
    Forbidden(Route),
    NotFound,
}

/// Resolve a path for the given session.
///
/// Without a session everything except the login page redirects to login.
pub fn resolve(session: Option<&Session>, path: &str) -> Resolution {
    let route = Route::from_path(path);

    let Some(session) = session else {
        return match route {
            Some(Route::Login) => Resolution::Allow(Route::Login),
            _ => Resolution::Redirect(Route::Login),
        };
    };

    if path == "/" {
        return Resolution::Redirect(Route::Dashboard);
    }

    let resolution = match route {
        None => Resolution::NotFound,
        Some(Route::Login) => Resolution::Redirect(Route::Dashboard),
        Some(route) if can_access(session.role(), route) => Resolution::Allow(route),
        Some(route) => Resolution::Forbidden(route),
    };
    debug!("resolved {} for {}: {:?}", path, session.role(), resolution);
    resolution
}

/// A page reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteRoute {
    pub path: &'static str,
    pub label: &'static str,
}

pub const HOME: SiteRoute = SiteRoute {
    path: "/",
    label: "Home",
};

pub const CONTACT: SiteRoute = SiteRoute {
    path: "/contact",
    label: "Contact",
};

/// Nav order.
pub const NAV_ROUTES: [SiteRoute; 2] = [HOME, CONTACT];

impl SiteRoute {
    /// Whether `pathname` is this page or one below it. Home only matches itself.
    pub fn is_active(&self, pathname: &str) -> bool {
        if self.path == "/" {
            return pathname == "/";
        }
        pathname
            .strip_prefix(self.path)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

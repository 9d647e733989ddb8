//! Route Table
//!
//! Static path -> view mapping. The router matches locations under the
//! history base; each of its routes mounts the view this table names.

/// Views that can be mounted by the router
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Select,
    Navigation,
}

/// One entry of the route table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Select",
        view: View::Select,
    },
    Route {
        path: "/charts/sublink",
        name: "Box",
        view: View::Navigation,
    },
];

/// Find the route registered for a path relative to the history base.
/// A single trailing slash is ignored.
pub fn resolve(path: &str) -> Option<&'static Route> {
    let path = match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    };
    ROUTES.iter().find(|route| route.path == path)
}

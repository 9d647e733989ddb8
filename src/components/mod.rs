//! UI Components
//!
//! Views mounted by the router and the pieces they are built from.

mod fixed_header;
mod home_view;
mod navigation_view;
mod not_found;
mod resource_list;
mod select_view;

pub use fixed_header::FixedHeader;
pub use home_view::HomeView;
pub use navigation_view::NavigationView;
pub use not_found::NotFound;
pub use resource_list::ResourceList;
pub use select_view::SelectView;

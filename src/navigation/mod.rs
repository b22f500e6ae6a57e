//! Navigation between the home view and per-person detail views
//!
//! Routes are plain path strings (`/` for home, `/<uuid>` for a person).
//! The [`RouteManager`] keeps the registry and decides what the visible
//! view stack looks like after every route change or back navigation.

mod manager;
mod page;
mod view;

pub use manager::RouteManager;
pub use page::Page;
pub use view::{View, ViewKind};

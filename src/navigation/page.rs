//! Platform page state: the current route and the visible view stack

use super::view::View;

/// What the front-end shows: a route and a stack of views, top last
#[derive(Debug, Clone)]
pub struct Page {
    pub(super) route: String,
    pub(super) views: Vec<View>,
    update_requested: bool,
}

impl Page {
    pub(super) fn new(base: &View) -> Self {
        Self {
            route: base.route().to_string(),
            views: vec![base.clone()],
            update_requested: true,
        }
    }

    /// The current route path
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Visible views, bottom (base) first
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// The view on top of the stack
    pub fn top(&self) -> Option<&View> {
        self.views.last()
    }

    pub fn depth(&self) -> usize {
        self.views.len()
    }

    pub fn routes(&self) -> Vec<&str> {
        self.views.iter().map(View::route).collect()
    }

    pub(super) fn request_update(&mut self) {
        self.update_requested = true;
    }

    /// Consume a pending render request
    pub fn take_update(&mut self) -> bool {
        std::mem::take(&mut self.update_requested)
    }
}

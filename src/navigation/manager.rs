//! Route registry and view-stack reconciliation
//!
//! The [`RouteManager`] maps route paths to views, keeps one base view at
//! the bottom of the page, and rebuilds the visible stack whenever the
//! route changes or a view is popped.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::page::Page;
use super::view::View;
use crate::error::{DebtError, DebtResult};

/// Owns the route registry and the page's view stack
#[derive(Debug)]
pub struct RouteManager {
    base_view: View,
    routes: HashMap<String, View>,
    page: Page,
}

impl RouteManager {
    /// Create a manager whose page starts at `base_view`
    pub fn new(base_view: View) -> Self {
        let mut routes = HashMap::new();
        routes.insert(base_view.route().to_string(), base_view.clone());
        let page = Page::new(&base_view);

        Self {
            base_view,
            routes,
            page,
        }
    }

    pub fn base_view(&self) -> &View {
        &self.base_view
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The view currently on top of the page
    pub fn current_view(&self) -> &View {
        self.page.top().unwrap_or(&self.base_view)
    }

    /// Consume the page's pending render request
    pub fn take_update(&mut self) -> bool {
        self.page.take_update()
    }

    pub fn is_registered(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    /// Number of registered routes, base included
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Insert or overwrite a route; the last registration wins
    pub fn register_route(&mut self, path: impl Into<String>, view: View) {
        let path = path.into();
        debug!(route = %path, "registering route");
        self.routes.insert(path, view);
    }

    /// Remove a route and prune its views from the visible stack
    pub fn unregister_route(&mut self, path: &str) -> DebtResult<View> {
        if path == self.base_view.route() {
            return Err(DebtError::BaseRoute(path.to_string()));
        }

        let removed = self
            .routes
            .remove(path)
            .ok_or_else(|| DebtError::RouteNotFound(path.to_string()))?;
        debug!(route = %path, "unregistered route");

        if let Some(index) = self.page.views.iter().position(|v| v.route() == path) {
            // The base view sits at index 0 and is never the removed route.
            self.page.views.truncate(index.max(1));
            self.page.route = self.current_view().route().to_string();
            self.page.request_update();
            debug!(route = %self.page.route, "pruned stale views from page");
        }

        Ok(removed)
    }

    /// Look up the view registered for `path`
    pub fn resolve(&self, path: &str) -> DebtResult<&View> {
        self.routes
            .get(path)
            .ok_or_else(|| DebtError::RouteNotFound(path.to_string()))
    }

    /// Replace the base view
    ///
    /// The new route is registered before the old one is removed, so the
    /// registry always holds a base route.
    pub fn set_base_view(&mut self, view: View) {
        let old_route = self.base_view.route().to_string();
        self.register_route(view.route().to_string(), view.clone());
        if old_route != view.route() {
            self.routes.remove(&old_route);
        }

        if self.page.route == old_route {
            self.page.route = view.route().to_string();
        }
        match self.page.views.first_mut() {
            Some(bottom) => *bottom = view.clone(),
            None => self.page.views.push(view.clone()),
        }
        self.base_view = view;
        self.page.request_update();
    }

    /// Navigate to `path`
    pub fn go(&mut self, path: &str) {
        self.on_route_change(path);
    }

    /// Rebuild the visible stack for a route change
    ///
    /// A known route already in the stack truncates back to it; a known
    /// route not in the stack is pushed on top of the base view; an unknown
    /// route falls back to the base route.
    pub fn on_route_change(&mut self, path: &str) {
        self.page.route = path.to_string();

        let snapshot = std::mem::take(&mut self.page.views);
        self.page.views.push(self.base_view.clone());

        let base_route = self.base_view.route();
        match self.routes.get(path) {
            Some(view) if path != base_route => {
                if let Some(index) = snapshot.iter().position(|v| v.route() == path) {
                    self.page.views = snapshot;
                    self.page.views.truncate(index + 1);
                } else {
                    self.page.views.push(view.clone());
                }
            }
            Some(_) => {}
            None => {
                warn!(route = %path, "unknown route, returning to base");
                self.page.route = base_route.to_string();
            }
        }

        debug!(route = %self.page.route, depth = self.page.depth(), "route changed");
        self.page.request_update();
    }

    /// Pop the top view and navigate to the one beneath it
    pub fn on_view_pop(&mut self) -> DebtResult<()> {
        if self.page.views.len() <= 1 {
            return Err(DebtError::EmptyViewStack);
        }

        if let Some(popped) = self.page.views.pop() {
            debug!(route = %popped.route(), "popped view");
        }
        let top_route = self.current_view().route().to_string();
        self.go(&top_route);
        Ok(())
    }
}

impl Default for RouteManager {
    fn default() -> Self {
        Self::new(View::home())
    }
}

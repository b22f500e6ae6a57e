//! Views addressable by route path

use std::fmt;

use crate::models::PersonId;

/// What a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// The list of people
    Home,
    /// One person's transactions
    PersonDetail(PersonId),
}

/// A screen registered under a route path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    route: String,
    kind: ViewKind,
}

impl View {
    pub fn new(route: impl Into<String>, kind: ViewKind) -> Self {
        Self {
            route: route.into(),
            kind,
        }
    }

    /// The home view at `/`
    pub fn home() -> Self {
        Self::new("/", ViewKind::Home)
    }

    /// Detail view for a person, routed at `/<uuid>`
    pub fn person_detail(person_id: PersonId) -> Self {
        Self::new(person_id.route(), ViewKind::PersonDetail(person_id))
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn person_id(&self) -> Option<PersonId> {
        match self.kind {
            ViewKind::PersonDetail(id) => Some(id),
            ViewKind::Home => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route)
    }
}

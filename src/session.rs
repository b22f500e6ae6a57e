//! The person list: ledger storage and routing driven together
//!
//! The ledger and the route manager never talk to each other. A
//! [`Session`] performs the paired steps: adding a person also registers
//! their detail route, and removing one settles their balance before the
//! route is revoked.

use tracing::info;

use crate::config::paths::DebtPaths;
use crate::config::settings::Settings;
use crate::error::{DebtError, DebtResult};
use crate::models::{Person, PersonId};
use crate::navigation::{RouteManager, View};
use crate::services::{PersonService, TransactionService};
use crate::storage::Storage;

/// Storage plus the route manager for one running front-end
pub struct Session {
    storage: Storage,
    router: RouteManager,
    default_person_name: String,
}

impl Session {
    /// Create a session whose base view is the home list at `/`
    pub fn new(paths: DebtPaths, settings: &Settings) -> DebtResult<Self> {
        let storage = Storage::new(paths)?;

        Ok(Self {
            storage,
            router: RouteManager::new(View::home()),
            default_person_name: settings.default_person_name.clone(),
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn router(&self) -> &RouteManager {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut RouteManager {
        &mut self.router
    }

    pub fn people(&self) -> PersonService<'_> {
        PersonService::new(&self.storage)
    }

    pub fn transactions(&self) -> TransactionService<'_> {
        TransactionService::new(&self.storage)
    }

    /// Create a person and register their detail route
    ///
    /// A blank name falls back to the configured default name.
    pub fn add_person(&mut self, name: &str) -> DebtResult<Person> {
        let name = match name.trim() {
            "" => self.default_person_name.as_str(),
            trimmed => trimmed,
        };

        let person = PersonService::new(&self.storage).create(name)?;
        self.router
            .register_route(person.route(), View::person_detail(person.id()));

        info!(person = %person.id(), name = %person.name, "added person");
        Ok(person)
    }

    /// Settle and delete a person, then revoke their route
    pub fn remove_person(&mut self, id: PersonId) -> DebtResult<Person> {
        let person = PersonService::new(&self.storage).delete(id)?;

        match self.router.unregister_route(&person.route()) {
            Ok(_) | Err(DebtError::RouteNotFound(_)) => {}
            Err(e) => return Err(e),
        }

        info!(person = %person.id(), name = %person.name, "removed person");
        Ok(person)
    }

    /// Navigate to a person's detail view
    pub fn open_person(&mut self, id: PersonId) -> DebtResult<()> {
        let route = id.route();
        if !self.router.is_registered(&route) {
            return Err(DebtError::RouteNotFound(route));
        }
        self.router.go(&route);
        Ok(())
    }

    /// Navigate to an arbitrary route; unknown routes land on home
    pub fn go(&mut self, path: &str) {
        self.router.go(path);
    }

    /// Pop the top view
    pub fn back(&mut self) -> DebtResult<()> {
        self.router.on_view_pop()
    }

    /// The person whose detail view is on top, if any
    pub fn current_person(&self) -> DebtResult<Option<Person>> {
        match self.router.current_view().person_id() {
            Some(id) => self.storage.people.get(id),
            None => Ok(None),
        }
    }
}

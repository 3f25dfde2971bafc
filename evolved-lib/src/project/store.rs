//! Project store
//!
//! Holds every open project plus the active index and tells subscribers about
//! each change. Mutations go through the store so notifications can't be missed.

use std::fmt;

use log::{debug, warn};

use super::{PersistedProjects, Project, ProjectPatch, from_persisted, to_persisted};
use crate::error::ParseError;

/// Handle returned by [`ProjectStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ProjectStore)>;

/// The list of projects and which one is being edited.
///
/// There is always at least one project and `active_index` always points at one.
pub struct ProjectStore {
    projects: Vec<Project>,
    active_index: usize,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new(vec![Project::default()], 0)
    }
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("active_index", &self.active_index)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ProjectStore {
    /// Creates a store. An empty list gets a default project; the index is clamped.
    pub fn new(mut projects: Vec<Project>, active_index: usize) -> Self {
        if projects.is_empty() {
            projects.push(Project::default());
        }
        let active_index = active_index.min(projects.len() - 1);
        Self {
            projects,
            active_index,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Rebuilds a store from its persisted shape.
    pub fn from_persisted(persisted: PersistedProjects) -> Result<Self, ParseError> {
        let projects = persisted
            .projects
            .into_iter()
            .map(from_persisted)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(projects, persisted.active_index.unwrap_or(0)))
    }

    /// The persisted shape of the store.
    pub fn to_persisted(&self) -> PersistedProjects {
        PersistedProjects {
            projects: self.projects.iter().map(to_persisted).collect(),
            active_index: Some(self.active_index),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> &Project {
        &self.projects[self.active_index]
    }

    /// Registers a callback run after every mutation, in subscription order.
    pub fn subscribe(&mut self, callback: impl FnMut(&ProjectStore) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Mutates the active project in place.
    pub fn update_active<T>(&mut self, f: impl FnOnce(&mut Project) -> T) -> T {
        let out = f(&mut self.projects[self.active_index]);
        self.notify();
        out
    }

    /// Applies a partial update to the active project.
    pub fn update_project(&mut self, patch: ProjectPatch) {
        self.update_active(|project| project.apply(patch));
    }

    /// Appends a project and makes it active.
    pub fn add_project(&mut self, project: Project) {
        debug!("adding project {:?}", project.name);
        self.projects.push(project);
        self.active_index = self.projects.len() - 1;
        self.notify();
    }

    /// Removes the active project unless it is the only one.
    pub fn remove_active_project(&mut self) -> bool {
        if self.projects.len() <= 1 {
            return false;
        }
        let removed = self.projects.remove(self.active_index);
        debug!("removed project {:?}", removed.name);
        self.active_index = self.active_index.min(self.projects.len() - 1);
        self.notify();
        true
    }

    pub fn rename_active_project(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.update_active(|project| project.name = name);
    }

    /// Switches the active project. Out-of-range indices are ignored.
    pub fn set_active_index(&mut self, index: usize) {
        if index >= self.projects.len() {
            warn!(
                "ignoring active index {index}, only {} projects",
                self.projects.len()
            );
            return;
        }
        self.active_index = index;
        self.notify();
    }

    fn notify(&mut self) {
        let mut subscribers = std::mem::take(&mut self.subscribers);
        for (_, callback) in subscribers.iter_mut() {
            callback(self);
        }
        self.subscribers = subscribers;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_never_removes_last_project() {
        let mut store = ProjectStore::default();
        assert!(!store.remove_active_project());
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn test_remove_clamps_active_index() {
        let mut store = ProjectStore::default();
        store.add_project(Project::named("second"));
        assert_eq!(store.active_index(), 1);
        assert!(store.remove_active_project());
        assert_eq!(store.active_index(), 0);
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = ProjectStore::default();

        let first = Rc::clone(&log);
        store.subscribe(move |s| first.borrow_mut().push(("first", s.active().name.clone())));
        let second = Rc::clone(&log);
        let id = store.subscribe(move |_| second.borrow_mut().push(("second", String::new())));

        store.rename_active_project("Renamed");
        assert_eq!(
            *log.borrow(),
            vec![("first", "Renamed".to_string()), ("second", String::new())]
        );

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_active_index(0);
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_out_of_range_active_index_ignored() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = ProjectStore::default();
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.set_active_index(5);
        assert_eq!(store.active_index(), 0);
        assert_eq!(*calls.borrow(), 0);
    }
}

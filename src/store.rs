// In-memory ordered task store

use crate::models::Task;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// Change notification delivered to subscribers after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added { id: String },
    Edited { id: String },
    Deleted { id: String },
    Replaced { count: usize },
}

/// Handle returned by [`TaskStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent, &[Task])>;

/// Ordered collection of tasks owned by whoever created it
///
/// The order is the display order absent filtering. It only changes through
/// `add` (append), `delete` (removal) and `replace_all`.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing ordered collection
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    // ========================================================================
    // Read API
    // ========================================================================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a task to the end of the collection
    ///
    /// The caller must supply a fresh id. A duplicate is logged and appended
    /// anyway.
    pub fn add(&mut self, task: Task) {
        if self.get(&task.id).is_some() {
            warn!(id = %task.id, "add: task id already present");
        }
        debug!(id = %task.id, title = %task.title, "add");

        let id = task.id.clone();
        self.tasks.push(task);
        self.notify(StoreEvent::Added { id });
    }

    /// Replace the task with the same id in place
    ///
    /// Unknown ids are ignored. Returns whether a task was replaced.
    pub fn edit(&mut self, task: Task) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == task.id) else {
            debug!(id = %task.id, "edit: no such task, ignoring");
            return false;
        };

        debug!(id = %task.id, index, "edit");
        let id = task.id.clone();
        self.tasks[index] = task;
        self.notify(StoreEvent::Edited { id });
        true
    }

    /// Remove the task with the given id
    ///
    /// Unknown ids are ignored. Returns whether a task was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);

        if self.tasks.len() == before {
            debug!(id, "delete: no such task, ignoring");
            return false;
        }

        debug!(id, "delete");
        self.notify(StoreEvent::Deleted { id: id.to_string() });
        true
    }

    /// Discard the current collection and install `tasks` in the given order
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id.as_str()) {
                warn!(id = %task.id, "replace_all: duplicate task id");
            }
        }

        debug!(old = self.tasks.len(), new = tasks.len(), "replace_all");
        self.tasks = tasks;
        let count = self.tasks.len();
        self.notify(StoreEvent::Replaced { count });
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Register a listener called after every effective mutation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[Task]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event, &self.tasks);
        }
    }
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

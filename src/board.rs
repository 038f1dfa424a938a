// Board: the presentation-side controller around a task store

use crate::filter::{StatusFilter, ViewFilter};
use crate::ids::IdGenerator;
use crate::models::{Task, TaskDraft, TaskStatus};
use crate::reorder::{self, DropResult, ReorderMode};
use crate::store::TaskStore;
use eyre::{Result, eyre};
use std::fmt;
use tracing::{debug, info};

/// Short user-facing confirmation shown after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Updated,
    Deleted,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Updated => "Task updated successfully!",
            Notice::Deleted => "Task deleted!",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Notice::Deleted)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Owns the store plus the view state a user manipulates
pub struct Board {
    store: TaskStore,
    ids: Box<dyn IdGenerator>,
    view: ViewFilter,
    reorder_mode: ReorderMode,
}

impl Board {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self::with_store(TaskStore::new(), ids)
    }

    pub fn with_store(store: TaskStore, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            view: ViewFilter::default(),
            reorder_mode: ReorderMode::default(),
        }
    }

    pub fn with_reorder_mode(mut self, mode: ReorderMode) -> Self {
        self.reorder_mode = mode;
        self
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn view(&self) -> &ViewFilter {
        &self.view
    }

    pub fn reorder_mode(&self) -> ReorderMode {
        self.reorder_mode
    }

    /// Validate the form input and add the resulting task
    ///
    /// Invalid input never reaches the store. Returns the new task's id.
    pub fn submit(&mut self, draft: TaskDraft) -> Result<String> {
        let id = self.ids.next_id();
        let task = draft.into_task(id)?;
        let id = task.id.clone();

        info!(id = %id, title = %task.title, "task added");
        self.store.add(task);
        Ok(id)
    }

    /// Save an edited task (full replacement)
    pub fn save(&mut self, task: Task) -> Notice {
        let id = task.id.clone();
        if self.store.edit(task) {
            info!(id = %id, "task updated");
        }
        Notice::Updated
    }

    /// Change only the status of a task
    pub fn set_status(&mut self, id: &str, status: TaskStatus) -> Result<Notice> {
        let mut task = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| eyre!("No task with id {}", id))?;
        task.status = status;
        Ok(self.save(task))
    }

    pub fn remove(&mut self, id: &str) -> Notice {
        if self.store.delete(id) {
            info!(id, "task deleted");
        }
        Notice::Deleted
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        debug!(%status, "status filter changed");
        self.view.status = status;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.search = search.into();
        debug!(search = %self.view.search, "search changed");
    }

    /// Tasks currently displayed, in display order
    pub fn visible(&self) -> Vec<Task> {
        self.view.apply(self.store.tasks())
    }

    /// Finish a drag gesture over the visible list
    ///
    /// Positions must point into the visible list; anything else is rejected
    /// before the store is touched. Returns whether the store changed.
    pub fn drop_task(&mut self, drop: DropResult) -> Result<bool> {
        let displayed = self.visible();
        if drop.source >= displayed.len() {
            return Err(eyre!("No item at position {}", drop.source + 1));
        }
        if let Some(destination) = drop.destination
            && destination >= displayed.len()
        {
            return Err(eyre!("No item at position {}", destination + 1));
        }
        Ok(reorder::apply_drop(&mut self.store, &displayed, drop, self.reorder_mode))
    }

    /// Resolve a task by full id or by a unique id prefix
    pub fn resolve_id(&self, needle: &str) -> Result<String> {
        if self.store.get(needle).is_some() {
            return Ok(needle.to_string());
        }

        let mut matches = self.store.tasks().iter().filter(|t| t.id.starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(task.id.clone()),
            (Some(_), Some(_)) => Err(eyre!("Ambiguous task id prefix: {}", needle)),
            (None, _) => Err(eyre!("No task with id {}", needle)),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("store", &self.store)
            .field("view", &self.view)
            .field("reorder_mode", &self.reorder_mode)
            .finish()
    }
}

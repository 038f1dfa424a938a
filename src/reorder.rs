// Drag-and-drop reordering of the displayed task list

use crate::models::Task;
use crate::store::TaskStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Outcome of a drag gesture over the displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    pub source: usize,
    /// None when the item was dropped outside the list
    pub destination: Option<usize>,
}

impl DropResult {
    pub fn new(source: usize, destination: Option<usize>) -> Self {
        Self { source, destination }
    }
}

/// How a reordered visible list is written back to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReorderMode {
    /// Refill the slots of the visible tasks in the full list; hidden tasks stay put
    #[default]
    Splice,
    /// Replace the whole store with the visible list. Hidden tasks are dropped.
    VisibleOnly,
}

/// Move the element at `source` to `destination`
///
/// The element is removed first, so `destination` indexes the shortened
/// sequence. An out-of-range source leaves the sequence unchanged and a
/// destination past the end moves the element to the end.
pub fn reorder<T: Clone>(displayed: &[T], source: usize, destination: usize) -> Vec<T> {
    let mut items = displayed.to_vec();
    if source >= items.len() {
        warn!(source, len = items.len(), "reorder: source index out of range");
        return items;
    }

    let moved = items.remove(source);
    let destination = if destination > items.len() {
        warn!(destination, len = items.len(), "reorder: destination clamped to end");
        items.len()
    } else {
        destination
    };
    items.insert(destination, moved);
    items
}

/// Write a reordered visible subsequence back into the full collection
///
/// The positions the visible tasks occupy in `full` are refilled, in order,
/// with `reordered`. Tasks not in `reordered` keep their positions.
pub fn splice(full: &[Task], reordered: &[Task]) -> Vec<Task> {
    let present: HashSet<&str> = full.iter().map(|t| t.id.as_str()).collect();
    let mut incoming = reordered.iter().filter(|t| present.contains(t.id.as_str()));

    let visible: HashSet<&str> = reordered.iter().map(|t| t.id.as_str()).collect();
    let mut result = Vec::with_capacity(full.len());

    for task in full {
        if visible.contains(task.id.as_str()) {
            match incoming.next() {
                Some(next) => result.push(next.clone()),
                None => result.push(task.clone()),
            }
        } else {
            result.push(task.clone());
        }
    }

    result
}

/// Apply a completed drag to the store
///
/// `displayed` is the projection the user was looking at. Returns false when
/// the store was left untouched (no destination or no movement).
pub fn apply_drop(store: &mut TaskStore, displayed: &[Task], drop: DropResult, mode: ReorderMode) -> bool {
    let Some(destination) = drop.destination else {
        debug!(source = drop.source, "drop without destination, ignoring");
        return false;
    };
    if drop.source == destination {
        debug!(source = drop.source, "drop onto same position, ignoring");
        return false;
    }

    let reordered = reorder(displayed, drop.source, destination);

    let next = match mode {
        ReorderMode::Splice => splice(store.tasks(), &reordered),
        ReorderMode::VisibleOnly => {
            let dropped = store.len().saturating_sub(reordered.len());
            if dropped > 0 {
                warn!(dropped, "visible-only reorder discards tasks hidden by the filter");
            }
            reordered
        }
    };

    debug!(source = drop.source, destination, ?mode, "apply_drop");
    store.replace_all(next);
    true
}

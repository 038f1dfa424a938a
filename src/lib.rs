// Taskboard - in-memory task list with filtering, search and reordering

pub mod board;
pub mod config;
pub mod filter;
pub mod ids;
pub mod models;
pub mod render;
pub mod reorder;
pub mod shell;
pub mod store;

// Re-export main types for convenience
pub use board::{Board, Notice};
pub use config::Config;
pub use filter::{StatusFilter, ViewFilter, project};
pub use ids::{IdGenerator, IdScheme, SequentialIds, UuidIds};
pub use models::{Task, TaskDraft, TaskStatus};
pub use render::Style;
pub use reorder::{DropResult, ReorderMode, apply_drop, reorder};
pub use shell::{Command, Shell};
pub use store::{StoreEvent, SubscriptionId, TaskStore};

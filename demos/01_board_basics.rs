//! Demo 01: Board Basics
//!
//! Adds, edits, filters and deletes tasks on an in-memory board.
//!
//! Run with: cargo run --example 01_board_basics

use eyre::Result;
use taskboard::{Board, SequentialIds, StatusFilter, TaskDraft, TaskStatus};

fn main() -> Result<()> {
    println!("Taskboard Basics Demo");
    println!("=====================\n");

    let mut board = Board::new(Box::new(SequentialIds::new("demo")));

    // CREATE
    println!("1. ADD - Submitting two tasks...");
    let milk = board.submit(TaskDraft::new("Buy milk", "2024-01-01").with_description("semi-skimmed"))?;
    let dog = board.submit(TaskDraft::new("Walk dog", "2024-01-02"))?;
    println!("   Added {} and {}\n", milk, dog);

    // Invalid input never reaches the store
    println!("2. VALIDATION - Submitting a task without a title...");
    match board.submit(TaskDraft::new("", "2024-01-03")) {
        Ok(id) => println!("   Unexpectedly added {}", id),
        Err(e) => println!("   Rejected: {}", e),
    }
    println!("   Store still holds {} tasks\n", board.store().len());

    // UPDATE
    println!("3. EDIT - Marking the dog walk as in progress...");
    let notice = board.set_status(&dog, TaskStatus::InProgress)?;
    println!("   {}\n", notice);

    // PROJECT
    println!("4. FILTER - Showing in-progress tasks...");
    board.set_status_filter(StatusFilter::Only(TaskStatus::InProgress));
    for task in board.visible() {
        println!("   - [{}] {}", task.status, task.title);
    }
    println!();

    println!("5. SEARCH - Searching for \"MILK\" across all statuses...");
    board.set_status_filter(StatusFilter::All);
    board.set_search("MILK");
    for task in board.visible() {
        println!("   - {} (due {})", task.title, task.due_date);
    }
    println!();

    // DELETE
    println!("6. DELETE - Removing the milk task...");
    let notice = board.remove(&milk);
    println!("   {}", notice);
    if board.visible().is_empty() {
        println!("   No Items");
    }
    println!();

    println!("Demo complete!");
    Ok(())
}

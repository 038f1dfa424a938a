//! Demo 02: Reordering While Filtered
//!
//! Shows the two write-back modes for drag-and-drop while a status filter
//! hides part of the list.
//!
//! Run with: cargo run --example 02_filtered_reorder

use eyre::Result;
use taskboard::{Board, DropResult, ReorderMode, SequentialIds, StatusFilter, TaskDraft, TaskStatus};

fn build(mode: ReorderMode) -> Result<Board> {
    let mut board = Board::new(Box::new(SequentialIds::new("t"))).with_reorder_mode(mode);
    for title in ["Draft outline", "Book venue", "Send invites", "Order cake"] {
        board.submit(TaskDraft::new(title, "2024-05-01"))?;
    }
    board.set_status("t-2", TaskStatus::Completed)?;
    board.set_status_filter(StatusFilter::Only(TaskStatus::Pending));
    Ok(board)
}

fn print_store(board: &Board) {
    for task in board.store().tasks() {
        println!("   - [{}] {}", task.status, task.title);
    }
}

fn main() -> Result<()> {
    println!("Taskboard Filtered Reorder Demo");
    println!("===============================\n");

    for mode in [ReorderMode::Splice, ReorderMode::VisibleOnly] {
        let mut board = build(mode)?;
        println!("Mode: {:?}", mode);
        println!("   Visible before drag:");
        for (i, task) in board.visible().iter().enumerate() {
            println!("   {}. {}", i + 1, task.title);
        }

        // Drag the first visible task to the bottom of the visible list
        board.drop_task(DropResult::new(0, Some(2)))?;

        println!("   Full store after drag:");
        print_store(&board);
        println!();
    }

    println!("Demo complete!");
    Ok(())
}

use taskboard::{
    Board, DropResult, SequentialIds, StatusFilter, Task, TaskDraft, TaskStatus, TaskStore, project, reorder,
};

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.title.as_str()).collect()
}

fn id_of(store: &TaskStore, title: &str) -> String {
    store
        .tasks()
        .iter()
        .find(|t| t.title == title)
        .map(|t| t.id.clone())
        .expect("task with title")
}

#[test]
fn test_add_search_delete_scenario() {
    let mut board = Board::new(Box::new(SequentialIds::new("task")));

    board.submit(TaskDraft::new("Buy milk", "2024-01-01")).unwrap();
    board.submit(TaskDraft::new("Walk dog", "2024-01-02")).unwrap();

    let all = project(board.store().tasks(), StatusFilter::All, "");
    assert_eq!(titles(&all), vec!["Buy milk", "Walk dog"]);

    let walk = project(board.store().tasks(), StatusFilter::All, "walk");
    assert_eq!(titles(&walk), vec!["Walk dog"]);

    let milk = id_of(board.store(), "Buy milk");
    board.remove(&milk);

    let all = project(board.store().tasks(), StatusFilter::All, "");
    assert_eq!(titles(&all), vec!["Walk dog"]);
}

#[test]
fn test_projection_filter_and_empty_state() {
    let mut board = Board::new(Box::new(SequentialIds::new("task")));
    let pending = board.submit(TaskDraft::new("Test Task", "2024-01-01")).unwrap();
    let completed = board.submit(TaskDraft::new("Another Task", "2024-01-01")).unwrap();
    let in_progress = board.submit(TaskDraft::new("Third Task", "2024-01-01")).unwrap();
    board.set_status(&completed, TaskStatus::Completed).unwrap();
    board.set_status(&in_progress, TaskStatus::InProgress).unwrap();

    let only_completed = project(board.store().tasks(), TaskStatus::Completed.into(), "");
    assert_eq!(only_completed.len(), 1);
    assert_eq!(only_completed[0].id, completed);

    let another = project(board.store().tasks(), StatusFilter::All, "another");
    assert_eq!(titles(&another), vec!["Another Task"]);

    assert!(project(board.store().tasks(), TaskStatus::Pending.into(), "another").is_empty());
    assert_eq!(board.store().get(&pending).unwrap().status, TaskStatus::Pending);
}

#[test]
fn test_reorder_then_write_back() {
    let mut board = Board::new(Box::new(SequentialIds::new("task")));
    for title in ["A", "B", "C"] {
        board.submit(TaskDraft::new(title, "2024-01-01")).unwrap();
    }

    assert_eq!(titles(&reorder(&board.visible(), 0, 2)), vec!["B", "C", "A"]);

    let before = board.store().tasks().to_vec();
    assert!(!board.drop_task(DropResult::new(0, None)).unwrap());
    assert_eq!(board.store().tasks(), before.as_slice());

    assert!(board.drop_task(DropResult::new(0, Some(2))).unwrap());
    assert_eq!(titles(board.store().tasks()), vec!["B", "C", "A"]);
}

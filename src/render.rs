// Text rendering of tasks for the shell

use crate::filter::ViewFilter;
use crate::models::{Task, TaskStatus};
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

pub const NO_ITEMS: &str = "No Items";

/// Render settings for one shell session
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub color: bool,
    pub today: NaiveDate,
}

impl Style {
    fn paint(&self, text: &str, f: fn(&str) -> ColoredString) -> String {
        if self.color { f(text).to_string() } else { text.to_string() }
    }

    pub fn badge(&self, status: TaskStatus) -> String {
        let text = format!("[{}]", status);
        match status {
            TaskStatus::Pending => self.paint(&text, |s| s.yellow()),
            TaskStatus::InProgress => self.paint(&text, |s| s.blue()),
            TaskStatus::Completed => self.paint(&text, |s| s.green()),
        }
    }

    pub fn due(&self, task: &Task) -> String {
        let text = format!("due {}", task.due_date);
        if task.is_overdue(self.today) {
            self.paint(&text, |s| s.red())
        } else {
            text
        }
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |s| s.red().bold())
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |s| s.green())
    }
}

/// Numbered list of the projected tasks, or the "No Items" marker
pub fn task_list(tasks: &[Task], view: &ViewFilter, style: &Style) -> String {
    let mut out = String::new();

    let _ = write!(out, "Filter: {}", view.status);
    if !view.search.is_empty() {
        let _ = write!(out, "  Search: \"{}\"", view.search);
    }
    out.push('\n');

    if tasks.is_empty() {
        out.push_str(NO_ITEMS);
        out.push('\n');
        return out;
    }

    for (index, task) in tasks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} {}  ({})  {}",
            index + 1,
            style.badge(task.status),
            task.title,
            style.due(task),
            task.id
        );
        if !task.description.is_empty() {
            let _ = writeln!(out, "     {}", first_line(&task.description));
        }
    }

    out
}

/// Full details of a single task
pub fn task_details(task: &Task, style: &Style) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", task.title);
    let _ = writeln!(out, "  id:     {}", task.id);
    let _ = writeln!(out, "  status: {}", style.badge(task.status));
    let _ = writeln!(out, "  {}", style.due(task));
    if !task.description.is_empty() {
        out.push('\n');
        for line in task.description.lines() {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

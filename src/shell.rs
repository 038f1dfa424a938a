// Line-oriented command shell driving a Board

use crate::board::Board;
use crate::filter::StatusFilter;
use crate::models::{TaskDraft, TaskStatus, parse_due_date};
use crate::render::{self, Style};
use crate::reorder::DropResult;
use eyre::{Context, Result, eyre};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  add <title> <due-date> [description]            add a task (due date YYYY-MM-DD)
  edit <id> <title> <due-date> <status> [desc]    replace a task
  status <id> <status>                            change status only
  delete <id>                                     delete a task (alias: rm)
  filter <all|pending|in-progress|completed>      set the status filter
  search [text]                                   set the title search (empty clears)
  move <from> [to]                                drag item <from> onto position <to>
  list                                            show the current view (alias: ls)
  show <id>                                       show a task in full
  dump                                            print all tasks as JSON
  help                                            this text
  quit                                            leave (alias: exit)
Positions are 1-based as shown by `list`. Ids may be abbreviated to a unique prefix.
Quote arguments containing spaces: add \"Buy milk\" 2024-01-01";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        due_date: String,
        description: String,
    },
    Edit {
        id: String,
        title: String,
        due_date: String,
        status: TaskStatus,
        description: String,
    },
    Status {
        id: String,
        status: TaskStatus,
    },
    Delete {
        id: String,
    },
    Filter(StatusFilter),
    Search(String),
    Move {
        from: usize,
        to: Option<usize>,
    },
    List,
    Show {
        id: String,
    },
    Dump,
    Help,
    Quit,
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Split a line into words; double quotes group words, `\"` escapes a quote
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(eyre!("Unterminated quote"));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield None.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let tokens = tokenize(trimmed)?;
        let Some((name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match name.to_lowercase().as_str() {
            "add" => {
                expect_args(name, args, 2, 3)?;
                Command::Add {
                    title: args[0].clone(),
                    due_date: args[1].clone(),
                    description: args.get(2).cloned().unwrap_or_default(),
                }
            }
            "edit" => {
                expect_args(name, args, 4, 5)?;
                Command::Edit {
                    id: args[0].clone(),
                    title: args[1].clone(),
                    due_date: args[2].clone(),
                    status: args[3].parse()?,
                    description: args.get(4).cloned().unwrap_or_default(),
                }
            }
            "status" => {
                expect_args(name, args, 2, 2)?;
                Command::Status {
                    id: args[0].clone(),
                    status: args[1].parse()?,
                }
            }
            "delete" | "rm" => {
                expect_args(name, args, 1, 1)?;
                Command::Delete { id: args[0].clone() }
            }
            "filter" => {
                expect_args(name, args, 1, 1)?;
                Command::Filter(args[0].parse()?)
            }
            "search" => Command::Search(search_text(trimmed)?),
            "move" | "mv" => {
                expect_args(name, args, 1, 2)?;
                Command::Move {
                    from: parse_position(&args[0])?,
                    to: args.get(1).map(|a| parse_position(a)).transpose()?,
                }
            }
            "list" | "ls" => Command::List,
            "show" => {
                expect_args(name, args, 1, 1)?;
                Command::Show { id: args[0].clone() }
            }
            "dump" => Command::Dump,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(eyre!("Unknown command: {} (try `help`)", other)),
        };

        Ok(Some(command))
    }
}

fn expect_args(name: &str, args: &[String], min: usize, max: usize) -> Result<()> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{}-{}", min, max)
        };
        return Err(eyre!(
            "`{}` takes {} argument(s), got {}",
            name,
            expected,
            args.len()
        ));
    }
    Ok(())
}

/// Everything after the command word, spacing kept as typed
///
/// A single quoted argument is unquoted so `search "  "` can match spaces.
fn search_text(line: &str) -> Result<String> {
    let rest = line
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim_start())
        .unwrap_or("");

    if rest.starts_with('"') {
        let mut tokens = tokenize(rest)?;
        if tokens.len() == 1 {
            return Ok(tokens.remove(0));
        }
    }
    Ok(rest.to_string())
}

/// 1-based list position to 0-based index
fn parse_position(raw: &str) -> Result<usize> {
    let position = raw
        .parse::<usize>()
        .with_context(|| format!("Invalid position: {}", raw))?;
    if position == 0 {
        return Err(eyre!("Positions start at 1"));
    }
    Ok(position - 1)
}

/// Interactive front end: reads commands, drives the board, prints views
pub struct Shell {
    board: Board,
    style: Style,
    prompt: bool,
}

impl Shell {
    pub fn new(board: Board, style: Style) -> Self {
        Self {
            board,
            style,
            prompt: false,
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run until `quit` or end of input
    ///
    /// Command errors are printed and the loop continues; only I/O errors
    /// end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read command")?;

            match self.execute_line(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!(line = %line, error = %e, "command failed");
                    writeln!(out, "{}", self.style.error(&format!("Error: {:#}", e)))?;
                }
            }
        }
        Ok(())
    }

    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match Command::parse(line)? {
            Some(command) => self.execute(command, out),
            None => Ok(Flow::Continue),
        }
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        debug!(?command, "execute");

        match command {
            Command::Add {
                title,
                due_date,
                description,
            } => {
                let draft = TaskDraft::new(title, due_date).with_description(description);
                let id = self.board.submit(draft)?;
                writeln!(out, "Added {}", id)?;
            }
            Command::Edit {
                id,
                title,
                due_date,
                status,
                description,
            } => {
                let id = self.board.resolve_id(&id)?;
                let mut task = self
                    .board
                    .store()
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| eyre!("No task with id {}", id))?;
                if title.is_empty() {
                    return Err(eyre!("Task title is required"));
                }
                task.title = title;
                task.due_date = parse_due_date(&due_date)?;
                task.status = status;
                task.description = description;

                let notice = self.board.save(task);
                writeln!(out, "{}", self.style.success(notice.message()))?;
            }
            Command::Status { id, status } => {
                let id = self.board.resolve_id(&id)?;
                let notice = self.board.set_status(&id, status)?;
                writeln!(out, "{}", self.style.success(notice.message()))?;
            }
            Command::Delete { id } => {
                let id = self.board.resolve_id(&id)?;
                let notice = self.board.remove(&id);
                writeln!(out, "{}", self.style.error(notice.message()))?;
            }
            Command::Filter(status) => {
                self.board.set_status_filter(status);
                self.list(out)?;
            }
            Command::Search(text) => {
                self.board.set_search(text);
                self.list(out)?;
            }
            Command::Move { from, to } => {
                if self.board.drop_task(DropResult::new(from, to))? {
                    self.list(out)?;
                } else {
                    writeln!(out, "Nothing moved")?;
                }
            }
            Command::List => self.list(out)?,
            Command::Show { id } => {
                let id = self.board.resolve_id(&id)?;
                if let Some(task) = self.board.store().get(&id) {
                    write!(out, "{}", render::task_details(task, &self.style))?;
                }
            }
            Command::Dump => {
                let json = serde_json::to_string_pretty(self.board.store().tasks())?;
                writeln!(out, "{}", json)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        let visible = self.board.visible();
        write!(out, "{}", render::task_list(&visible, self.board.view(), &self.style))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::reorder::ReorderMode;
    use chrono::NaiveDate;

    fn shell() -> Shell {
        shell_with_mode(ReorderMode::Splice)
    }

    fn shell_with_mode(mode: ReorderMode) -> Shell {
        let style = Style {
            color: false,
            today: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let board = Board::new(Box::new(SequentialIds::new("t"))).with_reorder_mode(mode);
        Shell::new(board, style)
    }

    fn run(shell: &mut Shell, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("add milk 2024-01-01").unwrap(), vec!["add", "milk", "2024-01-01"]);
        assert_eq!(
            tokenize(r#"add "Buy milk" 2024-01-01 "say \"hi\"""#).unwrap(),
            vec!["add", "Buy milk", "2024-01-01", "say \"hi\""]
        );
        assert_eq!(tokenize(r#"search """#).unwrap(), vec!["search", ""]);
        assert!(tokenize(r#"add "oops"#).is_err());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# comment").unwrap(), None);
        assert_eq!(Command::parse("ls").unwrap(), Some(Command::List));
        assert_eq!(
            Command::parse("filter in-progress").unwrap(),
            Some(Command::Filter(StatusFilter::Only(TaskStatus::InProgress)))
        );
        assert_eq!(
            Command::parse("move 1 3").unwrap(),
            Some(Command::Move { from: 0, to: Some(2) })
        );
        assert_eq!(Command::parse("move 2").unwrap(), Some(Command::Move { from: 1, to: None }));
        assert_eq!(Command::parse("search").unwrap(), Some(Command::Search(String::new())));
        assert_eq!(
            Command::parse("search walk the").unwrap(),
            Some(Command::Search("walk the".to_string()))
        );
    }

    #[test]
    fn test_search_keeps_spacing() {
        assert_eq!(
            Command::parse("search a   b").unwrap(),
            Some(Command::Search("a   b".to_string()))
        );
        assert_eq!(
            Command::parse(r#"search "  lead""#).unwrap(),
            Some(Command::Search("  lead".to_string()))
        );
        assert_eq!(
            Command::parse(r#"search say "hi" now"#).unwrap(),
            Some(Command::Search(r#"say "hi" now"#.to_string()))
        );

        let mut shell = shell();
        let out = run(&mut shell, "add \"Buy  milk\" 2024-01-01\nadd \"Buy milk\" 2024-01-01\nsearch y  m\n");
        assert!(out.contains("Buy  milk  (due 2024-01-01)  t-1"));
        assert!(!out.contains(")  t-2"));
    }

    #[test]
    fn test_move_out_of_range_is_an_error_in_both_modes() {
        for mode in [ReorderMode::Splice, ReorderMode::VisibleOnly] {
            let mut shell = shell_with_mode(mode);
            let out = run(
                &mut shell,
                "add A 2024-01-01\nadd B 2024-01-01\nstatus t-2 completed\nfilter pending\nmove 9 1\nmove 1 5\n",
            );

            assert_eq!(out.matches("Error: No item at position 9").count(), 1);
            assert_eq!(out.matches("Error: No item at position 5").count(), 1);
            assert_eq!(shell.board().store().len(), 2);
        }

        let mut shell = shell();
        let out = run(&mut shell, "add A 2024-01-01\nmove 5 1\n");
        assert!(out.contains("Error: No item at position 5"));
        assert_eq!(shell.board().store().len(), 1);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("frobnicate").is_err());
        assert!(Command::parse("add only-title").is_err());
        assert!(Command::parse("move 0 1").is_err());
        assert!(Command::parse("move x").is_err());
        assert!(Command::parse("status t-1 blocked").is_err());
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let mut shell = shell();
        let out = run(&mut shell, "add \"\" 2024-01-01\nadd Valid 2024-01-02\n");

        assert!(out.contains("Error: Task title is required"));
        assert!(out.contains("Added t-2"));
        assert_eq!(shell.board().store().len(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut shell = shell();
        run(&mut shell, "add A 2024-01-01\nquit\nadd B 2024-01-01\n");
        assert_eq!(shell.board().store().len(), 1);
    }

    #[test]
    fn test_edit_status_delete_notices() {
        let mut shell = shell();
        let out = run(
            &mut shell,
            "add \"Buy milk\" 2024-01-01\n\
             edit t-1 \"Buy oat milk\" 2024-01-05 in-progress \"two cartons\"\n\
             status t-1 completed\n\
             show t-1\n\
             delete t-1\n\
             list\n",
        );

        assert_eq!(out.matches("Task updated successfully!").count(), 2);
        assert!(out.contains("Buy oat milk\n"));
        assert!(out.contains("  status: [Completed]\n"));
        assert!(out.contains("  due 2024-01-05\n"));
        assert!(out.contains("Task deleted!"));
        assert!(out.ends_with("No Items\n"));
    }

    #[test]
    fn test_move_without_destination() {
        let mut shell = shell();
        let out = run(&mut shell, "add A 2024-01-01\nadd B 2024-01-01\nmove 1\n");
        assert!(out.contains("Nothing moved"));

        let titles: Vec<&str> = shell.board().store().tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_dump_is_json() {
        let mut shell = shell();
        let out = run(&mut shell, "add A 2024-03-04\ndump\n");
        let json_start = out.find('[').unwrap();
        let value: serde_json::Value = serde_json::from_str(&out[json_start..]).unwrap();
        assert_eq!(value[0]["dueDate"], "2024-03-04");
        assert_eq!(value[0]["status"], "Pending");
    }
}

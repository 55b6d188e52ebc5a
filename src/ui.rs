use std::io::{self, Write};
use std::process;

use chrono::Local;
use crossterm::{
    cursor::MoveUp,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::{Print, Stylize},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

use crate::menu::{Action, Prompter};
use crate::task::{Status, Task, TaskFields};

/// The real terminal: arrow-key menus in raw mode, line prompts in
/// cooked mode.
#[derive(Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }

    fn input(&mut self, label: &str, default: &str) -> io::Result<String> {
        let mut out = io::stdout();
        if default.is_empty() {
            write!(out, "{label}: ")?;
        } else {
            write!(out, "{label} [{}]: ", default.dim())?;
        }
        out.flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        let value = line.trim();
        Ok(if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        })
    }
}

impl Prompter for Console {
    fn choose_action(&mut self) -> io::Result<Action> {
        println!();
        let items: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
        let index = select("What do you want to do?", &items)?;
        Ok(Action::ALL[index])
    }

    fn choose_task(&mut self, verb: &str, tasks: &[Task]) -> io::Result<usize> {
        let items: Vec<String> = tasks
            .iter()
            .map(|t| format!("[{}] {} - {}", t.status, t.project_name, t.task_name))
            .collect();
        select(&format!("Choose a task to {verb}:"), &items)
    }

    fn choose_status(&mut self) -> io::Result<Status> {
        let items: Vec<String> = Status::ALL
            .iter()
            .map(|s| format!("{} {}", status_marker(*s), s))
            .collect();
        let index = select("Select the new status:", &items)?;
        Ok(Status::ALL[index])
    }

    fn collect_fields(&mut self, current: Option<&Task>) -> io::Result<TaskFields> {
        let date_default = current
            .map(|t| t.date.clone())
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
        Ok(TaskFields {
            date: Some(self.input("Date (e.g. 2025-05-10)", &date_default)?),
            project_name: Some(
                self.input("Project name", current.map_or("", |t| t.project_name.as_str()))?,
            ),
            task_name: Some(self.input("Task name", current.map_or("", |t| t.task_name.as_str()))?),
            tl_name: Some(self.input("TL name", current.map_or("", |t| t.tl_name.as_str()))?),
            start_time: Some(
                self.input("Start time (e.g. 10:00 AM)", current.map_or("", |t| t.start_time.as_str()))?,
            ),
            end_time: Some(
                self.input("End time (e.g. 5:00 PM)", current.map_or("", |t| t.end_time.as_str()))?,
            ),
        })
    }

    fn show_tasks(&mut self, tasks: &[Task]) {
        println!();
        println!("{}", "Your task list:".bold());
        if tasks.is_empty() {
            println!("  (no tasks)");
            return;
        }
        for (i, task) in tasks.iter().enumerate() {
            println!();
            println!(
                "{}. {} - {}",
                i + 1,
                task.project_name.as_str().cyan(),
                task.task_name.as_str().bold()
            );
            println!("   Date: {}   TL: {}", task.date, task.tl_name);
            println!("   Time: {} -> {}", task.start_time, task.end_time);
            println!("   Status: {}", status_line(task.status));
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}

fn status_marker(status: Status) -> &'static str {
    match status {
        Status::Pending => "[ ]",
        Status::Working => "[~]",
        Status::Complete => "[x]",
    }
}

fn status_line(status: Status) -> impl std::fmt::Display {
    let text = format!("{} {}", status_marker(status), status);
    match status {
        Status::Pending => text.yellow(),
        Status::Working => text.blue(),
        Status::Complete => text.green(),
    }
}

/// Arrow-key list selection. Draws the items below `title`, highlights
/// the current row, and collapses to the chosen entry on Enter. Esc or
/// Ctrl-C restores the terminal and exits with 130.
fn select(title: &str, items: &[String]) -> io::Result<usize> {
    let mut out = io::stdout();
    println!("{}", title.bold());

    enable_raw_mode()?;
    let picked = select_loop(&mut out, items);
    disable_raw_mode()?;

    match picked? {
        Some(index) => {
            println!("{} {}", "»".cyan(), items[index]);
            Ok(index)
        }
        None => {
            println!("^C");
            process::exit(130);
        }
    }
}

fn select_loop(out: &mut impl Write, items: &[String]) -> io::Result<Option<usize>> {
    let mut selected = 0usize;
    loop {
        for (i, item) in items.iter().enumerate() {
            if i == selected {
                queue!(out, Print(format!("› {item}").cyan()), Print("\r\n"))?;
            } else {
                queue!(out, Print(format!("  {item}")), Print("\r\n"))?;
            }
        }
        out.flush()?;

        let key = loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => break key,
                _ => {}
            }
        };

        queue!(out, MoveUp(items.len() as u16), Clear(ClearType::FromCursorDown))?;
        out.flush()?;

        match key.code {
            KeyCode::Up => selected = selected.saturating_sub(1),
            KeyCode::Down => {
                if selected + 1 < items.len() {
                    selected += 1;
                }
            }
            KeyCode::Enter => return Ok(Some(selected)),
            KeyCode::Esc => return Ok(None),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None)
            }
            _ => {}
        }
    }
}

//! Interactive menu shell
//!
//! A blocking read-evaluate loop over the shared in-memory store: the
//! menu runs with the terminal in raw mode so arrow keys move the
//! selection, then drops back to cooked mode for line-based prompts
//! while an action runs. One store instance lives for the whole
//! session; errors are rendered and the loop continues, only an
//! explicit exit ends it.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::{MoveToNextLine, MoveToPreviousLine};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};

use super::output::Output;
use crate::domain::{Task, TaskError, TaskId};
use crate::ops;
use crate::store::MemoryStore;

const MENU_OPTIONS: [&str; 6] = [
    "Add Task",
    "List Tasks",
    "Update Task",
    "Complete/Uncomplete Task",
    "Delete Task",
    "Exit",
];

/// Index of the Exit option
const EXIT: usize = MENU_OPTIONS.len() - 1;

/// Header + rule + options + rule
const MENU_HEIGHT: u16 = 3 + MENU_OPTIONS.len() as u16;

const RULE: &str = "==================================================";

/// Runs the interactive session until the user exits.
pub fn run(output: &Output) -> Result<()> {
    output.verbose_ctx("menu", "Starting interactive session");
    let mut menu = Menu::new();

    loop {
        let choice = menu.select()?;
        if !menu.dispatch(choice)? {
            println!("\nGoodbye!\n");
            return Ok(());
        }
    }
}

/// Interactive application state
struct Menu {
    /// The session's task store; shared by every menu action
    store: MemoryStore,

    /// Currently highlighted menu option
    selected: usize,
}

impl Menu {
    fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            selected: 0,
        }
    }

    /// Shows the menu and blocks until an option is chosen.
    fn select(&mut self) -> Result<usize> {
        let mut stdout = io::stdout();
        self.draw(&mut stdout)?;

        enable_raw_mode()?;
        let choice = self.read_choice(&mut stdout);
        // Restore cooked mode before propagating any error
        disable_raw_mode()?;

        let choice = choice?;
        self.selected = choice;
        Ok(choice)
    }

    fn read_choice(&mut self, stdout: &mut io::Stdout) -> Result<usize> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.selected = if self.selected == 0 {
                            EXIT
                        } else {
                            self.selected - 1
                        };
                        self.redraw(stdout)?;
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.selected = if self.selected == EXIT {
                            0
                        } else {
                            self.selected + 1
                        };
                        self.redraw(stdout)?;
                    }
                    KeyCode::Enter => return Ok(self.selected),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(EXIT),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(EXIT)
                    }
                    _ => {}
                }
            }
        }
    }

    fn draw(&self, stdout: &mut io::Stdout) -> Result<()> {
        queue!(
            stdout,
            Print("Slate - Use Up/Down to navigate, Enter to select, q to exit"),
            MoveToNextLine(1),
            Print(RULE),
            MoveToNextLine(1),
        )?;
        for (i, option) in MENU_OPTIONS.iter().enumerate() {
            let line = if i == self.selected {
                format!("> {option} <")
            } else {
                format!("  {option}")
            };
            queue!(stdout, Print(line), MoveToNextLine(1))?;
        }
        queue!(stdout, Print(RULE), MoveToNextLine(1))?;
        stdout.flush()?;
        Ok(())
    }

    fn redraw(&self, stdout: &mut io::Stdout) -> Result<()> {
        queue!(
            stdout,
            MoveToPreviousLine(MENU_HEIGHT),
            Clear(ClearType::FromCursorDown)
        )?;
        self.draw(stdout)
    }

    /// Runs the chosen action. Returns `false` when the session should
    /// end. Action errors are rendered here, never propagated: nothing
    /// short of an explicit exit may terminate the loop.
    fn dispatch(&mut self, choice: usize) -> Result<bool> {
        let outcome = match choice {
            0 => self.add_flow(),
            1 => self.list_flow(),
            2 => self.update_flow(),
            3 => self.toggle_flow(),
            4 => self.delete_flow(),
            _ => return Ok(false),
        };
        if let Err(err) = outcome {
            println!("\nError: {err}\n");
        }
        prompt("Press Enter to continue...")?;
        Ok(true)
    }

    fn add_flow(&mut self) -> Result<()> {
        let description = prompt("Enter task description: ")?;
        match ops::add_task(&mut self.store, &description) {
            Ok(task) => println!("\n✓ Task {} added: {}\n", task.id, task.description),
            Err(TaskError::Validation(message)) => println!("\n✗ {message}\n"),
            Err(err) => println!("\n✗ Unexpected error: {err}\n"),
        }
        Ok(())
    }

    fn list_flow(&mut self) -> Result<()> {
        println!("\n{RULE}");
        println!("Tasks:");
        println!("{RULE}");
        println!("{}", self.tasks_display());
        println!("{RULE}\n");
        Ok(())
    }

    fn update_flow(&mut self) -> Result<()> {
        if !self.show_tasks_or_notice("No tasks found to update.") {
            return Ok(());
        }
        let Some(id) = prompt_id("Enter task ID to update: ")? else {
            return Ok(());
        };
        let description = prompt("Enter new description: ")?;
        match ops::update_task(&mut self.store, id, &description) {
            Ok(task) => println!("\n✓ Task {} updated: {}\n", task.id, task.description),
            Err(TaskError::Validation(message)) => println!("\n✗ {message}\n"),
            Err(err @ TaskError::NotFound(_)) => println!("\n✗ Error: {err}\n"),
            Err(err) => println!("\n✗ Unexpected error: {err}\n"),
        }
        Ok(())
    }

    fn toggle_flow(&mut self) -> Result<()> {
        if !self.show_tasks_or_notice("No tasks found.") {
            return Ok(());
        }
        let Some(id) = prompt_id("Enter task ID to toggle completion: ")? else {
            return Ok(());
        };
        match ops::toggle_task(&mut self.store, id) {
            Ok(task) => {
                let status = if task.completed { "completed" } else { "incomplete" };
                println!(
                    "\n✓ Task {} marked as {}: {}\n",
                    task.id, status, task.description
                );
            }
            Err(err @ TaskError::NotFound(_)) => println!("\n✗ Error: {err}\n"),
            Err(err) => println!("\n✗ Unexpected error: {err}\n"),
        }
        Ok(())
    }

    fn delete_flow(&mut self) -> Result<()> {
        if !self.show_tasks_or_notice("No tasks found to delete.") {
            return Ok(());
        }
        let Some(id) = prompt_id("Enter task ID to delete: ")? else {
            return Ok(());
        };
        match ops::delete_task(&mut self.store, id) {
            Ok(()) => println!("\n✓ Task {id} deleted\n"),
            Err(err @ TaskError::NotFound(_)) => println!("\n✗ Error: {err}\n"),
            Err(err) => println!("\n✗ Unexpected error: {err}\n"),
        }
        Ok(())
    }

    /// Prints the current task list ahead of an id prompt; reports the
    /// notice and skips the action when the store is empty.
    fn show_tasks_or_notice(&self, notice: &str) -> bool {
        if ops::view_tasks(&self.store).is_empty() {
            println!("\n✗ {notice}\n");
            return false;
        }
        println!("\nCurrent tasks:");
        println!("{}", self.tasks_display());
        println!();
        true
    }

    fn tasks_display(&self) -> String {
        let tasks = ops::view_tasks(&self.store);
        if tasks.is_empty() {
            return "No tasks found.".to_string();
        }
        tasks.iter().map(Task::render).collect::<Vec<_>>().join("\n")
    }
}

/// Prints a prompt and reads one line from stdin.
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompts for a task id; a line that does not parse is reported and
/// returns `None` so the caller drops back to the menu.
fn prompt_id(message: &str) -> Result<Option<TaskId>> {
    let line = prompt(message)?;
    match line.parse::<TaskId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("\n✗ Error: Invalid task ID\n");
            Ok(None)
        }
    }
}

//! Main CLI application structure

use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use super::menu;
use super::output::{Output, OutputFormat};
use crate::domain::TaskId;
use crate::ops;
use crate::store::MemoryStore;

#[derive(Parser)]
#[command(name = "slate")]
#[command(author, version, about = "A minimal in-memory task list for the terminal")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Command to run; omit it for the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },

    /// List all tasks
    List,

    /// Update a task description
    Update {
        /// Task ID
        id: TaskId,

        /// New task description
        description: String,
    },

    /// Toggle a task between complete and incomplete
    Complete {
        /// Task ID
        id: TaskId,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                // Usage errors exit 1, not clap's default 2
                _ => process::exit(1),
            }
        }
    };

    let output = Output::new(cli.format, cli.verbose);

    let Some(command) = cli.command else {
        // Flags alone don't select a command; treat that as a usage error
        if std::env::args_os().len() > 1 {
            Cli::command().print_help()?;
            process::exit(1);
        }
        output.verbose("No command given, entering interactive menu");
        return menu::run(&output);
    };

    // One-shot mode works against a store that lives for this
    // invocation only; nothing persists across runs.
    let mut store = MemoryStore::new();
    dispatch(command, &mut store, &output)
}

fn dispatch(command: Commands, store: &mut MemoryStore, output: &Output) -> Result<()> {
    match command {
        Commands::Add { description } => {
            output.verbose_ctx("add", &format!("Adding task: {}", description));
            let task = ops::add_task(store, &description)?;
            if output.is_json() {
                output.data(&task);
            } else {
                output.success(&format!("Task {} added: {}", task.id, task.description));
            }
        }

        Commands::List => {
            let tasks = ops::view_tasks(store);
            output.verbose_ctx("list", &format!("Listing {} task(s)", tasks.len()));
            if output.is_json() {
                output.data(&tasks);
            } else if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                for task in &tasks {
                    println!("{}", task.render());
                }
            }
        }

        Commands::Update { id, description } => {
            output.verbose_ctx("update", &format!("Updating task {}", id));
            let task = ops::update_task(store, id, &description)?;
            if output.is_json() {
                output.data(&task);
            } else {
                output.success(&format!("Task {} updated: {}", task.id, task.description));
            }
        }

        Commands::Complete { id } => {
            output.verbose_ctx("complete", &format!("Toggling task {}", id));
            let task = ops::toggle_task(store, id)?;
            if output.is_json() {
                output.data(&task);
            } else {
                let status = if task.completed { "completed" } else { "incomplete" };
                output.success(&format!(
                    "Task {} marked as {}: {}",
                    task.id, status, task.description
                ));
            }
        }

        Commands::Delete { id } => {
            output.verbose_ctx("delete", &format!("Deleting task {}", id));
            ops::delete_task(store, id)?;
            if output.is_json() {
                output.data(&serde_json::json!({ "deleted": id }));
            } else {
                output.success(&format!("Task {} deleted", id));
            }
        }
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numlab::report::render;
use numlab::tasks::SolveTask;
use numlab::ui::cli::drivers::InquireDriver;
use numlab::ui::cli::wizard::prompt_choice;
use numlab::ui::types::build::build_task;
use numlab::ui::types::choices::{TaskChoice, UIChoice};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Numerical methods workbench", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build a task interactively and run it (default)
    Wizard,

    /// Run a task described by a JSON file
    Run { path: PathBuf },

    /// Print the JSON Schema accepted by `run`
    Schema,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Wizard) {
        Command::Wizard => {
            let choice: TaskChoice = prompt_choice(&InquireDriver)?;
            execute(choice)?;
        }
        Command::Run { path } => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let choice: TaskChoice = serde_json::from_str(&raw)
                .with_context(|| format!("parsing task in {}", path.display()))?;
            execute(choice)?;
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&TaskChoice::schema())?);
        }
    }
    Ok(())
}

fn execute(choice: TaskChoice) -> Result<()> {
    let task: SolveTask = build_task(choice).context("building task")?;
    let outcome = task.run().context("running task")?;
    println!("{}", render(&outcome, task.format()));
    if let (Some(path), Some(_)) = (task.export_path(), &outcome.table) {
        println!("Table written to {}", path.display());
    }
    Ok(())
}

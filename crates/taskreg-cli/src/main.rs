//! TaskReg CLI - Command line interface for the TaskReg server.

mod client;
mod error;

use clap::{Parser, Subcommand};

use taskreg_core::{Execution, NewTask, Task};

use client::TaskregClient;

/// TaskReg CLI - task registry management tool
#[derive(Parser)]
#[command(name = "taskreg")]
#[command(about = "CLI for the TaskReg task registry", long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(short, long, env = "TASKREG_ADDR", default_value = "http://127.0.0.1:8080")]
    addr: String,

    /// Print raw JSON documents instead of a summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new task
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Owner attribution
        #[arg(short, long, default_value = "")]
        owner: String,

        /// Shell command to store
        #[arg(short, long)]
        command: String,
    },

    /// Show one task
    Get {
        /// Task ID
        id: String,
    },

    /// List all tasks
    List,

    /// Find tasks by name fragment (case-insensitive)
    Find {
        /// Name fragment
        name: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },

    /// Run a task's command on the server
    Execute {
        /// Task ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = TaskregClient::new(&cli.addr);

    match cli.command {
        Commands::Create {
            name,
            owner,
            command,
        } => {
            let task = client.create(&NewTask::new(name, owner, command)).await?;
            println!("Task created:");
            show_task(&task, cli.json)?;
        }
        Commands::Get { id } => {
            let task = client.get(&id).await?;
            show_task(&task, cli.json)?;
        }
        Commands::List => {
            let tasks = client.list().await?;
            show_tasks(&tasks, cli.json)?;
        }
        Commands::Find { name } => {
            let tasks = client.find(&name).await?;
            if tasks.is_empty() && !cli.json {
                println!("No tasks match '{}'", name);
            } else {
                show_tasks(&tasks, cli.json)?;
            }
        }
        Commands::Delete { id } => {
            client.delete(&id).await?;
            println!("Task {} deleted", id);
        }
        Commands::Execute { id } => {
            let task = client.execute(&id).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&task)?);
            } else if let Some(execution) = task.latest_execution() {
                print!("{}", render_execution(execution));
            }
        }
    }

    Ok(())
}

fn show_task(task: &Task, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        print!("{}", render_task(task));
    }
    Ok(())
}

fn show_tasks(tasks: &[Task], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(tasks)?);
        return Ok(());
    }

    println!("Tasks ({}):", tasks.len());
    println!("{:<36}  {:<20}  {:<12}  {:>5}  {}", "ID", "NAME", "OWNER", "RUNS", "COMMAND");
    println!("{}", "-".repeat(100));

    for task in tasks {
        println!(
            "{:<36}  {:<20}  {:<12}  {:>5}  {}",
            task.id(),
            task.name,
            task.owner,
            task.executions().len(),
            task.command
        );
    }
    Ok(())
}

fn render_task(task: &Task) -> String {
    let mut out = String::new();
    out.push_str(&format!("  ID:         {}\n", task.id()));
    out.push_str(&format!("  Name:       {}\n", task.name));
    out.push_str(&format!("  Owner:      {}\n", task.owner));
    out.push_str(&format!("  Command:    {}\n", task.command));

    if !task.executions().is_empty() {
        out.push_str("  Executions:\n");
        for execution in task.executions() {
            out.push_str(&format!(
                "    - {} ({} ms)\n",
                format_timestamp(execution),
                execution.duration().num_milliseconds()
            ));
        }
    }
    out
}

fn render_execution(execution: &Execution) -> String {
    format!(
        "Started:  {}\nDuration: {} ms\n\n{}\n",
        format_timestamp(execution),
        execution.duration().num_milliseconds(),
        execution.output()
    )
}

fn format_timestamp(execution: &Execution) -> String {
    execution.start_time().format("%Y-%m-%d %H:%M:%S").to_string()
}

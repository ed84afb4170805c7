//! Taskstore - Main Entry Point
//!
//! Interactive command loop over a [`TaskStore`]. The collection lives in
//! memory for the duration of the session; commands can also be fed from a
//! script file given as the positional argument, which is handy for demos
//! and smoke tests.

use anyhow::{Result, bail};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use taskstore::{TaskStore, formatting, validation};

/// Taskstore - priority task tracking with an AVL index and a max-heap queue
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional script file of commands to run instead of reading stdin
    script: Option<PathBuf>,
}

const HELP: &str = "\
Commands:
  add <priority> <due-date> <description>   add a task (priority: low|medium|high, date: YYYY-MM-DD)
  done                                      complete the highest-priority task
  delete <id>                               delete a task by id
  find <id>                                 show a task by id
  next                                      show the highest-priority task
  list                                      list tasks by id
  queue                                     show the heap array
  stats                                     per-priority counts
  tree                                      index traversals and shape
  log [n]                                   recent index operations (default 10)
  export                                    dump tasks as TOML
  clear                                     remove all tasks
  help                                      show this help
  quit                                      exit";

fn main() -> Result<()> {
    let args = Args::parse();
    let mut store = TaskStore::new();

    match args.script {
        Some(path) => {
            let script = std::fs::read_to_string(&path)?;
            for line in script.lines() {
                if !run_line(&mut store, line) {
                    break;
                }
            }
        }
        None => {
            println!("taskstore - type 'help' for commands");
            let stdin = io::stdin();
            loop {
                print!("> ");
                io::stdout().flush()?;
                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                if !run_line(&mut store, &line) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Execute one command line; returns false when the session should end
fn run_line(store: &mut TaskStore, line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return true;
    }
    if line == "quit" || line == "exit" {
        return false;
    }
    if let Err(error) = run_command(store, line) {
        eprintln!("error: {}", error);
    }
    true
}

fn run_command(store: &mut TaskStore, line: &str) -> Result<()> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or_default().trim();

    match command {
        "add" => {
            let mut fields = rest.splitn(3, char::is_whitespace);
            let (Some(priority), Some(due_date), Some(description)) =
                (fields.next(), fields.next(), fields.next())
            else {
                bail!("usage: add <priority> <due-date> <description>");
            };
            let priority = validation::parse_priority(priority)?;
            let due_date = validation::parse_due_date(due_date)?;
            let description = validation::validate_description(description)?;
            let task = store.add(description, priority, due_date)?;
            println!("Added {}", task);
        }
        "done" => match store.complete_highest_priority() {
            Some(task) => println!("Completed {}", task),
            None => println!("No tasks to complete"),
        },
        "delete" => {
            let id = parse_id(rest)?;
            if store.delete_by_id(id) {
                println!("Deleted task #{}", id);
            } else {
                println!("No task with id #{}", id);
            }
        }
        "find" => {
            let id = parse_id(rest)?;
            match store.find_by_id(id) {
                Some(task) => println!("{}", task),
                None => println!("No task with id #{}", id),
            }
        }
        "next" => match store.peek_highest_priority() {
            Some(task) => println!("{}", task),
            None => println!("No tasks"),
        },
        "list" => print!("{}", formatting::format_task_list(&store.tasks_by_id())),
        "queue" => print!("{}", formatting::format_heap_snapshot(&store.heap_snapshot())),
        "stats" => print!("{}", formatting::format_statistics(&store.statistics())),
        "tree" => {
            print!("{}", formatting::format_tree_stats(&store.tree_stats()));
            print!("{}", formatting::format_traversals(&store.traversals()));
        }
        "log" => {
            let count = if rest.is_empty() { 10 } else { parse_count(rest)? };
            print!(
                "{}",
                formatting::format_operations(&store.recent_tree_operations(count))
            );
        }
        "export" => print!("{}", formatting::export_toml(&store.tasks_by_id())?),
        "clear" => {
            store.clear();
            println!("All tasks removed");
        }
        "help" => println!("{}", HELP),
        _ => bail!("Unknown command '{}'. Type 'help' for commands", command),
    }
    Ok(())
}

fn parse_id(text: &str) -> Result<u32> {
    let text = text.trim_start_matches('#');
    match text.parse() {
        Ok(id) => Ok(id),
        Err(_) => bail!("Expected a numeric task id, got '{}'", text),
    }
}

fn parse_count(text: &str) -> Result<usize> {
    match text.parse() {
        Ok(count) => Ok(count),
        Err(_) => bail!("Expected a count, got '{}'", text),
    }
}

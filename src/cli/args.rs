use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "A line-oriented task tracker for your terminal")]
#[command(long_about = "taskline - a line-oriented task tracker

Reads one command per line, keeps an ordered list of todos, deadlines and
events in memory, and echoes a framed confirmation for every action. Run it
with no arguments to start a session, interactively or over piped input.

SESSION COMMANDS:
  todo <name>                       Add a todo
  deadline <name> /by <date>        Add a deadline (date is YYYY-MM-DD)
  event <name> /at <date> <range>   Add an event (e.g. /at 2019-10-15 2pm-4pm)
  list                              Show every task with its number
  mark <n> / unmark <n>             Set task n done or not done
  priority <n> <level>              Set priority (none, low, medium, high)
  bye                               End the session

A mistyped command never ends the session; taskline reports the problem and
reads the next line.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Path to an alternate config file
    ///
    /// Defaults to ~/.taskline/config.yaml. A missing file means default
    /// settings.
    #[arg(short, long, value_name = "FILE", env = "TASKLINE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   taskline completions bash
    ///   taskline completions zsh > ~/.zsh/completions/_taskline
    Completions {
        /// Target shell (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

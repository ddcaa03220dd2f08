use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chore", about = concat!("chore v", env!("CARGO_PKG_VERSION"), " - a categorized task list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the stored task and category lists
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep everything in memory: nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks, optionally only those in one category
    List(ListArgs),
    /// Add a task
    Add(AddArgs),
    /// Flip a task between done and not done
    Toggle(IdArgs),
    /// Permanently delete a task
    Rm(IdArgs),
    /// List categories
    Categories,
    /// Add or delete a category
    Category(CategoryCmd),
    /// Show the choices of the category filter
    Filters,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show tasks in this category
    #[arg(long, short)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    pub task: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: String,
    /// Category (default: the first category)
    #[arg(long, short)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task id or unique id prefix
    pub id: String,
}

#[derive(Args)]
pub struct CategoryCmd {
    #[command(subcommand)]
    pub action: CategoryAction,
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Add a category
    Add {
        /// Category name (surrounding whitespace is trimmed)
        name: String,
    },
    /// Delete a category; its tasks move to the fallback category
    Rm {
        /// Category name
        name: String,
    },
}

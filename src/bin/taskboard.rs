//! Command-line front-end for the task board.
//!
//! Usage:
//!
//! ```text
//! taskboard [--data-dir DIR] [--key KEY] <command>
//! ```
//!
//! Commands: `add`, `list`, `move`, `clear`, `stats`. The board is kept in
//! `<data-dir>/<key>.json`; both default from `TASKBOARD_DATA_DIR` and
//! `TASKBOARD_KEY`. Set `RUST_LOG` to see what the board does.

use std::io::{self, Write};
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use taskboard::board::{
    adapters::file::FileBlobStore,
    domain::{Column, ColumnId, Priority, TaskId},
    ports::BlobStoreError,
    services::{
        BoardError, BoardService, DropResult, NewTaskRequest, PriorityFilter, ProjectionFilter,
    },
};
use taskboard::config::{BoardConfig, DEFAULT_DATA_DIR, DEFAULT_STORAGE_KEY};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Board = BoardService<FileBlobStore, DefaultClock>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
enum CliError {
    #[error("failed to open board storage: {0}")]
    Storage(#[from] BlobStoreError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("no task with id '{0}'")]
    UnknownTask(TaskId),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "A single-user task board")]
struct Cli {
    /// Directory holding the board file.
    #[arg(long, env = "TASKBOARD_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: Utf8PathBuf,

    /// Storage key of the board.
    #[arg(long, env = "TASKBOARD_KEY", default_value = DEFAULT_STORAGE_KEY)]
    key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a task at the end of a column.
    Add {
        /// Column to add the task to.
        column: ColumnId,
        /// Task title.
        title: String,
        /// Optional task description.
        #[arg(long, short)]
        description: Option<String>,
        /// Task priority.
        #[arg(long, short, default_value_t = Priority::Medium)]
        priority: Priority,
    },
    /// Show every column with its visible tasks.
    List {
        /// Only show tasks whose title or description contains this text.
        #[arg(long, short, default_value = "")]
        search: String,
        /// Only show tasks with this priority (`all` for every priority).
        #[arg(long, short, default_value_t = PriorityFilter::All)]
        priority: PriorityFilter,
    },
    /// Drag a task into a column, optionally before a given position.
    Move {
        /// Identifier of the task to move.
        task: String,
        /// Destination column.
        column: ColumnId,
        /// Insertion index in the destination column; defaults to the end.
        #[arg(long, short)]
        index: Option<usize>,
    },
    /// Remove every task.
    Clear,
    /// Show board statistics.
    Stats,
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BoardConfig::default()
        .with_data_dir(cli.data_dir)
        .with_storage_key(cli.key);
    run(&config, cli.command).map_err(Into::into)
}

fn run(config: &BoardConfig, command: Command) -> Result<(), CliError> {
    let blobs = Arc::new(FileBlobStore::open(config.data_dir())?);
    debug!(dir = %blobs.root(), key = config.storage_key(), "opened board storage");
    let mut board = Board::open(blobs, config, Arc::new(DefaultClock))?;
    let mut out = io::stdout().lock();

    match command {
        Command::Add {
            column,
            title,
            description,
            priority,
        } => {
            let mut request = NewTaskRequest::new(title).with_priority(priority);
            if let Some(text) = description {
                request = request.with_description(text);
            }
            let task = board.add_task(column, request)?;
            writeln!(out, "{}", task.id())?;
        }
        Command::List { search, priority } => {
            let filter = ProjectionFilter::new()
                .with_search(search)
                .with_priority(priority);
            write_columns(&mut out, &board, &filter)?;
        }
        Command::Move {
            task,
            column,
            index,
        } => move_task(&mut out, &mut board, TaskId::new(task), column, index)?,
        Command::Clear => {
            board.clear_all()?;
            writeln!(out, "board cleared")?;
        }
        Command::Stats => {
            let stats = board.stats();
            writeln!(out, "total:       {}", stats.total)?;
            writeln!(out, "completed:   {}", stats.completed)?;
            writeln!(out, "in progress: {}", stats.in_progress)?;
            writeln!(out, "complete:    {}%", stats.completion_rate)?;
        }
    }
    Ok(())
}

fn move_task(
    out: &mut impl Write,
    board: &mut Board,
    task: TaskId,
    column: ColumnId,
    index: Option<usize>,
) -> Result<(), CliError> {
    if board.task(&task).is_none() {
        return Err(CliError::UnknownTask(task));
    }
    let filter = ProjectionFilter::new();
    board.begin_drag(task);
    if let Some(position) = index {
        board.hover(column, position, &filter);
    }
    match board.drop_on(column, &filter)? {
        DropResult::Moved {
            task: moved,
            column: target,
            order,
        } => writeln!(out, "{moved} -> {target} #{order}")?,
        DropResult::Stale(missing) => return Err(CliError::UnknownTask(missing)),
        DropResult::NotDragging => {}
    }
    Ok(())
}

fn write_columns(
    out: &mut impl Write,
    board: &Board,
    filter: &ProjectionFilter,
) -> Result<(), CliError> {
    for column in Column::catalogue() {
        let tasks = board.column(column.id(), filter);
        writeln!(out, "{} ({})", column.name(), tasks.len())?;
        for task in tasks {
            writeln!(
                out,
                "  {:>2}. [{}] {}  {}",
                task.order(),
                task.priority(),
                task.title(),
                task.id()
            )?;
            if let Some(description) = task.description() {
                writeln!(out, "      {description}")?;
            }
        }
    }
    Ok(())
}

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use pages::edit::{self, BlockMarker};
use pages::{Board, BoardError, BoardsData, ConfigError, GroupId, LayoutConfig, LayoutError, Page, Point, Viewport};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("no board `{0}` in data file")]
    UnknownBoard(String),
    #[error("no markdown source for group `{0}`")]
    NoSource(GroupId),
}

#[derive(Parser, Debug)]
#[command(name = "tenshin-cli", about = "Compile Markdown into whiteboard pages")]
struct Cli {
    /// JSON layout config; `PAGE_*` variables are applied on top.
    #[arg(long, env = "PAGE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a document and print its primitives.
    Compile(CompileArgs),
    /// Normalize block marker spacing.
    Sanitize(InputArgs),
    /// Turn the line under a cursor into a block.
    Block(BlockArgs),
    /// Manage pages stored in a board data file.
    Board(BoardCommand),
}

#[derive(Args, Debug)]
struct InputArgs {
    #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
    input: String,
}

#[derive(Args, Debug)]
struct CompileArgs {
    #[command(flatten)]
    input: InputArgs,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    cx: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    cy: f64,
}

#[derive(Args, Debug)]
struct BlockArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Byte offset of the cursor.
    #[arg(long)]
    cursor: usize,

    /// `#`, `>`, `>>`, `---`, `para`, or the block name.
    #[arg(long)]
    marker: BlockMarker,
}

#[derive(Args, Debug, Clone, Copy)]
struct ViewportArgs {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    scroll_x: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    scroll_y: f64,

    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    #[arg(long, default_value_t = 800.0)]
    height: f64,

    #[arg(long, default_value_t = 1.0)]
    zoom: f64,
}

impl ViewportArgs {
    fn viewport(self) -> Viewport {
        Viewport::new(self.scroll_x, self.scroll_y, self.width, self.height, self.zoom)
    }
}

#[derive(Args, Debug)]
struct BoardCommand {
    /// Board data file (JSON object keyed by board id).
    #[arg(long, env = "PAGE_BOARD_DATA")]
    data: PathBuf,

    #[arg(long, env = "PAGE_BOARD_ID", default_value = "default")]
    board: String,

    #[command(subcommand)]
    command: BoardSubcommand,
}

#[derive(Subcommand, Debug)]
enum BoardSubcommand {
    /// Compile a document onto the board.
    Commit {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        viewport: ViewportArgs,
    },
    /// Print the stored source of a page.
    Show { group_id: String },
    /// Recompile a page from new source, in place.
    Replace {
        group_id: String,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        viewport: ViewportArgs,
    },
    /// Remove a page and its source.
    Delete { group_id: String },
    /// Drop sources whose page is gone.
    Prune,
    /// List stored pages.
    List,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Compile(args) => run_compile(&config, &args),
        Command::Sanitize(args) => {
            let text = read_input(&args.input)?;
            print!("{}", edit::sanitize(&text));
            Ok(())
        }
        Command::Block(args) => {
            let text = read_input(&args.input.input)?;
            let edit = edit::apply_block(&text, args.cursor, args.marker);
            print_json(&json!({ "text": edit.text, "cursor": edit.cursor }))
        }
        Command::Board(board) => run_board(config, board),
    }
}

fn load_config(path: Option<&Path>) -> Result<LayoutConfig, CliError> {
    let Some(path) = path else {
        return Ok(LayoutConfig::from_env()?);
    };
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.display().to_string(), source })?;
    let config = LayoutConfig::from_json(&raw)?.overlay(pages::config::env_var)?;
    tracing::debug!(path = %path.display(), "layout config loaded");
    Ok(config)
}

fn run_compile(config: &LayoutConfig, args: &CompileArgs) -> Result<(), CliError> {
    let text = read_input(&args.input.input)?;
    let page = pages::compile(&text, Point::new(args.cx, args.cy), config)?;
    print_json(&page_json(&page)?)
}

fn run_board(config: LayoutConfig, cmd: BoardCommand) -> Result<(), CliError> {
    let mut boards = load_boards(&cmd.data)?;

    // Read-only commands need the board to exist; mutations create it.
    let data = match cmd.command {
        BoardSubcommand::Commit { .. } | BoardSubcommand::Replace { .. } => boards.remove(&cmd.board).unwrap_or_default(),
        _ => boards.remove(&cmd.board).ok_or_else(|| CliError::UnknownBoard(cmd.board.clone()))?,
    };
    let mut board = Board::from_data(data, config)?;

    let changed = match cmd.command {
        BoardSubcommand::Commit { input, viewport } => {
            let text = read_input(&input.input)?;
            let page = board.commit_markdown(&text, &viewport.viewport())?;
            print_json(&page_json(&page)?)?;
            true
        }
        BoardSubcommand::Show { group_id } => {
            let id = GroupId::from(group_id);
            let source = board.markdown_source(&id).ok_or_else(|| CliError::NoSource(id.clone()))?;
            println!("{source}");
            false
        }
        BoardSubcommand::Replace { group_id, input, viewport } => {
            let text = read_input(&input.input)?;
            let page = board.replace_markdown(&GroupId::from(group_id), &text, &viewport.viewport())?;
            print_json(&page_json(&page)?)?;
            true
        }
        BoardSubcommand::Delete { group_id } => {
            let removed = board.delete_markdown(&GroupId::from(group_id));
            print_json(&json!({ "elements": removed.elements, "source": removed.source }))?;
            removed.elements > 0 || removed.source.is_some()
        }
        BoardSubcommand::Prune => {
            let dropped = board.prune_registry();
            print_json(&json!({ "pruned": dropped }))?;
            !dropped.is_empty()
        }
        BoardSubcommand::List => {
            let pages: Vec<Value> = board
                .markdown_pages()
                .map(|entry| json!({ "id": entry.id, "elements": board.elements_in(&entry.id).count() }))
                .collect();
            print_json(&Value::Array(pages))?;
            false
        }
    };

    boards.insert(cmd.board, board.into_data());
    if changed {
        save_boards(&cmd.data, &boards)?;
    }
    Ok(())
}

fn page_json(page: &Page) -> Result<Value, CliError> {
    Ok(json!({
        "groupId": page.group_id,
        "elements": serde_json::to_value(&page.primitives)?,
    }))
}

/// Load the board data file. A missing file is an empty set of boards.
fn load_boards(path: &Path) -> Result<BoardsData, CliError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BoardsData::new()),
        Err(source) => Err(CliError::Read { path: path.display().to_string(), source }),
    }
}

fn save_boards(path: &Path, boards: &BoardsData) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(boards)?;
    fs::write(path, rendered).map_err(|source| CliError::Write { path: path.display().to_string(), source })?;
    tracing::info!(path = %path.display(), boards = boards.len(), "board data saved");
    Ok(())
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Read { path: "<stdin>".to_owned(), source })?;
        return Ok(text);
    }
    fs::read_to_string(input).map_err(|source| CliError::Read { path: input.to_owned(), source })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

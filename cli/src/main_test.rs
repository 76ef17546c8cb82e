use clap::CommandFactory;

use super::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tenshin-cli-{}-{name}", uuid::Uuid::new_v4().simple()))
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parses_board_commit_with_viewport() {
    let cli = Cli::try_parse_from([
        "tenshin-cli", "board", "--data", "boards.json", "commit", "--input", "page.md", "--scroll-x", "-100", "--zoom", "2",
    ])
    .unwrap();
    let Command::Board(board) = cli.command else {
        panic!("expected board command");
    };
    assert_eq!(board.board, "default");
    let BoardSubcommand::Commit { input, viewport } = board.command else {
        panic!("expected commit");
    };
    assert_eq!(input.input, "page.md");
    assert_eq!(viewport.viewport().center().unwrap(), Point::new(420.0, 200.0));
}

#[test]
fn parses_block_marker() {
    let cli = Cli::try_parse_from(["tenshin-cli", "block", "--cursor", "3", "--marker", ">>"]).unwrap();
    let Command::Block(args) = cli.command else {
        panic!("expected block command");
    };
    assert_eq!(args.marker, BlockMarker::Memo);
    assert_eq!(args.input.input, "-");
}

#[test]
fn rejects_unknown_marker() {
    assert!(Cli::try_parse_from(["tenshin-cli", "block", "--cursor", "0", "--marker", "h9"]).is_err());
}

#[test]
fn missing_board_file_is_empty() {
    let boards = load_boards(&temp_path("missing.json")).unwrap();
    assert!(boards.is_empty());
}

#[test]
fn boards_survive_save_and_load() {
    let path = temp_path("boards.json");
    let mut board = Board::new(LayoutConfig::default()).unwrap();
    let page = board.commit_at("# Saved\nbody", Point::default()).unwrap();

    let mut boards = BoardsData::new();
    boards.insert("b1".to_owned(), board.into_data());
    save_boards(&path, &boards).unwrap();

    let loaded = load_boards(&path).unwrap();
    fs::remove_file(&path).unwrap();
    let board = Board::from_data(loaded["b1"].clone(), LayoutConfig::default()).unwrap();
    assert_eq!(board.markdown_source(&page.group_id), Some("# Saved\nbody"));
    assert_eq!(board.elements_in(&page.group_id).count(), 3);
}

#[test]
fn page_json_shape() {
    let page = pages::compile("hello", Point::default(), &LayoutConfig::default()).unwrap();
    let value = page_json(&page).unwrap();
    assert_eq!(value["groupId"], page.group_id.as_str());
    assert_eq!(value["elements"][1]["text"], "hello");
}

#[test]
fn config_file_overrides_defaults() {
    let path = temp_path("config.json");
    fs::write(&path, r#"{"basePageWidth": 800, "padding": {"left": 20, "right": 20}}"#).unwrap();
    let config = load_config(Some(&path)).unwrap();
    fs::remove_file(&path).unwrap();
    assert!((config.base_page_width - 800.0).abs() < f64::EPSILON);
    assert!((config.padding.left - 20.0).abs() < f64::EPSILON);
    assert!((config.padding.top - 40.0).abs() < f64::EPSILON);
}

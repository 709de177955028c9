use pegboard::engine::export::to_json;
use pegboard::engine::{instantiate_all, PlacementKind, Position, RecordingSink};
use pegboard::input::level::load;
use pegboard::input::LoadError;
use std::fs::{self, File};
use std::io::Write;

#[test]
fn end_to_end_level_load() {
    let test_file = "test_e2e_board.txt";
    let content = "█ O █\r\nO * O\r\n█ O █";

    let mut file = File::create(test_file).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let level = load(test_file).expect("Should load level successfully");
    assert_eq!(level.matrix.row_count(), 3);
    assert_eq!(level.matrix.column_bound(), 3);

    // 9 floor tiles plus one spawn
    assert_eq!(level.commands.len(), 10);
    assert_eq!(level.commands[0].kind, PlacementKind::FloorObstacle);
    assert_eq!(level.commands[4].kind, PlacementKind::FloorValid);
    assert_eq!(level.commands[4].position, Position::new(1.0, 0.0, -1.0));
    assert_eq!(level.commands[5].kind, PlacementKind::PlayerSpawn);
    assert_eq!(level.commands[5].position, Position::new(0.0, 0.5, 0.0));

    let mut sink = RecordingSink::new();
    instantiate_all(&level.commands, &mut sink).unwrap();
    assert_eq!(sink.commands(), level.commands.as_slice());

    let summary = level.summary();
    assert_eq!(summary.obstacles, 4);
    assert_eq!(summary.valid, 5);
    assert_eq!(summary.spawns, 1);
    assert!(summary.ragged_rows.is_empty());

    let json = to_json(&level.commands).unwrap();
    assert!(json.find("FloorObstacle").unwrap() < json.find("PlayerSpawn").unwrap());

    fs::remove_file(test_file).unwrap();
}

#[test]
fn lf_only_file_is_a_single_row() {
    let test_file = "test_e2e_lf_board.txt";
    let mut file = File::create(test_file).unwrap();
    file.write_all("O O\nO O".as_bytes()).unwrap();

    let level = load(test_file).unwrap();
    assert_eq!(level.matrix.row_count(), 1);
    // "O\nO" is one unrecognized token
    assert_eq!(level.commands.len(), 2);

    fs::remove_file(test_file).unwrap();
}

#[test]
fn missing_level_is_source_unavailable() {
    let result = load("nonexistent_board_12345.txt");
    match result {
        Err(LoadError::SourceUnavailable { path, .. }) => {
            assert_eq!(path.to_str(), Some("nonexistent_board_12345.txt"));
        }
        other => panic!("Expected SourceUnavailable, got {:?}", other.map(|l| l.source)),
    }
}

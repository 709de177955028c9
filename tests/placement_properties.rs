//! Parse and mapping properties of the board format.

use pegboard::engine::{
    map_to_placements, parse, Emission, PlacementCommand, PlacementKind, PlacementMapper,
    Position, RuleTable, TokenMatrix,
};

fn matrix(rows: &[&[&str]]) -> TokenMatrix {
    TokenMatrix::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|t| t.to_string()).collect())
            .collect(),
    )
}

fn at(kind: PlacementKind, x: f32, y: f32, z: f32) -> PlacementCommand {
    PlacementCommand::new(kind, Position::new(x, y, z))
}

#[test]
fn row_count_matches_crlf_rows() {
    for n in 1..=6 {
        let raw = vec!["O █ *"; n].join("\r\n");
        let parsed = parse(&raw);
        assert_eq!(parsed.row_count(), n, "input with {} rows", n);
    }
}

#[test]
fn rows_keep_file_order() {
    let parsed = parse("a\r\nb\r\nc");
    let firsts: Vec<&str> = parsed.rows().iter().map(|r| r[0].as_str()).collect();
    assert_eq!(firsts, vec!["a", "b", "c"]);
}

#[test]
fn tokens_keep_row_order() {
    assert_eq!(parse("a b c").into_rows(), vec![vec!["a", "b", "c"]]);
}

#[test]
fn mapping_twice_is_identical() {
    let m = parse("* O █\r\n? O\r\nO O O");
    assert_eq!(map_to_placements(&m), map_to_placements(&m));
}

#[test]
fn single_cell_rules() {
    assert_eq!(
        map_to_placements(&matrix(&[&["*"]])),
        vec![
            at(PlacementKind::FloorValid, 0.0, 0.0, 0.0),
            at(PlacementKind::PlayerSpawn, 0.0, 0.5, 0.0),
        ]
    );
    assert_eq!(
        map_to_placements(&matrix(&[&["O"]])),
        vec![at(PlacementKind::FloorValid, 0.0, 0.0, 0.0)]
    );
    assert_eq!(
        map_to_placements(&matrix(&[&["█"]])),
        vec![at(PlacementKind::FloorObstacle, 0.0, 0.0, 0.0)]
    );
    assert!(map_to_placements(&matrix(&[&["?"]])).is_empty());
}

#[test]
fn two_by_two_holes_are_row_major() {
    let positions: Vec<Position> = map_to_placements(&matrix(&[&["O", "O"], &["O", "O"]]))
        .into_iter()
        .map(|c| c.position)
        .collect();
    assert_eq!(
        positions,
        vec![
            Position::new(0.0, 0.0, 0.0),
            Position::new(1.0, 0.0, 0.0),
            Position::new(0.0, 0.0, -1.0),
            Position::new(1.0, 0.0, -1.0),
        ]
    );
}

#[test]
fn short_row_does_not_fault() {
    let commands = map_to_placements(&matrix(&[&["O", "O"], &["O"]]));
    assert_eq!(commands.len(), 3);
    assert!(!commands
        .iter()
        .any(|c| c.position == Position::new(1.0, 0.0, -1.0)));
}

#[test]
fn every_peg_spawns_at_origin() {
    let commands = map_to_placements(&parse("* █\r\n█ *"));
    let spawns: Vec<&PlacementCommand> = commands
        .iter()
        .filter(|c| c.kind == PlacementKind::PlayerSpawn)
        .collect();
    assert_eq!(spawns.len(), 2);
    assert!(spawns
        .iter()
        .all(|c| c.position == Position::new(0.0, 0.5, 0.0)));
}

#[test]
fn free_form_text_round_trips() {
    let raw = "level: cross #2\r\n█ █ O █ █\r\nO O * O O\r\n-- end --";
    let parsed = parse(raw);
    assert_eq!(parsed.to_string(), raw);
    // Row 0 has three tokens, so only the first three cells of each row count
    assert_eq!(map_to_placements(&parsed).len(), 7);
}

#[test]
fn checkpoint_rule_extends_table() {
    let rules = RuleTable::default().with_rule(
        "C",
        vec![
            Emission::AtCell(PlacementKind::FloorCheckpoint),
            Emission::AtCell(PlacementKind::FloorValid),
        ],
    );
    let mapper = PlacementMapper::new(rules);
    assert_eq!(
        mapper.map(&parse("█ C")),
        vec![
            at(PlacementKind::FloorObstacle, 0.0, 0.0, 0.0),
            at(PlacementKind::FloorCheckpoint, 1.0, 0.0, 0.0),
            at(PlacementKind::FloorValid, 1.0, 0.0, 0.0),
        ]
    );
}

#[test]
fn lazy_and_eager_agree() {
    let m = parse("O * O\r\n█\r\nO O O O");
    let mapper = PlacementMapper::default();
    assert_eq!(mapper.iter(&m).collect::<Vec<_>>(), mapper.map(&m));
}

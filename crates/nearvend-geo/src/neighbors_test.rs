use super::*;
use crate::geohash::decode_bounds;

#[test]
fn neighbors_of_reference_cell() {
    assert_eq!(
        neighbors("dqcjq"),
        vec!["dqcjw", "dqcjx", "dqcjr", "dqcjp", "dqcjn", "dqcjj", "dqcjm", "dqcjt"]
    );
}

#[test]
fn neighbors_of_single_symbol_cell() {
    assert_eq!(
        neighbors("s"),
        vec!["u", "v", "t", "m", "k", "7", "e", "g"]
    );
}

#[test]
fn neighbors_cross_parent_boundary() {
    // `ezs42` sits on the western edge of `ezs4`; its western neighbours
    // live under a different parent.
    assert_eq!(
        neighbors("ezs42"),
        vec!["ezs48", "ezs49", "ezs43", "ezs41", "ezs40", "ezefp", "ezefr", "ezefx"]
    );
}

#[test]
fn neighbors_wrap_across_antimeridian() {
    // `zzz` touches lng 180; its eastern neighbour is on the far western edge.
    let cells = neighbors("zzz");
    assert_eq!(cells[2], "bpb");
    assert_eq!(neighbors("000")[6], "pbp");
}

#[test]
fn neighbors_around_null_island() {
    assert_eq!(
        neighbors("s00000"),
        vec!["s00001", "s00003", "s00002", "kpbpbr", "kpbpbp", "7zzzzz", "ebpbpb", "ebpbpc"]
    );
}

#[test]
fn neighbors_preserve_length() {
    for hash in ["9", "9u", "9u8", "9u89", "9u89v", "9u89vv", "9u89vve", "9u89vve0", "9u89vve0m"] {
        let cells = neighbors(hash);
        assert_eq!(cells.len(), 8);
        assert!(cells.iter().all(|c| c.len() == hash.len()), "{hash}: {cells:?}");
    }
}

#[test]
fn neighbors_are_distinct_from_center() {
    let cells = neighbors("9u89vve");
    assert!(!cells.contains(&"9u89vve".to_string()));
    let mut unique = cells.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 8);
}

#[test]
fn adjacent_cells_share_an_edge() {
    let center = decode_bounds("9u89vve").unwrap();

    let north = decode_bounds(&adjacent("9u89vve", Direction::North)).unwrap();
    assert_eq!(north.min_lat, center.max_lat);
    assert_eq!(north.min_lng, center.min_lng);

    let south = decode_bounds(&adjacent("9u89vve", Direction::South)).unwrap();
    assert_eq!(south.max_lat, center.min_lat);

    let east = decode_bounds(&adjacent("9u89vve", Direction::East)).unwrap();
    assert_eq!(east.min_lng, center.max_lng);
    assert_eq!(east.min_lat, center.min_lat);

    let west = decode_bounds(&adjacent("9u89vve", Direction::West)).unwrap();
    assert_eq!(west.max_lng, center.min_lng);
}

#[test]
fn adjacent_is_case_insensitive() {
    assert_eq!(adjacent("DQCJQ", Direction::North), "dqcjw");
}

#[test]
fn adjacent_rejects_empty_and_invalid_input() {
    assert_eq!(adjacent("", Direction::East), "");
    assert_eq!(adjacent("dqcja", Direction::East), "");
    assert!(neighbors("").is_empty());
    assert!(neighbors("hello").is_empty());
}

#[test]
fn direction_parses_letters() {
    assert_eq!(Direction::from_char('N'), Some(Direction::North));
    assert_eq!(Direction::from_char('w'), Some(Direction::West));
    assert_eq!(Direction::from_char('x'), None);
}

#[test]
fn compass_order_is_clockwise_from_north() {
    let labels: Vec<String> = Compass::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["n", "ne", "e", "se", "s", "sw", "w", "nw"]);
}

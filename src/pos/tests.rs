use super::*;

// === Construction ===

#[test]
fn zero_is_null_char_at_empty_range() {
    assert_eq!(Pos::ZERO.ch, '\0');
    assert_eq!(Pos::ZERO.start, 0);
    assert_eq!(Pos::ZERO.end, 0);
    assert_eq!(Pos::ZERO.width(), 0);
}

#[test]
fn default_is_zero() {
    assert_eq!(Pos::default(), Pos::ZERO);
}

#[test]
fn new_sets_fields() {
    let pos = Pos::new('x', 3, 4);
    assert_eq!(pos.ch, 'x');
    assert_eq!(pos.start, 3);
    assert_eq!(pos.end, 4);
}

// === Width ===

#[test]
fn width_matches_utf8_encoding() {
    let cases = [('a', 1u32), ('ß', 2), ('柳', 3), ('\u{1F600}', 4)];
    for (ch, width) in cases {
        let pos = Pos::new(ch, 10, 10 + width);
        assert_eq!(pos.width(), width, "width mismatch for {ch:?}");
        assert_eq!(pos.width() as usize, ch.len_utf8());
    }
}

#[test]
fn to_range_converts_offsets() {
    let pos = Pos::new('e', 1, 2);
    assert_eq!(pos.to_range(), 1..2);
}

// === Display ===

#[test]
fn display_renders_char_and_offsets() {
    let cases: [(char, u32, u32); 5] = [
        ('\u{0000}', 0, 1),
        ('a', 23, 24),
        ('禪', 2, 5),
        ('9', 37, 38),
        ('\u{ffff}', 0, 3),
    ];
    for (ch, start, end) in cases {
        let pos = Pos::new(ch, start, end);
        let want = format!("{{ {ch} {start}:{end} }}");
        assert_eq!(pos.to_string(), want);
    }
}

#[test]
fn display_ascii_example() {
    assert_eq!(Pos::new('H', 0, 1).to_string(), "{ H 0:1 }");
    assert_eq!(Pos::new('柳', 22, 25).to_string(), "{ 柳 22:25 }");
}

// === Value Semantics ===

#[test]
fn positions_hash_and_compare_by_value() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Pos::new('a', 0, 1));
    set.insert(Pos::new('a', 0, 1)); // duplicate
    set.insert(Pos::new('b', 1, 2));
    assert_eq!(set.len(), 2);
}

#[test]
fn copy_snapshot_is_independent() {
    let pos = Pos::new('q', 5, 6);
    let saved = pos;
    assert_eq!(saved, pos);
    assert_eq!(saved.ch, 'q');
}

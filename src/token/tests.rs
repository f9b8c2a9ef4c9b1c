use std::sync::Arc;

use super::*;

fn shared(bytes: &[u8]) -> Arc<[u8]> {
    Arc::from(bytes)
}

// === Accessors ===

#[test]
fn pos_returns_recorded_position() {
    let token = Token::new(Pos::new('e', 1, 2), shared(b"Hello!"));
    assert_eq!(token.pos(), Pos::new('e', 1, 2));
}

#[test]
fn as_bytes_slices_the_range() {
    let token = Token::new(Pos::new('e', 1, 2), shared(b"Hello!"));
    assert_eq!(token.as_bytes(), b"e");
}

#[test]
fn lexeme_decodes_the_range() {
    let token = Token::new(Pos::new('e', 1, 2), shared(b"Hello!"));
    assert_eq!(token.lexeme(), Some("e"));
}

#[test]
fn lexeme_handles_multibyte_char() {
    let source = "a柳b";
    let token = Token::new(Pos::new('柳', 1, 4), shared(source.as_bytes()));
    assert_eq!(token.lexeme(), Some("柳"));
    assert_eq!(token.as_bytes(), "柳".as_bytes());
}

// === Out-of-Range Positions ===

#[test]
fn out_of_range_position_yields_empty_bytes() {
    let token = Token::new(Pos::new('x', 100, 101), shared(b"short"));
    assert_eq!(token.as_bytes(), b"");
    assert_eq!(token.lexeme(), None);
}

#[test]
fn range_into_multibyte_middle_is_not_utf8() {
    // 1..2 cuts through the 3-byte encoding of 柳.
    let token = Token::new(Pos::new('?', 1, 2), shared("a柳".as_bytes()));
    assert_eq!(token.lexeme(), None);
    assert_eq!(token.as_bytes().len(), 1);
}

// === Rendering ===

#[test]
fn display_delegates_to_pos() {
    let token = Token::new(Pos::new('H', 0, 1), shared(b"Hello!"));
    assert_eq!(token.to_string(), "{ H 0:1 }");
}

#[test]
fn debug_shows_buffer_length_not_content() {
    let token = Token::new(Pos::new('H', 0, 1), shared(b"Hello!"));
    let debug = format!("{token:?}");
    assert!(debug.contains("buffer_len: 6"));
    assert!(!debug.contains("72")); // no byte dump
}

// === Sharing ===

#[test]
fn clone_aliases_the_same_buffer() {
    let buffer = shared(b"Hello!");
    let token = Token::new(Pos::new('H', 0, 1), Arc::clone(&buffer));
    let copy = token.clone();
    drop(token);
    assert_eq!(copy.lexeme(), Some("H"));
    assert_eq!(Arc::strong_count(&buffer), 2);
}

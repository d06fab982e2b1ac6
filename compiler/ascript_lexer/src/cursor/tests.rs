use super::*;

#[test]
fn advance_counts_lines() {
    let mut cursor = Cursor::new("a\nb\n");
    assert_eq!(cursor.line(), 1);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.line(), 2);
    assert_eq!(cursor.current(), Some(b'b'));
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.line(), 3);
    assert_eq!(cursor.current(), None);
}

#[test]
fn skip_comment_stops_at_newline() {
    let mut cursor = Cursor::new("# note\nx");
    cursor.skip_comment();
    assert_eq!(cursor.current(), Some(b'\n'));
    assert_eq!(cursor.line(), 1);

    let mut cursor = Cursor::new("# trailing");
    cursor.skip_comment();
    assert_eq!(cursor.current(), None);
}

#[test]
fn string_body_ends_at_quote() {
    let mut cursor = Cursor::new("hello world\" rest");
    assert_eq!(cursor.eat_string_body(), Some("hello world"));
    assert_eq!(cursor.current(), Some(b' '));
}

#[test]
fn string_body_cannot_cross_lines() {
    let mut cursor = Cursor::new("oops\n\"");
    assert_eq!(cursor.eat_string_body(), None);
    assert_eq!(cursor.current(), Some(b'o'));

    let mut cursor = Cursor::new("never closed");
    assert_eq!(cursor.eat_string_body(), None);
}

#[test]
fn eat_while_returns_run() {
    let mut cursor = Cursor::new("abc_1;");
    let word = cursor.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
    assert_eq!(word, "abc_1");
    assert_eq!(cursor.current(), Some(b';'));
    cursor.advance();
    assert_eq!(cursor.current(), None);
}

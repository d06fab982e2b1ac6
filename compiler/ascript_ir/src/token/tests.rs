use super::*;

#[test]
fn token_display_includes_payload_and_line() {
    let token = Token::new(TokenKind::Ident("counter".into()), 4);
    assert_eq!(token.to_string(), "identifier \"counter\" on line 4");

    let token = Token::new(TokenKind::Integer(-7), 1);
    assert_eq!(token.to_string(), "integer value (-7) on line 1");

    let token = Token::new(TokenKind::Semicolon, 2);
    assert_eq!(token.to_string(), "; on line 2");
}

#[test]
fn literal_classification() {
    assert!(TokenKind::Text("a".into()).is_literal());
    assert!(TokenKind::Boolean(false).is_literal());
    assert!(TokenKind::Decimal(0.5).is_literal());
    assert!(!TokenKind::Ident("a".into()).is_literal());
    assert!(!TokenKind::Add.is_literal());
}

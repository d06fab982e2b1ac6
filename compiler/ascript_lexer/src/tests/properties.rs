use crate::tokenize;
use ascript_ir::TokenKind;
use proptest::prelude::*;

proptest! {
    #[test]
    fn integers_lex_to_themselves(n in any::<i64>()) {
        let tokens = tokenize(&n.to_string()).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Integer(n));
    }

    #[test]
    fn identifiers_lex_to_identifiers(name in "[a-z_][a-z0-9_]{0,12}x") {
        let tokens = tokenize(&name).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Ident(name.clone()));
    }

    #[test]
    fn text_literals_keep_their_body(body in "[a-zA-Z0-9 #;,\\[\\]]{0,24}") {
        let source = format!("\"{body}\"");
        let tokens = tokenize(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Text(body.clone()));
    }

    #[test]
    fn lexing_is_deterministic(source in "[a-z0-9 ;,\\[\\]\n]{0,64}") {
        let first = tokenize(&source);
        let second = tokenize(&source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn line_numbers_never_decrease(source in "(let x be 1;\n|# c\n|out[x];\n| \n){0,16}") {
        let tokens = tokenize(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
    }
}

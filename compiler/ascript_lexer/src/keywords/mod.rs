//! Keyword resolution.
//!
//! Length-bucketed lookup: words outside the 2-15 character range are
//! rejected without any comparison, the rest are matched against the
//! keywords of their length. `true` and `false` resolve here as boolean
//! literals.

use ascript_ir::TokenKind;

/// Look up a reserved word.
///
/// Returns `None` for anything that should lex as an identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=15).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(TokenKind::As),
            "be" => Some(TokenKind::Be),
            "if" => Some(TokenKind::If),
            "to" => Some(TokenKind::To),
            _ => None,
        },
        3 => match text {
            "add" => Some(TokenKind::Add),
            "any" => Some(TokenKind::AnyType),
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::IntType),
            "let" => Some(TokenKind::Let),
            "not" => Some(TokenKind::Not),
            "out" => Some(TokenKind::Out),
            "set" => Some(TokenKind::Set),
            _ => None,
        },
        4 => match text {
            "bool" => Some(TokenKind::BoolType),
            "else" => Some(TokenKind::Else),
            "exit" => Some(TokenKind::Exit),
            "fail" => Some(TokenKind::Fail),
            "loop" => Some(TokenKind::Loop),
            "true" => Some(TokenKind::Boolean(true)),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "endif" => Some(TokenKind::EndIf),
            "false" => Some(TokenKind::Boolean(false)),
            "yield" => Some(TokenKind::Yield),
            _ => None,
        },
        6 => match text {
            "double" => Some(TokenKind::DoubleType),
            "elseif" => Some(TokenKind::ElseIf),
            "is_int" => Some(TokenKind::IsInt),
            "return" => Some(TokenKind::Return),
            "string" => Some(TokenKind::StringType),
            _ => None,
        },
        7 => match text {
            "endloop" => Some(TokenKind::EndLoop),
            "host_do" => Some(TokenKind::HostDo),
            "is_bool" => Some(TokenKind::IsBool),
            _ => None,
        },
        8 => match text {
            "host_add" => Some(TokenKind::HostAdd),
            "host_get" => Some(TokenKind::HostGet),
            "host_has" => Some(TokenKind::HostHas),
            "host_set" => Some(TokenKind::HostSet),
            "is_equal" => Some(TokenKind::IsEqual),
            _ => None,
        },
        9 => match text {
            "is_double" => Some(TokenKind::IsDouble),
            "is_string" => Some(TokenKind::IsString),
            "substract" => Some(TokenKind::Substract),
            _ => None,
        },
        10 => match text {
            "host_query" => Some(TokenKind::HostQuery),
            _ => None,
        },
        11 => match text {
            "concatenate" => Some(TokenKind::Concatenate),
            "endfunction" => Some(TokenKind::EndFunction),
            "host_delete" => Some(TokenKind::HostDelete),
            _ => None,
        },
        13 => match text {
            "beginfunction" => Some(TokenKind::BeginFunction),
            _ => None,
        },
        14 => match text {
            "is_lesser_than" => Some(TokenKind::IsLesserThan),
            _ => None,
        },
        15 => match text {
            "is_greater_than" => Some(TokenKind::IsGreaterThan),
            _ => None,
        },
        _ => None,
    }
}

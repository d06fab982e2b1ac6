use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2006.as_str(), "E2006");
    assert_eq!(ErrorCode::E4001.to_string(), "E4001");
}

#[test]
fn test_every_code_has_exactly_one_category() {
    for code in ErrorCode::ALL {
        let categories = [
            code.is_parse_error(),
            code.is_interpreter_error(),
            code.is_user_error(),
            code.is_host_error(),
        ];
        assert_eq!(
            categories.iter().filter(|c| **c).count(),
            1,
            "{code} should belong to exactly one category"
        );
    }
}

#[test]
fn test_category_matches_leading_digit() {
    for code in ErrorCode::ALL {
        let digit = &code.as_str()[1..2];
        match digit {
            "1" => assert!(code.is_parse_error()),
            "2" => assert!(code.is_interpreter_error()),
            "3" => assert!(code.is_user_error()),
            "4" => assert!(code.is_host_error()),
            other => panic!("unexpected category digit {other} in {code}"),
        }
    }
}

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_matches_as_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.to_string(), code.as_str());
    }
}

#[test]
fn test_all_is_sorted_and_unique() {
    let names: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
}

#[test]
fn test_phase_predicates() {
    assert!(ErrorCode::E1001.is_parser_error());
    assert!(!ErrorCode::E1001.is_eval_error());
    assert!(ErrorCode::E6003.is_eval_error());
    assert!(!ErrorCode::E0001.is_parser_error());
    assert!(!ErrorCode::E0002.is_eval_error());
}

#[test]
fn test_descriptions_are_nonempty() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
    }
}

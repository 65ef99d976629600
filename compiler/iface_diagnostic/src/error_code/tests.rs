use super::*;

#[test]
fn display_matches_as_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.to_string(), code.as_str());
    }
}

#[test]
fn parse_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("e2005".parse::<ErrorCode>(), Ok(ErrorCode::E2005));
    assert!("E0000".parse::<ErrorCode>().is_err());
}

#[test]
fn every_code_has_a_description() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
    }
}

#[test]
fn only_e9_codes_are_internal() {
    assert!(ErrorCode::E9001.is_internal());
    assert!(!ErrorCode::E2005.is_internal());
}

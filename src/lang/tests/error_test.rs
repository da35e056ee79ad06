use super::*;
use crate::error;

#[test]
fn test_display_plain() {
    assert_eq!(error!(Overflow).to_string(), "OVERFLOW");
    assert_eq!(error!(DivisionByZero).to_string(), "DIVISION BY ZERO");
}

#[test]
fn test_display_with_context() {
    assert_eq!(
        error!(MalformedInstruction, 3; "12AB").to_string(),
        "MALFORMED INSTRUCTION IN LINE 3; 12AB"
    );
    assert_eq!(
        error!(InvalidAddress, ..250).to_string(),
        "INVALID ADDRESS AT 250"
    );
    assert_eq!(
        error!(InvalidOpcode, ..7; "OPCODE 99").to_string(),
        "INVALID OPCODE AT 07; OPCODE 99"
    );
}

#[test]
fn test_accessors() {
    let error = error!(OutOfRangeValue, 5; "999999");
    assert_eq!(error.code(), ErrorCode::OutOfRangeValue);
    assert_eq!(error.line_number(), Some(5));
    assert_eq!(error.address(), None);
}

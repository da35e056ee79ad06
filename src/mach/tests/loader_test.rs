use super::*;

#[test]
fn test_load_old_format() {
    let load = Loader::new().load(vec!["1005", "4300"]).unwrap();
    assert_eq!(load.format, WordFormat::Old);
    assert_eq!(load.count, 2);
    assert_eq!(load.memory.fetch(0), 1005);
    assert_eq!(load.memory.fetch(1), 4300);
    assert!(load.warnings.is_empty());
}

#[test]
fn test_load_new_format() {
    let load = Loader::new().load(vec!["010005", "043000"]).unwrap();
    assert_eq!(load.format, WordFormat::New);
    assert_eq!(load.count, 2);
    assert_eq!(load.memory.fetch(0), 10005);
}

#[test]
fn test_blank_lines_and_whitespace() {
    let load = Loader::new()
        .load(vec!["  1005 ", "", "   ", "4300\n"])
        .unwrap();
    assert_eq!(load.count, 2);
}

#[test]
fn test_terminator_stops_ingestion() {
    let load = Loader::new()
        .load(vec!["1005", "4300", "-99999", "9999"])
        .unwrap();
    assert_eq!(load.count, 2);
    assert_eq!(load.memory.fetch(2), 0);
}

#[test]
fn test_short_terminator_recognized() {
    // Both sentinels stop any file, so -9999 is never a loadable word.
    let load = Loader::new().load(vec!["1005", "-9999", "4300"]).unwrap();
    assert_eq!(load.count, 1);
}

#[test]
fn test_unrecognized_word_length() {
    let error = Loader::new().load(vec!["10055", "4300"]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnrecognizedWordLength);
    assert_eq!(error.line_number(), Some(1));
}

#[test]
fn test_mixed_word_formats() {
    let error = Loader::new().load(vec!["1005", "010005"]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::MixedWordFormat);
    assert_eq!(error.line_number(), Some(2));
}

#[test]
fn test_malformed_instruction() {
    // Four characters, so the width check passes and parsing fails.
    let error = Loader::new().load(vec!["12ab"]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::MalformedInstruction);
    assert_eq!(error.line_number(), Some(1));
}

#[test]
fn test_out_of_range_is_only_a_warning() {
    let load = Loader::new()
        .load(vec!["001005", "999999", "043000"])
        .unwrap();
    assert_eq!(load.count, 2);
    assert_eq!(load.memory.fetch(1), 43000);
    assert_eq!(load.warnings.len(), 1);
    assert_eq!(load.warnings[0].code(), ErrorCode::OutOfRangeValue);
    assert_eq!(load.warnings[0].line_number(), Some(2));
}

#[test]
fn test_program_too_large() {
    let error = Loader::with_capacity(2)
        .load(vec!["1005", "1006", "1007"])
        .unwrap_err();
    assert_eq!(error.code(), ErrorCode::ProgramTooLarge);
    assert_eq!(error.line_number(), Some(3));
}

#[test]
fn test_empty_program() {
    let error = Loader::new().load(Vec::<&str>::new()).unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnrecognizedWordLength);
    let error = Loader::new().load(vec!["", "  "]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnrecognizedWordLength);
}

#[test]
fn test_unused_addresses_stay_zero() {
    let load = Loader::new().load(vec!["4300"]).unwrap();
    assert_eq!(load.memory.capacity(), MEMORY_SIZE);
    assert_eq!(load.memory.fetch(1), 0);
    assert_eq!(load.memory.fetch(MEMORY_SIZE - 1), 0);
}

#[test]
fn test_legacy_capacity() {
    let load = Loader::with_capacity(LEGACY_MEMORY_SIZE)
        .load(vec!["2099", "4300"])
        .unwrap();
    assert_eq!(load.memory.capacity(), 100);
    // Old-format operands top out at 99, so the legacy machine can
    // address all of its memory.
    let mut runtime = Runtime::new(load.memory);
    let mut port = ScriptedPort::new();
    assert_eq!(runtime.execute(&mut port), Status::Halted);
}

use small_calc::adapters::keyboard::tokenize;
use small_calc::{
    Keymap, Keypad, MemoryDisplay, Operator, OutputFormat, Session, SessionState, TerminalDisplay,
};

fn type_keys(keys: &str) -> Session<MemoryDisplay> {
    let mut session = Session::new(MemoryDisplay::new());
    let events = Keymap::standard().map_keys(tokenize(keys));
    session.run(events).unwrap();
    session
}

#[test]
fn test_digits_concatenate() {
    let session = type_keys("1 2 3 4 5");
    assert_eq!(session.engine().display(), "12345");
}

#[test]
fn test_leading_zeros_collapse_until_nonzero_digit() {
    let session = type_keys("0 0 0");
    assert_eq!(session.engine().display(), "0");

    let session = type_keys("0 0 9 0");
    assert_eq!(session.engine().display(), "90");
}

#[test]
fn test_decimal_entry_is_idempotent() {
    let session = type_keys("3 . . .");
    assert_eq!(session.engine().display(), "3.");
    assert_eq!(session.renderer().frames(), ["3", "3.", "3.", "3."]);

    let session = type_keys("3 . 1 . 4");
    assert_eq!(session.engine().display(), "3.14");
}

#[test]
fn test_reset_restores_defaults_from_any_state() {
    for keys in ["", "5 +", "5 + 3", "7 / 0 Enter", "1 . 5 * * C", "9 ="] {
        let session = type_keys(&format!("{} Escape", keys));
        assert_eq!(session.engine().display(), "0", "after {:?}", keys);
        assert_eq!(*session.engine().state(), SessionState::default());
    }
}

#[test]
fn test_chained_computation() {
    let session = type_keys("5 + 3 + 2 =");
    assert_eq!(session.engine().display(), "10");
    assert_eq!(
        session.renderer().frames(),
        ["5", "5", "3", "8", "2", "10"]
    );
}

#[test]
fn test_operator_replacement() {
    let session = type_keys("5 + *");
    let state = session.engine().state();
    assert_eq!(session.engine().display(), "5");
    assert_eq!(state.pending_operator, Some(Operator::Multiply));
    assert_eq!(state.first_operand, 5.0);
    assert!(state.awaiting_next);
}

#[test]
fn test_division() {
    let session = type_keys("7 / 2 Enter");
    assert_eq!(session.engine().display(), "3.5");
}

#[test]
fn test_equals_with_no_prior_operator() {
    let session = type_keys("9 =");
    let state = session.engine().state();
    assert_eq!(session.engine().display(), "9");
    assert_eq!(state.first_operand, 9.0);
    assert_eq!(state.pending_operator, Some(Operator::Equals));
    assert!(state.awaiting_next);
}

#[test]
fn test_division_by_zero_is_displayed_verbatim() {
    let session = type_keys("8 / 0 =");
    assert_eq!(session.engine().display(), "Infinity");

    // Typing after the result starts a fresh operand
    let session = type_keys("8 / 0 = 4");
    assert_eq!(session.engine().display(), "4");
}

#[test]
fn test_explicit_zero_first_operand() {
    // 0 cannot be told apart from "no first operand yet"
    let session = type_keys("0 - 4 =");
    assert_eq!(session.engine().display(), "4");
    assert_eq!(session.engine().state().first_operand, 4.0);
}

#[test]
fn test_keypad_buttons_drive_the_same_engine() {
    let keypad = Keypad::standard();
    let mut session = Session::new(MemoryDisplay::new());

    for label in ["1", ".", "5", "*", "4", "="] {
        let event = keypad.press(label).unwrap();
        session.dispatch(event).unwrap();
    }
    assert_eq!(session.engine().display(), "6");

    session.dispatch(keypad.press("C").unwrap()).unwrap();
    assert_eq!(session.renderer().last(), Some("0"));
}

#[test]
fn test_terminal_json_output() {
    let mut session = Session::new(TerminalDisplay::new(Vec::new(), OutputFormat::Json))
        .with_trace(false);
    session
        .run(Keymap::standard().map_keys(tokenize("6 * 7 Enter")))
        .unwrap();
    session.finish().unwrap();

    let output = String::from_utf8(session.into_renderer().into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1);

    let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(value["display"], "42");
    assert_eq!(value["pending_operator"], "=");
    assert_eq!(value["awaiting_next"], true);
}

#[test]
fn test_json_output_reads_back_after_division_by_zero() {
    let mut session = Session::new(TerminalDisplay::new(Vec::new(), OutputFormat::Json));
    session
        .run(Keymap::standard().map_keys(tokenize("8 / 0 =")))
        .unwrap();

    let output = String::from_utf8(session.into_renderer().into_inner()).unwrap();
    let last = output.lines().last().unwrap();
    let snapshot: small_calc::Snapshot = serde_json::from_str(last).unwrap();

    assert_eq!(snapshot.display, "Infinity");
    assert_eq!(snapshot.first_operand, f64::INFINITY);
}

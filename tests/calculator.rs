// Whole key sequences driven through the public calculator API.

use keycalc::calculator::{
    CalcState, Calculator, DEFAULT_MIN_MAGNITUDE, Digit, Operator, Phase, Token, format_value,
    insert_separators, parse_display, tokenize,
};

fn press(calc: &mut Calculator, keys: &str) -> String {
    calc.press_all(tokenize(keys).unwrap()).text
}

fn digit(d: u8) -> Token {
    Token::Digit(Digit::new(d).unwrap())
}

#[test]
fn test_sequential_entry() {
    let mut calc = Calculator::new();

    assert_eq!(calc.press(digit(5)).text, "5");
    assert_eq!(calc.press(Token::Operator(Operator::Add)).text, "5");
    assert_eq!(calc.press(digit(3)).text, "3");
    assert_eq!(calc.press(Token::Equals).text, "8");
    assert_eq!(calc.state().accumulator(), Some(8.0));
    assert_eq!(calc.phase(), Phase::Result);
}

#[test]
fn test_post_equals_chaining() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "5+3="), "8");

    // Operator with nothing typed only sets the pending operator.
    let display = calc.press(Token::Operator(Operator::Add));
    assert_eq!(display.text, "8");
    assert_eq!(display.operator, Some("+"));
    assert_eq!(calc.phase(), Phase::OperatorPending);

    // Equals with nothing typed uses the accumulator as the right operand.
    assert_eq!(calc.press(Token::Equals).text, "16");
    assert_eq!(calc.press(Token::Equals).text, "16");
}

#[test]
fn test_comprehensive_flow() {
    let mut calc = Calculator::new();

    assert_eq!(press(&mut calc, "10+5="), "15");
    assert_eq!(press(&mut calc, "*2="), "30");
    assert_eq!(press(&mut calc, "100/4="), "25");

    calc.press(Token::AllClear);
    assert_eq!(calc.phase(), Phase::Idle);
    assert_eq!(press(&mut calc, "7-3="), "4");
}

#[test]
fn test_floating_point_noise_removed() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "0.1+0.2="), "0.3");
    calc.reset();
    assert_eq!(press(&mut calc, ".1*.1="), "0.01");
    calc.reset();
    assert_eq!(press(&mut calc, "100/3="), "33.3333333");
    calc.reset();
    assert_eq!(press(&mut calc, "2/3="), "0.66666667");
}

#[test]
fn test_divide_by_zero() {
    let mut calc = Calculator::new();
    let display = calc.press_all(tokenize("5/0=").unwrap());
    assert!(display.is_error);
    assert_eq!(display.text, "Error");
    assert_eq!(display.clipboard, None);
    assert_eq!(calc.phase(), Phase::Error);

    // Any key leaves the error state.
    assert_eq!(press(&mut calc, "9"), "9");
    assert_eq!(press(&mut calc, "+1="), "10");
}

#[test]
fn test_zero_divided_by_zero() {
    let mut calc = Calculator::new();
    assert!(calc.press_all(tokenize("0/0=").unwrap()).is_error);
}

#[test]
fn test_overflow_renders_exponential() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "999999999+1="), "1e+9");
    assert_eq!(calc.state().accumulator(), Some(1_000_000_000.0));
    assert!(!calc.display().is_error);

    // Still usable as an operand.
    assert_eq!(press(&mut calc, "/10="), "100,000,000");

    calc.reset();
    assert_eq!(press(&mut calc, "999999999*9="), "9e+9");
}

#[test]
fn test_tiny_results_render_exponential() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "1/999999999="), "1e-9");
}

#[test]
fn test_digit_budget_and_single_point() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "1234567890"), "123,456,789");
    calc.reset();
    assert_eq!(press(&mut calc, "1.2.3"), "1.23");
    calc.reset();
    assert_eq!(press(&mut calc, "0.123456789"), "0.12345678");
}

#[test]
fn test_left_to_right_evaluation() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "2+3*4="), "20");
    calc.reset();
    assert_eq!(press(&mut calc, "1-2-3="), "-4");
}

#[test]
fn test_operator_pressed_twice() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "9++"), "9");
    assert_eq!(calc.state().accumulator(), Some(9.0));
    assert_eq!(press(&mut calc, "1="), "10");

    calc.reset();
    assert_eq!(press(&mut calc, "9+*2="), "18");
}

#[test]
fn test_percent_followed_by_operator() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "50%"), "0.5");
    assert_eq!(press(&mut calc, "+1="), "1.5");

    calc.reset();
    assert_eq!(press(&mut calc, "80*25%="), "20");
}

#[test]
fn test_percent_followed_by_digits() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "10+50%"), "0.5");
    assert_eq!(press(&mut calc, "4"), "4");
    assert_eq!(press(&mut calc, "="), "14");
}

#[test]
fn test_percent_after_equals() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "40+10=%"), "0.5");
    assert_eq!(calc.phase(), Phase::Result);
    assert_eq!(press(&mut calc, "*4="), "2");
}

#[test]
fn test_sign_toggle() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "1234.5 neg"), "-1,234.5");
    assert_eq!(press(&mut calc, "+/-"), "1,234.5");
    assert_eq!(press(&mut calc, "neg+1="), "-1,233.5");
    assert_eq!(press(&mut calc, "neg"), "1,233.5");
}

#[test]
fn test_sign_toggle_with_operator_pending() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "5+ neg"), "-5");
    assert_eq!(press(&mut calc, "="), "0");

    calc.reset();
    assert_eq!(press(&mut calc, "5+ neg *3="), "0");
}

#[test]
fn test_clear_then_all_clear() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "12+34c"), "12");
    assert_eq!(calc.phase(), Phase::OperatorPending);
    assert_eq!(press(&mut calc, "c"), "0");
    assert_eq!(*calc.state(), CalcState::default());
}

#[test]
fn test_all_clear_is_idempotent() {
    let sequences = ["", "7", "7*", "7*8", "7*8=", "7/0=", "12%", "neg", "3.", "1e"];
    for keys in sequences {
        let mut calc = Calculator::new();
        if let Ok(tokens) = tokenize(keys) {
            calc.press_all(tokens);
        }
        calc.press(Token::AllClear);
        let once = calc.state().clone();
        calc.press(Token::AllClear);
        assert_eq!(once, CalcState::default(), "after {keys:?}");
        assert_eq!(*calc.state(), once, "after {keys:?}");
        assert_eq!(calc.display().text, "0");
    }
}

#[test]
fn test_separator_placement() {
    assert_eq!(insert_separators("1234567"), "1,234,567");
    assert_eq!(insert_separators("1234.5"), "1,234.5");
    assert_eq!(insert_separators("12345.6789"), "12,345.6789");
}

#[test]
fn test_typed_entries_round_trip() {
    for keys in ["1", "12", "1234", "123456789", "1.5", "1234.25", "0.125", "99999.9999"] {
        let mut calc = Calculator::new();
        let shown = press(&mut calc, keys);
        let value = parse_display(&shown, false).unwrap();
        assert_eq!(format_value(value, DEFAULT_MIN_MAGNITUDE), shown, "keys {keys:?}");
    }
}

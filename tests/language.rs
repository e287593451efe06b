use scalc::{
    calculate,
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Environment,
        lexer::{Token, Tokenizer},
        parser::core::parse,
    },
    util::num::format_general,
};

fn eval_in(src: &str, env: &mut Environment) -> f64 {
    calculate(src, env).unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"))
}

fn eval(src: &str) -> f64 {
    eval_in(src, &mut Environment::new())
}

fn assert_value(src: &str, expected: f64) {
    let actual = eval(src);
    assert_eq!(actual, expected, "{src} evaluated to {actual}, expected {expected}");
}

fn assert_close(src: &str, expected: f64) {
    let actual = eval(src);
    assert!((actual - expected).abs() < 1e-12,
            "{src} evaluated to {actual}, expected about {expected}");
}

fn assert_failure(src: &str) -> Error {
    match calculate(src, &mut Environment::new()) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn tokens(src: &str) -> Result<Vec<Token>, LexError> {
    let mut tokenizer = Tokenizer::new(src);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        if token == Token::End {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

fn assert_tree(src: &str, expected: &str) {
    let expr = parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    assert_eq!(expr.to_string(), expected, "parse tree of {src}");
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("  42  ", 42.0);
}

#[test]
fn precedence_and_associativity() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("2 - 3 - 4", -5.0);
    assert_value("16 / 4 / 2", 2.0);
    assert_value("--3", 3.0);
    assert_value("-(2 + 3) * 2", -10.0);

    assert_tree("2 - 3 - 4", "((2 - 3) - 4)");
    assert_tree("1 + 2 * 3 - 4", "((1 + (2 * 3)) - 4)");
    assert_tree("-x * y", "((-x) * y)");
}

#[test]
fn power_binds_tighter_than_negation_and_to_the_right() {
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("-2 ^ 2", -4.0);
    assert_value("2 ^ -1", 0.5);
    assert_value("(-2) ^ 2", 4.0);
    assert_value("2 * 3 ^ 2", 18.0);

    assert_tree("2 ^ 3 ^ 2", "(2 ^ (3 ^ 2))");
    assert_tree("-2 ^ 2", "(-(2 ^ 2))");
}

#[test]
fn number_literal_forms() {
    assert_value(".5", 0.5);
    assert_value("5.", 5.0);
    assert_value("007", 7.0);
    assert_value("3.25 * 4", 13.0);
}

#[test]
fn extra_dots_end_a_number_literal() {
    assert_value("1.2.3", 1.2);
    assert_value("1.2.3 + 1", 2.2);
    assert_value("1..2 + 3", 4.0);
    assert_value("2.5.", 2.5);
    assert_value(".5.5", 0.5);
}

#[test]
fn invalid_number_literals() {
    for src in [".", "..", "1 + ..5", ". + 1"] {
        match assert_failure(src) {
            Error::Parse(ParseError::InvalidNumber { .. }) => {},
            other => panic!("{src}: expected an invalid number error, got {other:?}"),
        }
    }
}

#[test]
fn assignment_yields_the_value_and_binds_the_name() {
    let mut env = Environment::new();
    assert_eq!(eval_in("x = 5", &mut env), 5.0);
    assert_eq!(env.get("x"), Some(5.0));

    assert_eq!(eval_in("x * 2 + 1", &mut env), 11.0);
    assert_eq!(eval_in("a = b = 3", &mut env), 3.0);
    assert_eq!(env.get("a"), Some(3.0));
    assert_eq!(env.get("b"), Some(3.0));

    assert_eq!(eval_in("(c = 2) + c", &mut env), 4.0);
    assert_eq!(eval_in("x = x + 1", &mut env), 6.0);

    assert_tree("a = b = 3", "(a = (b = 3))");
    assert_tree("y = 1 + 2", "(y = (1 + 2))");
}

#[test]
fn names_are_case_sensitive() {
    let mut env = Environment::new();
    eval_in("value = 1", &mut env);
    assert!(calculate("Value", &mut env).is_err());
    assert!(calculate("ans", &mut env).is_err());
    assert_eq!(eval_in("value + Ans", &mut env), 1.0);
}

#[test]
fn fresh_environment_binds_only_the_answer() {
    let env = Environment::new();
    assert_eq!(env.get("Ans"), Some(0.0));
    assert_eq!(env.get("x"), None);
    assert_value("Ans + 1", 1.0);
}

#[test]
fn undefined_variables_are_reported_by_name() {
    match assert_failure("1 + missing") {
        Error::Runtime(RuntimeError::UndefinedVariable { name }) => assert_eq!(name, "missing"),
        other => panic!("expected an undefined variable error, got {other:?}"),
    }
    assert_eq!(assert_failure("missing").to_string(), "Undefined variable: missing");
}

#[test]
fn assignments_before_a_failure_are_kept() {
    let mut env = Environment::new();
    assert!(calculate("(a = 5) + nope", &mut env).is_err());
    assert_eq!(env.get("a"), Some(5.0));

    // The right-hand side fails before the name is bound.
    assert!(calculate("b = 5 + nope", &mut env).is_err());
    assert_eq!(env.get("b"), None);
}

#[test]
fn builtin_functions() {
    assert_value("pow(2, 10)", 1024.0);
    assert_value("log(2, 8)", 3.0);
    assert_value("log(2, 1024)", 10.0);
    assert_value("mod(17, 5)", 2.0);
    assert_value("mod(-5, 3)", -2.0);
    assert_value("mod(5.5, 2)", 1.5);
    assert_value("sqrt(16)", 4.0);
    assert_value("abs(-3)", 3.0);
    assert_value("sin(0)", 0.0);
    assert_value("acos(1)", 0.0);
    assert_value("exp(0)", 1.0);
    assert_value("log10(1000)", 3.0);
    assert_value("log2(64)", 6.0);

    assert_close("cbrt(27)", 3.0);
    assert_close("ln(exp(2))", 2.0);
    assert_close("cos(0) + tan(0)", 1.0);
    assert_close("sinh(0) + cosh(0) + tanh(0)", 1.0);
    assert_close("asin(1) * 2", std::f64::consts::PI);
    assert_close("atan(1) * 4", std::f64::consts::PI);
    assert_close("asinh(0) + acosh(1) + atanh(0)", 0.0);
}

#[test]
fn builtins_nest_and_take_expressions() {
    assert_value("sqrt(pow(3, 2) + pow(4, 2))", 5.0);
    assert_value("pow(1 + 1, 2 * 2)", 16.0);

    let mut env = Environment::new();
    assert_eq!(eval_in("pow(x = 2, x + 1)", &mut env), 8.0);
    assert_eq!(env.get("x"), Some(2.0));
}

#[test]
fn builtins_are_matched_by_name_and_arity() {
    let cases = [("pow(2)", "pow", 1),
                 ("log(8)", "log", 1),
                 ("sqrt(1, 2)", "sqrt", 2),
                 ("Sin(0)", "Sin", 1),
                 ("f()", "f", 0),
                 ("mod(1, 2, 3)", "mod", 3)];

    for (src, expected_name, expected_arity) in cases {
        match assert_failure(src) {
            Error::Runtime(RuntimeError::UnknownFunction { name, arity }) => {
                assert_eq!(name, expected_name, "{src}");
                assert_eq!(arity, expected_arity, "{src}");
            },
            other => panic!("{src}: expected an unknown function error, got {other:?}"),
        }
    }
}

#[test]
fn unknown_functions_do_not_evaluate_their_arguments() {
    let mut env = Environment::new();
    assert!(calculate("foo(x = 3)", &mut env).is_err());
    assert_eq!(env.get("x"), None);

    // An unknown function wins over an undefined argument.
    match calculate("foo(undefined)", &mut env) {
        Err(Error::Runtime(RuntimeError::UnknownFunction { .. })) => {},
        other => panic!("expected an unknown function error, got {other:?}"),
    }
}

#[test]
fn ieee_results_are_not_errors() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("-1 / 0", f64::NEG_INFINITY);
    assert!(eval("0 / 0").is_nan());
    assert!(eval("sqrt(-1)").is_nan());
    assert!(eval("mod(1, 0)").is_nan());
    assert_value("ln(0)", f64::NEG_INFINITY);
}

#[test]
fn trailing_tokens_after_a_complete_expression_are_ignored() {
    assert_value("1 2", 1.0);
    assert_value("3 + 4) * 10", 7.0);
    assert_value("(1 + 1) (5)", 2.0);

    // Only one token past the expression is ever lexed.
    assert_value("1 2 $", 1.0);
    assert!(matches!(assert_failure("2 $"), Error::Parse(ParseError::Lex(_))));
}

#[test]
fn syntax_errors_name_the_offending_token() {
    let cases = [("1 +", "end of input"),
                 ("(1 + 2", "end of input"),
                 ("*3", "*"),
                 (")", ")"),
                 ("", "end of input"),
                 ("1 + ,", ","),
                 ("f(1,)", ")"),
                 ("f(1 2)", "2")];

    for (src, expected) in cases {
        match assert_failure(src) {
            Error::Parse(ParseError::UnexpectedToken { token }) => {
                assert_eq!(token, expected, "{src}");
            },
            other => panic!("{src}: expected an unexpected token error, got {other:?}"),
        }
    }
    assert_eq!(assert_failure("1 +").to_string(), "Unexpected token: end of input");
}

#[test]
fn unknown_characters_are_lex_errors() {
    match assert_failure("1 + $") {
        Error::Parse(ParseError::Lex(LexError { character })) => assert_eq!(character, '$'),
        other => panic!("expected a lex error, got {other:?}"),
    }
    match assert_failure("_x") {
        Error::Parse(ParseError::Lex(LexError { character })) => assert_eq!(character, '_'),
        other => panic!("expected a lex error, got {other:?}"),
    }
}

#[test]
fn tokenizer_output() {
    assert_eq!(tokens("x_1 = 3.5 * (y - .2)").unwrap(),
               vec![Token::Identifier("x_1".to_string()),
                    Token::Equals,
                    Token::Number("3.5".to_string()),
                    Token::Star,
                    Token::LParen,
                    Token::Identifier("y".to_string()),
                    Token::Minus,
                    Token::Number(".2".to_string()),
                    Token::RParen]);

    assert_eq!(tokens("log(2,8)").unwrap(),
               vec![Token::Identifier("log".to_string()),
                    Token::LParen,
                    Token::Number("2".to_string()),
                    Token::Comma,
                    Token::Number("8".to_string()),
                    Token::RParen]);

    // Exponent notation is not a number form.
    assert_eq!(tokens("1e5").unwrap(),
               vec![Token::Number("1".to_string()), Token::Identifier("e5".to_string())]);

    assert!(tokens(" \t ").unwrap().is_empty());
    assert_eq!(tokens("a # b"), Err(LexError { character: '#' }));
}

#[test]
fn tokenizer_keeps_yielding_end() {
    let mut tokenizer = Tokenizer::new("7");
    assert_eq!(tokenizer.next_token(), Ok(Token::Number("7".to_string())));
    for _ in 0..3 {
        assert_eq!(tokenizer.next_token(), Ok(Token::End));
    }
}

#[test]
fn call_trees() {
    assert_tree("log(2, x + 1)", "log(2, (x + 1))");
    assert_tree("f()", "f()");
    assert_tree("-sqrt(4) ^ 2", "(-(sqrt(4) ^ 2))");
}

#[test]
fn general_number_formatting() {
    let cases = [(7.0, "7"),
                 (0.5, "0.5"),
                 (-2.25, "-2.25"),
                 (1024.0, "1024"),
                 (1.0 / 3.0, "0.333333"),
                 (123_456.0, "123456"),
                 (1_234_567.0, "1.23457e+06"),
                 (0.0001, "0.0001"),
                 (0.000_012_3, "1.23e-05"),
                 (0.0, "0"),
                 (f64::INFINITY, "inf"),
                 (f64::NEG_INFINITY, "-inf"),
                 (f64::NAN, "nan")];

    for (value, expected) in cases {
        assert_eq!(format_general(value), expected, "formatting {value}");
    }
}

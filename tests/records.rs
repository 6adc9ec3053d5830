use admatch::{interpreter::value::Value, parse, parse_expression_text};

/// Evaluates a bare expression by wrapping it in a one-attribute record.
fn eval(source: &str) -> Value {
    let record = parse(&format!("[ X = {source}; ]")).unwrap_or_else(|e| {
                     panic!("Failed to parse '{source}': {e}")
                 });
    record.evaluate_attribute("X")
}

fn assert_eval(source: &str, expected: Value) {
    let actual = eval(source);
    assert_eq!(actual, expected, "evaluating '{source}'");
}

#[test]
fn literal_scale_factors_fold_at_parse_time() {
    assert_eval("10K", Value::Integer(10_000));
    assert_eval("3m", Value::Integer(3_000_000));
    assert_eval("1G", Value::Integer(1_000_000_000));
    assert_eval("2T", Value::Integer(2_000_000_000_000));
    assert_eval("2.5M", Value::Real(2_500_000.0));

    // Folding that overflows is a parse error, not a wrapped value.
    assert!(parse("[ X = 9223372036854775807K; ]").is_err());
}

#[test]
fn over_long_numeric_literal_is_rejected() {
    let digits = "9".repeat(30);
    assert!(parse_expression_text(&digits).is_err());
}

#[test]
fn basic_arithmetic() {
    assert_eval("1 + 2", Value::Integer(3));
    assert_eval("8 - 5", Value::Integer(3));
    assert_eval("7 * 9", Value::Integer(63));
    assert_eval("10 % 3", Value::Integer(1));
    assert_eval("2 + 3 * 4", Value::Integer(14));
    assert_eval("(2 + 3) * 4", Value::Integer(20));

    // Division always yields a real quotient.
    assert_eval("7 / 2", Value::Real(3.5));
    assert_eval("10 / 2", Value::Real(5.0));

    // Mixed operands promote the integer side.
    assert_eval("1 + 2.5", Value::Real(3.5));
    assert_eval("2.0 * 3", Value::Real(6.0));
}

#[test]
fn arithmetic_failures_are_in_band() {
    assert_eval("1 / 0", Value::Error);
    assert_eval("1 % 0", Value::Error);
    assert_eval("1.0 / 0.0", Value::Error);
    assert_eval("9223372036854775807 + 1", Value::Error);
    assert_eval("-(-9223372036854775807 - 1)", Value::Error);
    assert_eval("\"a\" + \"b\"", Value::Error);
}

#[test]
fn three_valued_logic() {
    assert_eval("true && true", Value::Bool(true));
    assert_eval("true && false", Value::Bool(false));
    assert_eval("false || true", Value::Bool(true));

    assert_eval("undefined && true", Value::Undefined);
    assert_eval("undefined || false", Value::Undefined);
    assert_eval("undefined && false", Value::Undefined);
    assert_eval("error && true", Value::Error);
    assert_eval("undefined && error", Value::Error);
    assert_eval("1 && true", Value::Error);

    // A determining boolean short-circuits past anything, even an error.
    assert_eval("false && (1 / 0)", Value::Bool(false));
    assert_eval("true || (1 / 0)", Value::Bool(true));
    assert_eval("false && Missing", Value::Bool(false));
}

#[test]
fn equality_is_strict_about_kinds() {
    assert_eval("1 == 1", Value::Bool(true));
    assert_eval("1 == 1.0", Value::Bool(true));
    assert_eval("2 != 3", Value::Bool(true));
    assert_eval("\"abc\" == \"abc\"", Value::Bool(true));
    assert_eval("\"abc\" == \"ABC\"", Value::Bool(false));
    assert_eval("true == true", Value::Bool(true));

    assert_eval("1 == \"1\"", Value::Error);
    assert_eval("true == 1", Value::Error);
    assert_eval("undefined == undefined", Value::Undefined);
    assert_eval("error == error", Value::Error);
}

#[test]
fn meta_equality_always_answers() {
    assert_eval("undefined =?= undefined", Value::Bool(true));
    assert_eval("error =?= error", Value::Bool(true));
    assert_eval("undefined =?= error", Value::Bool(false));
    assert_eval("1 =?= 1", Value::Bool(true));
    assert_eval("1 =?= 1.0", Value::Bool(false));
    assert_eval("1 =!= 2", Value::Bool(true));
    assert_eval("\"a\" =?= \"A\"", Value::Bool(false));

    // Alternate spellings.
    assert_eval("1 is 1", Value::Bool(true));
    assert_eval("undefined isnt error", Value::Bool(true));
    assert_eval("Missing is undefined", Value::Bool(true));
}

#[test]
fn relational_operators() {
    assert_eval("2 < 3", Value::Bool(true));
    assert_eval("3 >= 3", Value::Bool(true));
    assert_eval("2.5 > 2", Value::Bool(true));
    assert_eval("\"abc\" < \"abd\"", Value::Bool(true));
    assert_eval("\"B\" < \"a\"", Value::Bool(true)); // byte order

    assert_eval("true < false", Value::Error);
    assert_eval("1 < \"2\"", Value::Error);
    assert_eval("{1} < {2}", Value::Error);
}

#[test]
fn conditional_evaluates_one_branch() {
    assert_eval("true ? 1 : 2", Value::Integer(1));
    assert_eval("false ? 1 : 2", Value::Integer(2));
    assert_eval("undefined ? 1 : 2", Value::Undefined);
    assert_eval("error ? 1 : 2", Value::Error);
    assert_eval("1 ? 1 : 2", Value::Error);

    // The unselected branch is never evaluated.
    assert_eval("false ? (1 / 0) : 2", Value::Integer(2));
    assert_eval("2 < 3 ? \"yes\" : \"no\"", Value::String("yes".to_string()));
}

#[test]
fn bitwise_and_shift_operators() {
    assert_eval("5 & 3", Value::Integer(1));
    assert_eval("5 | 2", Value::Integer(7));
    assert_eval("5 ^ 1", Value::Integer(4));
    assert_eval("~0", Value::Integer(-1));
    assert_eval("1 << 3", Value::Integer(8));
    assert_eval("-8 >> 1", Value::Integer(-4));
    assert_eval("-1 >>> 60", Value::Integer(15));

    assert_eval("1 << 64", Value::Error);
    assert_eval("1 << -1", Value::Error);
    assert_eval("1.0 & 2.0", Value::Error);
}

#[test]
fn unary_operators() {
    assert_eval("-3", Value::Integer(-3));
    assert_eval("-3.5", Value::Real(-3.5));
    assert_eval("!true", Value::Bool(false));
    assert_eval("!!true", Value::Bool(true));
    assert_eval("!1", Value::Error);
    assert_eval("-\"x\"", Value::Error);
    assert_eval("-undefined", Value::Undefined);
    assert_eval("-error", Value::Error);
}

#[test]
fn attribute_references_resolve_within_the_record() {
    let record = parse("[ A = 1; B = A + 1; C = b * 10; ]").unwrap();

    assert_eq!(record.evaluate_attribute("B"), Value::Integer(2));
    assert_eq!(record.evaluate_attribute("C"), Value::Integer(20));
    assert_eq!(record.evaluate_attribute("Missing"), Value::Undefined);
}

#[test]
fn reference_cycles_evaluate_to_error() {
    let record = parse("[ A = B; B = A; ]").unwrap();
    assert_eq!(record.evaluate_attribute("A"), Value::Error);

    let own = parse("[ A = A + 1; ]").unwrap();
    assert_eq!(own.evaluate_attribute("A"), Value::Error);
}

#[test]
fn attribute_names_are_case_insensitive() {
    let record = parse("[ Foo = 1; FOO = 2; ]").unwrap();
    assert_eq!(record.len(), 1);
    assert_eq!(record.evaluate_attribute("foo"), Value::Integer(2));
}

#[test]
fn insert_delete_and_ordering() {
    let mut record = parse("[ A = 1; B = 2; C = 3; ]").unwrap();

    record.insert("b", parse_expression_text("20").unwrap());
    let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["A", "b", "C"]); // replaced in place

    assert!(record.delete("a"));
    assert!(!record.delete("a"));
    assert_eq!(record.len(), 2);
    assert_eq!(record.evaluate_attribute("B"), Value::Integer(20));
}

#[test]
fn string_escapes() {
    assert_eval(r#""a\tb""#, Value::String("a\tb".to_string()));
    assert_eval(r#""line\nbreak""#, Value::String("line\nbreak".to_string()));
    assert_eval(r#""quote \" here""#, Value::String("quote \" here".to_string()));

    // An unterminated string never lexes.
    assert!(parse_expression_text("\"open").is_err());
}

#[test]
fn lists_and_nested_records() {
    assert_eval("{1, 2 + 3}",
                Value::List(vec![Value::Integer(1), Value::Integer(5)]));
    assert_eval("{}", Value::List(Vec::new()));

    let record = parse("[ Inner = [ A = 1; ]; ]").unwrap();
    let Value::Record(inner) = record.evaluate_attribute("Inner") else {
        panic!("Inner did not evaluate to a record");
    };
    assert_eq!(inner.evaluate_attribute("A"), Value::Integer(1));
}

#[test]
fn time_literals_and_arithmetic() {
    assert_eval("'2003-01-26' - '2003-01-25'", Value::RelativeTime(86_400));
    assert_eval("'2003-01-25' < '2003-01-26'", Value::Bool(true));
    assert_eval("'1+00:00:00' + '02:00'", Value::RelativeTime(93_600));
    assert_eval("'02:30:15' - '00:00:15'", Value::RelativeTime(9_000));
    assert_eval("-'01:00:00'", Value::RelativeTime(-3_600));
    assert_eval("'3600' == '01:00:00'", Value::Bool(true));

    // The offset is presentation only; the instant is what compares.
    assert_eval("'2003-01-25T09:00:00-06:00' == '2003-01-25T15:00:00Z'",
                Value::Bool(true));
    assert_eval("'2003-01-25T00:00:00Z' + '1+00:00:00' == '2003-01-26'",
                Value::Bool(true));

    // Mixing kinds is an error.
    assert_eval("'2003-01-25' + '2003-01-26'", Value::Error);
    assert_eval("'01:00:00' < '2003-01-25'", Value::Error);
}

#[test]
fn builtin_functions() {
    assert_eval("floor(2.7)", Value::Integer(2));
    assert_eval("floor(-2.1)", Value::Integer(-3));
    assert_eval("ceiling(2.1)", Value::Integer(3));
    assert_eval("round(2.5)", Value::Integer(3));
    assert_eval("round(7)", Value::Integer(7));
    assert_eval("int(2.9)", Value::Integer(2));
    assert_eval("int(\"42\")", Value::Integer(42));
    assert_eval("int(true)", Value::Integer(1));
    assert_eval("real(2)", Value::Real(2.0));
    assert_eval("real(\"2.5\")", Value::Real(2.5));
    assert_eval("string(2)", Value::String("2".to_string()));
    assert_eval("strcat(\"a\", 1, \"b\")", Value::String("a1b".to_string()));
    assert_eval("substr(\"abcdef\", 2)", Value::String("cdef".to_string()));
    assert_eval("substr(\"abcdef\", 1, 3)", Value::String("bcd".to_string()));
    assert_eval("substr(\"abcdef\", -2)", Value::String("ef".to_string()));
    assert_eval("substr(\"abcdef\", 1, -1)", Value::String("bcde".to_string()));
    assert_eval("substr(\"abc\", 10)", Value::String(String::new()));
    assert_eval("toUpper(\"abc\")", Value::String("ABC".to_string()));
    assert_eval("tolower(\"ABC\")", Value::String("abc".to_string()));
    assert_eval("size(\"abc\")", Value::Integer(3));
    assert_eval("size({1, 2, 3})", Value::Integer(3));
}

#[test]
fn classifying_builtins_see_undefined_and_error() {
    assert_eval("isUndefined(undefined)", Value::Bool(true));
    assert_eval("isUndefined(Missing)", Value::Bool(true));
    assert_eval("isUndefined(1)", Value::Bool(false));
    assert_eval("isError(1 / 0)", Value::Bool(true));
    assert_eval("isError(undefined)", Value::Bool(false));
}

#[test]
fn function_call_failures_are_in_band() {
    assert_eval("floor(\"x\")", Value::Error);
    assert_eval("noSuchFunction(1)", Value::Error);
    assert_eval("floor(1, 2)", Value::Error);
    assert_eval("substr(\"abc\")", Value::Error);

    // Ordinary builtins propagate; errors dominate.
    assert_eval("floor(undefined)", Value::Undefined);
    assert_eval("strcat(\"a\", undefined)", Value::Undefined);
    assert_eval("strcat(\"a\", 1 / 0)", Value::Error);
}

#[test]
fn printing_reaches_a_fixpoint() {
    let sources = ["[ A = 1; B = (2 + 3) * 4; ]",
                   "[ S = \"a\\tb\"; L = {1, 2.5, \"x\"}; ]",
                   "[ R = [ Inner = other.Memory >= 10K; ]; ]",
                   "[ Req = my.A < 3 && other.B == \"ok\"; ]",
                   "[ T = '2003-01-25T09:00:00Z'; D = '1+02:00:00'; ]"];

    for source in sources {
        let printed = parse(source).unwrap().to_string();
        let reprinted = parse(&printed).unwrap_or_else(|e| {
                            panic!("Printed form of '{source}' did not re-parse: {e}\n{printed}")
                        })
                        .to_string();
        assert_eq!(printed, reprinted, "printing '{source}'");
    }
}

#[test]
fn parse_errors_carry_positions() {
    assert!(parse("[ A = ; ]").is_err());
    assert!(parse("[ A 1; ]").is_err());
    assert!(parse("[ A = 1 ").is_err());
    assert!(parse("A = 1").is_err());
    assert!(parse("[ A = 1; ] junk").is_err());
    assert!(parse_expression_text("(1 + 2").is_err());
    assert!(parse_expression_text("#").is_err());

    let err = parse("[ A = 1;\n  B @ 2; ]").unwrap_err();
    assert!(err.position() > 0);
}

#[test]
fn comments_are_ignored() {
    let record = parse("[ // line comment\n  A = 1; /* block\n comment */ B = 2; ]").unwrap();
    assert_eq!(record.len(), 2);
    assert_eq!(record.evaluate_attribute("B"), Value::Integer(2));
}

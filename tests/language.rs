use std::collections::HashMap;

use indexmap::IndexMap;
use sieva::{
    ast::Expr,
    compile, compile_with_registry,
    error::{EvalError, RegistryError, SyntaxError},
    interpreter::{
        evaluator::core::Interpreter,
        parser::core::parse_source,
        registry::{FunctionRegistry, RegistryResult, standard::StandardRegistry},
        value::{core::Value, map_key::MapKey},
    },
};

fn eval_with(source: &str, bindings: &HashMap<String, Value>) -> Value {
    compile(source).unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"))
                   .evaluate(bindings)
                   .unwrap_or_else(|e| panic!("Failed to evaluate {source:?}: {e}"))
}

fn eval(source: &str) -> Value {
    eval_with(source, &HashMap::new())
}

fn eval_err(source: &str) -> EvalError {
    match compile(source).unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"))
                         .evaluate(&HashMap::new())
    {
        Ok(value) => panic!("Expected {source:?} to fail, got {value}"),
        Err(error) => error,
    }
}

fn parse_err(source: &str) -> SyntaxError {
    match compile(source) {
        Ok(_) => panic!("Expected {source:?} to fail parsing"),
        Err(error) => error,
    }
}

fn assert_true(source: &str) {
    assert_eq!(eval(source), Value::from(true), "expected {source:?} to be true");
}

fn assert_false(source: &str) {
    assert_eq!(eval(source), Value::from(false), "expected {source:?} to be false");
}

fn int(value: i64) -> Value {
    Value::from(value)
}

fn list(values: Vec<Value>) -> Value {
    Value::from(values)
}

fn map_of(entries: &[(&str, Value)]) -> Value {
    let mut map = IndexMap::new();
    for (key, value) in entries {
        map.insert(MapKey::from(*key), value.clone());
    }
    map.into()
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(eval("1 + 2"), int(3));
    assert_eq!(eval("8 - 5"), int(3));
    assert_eq!(eval("7 * 9"), int(63));
    assert_eq!(eval("7 % 2"), int(1));
    assert_true("2 + 3 * 4 == 14");
    assert_true("(2 + 3) * 4 == 20");
    assert_true("10 - 2 - 3 == 5");
    assert_true("-5 == 0 - 5");
    assert_true("--5 == 5");
}

#[test]
fn division_is_always_non_integral() {
    assert_true("10 / 2 == 5");
    assert_true("type(10 / 2) == \"double\"");
    assert_true("7 / 2 == 3.5");
}

#[test]
fn division_and_modulo_by_zero() {
    assert!(matches!(eval_err("1 / 0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(eval_err("1 % 0"), EvalError::ModuloByZero { .. }));
    assert!(matches!(eval_err("1.0 / 0.0"), EvalError::DivisionByZero { .. }));
}

#[test]
fn numeric_forms_and_tags() {
    assert_true("type(1) == \"int\"");
    assert_true("type(1u) == \"uint\"");
    assert_true("type(1.5) == \"double\"");
    assert_true("type(1e3) == \"double\"");
    assert_true("0xFF == 255");
    assert_true("type(0xffu) == \"uint\"");
    assert_true("1 == 1.0");
    assert_true("1 == 1u");
    // Arithmetic on two unsigned values stays unsigned until it goes
    // negative.
    assert_true("type(1u + 2u) == \"uint\"");
    assert_true("type(1u - 2u) == \"int\"");
    assert_true("1u - 2u == -1");
    assert_true("type(2u * 3) == \"int\"");
    assert_true("type(-(1u)) == \"int\"");
}

#[test]
fn string_concatenation_stringifies_the_other_operand() {
    assert_eq!(eval("\"ab\" + \"cd\""), Value::from("abcd"));
    assert_eq!(eval("\"a\" + 1"), Value::from("a1"));
    assert_eq!(eval("1 + \"a\""), Value::from("1a"));
    assert_eq!(eval("\"ok: \" + true"), Value::from("ok: true"));
}

#[test]
fn list_concatenation_and_repetition() {
    assert_true("[1, 2] + [3] == [1, 2, 3]");
    assert_true("\"ab\" * 3 == \"ababab\"");
    assert_true("2 * \"ab\" == \"abab\"");
    assert_true("[1, 2] * 2 == [1, 2, 1, 2]");
    assert_true("\"ab\" * 0 == \"\"");
    assert!(matches!(eval_err("\"ab\" * -1"), EvalError::TypeMismatch { .. }));
}

#[test]
fn mismatched_arithmetic_operands_raise() {
    assert!(matches!(eval_err("true + 1"), EvalError::TypeMismatch { .. }));
    assert!(matches!(eval_err("\"a\" - 1"), EvalError::TypeMismatch { .. }));
    assert!(matches!(eval_err("[1] * [2]"), EvalError::TypeMismatch { .. }));
    assert!(matches!(eval_err("b\"a\" + b\"b\""), EvalError::TypeMismatch { .. }));
}

#[test]
fn comparisons_use_one_total_order() {
    assert_true("1 < 2");
    assert_true("1 < 1.5");
    assert_true("2.5 >= 2.5");
    assert_true("\"a\" < \"b\"");
    assert_true("false < true");
    assert_true("null < 0");
    assert_true("null <= null");
    assert_true("[1, 2] < [1, 3]");
    assert_true("[1, 2] < [1, 2, 3]");
    assert_false("[1, 3] < [1, 2]");
    assert!(matches!(eval_err("1 < \"a\""), EvalError::NotComparable { .. }));
    assert!(matches!(eval_err("true < 1"), EvalError::NotComparable { .. }));
    // Relational operators left-fold and do not chain.
    assert!(matches!(eval_err("1 < 2 < 3"), EvalError::NotComparable { .. }));
}

#[test]
fn equality_is_deep_and_never_raises() {
    assert_true("[1, 2, 3] == [1, 2, 3]");
    assert_false("[1, 2] == [1, 2, 3]");
    assert_true("{\"a\": 1, \"b\": 2} == {\"b\": 2, \"a\": 1}");
    assert_true("{\"a\": [1, 2]} == {\"a\": [1, 2]}");
    assert_false("{\"a\": 1} == {\"a\": 2}");
    assert_true("1 != \"1\"");
    assert_false("b\"a\" == \"a\"");
    assert_false("{a: 1} == {\"a\": 1}");
    assert_true("{a: 1} == {a: 1}");
    assert_false("Person{a: 1} == Other{a: 1}");
    // Numerically-equal map keys are one key.
    assert_true("{1: \"x\"} == {1.0: \"x\"}");
    assert_true("{1: \"x\"} == {1u: \"x\"}");
}

#[test]
fn membership() {
    assert_true("2 in [1, 2, 3]");
    assert_false("4 in [1, 2, 3]");
    assert_true("[1, 2] in [[1, 2], [3]]");
    assert_true("\"a\" in {\"a\": 1}");
    assert_false("\"b\" in {\"a\": 1}");
    assert_true("1 in {1: \"x\"}");
    assert_true("\"a\" in {a: 1}");
    assert_true("\"ell\" in \"hello\"");
    assert_false("\"z\" in \"hello\"");
    assert!(matches!(eval_err("1 in \"hello\""), EvalError::TypeMismatch { .. }));
    assert!(matches!(eval_err("1 in 2"), EvalError::TypeMismatch { .. }));
}

#[test]
fn logical_operators_short_circuit() {
    assert_false("false && 1 / 0 == 0");
    assert_true("true || 1 / 0 == 0");
    assert_true("true && true");
    assert_false("true && false");
    assert_true("false || true");
    assert!(matches!(eval_err("1 && true"), EvalError::TypeMismatch { .. }));
    assert!(matches!(eval_err("true && 1"), EvalError::TypeMismatch { .. }));
}

#[test]
fn conditionals_evaluate_only_the_taken_branch() {
    assert_eq!(eval("true ? 1 : 1 / 0"), int(1));
    assert_eq!(eval("false ? 1 / 0 : 2"), int(2));
    assert_eq!(eval("false ? 1 : true ? 2 : 3"), int(2));
    assert!(matches!(eval_err("1 ? 2 : 3"), EvalError::TypeMismatch { .. }));
}

#[test]
fn unary_operators() {
    assert_true("!false");
    assert_true("!(1 == 2)");
    assert_eq!(eval("-(3 + 4)"), int(-7));
    assert!(matches!(eval_err("!1"), EvalError::TypeMismatch { .. }));
    assert!(matches!(eval_err("-\"a\""), EvalError::TypeMismatch { .. }));
}

#[test]
fn string_literal_forms() {
    assert_true("\"abc\" == 'abc'");
    assert_true("size(\"\") == 0");
    // Raw strings leave escapes untouched.
    assert_true(r#"r"\n" == "\\n""#);
    assert_true(r#"size(r"\n") == 2"#);
    // Triple-quoted content spans newlines.
    assert_true("size(\"\"\"ab\ncd\"\"\") == 5");
    assert_true("'''a\"b''' == 'a\"b'");
    assert_true("r'''\\d+''' == r\"\\d+\"");
    // Bytes literals decode escapes and carry the bytes tag.
    assert_true("b\"\\x41\" == b\"A\"");
    assert_true("type(b\"ab\") == \"bytes\"");
}

#[test]
fn escape_decoding_round_trips() {
    assert_true(r#""\x41\x42" == "AB""#);
    assert_true(r#""\u0041" == "A""#);
    assert_true(r#""\U00000041" == "A""#);
    assert_true(r#""\101" == "A""#);
    assert_true(r#"size("\n\t\\") == 3"#);
    assert_true(r#""\'" == "'""#);
    // Unrecognized sequences pass through literally.
    assert_true(r#"size("\q") == 2"#);
}

#[test]
fn unterminated_strings_are_positioned_failures() {
    assert!(matches!(parse_err("\"abc"), SyntaxError::UnterminatedString { .. }));
    assert!(matches!(parse_err("'''abc"), SyntaxError::UnterminatedString { .. }));
    assert!(matches!(parse_err("\"ab\ncd\""), SyntaxError::UnterminatedString { .. }));
}

#[test]
fn indexing() {
    assert_eq!(eval("[10, 20, 30][1]"), int(20));
    // A non-integral index truncates toward zero.
    assert_eq!(eval("[10, 20, 30][1.9]"), int(20));
    assert_eq!(eval("\"hello\"[1]"), Value::from("e"));
    assert_eq!(eval("{\"a\": 1}[\"a\"]"), int(1));
    assert_eq!(eval("{a: 1}[\"a\"]"), int(1));
    assert_eq!(eval("{1: \"x\"}[1]"), Value::from("x"));

    assert!(matches!(eval_err("[1, 2, 3][3]"),
                     EvalError::IndexOutOfBounds { index: 3, length: 3, .. }));
    assert!(matches!(eval_err("[1][-1]"), EvalError::IndexOutOfBounds { .. }));
    assert!(matches!(eval_err("\"ab\"[2]"), EvalError::IndexOutOfBounds { .. }));
    assert!(matches!(eval_err("{\"a\": 1}[\"b\"]"), EvalError::UnknownKey { .. }));
    assert!(matches!(eval_err("{a: 1}[1]"), EvalError::TypeMismatch { .. }));
    assert!(matches!(eval_err("true[0]"), EvalError::TypeMismatch { .. }));
}

#[test]
fn selection_and_presence_tests() {
    let mut bindings = HashMap::new();
    bindings.insert("user".to_owned(),
                    map_of(&[("name", Value::from("ada")),
                             ("groups", list(vec![Value::from("admin")]))]));

    assert_eq!(eval_with("user.name", &bindings), Value::from("ada"));
    assert_eq!(eval_with(".user.name", &bindings), Value::from("ada"));
    assert_eq!(eval_with("\"admin\" in user.groups", &bindings), Value::from(true));

    assert_eq!(eval_with("has(user.name)", &bindings), Value::from(true));
    assert_eq!(eval_with("has(user.email)", &bindings), Value::from(false));
    assert_eq!(eval_with("has(user)", &bindings), Value::from(true));
    assert_eq!(eval_with("has(missing)", &bindings), Value::from(false));
    assert_eq!(eval_with("has(Person{a: 1}.a)", &bindings), Value::from(true));
    assert_eq!(eval_with("has(Person{a: 1}.b)", &bindings), Value::from(false));

    assert!(matches!(compile("user.email")
                         .unwrap()
                         .evaluate(&bindings)
                         .expect_err("missing field"),
                     EvalError::UnknownField { .. }));
    assert!(matches!(eval_err("missing.field"), EvalError::UnknownVariable { .. }));
    assert!(matches!(eval_err("null.field"), EvalError::TypeMismatch { .. }));
    assert!(matches!(eval_err("[1].field"), EvalError::TypeMismatch { .. }));

    // has() requires a selection argument.
    assert!(compile("has(1 + 2)").is_err());
    assert!(compile("has()").is_err());
}

#[test]
fn struct_and_map_literal_disambiguation() {
    assert!(matches!(parse_source("{\"a\": 1}").unwrap(), Expr::Map { .. }));
    assert!(matches!(parse_source("{}").unwrap(), Expr::Map { .. }));
    assert!(matches!(parse_source("{a: 1}").unwrap(),
                     Expr::Struct { type_name: None, .. }));

    match parse_source("Person{a: 1}").unwrap() {
        Expr::Struct { type_name, fields, .. } => {
            assert_eq!(type_name.as_deref(), Some("Person"));
            assert_eq!(fields.len(), 1);
        },
        other => panic!("expected a struct literal, got {other:?}"),
    }

    match parse_source("a.b.C{x: 1, y: 2}").unwrap() {
        Expr::Struct { type_name, fields, .. } => {
            assert_eq!(type_name.as_deref(), Some("a.b.C"));
            assert_eq!(fields.len(), 2);
        },
        other => panic!("expected a qualified struct literal, got {other:?}"),
    }

    match parse_source("Person{}").unwrap() {
        Expr::Struct { type_name, fields, .. } => {
            assert_eq!(type_name.as_deref(), Some("Person"));
            assert!(fields.is_empty());
        },
        other => panic!("expected an empty struct literal, got {other:?}"),
    }

    // A dotted chain that does not end in `{` stays member access.
    assert!(matches!(parse_source("a.b.c").unwrap(), Expr::Select { .. }));
}

#[test]
fn trailing_commas_in_collection_literals() {
    assert_true("[1, 2,] == [1, 2]");
    assert_true("{\"a\": 1,} == {\"a\": 1}");
    assert_true("{a: 1,} == {a: 1}");
    assert_true("Person{a: 1,}.a == 1");
    // Argument lists do not take trailing commas.
    assert!(compile("size(\"a\",)").is_err());
}

#[test]
fn duplicate_literal_keys_raise() {
    assert!(matches!(eval_err("{\"a\": 1, \"a\": 2}"), EvalError::DuplicateKey { .. }));
    assert!(matches!(eval_err("{a: 1, a: 2}"), EvalError::DuplicateKey { .. }));
    assert!(matches!(eval_err("{1: \"x\", 1.0: \"y\"}"), EvalError::DuplicateKey { .. }));
}

#[test]
fn macro_map_filter() {
    assert_true("[1, 2, 3].map(x, x * 2) == [2, 4, 6]");
    assert_true("[].map(x, x) == []");
    assert_true("[1, 2, 3, 4].filter(x, x % 2 == 0) == [2, 4]");
    // filter keeps only elements whose predicate is exactly `true`.
    assert_true("[1, true, 2].filter(x, x) == [true]");
}

#[test]
fn macro_all_exists() {
    assert_true("[1, 2, 3].all(x, x > 0)");
    assert_false("[1, 2, 3].all(x, x > 1)");
    assert_true("[].all(x, x > 0)");
    // A non-boolean predicate result counts as non-true and short-circuits.
    assert_false("[1].all(x, x)");

    assert_true("[1, 2, 3].exists(x, x == 2)");
    assert_false("[1, 2, 3].exists(x, x == 4)");
    assert_false("[].exists(x, x > 0)");
}

#[test]
fn macro_exists_one() {
    assert_false("[].existsOne(x, x > 0)");
    assert_true("[1, 2, 3].existsOne(x, x == 2)");
    assert_false("[1, 2, 3].existsOne(x, x > 1)");
}

#[test]
fn macro_short_circuits_do_not_reach_later_elements() {
    // The failing element short-circuits before the division by zero.
    assert_false("[2, 0].all(x, 1 / x == 1)");
    assert_true("[1, 0].exists(x, 1 / x == 1)");
    // Without a short circuit, the error propagates out of the macro.
    assert!(matches!(eval_err("[0, 1].exists(x, 1 / x == 1)"),
                     EvalError::DivisionByZero { .. }));
}

#[test]
fn malformed_macro_calls() {
    assert!(matches!(eval_err("[1].map(1 + 1, x)"), EvalError::MalformedMacro { .. }));
    assert!(matches!(eval_err("[1].map(x)"), EvalError::MalformedMacro { .. }));
    assert!(matches!(eval_err("[1].map(x, x, x)"), EvalError::MalformedMacro { .. }));
    assert!(matches!(eval_err("\"abc\".map(x, x)"), EvalError::TypeMismatch { .. }));
    assert!(matches!(eval_err("{\"a\": 1}.filter(x, true)"), EvalError::TypeMismatch { .. }));
}

#[test]
fn macro_variable_scoping_restores_outer_bindings() {
    let registry = StandardRegistry;
    let mut interpreter = Interpreter::new(&registry);
    interpreter.define("x", int(100));

    let ast = parse_source("[1, 2, 3].map(x, x * 2)").unwrap();
    assert_eq!(interpreter.evaluate(&ast).unwrap(),
               list(vec![int(2), int(4), int(6)]));

    let check = parse_source("x").unwrap();
    assert_eq!(interpreter.evaluate(&check).unwrap(), int(100));
}

#[test]
fn macro_variable_scoping_restores_on_error() {
    let registry = StandardRegistry;
    let mut interpreter = Interpreter::new(&registry);
    interpreter.define("x", int(100));

    // The body raises partway through the iteration.
    let ast = parse_source("[1, 2, 3].map(x, 1 / (2 - x))").unwrap();
    assert!(matches!(interpreter.evaluate(&ast),
                     Err(EvalError::DivisionByZero { .. })));

    let check = parse_source("x").unwrap();
    assert_eq!(interpreter.evaluate(&check).unwrap(), int(100));
}

#[test]
fn macro_scoping_when_variable_was_unbound() {
    let registry = StandardRegistry;
    let mut interpreter = Interpreter::new(&registry);

    let ast = parse_source("[1, 2].map(y, y)").unwrap();
    interpreter.evaluate(&ast).unwrap();

    let check = parse_source("y").unwrap();
    assert!(matches!(interpreter.evaluate(&check),
                     Err(EvalError::UnknownVariable { .. })));
}

#[test]
fn comprehension_fold_is_evaluable_programmatically() {
    // Sum of the elements greater than one: the generalized fold the five
    // macros specialize, reachable only through AST construction.
    let comprehension =
        Expr::Comprehension { var:       "x".to_owned(),
                              range:     Box::new(parse_source("[1, 2, 3]").unwrap()),
                              accu:      "acc".to_owned(),
                              init:      Box::new(parse_source("0").unwrap()),
                              condition: Box::new(parse_source("x > 1").unwrap()),
                              step:      Box::new(parse_source("acc + x").unwrap()),
                              result:    Box::new(parse_source("acc").unwrap()),
                              line:      1, };

    let registry = StandardRegistry;
    let mut interpreter = Interpreter::new(&registry);
    assert_eq!(interpreter.evaluate(&comprehension).unwrap(), int(5));

    // Both the loop variable and the accumulator are restored (unbound).
    for name in ["x", "acc"] {
        let check = parse_source(name).unwrap();
        assert!(matches!(interpreter.evaluate(&check),
                         Err(EvalError::UnknownVariable { .. })));
    }
}

#[test]
fn parsing_is_deterministic() {
    let source = "a.b[0] < 3 ? x.map(i, i * 2) : Person{name: \"x\",}";
    assert_eq!(parse_source(source).unwrap(), parse_source(source).unwrap());
}

#[test]
fn macro_classification_is_lexical() {
    // Method position with a macro name: flagged at parse time.
    match parse_source("xs.map(x, x)").unwrap() {
        Expr::Call { is_macro, .. } => assert!(is_macro),
        other => panic!("expected a call, got {other:?}"),
    }
    // Free-function position: not a macro.
    match parse_source("map(x, x)").unwrap() {
        Expr::Call { is_macro, .. } => assert!(!is_macro),
        other => panic!("expected a call, got {other:?}"),
    }
    // Argument shape is not validated at parse time.
    assert!(parse_source("xs.map(1, 2, 3)").is_ok());
}

#[test]
fn syntax_errors_carry_positions() {
    match parse_err("1 +\n@") {
        SyntaxError::UnexpectedCharacter { line, column } => {
            assert_eq!((line, column), (2, 1));
        },
        other => panic!("expected an unexpected-character error, got {other:?}"),
    }

    // CRLF collapses to one newline.
    match parse_err("1 +\r\n@") {
        SyntaxError::UnexpectedCharacter { line, column } => {
            assert_eq!((line, column), (2, 1));
        },
        other => panic!("expected an unexpected-character error, got {other:?}"),
    }

    match parse_err("1 2") {
        SyntaxError::TrailingTokens { line, column, .. } => {
            assert_eq!((line, column), (1, 3));
        },
        other => panic!("expected a trailing-tokens error, got {other:?}"),
    }

    assert!(matches!(parse_err("(1 + 2"), SyntaxError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_err("1 +"), SyntaxError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_err("[1, ]2"), SyntaxError::TrailingTokens { .. }));
    assert!(matches!(parse_err("99999999999999999999999"),
                     SyntaxError::NumberOutOfRange { .. }));
}

#[test]
fn registry_size_and_type() {
    assert_true("size(\"hello\") == 5");
    assert_true("size([1, 2, 3]) == 3");
    assert_true("size({\"a\": 1}) == 1");
    assert_true("size(null) == 0");
    assert_true("\"abc\".size() == 3");
    assert_true("[1].size() == 1");

    assert_true("type(null) == \"null\"");
    assert_true("type(true) == \"bool\"");
    assert_true("type(\"s\") == \"string\"");
    assert_true("type([]) == \"list\"");
    assert_true("type({}) == \"map\"");
    assert_true("type({a: 1}) == \"struct\"");
    assert_true("type(Person{}) == \"Person\"");
}

#[test]
fn registry_conversions() {
    assert_true("int(\"42\") == 42");
    assert_true("int(3.9) == 3");
    assert_true("int(-3.9) == -3");
    assert_true("type(int(1u)) == \"int\"");
    assert_true("uint(3) == 3");
    assert_true("type(uint(3)) == \"uint\"");
    assert_true("double(1) == 1");
    assert_true("type(double(1)) == \"double\"");
    assert_true("string(42) == \"42\"");
    assert_true("string(true) == \"true\"");
    assert_true("bool(\"true\")");
    assert_true("!bool(\"false\")");

    // uint() rejecting a negative input is the only enforcement of
    // unsignedness.
    assert!(matches!(eval_err("uint(-1)"),
                     EvalError::Registry { error: RegistryError::InvalidArguments { .. }, .. }));
    assert!(matches!(eval_err("int(\"abc\")"),
                     EvalError::Registry { error: RegistryError::InvalidArguments { .. }, .. }));
}

#[test]
fn registry_matches_is_a_search() {
    assert_true("matches(\"hello world\", \"wor.d\")");
    // Search, not full-match: a partial hit is enough.
    assert_true("matches(\"abc\", \"b\")");
    assert_false("matches(\"abc\", \"^b\")");
    assert_true("\"sieva-01\".matches(\"[a-z]+-[0-9]+\")");
    assert!(matches!(eval_err("matches(\"a\", \"[\")"),
                     EvalError::Registry { error: RegistryError::InvalidArguments { .. }, .. }));
}

#[test]
fn registry_max_min() {
    assert_true("max(1, 2.5, 2) == 2.5");
    assert_true("min(3, 1, 2) == 1");
    assert_true("max(\"a\", \"c\", \"b\") == \"c\"");
    assert_true("max(7) == 7");
    assert_true("min(null, 1) == null");
    assert!(matches!(eval_err("max(1, \"a\")"),
                     EvalError::Registry { error: RegistryError::InvalidArguments { .. }, .. }));
}

#[test]
fn registry_string_utilities() {
    assert_true("\"hello\".contains(\"ell\")");
    assert_false("\"hello\".contains(\"xyz\")");
    assert_true("\"hello\".startsWith(\"he\")");
    assert_true("\"hello\".endsWith(\"lo\")");
    assert_true("\"Policy\".lower() == \"policy\"");
    assert_true("\"Policy\".upper() == \"POLICY\"");
    assert_true("\"  a  \".trim() == \"a\"");
    assert_true("\"a-b-c\".replace(\"-\", \"_\") == \"a_b_c\"");
    assert_true("\"a,b,c\".split(\",\") == [\"a\", \"b\", \"c\"]");
    assert_true("\"abc\".split(\"x\") == [\"abc\"]");
}

#[test]
fn registry_unknown_names_and_arity() {
    assert!(matches!(eval_err("nosuch(1)"),
                     EvalError::Registry { error: RegistryError::UnknownFunction { .. }, .. }));
    assert!(matches!(eval_err("\"s\".nosuch()"),
                     EvalError::Registry { error: RegistryError::UnknownMethod { .. }, .. }));
    assert!(matches!(eval_err("size()"),
                     EvalError::Registry { error: RegistryError::InvalidArguments { .. }, .. }));
    assert!(matches!(eval_err("max()"),
                     EvalError::Registry { error: RegistryError::InvalidArguments { .. }, .. }));
    assert!(matches!(eval_err("\"s\".contains()"),
                     EvalError::Registry { error: RegistryError::InvalidArguments { .. }, .. }));
}

/// A registry extension: new names resolve here, everything else delegates
/// to the wrapped base implementation.
struct Extended(StandardRegistry);

impl FunctionRegistry for Extended {
    fn call_function(&self, name: &str, args: &[Value]) -> RegistryResult<Value> {
        match name {
            "answer" => Ok(int(42)),
            _ => self.0.call_function(name, args),
        }
    }

    fn call_method(&self, target: &Value, name: &str, args: &[Value]) -> RegistryResult<Value> {
        self.0.call_method(target, name, args)
    }
}

#[test]
fn custom_registries_compose_by_wrapping() {
    use std::sync::Arc;

    let program = compile_with_registry("answer() + size(\"ab\")", Arc::new(Extended(StandardRegistry)))
        .unwrap();
    assert_eq!(program.evaluate(&HashMap::new()).unwrap(), int(44));
}

#[test]
fn programs_are_reusable_across_bindings() {
    let program = compile("x + 1").unwrap();

    for value in [1i64, 10, 100] {
        let mut bindings = HashMap::new();
        bindings.insert("x".to_owned(), int(value));
        assert_eq!(program.evaluate(&bindings).unwrap(), int(value + 1));
    }

    // Bindings are per evaluation; nothing leaks between calls.
    assert!(program.evaluate(&HashMap::new()).is_err());
}

#[test]
fn undefined_variables_raise() {
    assert!(matches!(eval_err("nope"), EvalError::UnknownVariable { .. }));
    assert!(matches!(eval_err("1 + nope"), EvalError::UnknownVariable { .. }));
}

#[test]
fn comments_and_whitespace() {
    assert_eq!(eval("1 + // comment\n2"), int(3));
    assert_eq!(eval("\t 1 \r\n + 2 "), int(3));
}

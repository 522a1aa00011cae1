//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, run_test_u8, run_test_with_checker, TestPlan, TestPlanU8};
use std::fs;

fn wordexp_test(args: &[&str], stdin_data: &str, expected_out: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("wordexp"),
        args: str_args,
        stdin_data: String::from(stdin_data),
        expected_out: String::from(expected_out),
        expected_err: String::from(""),
        expected_exit_code: 0,
    });
}

fn wordexp_error_test(
    args: &[&str],
    stdin_data: &str,
    expected_out: &str,
    expected_err: &str,
    expected_exit_code: i32,
) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("wordexp"),
        args: str_args,
        stdin_data: String::from(stdin_data),
        expected_out: String::from(expected_out),
        expected_err: String::from(expected_err),
        expected_exit_code,
    });
}

#[test]
fn test_wordexp_operands() {
    wordexp_test(&["a  b", "'c d'"], "", "a\nb\nc d\n");
    wordexp_test(&["a\\ b"], "", "a b\n");
    wordexp_test(&["\"a\\\"b\""], "", "a\"b\n");
    wordexp_test(&["$HOME ~ *"], "", "$HOME\n~\n*\n");
}

#[test]
fn test_wordexp_empty_words() {
    wordexp_test(&["\"\""], "", "\n");
    wordexp_test(&["''", "   "], "", "\n");
    wordexp_test(&[""], "", "");
}

#[test]
fn test_wordexp_empty_quote_next_to_text() {
    wordexp_test(&["\"\"abc"], "", "\nabc\n");
    wordexp_test(&["''\"\""], "", "\n\n");
    wordexp_test(&["a''"], "", "a\n");
    wordexp_test(&["-c", "'' ''x"], "", "3\n");
}

#[test]
fn test_wordexp_stdin_lines() {
    wordexp_test(&[], "one two\n'three four'\n", "one\ntwo\nthree four\n");
    wordexp_test(&[], "last line without newline", "last\nline\nwithout\nnewline\n");
    wordexp_test(&[], "", "");
}

#[test]
fn test_wordexp_file() {
    let path = std::env::temp_dir().join(format!("wordexp-test-{}", std::process::id()));
    fs::write(&path, "x 'y z'\n\"w\"\n").unwrap();

    wordexp_test(&["-f", path.to_str().unwrap()], "ignored", "x\ny z\nw\n");

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_wordexp_null() {
    run_test_u8(TestPlanU8 {
        cmd: String::from("wordexp"),
        args: vec![String::from("-z"), String::from("a b\nc")],
        stdin_data: Vec::new(),
        expected_out: b"a\0b\nc\0".to_vec(),
        expected_err: Vec::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_wordexp_count() {
    wordexp_test(&["-c", "a b c", "", "'x y'"], "", "3\n0\n1\n");
    wordexp_test(&["--count", "-a", "a", "b c"], "", "3\n");
}

#[test]
fn test_wordexp_quote() {
    wordexp_test(&["-q", "\"it's\" here", "x"], "", "'it'\\''s' 'here'\n'x'\n");
    wordexp_test(&["-q", "\"\""], "", "''\n");
}

#[test]
fn test_wordexp_quote_null() {
    run_test_u8(TestPlanU8 {
        cmd: String::from("wordexp"),
        args: vec![
            String::from("-q"),
            String::from("-z"),
            String::from("a b"),
            String::from("c"),
        ],
        stdin_data: Vec::new(),
        expected_out: b"'a' 'b'\0'c'\0".to_vec(),
        expected_err: Vec::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_wordexp_append_and_offs() {
    wordexp_test(&["-a", "a b", "c"], "", "a\nb\nc\n");
    wordexp_test(&["-a", "-o", "2", "a b", "c"], "", "\n\na\nb\nc\n");
    wordexp_test(&["-o", "1", "x", "y z"], "", "\nx\n\ny\nz\n");
    wordexp_test(&["-c", "-o", "3", "x"], "", "1\n");
}

#[test]
fn test_wordexp_syntax_errors() {
    wordexp_error_test(
        &["ok", "\"open"],
        "",
        "ok\n",
        "wordexp: argument 2: bad syntax: unterminated double quote at offset 0\n",
        2,
    );
    wordexp_error_test(
        &["x 'y"],
        "",
        "",
        "wordexp: argument 1: bad syntax: unterminated single quote at offset 2\n",
        2,
    );
    wordexp_error_test(
        &[],
        "fine\na\\\nnever\n",
        "fine\n",
        "wordexp: line 2: bad syntax: trailing backslash at offset 1\n",
        2,
    );
}

#[test]
fn test_wordexp_append_error_prints_nothing() {
    wordexp_error_test(
        &["-a", "a b", "'c"],
        "",
        "",
        "wordexp: argument 2: bad syntax: unterminated single quote at offset 0\n",
        2,
    );
}

#[test]
fn test_wordexp_limits() {
    wordexp_error_test(
        &["--max-word-len", "3", "abc", "abcd"],
        "",
        "abc\n",
        "wordexp: argument 2: out of memory at offset 3\n",
        4,
    );
    wordexp_error_test(
        &["--max-words", "2", "a b c"],
        "",
        "",
        "wordexp: argument 1: out of memory at offset 5\n",
        4,
    );
    wordexp_test(&["--max-words", "2", "a b", "c d"], "", "a\nb\nc\nd\n");
}

#[test]
fn test_wordexp_missing_file() {
    run_test_with_checker(
        TestPlan {
            cmd: String::from("wordexp"),
            args: vec![String::from("-f"), String::from("/nonexistent/wordexp/input")],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 1,
        },
        |plan, output| {
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
            assert!(output.stdout.is_empty());
            assert!(String::from_utf8_lossy(&output.stderr).starts_with("wordexp: "));
        },
    );
}

#[test]
fn test_wordexp_conflicting_options() {
    run_test_with_checker(
        TestPlan {
            cmd: String::from("wordexp"),
            args: vec![String::from("-q"), String::from("-c"), String::from("x")],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 2,
        },
        |plan, output| {
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
            assert!(!output.stderr.is_empty());
        },
    );
}

use std::process::{
    Command,
    Output
};

fn tangentx(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tangentx"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

fn fields(line: &str) -> Vec<f64> {
    line.split_whitespace().map(|f| f.parse().unwrap()).collect()
}

#[test]
fn square_at_two_matches_reference_table() {
    let output = tangentx(&["1", "0", "0", "2"]);
    assert_eq!(output.status.code(), Some(0));

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2 + 1000);
    assert_eq!(lines[0], "  x + h      approximation    f(x + h)     error");
    assert_eq!(lines[1], "-".repeat(48));
    assert_eq!(lines[2], "  2.000              4.000       4.000     0.000");
    assert_eq!(fields(&lines[1001]), vec![2.999, 9.992, 8.994, -0.998]);

    for line in &lines[2..] {
        assert_eq!(line.len(), 48, "unexpected width: '{}'", line);
    }
}

#[test]
fn error_column_is_exact_minus_approximation() {
    let output = tangentx(&["-2", "3", "1", "0.5"]);
    assert_eq!(output.status.code(), Some(0));
    for line in &stdout_lines(&output)[2..] {
        let row = fields(line);
        assert!((row[3] - (row[2] - row[1])).abs() <= 0.002, "{}", line);
    }
}

#[test]
fn too_few_arguments_exit_with_one() {
    let output = tangentx(&["1", "0", "0"]);
    assert_eq!(output.status.code(), Some(1));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Invocation:"));
}

#[test]
fn too_many_arguments_exit_with_one() {
    let output = tangentx(&["1", "0", "0", "2", "7"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout_lines(&output).iter().any(|l| l.contains("approximation")));
}

#[test]
fn zero_leading_coefficient_exits_with_two() {
    let output = tangentx(&["0", "1", "1", "1"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout_lines(&output), vec!["a must not be zero!".to_owned()]);
}

#[test]
fn malformed_leading_coefficient_reads_as_zero() {
    let output = tangentx(&["abc", "1", "1", "1"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn negative_arguments_are_accepted() {
    let output = tangentx(&["-1", "-2", "-3", "-4"]);
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1002);
    // f(-4) = -16 + 8 - 3
    assert_eq!(fields(&lines[2]), vec![-4.0, -11.0, -11.0, 0.0]);
}

#[test]
fn steps_option_limits_row_count() {
    let output = tangentx(&["--steps", "10", "--step-size", "0.1", "1", "0", "0", "0"]);
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 12);
    assert_eq!(fields(&lines[11])[0], 0.9);
}

#[test]
fn hyphenated_anchor_points_are_read_as_numbers() {
    for (x, first_position) in [("-.5", "-0.500"), ("-1.5x", "-1.500"), ("-0x1p1", "-2.000")] {
        let output = tangentx(&["1", "0", "0", x]);
        assert_eq!(output.status.code(), Some(0), "x = {}", x);
        let lines = stdout_lines(&output);
        assert_eq!(lines.len(), 1002, "x = {}", x);
        assert_eq!(lines[2][0..7].trim_start(), first_position);
    }
}

#[test]
fn infinite_anchor_point_still_prints_every_row() {
    let output = tangentx(&["1", "0", "0", "-inf"]);
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1002);
    // h = 0: f(-inf) + 0·f'(-inf) = inf + nan
    assert_eq!(lines[2].split_whitespace().collect::<Vec<&str>>()[0], "-inf");
    assert!(lines[2].contains("nan"));
    assert!(!lines[2].contains("NaN"));
}

#[test]
fn options_can_follow_the_four_values() {
    let output = tangentx(&["1", "0", "0", "2", "--steps", "3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output).len(), 5);
}

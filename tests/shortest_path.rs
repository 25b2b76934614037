use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

fn shortest_path_cmd() -> Command {
    Command::cargo_bin("shortest_path").unwrap()
}

#[test]
fn output_path_from_file() {
    let mut cmd = shortest_path_cmd();
    cmd.arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::starts_with("0 0\n0 1\n0 2\n0 3\n0 4\n1 4\n2 4\n"))
        .stdout(str::ends_with("4 3\n4 4\n.\n"));
}

#[test]
fn output_path_from_stdin() {
    let mut cmd = shortest_path_cmd();
    cmd.write_stdin("3 3\n1 1 1\n1 1 1\n1 1 1\n0 0\n2 2\n");

    cmd.assert()
        .success()
        .stdout(str::diff("0 0\n1 0\n2 0\n2 1\n2 2\n.\n"));
}

#[test]
fn output_single_cell_path() {
    let mut cmd = shortest_path_cmd();
    cmd.write_stdin("1 1\n5\n0 0\n0 0\n");

    cmd.assert().success().stdout(str::diff("0 0\n.\n"));
}

#[test]
fn fail_without_path() {
    let mut cmd = shortest_path_cmd();
    cmd.write_stdin("3 3\n1 1 1\n0 0 0\n1 1 1\n0 0\n2 0\n");

    cmd.assert()
        .failure()
        .stdout(str::is_empty())
        .stderr(str::contains("There's no path from (0, 0) to (2, 0)."));
}

#[test]
fn fail_on_start_at_wall() {
    let mut cmd = shortest_path_cmd();
    cmd.write_stdin("2 2\n0 1\n1 1\n0 0\n1 1\n");

    cmd.assert()
        .failure()
        .stdout(str::is_empty())
        .stderr(str::contains("start point (0, 0)"));
}

#[test]
fn fail_on_wrong_row_length() {
    let mut cmd = shortest_path_cmd();
    cmd.write_stdin("2 3\n1 1 1\n1 1\n0 0\n1 1\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 3 cell(s) in row 2, given 2."));
}

#[test]
fn fail_on_cell_value_out_of_range() {
    let mut cmd = shortest_path_cmd();
    cmd.write_stdin("1 2\n1 10\n0 0\n0 1\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("Cell value(10) in row 1").and(str::contains("standard input")));
}

#[test]
fn fail_on_missing_file() {
    let mut cmd = shortest_path_cmd();
    cmd.arg("no_such_maze.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file(no_such_maze.txt)."));
}

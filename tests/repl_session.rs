//! End-to-end tests driving the taskline binary over piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a command with an isolated HOME so user config never leaks in.
fn taskline(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskline").unwrap();
    cmd.env("HOME", home.path()).env_remove("TASKLINE_CONFIG");
    cmd
}

#[test]
fn test_scripted_session_add_list_mark() {
    let home = TempDir::new().unwrap();
    taskline(&home)
        .write_stdin(
            "todo read book\n\
             deadline submit report /by 2019-10-15\n\
             event exam /at 2019-10-15 1400-1600\n\
             list\n\
             mark 2\n\
             bye\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! I'm Taskline."))
        .stdout(predicate::str::contains("Got it. I've added this task:"))
        .stdout(predicate::str::contains("Now you have 3 tasks in the list."))
        .stdout(predicate::str::contains("1.[T][ ] read book"))
        .stdout(predicate::str::contains(
            "2.[D][ ] submit report (by: Oct 15 2019)",
        ))
        .stdout(predicate::str::contains(
            "3.[E][ ] exam (at: Oct 15 2019 1400-1600)",
        ))
        .stdout(predicate::str::contains("Nice! I've marked this task as done:"))
        .stdout(predicate::str::contains("[D][X] submit report"))
        .stdout(predicate::str::contains("Bye. Hope to see you again soon!"));
}

#[test]
fn test_errors_do_not_end_the_session() {
    let home = TempDir::new().unwrap();
    taskline(&home)
        .write_stdin(
            "deadline buy milk\n\
             mark 3\n\
             nonsense\n\
             todo buy milk\n\
             bye\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("OOPS!!! the `/by` delimiter is missing"))
        .stdout(predicate::str::contains(
            "OOPS!!! task 3 doesn't exist (you have 0 tasks)",
        ))
        .stdout(predicate::str::contains(
            "OOPS!!! I'm sorry, but I don't know what that means :-(",
        ))
        .stdout(predicate::str::contains("Now you have 1 tasks in the list."));
}

#[test]
fn test_end_of_input_exits_cleanly_without_bye() {
    let home = TempDir::new().unwrap();
    taskline(&home)
        .write_stdin("todo read book\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Got it. I've added this task:"))
        .stdout(predicate::str::contains("Bye.").not());
}

#[test]
fn test_priority_command() {
    let home = TempDir::new().unwrap();
    taskline(&home)
        .write_stdin("todo read book\npriority 1 high\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Noted. I've set this task to high priority:",
        ));
}

#[test]
fn test_custom_config_changes_frame() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("custom.yaml");
    std::fs::write(&config_path, "frame:\n  indent_width: 2\n  banner_width: 10\n").unwrap();

    taskline(&home)
        .arg("--config")
        .arg(&config_path)
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("  {}", "_".repeat(10))))
        .stdout(predicate::str::contains("_".repeat(60)).not());
}

#[test]
fn test_completions_subcommand() {
    let home = TempDir::new().unwrap();
    taskline(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("taskline"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let home = TempDir::new().unwrap();
    taskline(&home)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}

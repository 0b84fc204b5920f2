//! Integration tests for the dl-cli binary commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Route through the built-in campus that collects everything and submits.
const WINNING_ROUTE: &str = "\
# the porter's lodge first
go west
go west
lucky mug
go east
go east

# library and lab
go north
go up
charger
go down
go east
usb drive

# home
go west
go south
go west
go north
submit
";

/// A two-room world with one item.
fn small_world() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("world.json"),
        r#"{
  "locations": [
    { "id": 1, "brief_description": "Hall.", "long_description": "A long hall.",
      "available_commands": { "go east": 2 }, "items": ["Key"] },
    { "id": 2, "brief_description": "Office.", "long_description": "A small office.",
      "available_commands": { "go west": 1 }, "items": [] }
  ],
  "items": [
    { "name": "Key", "description": "A brass key.", "start_position": 1,
      "target_position": 2, "target_points": 7 }
  ]
}"#,
    )
    .unwrap();
    dir
}

fn deadline() -> Command {
    let mut cmd = Command::cargo_bin("deadline").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_builtin_world() {
    deadline()
        .arg("check")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("8 locations, 4 items")),
        );
}

#[test]
fn check_world_file() {
    let dir = small_world();
    deadline()
        .args(["check", "-w", dir.path().join("world.json").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 locations, 1 items"));
}

#[test]
fn check_rejects_broken_world() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{ "locations": [ { "id": 1, "brief_description": "a", "long_description": "b",
             "available_commands": { "north": 9 } } ], "items": [] }"#,
    )
    .unwrap();

    deadline()
        .args(["check", "-w", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot load"));
}

#[test]
fn check_missing_file_fails() {
    deadline()
        .args(["check", "-w", "/nonexistent/world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_winning_route() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("route.txt");
    fs::write(&script, WINNING_ROUTE).unwrap();

    deadline()
        .args(["simulate", script.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"won\"")
                .and(predicate::str::contains("\"score\": 60"))
                .and(predicate::str::contains("\"turns_remaining\": 13")),
        );
}

#[test]
fn simulate_from_stdin() {
    deadline()
        .args(["simulate", "-", "--json"])
        .write_stdin("go north\nundo\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"turns_remaining\": 25")
                .and(predicate::str::contains("\"turns_logged\": 0")),
        );
}

#[test]
fn simulate_runs_out_of_turns() {
    deadline()
        .args(["simulate", "-", "--json", "--turns", "2"])
        .write_stdin("go north\ngo south\nlook\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("turns_exhausted"));
}

#[test]
fn simulate_suggests_close_commands() {
    deadline()
        .args(["simulate", "-"])
        .write_stdin("go nrth\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Did you mean 'go north'?"));
}

#[test]
fn simulate_with_custom_world() {
    let dir = small_world();
    deadline()
        .args([
            "simulate",
            "-",
            "--json",
            "-w",
            dir.path().join("world.json").to_str().unwrap(),
            "--home",
            "2",
            "--require",
            "key",
        ])
        .write_stdin("key\ngo east\ndrop key\nsubmit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"score\": 14")
                .and(predicate::str::contains("\"inventory\": []"))
                .and(predicate::str::contains("\"won\"")),
        );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quit() {
    deadline()
        .arg("play")
        .write_stdin("look\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("LOCATION 1")
                .and(predicate::str::contains("You gave up."))
                .and(predicate::str::contains("Final score: 0")),
        );
}

#[test]
fn play_end_of_input() {
    deadline()
        .arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game abandoned."));
}

#[test]
fn play_drop_asks_for_item() {
    deadline()
        .args(["play", "--start", "4"])
        .write_stdin("drop\ntcard\ndrop\ntcard\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Your inventory is empty.")
                .and(predicate::str::contains("Drop what?"))
                .and(predicate::str::contains("Don't drop the tcard here!")),
        );
}

#[test]
fn play_matching_challenge() {
    deadline()
        .args(["play", "--seed", "7"])
        .write_stdin("go north\ngo up\ncharger\nrock\nrock\nrock\nrock\nrock\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("rock, paper or scissors?"));
}

#[test]
fn play_unknown_start_fails() {
    deadline()
        .args(["play", "--start", "99"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

//! Focused unit tests covering argument parsing and output routing.

use super::helpers::{Workspace, read_utf8};
use super::*;
use rstest::rstest;
use std::io::Write;

#[rstest]
fn parses_schedule_flags() {
    let cli = Cli::try_parse_from([
        "roadlog",
        "schedule",
        "--total-miles",
        "1200",
        "--cycle-hours-used",
        "12.5",
        "--format",
        "text",
    ])
    .expect("valid arguments");

    match cli.command {
        Command::Schedule(args) => {
            assert_eq!(args.total_miles, Some(1200.0));
            assert_eq!(args.cycle_hours_used, Some(12.5));
            assert_eq!(args.format, Some(OutputFormat::Text));
            assert_eq!(args.request_path, None);
        }
        Command::Plan(_) => panic!("expected schedule command"),
    }
}

#[rstest]
fn parses_plan_places() {
    let cli = Cli::try_parse_from([
        "roadlog",
        "plan",
        "--current",
        "Chicago, IL",
        "--pickup",
        "Indianapolis, IN",
        "--dropoff",
        "St. Louis, MO",
    ])
    .expect("valid arguments");

    match cli.command {
        Command::Plan(args) => {
            assert_eq!(args.current.as_deref(), Some("Chicago, IL"));
            assert_eq!(args.pickup.as_deref(), Some("Indianapolis, IN"));
            assert_eq!(args.dropoff.as_deref(), Some("St. Louis, MO"));
        }
        Command::Schedule(_) => panic!("expected plan command"),
    }
}

#[rstest]
#[case("yaml")]
#[case("JSON!")]
fn rejects_unknown_formats(#[case] format: &str) {
    let err = Cli::try_parse_from(["roadlog", "schedule", "--format", format])
        .expect_err("unknown format");
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[rstest]
fn emit_writes_to_stdout_without_a_path() {
    let mut stdout = Vec::new();
    output::emit(None, &mut stdout, |writer| {
        writer.write_all(b"report").map_err(CliError::WriteReport)
    })
    .expect("emit");
    assert_eq!(stdout, b"report");
}

#[rstest]
fn emit_creates_the_output_file_and_parents() {
    let workspace = Workspace::new();
    let path = workspace.path("reports/trip.json");
    let mut stdout = Vec::new();

    output::emit(Some(&path), &mut stdout, |writer| {
        output::write_json(writer, &serde_json::json!({ "ok": true }))
    })
    .expect("emit");

    assert!(stdout.is_empty());
    assert_eq!(read_utf8(&path), "{\n  \"ok\": true\n}\n");
}

#[rstest]
fn emit_reports_uncreatable_output() {
    let workspace = Workspace::new();
    let blocker = workspace.path("blocker");
    super::helpers::write_utf8(&blocker, b"not a directory");
    let mut stdout = Vec::new();

    let err = output::emit(Some(&blocker.join("trip.json")), &mut stdout, |_| Ok(()))
        .expect_err("parent is a file");
    match err {
        CliError::CreateOutput { path, .. } => assert_eq!(path, blocker.join("trip.json")),
        other => panic!("expected CreateOutput, found {other:?}"),
    }
    assert!(workspace.root().join("blocker").is_file());
}

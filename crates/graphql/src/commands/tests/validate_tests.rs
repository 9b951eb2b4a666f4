use crate::Cli;
use crate::CommandResult;
use crate::commands::validate::FileDiagnostic;
use clap::Parser;
use libgraphql_validation::Diagnostic;
use libgraphql_validation::PhaseId;
use libgraphql_validation::loc::SourceLocation;
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;
use tempfile::TempDir;
use tempfile::tempdir;

const TEST_PHASE: PhaseId = PhaseId::new("Document.Validation.Test");

const DOGS_SDL: &str = "type Query { dog: Dog }\ntype Dog { name: String }";

/// Writes `files` into a fresh temp dir along with a `schema.graphqls` file
/// containing `sdl`.
fn write_files(sdl: &str, files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("schema.graphqls"), sdl).unwrap();
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

async fn run_validate(dir: &TempDir, args: &[&str], paths: &[&str]) -> CommandResult {
    let mut argv: Vec<OsString> = vec![
        "graphql".into(),
        "validate".into(),
        "--schema".into(),
        dir.path().join("schema.graphqls").into(),
    ];
    argv.extend(args.iter().map(OsString::from));
    argv.extend(paths.iter().map(|path| dir.path().join(path).into_os_string()));

    let mut cli = Cli::try_parse_from(argv).unwrap();
    let command = cli.cmd.take().unwrap();
    command.run(cli).await
}

#[test]
fn text_output_includes_path_and_location() {
    let diagnostic = Diagnostic::at(
        TEST_PHASE,
        "Unknown fragment \"Foo\".",
        Some(SourceLocation::new(3, 7)),
    );
    let file_diagnostic = FileDiagnostic {
        path: Path::new("queries/dogs.graphql"),
        diagnostic: &diagnostic,
    };

    assert_eq!(
        file_diagnostic.to_string(),
        "queries/dogs.graphql:3:7: [Document.Validation.Test] Unknown fragment \"Foo\".",
    );
}

#[test]
fn text_output_without_location() {
    let diagnostic = Diagnostic::new(TEST_PHASE, "Bad document");
    let file_diagnostic = FileDiagnostic {
        path: Path::new("a.gql"),
        diagnostic: &diagnostic,
    };

    assert_eq!(
        file_diagnostic.to_string(),
        "a.gql: [Document.Validation.Test] Bad document",
    );
}

#[test]
fn json_output_flattens_the_diagnostic() {
    let diagnostic = Diagnostic::at(
        TEST_PHASE,
        "Bad field",
        Some(SourceLocation::new(1, 3)),
    );
    let file_diagnostic = FileDiagnostic {
        path: Path::new("a.graphql"),
        diagnostic: &diagnostic,
    };

    let json = serde_json::to_value(&file_diagnostic).expect("serialize");
    assert_eq!(json, serde_json::json!({
        "path": "a.graphql",
        "phase": "Document.Validation.Test",
        "message": "Bad field",
        "locations": [{ "line": 1, "column": 3 }],
    }));
}

#[tokio::test]
async fn valid_directory_succeeds() {
    let dir = write_files(DOGS_SDL, &[
        ("dogs.graphql", "{ dog { name } }"),
        ("notes.txt", "not graphql at all"),
    ]);

    let result = run_validate(&dir, &[], &[""]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert_eq!(result.stderr, None);
    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("Validated 1 files."), "stdout: {stdout}");
}

#[tokio::test]
async fn any_diagnostic_fails_the_run() {
    let dir = write_files(DOGS_SDL, &[
        ("good.graphql", "{ dog { name } }"),
        ("bad.gql", "{ dog { name barks } }"),
    ]);

    let result = run_validate(&dir, &[], &[""]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    let stdout = result.stdout.unwrap();
    assert!(
        stdout.contains(
            "bad.gql:1:14: [Document.Validation.FieldsOnCorrectType] \
            Cannot query field \"barks\" on type \"Dog\".",
        ),
        "stdout: {stdout}",
    );
    assert!(stdout.contains("Found 1 GraphQL validation errors."), "stdout: {stdout}");
}

#[tokio::test]
async fn lone_file_is_validated_regardless_of_extension() {
    let dir = write_files(DOGS_SDL, &[("query.txt", "{ dog { nope } }")]);

    let result = run_validate(&dir, &[], &["query.txt"]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("query.txt:1:9: "), "stdout: {stdout}");
}

#[tokio::test]
async fn json_format_lists_every_diagnostic() {
    let dir = write_files(DOGS_SDL, &[("bad.graphql", "{ cat dog { nope } }")]);

    let result = run_validate(&dir, &["--format", "json"], &["bad.graphql"]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    let json: serde_json::Value = serde_json::from_str(&result.stdout.unwrap()).unwrap();
    let messages: Vec<_> =
        json.as_array()
            .unwrap()
            .iter()
            .map(|diagnostic| diagnostic["message"].as_str().unwrap())
            .collect();
    assert_eq!(messages, vec![
        "Cannot query field \"cat\" on type \"Query\".",
        "Cannot query field \"nope\" on type \"Dog\".",
    ]);
}

#[tokio::test]
async fn invalid_schema_is_reported_on_stderr() {
    let dir = write_files("type Query { dog: Nope }", &[("dogs.graphql", "{ dog }")]);

    let result = run_validate(&dir, &[], &["dogs.graphql"]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert_eq!(result.stdout, None);
    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("Unknown type \"Nope\"."), "stderr: {stderr}");
}

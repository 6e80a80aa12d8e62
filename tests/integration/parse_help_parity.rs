use clap::{CommandFactory, Parser};
use codeview::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["codeview", "tree", "--input", "files.json"],
        vec!["codeview", "tree", "--dir", "./submission", "--format", "json"],
        vec![
            "codeview", "tree", "--input", "-", "--expand", "src", "--expand", "src/util",
        ],
        vec!["codeview", "show", "--input", "files.json", "--path", "src/Main.java"],
        vec!["codeview", "stats", "--dir", ".", "--format", "json"],
        vec![
            "codeview",
            "--config",
            "codeview.toml",
            "--log-level",
            "debug",
            "stats",
            "--input",
            "files.json",
        ],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_conflicting_sources() {
    let conflict = Cli::try_parse_from([
        "codeview", "tree", "--input", "files.json", "--dir", ".",
    ]);
    assert!(conflict.is_err());
}

#[test]
fn parse_requires_a_source() {
    assert!(Cli::try_parse_from(["codeview", "tree"]).is_err());
    assert!(Cli::try_parse_from(["codeview", "show", "--path", "a.txt"]).is_err());
}

#[test]
fn parse_show_requires_path() {
    assert!(Cli::try_parse_from(["codeview", "show", "--input", "files.json"]).is_err());
}

#[test]
fn parsed_tree_carries_expansions() {
    let cli = Cli::try_parse_from([
        "codeview", "tree", "--input", "f.json", "--expand", "a", "--expand", "a/b",
    ])
    .unwrap();
    match cli.command {
        Commands::Tree { expand, format, .. } => {
            assert_eq!(expand, vec!["a", "a/b"]);
            assert_eq!(format, "text");
        }
        _ => panic!("expected tree command"),
    }
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn top_level_help_lists_commands() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    for token in ["tree", "show", "stats", "--config", "--log-level"] {
        assert!(output.contains(token), "help should mention {token}");
    }
}

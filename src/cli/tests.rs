#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_generate_defaults() {
    let cli = Cli::try_parse_from(["forgecli-gen", "generate", "--source", "../gitforge"]).unwrap();
    match cli.command {
        Commands::Generate {
            source,
            library,
            output,
        } => {
            assert_eq!(source, PathBuf::from("../gitforge"));
            assert_eq!(library, "gitforge");
            assert_eq!(output, PathBuf::from("src/commands"));
        }
        _ => panic!("expected generate"),
    }
}

#[test]
fn test_parse_inspect_json() {
    let cli = Cli::try_parse_from([
        "forgecli-gen",
        "inspect",
        "--source",
        "client",
        "--library",
        "octoforge",
        "--json",
    ])
    .unwrap();
    match cli.command {
        Commands::Inspect {
            source,
            library,
            json,
        } => {
            assert_eq!(source, PathBuf::from("client"));
            assert_eq!(library, "octoforge");
            assert!(json);
        }
        _ => panic!("expected inspect"),
    }
}

#[test]
fn test_source_is_required() {
    assert!(Cli::try_parse_from(["forgecli-gen", "generate"]).is_err());
}

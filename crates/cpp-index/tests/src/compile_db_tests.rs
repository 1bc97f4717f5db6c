use super::*;
use crate::error::IndexError;

#[test]
fn split_handles_plain_whitespace() {
    assert_eq!(split_command_line("g++ -c foo.cpp"), vec!["g++", "-c", "foo.cpp"]);
    assert_eq!(split_command_line("  g++   -c   foo.cpp  "), vec!["g++", "-c", "foo.cpp"]);
    assert!(split_command_line("").is_empty());
}

#[test]
fn split_respects_quotes() {
    assert_eq!(split_command_line(r#"g++ -I"/path with spaces" foo.cpp"#), vec![
        "g++",
        "-I/path with spaces",
        "foo.cpp"
    ]);
    assert_eq!(split_command_line("g++ '-DNAME=\"value\"' foo.cpp"), vec![
        "g++",
        "-DNAME=\"value\"",
        "foo.cpp"
    ]);
}

#[test]
fn split_respects_backslash_escapes() {
    assert_eq!(split_command_line(r"g++ foo\ bar.cpp"), vec!["g++", "foo bar.cpp"]);
    assert_eq!(split_command_line(r#"g++ "-DSTR=\"x\"" foo.cpp"#), vec!["g++", "-DSTR=\"x\"", "foo.cpp"]);
}

#[test]
fn argv_prefers_the_arguments_vector() {
    let cmd = CompileCommand {
        directory: "/work".into(),
        file: "foo.cpp".into(),
        arguments: Some(vec!["g++".into(), "-c".into(), "foo.cpp".into()]),
        command: Some("ignored".into()),
    };
    assert_eq!(cmd.argv(), vec!["g++", "-c", "foo.cpp"]);
}

#[test]
fn argv_falls_back_to_splitting_the_command_string() {
    let cmd = CompileCommand {
        directory: "/work".into(),
        file: "foo.cpp".into(),
        arguments: None,
        command: Some("g++ -c foo.cpp".into()),
    };
    assert_eq!(cmd.argv(), vec!["g++", "-c", "foo.cpp"]);
}

#[test]
fn load_reports_a_missing_database() {
    let dir = tempfile::tempdir().expect("temp dir");
    match load(dir.path()) {
        Err(IndexError::MissingDatabase(path)) => {
            assert!(path.ends_with(DATABASE_FILE));
        }
        other => panic!("expected MissingDatabase, got {other:?}"),
    }
}

#[test]
fn load_reports_an_empty_database() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join(DATABASE_FILE), "[]").expect("write db");
    assert!(matches!(load(dir.path()), Err(IndexError::EmptyDatabase(_))));
}

#[test]
fn load_reports_a_malformed_database() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join(DATABASE_FILE), "{not json").expect("write db");
    assert!(matches!(load(dir.path()), Err(IndexError::DatabaseParse { .. })));
}

#[test]
fn load_parses_both_entry_forms() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db = r#"[
        {"directory": "/work", "file": "a.cpp", "arguments": ["g++", "-c", "a.cpp"]},
        {"directory": "/work", "file": "b.cpp", "command": "g++ -c b.cpp"}
    ]"#;
    std::fs::write(dir.path().join(DATABASE_FILE), db).expect("write db");
    let commands = load(dir.path()).expect("valid db");
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].argv(), vec!["g++", "-c", "a.cpp"]);
    assert_eq!(commands[1].argv(), vec!["g++", "-c", "b.cpp"]);
    assert_eq!(commands[1].directory, std::path::PathBuf::from("/work"));
}

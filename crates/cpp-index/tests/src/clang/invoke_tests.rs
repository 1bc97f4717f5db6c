use super::*;

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn dump_args_drops_compiler_compile_and_output_flags() {
    let args = dump_args(&argv(&["g++", "-Iinclude", "-c", "foo.cpp", "-o", "foo.o"]));
    assert_eq!(args, vec![
        "-Iinclude",
        "foo.cpp",
        "-fsyntax-only",
        "-fno-color-diagnostics",
        "-Xclang",
        "-ast-dump=json"
    ]);
}

#[test]
fn dump_args_keeps_defines_and_standards() {
    let args = dump_args(&argv(&["clang++", "-std=c++17", "-DNDEBUG", "-c", "a.cpp"]));
    assert_eq!(args, vec![
        "-std=c++17",
        "-DNDEBUG",
        "a.cpp",
        "-fsyntax-only",
        "-fno-color-diagnostics",
        "-Xclang",
        "-ast-dump=json"
    ]);
}

#[test]
fn ast_dump_tolerates_a_missing_compiler() {
    let cmd = CompileCommand {
        directory: std::env::temp_dir(),
        file: "foo.cpp".into(),
        arguments: Some(argv(&["g++", "-c", "foo.cpp"])),
        command: None,
    };
    assert!(ast_dump(&cmd, "cpp-index-test-no-such-compiler").is_none());
}

#[test]
fn ast_dump_rejects_an_empty_command() {
    let cmd = CompileCommand {
        directory: std::env::temp_dir(),
        file: "foo.cpp".into(),
        arguments: None,
        command: Some(String::new()),
    };
    assert!(ast_dump(&cmd, "clang++").is_none());
}

//! Per-translation-unit AST dump invocation.
//!
//! The recorded compiler may be GCC, which has no JSON AST dump, so the
//! configured Clang driver is always substituted for the recorded executable
//! while the recorded flags are kept. The child runs with the command's
//! recorded working directory so relative arguments resolve correctly,
//! per child process rather than via a process-wide chdir.

use std::process::Command;

use tracing::{debug, warn};

use crate::compile_db::CompileCommand;

const AST_DUMP_FLAGS: &[&str] = &["-fsyntax-only", "-fno-color-diagnostics", "-Xclang", "-ast-dump=json"];

/// Run the AST dump for one compile command and return the raw JSON string.
///
/// `None` means this translation unit produced nothing usable; the caller
/// skips it and continues with the rest of the database.
pub fn ast_dump(
    cmd: &CompileCommand,
    clang: &str,
) -> Option<String> {
    let argv = cmd.argv();
    if argv.is_empty() {
        warn!("compile command for {} has no arguments", cmd.file.display());
        return None;
    }
    let args = dump_args(&argv);
    debug!("AST dump: {clang} {}", args.join(" "));

    let output = match Command::new(clang).args(&args).current_dir(&cmd.directory).output() {
        Ok(o) => o,
        Err(e) => {
            warn!("failed to run {clang} for {}: {e}", cmd.file.display());
            return None;
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines() {
            if line.contains("error:") {
                warn!("[ast-dump] compiler error: {line}");
            }
        }
        debug!("[ast-dump] exited with non-zero status (partial AST may still be usable)");
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    if stdout.is_empty() || !stdout.starts_with('{') {
        warn!("[ast-dump] produced no usable JSON for {}", cmd.file.display());
        return None;
    }

    debug!("[ast-dump] produced {} bytes of JSON for {}", stdout.len(), cmd.file.display());
    Some(stdout)
}

/// The recorded argv reshaped for a syntax-only dump: the compiler itself,
/// `-c`, and `-o <path>` are dropped, the dump flags appended.
fn dump_args(argv: &[String]) -> Vec<String> {
    let mut args = Vec::with_capacity(argv.len() + AST_DUMP_FLAGS.len());
    let mut it = argv.iter().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-c" => {}
            "-o" => {
                it.next();
            }
            _ => args.push(arg.clone()),
        }
    }
    args.extend(AST_DUMP_FLAGS.iter().map(|s| (*s).to_owned()));
    args
}

#[cfg(test)]
#[path = "../../tests/src/clang/invoke_tests.rs"]
mod tests;

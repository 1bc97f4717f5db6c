//! Compilation database reader.
//!
//! Loads `compile_commands.json` from the build directory. Entries carry an
//! `arguments` vector or a shell-quoted `command` string; the latter is split
//! with a minimal quote-aware scanner.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::IndexError;

pub const DATABASE_FILE: &str = "compile_commands.json";

/// One entry of the compilation database: how one translation unit was
/// compiled, and from where.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileCommand {
    /// Working directory the arguments are relative to.
    pub directory: PathBuf,
    /// The main source file of the translation unit.
    pub file: PathBuf,
    #[serde(default)]
    pub arguments: Option<Vec<String>>,
    #[serde(default)]
    pub command: Option<String>,
}

impl CompileCommand {
    /// The recorded argument vector, compiler included as the first element.
    pub fn argv(&self) -> Vec<String> {
        if let Some(arguments) = &self.arguments
            && !arguments.is_empty()
        {
            return arguments.clone();
        }
        split_command_line(self.command.as_deref().unwrap_or(""))
    }
}

/// Load and validate the database from `<build_dir>/compile_commands.json`.
///
/// Missing, unreadable, malformed, or empty databases are fatal: there is
/// nothing meaningful to index without compile commands.
pub fn load(build_dir: &Path) -> Result<Vec<CompileCommand>, IndexError> {
    let path = build_dir.join(DATABASE_FILE);
    if !path.exists() {
        return Err(IndexError::MissingDatabase(path));
    }
    let text = fs::read_to_string(&path).map_err(|source| IndexError::DatabaseRead {
        path: path.clone(),
        source,
    })?;
    let commands: Vec<CompileCommand> =
        serde_json::from_str(&text).map_err(|source| IndexError::DatabaseParse {
            path: path.clone(),
            source,
        })?;
    if commands.is_empty() {
        return Err(IndexError::EmptyDatabase(path));
    }
    Ok(commands)
}

/// Split a shell-quoted command line into arguments.
///
/// Handles whitespace separation, single and double quotes, and backslash
/// escapes (outside single quotes). No variable expansion or globbing; the
/// database records literal invocations.
pub(crate) fn split_command_line(command: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = command.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    args.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                for q in chars.by_ref() {
                    if q == '\'' {
                        break;
                    }
                    current.push(q);
                }
            }
            '"' => {
                in_word = true;
                while let Some(q) = chars.next() {
                    match q {
                        '"' => break,
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                if !matches!(escaped, '"' | '\\' | '$' | '`') {
                                    current.push('\\');
                                }
                                current.push(escaped);
                            }
                        }
                        _ => current.push(q),
                    }
                }
            }
            '\\' => {
                in_word = true;
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            _ => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        args.push(current);
    }
    args
}

#[cfg(test)]
#[path = "../tests/src/compile_db_tests.rs"]
mod tests;

//! The compilation driver: one sequential pass over the database.

use std::io;

use tracing::{info, warn};

use crate::{
    clang::{self, Node},
    compile_db::CompileCommand,
    error::IndexError,
    filter::PathFilter,
    report::CsvReportWriter,
    store::DefinitionStore,
    visit::TreeVisitor,
};

/// Iterates the compile commands in database order, parses each translation
/// unit, and accumulates definitions into one store.
///
/// Strictly single-threaded: the store is exclusively owned here and lent to
/// one visitor at a time. Reports are rewritten after every translation unit
/// so a crash mid-run still leaves the most recent complete snapshot on disk.
pub struct CompilationDriver {
    commands: Vec<CompileCommand>,
    filter: PathFilter,
    writer: CsvReportWriter,
    store: DefinitionStore,
    clang: String,
}

impl CompilationDriver {
    pub fn new(
        commands: Vec<CompileCommand>,
        filter: PathFilter,
        writer: CsvReportWriter,
        clang: String,
    ) -> Self {
        Self {
            commands,
            filter,
            writer,
            store: DefinitionStore::new(),
            clang,
        }
    }

    pub fn store(&self) -> &DefinitionStore {
        &self.store
    }

    /// Process every compile command. Per-unit failures are logged and
    /// skipped; an unusable working directory aborts the whole run, since
    /// argument resolution for all subsequent commands would be unreliable.
    pub fn run(&mut self) -> Result<(), IndexError> {
        let total = self.commands.len();
        let mut parsed = 0usize;
        let mut failed = 0usize;

        for (i, cmd) in self.commands.iter().enumerate() {
            check_working_dir(cmd)?;
            info!("[{}/{total}] {}", i + 1, cmd.file.display());

            match clang::invoke::ast_dump(cmd, &self.clang) {
                Some(json) => match serde_json::from_str::<Node>(&json) {
                    Ok(root) => {
                        TreeVisitor::new(&self.filter, &mut self.store).visit_translation_unit(&root);
                        parsed += 1;
                    }
                    Err(e) => {
                        warn!("failed to deserialize AST for {}: {e}", cmd.file.display());
                        failed += 1;
                    }
                },
                None => failed += 1,
            }

            self.writer.write_all(&self.store);
        }

        self.writer.write_all(&self.store);
        info!(
            "indexed {parsed}/{total} translation units ({failed} failed): {} classes, {} functions",
            self.store.class_count(),
            self.store.function_count(),
        );
        Ok(())
    }
}

fn check_working_dir(cmd: &CompileCommand) -> Result<(), IndexError> {
    let fatal = |source: io::Error| IndexError::WorkingDir {
        path: cmd.directory.clone(),
        source,
    };
    let meta = std::fs::metadata(&cmd.directory).map_err(fatal)?;
    if !meta.is_dir() {
        return Err(fatal(io::Error::new(io::ErrorKind::NotADirectory, "not a directory")));
    }
    Ok(())
}

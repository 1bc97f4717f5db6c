//! CSV report serialization.
//!
//! Every field is double-quote-wrapped; embedded quote characters are NOT
//! escaped. This is not a round-trip-safe CSV writer, which is why no CSV
//! crate is used; the format is fixed by the reports' consumers.

use std::{
    fmt::Write as _,
    io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::store::DefinitionStore;

const CLASS_HEADER: &[&str] = &["name", "namespace", "baseclasses", "file", "location", "size"];
const FUNCTION_HEADER: &[&str] = &["name", "namespace", "file", "location", "static", "sig", "return_type", "params"];

/// Serializes the definition store into the two sorted CSV reports.
pub struct CsvReportWriter {
    base: PathBuf,
}

impl CsvReportWriter {
    /// Reports land under `out_dir` as `cpp-index.class.csv` and
    /// `cpp-index.func.csv`.
    pub fn new(out_dir: &Path) -> Self {
        Self {
            base: out_dir.join("cpp-index"),
        }
    }

    pub fn class_report_path(&self) -> PathBuf {
        self.base.with_extension("class.csv")
    }

    pub fn function_report_path(&self) -> PathBuf {
        self.base.with_extension("func.csv")
    }

    /// Write both reports. A failed report is logged and skipped; a later
    /// write cycle may still succeed.
    pub fn write_all(
        &self,
        store: &DefinitionStore,
    ) {
        if let Err(e) = self.write_classes(store) {
            warn!("failed to write {}: {e}", self.class_report_path().display());
        }
        if let Err(e) = self.write_functions(store) {
            warn!("failed to write {}: {e}", self.function_report_path().display());
        }
        debug!("wrote reports: {} classes, {} functions", store.class_count(), store.function_count());
    }

    fn write_classes(
        &self,
        store: &DefinitionStore,
    ) -> io::Result<()> {
        let mut out = String::new();
        push_row(&mut out, CLASS_HEADER);
        for def in store.classes() {
            push_row(&mut out, &[
                &def.fqn,
                &def.namespace,
                &def.base_classes.join(";"),
                &def.location.file,
                &def.location.line_col_offset(),
                &def.size.to_string(),
            ]);
        }
        std::fs::write(self.class_report_path(), out)
    }

    fn write_functions(
        &self,
        store: &DefinitionStore,
    ) -> io::Result<()> {
        let mut out = String::new();
        push_row(&mut out, FUNCTION_HEADER);
        for def in store.functions() {
            push_row(&mut out, &[
                &def.fqn,
                &def.namespace,
                &def.location.file,
                &def.location.line_col_offset(),
                if def.is_static { "1" } else { "0" },
                &def.signature(),
                &def.return_type,
                &def.parameters.len().to_string(),
            ]);
        }
        std::fs::write(self.function_report_path(), out)
    }
}

fn push_row(
    out: &mut String,
    fields: &[&str],
) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "\"{field}\"");
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "../tests/src/report_tests.rs"]
mod tests;

pub mod clang;
pub mod compile_db;
pub mod driver;
pub mod error;
pub mod extract;
pub mod filter;
pub mod layout;
pub mod location;
pub mod names;
pub mod report;
pub mod store;
pub mod visit;

pub use compile_db::CompileCommand;
pub use driver::CompilationDriver;
pub use error::IndexError;
pub use extract::{ClassDef, FunctionDef};
pub use filter::{DEFAULT_EXCLUDES, PathFilter};
pub use location::SourceLocation;
pub use report::CsvReportWriter;
pub use store::{ClassMergePolicy, DefinitionStore};
pub use visit::TreeVisitor;

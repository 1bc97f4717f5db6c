use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cpp_index::{CompilationDriver, CsvReportWriter, PathFilter, compile_db};

#[derive(Parser, Debug)]
#[command(name = "cpp-index", version, about)]
struct Args {
    /// Build directory containing compile_commands.json.
    builddir: PathBuf,

    /// Source root; only definitions under this path are indexed.
    srcpath: PathBuf,

    /// Output directory for the CSV reports (defaults to the current directory).
    outpath: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Clang driver used for AST dumps.
    #[arg(long, default_value = "clang++")]
    clang: String,
}

fn canonical_or_given(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn init_tracing(args: &Args) {
    let filter_for = |verbose: bool| {
        if verbose {
            EnvFilter::new("cpp_index=debug")
        } else {
            EnvFilter::new("cpp_index=info")
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter_for(args.verbose));

    let file_layer = args.log_file.as_ref().map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("cpp-index.log")),
        );
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(filter_for(args.verbose))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

fn main() {
    let args = Args::parse();
    init_tracing(&args);

    let build_dir = canonical_or_given(&args.builddir);
    let src_root = canonical_or_given(&args.srcpath);
    let out_dir = canonical_or_given(args.outpath.as_deref().unwrap_or(Path::new(".")));
    let writer = CsvReportWriter::new(&out_dir);

    info!("build directory: {}", build_dir.display());
    info!("src path: {}", src_root.display());
    info!(
        "csv path: {} {}",
        writer.class_report_path().display(),
        writer.function_report_path().display()
    );

    let commands = match compile_db::load(&build_dir) {
        Ok(commands) => commands,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let filter = PathFilter::new(src_root.to_string_lossy().into_owned());
    let mut driver = CompilationDriver::new(commands, filter, writer, args.clang);
    if let Err(e) = driver.run() {
        error!("{e}");
        std::process::exit(1);
    }
}

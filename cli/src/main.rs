use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use proto_outline::{
    outline_to_json, output_path_for, parse_indent_char, read_schema, transcode_file, ClosePolicy,
    OutlineError, TranscodeOptions,
};

/// Write a normalized outline of a `.proto` style schema file.
#[derive(Parser)]
#[command(name = "protoline", version)]
#[command(about = "Transcode message/enum schema files into an indented token stream", long_about = None)]
struct Cli {
    /// Input schema file, e.g. `foo.proto`
    #[arg(short, long)]
    path: PathBuf,

    /// Character placed between the words of a token line
    #[arg(short, long, default_value = "-")]
    indent: String,

    /// Character repeated once per nesting level in front of a token line
    #[arg(short, long, default_value = "\t")]
    nesting: String,

    /// Output file (defaults to `<file name>.parse` in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Drop a `}` that closes nothing instead of failing
    #[arg(long)]
    ignore_unbalanced: bool,

    /// Fail when blocks are still open at end of input
    #[arg(long)]
    strict: bool,

    /// Print the outline as JSON to stdout instead of writing a file
    #[arg(long)]
    json: bool,

    /// Log every recognized block and field
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), OutlineError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let close_policy = if cli.ignore_unbalanced {
        ClosePolicy::Ignore
    } else {
        ClosePolicy::Fatal
    };
    let options = TranscodeOptions::default()
        .with_separator(parse_indent_char(&cli.indent)?)
        .with_nesting(parse_indent_char(&cli.nesting)?)
        .with_close_policy(close_policy)
        .with_strict(cli.strict);

    // Validates the input names a file even when --output is given
    let default_output = output_path_for(&cli.path)?;

    if cli.json {
        let text = read_schema(&cli.path)?;
        println!("{}", outline_to_json(&text, &options)?);
        return Ok(());
    }

    let out_path = cli.output.unwrap_or(default_output);
    let summary = transcode_file(&cli.path, &out_path, &options)?;
    info!(
        input = %cli.path.display(),
        output = %out_path.display(),
        lines = summary.lines,
        tokens = summary.tokens,
        "parse file over"
    );
    Ok(())
}

use std::path::PathBuf;
use std::process;

use clap::Parser;

use proto_naming::{codegen, plugin};

/// protoc plugin that generates MySQL CREATE TABLE scripts from proto
/// messages.
///
/// Reads a CodeGeneratorRequest on stdin and writes a CodeGeneratorResponse
/// on stdout. The parameter is a comma-separated list of message names whose
/// statements are also echoed to stderr, e.g. `--sql_out=User,Order:out`.
#[derive(Parser)]
#[command(name = "protoc-gen-sql", version, about)]
struct Cli {
    /// Read the encoded CodeGeneratorRequest from a file instead of stdin.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Write the encoded CodeGeneratorResponse to a file instead of stdout.
    #[arg(long)]
    response: Option<PathBuf>,

    /// Replace the parameter string carried by the request.
    #[arg(long, env = "PROTOC_GEN_SQL_PARAMETER")]
    parameter: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        plugin::report_error("protoc-gen-sql", &e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> proto_naming::error::Result<()> {
    let mut request = plugin::read_request(cli.request.as_deref())?;
    if let Some(parameter) = cli.parameter {
        request.parameter = Some(parameter);
    }

    let (response, stats) = codegen::generate_sql(&request)?;
    log::info!(
        "generated {} files: {} tables, {} columns",
        stats.files_generated,
        stats.messages_generated,
        stats.fields_generated
    );
    if stats.unhandled_fields > 0 {
        log::warn!(
            "{} fields have no SQL column type; their columns are incomplete",
            stats.unhandled_fields
        );
    }

    plugin::write_response(&response, cli.response.as_deref())
}

use std::path::PathBuf;
use std::process;

use clap::Parser;

use proto_naming::{codegen, plugin};

/// protoc plugin that generates Java interfaces holding proto names as
/// string constants.
///
/// Reads a CodeGeneratorRequest on stdin and writes a CodeGeneratorResponse
/// on stdout. Pass options through protoc, e.g.
/// `--naming_out=java_package=com.acme.names:out`.
#[derive(Parser)]
#[command(name = "protoc-gen-naming", version, about)]
struct Cli {
    /// Read the encoded CodeGeneratorRequest from a file instead of stdin.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Write the encoded CodeGeneratorResponse to a file instead of stdout.
    #[arg(long)]
    response: Option<PathBuf>,

    /// Replace the parameter string carried by the request.
    #[arg(long, env = "PROTOC_GEN_NAMING_PARAMETER")]
    parameter: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        plugin::report_error("protoc-gen-naming", &e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> proto_naming::error::Result<()> {
    let mut request = plugin::read_request(cli.request.as_deref())?;
    if let Some(parameter) = cli.parameter {
        request.parameter = Some(parameter);
    }

    let (response, stats) = codegen::generate_naming(&request)?;
    log::info!(
        "generated {} files for {} messages ({} protos without messages skipped)",
        stats.files_generated,
        stats.messages_generated,
        stats.protos_skipped
    );

    plugin::write_response(&response, cli.response.as_deref())
}

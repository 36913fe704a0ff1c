//! protoc plugin transport.
//!
//! protoc writes one binary `CodeGeneratorRequest` to the plugin's stdin and
//! reads one binary `CodeGeneratorResponse` from its stdout. Neither side is
//! length-prefixed; each stream carries exactly one message.

use std::io::{Read, Write};
use std::path::Path;

use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

use crate::error::{Error, Result};

/// Decode a request from its binary encoding.
pub fn decode_request(bytes: &[u8]) -> Result<CodeGeneratorRequest> {
    Ok(CodeGeneratorRequest::decode(bytes)?)
}

/// Encode a response to its binary encoding.
pub fn encode_response(response: &CodeGeneratorResponse) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(response.encoded_len());
    response.encode(&mut out)?;
    Ok(out)
}

/// Read the request from `path`, or from stdin when `path` is `None`.
pub fn read_request(path: Option<&Path>) -> Result<CodeGeneratorRequest> {
    let bytes = match path {
        Some(path) => std::fs::read(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    decode_request(&bytes)
}

/// Write the response to `path`, or to stdout when `path` is `None`.
pub fn write_response(response: &CodeGeneratorResponse, path: Option<&Path>) -> Result<()> {
    let bytes = encode_response(response)?;
    match path {
        Some(path) => std::fs::write(path, &bytes).map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Print an error and its cause chain to stderr.
pub fn report_error(plugin: &str, e: &Error) {
    eprintln!("{plugin}: error: {e}");

    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}

//! Request/response orchestration for both plugins.
//!
//! Each entry point indexes the request's descriptors, walks
//! `file_to_generate` in order and collects one or more generated files per
//! proto file. Files without messages produce no output.

use prost_types::FileDescriptorProto;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

use crate::error::{Error, Result};
use crate::index::DescriptorIndex;
use crate::java;
use crate::options::{NamingOptions, SqlOptions};
use crate::sql;

/// Statistics collected during generation for reporting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    pub files_generated: usize,
    pub protos_skipped: usize,
    pub messages_generated: usize,
    pub fields_generated: usize,
    pub unhandled_fields: usize,
}

impl GenerationStats {
    fn record_proto(&mut self, file: &FileDescriptorProto) {
        self.messages_generated += file.message_type.len();
        self.fields_generated += file.message_type.iter().map(|m| m.field.len()).sum::<usize>();
    }
}

/// Generate Java naming interfaces for every file in `file_to_generate`.
pub fn generate_naming(
    request: &CodeGeneratorRequest,
) -> Result<(CodeGeneratorResponse, GenerationStats)> {
    let options = NamingOptions::from_parameter(request.parameter());
    let mut response = CodeGeneratorResponse::default();
    let mut stats = GenerationStats::default();

    for file in files_to_generate(request, &mut stats)? {
        let package = java::java_package(file, &options);
        if java::multiple_files(file) {
            for msg_idx in 0..file.message_type.len() {
                response.file.push(java::generate_message(file, &package, msg_idx));
            }
        } else {
            response.file.push(java::generate_file(file, &package));
        }
        stats.record_proto(file);
        log::debug!("generated naming interfaces for {}", file.name());
    }

    stats.files_generated = response.file.len();
    Ok((response, stats))
}

/// Generate SQL table definitions for every file in `file_to_generate`.
pub fn generate_sql(
    request: &CodeGeneratorRequest,
) -> Result<(CodeGeneratorResponse, GenerationStats)> {
    let options = SqlOptions::from_parameter(request.parameter());
    let mut response = CodeGeneratorResponse::default();
    let mut stats = GenerationStats::default();

    for file in files_to_generate(request, &mut stats)? {
        response
            .file
            .push(sql::generate_file(file, &options, &mut stats));
        stats.record_proto(file);
        log::debug!("generated sql for {}", file.name());
    }

    stats.files_generated = response.file.len();
    Ok((response, stats))
}

/// Resolve `file_to_generate` against the request's descriptors, dropping
/// files that declare no messages.
///
/// A listed file missing from `proto_file` is an error.
fn files_to_generate<'a>(
    request: &'a CodeGeneratorRequest,
    stats: &mut GenerationStats,
) -> Result<Vec<&'a FileDescriptorProto>> {
    let index = DescriptorIndex::build(&request.proto_file);
    let mut files = Vec::with_capacity(request.file_to_generate.len());

    for name in &request.file_to_generate {
        let file = index.get(name).ok_or_else(|| Error::FileNotFound {
            name: name.clone(),
        })?;
        if file.message_type.is_empty() {
            log::debug!("skipping {name}: no messages");
            stats.protos_skipped += 1;
            continue;
        }
        files.push(file);
    }

    Ok(files)
}

//! MySQL `CREATE TABLE` scripts derived from proto messages.
//!
//! Every top-level message becomes one table named after the snake_cased
//! message name. Columns keep the raw field names; their types come from
//! [`infer_column_type`].

use std::fmt::Write;

use prost_types::compiler::code_generator_response::File;
use prost_types::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto};

use crate::codegen::GenerationStats;
use crate::comments::{field_comment, format_comment, message_comment};
use crate::options::SqlOptions;
use crate::type_map::{
    field_deprecated, full_name, infer_column_type, message_deprecated, primary_key,
    to_snake_case,
};

const BANNER: &str = "-- Generated by the protoc-gen-sql plugin.  DO NOT EDIT!";
const TABLE_OPTIONS: &str = "ENGINE=InnoDB DEFAULT CHARSET=utf8 COLLATE=utf8_bin";
const DEPRECATED: &str = "@deprecated";

/// Output path of the script generated for `proto_name`: `a/b.proto` -> `a/b.sql`.
pub fn output_name(proto_name: &str) -> String {
    match proto_name.strip_suffix(".proto") {
        Some(stem) => format!("{stem}.sql"),
        None => format!("{proto_name}.sql"),
    }
}

/// Generate the script for every message of `file`.
///
/// Statements of messages named in `options.echo_messages` are also written
/// to stderr.
pub fn generate_file(
    file: &FileDescriptorProto,
    options: &SqlOptions,
    stats: &mut GenerationStats,
) -> File {
    let mut out = String::new();
    writeln!(out, "{BANNER}").unwrap();
    writeln!(out, "-- file: {}", file.name()).unwrap();

    for (msg_idx, message) in file.message_type.iter().enumerate() {
        let statement = create_table(file, msg_idx, message, stats);
        if options.echoes(message.name()) {
            eprintln!("{statement}");
        }
        writeln!(out).unwrap();
        out.push_str(&statement);
    }

    File {
        name: Some(output_name(file.name())),
        content: Some(out),
        ..Default::default()
    }
}

fn create_table(
    file: &FileDescriptorProto,
    msg_idx: usize,
    message: &DescriptorProto,
    stats: &mut GenerationStats,
) -> String {
    let mut comment = full_name(file.package(), message.name());
    comment.push('\n');
    if message_deprecated(message) {
        comment.push_str(DEPRECATED);
        comment.push('\n');
    }
    comment.push_str(&message_comment(file, msg_idx));

    let mut entries: Vec<String> = message
        .field
        .iter()
        .enumerate()
        .map(|(field_idx, field)| column(file, msg_idx, message, field_idx, field, stats))
        .collect();
    let columns = entries.len();
    entries.extend(
        message
            .field
            .iter()
            .filter_map(primary_key)
            .map(str::to_string),
    );

    let mut out = String::new();
    out.push_str(&format_comment(&comment, "-- "));
    writeln!(
        out,
        "CREATE TABLE IF NOT EXISTS `{}` (",
        to_snake_case(message.name())
    )
    .unwrap();
    for (idx, entry) in entries.iter().enumerate() {
        if idx == columns {
            writeln!(out).unwrap();
        }
        let sep = if idx + 1 < entries.len() { "," } else { "" };
        writeln!(out, "  {entry}{sep}").unwrap();
    }
    writeln!(
        out,
        ") {TABLE_OPTIONS} COMMENT '{}';",
        quote(&flatten(&comment))
    )
    .unwrap();
    out
}

/// One column definition, e.g. ``` `name` VARCHAR(100) DEFAULT '' ```.
///
/// Field types without a column type still produce a line, without the type
/// token, so one odd field does not hold back the rest of the script.
fn column(
    file: &FileDescriptorProto,
    msg_idx: usize,
    message: &DescriptorProto,
    field_idx: usize,
    field: &FieldDescriptorProto,
    stats: &mut GenerationStats,
) -> String {
    let column_type = infer_column_type(field).unwrap_or_else(|| {
        log::warn!(
            "unhandled field {}.{} of type {}",
            message.name(),
            field.name(),
            field.r#type().as_str_name()
        );
        stats.unhandled_fields += 1;
        ""
    });
    let mut line = format!("`{}` {column_type}", field.name());

    let mut comment = flatten(&field_comment(file, msg_idx, field_idx));
    if field_deprecated(field) {
        comment = format!("{DEPRECATED} {comment}").trim().to_string();
    }
    if !comment.is_empty() {
        write!(line, " COMMENT '{}'", quote(&comment)).unwrap();
    }
    line
}

/// Collapse a multi-line comment onto one line.
fn flatten(comment: &str) -> String {
    comment
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(s: &str) -> String {
    s.replace('\'', "''")
}

//! Java interfaces exposing proto names as string constants.
//!
//! Two layouts, chosen by the file's `java_multiple_files` option:
//!
//! - one `<Outer>Naming.java` per proto file, holding a constant for every
//!   message name;
//! - one `<Message>Naming.java` per message, holding a constant for every
//!   field name.

use std::fmt::Write;

use prost_types::compiler::code_generator_response::File;
use prost_types::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto};

use crate::comments::{field_comment, format_comment, message_comment};
use crate::options::NamingOptions;
use crate::type_map::{
    field_deprecated, full_name, message_deprecated, to_pascal_case, to_screaming_snake,
};

const BANNER: &str = "/* Generated by the proto-naming plugin.  DO NOT EDIT! */";
const DEPRECATED: &str = "@java.lang.Deprecated";
const NAMING_PACKAGE: &str = "naming";

/// Java package for the files generated from `file`.
///
/// The `java_package` parameter wins, even when empty. Otherwise `.naming` is
/// appended to the file's `java_package` option, or to its proto package when
/// the option is unset. A file with neither lands in package `naming`.
pub fn java_package(file: &FileDescriptorProto, options: &NamingOptions) -> String {
    if let Some(package) = &options.java_package {
        return package.clone();
    }
    let base = file
        .options
        .as_ref()
        .and_then(|o| o.java_package.as_deref())
        .unwrap_or(file.package());
    if base.is_empty() {
        NAMING_PACKAGE.to_string()
    } else {
        format!("{base}.{NAMING_PACKAGE}")
    }
}

/// Name of the interface generated for a whole file, e.g. `UserProtoNaming`.
///
/// Without `java_outer_classname`, protoc's default outer class name is used:
/// the camel-cased file name, suffixed with `OuterClass` when a top-level
/// message, enum or service already has that name.
pub fn outer_interface_name(file: &FileDescriptorProto) -> String {
    let outer = file
        .options
        .as_ref()
        .and_then(|o| o.java_outer_classname.clone())
        .unwrap_or_else(|| default_outer_classname(file));
    format!("{outer}Naming")
}

fn default_outer_classname(file: &FileDescriptorProto) -> String {
    let name = to_pascal_case(file.name());
    let clashes = file.message_type.iter().any(|m| m.name() == name)
        || file.enum_type.iter().any(|e| e.name() == name)
        || file.service.iter().any(|s| s.name() == name);
    if clashes {
        format!("{name}OuterClass")
    } else {
        name
    }
}

pub fn multiple_files(file: &FileDescriptorProto) -> bool {
    file.options
        .as_ref()
        .is_some_and(|o| o.java_multiple_files())
}

/// Generate the single-file layout: one interface with a constant per message.
pub fn generate_file(file: &FileDescriptorProto, java_package: &str) -> File {
    let interface = outer_interface_name(file);
    let mut out = header(java_package);

    writeln!(out, "/**").unwrap();
    writeln!(out, " * file: {}", file.name()).unwrap();
    writeln!(out, " */").unwrap();
    writeln!(out, "public interface {interface} {{").unwrap();

    for (msg_idx, message) in file.message_type.iter().enumerate() {
        if msg_idx > 0 {
            writeln!(out).unwrap();
        }
        write_message_doc(&mut out, file, msg_idx, message, "  ");
        writeln!(
            out,
            "  String {} = \"{}\";",
            to_screaming_snake(message.name()),
            message.name()
        )
        .unwrap();
    }

    writeln!(out, "}}").unwrap();

    output_file(java_package, &interface, out)
}

/// Generate the multi-file layout for the message at `msg_idx`: one
/// interface with a constant per field.
pub fn generate_message(file: &FileDescriptorProto, java_package: &str, msg_idx: usize) -> File {
    let message = &file.message_type[msg_idx];
    let interface = format!("{}Naming", message.name());
    let mut out = header(java_package);

    write_message_doc(&mut out, file, msg_idx, message, "");
    writeln!(out, "public interface {interface} {{").unwrap();

    for (field_idx, field) in message.field.iter().enumerate() {
        write_field(&mut out, file, msg_idx, field_idx, field);
    }

    writeln!(out, "}}").unwrap();

    output_file(java_package, &interface, out)
}

fn header(java_package: &str) -> String {
    let mut out = String::new();
    writeln!(out, "{BANNER}").unwrap();
    writeln!(out).unwrap();
    if !java_package.is_empty() {
        writeln!(out, "package {java_package};").unwrap();
        writeln!(out).unwrap();
    }
    out
}

/// Javadoc for a message followed by its deprecation annotation, if any.
fn write_message_doc(
    out: &mut String,
    file: &FileDescriptorProto,
    msg_idx: usize,
    message: &DescriptorProto,
    indent: &str,
) {
    writeln!(out, "{indent}/**").unwrap();
    out.push_str(&javadoc_body(
        &message_comment(file, msg_idx),
        &format!("{indent} * "),
    ));
    writeln!(
        out,
        "{indent} * proto: {}",
        full_name(file.package(), message.name())
    )
    .unwrap();
    writeln!(out, "{indent} */").unwrap();

    if message_deprecated(message) {
        writeln!(out, "{indent}{DEPRECATED}").unwrap();
    }
}

fn write_field(
    out: &mut String,
    file: &FileDescriptorProto,
    msg_idx: usize,
    field_idx: usize,
    field: &FieldDescriptorProto,
) {
    writeln!(out, "  /**").unwrap();
    out.push_str(&javadoc_body(
        &field_comment(file, msg_idx, field_idx),
        "   * ",
    ));
    writeln!(out, "   * {}", wire_type(field)).unwrap();
    writeln!(out, "   */").unwrap();

    if field_deprecated(field) {
        writeln!(out, "  {DEPRECATED}").unwrap();
    }

    writeln!(
        out,
        "  String {} = \"{}\";",
        to_screaming_snake(field.name()),
        field.name()
    )
    .unwrap();
}

/// Comment lines followed by a `<p>` paragraph break, or nothing.
fn javadoc_body(comment: &str, prefix: &str) -> String {
    let mut body = format_comment(comment, prefix);
    if !body.is_empty() {
        writeln!(body, "{prefix}<p>").unwrap();
    }
    body
}

/// Wire type of a field, e.g. `TYPE_INT64` or
/// `TYPE_MESSAGE: .google.protobuf.Timestamp`.
fn wire_type(field: &FieldDescriptorProto) -> String {
    let name = field.r#type().as_str_name();
    if field.type_name().is_empty() {
        name.to_string()
    } else {
        format!("{name}: {}", field.type_name())
    }
}

fn output_file(java_package: &str, interface: &str, content: String) -> File {
    let name = if java_package.is_empty() {
        format!("{interface}.java")
    } else {
        format!("{}/{interface}.java", java_package.replace('.', "/"))
    };
    File {
        name: Some(name),
        content: Some(content),
        ..Default::default()
    }
}

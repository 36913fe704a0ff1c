//! Naming conventions and SQL column-type inference for proto fields.
//!
//! # Column Type Table
//!
//! Rules are evaluated top to bottom; the first match wins.
//!
//! | # | Field | SQL column type |
//! |---|-------|-----------------|
//! | 1 | `repeated` (any type) | `TEXT` |
//! | 2 | named `create_time` | `TIMESTAMP DEFAULT now()` |
//! | 3 | named `update_time` | `TIMESTAMP DEFAULT now() ON UPDATE now()` |
//! | 4 | type name ends with `google.protobuf.Timestamp` | `TIMESTAMP NULL` |
//! | 5 | named `id`, `int64` | `BIGINT(20) NOT NULL AUTO_INCREMENT` |
//! | 6 | named `id`, any other type | `VARCHAR(32) NOT NULL` |
//! | 7 | `int64` | `BIGINT(20) DEFAULT 0` |
//! | 8 | `int32` | `INT(10) DEFAULT 0` |
//! | 9 | `double` | `DECIMAL(20,6) DEFAULT 0` |
//! | 10 | `float` | `DECIMAL(12,4) DEFAULT 0` |
//! | 11 | `bool` | `TINYINT(1) DEFAULT 0` |
//! | 12 | enum | `TINYINT(2) DEFAULT 0` |
//! | 13 | `string` named `url` or `*_url` | `TEXT` |
//! | 14 | `string` | `VARCHAR(100) DEFAULT ''` |
//! | 15 | message | `TEXT` |
//! | - | anything else (`bytes`, `uint32`, `sint64`, ...) | none |

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FieldDescriptorProto};

/// One row of the column type table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    /// Short label used in diagnostics and tests.
    pub name: &'static str,
    matches: fn(&FieldDescriptorProto) -> bool,
    /// Column type emitted when the rule matches.
    pub column_type: &'static str,
}

impl ColumnRule {
    pub fn matches(&self, field: &FieldDescriptorProto) -> bool {
        (self.matches)(field)
    }
}

/// Column type rules in priority order.
pub const COLUMN_RULES: &[ColumnRule] = &[
    ColumnRule {
        name: "repeated",
        matches: is_repeated,
        column_type: "TEXT",
    },
    ColumnRule {
        name: "create_time",
        matches: is_create_time,
        column_type: "TIMESTAMP DEFAULT now()",
    },
    ColumnRule {
        name: "update_time",
        matches: is_update_time,
        column_type: "TIMESTAMP DEFAULT now() ON UPDATE now()",
    },
    ColumnRule {
        name: "timestamp",
        matches: is_timestamp,
        column_type: "TIMESTAMP NULL",
    },
    ColumnRule {
        name: "int64_id",
        matches: is_int64_id,
        column_type: "BIGINT(20) NOT NULL AUTO_INCREMENT",
    },
    ColumnRule {
        name: "id",
        matches: is_id,
        column_type: "VARCHAR(32) NOT NULL",
    },
    ColumnRule {
        name: "int64",
        matches: is_int64,
        column_type: "BIGINT(20) DEFAULT 0",
    },
    ColumnRule {
        name: "int32",
        matches: is_int32,
        column_type: "INT(10) DEFAULT 0",
    },
    ColumnRule {
        name: "double",
        matches: is_double,
        column_type: "DECIMAL(20,6) DEFAULT 0",
    },
    ColumnRule {
        name: "float",
        matches: is_float,
        column_type: "DECIMAL(12,4) DEFAULT 0",
    },
    ColumnRule {
        name: "bool",
        matches: is_bool,
        column_type: "TINYINT(1) DEFAULT 0",
    },
    ColumnRule {
        name: "enum",
        matches: is_enum,
        column_type: "TINYINT(2) DEFAULT 0",
    },
    ColumnRule {
        name: "url",
        matches: is_url,
        column_type: "TEXT",
    },
    ColumnRule {
        name: "string",
        matches: is_string,
        column_type: "VARCHAR(100) DEFAULT ''",
    },
    ColumnRule {
        name: "message",
        matches: is_message,
        column_type: "TEXT",
    },
];

fn is_repeated(field: &FieldDescriptorProto) -> bool {
    field.label() == Label::Repeated
}

fn is_create_time(field: &FieldDescriptorProto) -> bool {
    field.name() == "create_time"
}

fn is_update_time(field: &FieldDescriptorProto) -> bool {
    field.name() == "update_time"
}

fn is_timestamp(field: &FieldDescriptorProto) -> bool {
    field.type_name().ends_with("google.protobuf.Timestamp")
}

fn is_int64_id(field: &FieldDescriptorProto) -> bool {
    is_id(field) && is_int64(field)
}

fn is_id(field: &FieldDescriptorProto) -> bool {
    field.name() == "id"
}

fn is_url(field: &FieldDescriptorProto) -> bool {
    is_string(field) && (field.name() == "url" || field.name().ends_with("_url"))
}

fn is_int64(field: &FieldDescriptorProto) -> bool {
    field.r#type() == Type::Int64
}

fn is_int32(field: &FieldDescriptorProto) -> bool {
    field.r#type() == Type::Int32
}

fn is_double(field: &FieldDescriptorProto) -> bool {
    field.r#type() == Type::Double
}

fn is_float(field: &FieldDescriptorProto) -> bool {
    field.r#type() == Type::Float
}

fn is_bool(field: &FieldDescriptorProto) -> bool {
    field.r#type() == Type::Bool
}

fn is_enum(field: &FieldDescriptorProto) -> bool {
    field.r#type() == Type::Enum
}

fn is_string(field: &FieldDescriptorProto) -> bool {
    field.r#type() == Type::String
}

fn is_message(field: &FieldDescriptorProto) -> bool {
    field.r#type() == Type::Message
}

/// The first rule in [`COLUMN_RULES`] that matches `field`.
pub fn matching_rule(field: &FieldDescriptorProto) -> Option<&'static ColumnRule> {
    COLUMN_RULES.iter().find(|rule| rule.matches(field))
}

/// Infer the SQL column type for a field.
///
/// Returns `None` for field types the table does not cover; the caller
/// decides how to report it.
pub fn infer_column_type(field: &FieldDescriptorProto) -> Option<&'static str> {
    matching_rule(field).map(|rule| rule.column_type)
}

/// Primary key constraint contributed by a field, if any.
///
/// Only a field literally named `id` is a key.
pub fn primary_key(field: &FieldDescriptorProto) -> Option<&'static str> {
    is_id(field).then_some("PRIMARY KEY (`id`)")
}

/// Fully-qualified proto name of a top-level message, without the leading dot.
pub fn full_name(package: &str, message: &str) -> String {
    if package.is_empty() {
        message.to_string()
    } else {
        format!("{package}.{message}")
    }
}

pub fn message_deprecated(message: &DescriptorProto) -> bool {
    message.options.as_ref().is_some_and(|o| o.deprecated())
}

pub fn field_deprecated(field: &FieldDescriptorProto) -> bool {
    field.options.as_ref().is_some_and(|o| o.deprecated())
}

/// Uppercase an identifier for a Java constant name.
///
/// No word splitting happens: `createTime` becomes `CREATETIME`.
pub fn to_screaming_snake(s: &str) -> String {
    s.to_uppercase()
}

/// Convert a CamelCase message name to a lower_snake_case table name.
///
/// - `"UserProfile"` → `"user_profile"`
/// - `"id"` → `"id"`
/// - `"user_profile"` → `"user_profile"`
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Camel-case a proto file's base name, the stem of protoc's default Java
/// outer class name.
///
/// Strips the directory and `.proto` suffix, then camel-cases the rest:
/// - `"user.proto"` → `"User"`
/// - `"app/user_profile.proto"` → `"UserProfile"`
pub fn to_pascal_case(file_name: &str) -> String {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    let base = base.strip_suffix(".proto").unwrap_or(base);
    base.split(|c: char| !c.is_alphanumeric())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect()
}

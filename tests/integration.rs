//! End-to-end tests for both plugins.
//!
//! Requests are built in code the way protoc would send them: the files to
//! generate plus their imports (here `google/protobuf/timestamp.proto`),
//! with source comments in `source_code_info`.

use pretty_assertions::assert_eq;
use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::source_code_info::Location;
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FieldOptions, FileDescriptorProto, FileOptions,
    MessageOptions, SourceCodeInfo,
};

use proto_naming::codegen;
use proto_naming::error::Error;
use proto_naming::plugin;

/// `user.proto`, package `app`, one `User` message and one deprecated
/// `Account` message.
fn user_proto(multiple_files: bool) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("user.proto".to_string()),
        package: Some("app".to_string()),
        dependency: vec!["google/protobuf/timestamp.proto".to_string()],
        message_type: vec![
            DescriptorProto {
                name: Some("User".to_string()),
                field: vec![
                    field("id", Type::Int64, None),
                    field("name", Type::String, None),
                    field(
                        "create_time",
                        Type::Message,
                        Some(".google.protobuf.Timestamp"),
                    ),
                ],
                ..Default::default()
            },
            DescriptorProto {
                name: Some("Account".to_string()),
                field: vec![
                    field("id", Type::String, None),
                    FieldDescriptorProto {
                        label: Some(Label::Repeated as i32),
                        ..field("emails", Type::String, None)
                    },
                    FieldDescriptorProto {
                        options: Some(FieldOptions {
                            deprecated: Some(true),
                            ..Default::default()
                        }),
                        ..field("balance", Type::Double, None)
                    },
                ],
                options: Some(MessageOptions {
                    deprecated: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ],
        options: Some(FileOptions {
            java_package: Some("com.acme.app".to_string()),
            java_outer_classname: Some("UserProto".to_string()),
            java_multiple_files: Some(multiple_files),
            ..Default::default()
        }),
        source_code_info: Some(SourceCodeInfo {
            location: vec![
                location(&[4, 0], Some(" A registered user.\n"), None),
                location(&[4, 0, 2, 1], None, Some(" Display name.\n")),
                location(&[4, 1], Some(" Billing account.\n"), None),
            ],
        }),
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

fn timestamp_proto() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("google/protobuf/timestamp.proto".to_string()),
        package: Some("google.protobuf".to_string()),
        message_type: vec![DescriptorProto {
            name: Some("Timestamp".to_string()),
            field: vec![
                field("seconds", Type::Int64, None),
                field("nanos", Type::Int32, None),
            ],
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn empty_proto() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("enums.proto".to_string()),
        package: Some("app".to_string()),
        ..Default::default()
    }
}

fn field(name: &str, ty: Type, type_name: Option<&str>) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        r#type: Some(ty as i32),
        label: Some(Label::Optional as i32),
        type_name: type_name.map(str::to_string),
        ..Default::default()
    }
}

fn location(path: &[i32], leading: Option<&str>, trailing: Option<&str>) -> Location {
    Location {
        path: path.to_vec(),
        leading_comments: leading.map(str::to_string),
        trailing_comments: trailing.map(str::to_string),
        ..Default::default()
    }
}

fn request(multiple_files: bool, parameter: Option<&str>) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: vec!["user.proto".to_string()],
        parameter: parameter.map(str::to_string),
        proto_file: vec![timestamp_proto(), user_proto(multiple_files)],
        ..Default::default()
    }
}

fn content<'a>(response: &'a CodeGeneratorResponse, name: &str) -> &'a str {
    response
        .file
        .iter()
        .find(|f| f.name() == name)
        .unwrap_or_else(|| panic!("no generated file named {name}"))
        .content()
}

#[test]
fn sql_user_table() {
    let (response, stats) = codegen::generate_sql(&request(false, None)).unwrap();

    assert_eq!(response.file.len(), 1);
    let sql = content(&response, "user.sql");

    let expected_user = "\
-- app.User
-- A registered user.
CREATE TABLE IF NOT EXISTS `user` (
  `id` BIGINT(20) NOT NULL AUTO_INCREMENT,
  `name` VARCHAR(100) DEFAULT '' COMMENT 'Display name.',
  `create_time` TIMESTAMP DEFAULT now(),

  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8 COLLATE=utf8_bin COMMENT 'app.User A registered user.';
";
    assert!(sql.contains(expected_user), "{sql}");
    assert_eq!(stats.files_generated, 1);
    assert_eq!(stats.messages_generated, 2);
    assert_eq!(stats.fields_generated, 6);
    assert_eq!(stats.unhandled_fields, 0);
}

#[test]
fn sql_deprecated_account_table() {
    let (response, _) = codegen::generate_sql(&request(false, None)).unwrap();
    let sql = content(&response, "user.sql");

    let expected_account = "\
-- app.Account
-- @deprecated
-- Billing account.
CREATE TABLE IF NOT EXISTS `account` (
  `id` VARCHAR(32) NOT NULL,
  `emails` TEXT,
  `balance` DECIMAL(20,6) DEFAULT 0 COMMENT '@deprecated',

  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8 COLLATE=utf8_bin COMMENT 'app.Account @deprecated Billing account.';
";
    assert!(sql.contains(expected_account), "{sql}");
    assert!(sql.starts_with(
        "-- Generated by the protoc-gen-sql plugin.  DO NOT EDIT!\n-- file: user.proto\n\n"
    ));
}

#[test]
fn sql_column_names_are_raw_field_names() {
    let (response, _) = codegen::generate_sql(&request(false, None)).unwrap();
    let sql = content(&response, "user.sql");

    for name in ["id", "name", "create_time", "emails", "balance"] {
        assert!(sql.contains(&format!("  `{name}` ")), "missing column {name}");
    }
}

#[test]
fn java_multiple_files() {
    let (response, _) = codegen::generate_naming(&request(true, None)).unwrap();

    let names: Vec<&str> = response.file.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        vec![
            "com/acme/app/naming/UserNaming.java",
            "com/acme/app/naming/AccountNaming.java",
        ]
    );

    let user = content(&response, "com/acme/app/naming/UserNaming.java");
    let expected = "\
/* Generated by the proto-naming plugin.  DO NOT EDIT! */

package com.acme.app.naming;

/**
 * A registered user.
 * <p>
 * proto: app.User
 */
public interface UserNaming {
  /**
   * TYPE_INT64
   */
  String ID = \"id\";
  /**
   * Display name.
   * <p>
   * TYPE_STRING
   */
  String NAME = \"name\";
  /**
   * TYPE_MESSAGE: .google.protobuf.Timestamp
   */
  String CREATE_TIME = \"create_time\";
}
";
    assert_eq!(user, expected);
}

#[test]
fn java_multiple_files_deprecation() {
    let (response, _) = codegen::generate_naming(&request(true, None)).unwrap();
    let account = content(&response, "com/acme/app/naming/AccountNaming.java");

    assert!(account.contains(" */\n@java.lang.Deprecated\npublic interface AccountNaming {\n"));
    assert!(account.contains("  @java.lang.Deprecated\n  String BALANCE = \"balance\";\n"));
    assert!(account.contains("  String EMAILS = \"emails\";\n"));
}

#[test]
fn java_single_file() {
    let (response, _) = codegen::generate_naming(&request(false, None)).unwrap();
    assert_eq!(response.file.len(), 1);

    let java = content(&response, "com/acme/app/naming/UserProtoNaming.java");
    let expected = "\
/* Generated by the proto-naming plugin.  DO NOT EDIT! */

package com.acme.app.naming;

/**
 * file: user.proto
 */
public interface UserProtoNaming {
  /**
   * A registered user.
   * <p>
   * proto: app.User
   */
  String USER = \"User\";

  /**
   * Billing account.
   * <p>
   * proto: app.Account
   */
  @java.lang.Deprecated
  String ACCOUNT = \"Account\";
}
";
    assert_eq!(java, expected);
}

#[test]
fn java_package_parameter() {
    let req = request(false, Some("java_package=org.example.names"));
    let (response, _) = codegen::generate_naming(&req).unwrap();

    let java = content(&response, "org/example/names/UserProtoNaming.java");
    assert!(java.contains("package org.example.names;"));
}

#[test]
fn protos_without_messages_produce_nothing() {
    let req = CodeGeneratorRequest {
        file_to_generate: vec!["enums.proto".to_string()],
        proto_file: vec![empty_proto()],
        ..Default::default()
    };

    let (sql, stats) = codegen::generate_sql(&req).unwrap();
    assert!(sql.file.is_empty());
    assert_eq!(stats.protos_skipped, 1);

    let (naming, _) = codegen::generate_naming(&req).unwrap();
    assert!(naming.file.is_empty());
}

#[test]
fn missing_file_to_generate_is_fatal() {
    let req = CodeGeneratorRequest {
        file_to_generate: vec!["user.proto".to_string()],
        proto_file: vec![timestamp_proto()],
        ..Default::default()
    };

    let err = codegen::generate_naming(&req).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn plugin_exchange_over_bytes() {
    let bytes = request(false, Some("User")).encode_to_vec();

    let decoded = plugin::decode_request(&bytes).unwrap();
    let (response, _) = codegen::generate_sql(&decoded).unwrap();
    let encoded = plugin::encode_response(&response).unwrap();

    let returned = CodeGeneratorResponse::decode(encoded.as_slice()).unwrap();
    assert_eq!(returned.error, None);
    assert_eq!(returned.file.len(), 1);
    assert_eq!(returned.file[0].name(), "user.sql");
    assert!(returned.file[0].content().contains("CREATE TABLE IF NOT EXISTS `user` ("));
}

#[test]
fn undecodable_request_is_an_error() {
    let err = plugin::decode_request(b"\x0a\xff\xff\xff\xff\xff\xff\xff\xff\xff\xff").unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn deterministic_output() {
    let a = codegen::generate_sql(&request(false, None)).unwrap().0;
    let b = codegen::generate_sql(&request(false, None)).unwrap().0;
    assert_eq!(a, b);

    let a = codegen::generate_naming(&request(true, None)).unwrap().0;
    let b = codegen::generate_naming(&request(true, None)).unwrap().0;
    assert_eq!(a, b);
}

//! protoc plugins that turn `.proto` descriptors into Java naming interfaces
//! and SQL table definitions.
//!
//! Two binaries share this library:
//!
//! - `protoc-gen-naming` emits Java interfaces whose string constants hold
//!   proto message and field names, so Java code can refer to them without
//!   string literals.
//! - `protoc-gen-sql` emits a MySQL `CREATE TABLE` script per proto file, one
//!   table per message, with column types inferred from field types and names.
//!
//! Source comments attached to messages and fields are carried into the
//! generated Javadoc and SQL `COMMENT` clauses.
//!
//! # Usage
//!
//! ```sh
//! protoc --plugin=protoc-gen-naming --naming_out=java_package=com.acme.names:gen user.proto
//! protoc --plugin=protoc-gen-sql --sql_out=User:gen user.proto
//! ```
//!
//! The library can also be driven directly with a decoded request:
//!
//! ```no_run
//! let request = proto_naming::plugin::read_request(None)?;
//! let (response, stats) = proto_naming::codegen::generate_sql(&request)?;
//! eprintln!("Generated {} files", stats.files_generated);
//! proto_naming::plugin::write_response(&response, None)?;
//! # Ok::<(), proto_naming::error::Error>(())
//! ```

pub mod codegen;
pub mod comments;
pub mod error;
pub mod index;
pub mod java;
pub mod options;
pub mod plugin;
pub mod sql;
pub mod type_map;

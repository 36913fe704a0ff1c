//! Plugin parameter parsing.
//!
//! protoc passes everything after `--<plugin>_out=` and before the `:` as a
//! single parameter string, e.g. `--naming_out=java_package=com.acme.names:out`.
//! The two plugins read that string with different grammars:
//!
//! - `protoc-gen-naming`: comma-separated `key=value` pairs or bare flags.
//! - `protoc-gen-sql`: comma-separated message names to echo to stderr.

use std::collections::BTreeMap;

/// Split a parameter string into `key -> value` entries.
///
/// Each comma-separated token is either a bare flag (`key`, value `None`) or
/// a `key=value` pair split at the first `=`. Later duplicates win.
pub fn parse_parameter(parameter: &str) -> BTreeMap<String, Option<String>> {
    let mut opts = BTreeMap::new();
    if parameter.is_empty() {
        return opts;
    }
    for part in parameter.split(',') {
        match part.split_once('=') {
            Some((key, value)) => opts.insert(key.to_string(), Some(value.to_string())),
            None => opts.insert(part.to_string(), None),
        };
    }
    opts
}

/// Options understood by the Java naming generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingOptions {
    /// Overrides the computed Java package of every generated file.
    pub java_package: Option<String>,
}

impl NamingOptions {
    pub fn from_parameter(parameter: &str) -> Self {
        let mut opts = parse_parameter(parameter);
        Self {
            java_package: opts.remove("java_package").flatten(),
        }
    }
}

/// Options understood by the SQL generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlOptions {
    /// Messages whose `CREATE TABLE` statement is echoed to stderr.
    pub echo_messages: Vec<String>,
}

impl SqlOptions {
    pub fn from_parameter(parameter: &str) -> Self {
        if parameter.is_empty() {
            return Self::default();
        }
        Self {
            echo_messages: parameter.split(',').map(|s| s.trim().to_string()).collect(),
        }
    }

    pub fn echoes(&self, message: &str) -> bool {
        self.echo_messages.iter().any(|m| m == message)
    }
}

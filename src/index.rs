//! Lookup from proto file name to its descriptor.

use std::collections::HashMap;

use prost_types::FileDescriptorProto;

/// Borrowed index over the `proto_file` list of a request.
///
/// protoc guarantees file names are unique within a request. If a name does
/// repeat, the later descriptor replaces the earlier one.
#[derive(Debug, Default)]
pub struct DescriptorIndex<'a> {
    files: HashMap<&'a str, &'a FileDescriptorProto>,
}

impl<'a> DescriptorIndex<'a> {
    /// Index every file descriptor by its `name`.
    pub fn build(files: &'a [FileDescriptorProto]) -> Self {
        let mut index = HashMap::with_capacity(files.len());
        for file in files {
            index.insert(file.name(), file);
        }
        Self { files: index }
    }

    /// Look up a file descriptor by name.
    pub fn get(&self, name: &str) -> Option<&'a FileDescriptorProto> {
        self.files.get(name).copied()
    }

    /// Number of distinct file names indexed.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the request carried no file descriptors.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

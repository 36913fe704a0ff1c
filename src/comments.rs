//! Source comment lookup by structural path.
//!
//! protoc attaches comments to descriptor elements through
//! `SourceCodeInfo.location`, keyed by a path of field numbers and indices
//! into `descriptor.proto`:
//!
//! - `[4, m]`: message `m` of the file (`FileDescriptorProto.message_type`)
//! - `[4, m, 2, f]`: field `f` of message `m` (`DescriptorProto.field`)
//!
//! Lookup is an exact match on the whole path. A prefix of a path never
//! matches, so a message query does not pick up its fields' comments.

use prost_types::FileDescriptorProto;
use prost_types::source_code_info::Location;

/// `FileDescriptorProto.message_type` field number.
const FILE_MESSAGE_TYPE: i32 = 4;
/// `DescriptorProto.field` field number.
const MESSAGE_FIELD: i32 = 2;

/// Structural address of a message or field within one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentPath {
    parts: [i32; 4],
    len: usize,
}

impl CommentPath {
    /// Path of the message at `message` in the file's `message_type` list.
    pub fn message(message: usize) -> Self {
        Self {
            parts: [FILE_MESSAGE_TYPE, message as i32, 0, 0],
            len: 2,
        }
    }

    /// Path of field `field` of the message at `message`.
    pub fn field(message: usize, field: usize) -> Self {
        Self {
            parts: [FILE_MESSAGE_TYPE, message as i32, MESSAGE_FIELD, field as i32],
            len: 4,
        }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.parts[..self.len]
    }

    fn matches(&self, location: &Location) -> bool {
        location.path.as_slice() == self.as_slice()
    }
}

/// Concatenate the leading and trailing comments of every location whose path
/// equals `path`, in the order the locations are stored.
///
/// Returns an empty string when nothing matches.
pub fn resolve(locations: &[Location], path: CommentPath) -> String {
    let mut out = String::new();
    for location in locations.iter().filter(|l| path.matches(l)) {
        out.push_str(location.leading_comments());
        out.push_str(location.trailing_comments());
    }
    out
}

/// Comment text of message `message` in `file`.
pub fn message_comment(file: &FileDescriptorProto, message: usize) -> String {
    resolve(locations(file), CommentPath::message(message))
}

/// Comment text of field `field` of message `message` in `file`.
pub fn field_comment(file: &FileDescriptorProto, message: usize, field: usize) -> String {
    resolve(locations(file), CommentPath::field(message, field))
}

fn locations(file: &FileDescriptorProto) -> &[Location] {
    file.source_code_info
        .as_ref()
        .map(|info| info.location.as_slice())
        .unwrap_or_default()
}

/// Render raw comment text as a block of prefixed lines.
///
/// Each line is trimmed; blank lines are dropped. Every kept line becomes
/// `prefix + line + "\n"`. Empty input yields an empty string.
pub fn format_comment(comment: &str, prefix: &str) -> String {
    let mut out = String::new();
    for line in comment.lines().map(str::trim).filter(|l| !l.is_empty()) {
        out.push_str(prefix);
        out.push_str(line);
        out.push('\n');
    }
    out
}

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::DecodeError;
use crate::native::{integer_field, string_field, unsigned_field, NativeObject};

/// Name given to the placeholder record produced for an empty file list.
///
/// Carries no bug-report link: the crate has no published issue tracker.
/// Applications with their own tracker can check
/// [`FileHandle::is_sentinel`] and show a link next to it.
pub const SENTINEL_NAME: &str =
    "Got an empty file list where at least one file was expected, please report an error to the filedrop maintainers";

/// MIME type of the placeholder record.
pub const SENTINEL_MIME: &str = "text/plain";

/// A selected or dropped file: browser-reported metadata plus the native
/// file object it was read from.
///
/// The native reference is kept untouched so the handle can be passed on
/// (to a worker, a native command, another window) and re-encoded without
/// loss. Metadata is not verified against the file contents.
#[derive(Debug, Clone, PartialEq)]
pub struct FileHandle<R = Value> {
    value: R,
    name: String,
    mime: String,
    size: u64,
    last_modified: DateTime<Utc>,
}

impl<R: NativeObject> FileHandle<R> {
    /// Decode one native file entry.
    ///
    /// Requires `name` and `type` strings, a non-negative integer `size` and
    /// an integer `lastModified` in epoch milliseconds.
    pub fn decode(entry: &R) -> Result<Self, DecodeError> {
        let name = string_field(entry, "name")?;
        let mime = string_field(entry, "type")?;
        let size = unsigned_field(entry, "size")?;
        let millis = integer_field(entry, "lastModified")?;
        let last_modified = Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| DecodeError::wrong_type("lastModified", "timestamp in range"))?;

        Ok(FileHandle {
            value: entry.clone(),
            name,
            mime,
            size,
            last_modified,
        })
    }

    /// Placeholder record standing in for a file when a list decoded empty.
    pub fn sentinel() -> Self {
        FileHandle {
            value: R::default(),
            name: SENTINEL_NAME.to_string(),
            mime: SENTINEL_MIME.to_string(),
            size: 0,
            last_modified: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl<R> FileHandle<R> {
    /// The native reference, exactly as it was decoded.
    pub fn encode(&self) -> &R {
        &self.value
    }

    pub fn into_value(self) -> R {
        self.value
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Reported MIME type, or one inferred from the file extension when the
    /// browser left it empty.
    pub fn guessed_mime(&self) -> Option<String> {
        if !self.mime.is_empty() {
            return Some(self.mime.clone());
        }
        mime_guess::from_path(&self.name)
            .first()
            .map(|m| m.essence_str().to_string())
    }

    pub fn is_sentinel(&self) -> bool {
        self.name == SENTINEL_NAME && self.size == 0
    }
}

/// Decode one native file entry. See [`FileHandle::decode`].
pub fn decode_one<R: NativeObject>(entry: &R) -> Result<FileHandle<R>, DecodeError> {
    FileHandle::decode(entry)
}

// Only the native reference crosses a serialization boundary; the receiving
// side re-derives the metadata by decoding it.
impl<R: Serialize> Serialize for FileHandle<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FileHandle<Value> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        FileHandle::decode(&value).map_err(serde::de::Error::custom)
    }
}

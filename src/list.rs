use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::file::FileHandle;
use crate::native::NativeObject;

/// What the binders do when a file list decodes to zero entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyList {
    /// Fail the dispatch with [`DecodeError::NoFiles`].
    #[default]
    Reject,
    /// Deliver the placeholder record from [`FileHandle::sentinel`].
    Sentinel,
}

/// Decode a browser `FileList` (or any array-like with `length` and
/// integer keys) into handles, in list order.
pub fn decode_file_list<R: NativeObject>(list: &R) -> Result<Vec<FileHandle<R>>, DecodeError> {
    let length = match list.field("length") {
        Some(len) => len
            .as_integer()
            .ok_or_else(|| DecodeError::wrong_type("length", "integer"))?,
        None => list.length().ok_or_else(|| DecodeError::missing("length"))?,
    };
    let length = usize::try_from(length)
        .map_err(|_| DecodeError::wrong_type("length", "non-negative integer"))?;

    // `length` is payload-supplied; grow as entries are actually found.
    let mut files = Vec::new();
    for index in 0..length {
        let key = index.to_string();
        let entry = list
            .field(&key)
            .ok_or_else(|| DecodeError::missing(key.as_str()))?;
        files.push(FileHandle::decode(entry).map_err(|e| e.within(&key))?);
    }
    Ok(files)
}

/// Split a decoded list into its first file and the rest.
pub fn split_first<R>(
    files: Vec<FileHandle<R>>,
) -> Result<(FileHandle<R>, Vec<FileHandle<R>>), DecodeError> {
    let mut files = files.into_iter();
    match files.next() {
        Some(first) => Ok((first, files.collect())),
        None => Err(DecodeError::NoFiles),
    }
}

/// Like [`split_first`], but an empty list yields the sentinel record and
/// an empty tail.
pub fn split_or_sentinel<R: NativeObject>(
    files: Vec<FileHandle<R>>,
) -> (FileHandle<R>, Vec<FileHandle<R>>) {
    split_first(files).unwrap_or_else(|_| (FileHandle::sentinel(), Vec::new()))
}

/// Decode a file list and split it according to `policy`.
pub fn decode_split<R: NativeObject>(
    list: &R,
    policy: EmptyList,
) -> Result<(FileHandle<R>, Vec<FileHandle<R>>), DecodeError> {
    let files = decode_file_list(list)?;
    match policy {
        EmptyList::Reject => split_first(files),
        EmptyList::Sentinel => Ok(split_or_sentinel(files)),
    }
}

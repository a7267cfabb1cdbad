//! Hidden `<input type="file">` bindings.
//!
//! The element is never shown; the page opens the native picker by
//! forwarding a click to it (`document.getElementById(id).click()`).

use crate::error::DecodeError;
use crate::events::{Attribute, Bindings, EventKind, Listener};
use crate::file::FileHandle;
use crate::list::{decode_split, EmptyList};
use crate::native::{at, NativeObject};

const PICKED_FILE: [&str; 3] = ["target", "files", "0"];
const PICKED_FILES: [&str; 2] = ["target", "files"];

fn hidden_input<Msg, R>(id: &str, accept: &[String]) -> Bindings<Msg, R> {
    Bindings::new()
        .with_attribute(Attribute::InputType("file".to_string()))
        .with_attribute(Attribute::Id(id.to_string()))
        .with_attribute(Attribute::Accept(accept.to_vec()))
        .with_attribute(Attribute::Hidden)
}

/// Single-file picker. `accept` is the MIME allow-list handed to the
/// native dialog; it is not enforced on the result.
pub fn single<Msg, R>(
    id: &str,
    accept: &[String],
    on_file: impl Fn(FileHandle<R>) -> Msg + 'static,
) -> Bindings<Msg, R>
where
    R: NativeObject + 'static,
{
    hidden_input(id, accept).with_listener(Listener::new(EventKind::Change, move |event: &R| {
        let entry = at(event, &PICKED_FILE)?;
        FileHandle::decode(entry)
            .map(&on_file)
            .map_err(|e| e.within(&PICKED_FILE.join(".")))
    }))
}

/// Multi-file picker.
pub fn multiple<Msg, R>(
    id: &str,
    accept: &[String],
    empty: EmptyList,
    on_files: impl Fn(FileHandle<R>, Vec<FileHandle<R>>) -> Msg + 'static,
) -> Bindings<Msg, R>
where
    R: NativeObject + 'static,
{
    hidden_input(id, accept)
        .with_attribute(Attribute::Multiple)
        .with_listener(Listener::new(EventKind::Change, move |event: &R| {
            decode_picked(event, empty).map(|(first, rest)| on_files(first, rest))
        }))
}

fn decode_picked<R: NativeObject>(
    event: &R,
    empty: EmptyList,
) -> Result<(FileHandle<R>, Vec<FileHandle<R>>), DecodeError> {
    let files = at(event, &PICKED_FILES)?;
    decode_split(files, empty).map_err(|e| e.within(&PICKED_FILES.join(".")))
}

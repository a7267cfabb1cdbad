//! File handles and DOM file-event bindings.
//!
//! A [`FileHandle`] is the metadata of a selected or dropped file plus the
//! native object it came from, kept verbatim so it can be handed on
//! untouched. The binders ([`DropTarget`], [`input::single`],
//! [`input::multiple`]) produce [`Bindings`]: element attributes plus
//! listeners that decode `change`, `dragover`, `drop` and `dragleave`
//! payloads into application messages.

pub mod config;
pub mod demo;
pub mod drop_target;
pub mod error;
pub mod events;
pub mod file;
pub mod input;
pub mod list;
pub mod native;
#[cfg(feature = "tauri")]
pub mod plugin;

pub use drop_target::{decode_drop_event, DropEvent, DropTarget};
pub use error::DecodeError;
pub use events::{Attribute, Bindings, Dispatch, EventKind, Listener};
pub use file::{decode_one, FileHandle};
pub use list::{decode_file_list, split_first, split_or_sentinel, EmptyList};
pub use native::NativeObject;

//! Drag-and-drop bindings for a drop zone.
//!
//! `dragover` and `drop` carry the dragged files under `dataTransfer.files`.
//! `dragleave` is noisy: it bubbles up from every child element the pointer
//! crosses and ignores the zone's visual border. It is only bound when the
//! caller names the zone element, and only fires when the event's target is
//! that element.

use serde::Serialize;
use serde_json::Value;

use crate::error::DecodeError;
use crate::events::{Attribute, Bindings, EventKind, Listener};
use crate::file::FileHandle;
use crate::list::{decode_split, EmptyList};
use crate::native::{at, NativeObject};

const DRAGGED_FILES: [&str; 2] = ["dataTransfer", "files"];
const TARGET_ID: [&str; 2] = ["target", "id"];

type FilesCallback<Msg, R> = Box<dyn Fn(FileHandle<R>, Vec<FileHandle<R>>) -> Msg>;

/// Element id and message for leave detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveGuard<Msg> {
    pub id: String,
    pub msg: Msg,
}

/// Callbacks for a drop zone. Consumed by [`DropTarget::bind`].
pub struct DropTarget<Msg, R = Value> {
    on_over: FilesCallback<Msg, R>,
    on_drop: FilesCallback<Msg, R>,
    on_leave: Option<LeaveGuard<Msg>>,
    empty: EmptyList,
}

impl<Msg, R> DropTarget<Msg, R>
where
    Msg: Clone + 'static,
    R: NativeObject + 'static,
{
    pub fn new(
        on_over: impl Fn(FileHandle<R>, Vec<FileHandle<R>>) -> Msg + 'static,
        on_drop: impl Fn(FileHandle<R>, Vec<FileHandle<R>>) -> Msg + 'static,
    ) -> Self {
        DropTarget {
            on_over: Box::new(on_over),
            on_drop: Box::new(on_drop),
            on_leave: None,
            empty: EmptyList::default(),
        }
    }

    /// Tag the zone element with `id` and produce `msg` when the pointer
    /// leaves that element itself.
    pub fn on_leave(mut self, id: impl Into<String>, msg: Msg) -> Self {
        self.on_leave = Some(LeaveGuard { id: id.into(), msg });
        self
    }

    pub fn empty_list(mut self, policy: EmptyList) -> Self {
        self.empty = policy;
        self
    }

    pub fn bind(self) -> Bindings<Msg, R> {
        let DropTarget {
            on_over,
            on_drop,
            on_leave,
            empty,
        } = self;

        let mut bindings = Bindings::new()
            .with_listener(Listener::new(EventKind::DragOver, move |event: &R| {
                decode_dragged(event, empty).map(|(first, rest)| on_over(first, rest))
            }))
            .with_listener(Listener::new(EventKind::Drop, move |event: &R| {
                decode_dragged(event, empty).map(|(first, rest)| on_drop(first, rest))
            }));

        if let Some(LeaveGuard { id, msg }) = on_leave {
            bindings = bindings.with_attribute(Attribute::Id(id.clone()));
            bindings = bindings.with_listener(Listener::new(
                EventKind::DragLeave,
                move |event: &R| {
                    let found = target_id(event)?;
                    if found == id {
                        Ok(msg.clone())
                    } else {
                        Err(DecodeError::TargetMismatch {
                            expected: id.clone(),
                            found,
                        })
                    }
                },
            ));
        }

        bindings
    }
}

impl<R> DropTarget<DropEvent<R>, R>
where
    R: NativeObject + 'static,
{
    /// A drop target producing [`DropEvent`] messages, with leave detection
    /// on the element `leave_id` when given.
    pub fn messages(leave_id: Option<String>) -> Self {
        let target = Self::new(
            |first, rest| DropEvent::Over { first, rest },
            |first, rest| DropEvent::Drop { first, rest },
        );
        match leave_id {
            Some(id) => target.on_leave(id, DropEvent::Leave),
            None => target,
        }
    }
}

fn decode_dragged<R: NativeObject>(
    event: &R,
    empty: EmptyList,
) -> Result<(FileHandle<R>, Vec<FileHandle<R>>), DecodeError> {
    let files = at(event, &DRAGGED_FILES)?;
    decode_split(files, empty).map_err(|e| e.within(&DRAGGED_FILES.join(".")))
}

fn target_id<R: NativeObject>(event: &R) -> Result<String, DecodeError> {
    at(event, &TARGET_ID)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DecodeError::wrong_type(TARGET_ID.join("."), "string"))
}

/// Drop-zone activity as explicit messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DropEvent<R = Value> {
    /// Files are being dragged over the zone.
    Over {
        first: FileHandle<R>,
        rest: Vec<FileHandle<R>>,
    },
    Drop {
        first: FileHandle<R>,
        rest: Vec<FileHandle<R>>,
    },
    Leave,
}

impl<R> DropEvent<R> {
    /// Files carried by the event, in list order.
    pub fn files(&self) -> Vec<&FileHandle<R>> {
        match self {
            DropEvent::Over { first, rest } | DropEvent::Drop { first, rest } => {
                std::iter::once(first).chain(rest.iter()).collect()
            }
            DropEvent::Leave => Vec::new(),
        }
    }
}

/// Decode one forwarded drop-zone event into a [`DropEvent`], as bound by
/// [`DropTarget::messages`]. `Ok(None)` when the zone does not listen for
/// `event` (a `dragleave` without `leave_id`, or `change`).
pub fn decode_drop_event(
    event: EventKind,
    payload: &Value,
    leave_id: Option<String>,
) -> Result<Option<DropEvent>, DecodeError> {
    let bindings = DropTarget::<DropEvent>::messages(leave_id).bind();
    match bindings.dispatch(event, payload) {
        Some(dispatch) => dispatch.outcome.map(Some),
        None => Ok(None),
    }
}

//! Tauri plugin: drop-zone events forwarded from the webview are decoded
//! here and re-emitted to the window as typed [`DropEvent`]s.
//!
//! Page-side glue attaches the listeners from [`describe_drop_zone`] and
//! invokes `plugin:filedrop|dispatch_drop_event` with the event name and a
//! JSON copy of the event (`dataTransfer.files` entries with `name`, `type`,
//! `size`, `lastModified`; `target.id`).

use serde_json::Value;
use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Emitter, Runtime, Window};

use crate::drop_target::{decode_drop_event, DropEvent, DropTarget};
use crate::events::{BindingSpec, EventKind};

/// Window event carrying each decoded [`DropEvent`].
pub const DROP_EVENT: &str = "file-drop-event";

pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("filedrop")
        .invoke_handler(tauri::generate_handler![
            describe_drop_zone,
            dispatch_drop_event
        ])
        .build()
}

#[tauri::command]
fn describe_drop_zone(leave_id: Option<String>) -> BindingSpec {
    DropTarget::<DropEvent>::messages(leave_id).bind().describe()
}

/// Decode one drop-zone event and emit it as [`DROP_EVENT`]. Events that
/// do not decode (bubbled `dragleave`, empty lists) are reported back to
/// the caller and not emitted.
#[tauri::command]
fn dispatch_drop_event<R: Runtime>(
    window: Window<R>,
    event: EventKind,
    payload: Value,
    leave_id: Option<String>,
) -> Result<Option<DropEvent>, String> {
    let drop_event = match decode_drop_event(event, &payload, leave_id) {
        Ok(Some(drop_event)) => drop_event,
        Ok(None) => return Ok(None),
        Err(e) => {
            log::debug!("Dropped {} event: {}", event, e);
            return Err(e.to_string());
        }
    };
    window
        .emit(DROP_EVENT, drop_event.clone())
        .map_err(|e| e.to_string())?;
    Ok(Some(drop_event))
}

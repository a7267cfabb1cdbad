use serde_json::Value;

use crate::config::DemoConfig;
use crate::drop_target::{DropEvent, DropTarget};
use crate::events::{Bindings, Dispatch, EventKind};
use crate::file::FileHandle;
use crate::input;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Zone(DropEvent),
    Picked(FileHandle, Vec<FileHandle>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub hovering: bool,
    pub files: Vec<FileHandle>,
    /// Dispatched events whose payload did not decode.
    pub rejected: usize,
}

pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Zone(DropEvent::Over { .. }) => model.hovering = true,
        Msg::Zone(DropEvent::Leave) => model.hovering = false,
        Msg::Zone(DropEvent::Drop { first, rest }) | Msg::Picked(first, rest) => {
            model.hovering = false;
            model.files = std::iter::once(first).chain(rest).collect();
        }
    }
}

pub fn view(model: &Model) -> String {
    let mut out = String::new();
    if model.hovering {
        out.push_str("[drop zone: release to drop]\n");
    } else {
        out.push_str("[drop zone: drag files here]\n");
    }
    if model.files.is_empty() {
        out.push_str("  (no files)\n");
    }
    if model.rejected > 0 {
        out.push_str(&format!("  ({} ignored events)\n", model.rejected));
    }
    for file in &model.files {
        let mime = file.guessed_mime().unwrap_or_else(|| "unknown type".to_string());
        out.push_str(&format!(
            "  {} ({}, {} bytes, modified {})\n",
            file.name(),
            mime,
            file.size(),
            file.last_modified().format("%Y-%m-%d %H:%M:%S UTC"),
        ));
    }
    out
}

/// Which bound element an event was dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    DropZone,
    FileInput,
}

/// The demo's model plus the bindings for its two elements.
pub struct App {
    pub model: Model,
    drop_zone: Bindings<Msg>,
    file_input: Bindings<Msg>,
}

impl App {
    pub fn new(config: &DemoConfig) -> Self {
        let drop_zone = DropTarget::new(
            |first, rest| Msg::Zone(DropEvent::Over { first, rest }),
            |first, rest| Msg::Zone(DropEvent::Drop { first, rest }),
        )
        .on_leave(config.drop_zone_id.clone(), Msg::Zone(DropEvent::Leave))
        .empty_list(config.empty_list)
        .bind();

        let file_input = if config.multiple {
            input::multiple(&config.input_id, &config.accept, config.empty_list, Msg::Picked)
        } else {
            input::single(&config.input_id, &config.accept, |file: FileHandle| {
                Msg::Picked(file, Vec::new())
            })
        };

        App {
            model: Model::default(),
            drop_zone,
            file_input,
        }
    }

    pub fn bindings(&self, element: Element) -> &Bindings<Msg> {
        match element {
            Element::DropZone => &self.drop_zone,
            Element::FileInput => &self.file_input,
        }
    }

    /// Dispatch one native event and apply the resulting message.
    /// Returns the dispatch with the message consumed, or `None` if the
    /// element has no listener for the event.
    pub fn handle(
        &mut self,
        element: Element,
        event: EventKind,
        payload: &Value,
    ) -> Option<Dispatch<()>> {
        let dispatch = self.bindings(element).dispatch(event, payload)?;
        let Dispatch {
            stop_propagation,
            prevent_default,
            outcome,
        } = dispatch;
        if outcome.is_err() {
            self.model.rejected += 1;
        }
        let outcome = outcome.map(|msg| update(&mut self.model, msg));
        Some(Dispatch {
            stop_propagation,
            prevent_default,
            outcome,
        })
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DecodeError;

/// DOM events the binders listen to.
///
/// `dragenter` is deliberately absent: `dragover` stands in for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "change")]
    Change,
    #[serde(rename = "dragover")]
    DragOver,
    #[serde(rename = "drop")]
    Drop,
    #[serde(rename = "dragleave")]
    DragLeave,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Change => "change",
            EventKind::DragOver => "dragover",
            EventKind::Drop => "drop",
            EventKind::DragLeave => "dragleave",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute a binding sets on its element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Id(String),
    InputType(String),
    Accept(Vec<String>),
    Multiple,
    Hidden,
}

impl Attribute {
    /// The DOM `(name, value)` pair.
    pub fn to_pair(&self) -> (&'static str, String) {
        match self {
            Attribute::Id(id) => ("id", id.clone()),
            Attribute::InputType(kind) => ("type", kind.clone()),
            Attribute::Accept(mimes) => ("accept", mimes.join(",")),
            Attribute::Multiple => ("multiple", String::new()),
            Attribute::Hidden => ("style", "display: none".to_string()),
        }
    }
}

type Decoder<Msg, R> = Box<dyn Fn(&R) -> Result<Msg, DecodeError>>;

/// One event listener: which event, and how to turn its payload into a
/// message. Every listener stops propagation and prevents the default
/// action, whether or not the payload decodes.
pub struct Listener<Msg, R = Value> {
    kind: EventKind,
    decoder: Decoder<Msg, R>,
}

impl<Msg, R> Listener<Msg, R> {
    pub fn new(
        kind: EventKind,
        decoder: impl Fn(&R) -> Result<Msg, DecodeError> + 'static,
    ) -> Self {
        Listener {
            kind,
            decoder: Box::new(decoder),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn handle(&self, event: &R) -> Dispatch<Msg> {
        Dispatch {
            stop_propagation: true,
            prevent_default: true,
            outcome: (self.decoder)(event),
        }
    }
}

/// Result of handing one native event to a listener.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch<Msg> {
    pub stop_propagation: bool,
    pub prevent_default: bool,
    pub outcome: Result<Msg, DecodeError>,
}

impl<Msg> Dispatch<Msg> {
    /// The message, if the payload decoded. Failures are dropped here the
    /// way a host event loop drops them: logged, never surfaced.
    pub fn message(self) -> Option<Msg> {
        match self.outcome {
            Ok(msg) => Some(msg),
            Err(e) => {
                log::debug!("Ignoring event that did not decode: {}", e);
                None
            }
        }
    }
}

/// Attributes and listeners for one element.
pub struct Bindings<Msg, R = Value> {
    attributes: Vec<Attribute>,
    listeners: Vec<Listener<Msg, R>>,
}

impl<Msg, R> Default for Bindings<Msg, R> {
    fn default() -> Self {
        Bindings {
            attributes: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

impl<Msg, R> Bindings<Msg, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_listener(mut self, listener: Listener<Msg, R>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn listeners(&self) -> &[Listener<Msg, R>] {
        &self.listeners
    }

    pub fn listener(&self, kind: EventKind) -> Option<&Listener<Msg, R>> {
        self.listeners.iter().find(|l| l.kind == kind)
    }

    /// The element id, if the binding sets one.
    pub fn id(&self) -> Option<&str> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::Id(id) => Some(id.as_str()),
            _ => None,
        })
    }

    /// Hand a native event to the listener bound for `kind`.
    /// `None` when nothing listens for that event.
    pub fn dispatch(&self, kind: EventKind, event: &R) -> Option<Dispatch<Msg>> {
        self.listener(kind).map(|listener| listener.handle(event))
    }

    /// A serializable description for page-side glue that attaches the
    /// listeners and forwards events back.
    pub fn describe(&self) -> BindingSpec {
        BindingSpec {
            attributes: self
                .attributes
                .iter()
                .map(|a| {
                    let (name, value) = a.to_pair();
                    (name.to_string(), value)
                })
                .collect(),
            listeners: self.listeners.iter().map(|l| l.kind).collect(),
        }
    }
}

/// DOM `(name, value)` attribute pairs in binding order, and the events to
/// listen for. Page-side glue calls `stopPropagation()` and
/// `preventDefault()` on every listened event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingSpec {
    pub attributes: Vec<(String, String)>,
    pub listeners: Vec<EventKind>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn echo_bindings() -> Bindings<String> {
        Bindings::new()
            .with_attribute(Attribute::Id("zone".to_string()))
            .with_listener(Listener::new(EventKind::Drop, |event: &Value| {
                event
                    .get("tag")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| DecodeError::missing("tag"))
            }))
    }

    #[test]
    fn test_dispatch_runs_the_matching_listener() {
        let bindings = echo_bindings();
        let dispatch = bindings
            .dispatch(EventKind::Drop, &json!({ "tag": "hello" }))
            .unwrap();
        assert!(dispatch.stop_propagation);
        assert!(dispatch.prevent_default);
        assert_eq!(dispatch.message().as_deref(), Some("hello"));
    }

    #[test]
    fn test_failed_decode_keeps_flags_and_drops_message() {
        let bindings = echo_bindings();
        let dispatch = bindings.dispatch(EventKind::Drop, &json!({})).unwrap();
        assert!(dispatch.stop_propagation);
        assert!(dispatch.prevent_default);
        assert_eq!(dispatch.outcome, Err(DecodeError::missing("tag")));
        assert_eq!(dispatch.message(), None);
    }

    #[test]
    fn test_no_listener_no_dispatch() {
        let bindings = echo_bindings();
        assert!(bindings.dispatch(EventKind::DragLeave, &json!({})).is_none());
        assert_eq!(bindings.id(), Some("zone"));
    }

    #[test]
    fn test_describe_serializes_dom_names() {
        let spec = serde_json::to_value(echo_bindings().describe()).unwrap();
        assert_eq!(
            spec,
            json!({
                "attributes": [["id", "zone"]],
                "listeners": ["drop"],
            })
        );
    }

    #[test]
    fn test_event_kind_names_round_trip_through_serde() {
        for kind in [
            EventKind::Change,
            EventKind::DragOver,
            EventKind::Drop,
            EventKind::DragLeave,
        ] {
            let name = serde_json::to_value(kind).unwrap();
            assert_eq!(name, json!(kind.as_str()));
            assert_eq!(serde_json::from_value::<EventKind>(name).unwrap(), kind);
        }
    }
}

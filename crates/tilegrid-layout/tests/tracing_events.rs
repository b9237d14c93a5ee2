//! Diagnostics emitted by the layout pipeline.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tilegrid_core::{Breakpoints, DeviceProfile, ParticipantId, Tile};
use tilegrid_layout::{CapacityTable, GridConfig, GridEngine, ModeFlags, paginate};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    target: String,
    fields: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct Capture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl Capture {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn events_for(&self, target: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.target == target)
            .collect()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured_tracing<F: FnOnce()>(f: F) -> Capture {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    tracing::subscriber::with_default(subscriber, f);
    capture
}

fn people(n: usize) -> Vec<Tile> {
    (0..n)
        .map(|i| Tile::new(format!("p{i}"), format!("Person {i}")))
        .collect()
}

#[test]
fn zero_capacity_warns_and_clamps() {
    let capture = with_captured_tracing(|| {
        let page = paginate(&people(3), 0, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.page_count, 3);
    });
    let warnings = capture.events_for("tilegrid.pagination");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].level, tracing::Level::WARN);
}

#[test]
fn unknown_view_mode_warns_and_uses_grid() {
    let capture = with_captured_tracing(|| {
        let slots = CapacityTable::DEFAULT.resolve_named(DeviceProfile::desktop(), "theatre", false);
        assert_eq!(slots, 24);
    });
    let warnings = capture.events_for("tilegrid.viewmode");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].level, tracing::Level::WARN);
    assert_eq!(
        warnings[0].fields.get("requested").map(String::as_str),
        Some("theatre")
    );
}

#[test]
fn known_view_mode_is_silent() {
    let capture = with_captured_tracing(|| {
        let slots =
            CapacityTable::DEFAULT.resolve_named(DeviceProfile::desktop(), "vertical-extended", true);
        assert_eq!(slots, 8);
    });
    assert!(capture.events_for("tilegrid.viewmode").is_empty());
}

#[test]
fn layout_opens_span_with_participant_count() {
    let capture = with_captured_tracing(|| {
        let mut engine = GridEngine::new();
        let classification = Breakpoints::DEFAULT.classify(Some(1440), None, None);
        engine.layout(&people(7), &classification, &ModeFlags::default(), 1);
    });
    let spans = capture.spans();
    let layout = spans
        .iter()
        .find(|s| s.name == "tilegrid.layout")
        .expect("tilegrid.layout span");
    assert_eq!(layout.fields.get("participants").map(String::as_str), Some("7"));

    let computed = capture.events_for("tilegrid.selector");
    assert!(computed.iter().any(|e| {
        e.level == tracing::Level::DEBUG
            && e.fields.get("state").map(String::as_str) == Some("Default")
    }));
}

#[test]
fn departed_pin_is_logged() {
    let capture = with_captured_tracing(|| {
        let mut engine = GridEngine::new();
        let classification = Breakpoints::DEFAULT.classify(Some(1440), None, None);
        let flags = ModeFlags {
            pinned: Some(ParticipantId::new("left-early")),
            ..ModeFlags::default()
        };
        let layout = engine.layout(&people(2), &classification, &flags, 1);
        assert!(layout.pinned.is_none());
    });
    let events = capture.events_for("tilegrid.selector");
    assert!(events.iter().any(|e| {
        e.fields
            .get("message")
            .is_some_and(|m| m.contains("pinned participant not present"))
    }));
}

#[test]
fn config_load_is_logged() {
    let capture = with_captured_tracing(|| {
        GridConfig::parse_and_validate(r#"{ "cache_entries": 8 }"#).unwrap();
    });
    let events = capture.events_for("tilegrid.config");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fields.get("cache_entries").map(String::as_str), Some("8"));
}

use std::cell::RefCell;
use std::rc::Rc;

use chart_registry::core::{MountTarget, Viewport};
use chart_registry::extensions::{RegistryContext, RegistryEvent, RegistryPlugin};
use chart_registry::render::HeadlessChart;
use chart_registry::{ChartError, ChartRegistry, RenderRequest};
use serde_json::json;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(RegistryEvent, RegistryContext)>>>,
}

impl RecordingPlugin {
    fn new(
        id: impl Into<String>,
        events: Rc<RefCell<Vec<(RegistryEvent, RegistryContext)>>>,
    ) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl RegistryPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: RegistryEvent, context: RegistryContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn headless_registry() -> ChartRegistry<HeadlessChart> {
    ChartRegistry::new(|target, _data, _config, _format| {
        HeadlessChart::for_target(target, Viewport::new(400, 300), json!({}))
    })
}

fn event_kind(event: &RegistryEvent) -> &'static str {
    match event {
        RegistryEvent::InstanceCreated { .. } => "created",
        RegistryEvent::InstanceUpdated { .. } => "updated",
        RegistryEvent::RenderSkipped { .. } => "skipped",
    }
}

#[test]
fn plugin_receives_decisions_in_order() {
    let mut registry = headless_registry();
    let events = Rc::new(RefCell::new(Vec::new()));
    registry
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    let a = MountTarget::new("a");
    let b = MountTarget::new("b");
    registry
        .render(RenderRequest::new(a.clone(), json!(1)))
        .expect("create a");
    registry
        .render(RenderRequest::new(a.clone(), json!(1)))
        .expect("skip a");
    registry
        .render(RenderRequest::new(b.clone(), json!(1)))
        .expect("create b");
    registry
        .render(RenderRequest::new(a.clone(), json!(2)))
        .expect("update a");

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(kinds, vec!["created", "skipped", "created", "updated"]);
    let ids: Vec<_> = events.iter().map(|(event, _)| event.mount_id()).collect();
    assert_eq!(ids, vec![a.id(), a.id(), b.id(), a.id()]);
    let counts: Vec<usize> = events.iter().map(|(_, context)| context.entry_count).collect();
    assert_eq!(counts, vec![1, 1, 2, 2]);
}

#[test]
fn failed_render_emits_nothing() {
    let mut registry: ChartRegistry<HeadlessChart> =
        ChartRegistry::new(|_target, _data, _config, _format| {
            HeadlessChart::new(Viewport::new(0, 0), json!({}))
        });
    let events = Rc::new(RefCell::new(Vec::new()));
    registry
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    let err = registry
        .render(RenderRequest::new(MountTarget::new("zero"), json!(1)))
        .expect_err("zero viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert!(events.borrow().is_empty());
}

#[test]
fn plugin_registry_rejects_duplicates_and_empty_ids() {
    let mut registry = headless_registry();
    let events = Rc::new(RefCell::new(Vec::new()));

    registry
        .register_plugin(Box::new(RecordingPlugin::new("p", events.clone())))
        .expect("first");
    let duplicate =
        registry.register_plugin(Box::new(RecordingPlugin::new("p", events.clone())));
    assert!(matches!(duplicate, Err(ChartError::InvalidData(_))));
    let empty = registry.register_plugin(Box::new(RecordingPlugin::new("", events)));
    assert!(matches!(empty, Err(ChartError::InvalidData(_))));

    assert_eq!(registry.plugin_count(), 1);
    assert!(registry.has_plugin("p"));
    assert!(registry.unregister_plugin("p"));
    assert!(!registry.unregister_plugin("p"));
    assert_eq!(registry.plugin_count(), 0);
}

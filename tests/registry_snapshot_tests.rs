use chart_registry::api::{REGISTRY_SNAPSHOT_JSON_SCHEMA_V1, RegistrySnapshot};
use chart_registry::core::{MountTarget, NumberEquality, Viewport};
use chart_registry::render::HeadlessChart;
use chart_registry::{ChartError, ChartRegistry, RegistryConfig, RenderRequest};
use serde_json::json;

fn headless_registry() -> ChartRegistry<HeadlessChart> {
    ChartRegistry::new(|target, _data, _config, _format| {
        HeadlessChart::for_target(target, Viewport::new(400, 300), json!({}))
    })
}

#[test]
fn snapshot_lists_entries_in_creation_order_with_counters() {
    let mut registry = headless_registry();
    let first = MountTarget::new("first");
    let second = MountTarget::new("second");

    registry
        .render(RenderRequest::new(first.clone(), json!({"v": 1})))
        .expect("create first");
    registry
        .render(RenderRequest::new(second.clone(), json!({"v": 1})))
        .expect("create second");
    registry
        .render(RenderRequest::new(first.clone(), json!({"v": 2})))
        .expect("update first");
    registry
        .render(RenderRequest::new(second.clone(), json!({"v": 1})))
        .expect("skip second");

    let snapshot = registry.snapshot();
    let labels: Vec<&str> = snapshot
        .entries
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    assert_eq!(labels, vec!["first", "second"]);

    let first_entry = snapshot.find(first.id()).expect("first entry");
    assert_eq!(first_entry.last_data, json!({"v": 2}));
    assert_eq!(first_entry.update_count, 1);
    assert_eq!(first_entry.skip_count, 0);

    let second_entry = snapshot.find(second.id()).expect("second entry");
    assert_eq!(second_entry.update_count, 0);
    assert_eq!(second_entry.skip_count, 1);
}

#[test]
fn snapshot_json_contract_round_trips() {
    let mut registry = headless_registry();
    registry
        .render(RenderRequest::new(MountTarget::new("only"), json!([1, 2, 3])))
        .expect("create");

    let json = registry
        .snapshot_json_contract_v1_pretty()
        .expect("serialize");
    let payload: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        payload["schema_version"],
        json!(REGISTRY_SNAPSHOT_JSON_SCHEMA_V1)
    );

    let restored = RegistrySnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored, registry.snapshot());

    let bare = serde_json::to_string(&registry.snapshot()).expect("bare");
    let restored_bare = RegistrySnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(restored_bare, registry.snapshot());
}

#[test]
fn snapshot_rejects_unknown_schema_version() {
    let input = r#"{"schema_version": 7, "snapshot": {"entries": []}}"#;
    let err = RegistrySnapshot::from_json_compat_str(input).expect_err("version 7");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = RegistrySnapshot::from_json_compat_str("not json").expect_err("garbage");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn registry_config_defaults_fill_missing_fields() {
    let config = RegistryConfig::from_json_str("{}").expect("empty config");
    assert_eq!(config, RegistryConfig::default());
    assert_eq!(config.data_key.as_deref(), Some("data"));
    assert_eq!(config.number_equality, NumberEquality::Numeric);

    let config =
        RegistryConfig::from_json_str(r#"{"data_key": null, "number_equality": "strict"}"#)
            .expect("explicit config");
    assert_eq!(config.data_key, None);
    assert_eq!(config.number_equality, NumberEquality::Strict);
}

#[test]
fn registry_config_round_trips_and_validates() {
    let config = RegistryConfig::default()
        .with_data_key("series")
        .with_number_equality(NumberEquality::Strict);
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(RegistryConfig::from_json_str(&json).expect("parse"), config);

    let err = RegistryConfig::from_json_str(r#"{"data_key": ""}"#).expect_err("empty key");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
    let err = RegistryConfig::from_json_str("[").expect_err("bad json");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

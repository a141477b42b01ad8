//! Behavior tests for records generated by `dto!`.
//!
//! The records declared here exercise every field kind the macro supports;
//! the entity catalog crates only ever see a subset.

use std::collections::BTreeMap;

use atelier_json::{FromJson, ToJson, dto};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

dto! {
    /// Scalar kinds only.
    pub struct Probe {
        label: (string) = "label",
        count: (int) = "count",
        ratio: (float) = "ratio",
        enabled: (bool) = "enabled",
        payload: (any) = "payload",
    }
}

dto! {
    /// Collection and nested kinds.
    pub struct Bundle {
        names: (list string) = "names",
        ports: (list int) = "ports",
        probes: (list dto Probe) = "probes",
        labels: (map string) = "labels",
        groups: (map list string) = "groups",
        index: (map dto Probe) = "index",
        inner: (dto Probe) = "inner",
    }
}

dto! {
    /// Owned recursive tree, parent owns children.
    pub struct Node {
        label: (string) = "label",
        children: (list dto Node) = "children",
    }
}

#[test]
fn blank_record_has_unset_scalars_and_empty_lists() {
    let probe = Probe::new();
    assert_eq!(probe.label(), None);
    assert_eq!(probe.count(), None);
    assert_eq!(probe.enabled(), None);
    assert!(!probe.is_enabled());

    let bundle = Bundle::new();
    assert!(bundle.names().is_empty());
    assert!(bundle.probes().is_empty());
    assert_eq!(bundle.labels(), None);
    assert_eq!(bundle.inner(), None);
}

#[test]
fn truthy_fields_round_trip() {
    let source = json!({
        "label": "alpha",
        "count": 7,
        "ratio": 0.5,
        "enabled": true,
        "payload": {"nested": [1, 2]},
    });
    let probe = Probe::from_json(&source);
    assert_eq!(probe.label(), Some("alpha"));
    assert_eq!(probe.count(), Some(7));
    assert_eq!(probe.ratio(), Some(0.5));
    assert!(probe.is_enabled());
    assert_eq!(probe.to_json(), source);
}

#[rstest]
#[case::bool_false(json!({"enabled": false}))]
#[case::zero(json!({"count": 0}))]
#[case::empty_string(json!({"label": ""}))]
#[case::null(json!({"payload": null}))]
fn falsy_wire_values_read_as_unset(#[case] source: Value) {
    let probe = Probe::from_json(&source);
    assert_eq!(probe, Probe::new());
    assert_eq!(probe.to_json(), json!({}));
}

#[test]
fn explicitly_set_falsy_values_do_not_survive_emission() {
    let mut probe = Probe::new();
    probe.set_enabled(false);
    probe.set_count(0);
    probe.set_label("");
    assert_eq!(probe.enabled(), Some(false));
    assert_eq!(probe.to_json(), json!({}));
}

#[test]
fn unknown_keys_are_dropped() {
    let probe = Probe::from_json(&json!({"label": "v1.0", "unused": 123}));
    assert_eq!(probe.label(), Some("v1.0"));
    assert_eq!(probe.to_json(), json!({"label": "v1.0"}));
}

#[test]
fn non_object_input_yields_blank_record() {
    for value in [json!(null), json!(42), json!("text"), json!([1, 2])] {
        assert_eq!(Probe::from_json(&value), Probe::new());
    }
}

#[test]
fn fluent_chaining_composes() {
    let probe = Probe::new()
        .with_label("beta")
        .with_count(3)
        .with_enabled(true);
    assert_eq!(probe.label(), Some("beta"));
    assert_eq!(probe.count(), Some(3));
    assert!(probe.is_enabled());
}

#[test]
fn lists_preserve_order_and_skip_mistyped_elements() {
    let bundle = Bundle::from_json(&json!({
        "names": ["b", "a", 5, "c"],
        "ports": [8080, "oops", 9090],
    }));
    assert_eq!(bundle.names(), ["b", "a", "c"]);
    assert_eq!(bundle.ports(), [8080, 9090]);
}

#[test]
fn empty_list_is_omitted_from_output() {
    let bundle = Bundle::from_json(&json!({"names": []}));
    assert!(bundle.names().is_empty());
    assert_eq!(bundle.to_json(), json!({}));
}

#[test]
fn maps_mirror_nested_object_optionality() {
    let bundle = Bundle::from_json(&json!({"labels": {}}));
    assert_eq!(bundle.labels(), Some(&BTreeMap::new()));
    // An empty object is truthy, so a hydrated empty map is re-emitted.
    assert_eq!(bundle.to_json(), json!({"labels": {}}));

    let missing = Bundle::from_json(&json!({}));
    assert_eq!(missing.labels(), None);
}

#[test]
fn map_mut_creates_on_first_access() {
    let mut bundle = Bundle::new();
    assert_eq!(bundle.labels(), None);
    bundle.labels_mut().insert("env".into(), "dev".into());
    assert_eq!(
        bundle.labels().and_then(|m| m.get("env")).map(String::as_str),
        Some("dev")
    );
}

#[test]
fn nested_records_construct_and_emit_recursively() {
    let source = json!({
        "inner": {"label": "deep", "count": 2},
        "probes": [{"label": "p1"}, {"label": "p2"}],
        "index": {"main": {"label": "indexed"}},
        "groups": {"g": ["x", "y"]},
    });
    let bundle = Bundle::from_json(&source);
    assert_eq!(bundle.inner().and_then(Probe::label), Some("deep"));
    assert_eq!(bundle.probes().len(), 2);
    assert_eq!(bundle.probes()[1].label(), Some("p2"));
    assert_eq!(
        bundle.index().and_then(|m| m.get("main")).and_then(Probe::label),
        Some("indexed")
    );
    assert_eq!(bundle.to_json(), source);
}

#[test]
fn present_nested_record_emits_even_when_blank() {
    let bundle = Bundle::new().with_inner(Probe::new());
    assert_eq!(bundle.to_json(), json!({"inner": {}}));
}

#[test]
fn recursive_tree_constructs_to_arbitrary_depth() {
    let source = json!({
        "label": "root",
        "children": [
            {"label": "left", "children": [{"label": "leaf"}]},
            {"label": "right"},
        ],
    });
    let root = Node::from_json(&source);
    assert_eq!(root.label(), Some("root"));
    assert_eq!(root.children().len(), 2);
    assert_eq!(root.children()[0].children()[0].label(), Some("leaf"));
    assert_eq!(root.to_json(), source);
}

#[test]
fn tree_built_by_hand_emits_bottom_up() {
    let leaf = Node::new().with_label("leaf");
    let mid = Node::new().with_label("mid").with_children(vec![leaf]);
    let root = Node::new().with_label("root").with_children(vec![mid]);
    assert_eq!(
        root.to_json(),
        json!({
            "label": "root",
            "children": [{"label": "mid", "children": [{"label": "leaf"}]}],
        })
    );
}

#[test]
fn serde_bridge_matches_to_json() {
    let probe = Probe::new().with_label("alpha").with_count(1);
    let bridged = serde_json::to_value(&probe).expect("serialize");
    assert_eq!(bridged, probe.to_json());

    let recovered: Probe = serde_json::from_value(json!({"label": "alpha", "count": 1, "junk": 9}))
        .expect("deserialize");
    assert_eq!(recovered, probe);
}

#[test]
fn from_json_str_rejects_only_syntax_errors() {
    assert!(Probe::from_json_str("{not json").is_err());

    let probe = Probe::from_json_str(r#"{"label": "ok", "count": "mistyped"}"#).expect("parse");
    assert_eq!(probe.label(), Some("ok"));
    assert_eq!(probe.count(), None);
}

#[test]
fn to_json_string_is_compact() {
    let probe = Probe::new().with_label("x");
    assert_eq!(probe.to_json_string(), r#"{"label":"x"}"#);
}

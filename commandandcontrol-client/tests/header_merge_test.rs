//! Integration tests for the three-layer header merge: defaults, then
//! configuration overrides, then per-call overrides; later layers win per
//! key and keys resolving to null are pruned.

use commandandcontrol_client::{ClientConfig, HeaderBuilder, RequestHeaders, MIME_TYPE};

fn layer(pairs: &[(&str, Option<&str>)]) -> RequestHeaders {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.map(|v| v.to_string())))
        .collect()
}

#[test]
fn merge_is_right_biased_and_prunes_nulls() {
    // defaults {Accept, Content-Type}, config {Content-Type: text/csv},
    // per-call {Content-Type: null, X-Correlation: c-1}
    // -> Accept kept, Content-Type removed, X-Correlation added
    let builder = HeaderBuilder::with_overrides(layer(&[("Content-Type", Some("text/csv"))]));
    let per_call = layer(&[("Content-Type", None), ("X-Correlation", Some("c-1"))]);
    let headers = builder.build(Some(&per_call));

    assert_eq!(headers.len(), 2);
    assert_eq!(headers["Accept"], MIME_TYPE);
    assert_eq!(headers["X-Correlation"], "c-1");
    assert!(!headers.contains_key("Content-Type"));
}

#[test]
fn no_overrides_yields_exactly_the_defaults() {
    let headers = HeaderBuilder::new().build(None);
    assert_eq!(headers.len(), 2);
    assert_eq!(headers["Accept"], MIME_TYPE);
    assert_eq!(headers["Content-Type"], MIME_TYPE);
}

#[test]
fn config_layer_flows_through_client_config() {
    let config = ClientConfig::with_header_overrides(layer(&[("X-Tenant", Some("acme"))]));
    let headers = config.header_builder().build(None);
    assert_eq!(headers["X-Tenant"], "acme");
    assert_eq!(headers["Accept"], MIME_TYPE);
}

#[test]
fn per_call_layer_overrides_config_layer() {
    let config = ClientConfig::with_header_overrides(layer(&[("X-Tenant", Some("acme"))]));
    let per_call = layer(&[("X-Tenant", Some("globex"))]);
    let headers = config.header_builder().build(Some(&per_call));
    assert_eq!(headers["X-Tenant"], "globex");
}

//! Config-driven network construction

use std::fs;

use airlink_config::AirlinkConfig;
use airlink_core::{FlightNetwork, ForwardDuplicates};

use crate::common::{fixture, flight, listed_count};

fn network_from(toml: &str) -> FlightNetwork {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, toml).expect("write config");

    let config = AirlinkConfig::load_from(&path).expect("config loads");
    FlightNetwork::with_settings(config.link_settings().expect("settings resolve"))
}

#[test]
fn configured_collapse_applies_to_links() {
    let network = network_from("[links]\nforward_duplicates = \"collapse\"\n");
    assert_eq!(
        network.settings().forward_duplicates(),
        ForwardDuplicates::Collapse
    );

    let mut fx = fixture(network);
    fx.network.link(fx.aa100, fx.jfk).unwrap();
    fx.network.link(fx.aa100, fx.jfk).unwrap();
    assert_eq!(fx.network.edge_count(), 1);
}

#[test]
fn default_config_preserves_duplicates() {
    let mut fx = fixture(network_from(""));
    fx.network.link(fx.aa100, fx.lax).unwrap();
    fx.network.link(fx.aa100, fx.lax).unwrap();

    assert_eq!(fx.network.edge_count(), 2);
    let aa100 = flight("AA100", "2024-01-01");
    assert_eq!(listed_count(&fx.network, fx.lax, &aa100), 1);
}

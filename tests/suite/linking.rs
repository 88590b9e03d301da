//! Back-edge maintenance tests

use airlink_core::{EdgeChange, FlightNetwork, ForwardDuplicates, LinkSettings};

use crate::common::{airport, fixture, flight, listed_count};

#[test]
fn link_completes_back_edge() {
    let mut fx = fixture(FlightNetwork::new());
    fx.network.link(fx.aa100, fx.jfk).unwrap();

    let aa100 = flight("AA100", "2024-01-01");
    let jfk = fx.network.airport(fx.jfk).unwrap();
    assert!(jfk.contains(&aa100));
    assert_eq!(jfk.flight_ids(), [fx.aa100]);
    assert!(fx.network.verify().is_ok());
}

#[test]
fn every_forward_edge_has_a_back_edge() {
    let mut network = FlightNetwork::new();
    let flights = [
        network.add_flight(flight("AA100", "2024-01-01")),
        network.add_flight(flight("UA7", "2024-01-01")),
        network.add_flight(flight("DL42", "2024-01-02")),
    ];
    let airports = [
        network.add_airport(airport("JFK")),
        network.add_airport(airport("LAX")),
        network.add_airport(airport("ORD")),
    ];

    for (i, &f) in flights.iter().enumerate() {
        for &a in airports.iter().skip(i) {
            network.link(f, a).unwrap();
        }
    }

    for view in network.flights() {
        for a in view.airports() {
            assert!(a.contains(view.flight()), "{} missing {}", a, view.name());
        }
    }
    assert_eq!(network.edge_count(), 6);
    assert!(network.verify().is_ok());
}

// The forward side keeps duplicates by default while the back-edge is added
// once. This asymmetry is the compatible behaviour.
#[test]
fn relink_duplicates_forward_edge_only() {
    let mut fx = fixture(FlightNetwork::new());

    let first = fx.network.link(fx.aa100, fx.jfk).unwrap();
    let second = fx.network.link(fx.aa100, fx.jfk).unwrap();
    assert_eq!(first.reverse, EdgeChange::Appended);
    assert_eq!(second.forward, EdgeChange::Appended);
    assert_eq!(second.reverse, EdgeChange::AlreadyPresent);

    let aa100 = flight("AA100", "2024-01-01");
    assert_eq!(listed_count(&fx.network, fx.jfk, &aa100), 1);

    let view = fx.network.flight(fx.aa100).unwrap();
    assert_eq!(view.airport_ids(), [fx.jfk, fx.jfk]);
    assert!(fx.network.verify().is_ok());
}

#[test]
fn collapse_policy_dedupes_forward_edge() {
    let settings = LinkSettings::default().with_forward_duplicates(ForwardDuplicates::Collapse);
    let mut fx = fixture(FlightNetwork::with_settings(settings));

    fx.network.link(fx.aa100, fx.jfk).unwrap();
    let again = fx.network.link(fx.aa100, fx.jfk).unwrap();
    assert_eq!(again.forward, EdgeChange::AlreadyPresent);
    assert_eq!(again.reverse, EdgeChange::AlreadyPresent);

    let aa100 = flight("AA100", "2024-01-01");
    assert_eq!(fx.network.flight(fx.aa100).unwrap().airport_ids(), [fx.jfk]);
    assert_eq!(listed_count(&fx.network, fx.jfk, &aa100), 1);
}

// Membership on the airport side is by value, so a second registration of the
// same flight value shares the existing back-edge.
#[test]
fn equal_flight_shares_back_edge() {
    let mut fx = fixture(FlightNetwork::new());
    let twin = fx.network.add_flight(flight("AA100", "2024-01-01"));

    fx.network.link(fx.aa100, fx.jfk).unwrap();
    let outcome = fx.network.link(twin, fx.jfk).unwrap();
    assert_eq!(outcome.forward, EdgeChange::Appended);
    assert_eq!(outcome.reverse, EdgeChange::AlreadyPresent);

    let jfk = fx.network.airport(fx.jfk).unwrap();
    assert_eq!(jfk.flight_ids(), [fx.aa100]);
    assert_eq!(fx.network.flight(twin).unwrap().airport_ids(), [fx.jfk]);
    assert!(fx.network.verify().is_ok());
}

#[test]
fn same_name_different_date_gets_own_back_edge() {
    let mut fx = fixture(FlightNetwork::new());
    let next_day = fx.network.add_flight(flight("AA100", "2024-01-02"));

    fx.network.link(fx.aa100, fx.lax).unwrap();
    fx.network.link(next_day, fx.lax).unwrap();

    let lax = fx.network.airport(fx.lax).unwrap();
    assert_eq!(lax.flight_ids(), [fx.aa100, next_day]);
}

#[test]
fn find_flights_matches_by_value() {
    let mut fx = fixture(FlightNetwork::new());
    let twin = fx.network.add_flight(flight("AA100", "2024-01-01"));
    fx.network.add_flight(flight("AA100", "2024-01-02"));

    let wanted = flight("AA100", "2024-01-01");
    let ids: Vec<_> = fx.network.find_flights(&wanted).map(|view| view.id()).collect();
    assert_eq!(ids, vec![fx.aa100, twin]);
}

#[test]
fn airport_lists_flights_in_link_order() {
    let mut network = FlightNetwork::new();
    let jfk = network.add_airport(airport("JFK"));
    let late = network.add_flight(flight("UA7", "2024-01-01"));
    let early = network.add_flight(flight("AA100", "2024-01-01"));

    network.link(early, jfk).unwrap();
    network.link(late, jfk).unwrap();

    let names: Vec<&str> = network
        .airport(jfk)
        .unwrap()
        .flights()
        .map(|view| view.name())
        .collect();
    assert_eq!(names, ["AA100", "UA7"]);
}

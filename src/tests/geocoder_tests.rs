// src/tests/geocoder_tests.rs
use super::utils::{closed_port_addr, spawn_geocode_server};
use crate::geocoder::{GeocodeError, GeocodeRequest, GeocoderClient, Location};
use std::time::Duration;

#[test]
fn resolves_a_location() {
    let (base, requests) = spawn_geocode_server(200, r#"{"lat":40.7,"lng":-74.0}"#);
    let client = GeocoderClient::with_base_url(&base, Some("k".into())).unwrap();

    let location = client
        .geocode(&GeocodeRequest::address("96 Greene Street"))
        .unwrap();
    assert_eq!(location, Location::new(40.7, -74.0));

    let uri = requests.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(uri, "/maps/api/geocode/json?address=96+Greene+Street&key=k");
}

#[test]
fn empty_body_object_is_unknown_not_error() {
    let (base, _requests) = spawn_geocode_server(200, "{}");
    let client = GeocoderClient::with_base_url(&base, None).unwrap();

    let location = client
        .geocode(&GeocodeRequest::Coordinates { lat: 1.0, lng: 2.0 })
        .unwrap();
    assert_eq!(location, Location::default());
    assert!(!location.is_resolved());
}

#[test]
fn error_status_is_an_error() {
    let (base, _requests) = spawn_geocode_server(500, r#"{"lat":null,"lng":null}"#);
    let client = GeocoderClient::with_base_url(&base, None).unwrap();

    match client.geocode(&GeocodeRequest::address("anywhere")) {
        Err(GeocodeError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn malformed_body_is_an_error() {
    let (base, _requests) = spawn_geocode_server(200, "not json");
    let client = GeocoderClient::with_base_url(&base, None).unwrap();

    assert!(matches!(
        client.geocode(&GeocodeRequest::address("anywhere")),
        Err(GeocodeError::JsonParse(_))
    ));
}

#[test]
fn connection_failure_is_an_error() {
    let addr = closed_port_addr();
    let client = GeocoderClient::with_base_url(&format!("http://{addr}/maps/"), None).unwrap();

    assert!(matches!(
        client.geocode(&GeocodeRequest::address("anywhere")),
        Err(GeocodeError::Network(_))
    ));
}

//! Behavioural tests for geocoders, driven through [`StubGeocoder`].

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use roadlog_core::{GeocodeError, Geocoder, Place};
use roadlog_data::geocoding::test_support::StubGeocoder;
use std::cell::RefCell;

type ResultCell = RefCell<Option<Result<Place, GeocodeError>>>;

#[fixture]
fn geocoder() -> RefCell<Option<StubGeocoder>> {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(None)
}

fn lookup(geocoder: &RefCell<Option<StubGeocoder>>, result: &ResultCell, query: &str) {
    let guard = geocoder.borrow();
    let stub = guard.as_ref().expect("geocoder must be initialised");
    *result.borrow_mut() = Some(stub.geocode(query));
}

fn error_of(result: &ResultCell) -> GeocodeError {
    let borrowed = result.borrow();
    match borrowed.as_ref().expect("a lookup was made") {
        Ok(place) => panic!("expected an error, got {place:?}"),
        Err(err) => err.clone(),
    }
}

#[given("a geocoder that knows Dallas")]
fn knows_dallas(#[from(geocoder)] geocoder: &RefCell<Option<StubGeocoder>>) {
    *geocoder.borrow_mut() =
        Some(StubGeocoder::default().with_place("Dallas, TX", -96.797, 32.7767));
}

#[given("a geocoder that times out")]
fn times_out(#[from(geocoder)] geocoder: &RefCell<Option<StubGeocoder>>) {
    *geocoder.borrow_mut() = Some(StubGeocoder::with_error(GeocodeError::Timeout {
        url: "http://example.com/search".to_owned(),
        timeout_secs: 10,
    }));
}

#[when("I geocode Dallas")]
fn geocode_dallas(
    #[from(geocoder)] geocoder: &RefCell<Option<StubGeocoder>>,
    #[from(result)] result: &ResultCell,
) {
    lookup(geocoder, result, "Dallas, TX");
}

#[when("I geocode an unknown place")]
fn geocode_unknown(
    #[from(geocoder)] geocoder: &RefCell<Option<StubGeocoder>>,
    #[from(result)] result: &ResultCell,
) {
    lookup(geocoder, result, "Atlantis");
}

#[when("I geocode a blank query")]
fn geocode_blank(
    #[from(geocoder)] geocoder: &RefCell<Option<StubGeocoder>>,
    #[from(result)] result: &ResultCell,
) {
    lookup(geocoder, result, "   ");
}

#[then("the place is near Dallas")]
fn then_dallas(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let place = borrowed
        .as_ref()
        .expect("a lookup was made")
        .as_ref()
        .expect("expected Ok result");
    assert!((place.lat() - 32.7767).abs() < 1e-6);
    assert!((place.lon() + 96.797).abs() < 1e-6);
    assert_eq!(place.name, "Dallas, TX");
}

#[then("a not found error is returned")]
fn then_not_found(#[from(result)] result: &ResultCell) {
    assert_eq!(
        error_of(result),
        GeocodeError::NotFound {
            query: "Atlantis".to_owned()
        }
    );
}

#[then("an empty query error is returned")]
fn then_empty(#[from(result)] result: &ResultCell) {
    assert_eq!(error_of(result), GeocodeError::EmptyQuery);
}

#[then("a timeout error is returned")]
fn then_timeout(#[from(result)] result: &ResultCell) {
    let err = error_of(result);
    assert!(
        matches!(err, GeocodeError::Timeout { timeout_secs: 10, .. }),
        "expected Timeout, got {err:?}"
    );
}

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/geocoding.feature", name = $title)]
        fn $fn_name(geocoder: RefCell<Option<StubGeocoder>>, result: ResultCell) {
            let _ = (geocoder, result);
        }
    };
}

register_scenario!(resolving_known_place, "resolving a known place");
register_scenario!(reporting_unknown_place, "reporting an unknown place");
register_scenario!(rejecting_blank_query, "rejecting a blank query");
register_scenario!(handling_timeout, "handling a timeout");

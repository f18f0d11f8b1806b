//! Behavioural coverage for planning legs between geocoded cities.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfarer_core::test_support::named;
use wayfarer_core::{City, TravelConfig, TravelLeg, TravelMode, plan_legs};

/// Scenario state for leg planning.
#[derive(Debug, Default)]
struct LegWorld {
    cities: RefCell<Vec<City>>,
    origin: RefCell<Option<City>>,
    legs: RefCell<Vec<TravelLeg>>,
}

#[fixture]
fn world() -> LegWorld {
    LegWorld::default()
}

fn fixture_city(name: &str) -> City {
    named(name).unwrap_or_else(|| panic!("no fixture city named {name}"))
}

fn with_first_leg<R>(world: &LegWorld, check: impl FnOnce(&TravelLeg) -> R) -> R {
    let legs = world.legs.borrow();
    let leg = legs
        .first()
        .unwrap_or_else(|| panic!("expected at least one planned leg"));
    check(leg)
}

#[given("a trip from {from} to {to}")]
fn given_trip(world: &LegWorld, from: String, to: String) {
    world
        .cities
        .replace(vec![fixture_city(&from), fixture_city(&to)]);
}

#[given("the traveller starts in {home}")]
fn given_origin(world: &LegWorld, home: String) {
    world.origin.replace(Some(fixture_city(&home)));
}

#[when("I plan the legs")]
fn when_plan(world: &LegWorld) {
    let cities = world.cities.borrow();
    let origin = world.origin.borrow();
    let legs = plan_legs(&cities, origin.as_ref(), &TravelConfig::default());
    world.legs.replace(legs);
}

#[then("the number of planned legs is {count}")]
fn then_leg_count(world: &LegWorld, count: usize) {
    assert_eq!(world.legs.borrow().len(), count);
}

#[then("the first leg recommends {mode}")]
fn then_recommends(world: &LegWorld, mode: String) {
    let expected: TravelMode = mode
        .parse()
        .unwrap_or_else(|err| panic!("invalid mode in feature file: {err}"));
    let actual = with_first_leg(world, |leg| leg.recommended().map(|option| option.mode));
    assert_eq!(actual, Some(expected));
}

#[then("flight is not allowed on the first leg")]
fn then_flight_disallowed(world: &LegWorld) {
    with_first_leg(world, |leg| {
        let flight = leg
            .options
            .iter()
            .find(|option| option.mode == TravelMode::Flight)
            .unwrap_or_else(|| panic!("flight option missing"));
        assert!(!flight.is_allowed);
        assert!(flight.restriction_reason.is_some());
    });
}

#[then("only flight is allowed on the first leg")]
fn then_only_flight(world: &LegWorld) {
    with_first_leg(world, |leg| {
        let allowed: Vec<TravelMode> = leg
            .options
            .iter()
            .filter(|option| option.is_allowed)
            .map(|option| option.mode)
            .collect();
        assert_eq!(allowed, [TravelMode::Flight]);
    });
}

#[then("the first leg is unrestricted")]
fn then_unrestricted(world: &LegWorld) {
    with_first_leg(world, |leg| {
        assert_eq!(leg.restriction, None);
        assert!(!leg.is_cross_continental);
    });
}

#[then("the first leg is restricted as {kind}")]
fn then_restricted(world: &LegWorld, kind: String) {
    with_first_leg(world, |leg| {
        let restriction = leg
            .restriction
            .unwrap_or_else(|| panic!("leg should be restricted"));
        let label = match restriction {
            wayfarer_core::Restriction::DistanceExceeded => "distance",
            wayfarer_core::Restriction::CrossContinental => "cross-continent",
        };
        assert_eq!(label, kind);
        assert_eq!(leg.is_cross_continental, label == "cross-continent");
    });
}

#[then("the first leg departs {name}")]
fn then_departs(world: &LegWorld, name: String) {
    with_first_leg(world, |leg| assert_eq!(leg.from.name, name));
}

#[scenario(path = "tests/features/leg_planning.feature", index = 0)]
fn short_hop_prefers_car(world: LegWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/leg_planning.feature", index = 1)]
fn medium_hop_prefers_train(world: LegWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/leg_planning.feature", index = 2)]
fn cross_continental_hop_flies(world: LegWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/leg_planning.feature", index = 3)]
fn long_hop_flies(world: LegWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/leg_planning.feature", index = 4)]
fn origin_adds_opening_leg(world: LegWorld) {
    let _ = world;
}

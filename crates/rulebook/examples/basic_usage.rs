//! Basic usage example for rulebook

use chrono::{DateTime, FixedOffset};
use rulebook::prelude::*;

struct Appointment {
    starts: DateTime<FixedOffset>,
    confirmed: Option<DateTime<FixedOffset>>,
    attendees: u8,
}

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid timestamp literal")
}

fn main() -> Result<(), RuleError> {
    let slot = at("2017-06-10T09:00:00+02:00");

    let rules = RuleSet::<Appointment>::create()
        .ensure_named("starts", |a| a.starts, |rule| rule.is_same_as(slot))?
        .ensure_named("confirmed", |a| a.confirmed, |rule| {
            rule.required()
                .with_message("Appointment is not confirmed")
                .is_before(slot)
        })?
        .ensure_named("attendees", |a| a.attendees, |rule| {
            rule.is_after(0_u8).is_before_or_same_as(12_u8)
        })?;

    let booked = Appointment {
        starts: at("2017-06-10T07:00:00Z"),
        confirmed: Some(at("2017-06-01T12:00:00Z")),
        attendees: 4,
    };
    // Same instant, different offset.
    println!("booked: {}", rules.for_model(&booked).validate());

    let tentative = Appointment {
        starts: at("2017-06-10T10:00:00+02:00"),
        confirmed: None,
        attendees: 0,
    };
    println!("tentative: {}", rules.for_model(&tentative).validate());

    let first = rules
        .for_model(&tentative)
        .with_strategy(Strategy::FailFast)
        .validate();
    println!("tentative (fail fast): {first}");

    Ok(())
}

//! `is_same_as` over offset date-times, covering every nullability pairing.

use chrono::{DateTime, FixedOffset, NaiveDate};
use rstest::rstest;
use rulebook::prelude::*;

type Stamp = DateTime<FixedOffset>;

struct Model {
    value: Stamp,
    nullable_value: Option<Stamp>,
    null_value: Option<Stamp>,
}

impl Model {
    fn new() -> Self {
        let day = stamp("2017-06-10");
        Self {
            value: day,
            nullable_value: Some(day),
            null_value: None,
        }
    }
}

fn stamp(s: &str) -> Stamp {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .expect("valid date literal")
        .and_hms_opt(0, 0, 0)
        .expect("midnight exists")
        .and_utc()
        .fixed_offset()
}

fn nullable_stamp(s: Option<&str>) -> Option<Stamp> {
    s.map(stamp)
}

// ============================================================================
// MISSING RULE
// ============================================================================

#[test]
fn missing_rule_with_plain_value_and_plain_reference() {
    let err = None::<RuleBuilder<Model, Stamp>>
        .is_same_as(stamp("2017-06-10"))
        .unwrap_err();
    assert!(matches!(err, RuleError::MissingRule { operation: "is_same_as" }));
}

#[test]
fn missing_rule_with_plain_value_and_nullable_reference() {
    let err = None::<RuleBuilder<Model, Stamp>>
        .is_same_as(Some(stamp("2017-06-10")))
        .unwrap_err();
    assert!(matches!(err, RuleError::MissingRule { .. }));
}

#[test]
fn missing_rule_with_nullable_value_and_plain_reference() {
    let err = None::<RuleBuilder<Model, Option<Stamp>>>
        .is_same_as(stamp("2017-06-10"))
        .unwrap_err();
    assert!(matches!(err, RuleError::MissingRule { .. }));
}

#[test]
fn missing_rule_with_nullable_value_and_nullable_reference() {
    let err = None::<RuleBuilder<Model, Option<Stamp>>>
        .is_same_as(Some(stamp("2017-06-10")))
        .unwrap_err();
    assert!(matches!(err, RuleError::MissingRule { .. }));
}

#[test]
fn missing_rule_inside_ensure_aborts_the_set() {
    let err = RuleSet::<Model>::create()
        .ensure(|m| m.value, |_| None::<RuleBuilder<Model, Stamp>>.is_same_as(stamp("2017-06-10")))
        .unwrap_err();
    assert_eq!(err, RuleError::missing_rule("is_same_as"));
}

// ============================================================================
// RESULTS
// ============================================================================

#[rstest]
#[case("2017-06-10", true)]
#[case("2017-06-09", false)]
#[case("2017-06-11", false)]
fn plain_value_and_plain_reference(#[case] reference: &str, #[case] expected: bool) {
    let reference = stamp(reference);

    let result = RuleSet::<Model>::create()
        .ensure(|m| m.value, |rule| rule.is_same_as(reference))
        .unwrap()
        .for_model(&Model::new())
        .validate();

    assert_eq!(result.succeeded(), expected);
}

#[rstest]
#[case(Some("2017-06-10"), true)]
#[case(Some("2017-06-09"), false)]
#[case(Some("2017-06-11"), false)]
#[case(None, false)]
fn plain_value_and_nullable_reference(#[case] reference: Option<&str>, #[case] expected: bool) {
    let reference = nullable_stamp(reference);

    let result = RuleSet::<Model>::create()
        .ensure(|m| m.value, |rule| rule.is_same_as(reference))
        .unwrap()
        .for_model(&Model::new())
        .validate();

    assert_eq!(result.succeeded(), expected);
}

#[rstest]
#[case(false, "2017-06-10", true)]
#[case(false, "2017-06-09", false)]
#[case(false, "2017-06-11", false)]
#[case(true, "2017-06-10", false)]
fn nullable_value_and_plain_reference(
    #[case] use_null_value: bool,
    #[case] reference: &str,
    #[case] expected: bool,
) {
    let reference = stamp(reference);

    let result = RuleSet::<Model>::create()
        .ensure(
            move |m| if use_null_value { m.null_value } else { m.nullable_value },
            |rule| rule.is_same_as(reference),
        )
        .unwrap()
        .for_model(&Model::new())
        .validate();

    assert_eq!(result.succeeded(), expected);
}

#[rstest]
#[case(false, Some("2017-06-10"), true)]
#[case(false, Some("2017-06-09"), false)]
#[case(false, Some("2017-06-11"), false)]
#[case(false, None, false)]
#[case(true, Some("2017-06-10"), false)]
#[case(true, None, false)]
fn nullable_value_and_nullable_reference(
    #[case] use_null_value: bool,
    #[case] reference: Option<&str>,
    #[case] expected: bool,
) {
    let reference = nullable_stamp(reference);

    let result = RuleSet::<Model>::create()
        .ensure(
            move |m| if use_null_value { m.null_value } else { m.nullable_value },
            |rule| rule.is_same_as(reference),
        )
        .unwrap()
        .for_model(&Model::new())
        .validate();

    assert_eq!(result.succeeded(), expected);
}

// ============================================================================
// FAILURE DETAIL
// ============================================================================

#[test]
fn failure_reports_both_sides() {
    let result = RuleSet::<Model>::create()
        .ensure_named("null_value", |m| m.null_value, |rule| {
            rule.is_same_as(stamp("2017-06-10"))
        })
        .unwrap()
        .for_model(&Model::new())
        .validate();

    let failure = &result.failures()[0];
    assert_eq!(failure.code, "same_as");
    assert_eq!(failure.field.as_deref(), Some("null_value"));
    assert_eq!(failure.param("expected"), Some("2017-06-10 00:00:00 +00:00"));
    assert_eq!(failure.param("actual"), Some("null"));
}

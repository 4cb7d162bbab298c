//! Integration tests for rule sets: strategies, tags, conditions, message
//! overrides and sharing across threads.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rulebook::prelude::*;

#[derive(Clone)]
struct Order {
    placed: NaiveDate,
    shipped: Option<NaiveDate>,
    quantity: u32,
    express: bool,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn order() -> Order {
    Order {
        placed: date(2024, 3, 1),
        shipped: Some(date(2024, 3, 4)),
        quantity: 3,
        express: false,
    }
}

fn order_rules() -> Result<RuleSet<Order>, RuleError> {
    RuleSet::<Order>::create()
        .ensure_named("placed", |o| o.placed, |rule| {
            rule.is_after_or_same_as(date(2024, 1, 1))
        })?
        .ensure_named("shipped", |o| o.shipped, |rule| {
            rule.required()
                .with_message("Order has not shipped")
                .tag("fulfilment")
                .is_before_or_same_as(date(2024, 12, 31))
                .tag("fulfilment")
        })?
        .ensure_named("quantity", |o| o.quantity, |rule| {
            rule.is_after(0_u32)
                .with_error_code("EMPTY_ORDER")
                .is_before(100_u32)
                .is_before(10_u32)
                .with_message("Express orders ship at most 9 items")
                .when(|o: &Order| o.express)
        })
}

// ============================================================================
// OUTCOMES
// ============================================================================

#[test]
fn valid_order_passes() {
    let rules = order_rules().unwrap();
    let result = rules.for_model(&order()).validate();
    assert!(result.succeeded());
    assert_eq!(result.to_string(), "Validation succeeded");
}

#[test]
fn complete_strategy_records_every_failure_in_order() {
    let rules = order_rules().unwrap();
    let model = Order {
        placed: date(2023, 12, 31),
        shipped: None,
        quantity: 0,
        ..order()
    };

    let result = rules.for_model(&model).validate();
    assert_eq!(
        result.error_codes().collect::<Vec<_>>(),
        vec!["after_or_same_as", "required", "before_or_same_as", "EMPTY_ORDER"]
    );
    assert_eq!(
        result
            .failures()
            .iter()
            .filter_map(|f| f.field.as_deref())
            .collect::<Vec<_>>(),
        vec!["placed", "shipped", "shipped", "quantity"]
    );
}

#[test]
fn fail_fast_stops_at_first_failure() {
    let rules = order_rules().unwrap().with_strategy(Strategy::FailFast);
    let model = Order {
        shipped: None,
        quantity: 0,
        ..order()
    };

    let result = rules.for_model(&model).validate();
    assert_eq!(result.failures().len(), 1);
    assert_eq!(result.failures()[0].message, "Order has not shipped");
}

#[test]
fn strategy_can_be_overridden_per_run() {
    let rules = order_rules().unwrap();
    let model = Order {
        shipped: None,
        quantity: 0,
        ..order()
    };

    let complete = rules.for_model(&model).validate();
    let fail_fast = rules
        .for_model(&model)
        .with_strategy(Strategy::FailFast)
        .validate();

    assert_eq!(complete.failures().len(), 3);
    assert_eq!(fail_fast.failures().len(), 1);
}

// ============================================================================
// TAGS AND CONDITIONS
// ============================================================================

#[test]
fn tagged_run_selects_tagged_predicates_only() {
    let rules = order_rules().unwrap();
    let model = Order {
        placed: date(2020, 1, 1),
        shipped: None,
        ..order()
    };

    let result = rules.for_model(&model).validate_tagged(["fulfilment"]);
    assert_eq!(
        result.error_codes().collect::<Vec<_>>(),
        vec!["required", "before_or_same_as"]
    );

    let untagged = rules.for_model(&model).validate_tagged(["billing"]);
    assert!(untagged.succeeded());
}

#[test]
fn condition_skips_predicate_when_false() {
    let rules = order_rules().unwrap();

    let bulk = Order {
        quantity: 50,
        ..order()
    };
    assert!(rules.for_model(&bulk).validate().succeeded());

    let express_bulk = Order {
        express: true,
        ..bulk
    };
    let result = rules.for_model(&express_bulk).validate();
    assert_eq!(
        result.error_messages().collect::<Vec<_>>(),
        vec!["Express orders ship at most 9 items"]
    );
}

#[test]
fn options_from_config_apply_to_rule_set() {
    let options: ValidationOptions =
        serde_json::from_str(r#"{ "strategy": "fail_fast", "tags": ["fulfilment"] }"#).unwrap();
    let rules = order_rules().unwrap().with_options(options);
    let model = Order {
        placed: date(2020, 1, 1),
        shipped: None,
        ..order()
    };

    let result = rules.for_model(&model).validate();
    assert_eq!(result.error_codes().collect::<Vec<_>>(), vec!["required"]);
}

// ============================================================================
// CONSTRUCTION ERRORS
// ============================================================================

#[test]
fn modifier_before_predicate_aborts_construction() {
    let err = RuleSet::<Order>::create()
        .ensure(|o| o.quantity, |rule| rule.with_message("too early"))
        .unwrap_err();
    assert_eq!(err, RuleError::no_predicate("with_message"));
    assert_eq!(err.to_string(), "`with_message` must follow a predicate");
}

#[test]
fn missing_rule_error_message_names_operation() {
    let err = None::<RuleBuilder<Order, u32>>.is_after(1_u32).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot apply `is_after`: the rule is missing"
    );
}

// ============================================================================
// REPORTING
// ============================================================================

#[test]
fn failures_serialize_to_json() {
    let rules = order_rules().unwrap();
    let model = Order {
        quantity: 0,
        ..order()
    };

    let json = rules.for_model(&model).validate().to_json_value();
    insta::assert_json_snapshot!(json, @r#"
    {
      "failures": [
        {
          "code": "EMPTY_ORDER",
          "field": "quantity",
          "message": "Value must be after 0",
          "params": {
            "actual": "0",
            "expected": "0"
          }
        }
      ],
      "succeeded": false
    }
    "#);
}

#[test]
fn failures_convert_to_error_collection() {
    let rules = order_rules().unwrap();
    let model = Order {
        shipped: None,
        ..order()
    };

    let errors = rules.for_model(&model).validate().into_result().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.errors()[0].to_string(),
        "[shipped] required: Order has not shipped"
    );
}

// ============================================================================
// SHARING
// ============================================================================

#[test]
fn rule_set_is_shared_across_threads() {
    let rules = order_rules().unwrap();
    let models: Vec<Order> = (0..8)
        .map(|i| Order {
            quantity: i,
            ..order()
        })
        .collect();

    let rules = &rules;
    let outcomes: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = models
            .iter()
            .map(|model| scope.spawn(move || rules.for_model(model).validate().succeeded()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut expected = vec![true; 8];
    expected[0] = false;
    assert_eq!(outcomes, expected);
}

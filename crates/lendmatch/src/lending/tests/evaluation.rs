use super::common::{bank, evaluation_config, government_rule, rule, MemoryDirectory};
use crate::lending::evaluation::{ApplicantSnapshot, EligibilityEngine};

fn engine() -> EligibilityEngine {
    EligibilityEngine::new(evaluation_config())
}

fn snapshot<'a>(salary: f64, employment_type: &'a str, age: i32) -> ApplicantSnapshot<'a> {
    ApplicantSnapshot {
        salary,
        employment_type,
        age,
        pincode: "560001",
    }
}

#[test]
fn matching_rule_yields_offer_with_five_times_salary() {
    let directory = MemoryDirectory::with_banks(vec![bank(1, "Canara Bank", "560001")])
        .add_rule(government_rule(11, 1));

    let outcome = engine()
        .matches(&snapshot(50000.0, "Government", 30), &directory)
        .expect("directory reachable");

    assert!(outcome.ineligible_banks.is_empty());
    assert_eq!(outcome.eligible_banks.len(), 1);

    let offer = &outcome.eligible_banks[0];
    assert_eq!(offer.bank_name, "Canara Bank");
    assert_eq!(offer.interest_rate, 8.5);
    assert_eq!(offer.min_salary_required, 30000.0);
    assert_eq!(offer.job_type, "government");
    assert_eq!(offer.age_limit, "21-60");
    assert_eq!(offer.max_loan_amount, 250000.0);
}

#[test]
fn employment_match_ignores_letter_casing_only() {
    let directory = MemoryDirectory::with_banks(vec![bank(1, "Canara Bank", "560001")])
        .add_rule(government_rule(11, 1));
    let engine = engine();

    let outcome = engine
        .matches(&snapshot(50000.0, "GOVERNMENT", 30), &directory)
        .expect("directory reachable");
    assert_eq!(outcome.eligible_banks.len(), 1);

    // Synonyms are not mapped: "govt" is a different string.
    let outcome = engine
        .matches(&snapshot(50000.0, "govt", 30), &directory)
        .expect("directory reachable");
    assert!(outcome.eligible_banks.is_empty());
    assert_eq!(
        outcome.ineligible_banks[0].reasons,
        vec!["job type must be government".to_string()]
    );
}

#[test]
fn age_window_is_inclusive_on_both_ends() {
    let directory = MemoryDirectory::with_banks(vec![bank(1, "Canara Bank", "560001")])
        .add_rule(government_rule(11, 1));
    let engine = engine();

    for age in [21, 60] {
        let outcome = engine
            .matches(&snapshot(50000.0, "government", age), &directory)
            .expect("directory reachable");
        assert_eq!(outcome.eligible_banks.len(), 1, "age {age} should qualify");
    }

    for age in [20, 61] {
        let outcome = engine
            .matches(&snapshot(50000.0, "government", age), &directory)
            .expect("directory reachable");
        assert!(outcome.eligible_banks.is_empty(), "age {age} should fail");
        assert_eq!(
            outcome.ineligible_banks[0].reasons,
            vec!["age must be between 21 and 60".to_string()]
        );
    }
}

#[test]
fn single_failed_predicate_reports_exactly_one_reason() {
    let directory = MemoryDirectory::with_banks(vec![bank(1, "Canara Bank", "560001")])
        .add_rule(government_rule(11, 1));

    let outcome = engine()
        .matches(&snapshot(20000.0, "government", 30), &directory)
        .expect("directory reachable");

    assert!(outcome.eligible_banks.is_empty());
    assert_eq!(outcome.ineligible_banks.len(), 1);
    assert_eq!(
        outcome.ineligible_banks[0].reasons,
        vec!["minimum salary required is 30000".to_string()]
    );
}

#[test]
fn every_failed_predicate_of_a_rule_is_reported() {
    let directory = MemoryDirectory::with_banks(vec![bank(1, "Canara Bank", "560001")])
        .add_rule(government_rule(11, 1));

    let outcome = engine()
        .matches(&snapshot(20000.0, "private employee", 19), &directory)
        .expect("directory reachable");

    assert_eq!(
        outcome.ineligible_banks[0].reasons,
        vec![
            "minimum salary required is 30000".to_string(),
            "job type must be government".to_string(),
            "age must be between 21 and 60".to_string(),
        ]
    );
}

#[test]
fn bank_without_rules_is_ineligible_with_profile_reason() {
    let directory = MemoryDirectory::with_banks(vec![bank(1, "Canara Bank", "560001")]);

    let outcome = engine()
        .matches(&snapshot(50000.0, "government", 30), &directory)
        .expect("directory reachable");

    assert!(outcome.eligible_banks.is_empty());
    assert_eq!(outcome.ineligible_banks.len(), 1);
    assert_eq!(
        outcome.ineligible_banks[0].reasons,
        vec!["no matching rule for your profile".to_string()]
    );
}

#[test]
fn first_matching_rule_wins_over_a_better_rate() {
    let directory = MemoryDirectory::with_banks(vec![bank(1, "Canara Bank", "560001")])
        .add_rule(rule(11, 1, 30000.0, "government", 21, 60, 10.0))
        .add_rule(rule(12, 1, 30000.0, "government", 21, 60, 8.0));

    let outcome = engine()
        .matches(&snapshot(50000.0, "government", 30), &directory)
        .expect("directory reachable");

    assert_eq!(outcome.eligible_banks.len(), 1);
    assert_eq!(outcome.eligible_banks[0].interest_rate, 10.0);
}

#[test]
fn rejection_reasons_come_from_the_last_rule_checked() {
    // First rule fails on salary, second on age: only the age reason from
    // the final rule survives.
    let directory = MemoryDirectory::with_banks(vec![bank(1, "Canara Bank", "560001")])
        .add_rule(rule(11, 1, 90000.0, "government", 21, 60, 9.0))
        .add_rule(rule(12, 1, 30000.0, "government", 40, 60, 8.0));

    let outcome = engine()
        .matches(&snapshot(50000.0, "government", 30), &directory)
        .expect("directory reachable");

    assert!(outcome.eligible_banks.is_empty());
    assert_eq!(
        outcome.ineligible_banks[0].reasons,
        vec!["age must be between 40 and 60".to_string()]
    );
}

#[test]
fn pincode_match_is_exact_and_banks_keep_directory_order() {
    let directory = MemoryDirectory::with_banks(vec![
        bank(1, "Canara Bank", "560001"),
        bank(2, "Union Bank", "560002"),
        bank(3, "Vijaya Bank", "560001"),
    ])
    .add_rule(government_rule(11, 1))
    .add_rule(government_rule(31, 3));

    let outcome = engine()
        .matches(&snapshot(50000.0, "government", 30), &directory)
        .expect("directory reachable");

    let names: Vec<&str> = outcome
        .eligible_banks
        .iter()
        .map(|offer| offer.bank_name.as_str())
        .collect();
    assert_eq!(names, vec!["Canara Bank", "Vijaya Bank"]);
}

#[test]
fn worked_example_flips_on_the_minimum_age_boundary() {
    let directory = MemoryDirectory::with_banks(vec![bank(1, "Canara Bank", "560001")])
        .add_rule(government_rule(11, 1));
    let engine = engine();

    let outcome = engine
        .matches(&snapshot(50000.0, "Government", 20), &directory)
        .expect("directory reachable");
    assert_eq!(
        outcome.ineligible_banks[0].reasons,
        vec!["age must be between 21 and 60".to_string()]
    );

    let outcome = engine
        .matches(&snapshot(50000.0, "Government", 21), &directory)
        .expect("directory reachable");
    assert_eq!(outcome.eligible_banks[0].max_loan_amount, 250000.0);
}

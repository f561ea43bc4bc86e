use super::super::domain::LoanRule;
use super::policy::IneligibilityReason;
use super::ApplicantSnapshot;

/// Evaluate the three independent predicates of a single rule.
///
/// Returns every failed predicate, in a fixed order (salary, employment,
/// age). An empty vec means the rule matched.
pub(crate) fn check_rule(
    snapshot: &ApplicantSnapshot<'_>,
    rule: &LoanRule,
) -> Vec<IneligibilityReason> {
    let mut failed = Vec::new();

    if snapshot.salary < rule.min_salary {
        failed.push(IneligibilityReason::SalaryBelowMinimum {
            minimum: rule.min_salary,
        });
    }

    if !snapshot
        .employment_type
        .eq_ignore_ascii_case(&rule.job_type)
    {
        failed.push(IneligibilityReason::EmploymentMismatch {
            required: rule.job_type.clone(),
        });
    }

    if snapshot.age < rule.min_age || snapshot.age > rule.max_age {
        failed.push(IneligibilityReason::AgeOutsideWindow {
            min: rule.min_age,
            max: rule.max_age,
        });
    }

    failed
}

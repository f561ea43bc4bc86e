use serde::{Deserialize, Serialize};

use super::super::domain::{Bank, LoanRule};
use super::config::EvaluationConfig;
use super::ApplicantSnapshot;

/// A failed predicate from a single rule check.
#[derive(Debug, Clone, PartialEq)]
pub enum IneligibilityReason {
    SalaryBelowMinimum { minimum: f64 },
    EmploymentMismatch { required: String },
    AgeOutsideWindow { min: i32, max: i32 },
    NoMatchingRule,
}

impl IneligibilityReason {
    pub fn summary(&self) -> String {
        match self {
            IneligibilityReason::SalaryBelowMinimum { minimum } => {
                format!("minimum salary required is {minimum}")
            }
            IneligibilityReason::EmploymentMismatch { required } => {
                format!("job type must be {required}")
            }
            IneligibilityReason::AgeOutsideWindow { min, max } => {
                format!("age must be between {min} and {max}")
            }
            IneligibilityReason::NoMatchingRule => {
                "no matching rule for your profile".to_string()
            }
        }
    }
}

/// Offer recorded when a rule passes all three predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankOffer {
    pub bank_name: String,
    pub interest_rate: f64,
    pub min_salary_required: f64,
    pub job_type: String,
    pub age_limit: String,
    pub max_loan_amount: f64,
}

/// Per-bank rejection with the reasons that disqualified the applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRejection {
    pub bank_name: String,
    pub reasons: Vec<String>,
}

pub(crate) fn offer_for(
    bank: &Bank,
    rule: &LoanRule,
    snapshot: &ApplicantSnapshot<'_>,
    config: &EvaluationConfig,
) -> BankOffer {
    BankOffer {
        bank_name: bank.bank_name.clone(),
        interest_rate: rule.interest_rate,
        min_salary_required: rule.min_salary,
        job_type: rule.job_type.clone(),
        age_limit: format!("{}-{}", rule.min_age, rule.max_age),
        max_loan_amount: snapshot.salary * config.loan_amount_multiplier,
    }
}

pub(crate) fn rejection_for(bank_name: String, reasons: &[IneligibilityReason]) -> BankRejection {
    BankRejection {
        bank_name,
        reasons: reasons.iter().map(IneligibilityReason::summary).collect(),
    }
}

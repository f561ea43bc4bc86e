use chrono::NaiveDate;

use super::age::age_on;
use super::domain::CustomerSubmission;

/// Validation errors raised before any store mutation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("full name must be between {min} and {max} characters")]
    FullNameLength { min: usize, max: usize },
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("phone must be 10 digits starting with 6-9")]
    InvalidPhone,
    #[error("PAN must be 5 letters, 4 digits and a letter")]
    InvalidPan,
    #[error("employment type must be between {min} and {max} characters")]
    EmploymentTypeLength { min: usize, max: usize },
    #[error("salary must be greater than zero")]
    NonPositiveSalary,
    #[error("pincode must be exactly 6 digits")]
    InvalidPincode,
    #[error("customer must be at least {minimum} years old")]
    Underage { minimum: i32 },
}

const FULL_NAME_MIN: usize = 3;
const FULL_NAME_MAX: usize = 100;
const EMPLOYMENT_TYPE_MIN: usize = 2;
const EMPLOYMENT_TYPE_MAX: usize = 50;
const DEFAULT_MINIMUM_AGE: i32 = 18;

/// Policy dial backing intake validation.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    minimum_age: i32,
}

impl IntakePolicy {
    pub fn new(minimum_age: i32) -> Self {
        let sanitized = if minimum_age > 0 {
            minimum_age
        } else {
            DEFAULT_MINIMUM_AGE
        };

        Self {
            minimum_age: sanitized,
        }
    }

    pub fn minimum_age(&self) -> i32 {
        self.minimum_age
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_AGE)
    }
}

/// Guard validating submissions field by field, first failure wins.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    pub fn validate(
        &self,
        submission: &CustomerSubmission,
        today: NaiveDate,
    ) -> Result<(), IntakeViolation> {
        let name_len = submission.full_name.trim().chars().count();
        if !(FULL_NAME_MIN..=FULL_NAME_MAX).contains(&name_len) {
            return Err(IntakeViolation::FullNameLength {
                min: FULL_NAME_MIN,
                max: FULL_NAME_MAX,
            });
        }

        if !is_plausible_email(&submission.email) {
            return Err(IntakeViolation::InvalidEmail);
        }

        if !is_indian_mobile(&submission.phone) {
            return Err(IntakeViolation::InvalidPhone);
        }

        if !is_pan(&submission.pan) {
            return Err(IntakeViolation::InvalidPan);
        }

        let employment_len = submission.employment_type.trim().chars().count();
        if !(EMPLOYMENT_TYPE_MIN..=EMPLOYMENT_TYPE_MAX).contains(&employment_len) {
            return Err(IntakeViolation::EmploymentTypeLength {
                min: EMPLOYMENT_TYPE_MIN,
                max: EMPLOYMENT_TYPE_MAX,
            });
        }

        if !(submission.salary.is_finite() && submission.salary > 0.0) {
            return Err(IntakeViolation::NonPositiveSalary);
        }

        if !is_pincode(&submission.pincode) {
            return Err(IntakeViolation::InvalidPincode);
        }

        if age_on(submission.dob, today) < self.policy.minimum_age {
            return Err(IntakeViolation::Underage {
                minimum: self.policy.minimum_age,
            });
        }

        Ok(())
    }
}

fn is_plausible_email(value: &str) -> bool {
    let trimmed = value.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

// ^[6-9]\d{9}$
fn is_indian_mobile(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && (b'6'..=b'9').contains(&bytes[0])
        && bytes.iter().all(u8::is_ascii_digit)
}

// ^[A-Z]{5}[0-9]{4}[A-Z]$
fn is_pan(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase()
}

// ^\d{6}$
fn is_pincode(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 6 && bytes.iter().all(u8::is_ascii_digit)
}

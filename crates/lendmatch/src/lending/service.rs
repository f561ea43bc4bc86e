use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use super::age::age_on;
use super::domain::{Customer, CustomerId, CustomerSubmission};
use super::evaluation::{ApplicantSnapshot, EligibilityEngine, EvaluationConfig};
use super::intake::{IntakeGuard, IntakeViolation};
use super::presenter::{
    eligibility_report, CustomerEligibilityView, EligibilityReport,
};
use super::repository::{BankDirectory, CustomerStore, RepositoryError};

/// Service composing the intake guard, the record stores, and the matcher.
pub struct LoanMatchService<C, D> {
    guard: IntakeGuard,
    customers: Arc<C>,
    directory: Arc<D>,
    engine: Arc<EligibilityEngine>,
}

static CUSTOMER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_customer_id() -> CustomerId {
    CustomerId(CUSTOMER_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Whether the upsert inserted a fresh record or overwrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertDisposition {
    Created,
    Updated,
}

const CREATED_MESSAGE: &str = "Customer added successfully";
const UPDATED_MESSAGE: &str = "Customer updated successfully";

impl<C, D> LoanMatchService<C, D>
where
    C: CustomerStore + 'static,
    D: BankDirectory + 'static,
{
    pub fn new(customers: Arc<C>, directory: Arc<D>, config: EvaluationConfig) -> Self {
        Self::with_guard(IntakeGuard::default(), customers, directory, config)
    }

    pub(crate) fn with_guard(
        guard: IntakeGuard,
        customers: Arc<C>,
        directory: Arc<D>,
        config: EvaluationConfig,
    ) -> Self {
        Self {
            guard,
            customers,
            directory,
            engine: Arc::new(EligibilityEngine::new(config)),
        }
    }

    /// Validate, upsert the customer record (matched by email OR phone, full
    /// overwrite keeping the id), then match the persisted record against
    /// the directory. The write commits before the matcher reads.
    pub fn register_and_match(
        &self,
        submission: CustomerSubmission,
        today: NaiveDate,
    ) -> Result<(EligibilityReport, UpsertDisposition), ServiceError> {
        self.guard.validate(&submission, today)?;

        let existing = self
            .customers
            .find_by_contact(&submission.email, &submission.phone)?;

        let (customer, disposition) = match existing {
            Some(mut customer) => {
                customer.overwrite_with(submission);
                self.customers.update(customer.clone())?;
                (customer, UpsertDisposition::Updated)
            }
            None => {
                let customer = Customer::from_submission(next_customer_id(), submission);
                let stored = self.customers.insert(customer)?;
                (stored, UpsertDisposition::Created)
            }
        };

        let age = age_on(customer.dob, today);
        let snapshot = ApplicantSnapshot {
            salary: customer.salary,
            employment_type: &customer.employment_type,
            age,
            pincode: &customer.pincode,
        };
        let outcome = self.engine.matches(&snapshot, self.directory.as_ref())?;

        let message = match disposition {
            UpsertDisposition::Created => CREATED_MESSAGE,
            UpsertDisposition::Updated => UPDATED_MESSAGE,
        };

        Ok((
            eligibility_report(message, &customer, age, outcome),
            disposition,
        ))
    }

    /// Legacy lookup: match a stored customer without mutating anything.
    pub fn eligible_banks_for(
        &self,
        id: CustomerId,
        today: NaiveDate,
    ) -> Result<CustomerEligibilityView, ServiceError> {
        let customer = self
            .customers
            .find_by_id(id)?
            .ok_or(RepositoryError::NotFound)?;

        let age = age_on(customer.dob, today);
        let snapshot = ApplicantSnapshot {
            salary: customer.salary,
            employment_type: &customer.employment_type,
            age,
            pincode: &customer.pincode,
        };
        let outcome = self.engine.matches(&snapshot, self.directory.as_ref())?;

        Ok(CustomerEligibilityView {
            customer: customer.full_name,
            age,
            salary: customer.salary,
            eligible_banks: outcome.eligible_banks,
        })
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

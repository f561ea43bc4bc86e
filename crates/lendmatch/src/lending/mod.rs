//! Customer intake and partner-bank loan matching.
//!
//! A submission is validated, upserted into the customer store, and the
//! persisted record is matched against every loan rule of every bank
//! serving the customer's pincode. The result is a pair of lists: offers
//! from the banks whose rules the customer satisfies, and per-bank
//! disqualification reasons for the rest.

pub mod age;
pub mod domain;
pub(crate) mod evaluation;
pub(crate) mod intake;
pub mod presenter;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use age::age_on;
pub use domain::{
    Bank, BankId, Customer, CustomerId, CustomerInterest, CustomerSubmission, EmploymentCategory,
    LoanRule,
};
pub use evaluation::{
    ApplicantSnapshot, BankOffer, BankRejection, EligibilityEngine, EvaluationConfig,
    IneligibilityReason, MatchOutcome,
};
pub use intake::{IntakeGuard, IntakePolicy, IntakeViolation};
pub use presenter::{profile_view, CustomerEligibilityView, CustomerProfileView, EligibilityReport};
pub use repository::{BankDirectory, CustomerStore, RepositoryError};
pub use router::lending_router;
pub use seed::{parse_banks, parse_loan_rules, SeedError};
pub use service::{LoanMatchService, ServiceError, UpsertDisposition};

use super::domain::{Bank, BankId, Customer, CustomerId, LoanRule};

/// Error enumeration for record-store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Customer persistence seam. Contact lookup matches email OR phone so the
/// upsert path can find an existing record from either identifier.
pub trait CustomerStore: Send + Sync {
    fn insert(&self, customer: Customer) -> Result<Customer, RepositoryError>;
    fn update(&self, customer: Customer) -> Result<(), RepositoryError>;
    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;
    fn find_by_contact(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<Customer>, RepositoryError>;
}

/// Read side of the pre-seeded bank/loan-rule directory. Banks come back
/// in directory order; the evaluator preserves it.
pub trait BankDirectory: Send + Sync {
    fn banks_in_pincode(&self, pincode: &str) -> Result<Vec<Bank>, RepositoryError>;
    fn rules_for_bank(&self, bank_id: BankId) -> Result<Vec<LoanRule>, RepositoryError>;
}

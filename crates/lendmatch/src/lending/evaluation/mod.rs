mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;
pub use policy::{BankOffer, BankRejection, IneligibilityReason};

use serde::{Deserialize, Serialize};

use super::repository::{BankDirectory, RepositoryError};

/// The customer fields the matcher reads. Derived once per request, after
/// the upsert has committed.
#[derive(Debug, Clone, Copy)]
pub struct ApplicantSnapshot<'a> {
    pub salary: f64,
    pub employment_type: &'a str,
    pub age: i32,
    pub pincode: &'a str,
}

/// Stateless matcher applying every rule of every bank serving the
/// applicant's pincode.
pub struct EligibilityEngine {
    config: EvaluationConfig,
}

impl EligibilityEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    /// Match the applicant against the directory.
    ///
    /// Per bank, the first rule passing all three predicates wins and ends
    /// that bank's evaluation; a bank whose rules all fail is rejected with
    /// the reasons from the last rule checked; a bank with no rules is
    /// rejected outright. Banks keep directory fetch order in both lists.
    pub fn matches<D>(
        &self,
        snapshot: &ApplicantSnapshot<'_>,
        directory: &D,
    ) -> Result<MatchOutcome, RepositoryError>
    where
        D: BankDirectory + ?Sized,
    {
        let banks = directory.banks_in_pincode(snapshot.pincode)?;

        let mut eligible_banks = Vec::new();
        let mut ineligible_banks = Vec::new();

        for bank in banks {
            let rules = directory.rules_for_bank(bank.bank_id)?;
            if rules.is_empty() {
                ineligible_banks.push(policy::rejection_for(
                    bank.bank_name,
                    &[IneligibilityReason::NoMatchingRule],
                ));
                continue;
            }

            let mut offer = None;
            // Only the most recent rule's failures are kept.
            let mut last_failures = Vec::new();
            for rule in &rules {
                let failures = rules::check_rule(snapshot, rule);
                if failures.is_empty() {
                    offer = Some(policy::offer_for(&bank, rule, snapshot, &self.config));
                    break;
                }
                last_failures = failures;
            }

            match offer {
                Some(offer) => eligible_banks.push(offer),
                None => {
                    ineligible_banks.push(policy::rejection_for(bank.bank_name, &last_failures))
                }
            }
        }

        Ok(MatchOutcome {
            eligible_banks,
            ineligible_banks,
        })
    }
}

/// Both sides of a match run, in directory order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub eligible_banks: Vec<BankOffer>,
    pub ineligible_banks: Vec<BankRejection>,
}

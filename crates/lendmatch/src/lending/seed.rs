use std::collections::HashSet;
use std::io::Read;

use serde::Deserialize;

use super::domain::{Bank, BankId, LoanRule};

/// Errors raised while importing directory CSV exports.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to parse directory csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("loan rule {rule_id} references unknown bank {bank_id}")]
    UnknownBank { rule_id: u64, bank_id: u64 },
}

#[derive(Debug, Deserialize)]
struct BankRow {
    bank_id: u64,
    bank_name: String,
    state: String,
    pincode: String,
}

#[derive(Debug, Deserialize)]
struct LoanRuleRow {
    rule_id: u64,
    bank_id: u64,
    min_salary: f64,
    job_type: String,
    min_age: i32,
    max_age: i32,
    interest_rate: f64,
}

/// Parse a bank export. Row order becomes directory order.
pub fn parse_banks<R: Read>(reader: R) -> Result<Vec<Bank>, SeedError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut banks = Vec::new();

    for record in csv_reader.deserialize::<BankRow>() {
        let row = record?;
        banks.push(Bank {
            bank_id: BankId(row.bank_id),
            bank_name: row.bank_name,
            state: row.state,
            pincode: row.pincode,
        });
    }

    Ok(banks)
}

/// Parse a loan-rule export against an already-parsed bank list. A rule
/// pointing at an absent bank id fails the whole import.
pub fn parse_loan_rules<R: Read>(reader: R, banks: &[Bank]) -> Result<Vec<LoanRule>, SeedError> {
    let known: HashSet<BankId> = banks.iter().map(|bank| bank.bank_id).collect();

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rules = Vec::new();

    for record in csv_reader.deserialize::<LoanRuleRow>() {
        let row = record?;
        let bank_id = BankId(row.bank_id);
        if !known.contains(&bank_id) {
            return Err(SeedError::UnknownBank {
                rule_id: row.rule_id,
                bank_id: row.bank_id,
            });
        }

        rules.push(LoanRule {
            rule_id: row.rule_id,
            bank_id,
            min_salary: row.min_salary,
            job_type: row.job_type,
            min_age: row.min_age,
            max_age: row.max_age,
            interest_rate: row.interest_rate,
        });
    }

    Ok(rules)
}

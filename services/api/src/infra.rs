use std::collections::HashMap;
use std::fs::File;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use lendmatch::config::DirectoryConfig;
use lendmatch::error::AppError;
use lendmatch::lending::{
    parse_banks, parse_loan_rules, Bank, BankDirectory, BankId, Customer, CustomerId,
    CustomerStore, EvaluationConfig, LoanRule, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCustomerStore {
    records: Arc<Mutex<HashMap<CustomerId, Customer>>>,
}

impl CustomerStore for InMemoryCustomerStore {
    fn insert(&self, customer: Customer) -> Result<Customer, RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&customer.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(customer.id, customer.clone());
        Ok(customer)
    }

    fn update(&self, customer: Customer) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&customer.id) {
            guard.insert(customer.id, customer);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn find_by_contact(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<Customer>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .values()
            .find(|customer| customer.email == email || customer.phone == phone)
            .cloned())
    }
}

/// Read-only directory hydrated once at startup. Bank order is row order,
/// which the evaluator carries through to the response.
#[derive(Clone)]
pub(crate) struct InMemoryBankDirectory {
    banks: Vec<Bank>,
    rules: HashMap<BankId, Vec<LoanRule>>,
}

impl InMemoryBankDirectory {
    pub(crate) fn new(banks: Vec<Bank>, rules: Vec<LoanRule>) -> Self {
        let mut by_bank: HashMap<BankId, Vec<LoanRule>> = HashMap::new();
        for rule in rules {
            by_bank.entry(rule.bank_id).or_default().push(rule);
        }
        Self {
            banks,
            rules: by_bank,
        }
    }

    pub(crate) fn bank_count(&self) -> usize {
        self.banks.len()
    }
}

impl BankDirectory for InMemoryBankDirectory {
    fn banks_in_pincode(&self, pincode: &str) -> Result<Vec<Bank>, RepositoryError> {
        Ok(self
            .banks
            .iter()
            .filter(|bank| bank.pincode == pincode)
            .cloned()
            .collect())
    }

    fn rules_for_bank(&self, bank_id: BankId) -> Result<Vec<LoanRule>, RepositoryError> {
        Ok(self.rules.get(&bank_id).cloned().unwrap_or_default())
    }
}

/// Load the directory from configured CSV exports, or fall back to the
/// built-in demo directory when no seed is configured.
pub(crate) fn load_directory(config: &DirectoryConfig) -> Result<InMemoryBankDirectory, AppError> {
    let (Some(banks_path), Some(rules_path)) = (&config.banks_csv, &config.loan_rules_csv) else {
        return Ok(demo_directory());
    };

    let banks = parse_banks(File::open(banks_path)?)?;
    let rules = parse_loan_rules(File::open(rules_path)?, &banks)?;
    Ok(InMemoryBankDirectory::new(banks, rules))
}

pub(crate) fn demo_directory() -> InMemoryBankDirectory {
    let banks = vec![
        Bank {
            bank_id: BankId(1),
            bank_name: "Canara Bank".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
        },
        Bank {
            bank_id: BankId(2),
            bank_name: "Union Bank".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
        },
        Bank {
            bank_id: BankId(3),
            bank_name: "Grameen Cooperative".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560042".to_string(),
        },
    ];

    let rules = vec![
        LoanRule {
            rule_id: 11,
            bank_id: BankId(1),
            min_salary: 30000.0,
            job_type: "government".to_string(),
            min_age: 21,
            max_age: 60,
            interest_rate: 8.5,
        },
        LoanRule {
            rule_id: 12,
            bank_id: BankId(1),
            min_salary: 35000.0,
            job_type: "private employee".to_string(),
            min_age: 23,
            max_age: 58,
            interest_rate: 10.5,
        },
        LoanRule {
            rule_id: 21,
            bank_id: BankId(2),
            min_salary: 50000.0,
            job_type: "self employed".to_string(),
            min_age: 25,
            max_age: 55,
            interest_rate: 11.0,
        },
    ];

    InMemoryBankDirectory::new(banks, rules)
}

pub(crate) fn default_evaluation_config() -> EvaluationConfig {
    EvaluationConfig::default()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::lending::domain::{Bank, BankId, Customer, CustomerId, CustomerSubmission, LoanRule};
use crate::lending::evaluation::EvaluationConfig;
use crate::lending::repository::{BankDirectory, CustomerStore, RepositoryError};
use crate::lending::router::lending_router;
use crate::lending::service::LoanMatchService;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn submission() -> CustomerSubmission {
    CustomerSubmission {
        full_name: "Asha Verma".to_string(),
        email: "asha.verma@example.com".to_string(),
        phone: "9876543210".to_string(),
        dob: NaiveDate::from_ymd_opt(1995, 3, 10).expect("valid date"),
        pan: "ABCDE1234F".to_string(),
        employment_type: "Government".to_string(),
        salary: 50000.0,
        city: "Bengaluru".to_string(),
        pincode: "560001".to_string(),
        existing_loan: false,
        department_name: Some("Revenue".to_string()),
        designation_name: Some("Section Officer".to_string()),
        company_name: None,
        designation: None,
    }
}

pub(super) fn bank(id: u64, name: &str, pincode: &str) -> Bank {
    Bank {
        bank_id: BankId(id),
        bank_name: name.to_string(),
        state: "Karnataka".to_string(),
        pincode: pincode.to_string(),
    }
}

pub(super) fn rule(
    rule_id: u64,
    bank_id: u64,
    min_salary: f64,
    job_type: &str,
    min_age: i32,
    max_age: i32,
    interest_rate: f64,
) -> LoanRule {
    LoanRule {
        rule_id,
        bank_id: BankId(bank_id),
        min_salary,
        job_type: job_type.to_string(),
        min_age,
        max_age,
        interest_rate,
    }
}

pub(super) fn government_rule(rule_id: u64, bank_id: u64) -> LoanRule {
    rule(rule_id, bank_id, 30000.0, "government", 21, 60, 8.5)
}

pub(super) fn evaluation_config() -> EvaluationConfig {
    EvaluationConfig::default()
}

#[derive(Default, Clone)]
pub(super) struct MemoryCustomers {
    pub(super) records: Arc<Mutex<HashMap<CustomerId, Customer>>>,
}

impl CustomerStore for MemoryCustomers {
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
        guard.insert(customer.id, customer);
        Ok(())
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

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    banks: Vec<Bank>,
    rules: HashMap<BankId, Vec<LoanRule>>,
}

impl MemoryDirectory {
    pub(super) fn with_banks(banks: Vec<Bank>) -> Self {
        Self {
            banks,
            rules: HashMap::new(),
        }
    }

    pub(super) fn add_rule(mut self, rule: LoanRule) -> Self {
        self.rules.entry(rule.bank_id).or_default().push(rule);
        self
    }
}

impl BankDirectory for MemoryDirectory {
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

pub(super) struct UnavailableCustomers;

impl CustomerStore for UnavailableCustomers {
    fn insert(&self, _customer: Customer) -> Result<Customer, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _customer: Customer) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_id(&self, _id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_contact(
        &self,
        _email: &str,
        _phone: &str,
    ) -> Result<Option<Customer>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn single_bank_directory() -> MemoryDirectory {
    MemoryDirectory::with_banks(vec![bank(1, "Canara Bank", "560001")])
        .add_rule(government_rule(11, 1))
}

pub(super) fn build_service() -> (
    LoanMatchService<MemoryCustomers, MemoryDirectory>,
    Arc<MemoryCustomers>,
) {
    let customers = Arc::new(MemoryCustomers::default());
    let directory = Arc::new(single_bank_directory());
    let service = LoanMatchService::new(customers.clone(), directory, evaluation_config());
    (service, customers)
}

pub(super) fn router_with_service(
    service: LoanMatchService<MemoryCustomers, MemoryDirectory>,
) -> axum::Router {
    lending_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Customer, EmploymentCategory};
use super::evaluation::{BankOffer, BankRejection, MatchOutcome};

/// API-facing customer record. The extension fields mirror the differing
/// KYC documentation per employment category: salaried categories expose
/// the monthly figure and employer fields, self-employed categories expose
/// only the annual figure, and an unrecognized label gets no extension.
/// Absent fields are omitted from the JSON payload, not serialized as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfileView {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub dob: NaiveDate,
    pub pan: String,
    pub employment_type: String,
    pub city: String,
    pub pincode: String,
    pub age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_income: Option<f64>,
}

pub fn profile_view(customer: &Customer, age: i32) -> CustomerProfileView {
    let mut view = CustomerProfileView {
        id: customer.id.0,
        full_name: customer.full_name.clone(),
        email: customer.email.clone(),
        phone: customer.phone.clone(),
        dob: customer.dob,
        pan: customer.pan.clone(),
        employment_type: customer.employment_type.clone(),
        city: customer.city.clone(),
        pincode: customer.pincode.clone(),
        age,
        monthly_salary: None,
        department: None,
        designation: None,
        company: None,
        annual_income: None,
    };

    let designation = customer
        .designation_name
        .clone()
        .or_else(|| customer.designation.clone());

    match EmploymentCategory::from_label(&customer.employment_type) {
        Some(EmploymentCategory::PrivateEmployee) => {
            view.monthly_salary = Some(customer.salary);
            view.department = customer.department_name.clone();
            view.designation = designation;
            view.company = customer.company_name.clone();
        }
        Some(EmploymentCategory::Government) => {
            view.monthly_salary = Some(customer.salary);
            view.department = customer.department_name.clone();
            view.designation = designation;
        }
        Some(EmploymentCategory::SelfEmployed)
        | Some(EmploymentCategory::SelfEmployedProfessional) => {
            view.annual_income = Some(customer.annual_income);
        }
        None => {}
    }

    view
}

/// Combined payload for the upsert-and-match endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityReport {
    pub message: String,
    pub customer: CustomerProfileView,
    pub eligible_banks: Vec<BankOffer>,
    pub ineligible_banks: Vec<BankRejection>,
}

pub(crate) fn eligibility_report(
    message: &str,
    customer: &Customer,
    age: i32,
    outcome: MatchOutcome,
) -> EligibilityReport {
    EligibilityReport {
        message: message.to_string(),
        customer: profile_view(customer, age),
        eligible_banks: outcome.eligible_banks,
        ineligible_banks: outcome.ineligible_banks,
    }
}

/// Legacy lookup payload: name, age, salary, and the eligible side only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerEligibilityView {
    pub customer: String,
    pub age: i32,
    pub salary: f64,
    pub eligible_banks: Vec<BankOffer>,
}

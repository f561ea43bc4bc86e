use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u64);

/// Identifier wrapper for partner banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankId(pub u64);

/// Inbound customer payload. Field names preserve the public API contract,
/// so the employment extensions keep their camelCase wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub dob: NaiveDate,
    pub pan: String,
    pub employment_type: String,
    pub salary: f64,
    pub city: String,
    pub pincode: String,
    #[serde(default)]
    pub existing_loan: bool,
    #[serde(default, rename = "departmentName")]
    pub department_name: Option<String>,
    #[serde(default, rename = "designationName")]
    pub designation_name: Option<String>,
    #[serde(default, rename = "companyName")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
}

/// Persisted customer record. Annual income is stored redundantly alongside
/// the monthly salary and recomputed on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub dob: NaiveDate,
    pub pan: String,
    pub employment_type: String,
    pub salary: f64,
    pub annual_income: f64,
    pub city: String,
    pub pincode: String,
    pub existing_loan: bool,
    pub department_name: Option<String>,
    pub designation_name: Option<String>,
    pub company_name: Option<String>,
    pub designation: Option<String>,
}

pub(crate) const ANNUAL_INCOME_MONTHS: f64 = 12.0;

impl Customer {
    pub fn from_submission(id: CustomerId, submission: CustomerSubmission) -> Self {
        let annual_income = submission.salary * ANNUAL_INCOME_MONTHS;
        Self {
            id,
            full_name: submission.full_name,
            email: submission.email,
            phone: submission.phone,
            dob: submission.dob,
            pan: submission.pan,
            employment_type: submission.employment_type,
            salary: submission.salary,
            annual_income,
            city: submission.city,
            pincode: submission.pincode,
            existing_loan: submission.existing_loan,
            department_name: submission.department_name,
            designation_name: submission.designation_name,
            company_name: submission.company_name,
            designation: submission.designation,
        }
    }

    /// Full-field overwrite on resubmission. Every mutable field is listed
    /// explicitly; only the identifier survives.
    pub fn overwrite_with(&mut self, submission: CustomerSubmission) {
        self.full_name = submission.full_name;
        self.email = submission.email;
        self.phone = submission.phone;
        self.dob = submission.dob;
        self.pan = submission.pan;
        self.employment_type = submission.employment_type;
        self.salary = submission.salary;
        self.annual_income = submission.salary * ANNUAL_INCOME_MONTHS;
        self.city = submission.city;
        self.pincode = submission.pincode;
        self.existing_loan = submission.existing_loan;
        self.department_name = submission.department_name;
        self.designation_name = submission.designation_name;
        self.company_name = submission.company_name;
        self.designation = submission.designation;
    }
}

/// Partner bank. One record per serviced pincode; location matching is
/// exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub bank_id: BankId,
    pub bank_name: String,
    pub state: String,
    pub pincode: String,
}

/// Bank-defined eligibility thresholds plus the offered rate. Age bounds
/// are inclusive on both ends; job type matches case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRule {
    pub rule_id: u64,
    pub bank_id: BankId,
    pub min_salary: f64,
    pub job_type: String,
    pub min_age: i32,
    pub max_age: i32,
    pub interest_rate: f64,
}

/// Customer-to-bank interest join entity. Kept for schema parity with the
/// persisted model; nothing in the evaluation path populates or reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInterest {
    pub interest_id: u64,
    pub customer_id: CustomerId,
    pub bank_id: BankId,
}

/// Employment categories the response formatter recognizes. Any other
/// label is stored verbatim but carries no profile extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentCategory {
    PrivateEmployee,
    Government,
    SelfEmployed,
    SelfEmployedProfessional,
}

impl EmploymentCategory {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "private employee" => Some(Self::PrivateEmployee),
            "government" => Some(Self::Government),
            "self employed" => Some(Self::SelfEmployed),
            "self employed professional" => Some(Self::SelfEmployedProfessional),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EmploymentCategory::PrivateEmployee => "private employee",
            EmploymentCategory::Government => "government",
            EmploymentCategory::SelfEmployed => "self employed",
            EmploymentCategory::SelfEmployedProfessional => "self employed professional",
        }
    }
}

use crate::infra::{default_evaluation_config, demo_directory, InMemoryCustomerStore};
use chrono::{Local, NaiveDate};
use clap::Args;
use lendmatch::config::DirectoryConfig;
use lendmatch::error::AppError;
use lendmatch::lending::{CustomerSubmission, LoanMatchService};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Bank directory CSV export. Defaults to the built-in demo directory.
    #[arg(long, requires = "loan_rules_csv")]
    pub(crate) banks_csv: Option<PathBuf>,
    /// Loan rule CSV export. Defaults to the built-in demo directory.
    #[arg(long, requires = "banks_csv")]
    pub(crate) loan_rules_csv: Option<PathBuf>,
    /// Override the reference date used for age derivation (YYYY-MM-DD).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        banks_csv,
        loan_rules_csv,
        today,
    } = args;

    let directory = if banks_csv.is_some() {
        crate::infra::load_directory(&DirectoryConfig {
            banks_csv,
            loan_rules_csv,
        })?
    } else {
        demo_directory()
    };

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = LoanMatchService::new(
        Arc::new(InMemoryCustomerStore::default()),
        Arc::new(directory),
        default_evaluation_config(),
    );

    println!("Loan eligibility demo");
    println!("Reference date: {today}");

    let submission = sample_submission();
    println!(
        "\nSubmitting {} ({}, salary {}, pincode {})",
        submission.full_name, submission.employment_type, submission.salary, submission.pincode
    );

    let (report, _) = service.register_and_match(submission, today)?;

    println!(
        "\n{}",
        serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?
    );

    Ok(())
}

fn sample_submission() -> CustomerSubmission {
    CustomerSubmission {
        full_name: "Asha Verma".to_string(),
        email: "asha.verma@example.com".to_string(),
        phone: "9876543210".to_string(),
        dob: NaiveDate::from_ymd_opt(1992, 1, 20).expect("valid date"),
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

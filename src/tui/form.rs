//! Applicant form state, independent of the terminal.
//!
//! Each `Field` knows how to render, step, and parse its slice of an
//! `ApplicantInput`, so the key handling in `tui::App` stays generic.

use crate::domain::{
    AGE_RANGE, ApplicantInput, LoanPurpose, LoanType, OPEN_ACCOUNTS_RANGE, PERCENT_RANGE, ResidenceType, cycle,
};
use crate::error::AppError;

const MONEY_STEP: f64 = 50_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    AnnualIncome,
    LoanAmount,
    LoanTenure,
    AvgDpd,
    DelinquencyRatio,
    CreditUtilization,
    OpenAccounts,
    Residence,
    Purpose,
    LoanType,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Age,
        Field::AnnualIncome,
        Field::LoanAmount,
        Field::LoanTenure,
        Field::AvgDpd,
        Field::DelinquencyRatio,
        Field::CreditUtilization,
        Field::OpenAccounts,
        Field::Residence,
        Field::Purpose,
        Field::LoanType,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::AnnualIncome => "Annual Income",
            Field::LoanAmount => "Loan Amount",
            Field::LoanTenure => "Loan Tenure (months)",
            Field::AvgDpd => "Avg Days Past Due (DPD)",
            Field::DelinquencyRatio => "Delinquency Ratio (%)",
            Field::CreditUtilization => "Credit Utilization Ratio (%)",
            Field::OpenAccounts => "Open Loan Accounts",
            Field::Residence => "Residence Type",
            Field::Purpose => "Loan Purpose",
            Field::LoanType => "Loan Type",
        }
    }

    /// Numeric fields accept typed values; categorical ones only cycle.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Field::Residence | Field::Purpose | Field::LoanType)
    }

    pub fn value(self, input: &ApplicantInput) -> String {
        match self {
            Field::Age => input.age.to_string(),
            Field::AnnualIncome => format!("{:.0}", input.annual_income),
            Field::LoanAmount => format!("{:.0}", input.loan_amount),
            Field::LoanTenure => input.loan_tenure_months.to_string(),
            Field::AvgDpd => trim_float(input.avg_dpd_per_delinquency),
            Field::DelinquencyRatio => trim_float(input.delinquency_ratio),
            Field::CreditUtilization => trim_float(input.credit_utilization_ratio),
            Field::OpenAccounts => input.num_open_accounts.to_string(),
            Field::Residence => input.residence_type.display_name().to_string(),
            Field::Purpose => input.loan_purpose.display_name().to_string(),
            Field::LoanType => input.loan_type.display_name().to_string(),
        }
    }

    /// Move the field one step, staying within the form bounds.
    pub fn step(self, input: &mut ApplicantInput, forward: bool) {
        match self {
            Field::Age => input.age = step_u32(input.age, forward, AGE_RANGE),
            Field::AnnualIncome => input.annual_income = step_money(input.annual_income, forward),
            Field::LoanAmount => input.loan_amount = step_money(input.loan_amount, forward),
            Field::LoanTenure => {
                input.loan_tenure_months = step_u32(input.loan_tenure_months, forward, (0, u32::MAX));
            }
            Field::AvgDpd => {
                input.avg_dpd_per_delinquency = step_f64(input.avg_dpd_per_delinquency, forward, (0.0, f64::MAX));
            }
            Field::DelinquencyRatio => {
                input.delinquency_ratio = step_f64(input.delinquency_ratio, forward, PERCENT_RANGE);
            }
            Field::CreditUtilization => {
                input.credit_utilization_ratio = step_f64(input.credit_utilization_ratio, forward, PERCENT_RANGE);
            }
            Field::OpenAccounts => {
                input.num_open_accounts = step_u32(input.num_open_accounts, forward, OPEN_ACCOUNTS_RANGE);
            }
            Field::Residence => input.residence_type = cycle(&ResidenceType::ALL, input.residence_type, forward),
            Field::Purpose => input.loan_purpose = cycle(&LoanPurpose::ALL, input.loan_purpose, forward),
            Field::LoanType => input.loan_type = cycle(&LoanType::ALL, input.loan_type, forward),
        }
    }

    /// Parse typed text into the field. Range checks happen at calculation time.
    pub fn set_from_text(self, input: &mut ApplicantInput, text: &str) -> Result<(), AppError> {
        let text = text.trim();
        match self {
            Field::Age => input.age = parse_u32(self, text)?,
            Field::AnnualIncome => input.annual_income = parse_f64(self, text)?,
            Field::LoanAmount => input.loan_amount = parse_f64(self, text)?,
            Field::LoanTenure => input.loan_tenure_months = parse_u32(self, text)?,
            Field::AvgDpd => input.avg_dpd_per_delinquency = parse_f64(self, text)?,
            Field::DelinquencyRatio => input.delinquency_ratio = parse_f64(self, text)?,
            Field::CreditUtilization => input.credit_utilization_ratio = parse_f64(self, text)?,
            Field::OpenAccounts => input.num_open_accounts = parse_u32(self, text)?,
            Field::Residence | Field::Purpose | Field::LoanType => {
                return Err(AppError::invalid(format!("{} is chosen with ←/→.", self.label())));
            }
        }
        Ok(())
    }
}

fn step_u32(value: u32, forward: bool, (lo, hi): (u32, u32)) -> u32 {
    let next = if forward { value.saturating_add(1) } else { value.saturating_sub(1) };
    next.clamp(lo, hi)
}

fn step_f64(value: f64, forward: bool, (lo, hi): (f64, f64)) -> f64 {
    let next = if forward { value + 1.0 } else { value - 1.0 };
    next.clamp(lo, hi)
}

fn step_money(value: f64, forward: bool) -> f64 {
    let next = if forward { value + MONEY_STEP } else { value - MONEY_STEP };
    next.max(0.0)
}

fn parse_u32(field: Field, text: &str) -> Result<u32, AppError> {
    text.parse()
        .map_err(|_| AppError::invalid(format!("{}: '{text}' is not a whole number.", field.label())))
}

fn parse_f64(field: Field, text: &str) -> Result<f64, AppError> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::invalid(format!("{}: '{text}' is not a number.", field.label()))),
    }
}

fn trim_float(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v}") }
}

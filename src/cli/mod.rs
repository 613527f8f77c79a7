//! Command-line parsing for the credit risk scorer.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! scoring code. Range checks on applicant values happen in
//! `ApplicantInput::validate`, shared with the terminal form.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{ApplicantInput, LoanPurpose, LoanType, ResidenceType};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "credisure", version, about = "Credit risk scoring for a single applicant")]
pub struct Cli {
    /// Trained artifact JSON (overrides CREDISURE_ARTIFACT).
    #[arg(long, global = true, value_name = "JSON")]
    pub artifact: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one applicant and print probability, credit score, and rating.
    Score(ScoreArgs),
    /// Load and validate the artifact, then print a summary.
    Inspect,
    /// Launch the interactive applicant form.
    Tui,
}

/// Applicant fields. Every flag defaults to the form's starting value.
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    /// Age in years (18-100).
    #[arg(long, default_value_t = 28)]
    pub age: u32,

    /// Annual income.
    #[arg(long, default_value_t = 1_200_000.0)]
    pub income: f64,

    /// Requested loan amount.
    #[arg(long, default_value_t = 2_560_000.0)]
    pub loan_amount: f64,

    /// Loan tenure in months.
    #[arg(long, default_value_t = 36)]
    pub tenure: u32,

    /// Average days past due per delinquency.
    #[arg(long, default_value_t = 20.0)]
    pub avg_dpd: f64,

    /// Delinquency ratio, percent (0-100).
    #[arg(long, default_value_t = 30.0)]
    pub delinquency_ratio: f64,

    /// Credit utilization ratio, percent (0-100).
    #[arg(long, default_value_t = 30.0)]
    pub credit_utilization: f64,

    /// Number of open loan accounts (1-4).
    #[arg(long, default_value_t = 2)]
    pub open_accounts: u32,

    #[arg(long, value_enum, default_value_t = ResidenceType::Owned)]
    pub residence: ResidenceType,

    #[arg(long, value_enum, default_value_t = LoanPurpose::Education)]
    pub purpose: LoanPurpose,

    #[arg(long, value_enum, default_value_t = LoanType::Unsecured)]
    pub loan_type: LoanType,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ScoreArgs {
    pub fn to_input(&self) -> ApplicantInput {
        ApplicantInput {
            age: self.age,
            annual_income: self.income,
            loan_amount: self.loan_amount,
            loan_tenure_months: self.tenure,
            avg_dpd_per_delinquency: self.avg_dpd,
            delinquency_ratio: self.delinquency_ratio,
            credit_utilization_ratio: self.credit_utilization,
            num_open_accounts: self.open_accounts,
            residence_type: self.residence,
            loan_purpose: self.purpose,
            loan_type: self.loan_type,
        }
    }
}

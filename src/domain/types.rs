//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - built from CLI flags or the terminal form
//! - printed as JSON by `credisure score --json`
//! - constructed directly in tests

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Applicant's housing situation.
///
/// `Mortgage` is the encoding baseline: it has no indicator column of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ResidenceType {
    Owned,
    Rented,
    Mortgage,
}

/// What the loan is for. `Auto` is the encoding baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum LoanPurpose {
    Education,
    Home,
    Auto,
    Personal,
}

/// Collateral status. `Secured` is the encoding baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum LoanType {
    Unsecured,
    Secured,
}

impl ResidenceType {
    pub const ALL: [ResidenceType; 3] = [ResidenceType::Owned, ResidenceType::Rented, ResidenceType::Mortgage];

    pub fn display_name(self) -> &'static str {
        match self {
            ResidenceType::Owned => "Owned",
            ResidenceType::Rented => "Rented",
            ResidenceType::Mortgage => "Mortgage",
        }
    }
}

impl LoanPurpose {
    pub const ALL: [LoanPurpose; 4] = [
        LoanPurpose::Education,
        LoanPurpose::Home,
        LoanPurpose::Auto,
        LoanPurpose::Personal,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            LoanPurpose::Education => "Education",
            LoanPurpose::Home => "Home",
            LoanPurpose::Auto => "Auto",
            LoanPurpose::Personal => "Personal",
        }
    }
}

impl LoanType {
    pub const ALL: [LoanType; 2] = [LoanType::Unsecured, LoanType::Secured];

    pub fn display_name(self) -> &'static str {
        match self {
            LoanType::Unsecured => "Unsecured",
            LoanType::Secured => "Secured",
        }
    }
}

/// Pick the neighbour of `current` in `all`, wrapping at both ends.
///
/// Used by the terminal form to cycle categorical fields.
pub fn cycle<T: Copy + PartialEq, const N: usize>(all: &[T; N], current: T, forward: bool) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward { (idx + 1) % N } else { (idx + N - 1) % N };
    all[next]
}

/// One applicant's data, as collected by the form layer.
///
/// Ratios (`delinquency_ratio`, `credit_utilization_ratio`) are percentages in
/// `[0, 100]`. Monetary amounts share a single currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInput {
    pub age: u32,
    pub annual_income: f64,
    pub loan_amount: f64,
    pub loan_tenure_months: u32,
    pub avg_dpd_per_delinquency: f64,
    pub delinquency_ratio: f64,
    pub credit_utilization_ratio: f64,
    pub num_open_accounts: u32,
    pub residence_type: ResidenceType,
    pub loan_purpose: LoanPurpose,
    pub loan_type: LoanType,
}

/// Form bounds for caller-side validation.
pub const AGE_RANGE: (u32, u32) = (18, 100);
pub const OPEN_ACCOUNTS_RANGE: (u32, u32) = (1, 4);
pub const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);

impl Default for ApplicantInput {
    fn default() -> Self {
        Self {
            age: 28,
            annual_income: 1_200_000.0,
            loan_amount: 2_560_000.0,
            loan_tenure_months: 36,
            avg_dpd_per_delinquency: 20.0,
            delinquency_ratio: 30.0,
            credit_utilization_ratio: 30.0,
            num_open_accounts: 2,
            residence_type: ResidenceType::Owned,
            loan_purpose: LoanPurpose::Education,
            loan_type: LoanType::Unsecured,
        }
    }
}

impl ApplicantInput {
    /// Loan amount over annual income, or `0` when income is not positive.
    pub fn loan_to_income(&self) -> f64 {
        if self.annual_income > 0.0 {
            self.loan_amount / self.annual_income
        } else {
            0.0
        }
    }

    /// Check the bounds the form layer enforces before calling the engine.
    ///
    /// The scoring core never calls this; out-of-range values extrapolate.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.age < AGE_RANGE.0 || self.age > AGE_RANGE.1 {
            return Err(AppError::invalid(format!(
                "age must be between {} and {}, got {}",
                AGE_RANGE.0, AGE_RANGE.1, self.age
            )));
        }
        non_negative("annual income", self.annual_income)?;
        non_negative("loan amount", self.loan_amount)?;
        non_negative("avg DPD per delinquency", self.avg_dpd_per_delinquency)?;
        percent("delinquency ratio", self.delinquency_ratio)?;
        percent("credit utilization ratio", self.credit_utilization_ratio)?;
        if self.num_open_accounts < OPEN_ACCOUNTS_RANGE.0 || self.num_open_accounts > OPEN_ACCOUNTS_RANGE.1 {
            return Err(AppError::invalid(format!(
                "open loan accounts must be between {} and {}, got {}",
                OPEN_ACCOUNTS_RANGE.0, OPEN_ACCOUNTS_RANGE.1, self.num_open_accounts
            )));
        }
        Ok(())
    }
}

fn non_negative(label: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid(format!("{label} must be a non-negative number, got {value}")))
    }
}

fn percent(label: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= PERCENT_RANGE.0 && value <= PERCENT_RANGE.1 {
        Ok(())
    } else {
        Err(AppError::invalid(format!("{label} must be between 0 and 100, got {value}")))
    }
}

/// Four-tier qualitative label over the 300–900 score axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    Poor,
    Average,
    Good,
    Excellent,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Poor, Rating::Average, Rating::Good, Rating::Excellent];

    pub fn display_name(self) -> &'static str {
        match self {
            Rating::Poor => "Poor",
            Rating::Average => "Average",
            Rating::Good => "Good",
            Rating::Excellent => "Excellent",
        }
    }

    /// Lower bound (inclusive) and upper bound of the tier.
    ///
    /// Upper bounds are exclusive except for `Excellent`, which includes 900.
    pub fn score_bounds(self) -> (f64, f64) {
        match self {
            Rating::Poor => (300.0, 500.0),
            Rating::Average => (500.0, 650.0),
            Rating::Good => (650.0, 750.0),
            Rating::Excellent => (750.0, 900.0),
        }
    }

    /// Look up the tier for an unrounded score.
    ///
    /// Returns `None` outside `[300, 900]` (including NaN).
    pub fn from_score(score: f64) -> Option<Rating> {
        Rating::ALL.into_iter().find(|rating| {
            let (lo, hi) = rating.score_bounds();
            match rating {
                Rating::Excellent => (lo..=hi).contains(&score),
                _ => (lo..hi).contains(&score),
            }
        })
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Output of one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Probability of default, in `[0, 1]`.
    pub probability: f64,
    /// Integer score in `[300, 900]`.
    pub credit_score: u16,
    pub rating: Rating,
}

impl ScoreResult {
    pub fn non_default_probability(&self) -> f64 {
        1.0 - self.probability
    }

    /// `(probability, credit_score, rating)` as the form layer consumes it.
    pub fn as_triple(&self) -> (f64, u16, &'static str) {
        (self.probability, self.credit_score, self.rating.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loan_to_income_zero_income_is_zero() {
        let input = ApplicantInput {
            annual_income: 0.0,
            loan_amount: 500_000.0,
            ..ApplicantInput::default()
        };
        assert_eq!(input.loan_to_income(), 0.0);
    }

    #[test]
    fn loan_to_income_default_applicant() {
        let lti = ApplicantInput::default().loan_to_income();
        assert!((lti - 2_560_000.0 / 1_200_000.0).abs() < 1e-12);
    }

    #[test]
    fn rating_boundaries_are_lower_inclusive() {
        assert_eq!(Rating::from_score(300.0), Some(Rating::Poor));
        assert_eq!(Rating::from_score(499.999_999), Some(Rating::Poor));
        assert_eq!(Rating::from_score(500.0), Some(Rating::Average));
        assert_eq!(Rating::from_score(649.999_999), Some(Rating::Average));
        assert_eq!(Rating::from_score(650.0), Some(Rating::Good));
        assert_eq!(Rating::from_score(749.999), Some(Rating::Good));
        assert_eq!(Rating::from_score(750.0), Some(Rating::Excellent));
        assert_eq!(Rating::from_score(900.0), Some(Rating::Excellent));
    }

    #[test]
    fn rating_outside_axis_is_none() {
        assert_eq!(Rating::from_score(299.999), None);
        assert_eq!(Rating::from_score(900.001), None);
        assert_eq!(Rating::from_score(f64::NAN), None);
    }

    #[test]
    fn validate_accepts_form_defaults() {
        assert!(ApplicantInput::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        let young = ApplicantInput { age: 17, ..ApplicantInput::default() };
        assert_eq!(young.validate().unwrap_err().exit_code(), 2);

        let accounts = ApplicantInput { num_open_accounts: 5, ..ApplicantInput::default() };
        assert!(accounts.validate().is_err());

        let util = ApplicantInput { credit_utilization_ratio: 100.5, ..ApplicantInput::default() };
        assert!(util.validate().is_err());

        let income = ApplicantInput { annual_income: -1.0, ..ApplicantInput::default() };
        assert!(income.validate().is_err());
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(&ResidenceType::ALL, ResidenceType::Mortgage, true), ResidenceType::Owned);
        assert_eq!(cycle(&ResidenceType::ALL, ResidenceType::Owned, false), ResidenceType::Mortgage);
        assert_eq!(cycle(&LoanType::ALL, LoanType::Unsecured, true), LoanType::Secured);
    }

    #[test]
    fn triple_uses_display_label() {
        let result = ScoreResult { probability: 0.25, credit_score: 750, rating: Rating::Excellent };
        assert_eq!(result.as_triple(), (0.25, 750, "Excellent"));
        assert!((result.non_default_probability() - 0.75).abs() < 1e-12);
    }
}

//! Applicant input → raw feature set.
//!
//! The artifact was trained on a wider schema than the applicant form collects.
//! Besides the directly mapped and derived fields, the scaler expects a set of
//! placeholder columns that have no counterpart in the form. They are filled
//! with the constant `1`, the value the reference artifact was served with;
//! changing or omitting them changes predictions.

use crate::domain::{ApplicantInput, LoanPurpose, LoanType, ResidenceType};
use crate::features::RawFeatures;

/// Columns required by the artifact but not derived from any applicant field.
pub const PLACEHOLDER_FEATURES: [&str; 11] = [
    "number_of_dependants",
    "years_at_current_address",
    "zipcode",
    "sanction_amount",
    "processing_fee",
    "gst",
    "net_disbursement",
    "principal_outstanding",
    "bank_balance_at_application",
    "number_of_closed_accounts",
    "enquiry_count",
];

pub const PLACEHOLDER_VALUE: f64 = 1.0;

/// Build the raw (unscaled) feature set for one applicant.
///
/// Categorical fields are one-hot encoded against a baseline category that has
/// no column of its own: `Mortgage`, `Auto` and `Secured` encode as all zeros.
pub fn vectorize(input: &ApplicantInput) -> RawFeatures {
    let mut raw = RawFeatures::default();

    raw.insert("age", f64::from(input.age));
    raw.insert("loan_tenure_months", f64::from(input.loan_tenure_months));
    raw.insert("number_of_open_accounts", f64::from(input.num_open_accounts));
    raw.insert("credit_utilization_ratio", input.credit_utilization_ratio);
    raw.insert("loan_to_income", input.loan_to_income());
    raw.insert("delinquency_ratio", input.delinquency_ratio);
    raw.insert("avg_dpd_per_delinquency", input.avg_dpd_per_delinquency);

    raw.insert("residence_type_Owned", flag(input.residence_type == ResidenceType::Owned));
    raw.insert("residence_type_Rented", flag(input.residence_type == ResidenceType::Rented));
    raw.insert("loan_purpose_Education", flag(input.loan_purpose == LoanPurpose::Education));
    raw.insert("loan_purpose_Home", flag(input.loan_purpose == LoanPurpose::Home));
    raw.insert("loan_purpose_Personal", flag(input.loan_purpose == LoanPurpose::Personal));
    raw.insert("loan_type_Unsecured", flag(input.loan_type == LoanType::Unsecured));

    for name in PLACEHOLDER_FEATURES {
        raw.insert(name, PLACEHOLDER_VALUE);
    }

    raw
}

fn flag(on: bool) -> f64 {
    if on { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_full_schema() {
        let raw = vectorize(&ApplicantInput::default());
        assert_eq!(raw.len(), 13 + PLACEHOLDER_FEATURES.len());
        for name in PLACEHOLDER_FEATURES {
            assert_eq!(raw.get(name), Some(1.0), "{name}");
        }
    }

    #[test]
    fn pass_through_fields_keep_values() {
        let input = ApplicantInput {
            age: 41,
            loan_tenure_months: 48,
            num_open_accounts: 3,
            credit_utilization_ratio: 55.5,
            delinquency_ratio: 12.0,
            avg_dpd_per_delinquency: 7.25,
            ..ApplicantInput::default()
        };
        let raw = vectorize(&input);
        assert_eq!(raw.get("age"), Some(41.0));
        assert_eq!(raw.get("loan_tenure_months"), Some(48.0));
        assert_eq!(raw.get("number_of_open_accounts"), Some(3.0));
        assert_eq!(raw.get("credit_utilization_ratio"), Some(55.5));
        assert_eq!(raw.get("delinquency_ratio"), Some(12.0));
        assert_eq!(raw.get("avg_dpd_per_delinquency"), Some(7.25));
    }

    #[test]
    fn zero_income_gives_zero_loan_to_income() {
        let input = ApplicantInput {
            annual_income: 0.0,
            loan_amount: 2_000_000.0,
            ..ApplicantInput::default()
        };
        assert_eq!(vectorize(&input).get("loan_to_income"), Some(0.0));
    }

    #[test]
    fn baseline_categories_encode_as_all_zero() {
        let input = ApplicantInput {
            residence_type: ResidenceType::Mortgage,
            loan_purpose: LoanPurpose::Auto,
            loan_type: LoanType::Secured,
            ..ApplicantInput::default()
        };
        let raw = vectorize(&input);
        for name in [
            "residence_type_Owned",
            "residence_type_Rented",
            "loan_purpose_Education",
            "loan_purpose_Home",
            "loan_purpose_Personal",
            "loan_type_Unsecured",
        ] {
            assert_eq!(raw.get(name), Some(0.0), "{name}");
        }
        assert!(raw.get("residence_type_Mortgage").is_none());
        assert!(raw.get("loan_purpose_Auto").is_none());
        assert!(raw.get("loan_type_Secured").is_none());
    }

    #[test]
    fn one_hot_sets_exactly_one_flag() {
        for residence in ResidenceType::ALL {
            let raw = vectorize(&ApplicantInput {
                residence_type: residence,
                ..ApplicantInput::default()
            });
            let owned = raw.get("residence_type_Owned").unwrap_or(-1.0);
            let rented = raw.get("residence_type_Rented").unwrap_or(-1.0);
            let expected = match residence {
                ResidenceType::Owned => (1.0, 0.0),
                ResidenceType::Rented => (0.0, 1.0),
                ResidenceType::Mortgage => (0.0, 0.0),
            };
            assert_eq!((owned, rented), expected);
        }

        let home = vectorize(&ApplicantInput {
            loan_purpose: LoanPurpose::Home,
            ..ApplicantInput::default()
        });
        assert_eq!(home.get("loan_purpose_Home"), Some(1.0));
        assert_eq!(home.get("loan_purpose_Education"), Some(0.0));
        assert_eq!(home.get("loan_purpose_Personal"), Some(0.0));
    }
}

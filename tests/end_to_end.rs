//! End-to-end scoring against the bundled artifact.

use std::path::PathBuf;

use credisure::{ApplicantInput, LoanPurpose, LoanType, Rating, ResidenceType, ScoringEngine};

fn bundled_engine() -> ScoringEngine {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("artifacts/model_data.json");
    ScoringEngine::from_path(&path).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

#[test]
fn reference_applicant_scores_poor() {
    let engine = bundled_engine();
    let result = engine.score(&ApplicantInput::default()).unwrap();

    assert_close(result.probability, 0.853_538_374_719_041_7);
    assert_eq!(result.credit_score, 387);
    assert_eq!(result.rating, Rating::Poor);
    assert_eq!(result.as_triple().2, "Poor");
}

#[test]
fn baseline_categories_score_excellent() {
    let engine = bundled_engine();
    let input = ApplicantInput {
        age: 45,
        annual_income: 2_500_000.0,
        loan_amount: 1_000_000.0,
        loan_tenure_months: 24,
        avg_dpd_per_delinquency: 0.0,
        delinquency_ratio: 0.0,
        credit_utilization_ratio: 10.0,
        num_open_accounts: 1,
        residence_type: ResidenceType::Mortgage,
        loan_purpose: LoanPurpose::Auto,
        loan_type: LoanType::Secured,
    };
    let result = engine.score(&input).unwrap();

    assert_close(result.probability, 0.005_343_176_745_378_71);
    assert_eq!(result.credit_score, 896);
    assert_eq!(result.rating, Rating::Excellent);
}

#[test]
fn rented_home_loan_scores_average() {
    let engine = bundled_engine();
    let input = ApplicantInput {
        age: 32,
        annual_income: 1_000_000.0,
        loan_amount: 1_400_000.0,
        loan_tenure_months: 36,
        avg_dpd_per_delinquency: 8.0,
        delinquency_ratio: 15.0,
        credit_utilization_ratio: 50.0,
        num_open_accounts: 2,
        residence_type: ResidenceType::Rented,
        loan_purpose: LoanPurpose::Home,
        loan_type: LoanType::Unsecured,
    };
    let result = engine.score(&input).unwrap();

    assert_close(result.probability, 0.577_264_963_227_464);
    assert_eq!(result.credit_score, 553);
    assert_eq!(result.rating, Rating::Average);
}

#[test]
fn zero_income_scores_without_error() {
    let engine = bundled_engine();
    let input = ApplicantInput {
        age: 30,
        annual_income: 0.0,
        loan_amount: 500_000.0,
        loan_tenure_months: 12,
        avg_dpd_per_delinquency: 5.0,
        delinquency_ratio: 10.0,
        credit_utilization_ratio: 40.0,
        num_open_accounts: 3,
        residence_type: ResidenceType::Rented,
        loan_purpose: LoanPurpose::Home,
        loan_type: LoanType::Unsecured,
    };
    let result = engine.score(&input).unwrap();

    assert_close(result.probability, 0.104_208_940_321_730_57);
    assert_eq!(result.credit_score, 837);
    assert_eq!(result.rating, Rating::Excellent);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let engine = bundled_engine();
    let input = ApplicantInput::default();
    let first = engine.score(&input).unwrap();
    for _ in 0..10 {
        let again = engine.score(&input).unwrap();
        assert_eq!(again.probability.to_bits(), first.probability.to_bits());
        assert_eq!(again.credit_score, first.credit_score);
        assert_eq!(again.rating, first.rating);
    }
}

#[test]
fn feature_vector_matches_canonical_order() {
    let engine = bundled_engine();
    let vector = engine.feature_vector(&ApplicantInput::default()).unwrap();

    assert_eq!(vector.names(), engine.artifact().features());
    assert_eq!(vector.len(), 13);
    assert!(vector.get("zipcode").is_none());
    assert_eq!(vector.get("residence_type_Owned"), Some(1.0));
    assert_eq!(vector.get("loan_purpose_Education"), Some(1.0));
    // age 28 on the fitted [18, 70] range
    assert_close(vector.get("age").unwrap_or(f64::NAN), 10.0 / 52.0);
}

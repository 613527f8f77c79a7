//! Plain-text formatting for `credisure score` and `credisure inspect`.

use std::path::Path;

use crate::domain::{ApplicantInput, ScoreResult};
use crate::model::TrainedArtifact;

/// Probability as a percentage with two decimals, e.g. `85.35%`.
pub fn fmt_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Format one scoring result together with the inputs that produced it.
pub fn format_score_result(input: &ApplicantInput, result: &ScoreResult) -> String {
    let mut out = String::new();

    out.push_str("=== credisure - Credit Risk Assessment ===\n");
    out.push_str(&format!(
        "Applicant: age={} | income={:.0} | loan={:.0} | tenure={}m\n",
        input.age, input.annual_income, input.loan_amount, input.loan_tenure_months
    ));
    out.push_str(&format!(
        "Behavior: avg_dpd={:.1} | delinquency={:.1}% | utilization={:.1}% | open_accounts={}\n",
        input.avg_dpd_per_delinquency,
        input.delinquency_ratio,
        input.credit_utilization_ratio,
        input.num_open_accounts
    ));
    out.push_str(&format!(
        "Profile: residence={} | purpose={} | type={}\n",
        input.residence_type.display_name(),
        input.loan_purpose.display_name(),
        input.loan_type.display_name()
    ));
    out.push_str(&format!("Loan to income: {:.2}\n", input.loan_to_income()));

    out.push('\n');
    out.push_str(&format!("Default probability: {}\n", fmt_percent(result.probability)));
    out.push_str(&format!("Credit score:        {}\n", result.credit_score));
    out.push_str(&format!("Rating:              {}\n", result.rating));

    out
}

/// Format an artifact summary: sizes, metadata, and per-feature weights.
pub fn format_artifact_summary(artifact: &TrainedArtifact, path: &Path) -> String {
    let mut out = String::new();
    let meta = artifact.metadata();

    out.push_str("=== credisure - Trained Artifact ===\n");
    out.push_str(&format!("Path: {}\n", path.display()));
    if let Some(name) = &meta.name {
        out.push_str(&format!("Name: {name}\n"));
    }
    if let Some(date) = meta.trained_on {
        out.push_str(&format!("Trained on: {}\n", date.format("%Y-%m-%d")));
    }
    out.push_str(&format!(
        "Features: {} | scaled columns: {} | intercept: {:.6}\n",
        artifact.features().len(),
        artifact.scaler().len(),
        artifact.model().intercept()
    ));

    out.push_str("\nWeights (canonical order):\n");
    let width = artifact.features().iter().map(String::len).max().unwrap_or(0);
    for (name, weight) in artifact.weights() {
        let scaled = if artifact.scaler().map_for(name).is_some() { "scaled" } else { "" };
        out.push_str(&format!("  {name:<width$}  {weight:>10.6}  {scaled}\n"));
    }

    let unused: Vec<&str> = artifact
        .scaler()
        .column_names()
        .filter(|c| !artifact.features().iter().any(|f| f == c))
        .collect();
    if !unused.is_empty() {
        out.push_str(&format!("\nScaled but not weighted: {}\n", unused.join(", ")));
    }

    out
}

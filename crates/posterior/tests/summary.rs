// File: crates/posterior/tests/summary.rs
// Purpose: HDI summarizer columns, interval labels, and table rendering.

use approx::assert_relative_eq;
use ndarray::{array, Array2};
use posterior::{HdiSummarizer, Posterior, PosteriorError, Summarizer};

fn posterior() -> Posterior {
    let intercept = Array2::from_shape_fn((2, 50), |(c, d)| 1.0 + ((c * 50 + d) as f64 - 49.5) * 0.01);
    let slope = Array2::from_elem((2, 50), 2.0);
    Posterior::default()
        .with_param("Intercept", intercept)
        .unwrap()
        .with_param("x", slope)
        .unwrap()
}

#[test]
fn rows_follow_posterior_order() {
    let summary = HdiSummarizer.summarize(&posterior(), 0.95).unwrap();
    let names: Vec<_> = summary.rows().map(|(n, _)| n.to_string()).collect();
    assert_eq!(names, vec!["Intercept", "x"]);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary.credible_mass(), 0.95);
}

#[test]
fn means_and_intervals() {
    let summary = HdiSummarizer.summarize(&posterior(), 0.9).unwrap();
    let a = summary.get("Intercept").unwrap();
    assert_relative_eq!(a.mean, 1.0, epsilon = 1e-12);
    assert!(a.lower < a.mean && a.mean < a.upper);
    // Uniform grid of 100 draws: HDI spans 90 steps of 0.01.
    assert_relative_eq!(a.upper - a.lower, 0.9, epsilon = 1e-9);

    let b = summary.get("x").unwrap();
    assert_eq!((b.mean, b.sd, b.lower, b.upper), (2.0, 0.0, 2.0, 2.0));
    assert_eq!(b.r_hat, Some(1.0));
    assert_eq!(summary.mean("x"), Some(2.0));
    assert_eq!(summary.mean("sd"), None);
}

#[test]
fn interval_labels_name_the_tails() {
    let s95 = HdiSummarizer.summarize(&posterior(), 0.95).unwrap();
    assert_eq!(s95.interval_labels(), ("hdi_2.5%".to_string(), "hdi_97.5%".to_string()));
    let s90 = HdiSummarizer.summarize(&posterior(), 0.9).unwrap();
    assert_eq!(s90.interval_labels(), ("hdi_5%".to_string(), "hdi_95%".to_string()));
}

#[test]
fn table_lists_every_parameter() {
    let summary = HdiSummarizer.summarize(&posterior(), 0.95).unwrap();
    let table = summary.to_string();
    assert!(table.lines().next().unwrap().contains("hdi_97.5%"));
    assert!(table.contains("Intercept"));
    assert_eq!(table.lines().count(), 3);
}

#[test]
fn rejects_credible_mass_outside_unit_interval() {
    for m in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
        let err = HdiSummarizer.summarize(&posterior(), m).unwrap_err();
        assert!(matches!(err, PosteriorError::InvalidCredibleMass(_)));
    }
    let single = Posterior::default().with_param("x", array![[1.0]]).unwrap();
    let s = HdiSummarizer.summarize(&single, 0.5).unwrap();
    assert_eq!(s.get("x").unwrap().r_hat, None);
}

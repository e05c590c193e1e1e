// File: crates/posterior/tests/samples.rs
// Purpose: Posterior container shape rules, flattening, and role lookup errors.

use ndarray::{array, Array2};
use posterior::{ParamRole, ParamRoles, Posterior, PosteriorError};

#[test]
fn flatten_concatenates_chains_in_order() {
    let mut post = Posterior::default();
    post.insert("Intercept", array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(post.shape(), Some((2, 3)));
    assert_eq!(post.n_chains(), 2);
    assert_eq!(post.n_draws(), 3);
    assert_eq!(post.flatten("Intercept").unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn shapes_must_agree() {
    let mut post = Posterior::default();
    post.insert("Intercept", Array2::zeros((2, 3))).unwrap();
    let err = post.insert("x", Array2::zeros((3, 2))).unwrap_err();
    assert_eq!(
        err,
        PosteriorError::ShapeMismatch { name: "x".into(), expected: (2, 3), got: (3, 2) }
    );
    assert!(matches!(post.insert("Intercept", Array2::zeros((2, 3))), Err(PosteriorError::Duplicate(_))));
    assert!(matches!(post.insert("sd", Array2::zeros((0, 3))), Err(PosteriorError::Empty(_))));
}

#[test]
fn insert_chains_rejects_ragged_input() {
    let mut post = Posterior::default();
    post.insert_chains("x", &[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(post.get("x").unwrap(), &array![[1.0, 2.0], [3.0, 4.0]]);

    let err = post.insert_chains("Intercept", &[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(err, PosteriorError::RaggedChains("Intercept".into()));
}

#[test]
fn role_lookup_uses_mapping() {
    let post = Posterior::new(ParamRoles::new("alpha", "beta"))
        .with_param("alpha", array![[0.5, 0.5]])
        .unwrap()
        .with_param("beta", array![[2.0, 3.0]])
        .unwrap();
    assert_eq!(post.role_samples(ParamRole::Intercept).unwrap(), vec![0.5, 0.5]);
    assert_eq!(post.role_samples(ParamRole::Slope).unwrap(), vec![2.0, 3.0]);
}

#[test]
fn unexpected_naming_is_explicit() {
    // Default roles expect "Intercept" and "x".
    let post = Posterior::default()
        .with_param("Intercept", array![[1.0]])
        .unwrap()
        .with_param("slope", array![[1.0]])
        .unwrap();
    let err = post.role_samples(ParamRole::Slope).unwrap_err();
    assert_eq!(
        err,
        PosteriorError::UnexpectedParameterNaming {
            role: ParamRole::Slope,
            key: "x".into(),
            available: vec!["Intercept".into(), "slope".into()],
        }
    );
    assert!(err.to_string().contains("slope role"));
    assert!(matches!(post.flatten("nope"), Err(PosteriorError::UnknownParameter(_))));
}

use russell_lab::approx_eq;

/// Checks that two arrays are approximately equal (component-wise)
///
/// # Panics
///
/// A panic will occur if the lengths differ or any component differs by more than `tol`.
pub(crate) fn check_values(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len());
    for i in 0..a.len() {
        approx_eq(a[i], b[i], tol);
    }
}

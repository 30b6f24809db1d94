use super::Dual;
use crate::StrError;
use russell_lab::Matrix;

/// Computes the Jacobian of a vector function by forward-mode automatic differentiation
///
/// The function is evaluated once per input component, seeding the corresponding
/// infinitesimal part with one (jacfwd). The real part of the last evaluation is
/// left in `out`.
///
/// # Input
///
/// * `jac` -- (n_out, n_in) matrix to store `∂fᵢ/∂xⱼ`
/// * `out` -- buffer with n_out values (real and infinitesimal parts of the last evaluation)
/// * `x` -- the point (n_in) where the Jacobian is calculated
/// * `function` -- computes `out = f(x)`
pub fn jacobian<F>(jac: &mut Matrix, out: &mut [Dual], x: &[f64], mut function: F) -> Result<(), StrError>
where
    F: FnMut(&mut [Dual], &[Dual]) -> Result<(), StrError>,
{
    let n_in = x.len();
    let (nrow, ncol) = jac.dims();
    if nrow != out.len() || ncol != n_in {
        return Err("jacobian matrix has incompatible dimensions");
    }
    let mut seeded: Vec<Dual> = x.iter().map(|v| Dual::constant(*v)).collect();
    for j in 0..n_in {
        seeded[j].eps = 1.0;
        function(out, &seeded)?;
        seeded[j].eps = 0.0;
        for i in 0..nrow {
            jac.set(i, j, out[i].eps);
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

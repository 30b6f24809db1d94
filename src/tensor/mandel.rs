use crate::ad::Scalar;
use crate::base::{ONE_BY_3, SQRT_2, SQRT_3_BY_2};

/// Holds the Mandel components of the second-order identity tensor
///
/// Only the first `dim` components are used (4 in 2D and 6 in 3D).
pub const IDENTITY: [f64; 6] = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0];

/// Calculates the trace of a symmetric tensor given in Mandel representation
#[inline]
pub fn trace<T: Scalar>(a: &[T]) -> T {
    a[0] + a[1] + a[2]
}

/// Calculates the deviator `dev(a) = a - tr(a)/3 I`
pub fn deviator<T: Scalar>(dev: &mut [T], a: &[T]) {
    let m = trace(a) * T::cst(ONE_BY_3);
    for i in 0..a.len() {
        dev[i] = a[i] - m * T::cst(IDENTITY[i]);
    }
}

/// Calculates the double-dot product `a : b`
pub fn ddot<T: Scalar>(a: &[T], b: &[T]) -> T {
    a.iter().zip(b).fold(T::zero(), |acc, (x, y)| acc + *x * *y)
}

/// Calculates the Frobenius norm `‖a‖ = √(a : a)`
pub fn norm<T: Scalar>(a: &[T]) -> T {
    ddot(a, a).sqrt()
}

/// Calculates the von Mises invariant of the deviator `σd = √(3/2) ‖s‖`
pub fn von_mises<T: Scalar>(s: &[T]) -> T {
    norm(s) * T::cst(SQRT_3_BY_2)
}

/// Calculates the isotropic linear elastic stress `σ = K tr(ε) I + 2G dev(ε)`
pub fn isotropic_stress<T: Scalar>(sigma: &mut [T], bulk: f64, shear: f64, eps: &[T]) {
    let tr = trace(eps);
    let m = tr * T::cst(ONE_BY_3);
    for i in 0..eps.len() {
        let id = T::cst(IDENTITY[i]);
        sigma[i] = T::cst(bulk) * tr * id + T::cst(2.0 * shear) * (eps[i] - m * id);
    }
}

/// Calculates `sigma += K tr(ε) I + 2G dev(ε)`
pub fn isotropic_stress_update<T: Scalar>(sigma: &mut [T], bulk: f64, shear: f64, eps: &[T]) {
    let tr = trace(eps);
    let m = tr * T::cst(ONE_BY_3);
    for i in 0..eps.len() {
        let id = T::cst(IDENTITY[i]);
        sigma[i] = sigma[i] + T::cst(bulk) * tr * id + T::cst(2.0 * shear) * (eps[i] - m * id);
    }
}

/// Returns the (i,j) component of a symmetric tensor given its Mandel components
///
/// Works with 4 (2D) or 6 (3D) components; out-of-plane shear components are zero in 2D.
pub fn mandel_get(a: &[f64], i: usize, j: usize) -> f64 {
    match (i.min(j), i.max(j)) {
        (0, 0) => a[0],
        (1, 1) => a[1],
        (2, 2) => a[2],
        (0, 1) => a[3] / SQRT_2,
        (1, 2) => {
            if a.len() > 4 {
                a[4] / SQRT_2
            } else {
                0.0
            }
        }
        (0, 2) => {
            if a.len() > 5 {
                a[5] / SQRT_2
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ddot, deviator, isotropic_stress, isotropic_stress_update, mandel_get, norm, trace, von_mises};
    use crate::base::SQRT_2;
    use russell_lab::approx_eq;

    #[test]
    fn trace_and_deviator_work() {
        let a = [1.0, 2.0, 3.0, 4.0 * SQRT_2];
        assert_eq!(trace(&a), 6.0);
        let mut dev = [0.0; 4];
        deviator(&mut dev, &a);
        let correct = [-1.0, 0.0, 1.0, 4.0 * SQRT_2];
        for i in 0..4 {
            approx_eq(dev[i], correct[i], 1e-15);
        }
        approx_eq(trace(&dev), 0.0, 1e-15);
    }

    #[test]
    fn norms_work() {
        let s = [2.0, -1.0, -1.0, 0.0, 0.0, 0.0];
        assert_eq!(ddot(&s, &s), 6.0);
        approx_eq(norm(&s), f64::sqrt(6.0), 1e-15);
        approx_eq(von_mises(&s), 3.0, 1e-15); // uniaxial σ = 3 has s = (2,-1,-1)
    }

    #[test]
    fn isotropic_stress_works() {
        let (kk, gg) = (1000.0, 600.0);
        let eps = [0.001, 0.0, 0.0, 0.0];
        let mut sig = [0.0; 4];
        isotropic_stress(&mut sig, kk, gg, &eps);
        approx_eq(sig[0], (kk + 4.0 * gg / 3.0) * 0.001, 1e-13);
        approx_eq(sig[1], (kk - 2.0 * gg / 3.0) * 0.001, 1e-13);
        approx_eq(sig[2], sig[1], 1e-15);
        assert_eq!(sig[3], 0.0);
        isotropic_stress_update(&mut sig, kk, gg, &eps);
        approx_eq(sig[0], 2.0 * (kk + 4.0 * gg / 3.0) * 0.001, 1e-13);
    }

    #[test]
    fn mandel_get_works() {
        let a = [1.0, 2.0, 3.0, 4.0 * SQRT_2, 5.0 * SQRT_2, 6.0 * SQRT_2];
        assert_eq!(mandel_get(&a, 0, 0), 1.0);
        approx_eq(mandel_get(&a, 1, 0), 4.0, 1e-15);
        approx_eq(mandel_get(&a, 2, 1), 5.0, 1e-15);
        approx_eq(mandel_get(&a, 0, 2), 6.0, 1e-15);
        assert_eq!(mandel_get(&a[..4], 0, 2), 0.0);
    }
}

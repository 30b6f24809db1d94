use crate::ad::Scalar;
use crate::base::SQRT_2;
use crate::StrError;

/// Defines a 3×3 matrix with generic scalars
pub type Mat3<T> = [[T; 3]; 3];

/// Returns the 3×3 identity matrix
pub fn mat3_identity<T: Scalar>() -> Mat3<T> {
    let (o, z) = (T::one(), T::zero());
    [[o, z, z], [z, o, z], [z, z, o]]
}

/// Converts constant (f64) components into generic scalars
pub fn mat3_cast<T: Scalar>(a: &Mat3<f64>) -> Mat3<T> {
    let mut b = [[T::zero(); 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            b[i][j] = T::cst(a[i][j]);
        }
    }
    b
}

/// Reads a matrix from 9 row-major components
pub fn mat3_from_row_major<T: Scalar>(v: &[T]) -> Mat3<T> {
    [[v[0], v[1], v[2]], [v[3], v[4], v[5]], [v[6], v[7], v[8]]]
}

/// Writes a matrix into 9 row-major components
pub fn mat3_to_row_major<T: Scalar>(v: &mut [T], a: &Mat3<T>) {
    for i in 0..3 {
        for j in 0..3 {
            v[3 * i + j] = a[i][j];
        }
    }
}

/// Returns the symmetric matrix corresponding to 6 Mandel components
pub fn mat3_from_mandel<T: Scalar>(v: &[T]) -> Mat3<T> {
    let r = T::cst(1.0 / SQRT_2);
    let (xy, yz, xz) = (v[3] * r, v[4] * r, v[5] * r);
    [[v[0], xy, xz], [xy, v[1], yz], [xz, yz, v[2]]]
}

/// Writes the 6 Mandel components of the symmetric part of a matrix
pub fn mat3_to_mandel<T: Scalar>(v: &mut [T], a: &Mat3<T>) {
    let h = T::cst(SQRT_2 / 2.0);
    v[0] = a[0][0];
    v[1] = a[1][1];
    v[2] = a[2][2];
    v[3] = (a[0][1] + a[1][0]) * h;
    v[4] = (a[1][2] + a[2][1]) * h;
    v[5] = (a[0][2] + a[2][0]) * h;
}

/// Calculates the trace
pub fn mat3_trace<T: Scalar>(a: &Mat3<T>) -> T {
    a[0][0] + a[1][1] + a[2][2]
}

/// Calculates the determinant
pub fn mat3_det<T: Scalar>(a: &Mat3<T>) -> T {
    a[0][0] * (a[1][1] * a[2][2] - a[1][2] * a[2][1]) - a[0][1] * (a[1][0] * a[2][2] - a[1][2] * a[2][0])
        + a[0][2] * (a[1][0] * a[2][1] - a[1][1] * a[2][0])
}

/// Returns the transpose
pub fn mat3_transpose<T: Scalar>(a: &Mat3<T>) -> Mat3<T> {
    let mut b = *a;
    for i in 0..3 {
        for j in 0..3 {
            b[i][j] = a[j][i];
        }
    }
    b
}

/// Calculates the product `a · b`
pub fn mat3_mul<T: Scalar>(a: &Mat3<T>, b: &Mat3<T>) -> Mat3<T> {
    let mut c = [[T::zero(); 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                c[i][j] = c[i][j] + a[i][k] * b[k][j];
            }
        }
    }
    c
}

/// Calculates `α a`
pub fn mat3_scale<T: Scalar>(alpha: T, a: &Mat3<T>) -> Mat3<T> {
    let mut b = *a;
    b.iter_mut().flatten().for_each(|v| *v = alpha * *v);
    b
}

/// Calculates the inverse and returns it with the determinant
///
/// Returns an error if the determinant is (nearly) zero relative to the cube of the largest entry.
pub fn mat3_inverse<T: Scalar>(a: &Mat3<T>) -> Result<(Mat3<T>, T), StrError> {
    let det = mat3_det(a);
    let scale = a.iter().flatten().fold(0.0, |acc, v| f64::max(acc, f64::abs(v.re())));
    if f64::abs(det.re()) <= 1e-15 * scale * scale * scale {
        return Err("cannot compute the inverse of a singular 3×3 matrix");
    }
    let r = T::one() / det;
    let inv = [
        [
            (a[1][1] * a[2][2] - a[1][2] * a[2][1]) * r,
            (a[0][2] * a[2][1] - a[0][1] * a[2][2]) * r,
            (a[0][1] * a[1][2] - a[0][2] * a[1][1]) * r,
        ],
        [
            (a[1][2] * a[2][0] - a[1][0] * a[2][2]) * r,
            (a[0][0] * a[2][2] - a[0][2] * a[2][0]) * r,
            (a[0][2] * a[1][0] - a[0][0] * a[1][2]) * r,
        ],
        [
            (a[1][0] * a[2][1] - a[1][1] * a[2][0]) * r,
            (a[0][1] * a[2][0] - a[0][0] * a[2][1]) * r,
            (a[0][0] * a[1][1] - a[0][1] * a[1][0]) * r,
        ],
    ];
    Ok((inv, det))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

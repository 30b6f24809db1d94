use cmlaws::material::{FiniteStrainJ2, LinearViscoelastic, VonMises};
use cmlaws::tensor::{mat3_from_mandel, mat3_mul, mat3_transpose, Mat3};
use cmlaws::{prelude::*, StrError};
use russell_lab::{approx_eq, Vector};

// Material point simulations driven by JSON files
//
// TEST GOAL
//
// Verifies the pipeline used by the material_point binary: reading the
// parameters, following a path, and writing the results. Also checks a few
// closed-form responses along the way.

#[test]
fn test_von_mises_plane_strain_matches_3d() -> Result<(), StrError> {
    let param = ParamMaterial::read_json("data/materials/von_mises_plane_strain.json")?;
    let model_2d = StressStrainModel::from_param(&param)?;
    let model_3d = StressStrainModel::new(&Idealization::new(3), &param.stress_strain, &param.settings)?;

    let mut path_2d = StrainPath::new(true);
    let mut path_3d = StrainPath::new(false);
    for i in 1..=8 {
        let a = i as f64;
        path_2d.push(Vector::from(&[-0.001 * a, 0.0005 * a, 0.0, 0.0012 * a]), a)?;
        path_3d.push(Vector::from(&[-0.001 * a, 0.0005 * a, 0.0, 0.0012 * a, 0.0, 0.0]), a)?;
    }
    let states_2d = path_2d.follow(model_2d.actual.as_ref(), false)?;
    let states_3d = path_3d.follow(model_3d.actual.as_ref(), false)?;
    assert_eq!(states_2d.len(), 9);
    for (s2, s3) in states_2d.iter().zip(&states_3d) {
        for i in 0..4 {
            approx_eq(s2.flux[i], s3.flux[i], 1e-12);
        }
        approx_eq(s3.flux[4], 0.0, 1e-15);
        approx_eq(s3.flux[5], 0.0, 1e-15);
        approx_eq(s2.internal_values[0], s3.internal_values[0], 1e-15);
        assert_eq!(s2.loading, s3.loading);
    }
    assert!(!states_2d[1].loading);
    assert!(states_2d[8].loading);

    // the stress stays on the yield surface during loading
    let model = VonMises::new(
        &param.ideal,
        1500.0,
        0.25,
        9.0,
        ParamHardening::Linear { hh: 800.0 },
        &param.settings,
    )?;
    for state in &states_2d {
        if state.loading {
            approx_eq(model.yield_function(state), 0.0, 1e-10);
        } else {
            assert!(model.yield_function(state) < 0.0);
        }
    }
    Ok(())
}

#[test]
fn test_neo_hookean_uniaxial_stretch() -> Result<(), StrError> {
    let param = ParamMaterial::read_json("data/materials/neo_hookean.json")?;
    let model = StressStrainModel::from_param(&param)?;
    let path = StrainPath::new_uniaxial_stretch(4, 1.8, false, 1.0);
    let states = path.follow(model.actual.as_ref(), false)?;

    // F = diag(λ, 1, 1) → P₁₁ = μ (λ - 1/λ) + Λ ln(λ)/λ and P₂₂ = P₃₃ = Λ ln(λ)
    let (young, poisson) = (1500.0, 0.3);
    let mu = young / (2.0 * (1.0 + poisson));
    let lambda = young * poisson / ((1.0 + poisson) * (1.0 - 2.0 * poisson));
    for state in &states[1..] {
        let l = state.gradient[0];
        approx_eq(state.flux[0], mu * (l - 1.0 / l) + lambda * f64::ln(l) / l, 1e-10);
        approx_eq(state.flux[4], lambda * f64::ln(l), 1e-10);
        approx_eq(state.flux[8], lambda * f64::ln(l), 1e-10);
        for i in [1, 2, 3, 5, 6, 7] {
            approx_eq(state.flux[i], 0.0, 1e-14);
        }
    }
    Ok(())
}

#[test]
fn test_viscoelastic_stress_relaxation() -> Result<(), StrError> {
    let param = ParamMaterial::read_json("data/materials/zener.json")?;
    let model = StressStrainModel::from_param(&param)?;

    // fast loading followed by a long hold
    let eps = 0.01;
    let mut path = StrainPath::new(false);
    path.push(Vector::from(&[eps, 0.0, 0.0, 0.0, 0.0, 0.0]), 1e-8)?;
    for i in 1..=40 {
        path.push(Vector::from(&[eps, 0.0, 0.0, 0.0, 0.0, 0.0]), 0.5 * (i as f64))?;
    }
    let states = path.follow(model.actual.as_ref(), false)?;
    let results = PathResults::new(param.stress_strain.name(), &path, states);
    assert_eq!(results.times.len(), results.states.len());

    // σxx(t) = M(t) ε with M the constrained modulus built from E(t)
    let branches = [ParamMaxwellBranch {
        young: 50.0,
        viscosity: 100.0,
    }];
    let zener = LinearViscoelastic::new(&param.ideal, 100.0, 0.3, &branches)?;
    let factor = (1.0 - 0.3) / ((1.0 + 0.3) * (1.0 - 0.6));
    for (t, state) in results.times.iter().zip(&results.states).skip(2) {
        let correct = factor * zener.relaxation_young(*t) * eps;
        approx_eq(state.flux[0], correct, 1e-6);
    }

    // the stress decreases monotonically during the hold
    for k in 2..results.states.len() {
        assert!(results.states[k].flux[0] < results.states[k - 1].flux[0]);
    }
    Ok(())
}

#[test]
fn test_finite_strain_j2_isochoric_plastic_flow() -> Result<(), StrError> {
    let settings = Settings::new();
    let model = FiniteStrainJ2::new(1500.0, 0.3, 9.0, ParamHardening::Linear { hh: 0.0 }, &settings)?;
    let path = StrainPath::new_uniaxial_stretch(20, 1.5, true, 1.0);
    let states = path.follow(&model, false)?;
    let schema = model.schema();
    let mut p_old = 0.0;
    for state in &states[1..] {
        // perfect plasticity: the von Mises Kirchhoff stress equals z0
        assert!(state.loading);
        approx_eq(model.yield_function(state), 0.0, 1e-9);
        let p = state.internal(&schema, "p")?[0];
        assert!(p > p_old);
        p_old = p;

        // b̄e stays coaxial with the stretch: diagonal with equal transverse components
        let be = state.internal(&schema, "be_bar")?;
        assert!(be[0] > 1.0);
        approx_eq(be[1], be[2], 1e-14);
        for i in 3..6 {
            approx_eq(be[i], 0.0, 1e-15);
        }
    }
    Ok(())
}

#[test]
fn test_finite_strain_j2_is_objective() -> Result<(), StrError> {
    let settings = Settings::new();
    let model = FiniteStrainJ2::new(1500.0, 0.3, 9.0, ParamHardening::Linear { hh: 200.0 }, &settings)?;
    let gradients = [
        [1.05, 0.08, 0.01, 0.02, 0.97, 0.03, 0.0, -0.04, 1.01],
        [1.12, 0.15, 0.02, 0.04, 0.93, 0.05, -0.01, -0.08, 1.03],
    ];

    // R = Rz(0.3) · Rx(-0.7)
    let (cz, sz) = (f64::cos(0.3), f64::sin(0.3));
    let (cx, sx) = (f64::cos(-0.7), f64::sin(-0.7));
    let rz: Mat3<f64> = [[cz, -sz, 0.0], [sz, cz, 0.0], [0.0, 0.0, 1.0]];
    let rx: Mat3<f64> = [[1.0, 0.0, 0.0], [0.0, cx, -sx], [0.0, sx, cx]];
    let rr = mat3_mul(&rz, &rx);

    // rotated gradients R·F (row-major)
    let mut path = StrainPath::new(false);
    let mut path_rot = StrainPath::new(false);
    for (k, ff) in gradients.iter().enumerate() {
        let mut ff_rot = Vector::new(9);
        for i in 0..3 {
            for j in 0..3 {
                for m in 0..3 {
                    ff_rot[i * 3 + j] += rr[i][m] * ff[m * 3 + j];
                }
            }
        }
        path.push(Vector::from(ff), (k + 1) as f64)?;
        path_rot.push(ff_rot, (k + 1) as f64)?;
    }
    let states = path.follow(&model, false)?;
    let states_rot = path_rot.follow(&model, false)?;

    let schema = model.schema();
    for (state, state_rot) in states.iter().zip(&states_rot).skip(1) {
        assert!(state.loading);
        assert_eq!(state.loading, state_rot.loading);

        // P' = R·P
        for i in 0..3 {
            for j in 0..3 {
                let mut correct = 0.0;
                for m in 0..3 {
                    correct += rr[i][m] * state.flux[m * 3 + j];
                }
                approx_eq(state_rot.flux[i * 3 + j], correct, 1e-10);
            }
        }

        // same accumulated plastic strain
        let p = state.internal(&schema, "p")?[0];
        let p_rot = state_rot.internal(&schema, "p")?[0];
        approx_eq(p_rot, p, 1e-14);

        // b̄e' = R·b̄e·Rᵀ
        let be = mat3_from_mandel(state.internal(&schema, "be_bar")?);
        let be_rot = mat3_from_mandel(state_rot.internal(&schema, "be_bar")?);
        let correct = mat3_mul(&mat3_mul(&rr, &be), &mat3_transpose(&rr));
        for i in 0..3 {
            for j in 0..3 {
                approx_eq(be_rot[i][j], correct[i][j], 1e-13);
            }
        }
    }
    Ok(())
}

#[test]
fn test_path_and_results_json_files() -> Result<(), StrError> {
    let param = ParamMaterial::read_json("data/materials/von_mises_plane_strain.json")?;
    let model = StressStrainModel::from_param(&param)?;
    let path = StrainPath::new_linear_oct(true, 6, 0.0, 0.0, 0.0, 0.002, 0.0)?;
    let path_file = format!("{}/test_material_point_path.json", DEFAULT_TEST_DIR);
    path.write_json(&path_file)?;

    let read = StrainPath::read_json(&path_file)?;
    assert_eq!(read.gradients.len(), 6);
    assert_eq!(read.times, path.times);
    let states = read.follow(model.actual.as_ref(), false)?;

    let results_file = format!("{}/test_material_point_results.json", DEFAULT_TEST_DIR);
    let results = PathResults::new(param.stress_strain.name(), &read, states);
    results.write_json(&results_file)?;
    let contents = std::fs::read_to_string(&results_file).map_err(|_| "cannot read file")?;
    let loaded: PathResults = serde_json::from_str(&contents).map_err(|_| "cannot parse JSON file")?;
    assert_eq!(loaded.model_name, "VonMises");
    assert_eq!(loaded.states.len(), 7);
    approx_eq(loaded.states[6].flux[0], results.states[6].flux[0], 1e-15);
    Ok(())
}

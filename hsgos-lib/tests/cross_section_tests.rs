mod common;

use std::f64::consts::PI;

use approx::assert_relative_eq;
use hsgos::constants::{BOHR_RADIUS_M, RYDBERG_EV};
use hsgos::{
    EdgeOnsets, GosError, GosTable, IntegrationOptions, Kinematics, QRangePolicy, integrate,
    integrate_with,
};
use tempfile::TempDir;

use common::{ENERGY_COUNT, lorentzian, write_gos_file};

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_gos_file(dir.path(), "Fe.L3", lorentzian);
    write_gos_file(dir.path(), "C.K1", |_, _| 2.0);
    dir
}

fn fe_l3(dir: &TempDir) -> GosTable {
    GosTable::load("Fe", "L3", dir.path(), EdgeOnsets::builtin()).unwrap()
}

/// 3 energies, 4 q points (inverse Bohr radius), GOS = 1.
fn small_table() -> GosTable {
    GosTable::new(
        "Ti",
        "K",
        100.0,
        vec![0.0, 10.0, 20.0],
        vec![1.0, 2.0, 3.0, 4.0],
        vec![1.0; 12],
    )
    .unwrap()
}

fn options(policy: QRangePolicy) -> IntegrationOptions {
    IntegrationOptions {
        q_range_policy: policy,
        ..IntegrationOptions::default()
    }
}

fn barn_scale(energy: f64, beam_energy: f64) -> f64 {
    4.0 * PI * BOHR_RADIUS_M.powi(2) * RYDBERG_EV.powi(2) / energy
        / Kinematics::new(beam_energy).t
        * 1e28
}

#[test]
fn test_small_table_with_extrapolation() {
    let table = small_table();
    let xs = integrate_with(&table, &options(QRangePolicy::Extrapolate), 190.0, 0.01, 100.0)
        .unwrap();

    assert_eq!(xs.energy_shift(), 90.0);
    assert_eq!(xs.shifted_energy_axis(), &[190.0, 200.0, 210.0]);
    assert_eq!(xs.qint().len(), 3);
    for &value in xs.qint() {
        assert!(value.is_finite() && value >= 0.0, "qint = {value}");
    }
    assert_relative_eq!(xs.eval(200.0).unwrap(), xs.qint()[1], max_relative = 1e-6);

    // Constant GOS: the q integral is the length of the log(q^2) interval.
    let kinematics = Kinematics::new(100.0);
    for (i, &energy) in xs.shifted_energy_axis().iter().enumerate() {
        let bounds = kinematics.q_bounds(energy, 0.01);
        let expected = (bounds.qa0sq_max / bounds.qa0sq_min).ln() * barn_scale(energy, 100.0);
        assert_relative_eq!(xs.qint()[i], expected, max_relative = 1e-9);
    }
}

#[test]
fn test_small_table_strict_range() {
    // The kinematic q range at these energies lies below the first q point.
    assert!(matches!(
        integrate(&small_table(), 190.0, 0.01, 100.0),
        Err(GosError::QOutOfRange { qmax, min, .. }) if qmax < min
    ));
}

#[test]
fn test_small_table_clamped_range() {
    let xs = integrate_with(&small_table(), &options(QRangePolicy::Clamp), 190.0, 0.01, 100.0)
        .unwrap();
    assert!(xs.qint().iter().all(|&v| v == 0.0));
}

#[test]
fn test_constant_gos_matches_closed_form() {
    let dir = data_dir();
    let table = GosTable::load("C", "K", dir.path(), EdgeOnsets::builtin()).unwrap();
    let (beam_energy, angle) = (200.0, 0.02);
    let xs = integrate(&table, 284.0, angle, beam_energy).unwrap();

    let kinematics = Kinematics::new(beam_energy);
    for (i, &energy) in table.energy_axis().iter().enumerate() {
        let bounds = kinematics.q_bounds(energy, angle);
        let q_integral = 2.0 / RYDBERG_EV * (bounds.qa0sq_max / bounds.qa0sq_min).ln();
        assert_relative_eq!(
            xs.qint()[i],
            q_integral * barn_scale(energy, beam_energy),
            max_relative = 1e-6
        );
    }
}

#[test]
fn test_unshifted_onset() {
    let dir = data_dir();
    let table = fe_l3(&dir);
    let xs = integrate(&table, table.onset_energy(), 0.05, 200.0).unwrap();
    assert_eq!(xs.energy_shift(), 0.0);
    assert_eq!(xs.shifted_energy_axis(), table.energy_axis().as_slice());
}

#[test]
fn test_fe_l3_cross_section_is_positive() {
    let dir = data_dir();
    let xs = integrate(&fe_l3(&dir), 708.0, 0.05, 200.0).unwrap();
    assert_eq!(xs.qint().len(), ENERGY_COUNT);
    assert!(xs.qint().iter().all(|v| v.is_finite() && *v > 0.0));

    let (min, max) = xs.energy_range();
    let midpoint = xs.eval(0.5 * (min + max)).unwrap();
    assert!(midpoint.is_finite() && midpoint > 0.0);
    assert!(matches!(
        xs.eval(max + 1.0),
        Err(GosError::EnergyOutOfRange { .. })
    ));
}

#[test]
fn test_cross_section_grows_with_angle() {
    let dir = data_dir();
    let table = fe_l3(&dir);
    let angles = [0.0, 0.001, 0.005, 0.01, 0.05, 0.1];
    let curves: Vec<Vec<f64>> = angles
        .iter()
        .map(|&angle| integrate(&table, 708.0, angle, 200.0).unwrap().qint().to_vec())
        .collect();

    assert!(curves[0].iter().all(|&v| v == 0.0));
    for pair in curves.windows(2) {
        for (narrow, wide) in pair[0].iter().zip(&pair[1]) {
            assert!(wide >= narrow, "{wide} < {narrow}");
        }
    }
}

#[test]
fn test_combined_edge_is_scaled() {
    let dir = data_dir();
    let onsets = EdgeOnsets::builtin();
    let l3 = GosTable::load("Fe", "L3", dir.path(), &onsets).unwrap();
    let l23 = GosTable::load("Fe", "L2,3", dir.path(), &onsets).unwrap();
    let xs_l3 = integrate(&l3, 708.0, 0.02, 300.0).unwrap();
    let xs_l23 = integrate(&l23, 708.0, 0.02, 300.0).unwrap();
    for (a, b) in xs_l3.qint().iter().zip(xs_l23.qint()) {
        assert_relative_eq!(*b, 1.5 * a, max_relative = 1e-12);
    }
}

#[test]
fn test_serial_and_parallel_agree() {
    let dir = data_dir();
    let table = fe_l3(&dir);
    let parallel = integrate(&table, 710.0, 0.03, 120.0).unwrap();
    let serial = integrate_with(
        &table,
        &IntegrationOptions {
            parallel: false,
            ..IntegrationOptions::default()
        },
        710.0,
        0.03,
        120.0,
    )
    .unwrap();
    assert_eq!(parallel, serial);
}

#[test]
fn test_forbidden_energy_loss_propagates_nan() {
    // A 100 eV beam cannot lose 150 eV.
    let table = small_table();
    let xs = integrate(&table, 150.0, 0.01, 0.1).unwrap();
    assert!(xs.qint().iter().all(|v| v.is_nan()));
    assert!(xs.eval(160.0).unwrap().is_nan());
}

/// Rydberg constant times hc (eV), CODATA 2018
pub const RYDBERG_EV: f64 = 13.605693122994;

/// Bohr radius (m), CODATA 2018
pub const BOHR_RADIUS_M: f64 = 5.29177210903e-11;

/// Electron rest energy (keV) used by the GOS kinematics
pub const ELECTRON_REST_KEV: f64 = 511.06;

/// Electron rest energy (eV), same value as [`ELECTRON_REST_KEV`]
pub const ELECTRON_REST_EV: f64 = 511_060.0;

/// Twice the electron rest energy (eV)
pub const TWICE_ELECTRON_REST_EV: f64 = 1_022_120.0;

/// Inverse Ångström to inverse metre
pub const PER_ANGSTROM_TO_PER_M: f64 = 1e10;

/// m² to barn
pub const M2_TO_BARN: f64 = 1e28;

//! Relativistic limits of the momentum-transfer integral.

use crate::constants::{ELECTRON_REST_EV, ELECTRON_REST_KEV, RYDBERG_EV, TWICE_ELECTRON_REST_EV};

/// Incident-beam quantities shared by every energy loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// Lorentz factor of the incident electron.
    pub gamma: f64,
    /// `m v² / 2` of the incident electron (eV).
    pub t: f64,
}

/// Squared momentum-transfer bounds, `(q a0)²`, for one energy loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QBounds {
    pub qa0sq_min: f64,
    pub qa0sq_max: f64,
}

impl QBounds {
    /// Lower bound in inverse Bohr radius.
    pub fn qmin(&self) -> f64 {
        self.qa0sq_min.sqrt()
    }

    /// Upper bound in inverse Bohr radius. NaN when the energy loss is not
    /// reachable with the given beam energy.
    pub fn qmax(&self) -> f64 {
        self.qa0sq_max.sqrt()
    }
}

impl Kinematics {
    pub fn new(beam_energy_kev: f64) -> Self {
        let gamma = 1.0 + beam_energy_kev / ELECTRON_REST_KEV;
        let t = ELECTRON_REST_EV * (1.0 - 1.0 / (gamma * gamma)) / 2.0;
        Self { gamma, t }
    }

    /// `p0²` of the incident electron in units of `1 / a0²`.
    pub fn p0_squared(&self) -> f64 {
        self.t / (RYDBERG_EV * (1.0 - 2.0 * self.t / ELECTRON_REST_EV))
    }

    /// Momentum of the scattered electron squared. Negative when the energy
    /// loss exceeds what the beam can transfer.
    pub fn pp_squared(&self, energy_loss: f64) -> f64 {
        self.p0_squared()
            - energy_loss / RYDBERG_EV * (self.gamma - energy_loss / TWICE_ELECTRON_REST_EV)
    }

    /// Bounds of `(q a0)²` for `energy_loss` (eV) inside a collection
    /// half-angle `angle` (rad).
    pub fn q_bounds(&self, energy_loss: f64, angle: f64) -> QBounds {
        let (gamma, t, e) = (self.gamma, self.t, energy_loss);
        let qa0sq_min = e * e / (4.0 * RYDBERG_EV * t)
            + e.powi(3) / (8.0 * gamma.powi(3) * RYDBERG_EV * t * t);
        let half_sin = (angle / 2.0).sin();
        let qa0sq_max =
            qa0sq_min + 4.0 * (self.p0_squared() * self.pp_squared(e)).sqrt() * half_sin * half_sin;
        QBounds {
            qa0sq_min,
            qa0sq_max,
        }
    }
}

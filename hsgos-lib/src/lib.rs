pub mod axis;
pub mod config;
pub mod constants;
pub mod conventions;
pub mod cross_section;
pub mod error;
pub mod interp;
pub mod kinematics;
pub mod onsets;
pub mod parser;
pub mod simpson;
pub mod spline;
pub mod table;

pub use config::GosConfig;
pub use conventions::{Convention, SubshellFactor, resolve};
pub use cross_section::{CrossSection, IntegrationOptions, QRangePolicy, integrate, integrate_with};
pub use error::{GosError, Result};
pub use kinematics::{Kinematics, QBounds};
pub use onsets::{EdgeOnsets, OnsetEnergies};
pub use spline::CubicSpline;
pub use table::GosTable;
pub use hsgos_data;

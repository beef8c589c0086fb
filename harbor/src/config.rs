use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use hull::{FluidModel, HullGeometry, SimulationSettings};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hull: HullGeometry,
    /// Water the hull floats in. Also used to build the resistance tables.
    pub fluid: FluidModel,
    pub simulation: SimulationSettings,
    pub body: BodyConfig,
}

/// Mass properties and initial state of the floating body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// kg; the displacement at design draught when absent.
    pub mass: Option<f32>,
    /// Height of the centre of gravity above the baseline, m; half the
    /// design draught when absent.
    pub center_of_gravity: Option<f32>,
    /// World-space Y of the sea surface.
    pub sea_level: f32,
    /// Offset above the equilibrium draught at start, m.
    pub drop_height: f32,
    /// Initial roll, degrees; positive lifts starboard.
    pub heel_deg: f32,
    /// Initial world velocity, m/s.
    pub velocity: [f32; 3],
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            mass: None,
            center_of_gravity: None,
            sea_level: 0.0,
            drop_height: 0.0,
            heel_deg: 0.0,
            velocity: [0.0; 3],
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(text)?;
    cfg.hull.validate().context("invalid hull geometry")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.hull.length, 120.0);
    }

    #[test]
    fn body_section_overrides_only_what_it_names() {
        let cfg = parse_config("[body]\nmass = 5.0e6\nheel_deg = 3.0\n").unwrap();
        assert_eq!(cfg.body.mass, Some(5.0e6));
        assert_eq!(cfg.body.heel_deg, 3.0);
        assert_eq!(cfg.body.sea_level, 0.0);
    }

    #[test]
    fn bad_curve_is_reported() {
        let text = r#"
[hull]
length = 20.0
beam = 6.0
depth = 3.0
design_draught = 1.5
length_steps = 8
beam_steps = 4
curve_profiling_steps = 16

[hull.curves]
keel = [[0.0, 1.0], [0.0, 1.0]]
half_breadth = [[0.0, 1.0], [1.0, 1.0]]
body = [[0.0, 1.0], [1.0, 1.0]]
"#;
        let err = parse_config(text).unwrap_err();
        assert!(format!("{err:#}").contains("strictly increasing"), "{err:#}");
    }
}

//! Host for the `hull` crate: loads a TOML hull description, prints its
//! hydrostatic and resistance report, then floats it in calm water with a
//! minimal rigid-body integrator.

use anyhow::{Context, Result};
use tracing::info;

use hull::{
    HullSimulation, HullStepDebug, OceanState, Quatf, ResistanceComponents, ResistanceEstimator,
    Vec3f,
};

mod args;
pub use args::Args;

mod body;
pub use body::FloatingBody;

mod config;
pub use config::{load_config, parse_config, BodyConfig, Config};

/// Outcome of a [`run`], for callers that want more than the log.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub mass: f32,
    /// Draught at which the hull displaces `mass`, m.
    pub equilibrium_draught: f32,
    /// `(speed, components)` for every requested report speed.
    pub resistance: Vec<(f32, ResistanceComponents)>,
    pub body: FloatingBody,
    pub last_step: HullStepDebug,
}

pub fn run(cfg: &Config, args: &Args) -> Result<RunReport> {
    let mut settings = cfg.simulation.clone();
    settings.fluid = cfg.fluid;
    let gravity = Vec3f::new(0.0, -settings.gravity, 0.0);

    let mut sim = HullSimulation::new(cfg.hull.clone(), settings.clone()).context("building hull tables")?;
    let geometry = sim.geometry().clone();
    let design = *sim.design_dimension();
    info!(
        cb = design.cb(),
        cp = design.cp(),
        cm = design.cm(),
        cwp = design.cwp(),
        lwl = design.l,
        wetted_surface = design.s,
        displacement = design.v,
        "hull profiled"
    );

    let mass = cfg.body.mass.unwrap_or(cfg.fluid.density * design.v);
    let equilibrium_draught = sim.profile().draught_for_volume(mass / cfg.fluid.density);
    info!(mass, equilibrium_draught, "equilibrium");

    let estimator = ResistanceEstimator::new(settings.fluid, settings.gravity)
        .with_appendages(settings.form.appendages.clone())
        .with_correlation(settings.correlation());
    let mut resistance = Vec::with_capacity(args.report_speeds.len());
    for &speed in &args.report_speeds {
        let r = estimator.estimate(&design, speed);
        info!(
            speed,
            rf = r.rf,
            k1 = r.k1,
            rw = r.rw,
            rb = r.rb,
            rapp = r.rapp,
            ra = r.ra,
            total = r.total(),
            "resistance"
        );
        resistance.push((speed, r));
    }

    let cog = cfg.body.center_of_gravity.unwrap_or(0.5 * geometry.design_draught);
    let inertia = FloatingBody::box_inertia(mass, geometry.length, geometry.beam, geometry.depth);
    let mut body = FloatingBody::new(mass, inertia, Vec3f::new(0.0, cog, 0.0));
    body.position.y = cfg.body.sea_level - equilibrium_draught + cfg.body.drop_height;
    body.rotation = Quatf::from_rotation_z(cfg.body.heel_deg.to_radians());
    body.velocity = Vec3f::from_array(cfg.body.velocity);

    let ocean = OceanState { fluid: cfg.fluid, sea_level: cfg.body.sea_level };
    let mut last_step = HullStepDebug::default();
    for _ in 0..args.ticks {
        sim.step_dbg(&mut body, &ocean, gravity, Some(&mut last_step));
        body.integrate(args.dt, gravity);
    }

    info!(
        ticks = args.ticks,
        draught = cfg.body.sea_level - body.position.y,
        heel_deg = body.heel().to_degrees(),
        speed = body.velocity.length(),
        wet_blocks = last_step.wet_blocks,
        "simulation finished"
    );

    Ok(RunReport { mass, equilibrium_draught, resistance, body, last_step })
}

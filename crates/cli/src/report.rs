//! Plain-text result reports.

use std::io::{self, Write};

use hydrocalc_fluids::{
    hydrostatic::HydrostaticForce,
    pipe::{FlowRegime, FrictionMethod, PipeFlowReport},
    tank::{LinearOutcome, LinearSloshing, RotatingSurface},
};
use uom::si::{
    acceleration::meter_per_second_squared,
    angle::degree,
    angular_velocity::radian_per_second,
    f64::AngularVelocity,
    force::{kilonewton, newton},
    length::meter,
    power::{kilowatt, watt},
    pressure::kilopascal,
    velocity::meter_per_second,
};

const RULE: &str = "----------------------------------";

pub fn hydrostatic(out: &mut impl Write, result: &HydrostaticForce) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(
        out,
        "Centroid Depth:    {:.3} m",
        result.centroid_depth.get::<meter>()
    )?;
    writeln!(
        out,
        "Hydrostatic Force: {:.2} N ({:.3} kN)",
        result.force.get::<newton>(),
        result.force.get::<kilonewton>()
    )?;
    writeln!(out, "{RULE}")
}

pub fn pipe_flow(out: &mut impl Write, report: &PipeFlowReport) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "Reynolds Number: {:.2}", report.reynolds)?;
    writeln!(
        out,
        "Velocity:        {:.3} m/s",
        report.velocity.get::<meter_per_second>()
    )?;

    let friction = &report.friction;
    match friction.regime {
        FlowRegime::Transitional => {
            writeln!(out, "Flow Regime: {} (Using Colebrook)", friction.regime)?;
        }
        FlowRegime::Laminar | FlowRegime::Turbulent => {
            writeln!(out, "Flow Regime: {}", friction.regime)?;
        }
    }

    writeln!(out, "{RULE}")?;
    writeln!(out, "Friction Factor (f): {:.5}", friction.value)?;
    if let FrictionMethod::Colebrook { iters, .. } = friction.method {
        writeln!(out, "Solver Iterations:   {iters}")?;
    }
    if friction.is_reduced_precision() {
        writeln!(
            out,
            "Warning: friction factor did not reach the solver tolerance; \
             results have reduced precision."
        )?;
    }
    writeln!(
        out,
        "Pressure Drop:       {:.2} kPa",
        report.pressure_drop.get::<kilopascal>()
    )?;
    writeln!(
        out,
        "Head Loss:           {:.3} m",
        report.head_loss.get::<meter>()
    )?;
    writeln!(
        out,
        "Power Required:      {:.2} W ({:.2} kW)",
        report.pumping_power.get::<watt>(),
        report.pumping_power.get::<kilowatt>()
    )?;
    writeln!(
        out,
        "Elevation Change:    {:.3} m",
        report.elevation_head.get::<meter>()
    )?;
    writeln!(out, "{RULE}")
}

pub fn linear(out: &mut impl Write, result: &LinearSloshing) -> io::Result<()> {
    writeln!(out, "\n--- Results ---")?;
    writeln!(
        out,
        "Surface Angle: {:.2} degrees",
        result.surface_angle.get::<degree>()
    )?;
    writeln!(out, "Fluid Rise (dz): {:.2} m", result.rise.get::<meter>())?;
    writeln!(
        out,
        "Max Ax before spill: {:.2} m/s^2",
        result
            .max_horizontal_acceleration
            .get::<meter_per_second_squared>()
    )?;

    match result.outcome {
        LinearOutcome::Contained { bottom_pressure } => {
            writeln!(out, "Status: [SAFE] No overflow detected.")?;
            writeln!(
                out,
                "Est. Static Pressure at bottom: {:.2} kPa",
                bottom_pressure.get::<kilopascal>()
            )
        }
        LinearOutcome::Overflow { rim_distance } => {
            writeln!(out, "Status: [WARNING] FLUID OVERFLOW!")?;
            writeln!(
                out,
                "Surface meets the rim {:.2} m from the tank center.",
                rim_distance.get::<meter>()
            )
        }
    }
}

pub fn rotational(
    out: &mut impl Write,
    speed: AngularVelocity,
    surface: &RotatingSurface,
) -> io::Result<()> {
    writeln!(out, "\n--- Results ---")?;
    writeln!(
        out,
        "Angular Velocity: {:.2} rad/s",
        speed.get::<radian_per_second>()
    )?;
    writeln!(
        out,
        "Max Fluid Height (at wall): {:.2} m",
        surface.max_height.get::<meter>()
    )?;
    writeln!(
        out,
        "Min Fluid Height (at center): {:.2} m",
        surface.min_height.get::<meter>()
    )?;

    if surface.spills {
        writeln!(out, "Status: [WARNING] FLUID OVERFLOW (Spill over rim)")?;
    } else {
        writeln!(out, "Status: [SAFE] No overflow.")?;
    }

    if let Some(radius) = surface.dry_spot_radius {
        writeln!(out, "Status: [WARNING] DRY SPOT (Vortex touches bottom)")?;
        writeln!(out, "Dry Spot Radius: {:.2} m", radius.get::<meter>())?;
    }
    Ok(())
}

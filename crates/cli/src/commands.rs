//! Subcommand runners: resolve inputs, run a calculation, print its report.

use std::io::{BufRead, Write};

use hydrocalc_fluids::{
    hydrostatic::{Orientation, SubmergedPlate},
    pipe::PipeFlow,
    tank::{LinearAcceleration, RigidRotation},
};
use hydrocalc_solvers::equation::bisection::Config;
use tracing::{debug, info};
use uom::si::{
    acceleration::meter_per_second_squared,
    angle::degree,
    angular_velocity::revolution_per_minute,
    dynamic_viscosity::pascal_second,
    f64::{
        Acceleration, Angle, AngularVelocity, DynamicViscosity, Length, MassDensity, VolumeRate,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    volume_rate::cubic_meter_per_second,
};

use crate::{
    args::{HydrostaticArgs, LinearArgs, OrientationChoice, PipeFlowArgs, RotationalArgs},
    error::CliError,
    prompt::Prompter,
    report,
};

pub fn hydrostatic<R: BufRead, W: Write>(
    args: HydrostaticArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    writeln!(prompter.output(), "--- Hydrostatic Force Calculator ---")?;

    let choice: OrientationChoice = prompter.or_ask(
        args.orientation,
        "Select orientation [t] Tilted, [v] Vertical, [h] Horizontal",
    )?;
    let density = prompter.or_ask(args.density, "Enter fluid density (kg/m^3)")?;
    let top_depth = prompter.or_ask(
        args.top_depth,
        "Enter distance from surface to top edge 's' (m)",
    )?;
    let length = prompter.or_ask(
        args.length,
        "Enter plate length 'b' (perpendicular to surface) (m)",
    )?;
    let width = prompter.or_ask(args.width, "Enter plate width 'a' (m)")?;

    let orientation = match choice {
        OrientationChoice::Tilted => {
            let angle = prompter.or_ask(args.angle, "Enter tilt angle (degrees)")?;
            Orientation::Tilted(Angle::new::<degree>(angle))
        }
        OrientationChoice::Vertical => Orientation::Vertical,
        OrientationChoice::Horizontal => Orientation::Horizontal,
    };

    let plate = SubmergedPlate {
        density: MassDensity::new::<kilogram_per_cubic_meter>(density),
        top_depth: Length::new::<meter>(top_depth),
        length: Length::new::<meter>(length),
        width: Length::new::<meter>(width),
    };
    let result = plate.resultant_force(orientation)?;
    info!(?orientation, "computed hydrostatic force");

    report::hydrostatic(prompter.output(), &result)?;
    Ok(())
}

pub fn pipe_flow<R: BufRead, W: Write>(
    args: PipeFlowArgs,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    writeln!(prompter.output(), "=== Pipe Flow Analyzer ===")?;

    let angle = prompter.or_ask(args.angle, "Enter pipe angle (deg, 0=horizontal)")?;
    let flow_rate = prompter.or_ask(args.flow_rate, "Enter flow rate (m^3/s)")?;
    let diameter = prompter.or_ask(args.diameter, "Enter pipe diameter (m)")?;
    let length = prompter.or_ask(args.length, "Enter pipe length (m)")?;
    let density = prompter.or_ask(args.density, "Enter fluid density (kg/m^3)")?;
    let viscosity = prompter.or_ask(args.viscosity, "Enter dynamic viscosity (Pa.s)")?;

    let pipe = PipeFlow {
        flow_rate: VolumeRate::new::<cubic_meter_per_second>(flow_rate),
        diameter: Length::new::<meter>(diameter),
        length: Length::new::<meter>(length),
        density: MassDensity::new::<kilogram_per_cubic_meter>(density),
        viscosity: DynamicViscosity::new::<pascal_second>(viscosity),
        inclination: Angle::new::<degree>(angle),
    };

    // Roughness only matters once the Colebrook-White solver is involved.
    let roughness = if pipe.regime().uses_colebrook() {
        prompter.or_ask(
            args.roughness,
            "Enter pipe roughness height (m) [e.g. 0.000045 for steel]",
        )?
    } else {
        debug!("laminar flow, roughness not needed");
        args.roughness.unwrap_or(0.0)
    };

    let report = pipe.analyze(Length::new::<meter>(roughness), config)?;
    info!(
        reynolds = report.reynolds,
        friction = report.friction.value,
        "analyzed pipe flow"
    );

    report::pipe_flow(prompter.output(), &report)?;
    Ok(())
}

pub fn tank_linear<R: BufRead, W: Write>(
    args: LinearArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    writeln!(prompter.output(), "--- Linear Acceleration Analysis ---")?;

    let ax = prompter.or_ask(args.ax, "Enter x-acceleration (m/s^2)")?;
    let az = prompter.or_ask(args.az, "Enter z-acceleration (m/s^2)")?;
    let fluid_height = prompter.or_ask(args.fluid_height, "Enter fluid height (m)")?;
    let tank_height = prompter.or_ask(args.tank_height, "Enter tank height (m)")?;
    let tank_length = prompter.or_ask(
        args.tank_length,
        "Enter tank length (m) [Direction of motion]",
    )?;
    let tank_width = prompter.or_ask(args.tank_width, "Enter tank width (m) [Perpendicular]")?;
    let density = prompter.or_ask(args.density, "Enter fluid density (kg/m^3)")?;

    let tank = LinearAcceleration {
        horizontal: Acceleration::new::<meter_per_second_squared>(ax),
        vertical: Acceleration::new::<meter_per_second_squared>(az),
        fluid_height: Length::new::<meter>(fluid_height),
        tank_height: Length::new::<meter>(tank_height),
        tank_length: Length::new::<meter>(tank_length),
        tank_width: Length::new::<meter>(tank_width),
        density: MassDensity::new::<kilogram_per_cubic_meter>(density),
    };
    let result = tank.analyze()?;
    info!(outcome = ?result.outcome, "analyzed linear sloshing");

    report::linear(prompter.output(), &result)?;
    Ok(())
}

pub fn tank_rotational<R: BufRead, W: Write>(
    args: RotationalArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    writeln!(prompter.output(), "--- Rotational Acceleration Analysis ---")?;

    let rpm = prompter.or_ask(args.rpm, "Enter Rotation Speed (RPM)")?;
    let az = prompter.or_ask(args.az, "Enter z-acceleration (m/s^2)")?;
    let fluid_height = prompter.or_ask(args.fluid_height, "Enter fluid height (m)")?;
    let tank_height = prompter.or_ask(args.tank_height, "Enter tank height (m)")?;
    let radius = prompter.or_ask(args.radius, "Enter tank radius (m)")?;

    let tank = RigidRotation {
        speed: AngularVelocity::new::<revolution_per_minute>(rpm),
        vertical: Acceleration::new::<meter_per_second_squared>(az),
        fluid_height: Length::new::<meter>(fluid_height),
        tank_height: Length::new::<meter>(tank_height),
        radius: Length::new::<meter>(radius),
    };
    let surface = tank.analyze()?;
    info!(
        spills = surface.spills,
        dry_spot = surface.dry_spot_radius.is_some(),
        "analyzed rigid rotation"
    );

    report::rotational(prompter.output(), tank.speed, &surface)?;
    Ok(())
}

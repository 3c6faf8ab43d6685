use std::{fmt, path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Hydrostatic, pipe-flow, and tank calculators.
///
/// Any input left off the command line is prompted for interactively.
#[derive(Debug, Parser)]
#[command(name = "hydrocalc", version)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// TOML file with friction factor solver settings
    #[arg(long, global = true)]
    pub solver_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resultant force on a submerged rectangular plate
    Hydrostatic(HydrostaticArgs),

    /// Pressure drop, head loss, and pumping power in a circular pipe
    PipeFlow(PipeFlowArgs),

    /// Free surface of a liquid in an accelerating or rotating tank
    Tank {
        #[command(subcommand)]
        mode: TankCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum TankCommand {
    /// Tank under straight-line acceleration
    Linear(LinearArgs),

    /// Cylindrical tank spinning about its axis
    Rotational(RotationalArgs),
}

/// Plate orientation relative to the free surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrientationChoice {
    #[value(alias = "t")]
    Tilted,
    #[value(alias = "v")]
    Vertical,
    #[value(alias = "h")]
    Horizontal,
}

impl FromStr for OrientationChoice {
    type Err = UnknownOrientation;

    /// Accepts the full name or its first letter, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t" | "tilted" => Ok(Self::Tilted),
            "v" | "vertical" => Ok(Self::Vertical),
            "h" | "horizontal" => Ok(Self::Horizontal),
            _ => Err(UnknownOrientation),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOrientation;

impl fmt::Display for UnknownOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected t, v, or h")
    }
}

#[derive(Debug, Default, Args)]
pub struct HydrostaticArgs {
    /// Plate orientation (tilted, vertical, horizontal, or t, v, h)
    #[arg(long, value_enum, ignore_case = true)]
    pub orientation: Option<OrientationChoice>,

    /// Fluid density (kg/m^3)
    #[arg(long)]
    pub density: Option<f64>,

    /// Distance from the surface to the top edge `s` (m)
    #[arg(long)]
    pub top_depth: Option<f64>,

    /// Plate length `b`, perpendicular to the surface (m)
    #[arg(long)]
    pub length: Option<f64>,

    /// Plate width `a` (m)
    #[arg(long)]
    pub width: Option<f64>,

    /// Tilt angle from the horizontal (degrees), used for tilted plates
    #[arg(long)]
    pub angle: Option<f64>,
}

#[derive(Debug, Default, Args)]
pub struct PipeFlowArgs {
    /// Pipe angle (degrees, 0 = horizontal)
    #[arg(long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Volumetric flow rate (m^3/s)
    #[arg(long)]
    pub flow_rate: Option<f64>,

    /// Pipe diameter (m)
    #[arg(long)]
    pub diameter: Option<f64>,

    /// Pipe length (m)
    #[arg(long)]
    pub length: Option<f64>,

    /// Fluid density (kg/m^3)
    #[arg(long)]
    pub density: Option<f64>,

    /// Dynamic viscosity (Pa.s)
    #[arg(long)]
    pub viscosity: Option<f64>,

    /// Absolute roughness height (m), only used for non-laminar flow
    #[arg(long)]
    pub roughness: Option<f64>,
}

#[derive(Debug, Default, Args)]
pub struct LinearArgs {
    /// Acceleration in the direction of motion (m/s^2)
    #[arg(long, allow_negative_numbers = true)]
    pub ax: Option<f64>,

    /// Vertical acceleration (m/s^2)
    #[arg(long, allow_negative_numbers = true)]
    pub az: Option<f64>,

    /// Fluid height at rest (m)
    #[arg(long)]
    pub fluid_height: Option<f64>,

    /// Tank height (m)
    #[arg(long)]
    pub tank_height: Option<f64>,

    /// Tank length in the direction of motion (m)
    #[arg(long)]
    pub tank_length: Option<f64>,

    /// Tank width perpendicular to the motion (m)
    #[arg(long)]
    pub tank_width: Option<f64>,

    /// Fluid density (kg/m^3)
    #[arg(long)]
    pub density: Option<f64>,
}

#[derive(Debug, Default, Args)]
pub struct RotationalArgs {
    /// Rotation speed (rpm)
    #[arg(long)]
    pub rpm: Option<f64>,

    /// Vertical acceleration (m/s^2)
    #[arg(long, allow_negative_numbers = true)]
    pub az: Option<f64>,

    /// Fluid height at rest (m)
    #[arg(long)]
    pub fluid_height: Option<f64>,

    /// Tank height (m)
    #[arg(long)]
    pub tank_height: Option<f64>,

    /// Tank radius (m)
    #[arg(long)]
    pub radius: Option<f64>,
}

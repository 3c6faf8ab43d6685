use approx::assert_relative_eq;
use hydrocalc_fluids::pipe::{
    ColebrookWhite, FlowRegime, FrictionFactorProblem, FrictionMethod, PipeFlow, SEARCH_BRACKET,
    friction_factor,
};
use hydrocalc_solvers::equation::bisection::{self, Config, Status};
use uom::si::{
    angle::degree,
    dynamic_viscosity::pascal_second,
    f64::{Angle, DynamicViscosity, Length, MassDensity, VolumeRate},
    length::{meter, millimeter},
    mass_density::kilogram_per_cubic_meter,
    pressure::kilopascal,
    volume_rate::cubic_meter_per_second,
};

#[test]
fn commercial_steel_at_moderate_reynolds() {
    let config = Config::new(100, 1e-6).expect("valid config");
    let friction = friction_factor(1e5, 1e-4, &config).expect("solvable");

    assert_eq!(friction.regime, FlowRegime::Turbulent);
    assert_relative_eq!(friction.value, 0.018_514, max_relative = 1e-3);

    let FrictionMethod::Colebrook {
        status, residual, ..
    } = friction.method
    else {
        panic!("turbulent flow must use Colebrook-White");
    };
    assert_eq!(status, Status::Converged);
    assert!(residual.abs() < 1e-6);
}

#[test]
fn smooth_pipe_matches_moody_chart() {
    let friction = friction_factor(1e5, 0.0, &Config::default()).expect("solvable");
    assert_relative_eq!(friction.value, 0.018, max_relative = 0.01);
}

#[test]
fn regime_decides_whether_the_solver_runs() {
    let config = Config::default();

    let laminar = friction_factor(1500.0, 1e-4, &config).expect("solvable");
    assert_eq!(laminar.method, FrictionMethod::Laminar);

    for reynolds in [2300.0, 4000.0] {
        let friction = friction_factor(reynolds, 1e-4, &config).expect("solvable");
        assert!(matches!(friction.method, FrictionMethod::Colebrook { .. }));
    }
}

#[test]
fn same_inputs_give_identical_results() {
    let config = Config::default();
    let first = friction_factor(2.5e5, 2e-4, &config).expect("solvable");
    let second = friction_factor(2.5e5, 2e-4, &config).expect("solvable");

    assert_eq!(first, second);
}

#[test]
fn colebrook_model_solves_directly() {
    let model = ColebrookWhite::new(1e5, 1e-4);
    let solution = bisection::solve_unobserved(
        &model,
        &FrictionFactorProblem,
        SEARCH_BRACKET,
        &Config::default(),
    )
    .expect("solvable");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.snapshot.input, solution.x);
    assert_relative_eq!(solution.x.sqrt().recip(), solution.snapshot.output, epsilon = 1e-6);
}

#[test]
fn water_main_pressure_drop() {
    // 0.05 m³/s through 200 m of 150 mm commercial steel.
    let pipe = PipeFlow {
        flow_rate: VolumeRate::new::<cubic_meter_per_second>(0.05),
        diameter: Length::new::<millimeter>(150.0),
        length: Length::new::<meter>(200.0),
        density: MassDensity::new::<kilogram_per_cubic_meter>(998.0),
        viscosity: DynamicViscosity::new::<pascal_second>(1.0e-3),
        inclination: Angle::new::<degree>(0.0),
    };

    let report = pipe
        .analyze(Length::new::<millimeter>(0.045), &Config::default())
        .expect("valid flow");

    assert_eq!(report.friction.regime, FlowRegime::Turbulent);
    assert!(report.reynolds > 4.0e5);
    assert!(report.friction.value > 0.014 && report.friction.value < 0.02);
    assert!(report.pressure_drop.get::<kilopascal>() > 0.0);
}

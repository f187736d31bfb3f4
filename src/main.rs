use impulse::config::rocket::RocketParameters;
use impulse::config::simulation::SimulationSettings;
use impulse::gnc::control::scheduled_controller::{GimbalCommand, ScheduledController};
use impulse::gnc::gimbal::SlewRateGimbal;
use impulse::integrators::simulation::Simulation;
use impulse::models::subsystem::shared;
use impulse::propulsion::motor::ThrustCurveMotor;
use impulse::telemetry::csv_log::{TelemetryRecord, TelemetryWriter};
use impulse::{RocketBody, Steppable};
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let parameters = RocketParameters::hopper();
    let settings = SimulationSettings::default();

    // Hop profile: 2 s at 160 N, then a tapering sustain to burnout at 4 s
    let motor = shared(ThrustCurveMotor::new(vec![
        (0.0, 160.0),
        (2.0, 160.0),
        (3.0, 110.0),
        (4.0, 0.0),
    ])?);
    let gimbal = shared(SlewRateGimbal::new(8.0, 30.0)?);
    let controller = shared(ScheduledController::new(
        gimbal.clone(),
        vec![
            GimbalCommand::new(0.5, 2.0, 0.0),
            GimbalCommand::new(1.0, -2.0, 1.0),
            GimbalCommand::new(1.5, 0.0, 0.0),
        ],
    ));

    let mut rocket = RocketBody::new();
    rocket.configure_with(&parameters, Some(motor.clone().into()), Some(gimbal.into()))?;
    rocket.set_controller(Some(controller.into()));
    rocket.reset();
    rocket.init();

    info!(
        "Hopper: total impulse {:.1} N·s, burnout at {:.1} s",
        motor.borrow().total_impulse(),
        motor.borrow().burnout_time()
    );

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;
    let file = File::create(output_dir.join("flight_data.csv"))?;
    let mut telemetry = TelemetryWriter::new(file);

    let mut simulation = Simulation::new(rocket);
    let mut step = 0usize;
    let mut write_error = None;
    simulation.run(&settings, |sim, record| {
        if step % settings.sample_interval.max(1) == 0 || sim.body().is_over() {
            let row = TelemetryRecord::from_step(record, sim.body().phase());
            if let Err(e) = telemetry.write(&row) {
                write_error.get_or_insert(e);
            }
        }
        step += 1;
    })?;

    if let Some(e) = write_error {
        return Err(e.into());
    }

    let mut rocket = simulation.into_body();
    if !rocket.is_over() {
        warn!("Flight did not land within {} s", settings.max_duration);
        rocket.stop();
    }

    telemetry.flush()?;
    info!(
        "Wrote {} telemetry rows to output/flight_data.csv",
        telemetry.rows()
    );

    Ok(())
}

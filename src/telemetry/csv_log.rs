use crate::fsm::flight_phase::FlightPhase;
use crate::integrators::simulation::StepRecord;
use serde::Serialize;
use std::io;

/// One row of flight telemetry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryRecord {
    #[serde(rename = "Time (s)")]
    pub time: f64,
    #[serde(rename = "Position X (m)")]
    pub position_x: f64,
    #[serde(rename = "Position Y (m)")]
    pub position_y: f64,
    #[serde(rename = "Altitude (m)")]
    pub altitude: f64,
    #[serde(rename = "Vertical Velocity (m/s)")]
    pub vertical_velocity: f64,
    #[serde(rename = "Pitch (deg)")]
    pub pitch: f64,
    #[serde(rename = "Yaw (deg)")]
    pub yaw: f64,
    #[serde(rename = "Force X (N)")]
    pub force_x: f64,
    #[serde(rename = "Force Y (N)")]
    pub force_y: f64,
    #[serde(rename = "Force Z (N)")]
    pub force_z: f64,
    #[serde(rename = "Torque X (N⋅m)")]
    pub torque_x: f64,
    #[serde(rename = "Torque Y (N⋅m)")]
    pub torque_y: f64,
    #[serde(rename = "Flight Phase")]
    pub phase: String,
}

impl TelemetryRecord {
    pub fn from_step(record: &StepRecord, phase: FlightPhase) -> Self {
        let attitude = record.state.attitude();
        Self {
            time: record.time,
            position_x: record.state.position.x,
            position_y: record.state.position.y,
            altitude: record.state.altitude(),
            vertical_velocity: record.state.velocity.z,
            pitch: attitude.pitch,
            yaw: attitude.yaw,
            force_x: record.force.x,
            force_y: record.force.y,
            force_z: record.force.z,
            torque_x: record.torque.x,
            torque_y: record.torque.y,
            phase: phase.to_string(),
        }
    }
}

/// CSV sink for [`TelemetryRecord`]s; the header is written with the first row.
pub struct TelemetryWriter<W: io::Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: io::Write> TelemetryWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            rows: 0,
        }
    }

    pub fn write(&mut self, record: &TelemetryRecord) -> Result<(), csv::Error> {
        self.writer.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> Result<W, csv::Error> {
        self.writer
            .into_inner()
            .map_err(|err| csv::Error::from(err.into_error()))
    }
}

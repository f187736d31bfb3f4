use crate::models::subsystem::{Controller, Gimbal, Shared, Subsystem};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GimbalCommand {
    pub time: f64,
    pub x: f64,
    pub y: f64,
}

impl GimbalCommand {
    pub fn new(time: f64, x: f64, y: f64) -> Self {
        Self { time, x, y }
    }
}

/// Open-loop controller replaying a time-ordered list of gimbal targets.
pub struct ScheduledController {
    gimbal: Shared<dyn Gimbal>,
    schedule: Vec<GimbalCommand>,
    next: usize,
    stopped: bool,
}

impl ScheduledController {
    /// Commands are sorted by time; ties keep their given order.
    pub fn new(gimbal: Shared<dyn Gimbal>, mut schedule: Vec<GimbalCommand>) -> Self {
        schedule.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            gimbal,
            schedule,
            next: 0,
            stopped: false,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Subsystem for ScheduledController {
    fn reset(&mut self) {
        self.next = 0;
        self.stopped = false;
    }
}

impl Controller for ScheduledController {
    fn advance(&mut self, current_time: f64) {
        if self.stopped {
            return;
        }

        let due = self.schedule[self.next..]
            .iter()
            .take_while(|command| command.time <= current_time)
            .count();
        if due == 0 {
            return;
        }

        self.next += due;
        let command = self.schedule[self.next - 1];
        debug!(
            "t={:.2}s: gimbal target ({:.2}, {:.2}) deg",
            current_time, command.x, command.y
        );
        self.gimbal.borrow_mut().command(command.x, command.y);
    }

    /// Stops replaying and returns the nozzle to neutral.
    fn stop(&mut self) {
        self.stopped = true;
        self.gimbal.borrow_mut().command(0.0, 0.0);
    }
}

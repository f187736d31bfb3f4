use crate::config::rocket::RocketParameters;
use crate::constants::LAUNCH_ALTITUDE;
use crate::errors::RocketError;
use crate::fsm::flight_phase::FlightPhase;
use crate::fsm::state_machine::FlightStateMachine;
use crate::models::body::{MassProperties, Steppable};
use crate::models::rocket_config::RocketConfig;
use crate::models::state::RigidBodyState;
use crate::models::subsystem::{Controller, Gimbal, Mount, Shared, Subsystem, ThrustSource};
use crate::physics::thrust_vector::{GimbalDeflection, ThrustVectorResolver};
use nalgebra as na;
use tracing::{debug, trace};

/// A thrust-vectored rocket flying as a single rigid body.
///
/// The motor, gimbal and controller are optional and shared with the owning
/// simulation. Each one that is absent contributes nothing: no motor means no
/// thrust, no gimbal means no steering torque, no controller means `stop` is
/// a no-op.
pub struct RocketBody {
    config: Option<RocketConfig>,
    state: RigidBodyState,
    motor: Option<Mount<dyn ThrustSource>>,
    gimbal: Option<Mount<dyn Gimbal>>,
    controller: Option<Mount<dyn Controller>>,
    fsm: FlightStateMachine,
}

impl RocketBody {
    pub fn new() -> Self {
        Self {
            config: None,
            state: RigidBodyState::zero(),
            motor: None,
            gimbal: None,
            controller: None,
            fsm: FlightStateMachine::new(),
        }
    }

    /// Installs the motor, gimbal and geometry. Leaves the body untouched on
    /// error.
    pub fn configure(
        &mut self,
        motor: Option<Mount<dyn ThrustSource>>,
        gimbal: Option<Mount<dyn Gimbal>>,
        mass: f64,
        length: f64,
        center_of_mass_height: f64,
    ) -> Result<(), RocketError> {
        let config = RocketConfig::new(mass, length, center_of_mass_height)?;
        debug!(
            "Configured rocket: mass={} kg, length={} m, CoM={} m, I={:?}",
            config.mass(),
            config.body_length(),
            config.center_of_mass_height(),
            config.moment_of_inertia()
        );

        self.config = Some(config);
        self.motor = motor;
        self.gimbal = gimbal;
        self.fsm.configured();
        Ok(())
    }

    pub fn configure_with(
        &mut self,
        parameters: &RocketParameters,
        motor: Option<Mount<dyn ThrustSource>>,
        gimbal: Option<Mount<dyn Gimbal>>,
    ) -> Result<(), RocketError> {
        self.configure(
            motor,
            gimbal,
            parameters.mass,
            parameters.body_length,
            parameters.center_of_mass_height,
        )
    }

    fn subsystems(&self) -> impl Iterator<Item = &Shared<dyn Subsystem>> {
        let gimbal = self.gimbal.as_ref().map(Mount::lifecycle);
        let motor = self.motor.as_ref().map(Mount::lifecycle);
        let controller = self.controller.as_ref().map(Mount::lifecycle);
        gimbal.into_iter().chain(motor).chain(controller)
    }

    /// Places the rocket on the launch datum, initializes the gimbal and
    /// resets the motor and controller.
    pub fn init(&mut self) {
        self.state.position.z = LAUNCH_ALTITUDE;
        if let Some(gimbal) = &self.gimbal {
            gimbal.lifecycle().borrow_mut().init();
        }
        let motor = self.motor.as_ref().map(Mount::lifecycle);
        let controller = self.controller.as_ref().map(Mount::lifecycle);
        for subsystem in motor.into_iter().chain(controller) {
            subsystem.borrow_mut().reset();
        }
        self.fsm.rearm();
        debug!("Rocket initialized at z={} m", self.state.position.z);
    }

    /// Restores the default rigid-body state and resets every subsystem.
    pub fn reset(&mut self) {
        self.state = RigidBodyState::zero();
        for subsystem in self.subsystems() {
            subsystem.borrow_mut().reset();
        }
        self.fsm.rearm();
        debug!("Rocket reset");
    }

    /// Forwards a stop request to the controller, if any.
    pub fn stop(&mut self) {
        if let Some(controller) = &self.controller {
            controller.handle().borrow_mut().stop();
        }
    }

    pub fn config(&self) -> Option<&RocketConfig> {
        self.config.as_ref()
    }

    fn require_config(&self) -> Result<&RocketConfig, RocketError> {
        self.config.as_ref().ok_or(RocketError::NotConfigured)
    }

    pub fn mass(&self) -> Option<f64> {
        self.config.as_ref().map(RocketConfig::mass)
    }

    pub fn moment_of_inertia(&self) -> Option<na::Vector3<f64>> {
        self.config.as_ref().map(RocketConfig::moment_of_inertia)
    }

    pub fn phase(&self) -> FlightPhase {
        self.fsm.get_current_state()
    }

    pub fn motor(&self) -> Option<&Shared<dyn ThrustSource>> {
        self.motor.as_ref().map(Mount::handle)
    }

    pub fn gimbal(&self) -> Option<&Shared<dyn Gimbal>> {
        self.gimbal.as_ref().map(Mount::handle)
    }

    pub fn set_motor(&mut self, motor: Option<Mount<dyn ThrustSource>>) {
        debug!("Motor {}", if motor.is_some() { "attached" } else { "detached" });
        self.motor = motor;
    }

    pub fn set_gimbal(&mut self, gimbal: Option<Mount<dyn Gimbal>>) {
        debug!("Gimbal {}", if gimbal.is_some() { "attached" } else { "detached" });
        self.gimbal = gimbal;
    }

    pub fn set_controller(&mut self, controller: Option<Mount<dyn Controller>>) {
        debug!(
            "Controller {}",
            if controller.is_some() { "attached" } else { "detached" }
        );
        self.controller = controller;
    }

    fn thrust_at(&self, time: f64) -> f64 {
        self.motor
            .as_ref()
            .map_or(0.0, |motor| motor.handle().borrow().thrust_at(time))
    }

    fn gimbal_deflection(&self) -> Option<GimbalDeflection> {
        self.gimbal.as_ref().map(|gimbal| {
            let gimbal = gimbal.handle().borrow();
            GimbalDeflection::new(gimbal.deflection_x(), gimbal.deflection_y())
        })
    }

    fn resolver(&self) -> Result<ThrustVectorResolver, RocketError> {
        let config = self.require_config()?;
        Ok(ThrustVectorResolver::new(
            config.center_of_mass_height(),
            config.mass(),
        ))
    }
}

impl Default for RocketBody {
    fn default() -> Self {
        Self::new()
    }
}

impl Steppable for RocketBody {
    /// Advances the gimbal by `delta_time`, then the controller at
    /// `current_time`. A non-positive or non-finite `delta_time` is rejected
    /// before anything moves.
    fn step(&mut self, current_time: f64, delta_time: f64) -> Result<(), RocketError> {
        if !(delta_time.is_finite() && delta_time > 0.0) {
            return Err(RocketError::InvalidTimeStep { delta_time });
        }
        self.require_config()?;

        self.fsm.begin_step(current_time);
        if let Some(gimbal) = &self.gimbal {
            gimbal.handle().borrow_mut().advance(delta_time);
        }
        if let Some(controller) = &self.controller {
            controller.handle().borrow_mut().advance(current_time);
        }
        Ok(())
    }

    fn force(&self, current_time: f64, _delta_time: f64) -> Result<na::Vector3<f64>, RocketError> {
        let resolver = self.resolver()?;
        let force = resolver.force(
            self.thrust_at(current_time),
            self.gimbal_deflection(),
            self.state.attitude(),
        )?;
        trace!("t={:.3}s force={:?}", current_time, force);
        Ok(force)
    }

    fn torque(&self, current_time: f64, _delta_time: f64) -> Result<na::Vector3<f64>, RocketError> {
        let resolver = self.resolver()?;
        let torque = resolver.torque(self.thrust_at(current_time), self.gimbal_deflection())?;
        trace!("t={:.3}s torque={:?}", current_time, torque);
        Ok(torque)
    }

    fn mass_properties(&self) -> Result<MassProperties, RocketError> {
        let config = self.require_config()?;
        Ok(MassProperties {
            mass: config.mass(),
            moment_of_inertia: config.moment_of_inertia(),
        })
    }

    fn state(&self) -> &RigidBodyState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RigidBodyState {
        &mut self.state
    }

    fn after_integration(&mut self, current_time: f64) {
        self.fsm
            .evaluate_landing(self.state.is_landed(), current_time);
    }

    fn is_over(&self) -> bool {
        self.fsm.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITY;
    use crate::gnc::control::scheduled_controller::{GimbalCommand, ScheduledController};
    use crate::gnc::gimbal::SlewRateGimbal;
    use crate::models::subsystem::shared;
    use crate::propulsion::motor::ConstantThrustMotor;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[derive(Default)]
    struct Recorder {
        inits: u32,
        resets: u32,
        stops: u32,
        advanced_to: Option<f64>,
    }

    impl Subsystem for Recorder {
        fn init(&mut self) {
            self.inits += 1;
        }

        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    impl Controller for Recorder {
        fn advance(&mut self, current_time: f64) {
            self.advanced_to = Some(current_time);
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    fn motor(thrust: f64) -> Shared<ConstantThrustMotor> {
        shared(ConstantThrustMotor::new(thrust, 100.0).unwrap())
    }

    fn hopper(thrust: Option<f64>, gimbal: Option<Shared<SlewRateGimbal>>) -> RocketBody {
        let mut rocket = RocketBody::new();
        rocket
            .configure(
                thrust.map(|thrust| motor(thrust).into()),
                gimbal.map(Into::into),
                10.0,
                2.0,
                0.5,
            )
            .unwrap();
        rocket
    }

    #[test]
    fn hopper_scenario() {
        let gimbal = shared(SlewRateGimbal::new(10.0, 50.0).unwrap());
        let rocket = hopper(Some(100.0), Some(gimbal));

        let force = rocket.force(0.0, 0.01).unwrap();
        assert_relative_eq!(force, na::Vector3::new(0.0, 0.0, 1.9), epsilon = 1e-9);
        assert_eq!(rocket.torque(0.0, 0.01).unwrap(), na::Vector3::zeros());
    }

    #[test_case(2.0; "center of mass at the nose")]
    #[test_case(0.0; "center of mass at the nozzle")]
    fn configure_rejects_center_of_mass_outside_body(height: f64) {
        let mut rocket = RocketBody::new();
        let result = rocket.configure(None, None, 10.0, 2.0, height);
        assert!(matches!(result, Err(RocketError::Configuration(_))));
        assert_eq!(rocket.phase(), FlightPhase::Unconfigured);
        assert!(rocket.config().is_none());
    }

    #[test]
    fn no_motor_means_pure_weight() {
        let gimbal = shared(SlewRateGimbal::new(10.0, 50.0).unwrap());
        gimbal.borrow_mut().command(8.0, -8.0);
        gimbal.borrow_mut().advance(1.0);
        let mut rocket = hopper(None, Some(gimbal));
        rocket.state_mut().angular_position = na::Vector3::new(25.0, -10.0, 0.0);

        let force = rocket.force(3.0, 0.01).unwrap();
        assert_eq!(force, na::Vector3::new(0.0, 0.0, -GRAVITY * 10.0));
        assert_eq!(rocket.torque(3.0, 0.01).unwrap(), na::Vector3::zeros());
    }

    #[test]
    fn no_gimbal_means_no_torque() {
        let mut rocket = hopper(Some(500.0), None);
        rocket.state_mut().angular_position = na::Vector3::new(30.0, 15.0, 0.0);
        assert_eq!(rocket.torque(0.0, 0.01).unwrap(), na::Vector3::zeros());
    }

    #[test]
    fn deflected_gimbal_steers() {
        let gimbal = shared(SlewRateGimbal::new(10.0, 1000.0).unwrap());
        let mut rocket = hopper(Some(100.0), Some(gimbal.clone()));
        rocket.init();
        gimbal.borrow_mut().command(5.0, 0.0);
        rocket.step(0.0, 0.01).unwrap();

        let torque = rocket.torque(0.0, 0.01).unwrap();
        let tan = 5.0_f64.to_radians().tan();
        let u = (1.0 + tan * tan).sqrt();
        assert_relative_eq!(torque.x, 0.5 * 100.0 * tan / u, epsilon = 1e-9);
        assert_eq!(torque.y, 0.0);
    }

    #[test]
    fn unconfigured_rocket_refuses_to_fly() {
        let mut rocket = RocketBody::new();
        assert_eq!(rocket.step(0.0, 0.01), Err(RocketError::NotConfigured));
        assert_eq!(rocket.force(0.0, 0.01), Err(RocketError::NotConfigured));
        assert_eq!(rocket.mass(), None);
    }

    #[test_case(0.0; "zero")]
    #[test_case(-0.01; "negative")]
    #[test_case(f64::NAN; "not a number")]
    fn step_rejects_bad_time_step(delta_time: f64) {
        let mut rocket = hopper(Some(100.0), None);
        assert!(matches!(
            rocket.step(0.0, delta_time),
            Err(RocketError::InvalidTimeStep { .. })
        ));
        assert_eq!(rocket.phase(), FlightPhase::Ready);
    }

    #[test]
    fn init_and_reset_reach_every_subsystem() {
        let recorder = shared(Recorder::default());
        let mut rocket = hopper(Some(100.0), None);
        rocket.set_controller(Some(recorder.clone().into()));

        // The motor and controller are reset on init, even when they override it
        rocket.init();
        assert_eq!(rocket.state().position.z, LAUNCH_ALTITUDE);
        assert_eq!(recorder.borrow().inits, 0);
        assert_eq!(recorder.borrow().resets, 1);

        rocket.step(2.5, 0.1).unwrap();
        assert_eq!(recorder.borrow().advanced_to, Some(2.5));

        rocket.state_mut().velocity.z = 4.0;
        rocket.reset();
        assert_eq!(*rocket.state(), RigidBodyState::zero());
        assert_eq!(recorder.borrow().resets, 2);
    }

    #[test]
    fn init_still_initializes_the_gimbal() {
        let gimbal = shared(SlewRateGimbal::new(10.0, 1000.0).unwrap());
        gimbal.borrow_mut().command(4.0, 0.0);
        gimbal.borrow_mut().advance(1.0);
        let mut rocket = hopper(Some(100.0), Some(gimbal.clone()));

        rocket.init();
        assert_eq!(gimbal.borrow().deflection_x(), 0.0);
        // init keeps the pending command, so the nozzle swings back on the next step
        rocket.step(0.0, 0.01).unwrap();
        assert_relative_eq!(gimbal.borrow().deflection_x(), 4.0);
    }

    #[test]
    fn reconfigure_mid_flight_returns_to_ready() {
        let mut rocket = hopper(Some(100.0), None);
        rocket.init();
        rocket.step(0.0, 0.01).unwrap();
        assert_eq!(rocket.phase(), FlightPhase::Running);

        rocket.configure(None, None, 10.0, 2.0, 0.5).unwrap();
        assert_eq!(rocket.phase(), FlightPhase::Ready);
        assert!(rocket.motor().is_none());
        assert_eq!(
            rocket.force(0.0, 0.01).unwrap(),
            na::Vector3::new(0.0, 0.0, -GRAVITY * 10.0)
        );
    }

    #[test]
    fn step_advances_gimbal_then_controller() {
        let gimbal = shared(SlewRateGimbal::new(10.0, 10.0).unwrap());
        let controller = shared(ScheduledController::new(
            gimbal.clone(),
            vec![GimbalCommand::new(0.0, 6.0, 0.0)],
        ));
        let mut rocket = hopper(Some(100.0), Some(gimbal.clone()));
        rocket.set_controller(Some(controller.into()));
        rocket.init();

        // Controller commands after the gimbal moved, so the first step holds still
        rocket.step(0.0, 0.1).unwrap();
        assert_eq!(gimbal.borrow().deflection_x(), 0.0);
        assert_eq!(rocket.phase(), FlightPhase::Running);

        rocket.step(0.1, 0.1).unwrap();
        assert_relative_eq!(gimbal.borrow().deflection_x(), 1.0);
    }

    #[test]
    fn stop_without_controller_is_a_no_op() {
        let mut rocket = hopper(None, None);
        rocket.stop();

        let recorder = shared(Recorder::default());
        rocket.set_controller(Some(recorder.clone().into()));
        rocket.stop();
        assert_eq!(recorder.borrow().stops, 1);
    }

    #[test]
    fn is_over_only_after_landing() {
        let mut rocket = hopper(None, None);
        rocket.init();
        assert!(!rocket.is_over());

        rocket.step(0.0, 0.1).unwrap();
        rocket.after_integration(0.1);
        assert!(!rocket.is_over(), "still above ground");

        rocket.state_mut().position.z = 0.0;
        rocket.state_mut().velocity.z = -2.0;
        rocket.after_integration(0.2);
        assert!(rocket.is_over());
        assert_eq!(rocket.phase(), FlightPhase::Landed);
    }

    #[test]
    fn collaborators_can_be_swapped() {
        let mut rocket = hopper(Some(100.0), None);
        assert!(rocket.motor().is_some());
        assert!(rocket.gimbal().is_none());

        rocket.set_motor(Some(motor(200.0).into()));
        let force = rocket.force(0.0, 0.01).unwrap();
        assert_relative_eq!(force.z, 200.0 - 98.1, epsilon = 1e-9);

        rocket.set_motor(None);
        assert_eq!(rocket.force(0.0, 0.01).unwrap().z, -GRAVITY * 10.0);
    }
}

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle to a collaborator shared between the rocket and the simulation
/// that owns it.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Lifecycle hooks common to every auxiliary subsystem.
pub trait Subsystem {
    /// Prepare for a new flight. Defaults to a reset.
    ///
    /// A rocket only calls this on its gimbal; motors and controllers are
    /// reset instead, so overriding it on those has no effect there.
    fn init(&mut self) {
        self.reset();
    }

    fn reset(&mut self);
}

/// Thrust magnitude as a function of elapsed time.
pub trait ThrustSource: Subsystem {
    /// Thrust in newtons at `time` seconds. Never negative.
    fn thrust_at(&self, time: f64) -> f64;
}

/// Two-axis nozzle actuator. Angles are in degrees.
pub trait Gimbal: Subsystem {
    fn deflection_x(&self) -> f64;
    fn deflection_y(&self) -> f64;

    /// Move toward the commanded deflection over `delta_time` seconds.
    fn advance(&mut self, delta_time: f64);

    /// Set the target deflection.
    fn command(&mut self, x: f64, y: f64);
}

pub trait Controller: Subsystem {
    fn advance(&mut self, current_time: f64);
    fn stop(&mut self);
}

/// A collaborator attached to a rocket, kept both as its own capability and as
/// a [`Subsystem`] so lifecycle calls can iterate over every mount uniformly.
pub struct Mount<T: ?Sized> {
    handle: Shared<T>,
    lifecycle: Shared<dyn Subsystem>,
}

impl<T: ?Sized> Mount<T> {
    pub fn handle(&self) -> &Shared<T> {
        &self.handle
    }

    pub(crate) fn lifecycle(&self) -> &Shared<dyn Subsystem> {
        &self.lifecycle
    }
}

impl<T: ?Sized> Clone for Mount<T> {
    fn clone(&self) -> Self {
        Self {
            handle: Rc::clone(&self.handle),
            lifecycle: Rc::clone(&self.lifecycle),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Mount<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mount")
            .field("strong_count", &Rc::strong_count(&self.handle))
            .finish()
    }
}

impl<M: ThrustSource + 'static> From<Shared<M>> for Mount<dyn ThrustSource> {
    fn from(motor: Shared<M>) -> Self {
        Mount {
            handle: motor.clone(),
            lifecycle: motor,
        }
    }
}

impl<G: Gimbal + 'static> From<Shared<G>> for Mount<dyn Gimbal> {
    fn from(gimbal: Shared<G>) -> Self {
        Mount {
            handle: gimbal.clone(),
            lifecycle: gimbal,
        }
    }
}

impl<C: Controller + 'static> From<Shared<C>> for Mount<dyn Controller> {
    fn from(controller: Shared<C>) -> Self {
        Mount {
            handle: controller.clone(),
            lifecycle: controller,
        }
    }
}

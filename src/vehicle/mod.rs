//! Vehicles.
//!
//! A [`Vehicle`] carries shared engine and speed state; its [`VehicleKind`]
//! fixes the per-variant constants and the toggle feature. Speed is always
//! within `0..=max_speed` and only changes while the engine is running.

use std::fmt;

use thiserror::Error;

mod kind;
pub use kind::VehicleKind;

/// Speed in mph.
pub type Speed = u16;

/// Error returned by vehicle operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VehicleError {
    #[error("cannot accelerate - engine is off")]
    EngineOff,
}

/// Outcome of a successful [`Vehicle::accelerate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceleration {
    /// Speed increased by the full delta.
    Cruising(Speed),
    /// The delta was clamped to the variant's top speed.
    MaxSpeedReached(Speed),
}

impl fmt::Display for Acceleration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acceleration::Cruising(speed) => write!(f, "Current speed: {speed} mph"),
            Acceleration::MaxSpeedReached(speed) => {
                write!(f, "Maximum speed reached: {speed} mph")
            }
        }
    }
}

/// A vehicle with immutable identity fields and mutable driving state.
#[derive(Debug)]
pub struct Vehicle {
    kind: VehicleKind,
    make: String,
    model: String,
    year: u16,
    color: String,
    speed: Speed,
    engine_running: bool,
    feature_engaged: bool,
}

impl Vehicle {
    pub fn new(
        kind: VehicleKind,
        make: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        color: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            make: make.into(),
            model: model.into(),
            year,
            color: color.into(),
            speed: 0,
            engine_running: false,
            feature_engaged: false,
        }
    }

    pub fn start_engine(&mut self) -> String {
        self.engine_running = true;
        format!(
            "{} {} {}'s engine is now running",
            self.year, self.make, self.model
        )
    }

    /// Stop the engine. The vehicle also comes to a halt.
    pub fn stop_engine(&mut self) -> String {
        self.engine_running = false;
        self.speed = 0;
        format!(
            "{} {} {}'s engine is now off",
            self.year, self.make, self.model
        )
    }

    /// Speed up by `delta`, clamped to the variant's top speed.
    ///
    /// Fails without mutating anything while the engine is off.
    pub fn accelerate(&mut self, delta: Speed) -> Result<Acceleration, VehicleError> {
        if !self.engine_running {
            return Err(VehicleError::EngineOff);
        }
        let max = self.kind.max_speed();
        let target = self.speed.saturating_add(delta);
        if target > max {
            self.speed = max;
            Ok(Acceleration::MaxSpeedReached(max))
        } else {
            self.speed = target;
            Ok(Acceleration::Cruising(target))
        }
    }

    /// Flip the variant's toggle feature and describe the new state.
    pub fn toggle_feature(&mut self) -> &'static str {
        self.feature_engaged = !self.feature_engaged;
        self.kind.feature_phrase(self.feature_engaged)
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn is_engine_running(&self) -> bool {
        self.engine_running
    }
}

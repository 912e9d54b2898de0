//! Vehicle variants and their fixed characteristics.

use crate::vehicle::Speed;

/// Tagged vehicle variant.
///
/// Fixes the capacity and speed constants and the variant's toggle feature
/// (convertible top, sliding door, or drivetrain mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Coupe,
    Van,
    Suv,
}

impl VehicleKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            VehicleKind::Coupe => "Coupe",
            VehicleKind::Van => "Van",
            VehicleKind::Suv => "SUV",
        }
    }

    pub fn passenger_capacity(&self) -> u8 {
        match self {
            VehicleKind::Coupe => 4,
            VehicleKind::Van => 7,
            VehicleKind::Suv => 5,
        }
    }

    /// Cargo space in cubic feet.
    pub fn cargo_capacity(&self) -> f64 {
        match self {
            VehicleKind::Coupe => 13.0,
            VehicleKind::Van => 150.0,
            VehicleKind::Suv => 70.0,
        }
    }

    /// Top speed in mph.
    pub fn max_speed(&self) -> Speed {
        match self {
            VehicleKind::Coupe => 155,
            VehicleKind::Van => 112,
            VehicleKind::Suv => 130,
        }
    }

    /// Phrase describing the toggle feature in the given state.
    pub(crate) fn feature_phrase(&self, engaged: bool) -> &'static str {
        match (self, engaged) {
            (VehicleKind::Coupe, true) => "Convertible top lowered",
            (VehicleKind::Coupe, false) => "Convertible top raised",
            (VehicleKind::Van, true) => "Sliding door opened",
            (VehicleKind::Van, false) => "Sliding door closed",
            (VehicleKind::Suv, true) => "4WD engaged",
            (VehicleKind::Suv, false) => "4WD disengaged",
        }
    }
}

use std::fmt;

use tracing::debug;

pub const FULL_CHARGE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Standard,
    Tesla { autopilot: bool },
}

#[derive(Debug)]
pub struct ElectricVehicle {
    brand: String,
    battery_percentage: i32,
    kind: VehicleKind,
}

impl ElectricVehicle {
    pub fn new(brand: impl Into<String>, battery_percentage: i32) -> Self {
        Self {
            brand: brand.into(),
            battery_percentage,
            kind: VehicleKind::Standard,
        }
    }

    pub fn tesla(brand: impl Into<String>, battery_percentage: i32, autopilot: bool) -> Self {
        Self {
            brand: brand.into(),
            battery_percentage,
            kind: VehicleKind::Tesla { autopilot },
        }
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn battery_percentage(&self) -> i32 {
        self.battery_percentage
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
    }

    pub fn set_battery_percentage(&mut self, battery_percentage: i32) {
        self.battery_percentage = battery_percentage;
    }

    /// Adds `amount` to the battery, capped at [`FULL_CHARGE`].
    ///
    /// There is no lower bound, so a negative amount can drain below zero.
    pub fn charge(&mut self, amount: i32) {
        let charged: i32 = self.battery_percentage.saturating_add(amount).min(FULL_CHARGE);
        debug!(
            brand = %self.brand,
            from = self.battery_percentage,
            to = charged,
            "vehicle charged"
        );
        self.battery_percentage = charged;
    }

    /// Renders the status line, which differs per vehicle kind.
    pub fn charge_report(&self) -> String {
        match self.kind {
            VehicleKind::Standard => {
                format!("brand: {} battery: {}", self.brand, self.battery_percentage)
            }
            VehicleKind::Tesla { autopilot } => format!(
                "brand: {} charge: %{} autopilot: {}",
                self.brand, self.battery_percentage, autopilot
            ),
        }
    }
}

impl fmt::Display for ElectricVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.charge_report())
    }
}

impl Drop for ElectricVehicle {
    fn drop(&mut self) {
        if let VehicleKind::Tesla { .. } = self.kind {
            debug!(brand = %self.brand, "tesla components released");
        }
        debug!(brand = %self.brand, "vehicle dropped");
    }
}

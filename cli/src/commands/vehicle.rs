use clap::Args;
use ignite_common::config::Config;
use ignite_core::vehicle::ElectricVehicle;

use crate::terminal::print;

#[derive(Args, Debug)]
pub struct VehicleArgs {
    /// Brand shown in the report
    #[arg(long, default_value = "Tesla")]
    pub brand: String,
    /// Starting battery percentage
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub battery: i32,
    /// Build a Tesla instead of a standard vehicle
    #[arg(long)]
    pub tesla: bool,
    /// Turn on autopilot (Tesla only)
    #[arg(long, requires = "tesla")]
    pub autopilot: bool,
    /// Charge by this amount and report again
    #[arg(long, allow_negative_numbers = true)]
    pub charge: Option<i32>,
}

impl VehicleArgs {
    fn build(&self) -> ElectricVehicle {
        if self.tesla {
            ElectricVehicle::tesla(self.brand.as_str(), self.battery, self.autopilot)
        } else {
            ElectricVehicle::new(self.brand.as_str(), self.battery)
        }
    }
}

pub fn vehicle(args: VehicleArgs, _cfg: &Config) -> anyhow::Result<()> {
    let mut vehicle: ElectricVehicle = args.build();

    print::status_line("Brand", vehicle.brand());
    print::status_line("Battery", vehicle.battery_percentage());
    print::print(&vehicle.charge_report());

    if let Some(amount) = args.charge {
        vehicle.charge(amount);
        print::print(&vehicle.charge_report());
    }

    Ok(())
}

#![cfg(test)]
use ignite_core::vehicle::{ElectricVehicle, FULL_CHARGE};

use crate::utils::capture;

#[test]
fn tesla_teardown_runs_before_base() {
    let captured = capture(|| {
        let tesla = ElectricVehicle::tesla("Tesla", 20, false);
        assert_eq!(tesla.brand(), "Tesla");
        assert_eq!(tesla.battery_percentage(), 20);
    });

    let messages: Vec<String> = captured.messages();
    assert_eq!(
        messages,
        vec![
            String::from("tesla components released"),
            String::from("vehicle dropped"),
        ]
    );
}

#[test]
fn standard_teardown_only_logs_base() {
    let captured = capture(|| {
        let _vehicle = ElectricVehicle::new("BMW", 50);
    });

    assert_eq!(captured.messages(), vec![String::from("vehicle dropped")]);
}

#[test]
fn charge_session() {
    let captured = capture(|| {
        let mut vehicle = ElectricVehicle::new("BMW", 50);
        assert_eq!(vehicle.charge_report(), "brand: BMW battery: 50");

        vehicle.charge(10);
        assert_eq!(vehicle.charge_report(), "brand: BMW battery: 60");

        vehicle.charge(100);
        assert_eq!(vehicle.battery_percentage(), FULL_CHARGE);
    });

    let messages: Vec<String> = captured.messages();
    assert_eq!(
        messages.iter().filter(|msg| *msg == "vehicle charged").count(),
        2
    );
    assert_eq!(messages.last().map(String::as_str), Some("vehicle dropped"));
}

//! Console demonstration routines.
//!
//! Each routine builds sample instances and walks them through a fixed
//! sequence of operations, printing the results. Operation outcomes are also
//! logged through `tracing` for inspection at `RUST_LOG=info`.

use tracing::info;

use crate::Amount;
use crate::payment::{BankAccount, CreditCard, DigitalWallet, PaymentError, PaymentMethod};
use crate::vehicle::{Vehicle, VehicleKind};

/// Exercise each payment method with the same charge/refund/deposit sequence.
pub fn run_payment_demo() {
    let mut methods: Vec<Box<dyn PaymentMethod>> = vec![
        Box::new(CreditCard::new(
            "1234567890123456",
            Amount::from_float(5000.0),
        )),
        Box::new(DigitalWallet::new("user@email.com", Amount::from_float(1000.0))),
        Box::new(BankAccount::new(
            "9876543210",
            Amount::from_float(2000.0),
            Amount::from_float(500.0),
        )),
    ];

    for (i, method) in methods.iter_mut().enumerate() {
        if i > 0 {
            println!("\n{}\n", "=".repeat(50));
        }
        exercise_payment_method(method.as_mut());
    }
}

fn exercise_payment_method(method: &mut dyn PaymentMethod) {
    let name = method.display_name();
    println!("Testing {name}");
    println!("Initial balance: ${}", method.balance());

    let payment = Amount::from_float(500.0);
    println!("\nAttempting payment of ${payment}");
    let result = method.charge(payment);
    log_outcome("charge", &name, payment, &result);
    match result {
        Ok(()) => println!("Payment successful"),
        Err(_) => println!("Payment failed - insufficient funds"),
    }

    let refund = Amount::from_float(200.0);
    println!("\nProcessing refund of ${refund}");
    let result = method.refund(refund);
    log_outcome("refund", &name, refund, &result);
    match result {
        Ok(()) => println!("Refund successful"),
        Err(_) => println!("Refund failed"),
    }

    let deposit = Amount::from_float(1000.0);
    println!("\nAdding ${deposit}");
    let result = method.add_funds(deposit);
    log_outcome("add_funds", &name, deposit, &result);
    if result.is_err() {
        println!("Deposit rejected - credit limit reached");
    }

    println!("\nFinal balance: ${}", method.balance());
    println!("\nTransaction History:");
    for entry in method.history() {
        println!("{entry}");
    }
}

/// Small helper to log payment operation outcomes
fn log_outcome(op: &str, method: &str, amount: Amount, result: &Result<(), PaymentError>) {
    match result {
        Ok(()) => {
            info!(
                method = %method,
                amount = %amount,
                "{op} applied"
            );
        }
        Err(e) => {
            info!(
                method = %method,
                amount = %amount,
                reason = %e,
                "{op} skipped"
            );
        }
    }
}

/// Exercise one vehicle of each kind.
pub fn run_vehicle_demo() {
    let vehicles = [
        Vehicle::new(VehicleKind::Coupe, "Ford", "Mustang", 2024, "Red"),
        Vehicle::new(VehicleKind::Van, "Toyota", "Sienna", 2024, "Silver"),
        Vehicle::new(VehicleKind::Suv, "Toyota", "RAV4", 2024, "Blue"),
    ];

    for mut vehicle in vehicles {
        exercise_vehicle(&mut vehicle);
    }
}

fn exercise_vehicle(vehicle: &mut Vehicle) {
    println!(
        "\n=== Testing {} ({} {} {}) ===",
        vehicle.kind().type_name(),
        vehicle.year(),
        vehicle.make(),
        vehicle.model()
    );
    println!("{}", vehicle.start_engine());
    match vehicle.accelerate(50) {
        Ok(outcome) => println!("{outcome}"),
        Err(e) => println!("{e}"),
    }
    println!("Max Speed: {} mph", vehicle.kind().max_speed());
    println!("Passenger Capacity: {}", vehicle.kind().passenger_capacity());
    println!("Cargo Capacity: {:.1} cubic feet", vehicle.kind().cargo_capacity());
    println!("{}", vehicle.toggle_feature());
    println!("{}", vehicle.toggle_feature()); // back to the original state
}

use std::env;
use std::process::ExitCode;

use payfleet::demo::{run_payment_demo, run_vehicle_demo};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    match env::args().nth(1).as_deref() {
        None => {
            run_payment_demo();
            run_vehicle_demo();
            ExitCode::SUCCESS
        }
        Some("payments") => {
            run_payment_demo();
            ExitCode::SUCCESS
        }
        Some("vehicles") => {
            run_vehicle_demo();
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("unknown demo '{other}' - usage: payfleet [payments|vehicles]");
            ExitCode::FAILURE
        }
    }
}

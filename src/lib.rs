pub mod amount;
pub mod demo;
pub mod payment;
pub mod vehicle;

pub use amount::Amount;
pub use payment::{BankAccount, CreditCard, DigitalWallet, PaymentError, PaymentMethod};
pub use vehicle::{Vehicle, VehicleKind};

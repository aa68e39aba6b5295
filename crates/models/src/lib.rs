//! Domain records shared by the service and HTTP layers.

pub mod customer;

pub use customer::Customer;

//! Service layer for the customer resource.
//! - `customer::repository` owns storage behind an injectable trait.
//! - `customer::service` is the seam the HTTP layer talks to.

pub mod errors;
pub mod customer;

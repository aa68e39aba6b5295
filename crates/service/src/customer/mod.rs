//! Customer resource: repository abstraction plus the pass-through service.

pub mod repository;
pub mod service;

pub use repository::{CustomerRepository, InMemoryCustomerRepository};
pub use service::CustomerService;

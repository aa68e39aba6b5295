use std::sync::Arc;

use service::customer::{CustomerRepository, CustomerService, InMemoryCustomerRepository};

/// Shared handler state. Cloned per request; the store behind it is shared.
#[derive(Clone)]
pub struct ServerState {
    pub customers: Arc<CustomerService<dyn CustomerRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customers: Arc::new(CustomerService::new(repo)) }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCustomerRepository::new()))
    }
}

use async_trait::async_trait;
use models::Customer;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Storage abstraction for customer records.
///
/// Backends keep records in insertion order and never deduplicate ids.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Store an independent copy of `customer` and return it.
    async fn save(&self, customer: &Customer) -> Result<Customer, ServiceError>;
    /// First record whose `id` equals `id`, if any.
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError>;
    /// Snapshot of every record in insertion order.
    async fn list_all(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn count(&self) -> Result<usize, ServiceError>;
}

/// Process-lifetime store backed by an ordered `Vec` behind a single lock.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn save(&self, customer: &Customer) -> Result<Customer, ServiceError> {
        let stored = customer.clone();
        self.customers.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        Ok(self.customers.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.customers.read().await.clone())
    }

    async fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.customers.read().await.len())
    }
}

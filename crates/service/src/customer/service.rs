use std::sync::Arc;

use models::Customer;
use tracing::{debug, info, instrument};

use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Application service for customers. Adds no rules of its own; it is the
/// seam where a different repository backend gets injected.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Save a customer exactly as given.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::Customer;
    /// use service::customer::{CustomerService, InMemoryCustomerRepository};
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::new()));
    /// let saved = tokio_test::block_on(svc.save_customer(Customer::new(1, "Jude", "Street", 38))).unwrap();
    /// assert_eq!(saved.name, "Jude");
    /// ```
    #[instrument(skip(self, customer), fields(customer_id = customer.id))]
    pub async fn save_customer(&self, customer: Customer) -> Result<Customer, ServiceError> {
        let saved = self.repo.save(&customer).await?;
        info!(customer_id = saved.id, "customer_saved");
        Ok(saved)
    }

    /// Look a customer up by id; `Ok(None)` when nothing matches.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::Customer;
    /// use service::customer::{CustomerService, InMemoryCustomerRepository};
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::new()));
    /// tokio_test::block_on(svc.save_customer(Customer::new(4, "Ada", "Road", 36))).unwrap();
    /// let found = tokio_test::block_on(svc.find_by_id(4)).unwrap();
    /// assert_eq!(found.map(|c| c.name), Some("Ada".to_string()));
    /// assert!(tokio_test::block_on(svc.find_by_id(5)).unwrap().is_none());
    /// ```
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        let found = self.repo.find_by_id(id).await?;
        debug!(found = found.is_some(), "customer_lookup");
        Ok(found)
    }

    #[instrument(skip(self))]
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.repo.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<usize, ServiceError> { self.repo.count().await }
}

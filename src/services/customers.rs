//! Customer management service

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer, CustomerQuery, UpdateCustomer},
    repository::Repository,
};

#[derive(Clone)]
pub struct CustomersService {
    repository: Repository,
}

impl CustomersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search customers with filters
    pub async fn search(&self, query: &CustomerQuery) -> AppResult<Vec<Customer>> {
        self.repository.customers.search(query).await
    }

    /// Get customer by ID
    pub async fn get(&self, id: i32) -> AppResult<Customer> {
        self.repository.customers.get_by_id(id).await
    }

    /// Create a new customer unless an identical record already matches
    pub async fn create(&self, customer: CreateCustomer) -> AppResult<Customer> {
        let duplicates = self
            .repository
            .customers
            .search(&CustomerQuery {
                name: Some(customer.name.clone()),
                phone: customer.phone.clone(),
                email: customer.email.clone(),
                is_gold: customer.is_gold,
            })
            .await?;

        if !duplicates.is_empty() {
            return Err(AppError::Conflict(
                "A matching customer already exists".to_string(),
            ));
        }

        self.repository.customers.create(&customer).await
    }

    /// Update a customer, refusing updates that collide with another record
    pub async fn update(&self, id: i32, update: UpdateCustomer) -> AppResult<Customer> {
        let query = CustomerQuery {
            name: update.name.clone(),
            phone: update.phone.clone(),
            email: update.email.clone(),
            is_gold: update.is_gold,
        };

        if !query.is_empty() {
            let found = self.repository.customers.search(&query).await?;
            if found.iter().any(|c| c.id != id) {
                return Err(AppError::Conflict(
                    "A matching customer already exists".to_string(),
                ));
            }
        }

        self.repository.customers.update(id, &update).await
    }

    /// Delete a customer
    pub async fn delete(&self, id: i32) -> AppResult<Customer> {
        self.repository.customers.delete(id).await
    }
}

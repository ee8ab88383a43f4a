//! Customers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer, CustomerQuery, UpdateCustomer},
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get customer by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone, email, is_gold FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer with id {} not found", id)))
    }

    /// Search customers with filters, sorted by name. Name and phone match
    /// partially, email exactly, all case-insensitive.
    pub async fn search(&self, query: &CustomerQuery) -> AppResult<Vec<Customer>> {
        let mut conditions: Vec<String> = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(ref name) = query.name {
            binds.push(format!("%{}%", name.trim()));
            conditions.push(format!("name ILIKE ${}", binds.len()));
        }
        if let Some(ref phone) = query.phone {
            binds.push(format!("%{}%", phone.trim()));
            conditions.push(format!("phone ILIKE ${}", binds.len()));
        }
        if let Some(ref email) = query.email {
            binds.push(email.trim().to_string());
            conditions.push(format!("LOWER(email) = LOWER(${})", binds.len()));
        }
        if let Some(is_gold) = query.is_gold {
            conditions.push(format!("is_gold = {}", is_gold));
        }

        let where_clause = if conditions.is_empty() {
            "TRUE".to_string()
        } else {
            conditions.join(" AND ")
        };

        let sql = format!(
            "SELECT id, name, phone, email, is_gold FROM customers WHERE {} ORDER BY name",
            where_clause
        );

        let mut select = sqlx::query_as::<_, Customer>(&sql);
        for bind in &binds {
            select = select.bind(bind);
        }

        Ok(select.fetch_all(&self.pool).await?)
    }

    /// Create a new customer
    pub async fn create(&self, customer: &CreateCustomer) -> AppResult<Customer> {
        let created = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, phone, email, is_gold)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, phone, email, is_gold
            "#,
        )
        .bind(customer.name.trim())
        .bind(customer.phone.as_deref().map(str::trim))
        .bind(customer.email.as_deref().map(str::trim))
        .bind(customer.is_gold.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Update an existing customer, keeping unspecified fields
    pub async fn update(&self, id: i32, update: &UpdateCustomer) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = COALESCE($1, name),
                phone = COALESCE($2, phone),
                email = COALESCE($3, email),
                is_gold = COALESCE($4, is_gold)
            WHERE id = $5
            RETURNING id, name, phone, email, is_gold
            "#,
        )
        .bind(update.name.as_deref().map(str::trim))
        .bind(update.phone.as_deref().map(str::trim))
        .bind(update.email.as_deref().map(str::trim))
        .bind(update.is_gold)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer with id {} not found", id)))
    }

    /// Delete a customer, returning the removed record
    pub async fn delete(&self, id: i32) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            "DELETE FROM customers WHERE id = $1 RETURNING id, name, phone, email, is_gold",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer with id {} not found", id)))
    }
}

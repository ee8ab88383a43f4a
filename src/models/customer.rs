//! Customer model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Customer model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_gold: bool,
}

/// Create customer request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustomer {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 6, max = 20, message = "Invalid phone number"))]
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub is_gold: Option<bool>,
}

/// Update customer request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomer {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 6, max = 20, message = "Invalid phone number"))]
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub is_gold: Option<bool>,
}

/// Customer search filters: name and phone match partially, email exactly,
/// all case-insensitive
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct CustomerQuery {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_gold: Option<bool>,
}

impl CustomerQuery {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.is_gold.is_none()
    }
}

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::order::OrderStatus;
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for the customer name.
const CUSTOMER_NAME_MAX_LEN: usize = 128;
const CUSTOMER_NAME_MAX_LEN_VALIDATOR: u64 = CUSTOMER_NAME_MAX_LEN as u64;

/// Maximum allowed length for the customer phone number.
const CUSTOMER_PHONE_MAX_LEN: usize = 32;
const CUSTOMER_PHONE_MAX_LEN_VALIDATOR: u64 = CUSTOMER_PHONE_MAX_LEN as u64;

/// Result type returned by the order form helpers.
pub type OrderFormResult<T> = Result<T, OrderFormError>;

/// Errors that can occur while processing order forms.
#[derive(Debug, Error)]
pub enum OrderFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The customer name is empty after sanitization.
    #[error("customer name cannot be empty")]
    EmptyCustomerName,
    /// The phone number contains no digits after sanitization.
    #[error("customer phone must contain digits")]
    InvalidPhone,
    /// The checkout contains no items.
    #[error("order must contain at least one item")]
    EmptyCart,
    /// An item was submitted with a non-positive quantity.
    #[error("item quantity must be at least 1")]
    InvalidQuantity,
    /// The submitted status string is not a known order status.
    #[error("{0}")]
    UnknownStatus(String),
}

/// One line of the checkout payload.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutItemForm {
    /// Product the customer is ordering.
    pub product_id: i32,
    /// Requested quantity.
    pub quantity: i32,
}

/// JSON payload submitted at checkout.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutForm {
    /// Customer name.
    #[validate(length(min = 1, max = CUSTOMER_NAME_MAX_LEN_VALIDATOR))]
    pub customer_name: String,
    /// Customer phone number.
    #[validate(length(min = 1, max = CUSTOMER_PHONE_MAX_LEN_VALIDATOR))]
    pub customer_phone: String,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Items the customer is ordering.
    #[validate(nested)]
    pub items: Vec<CheckoutItemForm>,
}

/// Sanitized checkout data ready for the service layer.
#[derive(Debug)]
pub struct Checkout {
    pub customer_name: String,
    pub customer_phone: String,
    pub notes: Option<String>,
    pub items: Vec<CheckoutLine>,
}

/// A sanitized checkout line.
#[derive(Debug)]
pub struct CheckoutLine {
    pub product_id: i32,
    pub quantity: i32,
}

impl CheckoutForm {
    /// Validates and sanitizes the payload into checkout data.
    pub fn into_checkout(self) -> OrderFormResult<Checkout> {
        self.validate()?;

        let customer_name = sanitize_inline_text(&self.customer_name);
        if customer_name.is_empty() {
            return Err(OrderFormError::EmptyCustomerName);
        }

        let customer_phone = sanitize_inline_text(&self.customer_phone);
        if !customer_phone.chars().any(|ch| ch.is_ascii_digit()) {
            return Err(OrderFormError::InvalidPhone);
        }

        let notes = self
            .notes
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        if self.items.is_empty() {
            return Err(OrderFormError::EmptyCart);
        }

        let mut items = Vec::with_capacity(self.items.len());
        for item in self.items {
            if item.quantity < 1 {
                return Err(OrderFormError::InvalidQuantity);
            }
            items.push(CheckoutLine {
                product_id: item.product_id,
                quantity: item.quantity,
            });
        }

        Ok(Checkout {
            customer_name,
            customer_phone,
            notes,
            items,
        })
    }
}

/// JSON payload for moving an order to a new status.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusForm {
    /// New lifecycle status (`pending`, `confirmed`, `delivered`, `cancelled`).
    pub status: String,
}

impl UpdateOrderStatusForm {
    /// Parses the submitted status string.
    pub fn parsed_status(&self) -> OrderFormResult<OrderStatus> {
        self.status
            .trim()
            .parse()
            .map_err(OrderFormError::UnknownStatus)
    }
}

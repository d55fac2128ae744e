//! # Validation Module
//!
//! Input validation for the admin forms and the QR-menu checkout.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  └── Required fields, number inputs                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Business rules (non-negative prices, table counts, lengths)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repositories                                                 │
//! │  └── Existence checks (owning restaurant, order id)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for the table count of one restaurant.
pub const MAX_TABLES: u32 = 200;

/// Highest menu price accepted (₹1,00,00,000). A full cart of dishes at
/// this price still fits in a [`Money`].
pub const MAX_PRICE: Money = Money::from_major(10_000_000);

fn required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a restaurant name (required, at most 100 characters).
///
/// ```rust
/// use resto_core::validation::validate_restaurant_name;
///
/// assert!(validate_restaurant_name("Spice Garden").is_ok());
/// assert!(validate_restaurant_name("   ").is_err());
/// ```
pub fn validate_restaurant_name(name: &str) -> ValidationResult<()> {
    required("name", name, 100)
}

/// Validates a dish name (required, at most 200 characters).
pub fn validate_menu_item_name(name: &str) -> ValidationResult<()> {
    required("name", name, 200)
}

/// Validates a menu category. Blank is allowed; the form falls back to
/// the default category.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().chars().count() > 50 {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: 50,
        });
    }
    Ok(())
}

pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    required("customer name", name, 100)
}

pub fn validate_table_label(label: &str) -> ValidationResult<()> {
    required("table", label, 50)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (complimentary items)
/// - At most [`MAX_PRICE`]
///
/// ```rust
/// use resto_core::money::Money;
/// use resto_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_major(350)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_major(-1)).is_err());
/// assert!(validate_price(Money::from_minor(i64::MAX / 2 + 1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE.minor(),
        });
    }
    Ok(())
}

/// Validates the table count on the registration form (1..=200).
pub fn validate_table_count(count: u32) -> ValidationResult<()> {
    if count == 0 || count > MAX_TABLES {
        return Err(ValidationError::OutOfRange {
            field: "tables".to_string(),
            min: 1,
            max: MAX_TABLES as i64,
        });
    }
    Ok(())
}

/// Validates a line quantity (1..=MAX_ITEM_QUANTITY).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_restaurant_name() {
        assert!(validate_restaurant_name("Urban Burger Co.").is_ok());
        assert!(validate_restaurant_name("").is_err());
        assert!(validate_restaurant_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_menu_item_name() {
        assert!(validate_menu_item_name("Paneer Tikka").is_ok());
        assert!(matches!(
            validate_menu_item_name("  "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("").is_ok());
        assert!(validate_category("Breads").is_ok());
        assert!(validate_category(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_price_bounds() {
        assert!(validate_price(MAX_PRICE).is_ok());
        assert!(validate_price(MAX_PRICE + Money::from_minor(1)).is_err());
        assert!(validate_price(Money::from_minor(-1)).is_err());
    }

    #[test]
    fn test_validate_table_count() {
        assert!(validate_table_count(1).is_ok());
        assert!(validate_table_count(200).is_ok());
        assert!(validate_table_count(0).is_err());
        assert!(validate_table_count(201).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_labels() {
        assert!(validate_table_label("Table 1").is_ok());
        assert!(validate_table_label("").is_err());
        assert!(validate_customer_name("Guest User").is_ok());
        assert!(validate_customer_name(" ").is_err());
    }
}

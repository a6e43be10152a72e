//! Field checks applied before a product is written.
//!
//! Creation and update keep their own checks. Both reject an empty name and a
//! missing or zero price; negative prices pass.

use crate::models::{Product, ProductInput};

fn is_present(price: Option<f64>) -> Option<f64> {
    price.filter(|value| !value.is_nan() && *value != 0.0)
}

/// Checks a product about to be appended. `id` is the freshly generated one.
pub fn validate_new(id: u32, input: &ProductInput) -> Option<Product> {
    if id == 0 || input.name.is_empty() {
        return None;
    }

    let price = is_present(input.price)?;

    Some(Product::new(id, input.name.clone(), price))
}

/// Checks the replacement for an existing record.
///
/// `id` has already been matched against the registry, so the id check cannot
/// fail here; it stays so the update contract reads on its own.
pub fn validate_update(id: u32, input: &ProductInput) -> Option<Product> {
    if id == 0 {
        return None;
    }

    if input.name.is_empty() {
        return None;
    }

    let price = is_present(input.price)?;

    Some(Product::new(id, input.name.clone(), price))
}

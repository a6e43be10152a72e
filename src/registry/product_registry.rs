use std::{fmt, sync::Arc};

use parking_lot::RwLock;

use super::{INVALID_BODY_MESSAGE, NOT_FOUND_MESSAGE, validation};
use crate::models::{Product, ProductInput};

#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    NotFound(u32),
    InvalidInput,
    /// Creation derives the next id from the last record, so it needs one.
    EmptyRegistry,
}

impl RegistryError {
    /// Text shown to API clients and in flash messages.
    pub fn user_message(&self) -> &'static str {
        match self {
            RegistryError::NotFound(_) => NOT_FOUND_MESSAGE,
            RegistryError::InvalidInput => INVALID_BODY_MESSAGE,
            RegistryError::EmptyRegistry => "Registro de produtos vazio",
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound(id) => write!(f, "product {} not found", id),
            RegistryError::InvalidInput => write!(f, "invalid product fields"),
            RegistryError::EmptyRegistry => {
                write!(f, "cannot derive next product id from an empty registry")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// In-memory, insertion-ordered product collection.
///
/// Cloning yields another handle to the same collection. Every operation runs
/// under a single lock acquisition, so operations never interleave.
#[derive(Debug, Clone, Default)]
pub struct ProductRegistry {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductRegistry {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Registry preloaded with the three demo products.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "Produto 1", 10.0),
            Product::new(2, "Produto 2", 20.0),
            Product::new(3, "Produto 3", 30.0),
        ])
    }

    pub fn list(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    pub fn find_by_id(&self, id: u32) -> Result<Product> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    pub fn create(&self, input: ProductInput) -> Result<Product> {
        let mut products = self.products.write();

        let last = products.last().ok_or(RegistryError::EmptyRegistry)?;
        let id = last.id.checked_add(1).unwrap_or(0);

        let product = validation::validate_new(id, &input).ok_or(RegistryError::InvalidInput)?;
        products.push(product.clone());

        tracing::info!(id = product.id, "Product created");

        Ok(product)
    }

    pub fn update(&self, id: u32, input: ProductInput) -> Result<Product> {
        let mut products = self.products.write();

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        tracing::debug!(id, name = %input.name, price = ?input.price, "Updating product");

        let updated =
            validation::validate_update(id, &input).ok_or(RegistryError::InvalidInput)?;
        products[index] = updated.clone();

        Ok(updated)
    }

    /// Removes the product, keeping the order of the remaining ones.
    pub fn delete(&self, id: u32) -> Result<Product> {
        let mut products = self.products.write();

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        let removed = products.remove(index);
        tracing::info!(id, "Product removed");

        Ok(removed)
    }
}

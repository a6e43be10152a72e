mod product_registry;
pub mod validation;

pub use product_registry::{ProductRegistry, RegistryError};

pub const NOT_FOUND_MESSAGE: &str = "Produto não encontrado";
pub const INVALID_BODY_MESSAGE: &str = "Corpo da requisição inválido";

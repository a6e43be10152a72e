use serde::{Deserialize, Serialize};

use crate::utils::parse::parse_float_prefix;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// `preco` arrives as text from HTML forms and may be a number in JSON bodies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    pub fn to_price(&self) -> Option<f64> {
        match self {
            PriceInput::Number(value) => Some(*value),
            PriceInput::Text(text) => parse_float_prefix(text),
        }
    }
}

/// `nome` is normally text, but JSON clients may send any scalar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NameInput {
    Text(String),
    Number(f64),
    Flag(bool),
}

impl NameInput {
    /// Text form of the name; falsy scalars (`0`, `false`) come out empty.
    pub fn into_name(self) -> String {
        match self {
            NameInput::Text(text) => text,
            NameInput::Number(value) if value == 0.0 || value.is_nan() => String::new(),
            NameInput::Number(value) => value.to_string(),
            NameInput::Flag(true) => "true".to_string(),
            NameInput::Flag(false) => String::new(),
        }
    }
}

/// Body of `POST /produtos` and `PUT /produtos/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    pub nome: Option<NameInput>,
    pub preco: Option<PriceInput>,
}

impl ProductForm {
    pub fn into_input(self) -> ProductInput {
        ProductInput {
            name: self.nome.map(NameInput::into_name).unwrap_or_default(),
            price: self.preco.as_ref().and_then(PriceInput::to_price),
        }
    }
}

/// Coerced product fields, not yet validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub price: Option<f64>,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price_text: &str) -> Self {
        Self {
            name: name.into(),
            price: parse_float_prefix(price_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_wire_names() {
        let value = serde_json::to_value(Product::new(2, "Caneta", 5.5)).unwrap();
        assert_eq!(value, serde_json::json!({ "id": 2, "nome": "Caneta", "preco": 5.5 }));
    }

    #[test]
    fn json_price_may_be_number_or_text() {
        let numeric: ProductForm =
            serde_json::from_str(r#"{ "nome": "Caneta", "preco": 5.5 }"#).unwrap();
        assert_eq!(numeric.into_input().price, Some(5.5));

        let textual: ProductForm =
            serde_json::from_str(r#"{ "nome": "Caneta", "preco": "5.50" }"#).unwrap();
        assert_eq!(textual.into_input().price, Some(5.5));
    }

    #[test]
    fn missing_fields_become_empty_input() {
        let form: ProductForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.into_input(), ProductInput::default());
    }

    #[test]
    fn scalar_names_are_taken_as_text() {
        let numeric: ProductForm =
            serde_json::from_str(r#"{ "nome": 123, "preco": "5" }"#).unwrap();
        assert_eq!(numeric.into_input().name, "123");

        let falsy: ProductForm = serde_json::from_str(r#"{ "nome": 0, "preco": "5" }"#).unwrap();
        assert_eq!(falsy.into_input().name, "");

        let flag: ProductForm = serde_json::from_str(r#"{ "nome": false }"#).unwrap();
        assert_eq!(flag.into_input().name, "");
    }

    #[test]
    fn unparseable_price_text_is_absent() {
        assert_eq!(ProductInput::new("Caneta", "abc").price, None);
    }
}

//! Server-rendered HTML pages.

pub mod helpers;
mod layout;
mod pages;

use crate::{
    error::{AppError, Result},
    flash::FlashMessages,
    models::Product,
};

pub const INDEX_TEMPLATE: &str = "pages/index";
pub const NEW_PRODUCT_TEMPLATE: &str = "pages/novo-produto";

/// Data handed to a template.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    pub title: String,
    pub produtos: Option<Vec<Product>>,
    pub url_atual: String,
    pub flash: FlashMessages,
}

impl ViewContext {
    pub fn new(title: impl Into<String>, url_atual: impl Into<String>, flash: FlashMessages) -> Self {
        Self {
            title: title.into(),
            produtos: None,
            url_atual: url_atual.into(),
            flash,
        }
    }

    pub fn with_products(mut self, produtos: Vec<Product>) -> Self {
        self.produtos = Some(produtos);
        self
    }
}

/// Renders the named template inside the main layout.
pub fn render(template: &str, ctx: &ViewContext) -> Result<String> {
    let body = match template {
        INDEX_TEMPLATE => pages::index(ctx),
        NEW_PRODUCT_TEMPLATE => pages::new_product(),
        other => {
            return Err(AppError::InternalError(format!(
                "Unknown template: {}",
                other
            )));
        }
    };

    Ok(layout::main(ctx, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_is_an_error() {
        let ctx = ViewContext::default();
        assert!(matches!(
            render("pages/missing", &ctx),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn index_lists_products_with_formatted_prices() {
        let ctx = ViewContext::new("Minha página", "/", FlashMessages::default())
            .with_products(vec![Product::new(1, "Produto 1", 10.0)]);

        let html = render(INDEX_TEMPLATE, &ctx).unwrap();

        assert!(html.contains("<title>Minha página</title>"));
        assert!(html.contains("Produto 1"));
        assert!(html.contains("R$ 10,00"));
    }

    #[test]
    fn index_without_products_shows_empty_state() {
        let ctx = ViewContext::new("Minha página", "/", FlashMessages::default());
        let html = render(INDEX_TEMPLATE, &ctx).unwrap();
        assert!(html.contains("Nenhum produto cadastrado"));
    }

    #[test]
    fn flash_messages_are_rendered_escaped() {
        let flash = FlashMessages {
            success: vec!["Produto salvo com sucesso!".to_string()],
            error: vec!["<script>".to_string()],
        };
        let ctx = ViewContext::new("Novo produto", "/novo-produto", flash);

        let html = render(NEW_PRODUCT_TEMPLATE, &ctx).unwrap();

        assert!(html.contains("Produto salvo com sucesso!"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn current_page_link_is_marked_active() {
        let ctx = ViewContext::new("Novo produto", "/novo-produto", FlashMessages::default());
        let html = render(NEW_PRODUCT_TEMPLATE, &ctx).unwrap();
        assert!(html.contains(r#"<a class="nav-link active" href="/novo-produto">"#));
        assert!(html.contains(r#"<a class="nav-link" href="/">"#));
    }
}

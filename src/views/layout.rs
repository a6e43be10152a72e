use std::fmt::Write;

use super::{
    ViewContext,
    helpers::{eq, escape_html},
};

const NAV_LINKS: [(&str, &str); 2] = [("/", "Produtos"), ("/novo-produto", "Novo produto")];

fn nav(url_atual: &str) -> String {
    let mut html = String::new();
    for (href, label) in NAV_LINKS {
        let class = if eq(href, url_atual) {
            "nav-link active"
        } else {
            "nav-link"
        };
        let _ = writeln!(
            html,
            r#"        <a class="{}" href="{}">{}</a>"#,
            class, href, label
        );
    }
    html
}

fn alerts(kind: &str, messages: &[String]) -> String {
    messages
        .iter()
        .map(|message| {
            format!(
                "    <div class=\"alert alert-{}\" role=\"alert\">{}</div>\n",
                kind,
                escape_html(message)
            )
        })
        .collect()
}

/// Wraps a page body with the shared head, navigation and flash banners.
pub fn main(ctx: &ViewContext, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/css/style.css">
</head>
<body>
    <nav class="navbar">
{nav}    </nav>
    <main class="container">
{success}{error}{body}
    </main>
    <script src="/js/app.js" defer></script>
</body>
</html>
"#,
        title = escape_html(&ctx.title),
        nav = nav(&ctx.url_atual),
        success = alerts("success", &ctx.flash.success),
        error = alerts("danger", &ctx.flash.error),
        body = body,
    )
}

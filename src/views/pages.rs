use super::{
    ViewContext,
    helpers::{escape_html, format_price},
};

pub fn index(ctx: &ViewContext) -> String {
    let produtos = ctx.produtos.as_deref().unwrap_or_default();

    if produtos.is_empty() {
        return r#"    <h1>Produtos</h1>
    <p class="empty">Nenhum produto cadastrado.</p>"#
            .to_string();
    }

    let rows: String = produtos
        .iter()
        .map(|p| {
            format!(
                r#"            <tr data-id="{id}">
                <td>{id}</td>
                <td class="nome">{nome}</td>
                <td class="preco">{preco}</td>
                <td>
                    <button type="button" class="btn-editar" data-id="{id}">Editar</button>
                    <button type="button" class="btn-remover" data-id="{id}">Remover</button>
                </td>
            </tr>
"#,
                id = p.id,
                nome = escape_html(&p.name),
                preco = format_price(p.price),
            )
        })
        .collect();

    format!(
        r#"    <h1>Produtos</h1>
    <table class="produtos">
        <thead>
            <tr><th>#</th><th>Nome</th><th>Preço</th><th></th></tr>
        </thead>
        <tbody>
{}        </tbody>
    </table>"#,
        rows
    )
}

pub fn new_product() -> String {
    r#"    <h1>Novo produto</h1>
    <form method="post" action="/produtos" class="form-produto">
        <label for="nome">Nome</label>
        <input type="text" id="nome" name="nome" required>
        <label for="preco">Preço</label>
        <input type="number" id="preco" name="preco" step="0.01" min="0.01" required>
        <button type="submit">Salvar</button>
    </form>"#
        .to_string()
}

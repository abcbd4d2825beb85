// src/messaging/compose.rs

use crate::models::document::Document;

/// Monta a mensagem final: o corpo escrito pelo usuário seguido de uma
/// linha `nome: link` por documento selecionado, uma linha em branco
/// entre as duas partes. N documentos = exatamente N linhas anexadas.
pub fn compose_message(body: &str, documents: &[Document]) -> String {
    if documents.is_empty() {
        return body.to_string();
    }

    let mut message = String::from(body);
    message.push_str("\n\n");
    for (i, doc) in documents.iter().enumerate() {
        if i > 0 {
            message.push('\n');
        }
        message.push_str(&format!("{}: {}", doc.name, doc.url));
    }
    message
}

/// Variante HTML para o parâmetro `message_html` do template de e-mail.
pub fn compose_html(message: &str) -> String {
    message.replace('\n', "<br>")
}

// src/messaging/whatsapp.rs

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Mesmo conjunto que o encodeURIComponent deixa passar.
const QUERY_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Normalização do telefone: remove apenas espaços em branco.
/// Qualquer outro caractere (inclusive o "+") fica como está.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Monta o deep-link `https://wa.me/<telefone>?text=<mensagem>`.
/// Abrir o link num novo contexto de navegação é papel da UI que nos
/// embute; o envio em si acontece no app externo.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_phone(phone),
        utf8_percent_encode(message, QUERY_TEXT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_whitespace_only() {
        assert_eq!(normalize_phone("+34 600 123 456"), "+34600123456");
        assert_eq!(normalize_phone("600-123-456"), "600-123-456");
    }

    #[test]
    fn link_encodes_the_message_text() {
        let link = whatsapp_link("+34 600 123 456", "Hola María: contrato & planos");
        assert!(link.starts_with("https://wa.me/+34600123456?text="));
        assert!(link.contains("Hola%20Mar%C3%ADa%3A%20contrato%20%26%20planos"));
    }
}

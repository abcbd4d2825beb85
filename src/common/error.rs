use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Nada aqui é fatal para o processo: cada falha fica restrita à
// ação do usuário que a disparou.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Pré-condição do usuário não atendida (ex: despacho sem documentos
    // selecionados). Checada ANTES de qualquer chamada remota.
    #[error("Pré-condição não atendida: {0}")]
    Precondition(String),

    // Rejeições do store remoto. A mensagem do provedor é repassada
    // literalmente para quem chamou.
    #[error("Violação de unicidade: {0}")]
    UniqueConstraintViolation(String),

    #[error("Registro não encontrado")]
    NotFound,

    #[error("Permissão negada: {0}")]
    PermissionDenied(String),

    #[error("Rejeição do store remoto: {0}")]
    RemoteRejection(String),

    // Falha no envio de e-mail, com o diagnóstico do provedor quando houver.
    #[error("Falha no envio: {0}")]
    SendFailure(String),

    #[error("Sessão ausente ou expirada")]
    Unauthenticated,

    // Erros de transporte (rede, TLS, timeout)
    #[error("Erro de rede: {0}")]
    HttpError(#[from] reqwest::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Mensagem apresentável ao usuário (alert bloqueante ou banner inline).
    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationError(_) => "Um ou mais campos são inválidos.".to_string(),
            AppError::Precondition(msg) => msg.clone(),
            AppError::UniqueConstraintViolation(msg)
            | AppError::PermissionDenied(msg)
            | AppError::RemoteRejection(msg)
            | AppError::SendFailure(msg) => msg.clone(),
            AppError::NotFound => "Registro não encontrado.".to_string(),
            AppError::Unauthenticated => "Sessão ausente ou expirada.".to_string(),

            // Todos os outros (HttpError, InternalServerError) viram mensagem
            // genérica. O `tracing` loga o detalhe que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro interno: {}", e);
                "Ocorreu um erro inesperado.".to_string()
            }
        }
    }
}

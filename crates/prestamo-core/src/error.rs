use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrestamoError {
    /// Raised by the input validator, always before any numeric work.
    /// Carries one message per violated constraint, in field declaration
    /// order; never empty.
    #[error("Petición inválida: {}", .messages.join("; "))]
    Validation { messages: Vec<String> },
}

impl PrestamoError {
    /// The ordered list of violated-constraint messages.
    pub fn messages(&self) -> &[String] {
        match self {
            PrestamoError::Validation { messages } => messages,
        }
    }
}

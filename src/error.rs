//! Tipos de error del visor.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Fallos al hablar con los servicios de contenido, ejecución o IA.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// La petición no llegó a completarse (red, DNS, timeout...).
    #[error("{0}")]
    Transport(String),

    /// Respuesta no-2xx.
    #[error("HTTP {status} ({status_text})")]
    Http { status: u16, status_text: String },

    /// El JSON no tiene la forma esperada.
    #[error("formato inválido: {0}")]
    Format(String),

    /// Respuesta bien formada pero vacía.
    #[error("{0} está vacío")]
    Empty(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Format(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no se pudo leer {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuración YAML inválida: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_has_status_and_text() {
        let err = FetchError::Http {
            status: 404,
            status_text: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404 (Not Found)");
    }

    #[test]
    fn json_errors_become_format_failures() {
        let err: FetchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FetchError::Format(_)));
    }
}

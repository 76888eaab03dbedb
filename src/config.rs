use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_CONFIG_FILE: &str = "lesson_viewer.yaml";
const CONFIG_PATH_VAR: &str = "LESSON_VIEWER_CONFIG";
const BASE_URL_VAR: &str = "LESSON_VIEWER_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Origen del servidor de contenidos, `/run` y `/ask_ai`
    pub base_url: String,
    pub editor_theme: String,
    pub editor_language: String,
    /// Texto junto al botón de enviar del chat
    pub ai_hint: String,
    pub request_timeout_secs: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            editor_theme: "github_dark".to_string(),
            editor_language: "python".to_string(),
            ai_hint: "Limitado a 10 preguntas / 5 minutos".to_string(),
            request_timeout_secs: 30,
        }
    }
}

fn normalize_value(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ViewerConfig {
    /// Defaults → fichero YAML (si existe) → variables de entorno.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = env(CONFIG_PATH_VAR)
            .and_then(normalize_value)
            .map(PathBuf::from)
            .or_else(|| {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                default.exists().then(|| default.to_path_buf())
            });

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(url) = env(BASE_URL_VAR).and_then(normalize_value) {
            config.base_url = url;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("[config] cargando {}", path.display());
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Une `base_url` con una ruta absoluta sin duplicar barras.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

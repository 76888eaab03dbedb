use crate::app::dispatch::RunRequest;
use crate::code_utils::{plain_syntax, python_syntax};
use crate::config::ViewerConfig;
use crate::error::{FetchError, Result};
use crate::transport::HttpReply;
use egui_code_editor::{ColorTheme, Syntax};
use serde::Deserialize;

pub const NO_OUTPUT: &str = "No se recibió salida";
pub const RUN_ERROR_PREFIX: &str = "❌ Error al ejecutar: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorLanguage {
    Python,
    Plain,
}

impl EditorLanguage {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => EditorLanguage::Python,
            _ => EditorLanguage::Plain,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorTheme {
    GithubDark,
    GithubLight,
    Gruvbox,
    Sonokai,
}

impl EditorTheme {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "github_light" | "light" => EditorTheme::GithubLight,
            "gruvbox" => EditorTheme::Gruvbox,
            "sonokai" | "monokai" => EditorTheme::Sonokai,
            _ => EditorTheme::GithubDark,
        }
    }
}

/// Lo único que el visor usa del editor: leer el texto, modo de lenguaje y tema.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub text: String,
    language: EditorLanguage,
    theme: EditorTheme,
}

impl EditorState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            text: String::new(),
            language: EditorLanguage::from_name(&config.editor_language),
            theme: EditorTheme::from_name(&config.editor_theme),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_language(&mut self, language: EditorLanguage) {
        self.language = language;
    }

    pub fn set_theme(&mut self, theme: EditorTheme) {
        self.theme = theme;
    }

    pub fn syntax(&self) -> Syntax {
        match self.language {
            EditorLanguage::Python => python_syntax(),
            EditorLanguage::Plain => plain_syntax(),
        }
    }

    pub fn color_theme(&self) -> ColorTheme {
        match self.theme {
            EditorTheme::GithubDark => ColorTheme::GITHUB_DARK,
            EditorTheme::GithubLight => ColorTheme::GITHUB_LIGHT,
            EditorTheme::Gruvbox => ColorTheme::GRUVBOX,
            EditorTheme::Sonokai => ColorTheme::SONOKAI,
        }
    }
}

#[derive(Deserialize)]
struct RunResponse {
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Texto del panel de salida para una respuesta de `/run`.
pub fn render_run_reply(result: Result<HttpReply>) -> String {
    let reply = match result {
        Ok(reply) => reply,
        Err(err) => return format!("{RUN_ERROR_PREFIX}{err}"),
    };

    match serde_json::from_str::<RunResponse>(&reply.body) {
        Ok(body) => body
            .output
            .filter(|s| !s.is_empty())
            .or(body.error.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| NO_OUTPUT.to_string()),
        Err(_) if !reply.is_success() => {
            let err = FetchError::Http {
                status: reply.status,
                status_text: reply.status_text,
            };
            format!("{RUN_ERROR_PREFIX}{err}")
        }
        Err(err) => format!("{RUN_ERROR_PREFIX}{}", FetchError::from(err)),
    }
}

/// Editor + salida. Una sola ejecución en vuelo a la vez.
#[derive(Clone, Debug, PartialEq)]
pub struct Playground {
    pub editor: EditorState,
    pub output: String,
    ready: bool,
    running: bool,
    generation: u64,
}

impl Playground {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            editor: EditorState::new(config),
            output: String::new(),
            ready: false,
            running: false,
            generation: 0,
        }
    }

    /// Al entrar en "Ejercicios" el editor se monta de nuevo, vacío.
    pub fn setup(&mut self, config: &ViewerConfig) {
        self.reset();
        self.editor.set_language(EditorLanguage::from_name(&config.editor_language));
        self.editor.set_theme(EditorTheme::from_name(&config.editor_theme));
        self.ready = true;
    }

    /// Olvida el editor y cualquier ejecución pendiente.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.editor.text.clear();
        self.output.clear();
        self.running = false;
        self.ready = false;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// El código vacío también se envía: valida el backend.
    pub fn run(&mut self) -> Option<RunRequest> {
        if self.running {
            log::debug!("[playground] ya hay una ejecución en curso");
            return None;
        }
        self.running = true;
        Some(RunRequest {
            generation: self.generation,
            code: self.editor.text().to_string(),
        })
    }

    /// `false` si la respuesta pertenece a un editor anterior.
    pub fn apply(&mut self, generation: u64, result: Result<HttpReply>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.running = false;
        self.output = render_run_reply(result);
        true
    }

    /// Solo borra la salida; el código se queda.
    pub fn clear(&mut self) {
        self.output.clear();
    }
}

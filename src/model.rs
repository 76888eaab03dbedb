use serde::Deserialize;

/// Entrada del índice de lecciones (`index.json`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "theoryHTML", default)]
    pub theory_html: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

impl Lesson {
    /// Título a mostrar; si el JSON no lo trae usamos "Módulo N".
    pub fn display_title(&self, requested_id: u32) -> String {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t.to_string(),
            _ => format!("Módulo {requested_id}"),
        }
    }

    pub fn display_id(&self, requested_id: u32) -> u32 {
        self.id.filter(|id| *id > 0).unwrap_or(requested_id)
    }
}

pub const NO_SOLUTION: &str = "No hay solución disponible";

/// Un ejercicio es o bien un enunciado suelto o un registro con solución opcional.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Exercise {
    Prompt(String),
    Structured {
        question: String,
        #[serde(default)]
        solution: Option<String>,
    },
}

impl Exercise {
    pub fn prompt(&self) -> &str {
        match self {
            Exercise::Prompt(text) => text,
            Exercise::Structured { question, .. } => question,
        }
    }

    /// Nunca devuelve vacío: sin solución se muestra [`NO_SOLUTION`].
    pub fn solution_text(&self) -> &str {
        match self {
            Exercise::Structured {
                solution: Some(s), ..
            } if !s.is_empty() => s,
            _ => NO_SOLUTION,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Quiz {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Etiqueta del selector: el título o "Quiz N" (1-based).
    pub fn label(&self, idx: usize) -> String {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t.to_string(),
            _ => format!("Quiz {}", idx + 1),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// Índice 0-based de la opción correcta
    pub answer: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Theory,
    Examples,
    Exercises,
    Quiz,
    Ai,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Theory, Tab::Examples, Tab::Exercises, Tab::Quiz, Tab::Ai];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Theory => "Teoría",
            Tab::Examples => "Ejemplos",
            Tab::Exercises => "Ejercicios",
            Tab::Quiz => "Quiz",
            Tab::Ai => "Asistente IA",
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Theory
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Home,
    Lesson,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Lesson
    }
}

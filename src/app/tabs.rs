use super::*;
use crate::app::quiz::QuizForm;
use crate::model::{Exercise, Quiz};

pub const NO_THEORY: &str = "No hay contenido teórico";
pub const NO_EXAMPLES: &str = "No hay ejemplos";
pub const NO_EXERCISES: &str = "No hay ejercicios";
pub const NO_QUIZ: &str = "No hay quiz";

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseItem {
    pub prompt: String,
    pub solution: String,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseList {
    pub items: Vec<ExerciseItem>,
}

impl ExerciseList {
    pub fn new(exercises: &[Exercise]) -> Self {
        let items = exercises
            .iter()
            .map(|ex| ExerciseItem {
                prompt: ex.prompt().to_string(),
                solution: ex.solution_text().to_string(),
                revealed: false,
            })
            .collect();
        Self { items }
    }

    /// Solo afecta al ejercicio `idx`.
    pub fn toggle(&mut self, idx: usize) {
        if let Some(item) = self.items.get_mut(idx) {
            item.revealed = !item.revealed;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizPanel {
    pub quizzes: Vec<Quiz>,
    pub selectors: Vec<String>,
    pub active: usize,
    pub form: QuizForm,
}

impl QuizPanel {
    /// `None` si no hay quizzes.
    pub fn new(quizzes: Vec<Quiz>) -> Option<Self> {
        let first = quizzes.first()?.clone();
        let selectors = quizzes
            .iter()
            .enumerate()
            .map(|(i, q)| q.label(i))
            .collect();
        Some(Self {
            quizzes,
            selectors,
            active: 0,
            form: QuizForm::new(first),
        })
    }

    /// Cambiar de quiz descarta las respuestas en curso.
    pub fn select(&mut self, idx: usize) {
        if let Some(quiz) = self.quizzes.get(idx) {
            self.active = idx;
            self.form = QuizForm::new(quiz.clone());
        }
    }

    pub fn title(&self) -> &str {
        &self.selectors[self.active]
    }
}

/// Lo que pinta la pestaña activa.
#[derive(Debug, Clone, PartialEq)]
pub enum TabView {
    /// Aún no hay lección cargada
    Empty,
    Placeholder(&'static str),
    Theory(String),
    Examples(Vec<String>),
    Exercises(ExerciseList),
    Quiz(QuizPanel),
    Chat,
}

impl Default for TabView {
    fn default() -> Self {
        TabView::Empty
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabController {
    active: Tab,
    view: TabView,
}

impl TabController {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn view(&self) -> &TabView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut TabView {
        &mut self.view
    }

    /// Seleccionar siempre vuelve a ejecutar la acción de entrada, aunque sea la misma pestaña.
    pub fn select(&mut self, tab: Tab, lesson: Option<&Lesson>) {
        self.active = tab;
        self.view = match lesson {
            Some(lesson) => entry_view(tab, lesson),
            None => TabView::Empty,
        };
    }
}

fn entry_view(tab: Tab, lesson: &Lesson) -> TabView {
    match tab {
        Tab::Theory => match lesson.theory_html.as_deref() {
            Some(markup) if !markup.trim().is_empty() => TabView::Theory(markup.to_string()),
            _ => TabView::Placeholder(NO_THEORY),
        },
        Tab::Examples if lesson.examples.is_empty() => TabView::Placeholder(NO_EXAMPLES),
        Tab::Examples => TabView::Examples(lesson.examples.clone()),
        Tab::Exercises if lesson.exercises.is_empty() => TabView::Placeholder(NO_EXERCISES),
        Tab::Exercises => TabView::Exercises(ExerciseList::new(&lesson.exercises)),
        Tab::Quiz => match QuizPanel::new(lesson.quizzes.clone()) {
            Some(panel) => TabView::Quiz(panel),
            None => TabView::Placeholder(NO_QUIZ),
        },
        Tab::Ai => TabView::Chat,
    }
}

impl LessonApp {
    /// Cambio de pestaña por el usuario (o re-render tras cargar la lección).
    pub fn select_tab(&mut self, tab: Tab) {
        let lesson = match &self.lesson {
            LessonStatus::Loaded(lesson) => Some(lesson),
            _ => None,
        };
        self.tabs.select(tab, lesson);
        if lesson.is_none() {
            return;
        }

        match tab {
            // El editor vive junto a los ejercicios
            Tab::Exercises => self.playground.setup(&self.config),
            Tab::Ai => self.chat.reset(self.nav.current),
            _ => {}
        }
    }

    pub fn select_quiz(&mut self, idx: usize) {
        if let TabView::Quiz(panel) = self.tabs.view_mut() {
            panel.select(idx);
        }
    }

    pub fn toggle_solution(&mut self, idx: usize) {
        if let TabView::Exercises(list) = self.tabs.view_mut() {
            list.toggle(idx);
        }
    }
}

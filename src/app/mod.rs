use crate::config::ViewerConfig;
use crate::model::{AppState, Lesson, Tab};
use crate::transport::Transport;
use std::sync::Arc;

// Submódulos
pub mod chat;
pub mod dispatch;
pub mod home;
pub mod navigation;
pub mod playground;
pub mod quiz;
pub mod tabs;

use chat::ChatSession;
use dispatch::{Completion, Dispatcher, Executor};
use home::HomeView;
use navigation::NavState;
use playground::Playground;
use tabs::TabController;

#[derive(Debug, Clone, PartialEq)]
pub enum LessonStatus {
    Loading,
    Loaded(Lesson),
    /// Mensaje que sustituye a todo el contenido
    Failed(String),
}

/// Estado completo del visor: lección actual, pestañas, chat y playground.
pub struct LessonApp {
    pub config: ViewerConfig,
    pub state: AppState,
    pub nav: NavState,
    pub lesson: LessonStatus,
    pub tabs: TabController,
    pub chat: ChatSession,
    pub playground: Playground,
    pub home: HomeView,
    dispatcher: Dispatcher,
    load_generation: u64,
}

impl LessonApp {
    pub fn new(
        config: ViewerConfig,
        transport: Arc<dyn Transport>,
        executor: Box<dyn Executor>,
        start_id: u32,
    ) -> Self {
        let dispatcher = Dispatcher::new(transport, config.clone(), executor);
        let mut app = Self {
            playground: Playground::new(&config),
            config,
            state: AppState::Lesson,
            nav: NavState::new(start_id),
            lesson: LessonStatus::Loading,
            tabs: TabController::default(),
            chat: ChatSession::new(start_id),
            home: HomeView::default(),
            dispatcher,
            load_generation: 0,
        };
        app.open_lesson(start_id);
        app
    }

    /// Sustituye la lección entera: estado nuevo y dos peticiones independientes.
    pub fn open_lesson(&mut self, id: u32) {
        self.load_generation += 1;
        self.state = AppState::Lesson;
        self.nav = NavState::new(id);
        self.lesson = LessonStatus::Loading;
        self.tabs = TabController::default();
        self.chat.reset(id);
        self.playground.reset();
        self.home.begin_loading();

        log::info!("[module] cargando módulo {id}");
        self.dispatcher.fetch_index(self.load_generation);
        self.dispatcher.fetch_lesson(self.load_generation, id);
    }

    pub fn lesson_data(&self) -> Option<&Lesson> {
        match &self.lesson {
            LessonStatus::Loaded(lesson) => Some(lesson),
            _ => None,
        }
    }

    pub fn lesson_title(&self) -> String {
        match &self.lesson {
            LessonStatus::Loaded(lesson) => lesson.display_title(self.nav.current),
            LessonStatus::Loading => "Cargando…".to_string(),
            LessonStatus::Failed(_) => format!("Módulo {}", self.nav.current),
        }
    }

    pub fn lesson_badge(&self) -> String {
        let id = self
            .lesson_data()
            .map(|l| l.display_id(self.nav.current))
            .unwrap_or(self.nav.current);
        format!("#{id}")
    }

    pub fn is_busy(&self) -> bool {
        self.dispatcher.is_busy()
    }

    /// Aplica las respuestas que hayan llegado desde el último frame.
    pub fn poll(&mut self) {
        while let Some(completion) = self.dispatcher.try_recv() {
            self.apply_completion(completion);
        }
    }

    fn apply_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Index { generation, result } => {
                if generation != self.load_generation {
                    log::debug!("[index] respuesta obsoleta descartada");
                    return;
                }
                match result {
                    Ok(entries) => {
                        self.nav.total = Some(entries.len());
                        self.home.set_entries(entries);
                    }
                    Err(err) => {
                        log::warn!("[module] no se pudo obtener el número de módulos: {err}");
                        self.nav.total = None;
                        self.home.set_failed(&err);
                    }
                }
            }
            Completion::Lesson {
                generation,
                id,
                result,
            } => {
                if generation != self.load_generation {
                    log::debug!("[module] respuesta obsoleta del módulo {id} descartada");
                    return;
                }
                match result {
                    Ok(lesson) => {
                        log::info!("[module] ✅ módulo {id} cargado");
                        self.lesson = LessonStatus::Loaded(lesson);
                        let active = self.tabs.active();
                        self.select_tab(active);
                    }
                    Err(err) => {
                        log::error!("[module] error cargando módulo {id}: {err}");
                        self.lesson = LessonStatus::Failed(format!("❌ {err}"));
                    }
                }
            }
            Completion::Run { generation, result } => {
                if !self.playground.apply(generation, result) {
                    log::debug!("[playground] salida obsoleta descartada");
                }
            }
            Completion::Ask { generation, result } => {
                if !self.chat.apply(generation, result) {
                    log::debug!("[ai] respuesta obsoleta descartada");
                }
            }
        }
    }

    pub fn run_code(&mut self) {
        if let Some(request) = self.playground.run() {
            self.dispatcher.submit_code(request);
        }
    }

    pub fn clear_output(&mut self) {
        self.playground.clear();
    }

    pub fn send_question(&mut self) {
        if let Some(request) = self.chat.ask() {
            self.dispatcher.ask(request);
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }
}

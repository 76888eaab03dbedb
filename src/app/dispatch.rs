use crate::config::ViewerConfig;
use crate::data::ContentFetcher;
use crate::error::{FetchError, Result};
use crate::model::{IndexEntry, Lesson};
use crate::transport::{HttpReply, Transport};
use serde::Serialize;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

const RUN_PATH: &str = "/run";
const ASK_AI_PATH: &str = "/ask_ai";

/// Dónde se ejecutan las peticiones al backend.
pub trait Executor {
    fn spawn(&self, job: Box<dyn FnOnce() + Send + 'static>);
}

/// Un hilo por petición (escritorio).
pub struct ThreadExecutor;

impl Executor for ThreadExecutor {
    fn spawn(&self, job: Box<dyn FnOnce() + Send + 'static>) {
        std::thread::spawn(job);
    }
}

/// Ejecuta en el acto; el resultado queda en el canal hasta el siguiente `poll`.
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn spawn(&self, job: Box<dyn FnOnce() + Send + 'static>) {
        job();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub generation: u64,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub generation: u64,
    pub question: String,
    pub module_id: u32,
}

#[derive(Serialize)]
struct RunPayload {
    code: String,
}

#[derive(Serialize)]
struct AskPayload {
    question: String,
    module_id: u32,
}

/// Resultado de una petición, etiquetado con la generación que la lanzó.
#[derive(Debug)]
pub enum Completion {
    Index {
        generation: u64,
        result: Result<Vec<IndexEntry>>,
    },
    Lesson {
        generation: u64,
        id: u32,
        result: Result<Lesson>,
    },
    Run {
        generation: u64,
        result: Result<HttpReply>,
    },
    Ask {
        generation: u64,
        result: Result<HttpReply>,
    },
}

pub struct Dispatcher {
    fetcher: ContentFetcher,
    transport: Arc<dyn Transport>,
    config: ViewerConfig,
    executor: Box<dyn Executor>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    in_flight: usize,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn Transport>,
        config: ViewerConfig,
        executor: Box<dyn Executor>,
    ) -> Self {
        let (tx, rx) = channel();
        Self {
            fetcher: ContentFetcher::new(transport.clone(), config.clone()),
            transport,
            config,
            executor,
            tx,
            rx,
            in_flight: 0,
        }
    }

    fn spawn(&mut self, job: impl FnOnce() -> Completion + Send + 'static) {
        self.in_flight += 1;
        let tx = self.tx.clone();
        self.executor.spawn(Box::new(move || {
            // Si el receptor ya no existe la app se cerró: no hay nada que hacer
            let _ = tx.send(job());
        }));
    }

    pub fn fetch_index(&mut self, generation: u64) {
        let fetcher = self.fetcher.clone();
        self.spawn(move || Completion::Index {
            generation,
            result: fetcher.load_index(),
        });
    }

    pub fn fetch_lesson(&mut self, generation: u64, id: u32) {
        let fetcher = self.fetcher.clone();
        self.spawn(move || Completion::Lesson {
            generation,
            id,
            result: fetcher.load_lesson(id),
        });
    }

    pub fn submit_code(&mut self, request: RunRequest) {
        let transport = self.transport.clone();
        let url = self.config.endpoint(RUN_PATH);
        let payload = RunPayload { code: request.code };
        self.spawn(move || Completion::Run {
            generation: request.generation,
            result: post(transport.as_ref(), &url, &payload),
        });
    }

    pub fn ask(&mut self, request: AskRequest) {
        let transport = self.transport.clone();
        let url = self.config.endpoint(ASK_AI_PATH);
        let payload = AskPayload {
            question: request.question,
            module_id: request.module_id,
        };
        self.spawn(move || Completion::Ask {
            generation: request.generation,
            result: post(transport.as_ref(), &url, &payload),
        });
    }

    pub fn try_recv(&mut self) -> Option<Completion> {
        let completion = self.rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(completion)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

fn post(transport: &dyn Transport, url: &str, payload: &impl Serialize) -> Result<HttpReply> {
    let body = serde_json::to_string(payload).map_err(FetchError::from)?;
    transport.post_json(url, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        posts: Mutex<Vec<(String, String)>>,
    }

    impl Transport for Recorder {
        fn get(&self, _url: &str) -> Result<HttpReply> {
            Err(FetchError::Transport("offline".into()))
        }

        fn post_json(&self, url: &str, body: String) -> Result<HttpReply> {
            self.posts.lock().unwrap().push((url.to_string(), body));
            Ok(HttpReply::new(200, "OK", "{}"))
        }
    }

    #[test]
    fn ask_posts_question_and_module_id() {
        let recorder = Arc::new(Recorder::default());
        let mut dispatcher =
            Dispatcher::new(recorder.clone(), ViewerConfig::default(), Box::new(InlineExecutor));

        dispatcher.ask(AskRequest {
            generation: 3,
            question: "¿Qué es una lista?".into(),
            module_id: 8,
        });

        let posts = recorder.posts.lock().unwrap();
        assert_eq!(posts[0].0, "http://127.0.0.1:8000/ask_ai");
        let body: serde_json::Value = serde_json::from_str(&posts[0].1).unwrap();
        assert_eq!(body["question"], "¿Qué es una lista?");
        assert_eq!(body["module_id"], 8);
        drop(posts);

        assert!(dispatcher.is_busy());
        assert!(matches!(
            dispatcher.try_recv(),
            Some(Completion::Ask { generation: 3, .. })
        ));
        assert!(!dispatcher.is_busy());
    }

    #[test]
    fn empty_code_is_still_submitted() {
        let recorder = Arc::new(Recorder::default());
        let mut dispatcher =
            Dispatcher::new(recorder.clone(), ViewerConfig::default(), Box::new(InlineExecutor));
        dispatcher.submit_code(RunRequest {
            generation: 1,
            code: String::new(),
        });
        let posts = recorder.posts.lock().unwrap();
        assert_eq!(posts[0].0, "http://127.0.0.1:8000/run");
        assert_eq!(posts[0].1, r#"{"code":""}"#);
    }
}

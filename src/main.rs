use lesson_viewer::LessonApp;
use lesson_viewer::app::dispatch::ThreadExecutor;
use lesson_viewer::app::navigation::lesson_id_from_location;
use lesson_viewer::config::ViewerConfig;
use lesson_viewer::transport::ReqwestTransport;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = ViewerConfig::load().unwrap_or_else(|err| {
        log::error!("[config] {err}; usando valores por defecto");
        ViewerConfig::default()
    });

    // Primer argumento: `/module/3`, `?id=3` o nada
    let location = std::env::args().nth(1).unwrap_or_default();
    let start_id = lesson_id_from_location(&location);

    let transport = match ReqwestTransport::new(config.request_timeout_secs) {
        Ok(transport) => transport,
        Err(err) => {
            log::error!("[net] no se pudo crear el cliente HTTP: {err}");
            return Ok(());
        }
    };

    log::info!("[app] backend en {}, módulo inicial {start_id}", config.base_url);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Visor de lecciones",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(LessonApp::new(
                config,
                Arc::new(transport),
                Box::new(ThreadExecutor),
                start_id,
            )))
        }),
    )
}

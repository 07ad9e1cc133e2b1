use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use simplify_core::{Effect, Msg};
use simplify_engine::{panel_markup, with_undo_control, EngineEvent, EngineHandle, PANEL_ELEMENT_ID};
use simplify_logging::{simplify_debug, simplify_info, simplify_warn};

use crate::config::SimplifyConfig;
use crate::host::HostPage;

/// Executes the effects the pure update emits.
pub(crate) struct EffectRunner {
    engine: Arc<EngineHandle>,
    host: Arc<dyn HostPage>,
    msg_tx: mpsc::Sender<Msg>,
    prefetch_delay: Duration,
    panel_page: String,
}

impl EffectRunner {
    pub(crate) fn new(
        msg_tx: mpsc::Sender<Msg>,
        host: Arc<dyn HostPage>,
        config: &SimplifyConfig,
    ) -> Self {
        let engine = Arc::new(EngineHandle::new(config.client_settings()));
        let runner = Self {
            engine,
            host,
            msg_tx,
            prefetch_delay: config.prefetch_delay(),
            panel_page: config.panel_page.clone(),
        };
        runner.spawn_event_loop();
        runner
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::EnsurePanel { page_url } => {
                    if self.host.contains_element(PANEL_ELEMENT_ID) {
                        simplify_debug!("panel already present, skipping injection");
                        continue;
                    }
                    self.host
                        .append_markup(&panel_markup(&self.panel_page, &page_url));
                }
                Effect::SchedulePrefetch => {
                    let msg_tx = self.msg_tx.clone();
                    let delay = self.prefetch_delay;
                    thread::spawn(move || {
                        thread::sleep(delay);
                        let _ = msg_tx.send(Msg::PrefetchDue);
                    });
                }
                Effect::FetchClean { html } => {
                    simplify_info!("requesting cleaned document ({} bytes)", html.len());
                    self.engine.enqueue_clean(html);
                }
                Effect::ReplaceDocument { html } => {
                    self.host.replace_document(&with_undo_control(&html));
                }
                Effect::ReloadPage => {
                    self.host.reload();
                }
            }
        }
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::CleanCompleted { result } => match result {
                        Ok(html) => Msg::CleanReady { html },
                        Err(err) => {
                            // All failure kinds collapse into one state
                            // transition; the detail is log-only.
                            simplify_warn!("clean fetch failed: {err}");
                            Msg::CleanFailed {
                                reason: err.to_string(),
                            }
                        }
                    },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use simplify_core::{update, Msg, PageState, PageViewModel, TabState};

use crate::config::SimplifyConfig;
use crate::effects::EffectRunner;
use crate::host::HostPage;

/// One document lifetime: owns the tab state and pumps messages between the
/// host, the prefetch timer and the engine.
pub struct Session {
    state: TabState,
    host: Arc<dyn HostPage>,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    msg_tx: mpsc::Sender<Msg>,
}

impl Session {
    pub fn new(host: Arc<dyn HostPage>, config: &SimplifyConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(msg_tx.clone(), host.clone(), config);
        Self {
            state: TabState::new(),
            host,
            runner,
            msg_rx,
            msg_tx,
        }
    }

    /// Bootstrap. Safe to call any number of times; only the first call per
    /// document creates the button, injects the panel and arms the prefetch.
    /// The host is expected to call this once its document is interactive.
    pub fn initialize(&mut self) {
        self.dispatch(Msg::PageLoaded {
            url: self.host.page_url(),
            outer_html: self.host.outer_html(),
        });
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.host.set_button(&state.view().button);
        }
        self.state = state;
        self.runner.run(effects);
    }

    /// Sender for async message sources (timers, engine poller).
    pub fn msg_sender(&self) -> mpsc::Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Dispatches queued messages until `done` holds for the page state or
    /// the deadline passes. Returns whether `done` was reached.
    pub fn run_until(&mut self, done: impl Fn(PageState) -> bool, overall: Duration) -> bool {
        let deadline = Instant::now() + overall;
        while !done(self.state.page()) {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            match self.msg_rx.recv_timeout(deadline - now) {
                Ok(msg) => self.dispatch(msg),
                Err(_) => return false,
            }
        }
        true
    }

    pub fn page(&self) -> PageState {
        self.state.page()
    }

    pub fn view(&self) -> PageViewModel {
        self.state.view()
    }
}

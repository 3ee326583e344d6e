use crate::core::flow::Flow;

/// State for an open plan file. The generation counter tags store
/// listeners so a superseded subscription's last delivery is dropped
/// instead of clobbering a newer one.
#[derive(Debug)]
pub struct Session {
    pub flow: Flow,
    pub watch_generation: u64,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub session: Option<Session>,
}

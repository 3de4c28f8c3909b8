use lasso_types::{AppEvent, SearchEngine};

/// Entries of the tray context menu. The tray icon itself is drawn by the
/// windowing layer; this is the behavior behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Capture,
    History,
    Settings,
    Engine(SearchEngine),
    About,
    Exit,
}

impl MenuCommand {
    /// Backend event for this entry; `None` for entries the front end
    /// handles locally (dialogs).
    pub fn into_event(self) -> Option<AppEvent> {
        match self {
            MenuCommand::Capture => Some(AppEvent::ShowOverlay),
            MenuCommand::Engine(engine) => Some(AppEvent::SetEngine(engine)),
            MenuCommand::Exit => Some(AppEvent::Exit),
            MenuCommand::History | MenuCommand::Settings | MenuCommand::About => None,
        }
    }
}

use lasso_types::{AppEvent, RecognitionSummary, SearchEngine};

/// Buttons on the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    SearchText,
    /// Image results for the panel text.
    ImageResults,
    /// Reverse image search with the captured region.
    SearchImage,
    Translate,
    CopyText,
    SaveCapture,
    SetEngine(SearchEngine),
}

/// State behind the results panel: editable text, thumbnail, confidence
/// and the engine the next search will use. The windowing layer renders
/// this; all behavior lives here.
#[derive(Debug)]
pub struct PanelState {
    text: String,
    thumbnail: Vec<u8>,
    average_confidence: f32,
    engine: SearchEngine,
    visible: bool,
}

impl PanelState {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            text: String::new(),
            thumbnail: Vec::new(),
            average_confidence: 0.0,
            engine,
            visible: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn thumbnail(&self) -> &[u8] {
        &self.thumbnail
    }

    pub fn average_confidence(&self) -> f32 {
        self.average_confidence
    }

    pub fn engine(&self) -> SearchEngine {
        self.engine
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The text widget is editable; user edits land here and feed the
    /// next search/copy/translate.
    pub fn edit_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Apply a backend event. Unrelated events are ignored.
    pub fn apply(&mut self, event: &AppEvent) {
        match event {
            AppEvent::ShowResults(RecognitionSummary {
                text,
                average_confidence,
                thumbnail,
            }) => {
                self.text = text.clone();
                self.average_confidence = *average_confidence;
                self.thumbnail = thumbnail.clone();
                self.visible = true;
            }
            AppEvent::SetEngine(engine) => self.engine = *engine,
            AppEvent::Exit => self.visible = false,
            _ => {}
        }
    }

    /// Map a button press to the backend event it triggers. `None` means
    /// nothing to send (e.g. searching with no text).
    pub fn command(&self, command: PanelCommand) -> Option<AppEvent> {
        match command {
            PanelCommand::SearchText => {
                if self.text.trim().is_empty() {
                    return None;
                }
                Some(AppEvent::OpenTextSearch {
                    engine: self.engine,
                    query: self.text.clone(),
                })
            }
            PanelCommand::ImageResults => {
                if self.text.trim().is_empty() {
                    return None;
                }
                Some(AppEvent::OpenImageResults {
                    engine: self.engine,
                    query: self.text.clone(),
                })
            }
            PanelCommand::SearchImage => Some(AppEvent::OpenImageSearch {
                engine: self.engine,
            }),
            PanelCommand::Translate => {
                if self.text.trim().is_empty() {
                    return None;
                }
                Some(AppEvent::OpenTranslation(self.text.clone()))
            }
            PanelCommand::CopyText => {
                if self.text.is_empty() {
                    return None;
                }
                Some(AppEvent::CopyText(self.text.clone()))
            }
            PanelCommand::SaveCapture => Some(AppEvent::SaveCapture),
            PanelCommand::SetEngine(engine) => Some(AppEvent::SetEngine(engine)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(text: &str) -> AppEvent {
        AppEvent::ShowResults(RecognitionSummary {
            text: text.to_string(),
            average_confidence: 0.8,
            thumbnail: vec![1, 2, 3],
        })
    }

    #[test]
    fn results_populate_and_show_the_panel() {
        let mut panel = PanelState::new(SearchEngine::Google);
        assert!(!panel.visible());
        panel.apply(&summary("found text"));
        assert!(panel.visible());
        assert_eq!(panel.text(), "found text");
        assert_eq!(panel.thumbnail(), &[1, 2, 3]);
    }

    #[test]
    fn search_uses_edited_text() {
        let mut panel = PanelState::new(SearchEngine::Google);
        panel.apply(&summary("raw ocr"));
        panel.edit_text("corrected".to_string());

        match panel.command(PanelCommand::SearchText) {
            Some(AppEvent::OpenTextSearch { engine, query }) => {
                assert_eq!(engine, SearchEngine::Google);
                assert_eq!(query, "corrected");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn empty_text_disables_text_actions() {
        let panel = PanelState::new(SearchEngine::Google);
        assert!(panel.command(PanelCommand::SearchText).is_none());
        assert!(panel.command(PanelCommand::ImageResults).is_none());
        assert!(panel.command(PanelCommand::Translate).is_none());
        assert!(panel.command(PanelCommand::CopyText).is_none());
        // Reverse image search works without text.
        assert!(panel.command(PanelCommand::SearchImage).is_some());
    }

    #[test]
    fn image_results_carry_the_panel_text() {
        let mut panel = PanelState::new(SearchEngine::Bing);
        panel.apply(&summary("red panda"));

        match panel.command(PanelCommand::ImageResults) {
            Some(AppEvent::OpenImageResults { engine, query }) => {
                assert_eq!(engine, SearchEngine::Bing);
                assert_eq!(query, "red panda");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn engine_choice_follows_backend_events() {
        let mut panel = PanelState::new(SearchEngine::Google);
        panel.apply(&AppEvent::SetEngine(SearchEngine::Bing));
        assert_eq!(panel.engine(), SearchEngine::Bing);

        match panel.command(PanelCommand::SearchImage) {
            Some(AppEvent::OpenImageSearch { engine }) => assert_eq!(engine, SearchEngine::Bing),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

pub mod bridge;
pub mod menu;
pub mod panel;

pub use bridge::{UiBridge, UiBridgeHandle};
pub use menu::MenuCommand;
pub use panel::{PanelCommand, PanelState};

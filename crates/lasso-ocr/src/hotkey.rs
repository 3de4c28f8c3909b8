use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey, Modifiers},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HotkeyError {
    #[error("unparseable hotkey binding '{0}'")]
    Parse(String),
    #[error("hotkey registration failed: {0}")]
    Register(String),
}

/// Parse a `ctrl+shift+space` style binding, case-insensitive.
pub fn parse_binding(binding: &str) -> Result<(Modifiers, Code), HotkeyError> {
    let mut modifiers = Modifiers::empty();
    let mut key = None;

    for part in binding.split('+').map(|p| p.trim().to_ascii_lowercase()) {
        match part.as_str() {
            "ctrl" | "control" => modifiers |= Modifiers::CONTROL,
            "shift" => modifiers |= Modifiers::SHIFT,
            "alt" => modifiers |= Modifiers::ALT,
            "super" | "meta" | "cmd" | "win" => modifiers |= Modifiers::SUPER,
            other => {
                if key.replace(parse_key(other, binding)?).is_some() {
                    return Err(HotkeyError::Parse(binding.to_string()));
                }
            }
        }
    }

    match key {
        Some(code) => Ok((modifiers, code)),
        None => Err(HotkeyError::Parse(binding.to_string())),
    }
}

fn parse_key(key: &str, binding: &str) -> Result<Code, HotkeyError> {
    let code = match key {
        "a" => Code::KeyA,
        "b" => Code::KeyB,
        "c" => Code::KeyC,
        "d" => Code::KeyD,
        "e" => Code::KeyE,
        "f" => Code::KeyF,
        "g" => Code::KeyG,
        "h" => Code::KeyH,
        "i" => Code::KeyI,
        "j" => Code::KeyJ,
        "k" => Code::KeyK,
        "l" => Code::KeyL,
        "m" => Code::KeyM,
        "n" => Code::KeyN,
        "o" => Code::KeyO,
        "p" => Code::KeyP,
        "q" => Code::KeyQ,
        "r" => Code::KeyR,
        "s" => Code::KeyS,
        "t" => Code::KeyT,
        "u" => Code::KeyU,
        "v" => Code::KeyV,
        "w" => Code::KeyW,
        "x" => Code::KeyX,
        "y" => Code::KeyY,
        "z" => Code::KeyZ,
        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,
        "f1" => Code::F1,
        "f2" => Code::F2,
        "f3" => Code::F3,
        "f4" => Code::F4,
        "f5" => Code::F5,
        "f6" => Code::F6,
        "f7" => Code::F7,
        "f8" => Code::F8,
        "f9" => Code::F9,
        "f10" => Code::F10,
        "f11" => Code::F11,
        "f12" => Code::F12,
        "space" => Code::Space,
        "enter" | "return" => Code::Enter,
        "tab" => Code::Tab,
        "escape" | "esc" => Code::Escape,
        _ => return Err(HotkeyError::Parse(binding.to_string())),
    };
    Ok(code)
}

/// Registers one OS-global hotkey for the lifetime of the manager.
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

impl HotkeyManager {
    /// Register the binding string with the OS.
    pub fn from_binding(binding: &str) -> Result<Self, HotkeyError> {
        let (modifiers, code) = parse_binding(binding)?;
        let manager =
            GlobalHotKeyManager::new().map_err(|e| HotkeyError::Register(e.to_string()))?;
        let hotkey = HotKey::new(Some(modifiers), code);
        manager
            .register(hotkey)
            .map_err(|e| HotkeyError::Register(e.to_string()))?;
        Ok(Self { manager, hotkey })
    }

    /// Non-blocking: true iff our hotkey was pressed since the last poll.
    pub fn poll(&self) -> bool {
        let receiver = GlobalHotKeyEvent::receiver();
        while let Ok(event) = receiver.try_recv() {
            if event.id == self.hotkey.id() && event.state() == HotKeyState::Pressed {
                tracing::trace!(id = event.id, "hotkey pressed");
                return true;
            }
        }
        false
    }

    pub fn id(&self) -> u32 {
        self.hotkey.id()
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        let _ = self.manager.unregister(self.hotkey);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_binding() {
        let (modifiers, code) = parse_binding("ctrl+shift+space").unwrap();
        assert_eq!(modifiers, Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(code, Code::Space);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        let (modifiers, code) = parse_binding("Ctrl+Alt+S").unwrap();
        assert_eq!(modifiers, Modifiers::CONTROL | Modifiers::ALT);
        assert_eq!(code, Code::KeyS);
    }

    #[test]
    fn bare_function_key_needs_no_modifier() {
        let (modifiers, code) = parse_binding("f9").unwrap();
        assert!(modifiers.is_empty());
        assert_eq!(code, Code::F9);
    }

    #[test]
    fn rejects_modifier_only_and_double_key() {
        assert!(parse_binding("ctrl+shift").is_err());
        assert!(parse_binding("a+b").is_err());
        assert!(parse_binding("").is_err());
        assert!(parse_binding("ctrl+volumeup").is_err());
    }
}

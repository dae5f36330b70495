//! WASM exports for the terminal
//!
//! The page forwards key presses and submitted lines; output comes back as
//! JSON and side effects are carried out here through `web-sys`.

use wasm_bindgen::prelude::*;

use crate::config::TerminalConfig;
use crate::effect::Effect;
use crate::history::Recall;
use crate::interpreter::Interpreter;
use crate::konami::KonamiDetector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

const MATRIX_OVERLAY_ID: &str = "matrixOverlay";
const KONAMI_MESSAGE: &str = "🎉 Du fandt et easter egg!";

fn set_matrix_overlay(active: bool) -> Result<(), JsValue> {
    let overlay = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MATRIX_OVERLAY_ID));
    match overlay {
        Some(el) if active => el.class_list().add_1("active"),
        Some(el) => el.class_list().remove_1("active"),
        None => Ok(()),
    }
}

/// Carry out a command's side effect on the current page
fn perform_effect(effect: &Effect) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let result = match effect {
        Effect::OpenUrl { url } => window.open_with_url_and_target(url, "_blank").map(|_| ()),
        Effect::Download { url } => window.open_with_url(url).map(|_| ()),
        Effect::Navigate { .. } | Effect::Mailto { .. } => match effect.href() {
            Some(href) => window.location().set_href(&href),
            None => Ok(()),
        },
        Effect::Matrix => set_matrix_overlay(true),
    };
    if let Err(e) = result {
        log(&format!("[folio-terminal] effect {:?} failed: {:?}", effect, e));
    }
}

/// Terminal controller for WASM - wraps Interpreter with JS-friendly API
#[wasm_bindgen]
pub struct TerminalController {
    interpreter: Interpreter,
    konami: KonamiDetector,
}

impl Default for TerminalController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl TerminalController {
    /// Create a terminal with the default session identity
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_config(TerminalConfig::default())
    }

    /// Create a terminal from a JSON `TerminalConfig`
    #[wasm_bindgen]
    pub fn with_config_json(json: &str) -> Result<TerminalController, JsValue> {
        let config = TerminalConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: TerminalConfig) -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        log(&format!("[folio-terminal] session for {}@{}", config.user, config.host));
        Self {
            interpreter: Interpreter::new(config),
            konami: KonamiDetector::new(),
        }
    }

    #[wasm_bindgen]
    pub fn prompt(&self) -> String {
        self.interpreter.prompt()
    }

    /// Enter: run the line, perform its effects, return the submission as JSON
    #[wasm_bindgen]
    pub fn submit(&mut self, line: &str) -> String {
        let submission = self.interpreter.submit(line);
        for effect in &submission.effects {
            perform_effect(effect);
        }
        serde_json::to_string(&submission).unwrap_or_else(|_| r#"{"lines":[],"effects":[],"cleared":false}"#.to_string())
    }

    /// Arrow up; returns the new input line, or undefined to leave it
    #[wasm_bindgen]
    pub fn history_up(&mut self) -> Option<String> {
        self.interpreter.recall(Recall::Up).map(str::to_string)
    }

    /// Arrow down; returns the new input line, or undefined to leave it
    #[wasm_bindgen]
    pub fn history_down(&mut self) -> Option<String> {
        self.interpreter.recall(Recall::Down).map(str::to_string)
    }

    /// Tab; returns the completion as JSON
    #[wasm_bindgen]
    pub fn autocomplete(&mut self, partial: &str) -> String {
        let completion = self.interpreter.autocomplete(partial);
        serde_json::to_string(&completion).unwrap_or_else(|_| r#"{"type":"noMatch"}"#.to_string())
    }

    /// Track the input line as the user types
    #[wasm_bindgen]
    pub fn set_input(&mut self, text: &str) {
        self.interpreter.set_input(text);
    }

    /// Get the whole output buffer as JSON
    #[wasm_bindgen]
    pub fn get_output_json(&self) -> String {
        serde_json::to_string(self.interpreter.output()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Seconds since the session started, for the status bar
    #[wasm_bindgen]
    pub fn uptime_secs(&self) -> f64 {
        self.interpreter.uptime_secs() as f64
    }

    /// Page-wide keydown; returns true when the key completed the Konami code
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str) -> bool {
        if key == "Escape" && self.interpreter.stop_matrix() {
            if let Err(e) = set_matrix_overlay(false) {
                log(&format!("[folio-terminal] matrix overlay: {:?}", e));
            }
        }

        let found = self.konami.push(key);
        if found {
            log("[folio-terminal] konami code entered");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(KONAMI_MESSAGE);
            }
        }
        found
    }
}

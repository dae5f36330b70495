//! Browser tests for the wasm controller
//!
//! Run with `wasm-pack test --headless --firefox -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use folio_desktop::DesktopController;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn parse(json: &str) -> serde_json::Value {
    serde_json::from_str(json).unwrap()
}

#[wasm_bindgen_test]
fn test_windows_json_back_to_front() {
    let mut desktop = DesktopController::new(1920.0, 1080.0);
    let about = desktop.open_app("about").unwrap();
    let projects = desktop.open_app("projects").unwrap();
    desktop.focus_window(about);

    let windows = parse(&desktop.get_windows_json());
    assert_eq!(windows[0]["id"], projects);
    assert_eq!(windows[1]["id"], about);
    assert_eq!(windows[1]["focused"], true);
}

#[wasm_bindgen_test]
fn test_unknown_app_returns_none() {
    let mut desktop = DesktopController::new(1920.0, 1080.0);
    assert_eq!(desktop.open_app("solitaire"), None);
    assert_eq!(parse(&desktop.get_taskbar_json()), serde_json::json!([]));
}

#[wasm_bindgen_test]
fn test_menus_json() {
    let mut desktop = DesktopController::new(1920.0, 1080.0);
    desktop.toggle_start_menu();
    assert_eq!(parse(&desktop.get_menus_json())["startOpen"], true);

    desktop.desktop_click();
    assert_eq!(parse(&desktop.get_menus_json())["startOpen"], false);
}

#[wasm_bindgen_test]
fn test_clock_json_has_both_fields() {
    let desktop = DesktopController::new(1920.0, 1080.0);
    let clock = parse(&desktop.get_clock_json());
    assert!(clock["time"].as_str().unwrap().ends_with('M'));
    assert!(clock["date"].as_str().unwrap().contains('/'));
}

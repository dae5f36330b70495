//! Integration tests for DesktopEngine
//!
//! These tests verify the full desktop workflow including:
//! - Window lifecycle (open, focus, minimize, maximize, close)
//! - Taskbar synchronisation with the window list
//! - Drag operations and clamping
//! - Shell menus and change notifications

use std::cell::RefCell;
use std::rc::Rc;

use folio_desktop::{
    DesktopConfig, DesktopEngine, DesktopEvent, InputResult, PowerAction, ShellEffect, WindowId,
    WindowState,
};

fn engine() -> DesktopEngine {
    DesktopEngine::new(DesktopConfig::with_viewport(1920.0, 1080.0))
}

fn z(engine: &DesktopEngine, id: WindowId) -> u32 {
    engine.windows().get(id).unwrap().z_order
}

fn assert_taskbar_in_sync(engine: &DesktopEngine) {
    let windows: Vec<WindowId> = engine.windows().iter().map(|w| w.id).collect();
    let entries: Vec<WindowId> = engine.taskbar().entries().iter().map(|e| e.window_id).collect();
    assert_eq!(windows, entries);
    assert!(engine.taskbar().entries().iter().filter(|e| e.active).count() <= 1);
}

// =============================================================================
// Window Lifecycle Tests
// =============================================================================

#[test]
fn test_open_same_app_twice() {
    let mut engine = engine();
    let a = engine.open("about").unwrap();
    let b = engine.open("about").unwrap();

    assert_ne!(a, b);
    let pa = engine.windows().get(a).unwrap().position;
    let pb = engine.windows().get(b).unwrap().position;
    assert!((pb.x - pa.x - 30.0).abs() < 0.001);
    assert!((pb.y - pa.y - 30.0).abs() < 0.001);
    assert_taskbar_in_sync(&engine);
}

#[test]
fn test_focus_gives_strictly_highest_z() {
    let mut engine = engine();
    let ids: Vec<WindowId> = ["about", "projects", "skills", "contact"]
        .iter()
        .filter_map(|app| engine.open(app))
        .collect();

    for &target in &ids {
        engine.focus(target);
        for &other in ids.iter().filter(|&&id| id != target) {
            assert!(z(&engine, target) > z(&engine, other));
        }
        assert_eq!(engine.taskbar().active(), Some(target));
    }
}

#[test]
fn test_open_projects_then_about_then_focus_first() {
    let mut engine = engine();
    let projects = engine.open("projects").unwrap();
    let about = engine.open("about").unwrap();

    engine.focus(projects);
    assert!(z(&engine, projects) > z(&engine, about));
}

#[test]
fn test_close_removes_window_and_entry() {
    let mut engine = engine();
    let a = engine.open("about").unwrap();
    let b = engine.open("skills").unwrap();

    engine.close(a);
    assert!(engine.windows().get(a).is_none());
    assert!(engine.taskbar().get(a).is_none());
    assert!(engine.windows().get(b).is_some());
    assert_taskbar_in_sync(&engine);

    // Closed and never-opened ids are no-ops
    engine.close(a);
    engine.close(4242);
    engine.focus(a);
    engine.minimize(a);
    engine.toggle_maximize(a);
    engine.activate_taskbar_entry(a);
    assert_eq!(engine.windows().count(), 1);
    assert_taskbar_in_sync(&engine);
}

#[test]
fn test_minimize_then_taskbar_click_restores_and_focuses() {
    let mut engine = engine();
    let a = engine.open("about").unwrap();
    let b = engine.open("projects").unwrap();

    engine.minimize(a);
    assert_eq!(engine.windows().get(a).unwrap().state, WindowState::Minimized);
    assert!(!engine.taskbar().get(a).unwrap().active);

    engine.activate_taskbar_entry(a);
    assert_ne!(engine.windows().get(a).unwrap().state, WindowState::Minimized);
    assert!(z(&engine, a) > z(&engine, b));
    assert!(engine.taskbar().get(a).unwrap().active);
}

#[test]
fn test_maximized_minimized_round_trip() {
    let mut engine = engine();
    let id = engine.open("browser").unwrap();

    engine.toggle_maximize(id);
    engine.minimize(id);
    engine.activate_taskbar_entry(id);

    assert_eq!(engine.windows().get(id).unwrap().state, WindowState::Maximized);
}

// =============================================================================
// Drag Tests
// =============================================================================

#[test]
fn test_drag_full_sequence() {
    let mut engine = engine();
    let id = engine.open("about").unwrap();
    let start = engine.windows().get(id).unwrap().position;

    // Grab the title bar 40px in, 12px down
    assert_eq!(engine.begin_drag(id, start.x + 40.0, start.y + 12.0), InputResult::Handled);
    assert_eq!(engine.update_drag(300.0, 200.0), InputResult::Handled);

    let pos = engine.windows().get(id).unwrap().position;
    assert!((pos.x - 260.0).abs() < 0.001);
    assert!((pos.y - 188.0).abs() < 0.001);

    // Off the top-left edge
    engine.update_drag(-100.0, -100.0);
    let pos = engine.windows().get(id).unwrap().position;
    assert!((pos.x - 0.0).abs() < 0.001);
    assert!((pos.y - 0.0).abs() < 0.001);

    assert_eq!(engine.end_drag(), InputResult::Handled);
    assert_eq!(engine.update_drag(500.0, 500.0), InputResult::Unhandled);
    assert_eq!(engine.windows().get(id).unwrap().position, pos);
}

#[test]
fn test_only_one_drag_at_a_time() {
    let mut engine = engine();
    let a = engine.open("about").unwrap();
    let b = engine.open("skills").unwrap();
    let a_before = engine.windows().get(a).unwrap().position;

    engine.begin_drag(a, 0.0, 0.0);
    engine.begin_drag(b, 0.0, 0.0);
    engine.update_drag(400.0, 400.0);

    assert_eq!(engine.input().dragged_window(), Some(b));
    assert_eq!(engine.windows().get(a).unwrap().position, a_before);
}

// =============================================================================
// Shell and Events
// =============================================================================

#[test]
fn test_subscriber_sees_every_transition() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink_seen = seen.clone();

    let mut engine = engine();
    engine.subscribe(Box::new(move |e: &DesktopEvent| sink_seen.borrow_mut().push(e.clone())));

    let id = engine.open("about").unwrap();
    engine.minimize(id);
    engine.activate_taskbar_entry(id);
    engine.close(id);

    let seen = seen.borrow();
    assert!(matches!(seen[0], DesktopEvent::WindowOpened { .. }));
    assert!(matches!(seen[1], DesktopEvent::WindowFocused { .. }));
    assert_eq!(seen[2], DesktopEvent::WindowMinimized { id });
    assert_eq!(seen[3], DesktopEvent::WindowRestored { id });
    assert!(matches!(seen[4], DesktopEvent::WindowFocused { .. }));
    assert_eq!(seen[5], DesktopEvent::WindowClosed { id });

    // The pending queue mirrors what subscribers saw
    assert_eq!(engine.take_events().len(), seen.len());
}

#[test]
fn test_power_shutdown_effect() {
    let mut engine = engine();
    engine.toggle_power_menu();
    engine.take_events();

    engine.power_action(PowerAction::Shutdown);
    let events = engine.take_events();
    assert_eq!(
        events[0],
        DesktopEvent::Effect { effect: ShellEffect::Shutdown }
    );
    assert!(!engine.menus().any_open());
}

#[test]
fn test_events_serialize_for_page_script() {
    let mut engine = engine();
    engine.open("contact");

    let json = serde_json::to_value(engine.take_events()).unwrap();
    assert_eq!(json[0]["type"], "windowOpened");
    assert_eq!(json[0]["appId"], "contact");
    assert_eq!(json[0]["rect"]["width"], 450.0);
    assert_eq!(json[1]["type"], "windowFocused");
}

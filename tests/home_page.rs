//! End-to-end: mount the home page headless and press the button.

use controlled_context::components::BUTTON_LABEL;
use controlled_context::pages::HOME_TITLE;
use controlled_context::pipeline::{mount, set_render_mode, set_terminal_size, Command, RenderMode};
use controlled_context::HomePage;

fn mount_home() -> controlled_context::MountHandle {
    set_render_mode(RenderMode::Headless);
    set_terminal_size(60, 40);

    let page = HomePage::new();
    mount(move || page.render()).unwrap()
}

#[test]
fn test_initial_frame() {
    let handle = mount_home();

    assert_eq!(handle.render_count(), 1);
    assert_eq!(handle.title().as_deref(), Some(HOME_TITLE));
    assert_eq!(handle.frame_texts(), vec![BUTTON_LABEL, "1", "2", "baz"]);
}

#[test]
fn test_each_activation_appends_foo() {
    let handle = mount_home();

    assert!(handle.dispatch(Command::Activate));
    assert_eq!(handle.frame_texts(), vec![BUTTON_LABEL, "1", "2", "baz", "foo"]);

    assert!(handle.dispatch(Command::Activate));
    assert_eq!(
        handle.frame_texts(),
        vec![BUTTON_LABEL, "1", "2", "baz", "foo", "foo"]
    );
    assert_eq!(handle.render_count(), 3);
}

#[test]
fn test_click_on_button() {
    let handle = mount_home();

    // Button frame occupies the first three rows
    assert!(handle.click(2, 1));
    assert_eq!(handle.frame_texts().last().map(String::as_str), Some("foo"));

    // List entries are not clickable
    assert!(!handle.click(2, 4));
    assert_eq!(handle.frame_texts().len(), 5);
}

#[test]
fn test_painted_layout() {
    let handle = mount_home();
    let lines = handle.lines();

    assert_eq!(lines[0], "┌─────────────┐");
    assert_eq!(lines[1], "│ Click me!   │");
    assert_eq!(lines[2], "└─────────────┘");
    assert!(lines[3].starts_with('┌'));
    assert!(lines[4].contains("1"));
    assert!(lines[7].contains("2"));
    assert!(lines[10].contains("baz"));
}

fn painted_foo_rows(handle: &controlled_context::MountHandle) -> usize {
    handle.lines().iter().filter(|line| line.contains("foo")).count()
}

#[test]
fn test_long_list_scrolls_into_view() {
    set_render_mode(RenderMode::Headless);
    set_terminal_size(80, 24);
    let page = HomePage::new();
    let handle = mount(move || page.render()).unwrap();

    for _ in 0..6 {
        handle.dispatch(Command::Activate);
    }

    // Button (3 rows) + nine bordered entries (3 rows each) = 30 rows
    assert_eq!(handle.frame_texts().iter().filter(|text| *text == "foo").count(), 6);
    assert_eq!(handle.max_scroll(), 6);
    assert_eq!(painted_foo_rows(&handle), 4);

    handle.dispatch(Command::ScrollToBottom);
    assert_eq!(handle.scroll_offset(), 6);
    assert_eq!(painted_foo_rows(&handle), 6);
    assert!(handle.lines()[23].starts_with('└'));

    handle.dispatch(Command::Scroll { delta: -1 });
    assert_eq!(handle.scroll_offset(), 5);
    handle.dispatch(Command::ScrollToTop);
    assert_eq!(handle.lines()[0], "┌─────────────┐");

    // Clicks still land on the button after scrolling back
    assert!(handle.click(2, 1));
    assert_eq!(handle.frame_texts().len(), 11);
}

#[test]
fn test_unmount_then_remount_starts_fresh() {
    let handle = mount_home();
    handle.dispatch(Command::Activate);
    handle.unmount();

    let handle = mount_home();
    assert_eq!(handle.frame_texts(), vec![BUTTON_LABEL, "1", "2", "baz"]);
}

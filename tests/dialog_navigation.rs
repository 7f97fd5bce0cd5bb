mod common;

use common::{calls, dialog_with, new_log};

const PAGES: [&str; 3] = ["General", "Source", "Colors"];

#[test]
fn first_page_is_selected_after_construction() {
    let log = new_log();
    let dialog = dialog_with(&PAGES, "", &log);
    assert_eq!(dialog.current_page_title(), Some("General"));
    assert_eq!(dialog.heading(), "General Settings");
    assert!(dialog.is_open());
}

#[test]
fn navigator_keeps_registration_order() {
    let log = new_log();
    let dialog = dialog_with(&PAGES, "", &log);
    assert_eq!(dialog.page_titles(), ["General", "Source", "Colors"]);
}

#[test]
fn select_page_makes_it_current() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    for title in PAGES {
        dialog.select_page(title);
        assert_eq!(dialog.current_page_title(), Some(title));
        assert_eq!(dialog.heading(), format!("{} Settings", title));
        assert_eq!(dialog.current_page().map(|p| p.title()), Some(title));
    }
}

#[test]
fn select_unknown_page_is_ignored() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    dialog.select_page("Source");
    dialog.select_page("Missing");
    assert_eq!(dialog.current_page_title(), Some("Source"));
    assert_eq!(dialog.heading(), "Source Settings");
}

#[test]
fn empty_selector_selects_first_page() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    dialog.select_page("Colors");
    dialog.activate("");
    assert_eq!(dialog.current_page_title(), Some("General"));
}

#[test]
fn activate_other_page_forwards_field() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    dialog.activate("Source/dirs");
    assert_eq!(dialog.current_page_title(), Some("Source"));
    assert_eq!(calls(&log, ".activate"), ["Source.activate(dirs)"]);
}

#[test]
fn activate_current_page_still_forwards_field() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    dialog.activate("General/field1");
    assert_eq!(dialog.current_page_title(), Some("General"));
    assert_eq!(calls(&log, ".activate"), ["General.activate(field1)"]);
}

#[test]
fn activate_without_field_does_not_forward() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    dialog.activate("Colors");
    assert_eq!(dialog.current_page_title(), Some("Colors"));
    assert!(calls(&log, ".activate").is_empty());
}

#[test]
fn activate_missing_page_leaves_selection_unchanged() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    dialog.select_page("Source");
    dialog.activate("Missing/field");
    assert_eq!(dialog.current_page_title(), Some("Source"));
    assert!(calls(&log, ".activate").is_empty());
}

#[test]
fn stale_field_is_not_forwarded_to_another_page() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    dialog.activate("Missing/field");
    dialog.select_page("Source");
    dialog.select_page("General");
    assert!(calls(&log, ".activate").is_empty());
}

#[test]
fn field_is_forwarded_only_once() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    dialog.activate("Source/dirs");
    dialog.select_page("General");
    dialog.select_page("Source");
    assert_eq!(calls(&log, ".activate"), ["Source.activate(dirs)"]);
}

#[test]
fn field_part_may_contain_slashes() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    dialog.activate("Source/usr/src");
    assert_eq!(calls(&log, ".activate"), ["Source.activate(usr/src)"]);
}

#[test]
fn initial_selector_deep_links() {
    let log = new_log();
    let dialog = dialog_with(&PAGES, "Colors/object", &log);
    assert_eq!(dialog.current_page_title(), Some("Colors"));
    assert_eq!(calls(&log, ".activate"), ["Colors.activate(object)"]);
}

#[test]
fn initial_selector_for_first_page_forwards_field() {
    let log = new_log();
    let dialog = dialog_with(&PAGES, "General/precision", &log);
    assert_eq!(dialog.current_page_title(), Some("General"));
    assert_eq!(calls(&log, ".activate"), ["General.activate(precision)"]);
}

#[test]
fn unknown_initial_selector_keeps_first_page() {
    let log = new_log();
    let dialog = dialog_with(&PAGES, "Nope/x", &log);
    assert_eq!(dialog.current_page_title(), Some("General"));
    assert!(calls(&log, ".activate").is_empty());
}

#[test]
fn select_next_and_previous_wrap() {
    let log = new_log();
    let mut dialog = dialog_with(&PAGES, "", &log);
    dialog.select_previous();
    assert_eq!(dialog.current_page_title(), Some("Colors"));
    assert_eq!(dialog.heading(), "Colors Settings");
    dialog.select_next();
    assert_eq!(dialog.current_page_title(), Some("General"));
}

#[test]
fn dialog_without_pages_has_no_selection() {
    let log = new_log();
    let mut dialog = dialog_with(&[], "General", &log);
    dialog.activate("");
    assert_eq!(dialog.current_page_title(), None);
    assert!(dialog.current_page().is_none());
    assert_eq!(dialog.heading(), "");
}

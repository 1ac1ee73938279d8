use std::sync::Arc;

use folio_runtime::{
    desktop_config, DesktopAction, DesktopState, DesktopStore, FileType, LocationNode,
    ReducerError, RuntimeEffect, WindowKind, INITIAL_Z_INDEX,
};
use pretty_assertions::assert_eq;

fn booted_store() -> DesktopStore {
    let work = &desktop_config().locations.work;
    DesktopStore::new(DesktopState::with_location(work).expect("work root is a folder"))
}

#[test]
fn opening_and_focusing_always_lands_on_top() {
    let mut store = DesktopStore::default();

    store.open_window("finder", None).expect("open finder");
    store.open_window("resume", None).expect("open resume");
    assert_eq!(store.get_window("finder").expect("finder").z_index, 1001);
    assert_eq!(store.get_window("resume").expect("resume").z_index, 1002);

    store.focus_window("finder").expect("focus finder");
    let finder = store.get_window("finder").expect("finder");
    let resume = store.get_window("resume").expect("resume");
    assert_eq!(finder.z_index, 1003);
    assert!(finder.is_open);
    assert_eq!(resume.z_index, 1002);
    assert!(resume.is_open);
    assert_eq!(store.state().topmost_open_window(), Some(WindowKind::Finder));
    assert_eq!(
        store.state().open_windows_in_stack_order(),
        vec![WindowKind::Resume, WindowKind::Finder]
    );
}

#[test]
fn closing_keeps_stacking_value_and_reopen_goes_higher() {
    let mut store = DesktopStore::default();
    store.open_window("photos", None).expect("open");
    store.close_window("photos").expect("close");

    let closed = store.get_window("photos").expect("photos");
    assert!(!closed.is_open);
    assert_eq!(closed.z_index, 1001);

    store.open_window("photos", None).expect("reopen");
    assert_eq!(store.get_window("photos").expect("photos").z_index, 1002);
}

#[test]
fn registry_size_never_changes() {
    let mut store = booted_store();
    assert_eq!(store.state().windows().count(), WindowKind::COUNT);

    for window in WindowKind::ALL {
        store.open_window(window.as_str(), None).expect("open");
    }
    for window in WindowKind::ALL {
        store.close_window(window.as_str()).expect("close");
    }

    assert_eq!(store.state().windows().count(), WindowKind::COUNT);
    assert!(store
        .state()
        .windows()
        .all(|descriptor| descriptor.z_index > INITIAL_Z_INDEX));
}

#[test]
fn pdf_typed_folder_opens_resume_instead_of_navigating() {
    let mut store = booted_store();
    let work = desktop_config().locations.work.clone();
    let odd = Arc::new(LocationNode::folder(9, "Resume", Vec::new()).with_file_type(FileType::Pdf));

    let effects = store.open_item(&odd).expect("routed");

    assert!(effects.is_empty());
    assert!(store.get_window("resume").expect("resume").is_open);
    assert!(store.state().location.is_active(&work));
}

#[test]
fn catalog_resume_file_opens_resume_window() {
    let mut store = booted_store();
    let resume_root = desktop_config().locations.resume.clone();
    let pdf = resume_root
        .children
        .iter()
        .find(|item| item.file_type == Some(FileType::Pdf))
        .cloned()
        .expect("resume pdf");

    store.open_item(&pdf).expect("routed");
    assert!(store.get_window("resume").expect("resume").is_open);
}

#[test]
fn link_without_address_is_a_silent_no_op() {
    let mut store = booted_store();
    let before = store.state().clone();
    let link = Arc::new(LocationNode::file(3, "draft.com", FileType::Url));

    assert_eq!(store.open_item(&link), Ok(Vec::new()));
    assert_eq!(store.state(), &before);
}

#[test]
fn link_with_address_leaves_state_and_emits_effect() {
    let mut store = booted_store();
    let before = store.state().clone();
    let link = Arc::new(LocationNode::file(3, "site.com", FileType::Url).with_href("https://folio.dev"));

    assert_eq!(
        store.open_item(&link),
        Ok(vec![RuntimeEffect::OpenExternalUrl("https://folio.dev".to_string())])
    );
    assert_eq!(store.state(), &before);
}

#[test]
fn finder_browsing_walks_into_projects_and_back() {
    let mut store = booted_store();
    let work = desktop_config().locations.work.clone();
    let project = work.children[0].clone();

    store.open_item(&project).expect("navigate into project");
    assert!(store.state().location.is_active(&project));
    assert_eq!(store.state().location.visible_items(), project.children.as_slice());

    store.dispatch(DesktopAction::NavigateBack).expect("back");
    assert!(store.state().location.is_active(&work));
}

#[test]
fn unknown_window_ids_surface_as_errors() {
    let mut store = DesktopStore::default();
    assert!(matches!(
        store.open_window("Finder", None),
        Err(ReducerError::UnknownWindow(_))
    ));
}

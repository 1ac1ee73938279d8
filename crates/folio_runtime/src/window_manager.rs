//! Window registry transitions used by the desktop reducer.
//!
//! Raising a window only ever writes a freshly allocated stacking value to that one window, so
//! the relative order of every other window is preserved.

use crate::{
    model::{DesktopState, WindowKind, WindowPayload},
    reducer::ReducerError,
};

/// Opens `window`, or re-focuses it when already open.
///
/// A closed window takes `payload` as its data. An open window keeps its data unless a new
/// payload is provided.
pub fn open_window(
    state: &mut DesktopState,
    window: WindowKind,
    payload: Option<WindowPayload>,
) -> Result<(), ReducerError> {
    let z_index = state.z_order.next()?;
    let descriptor = state.window_mut(window);
    descriptor.z_index = z_index;
    if descriptor.is_open {
        if payload.is_some() {
            descriptor.data = payload;
        }
    } else {
        descriptor.is_open = true;
        descriptor.data = payload;
    }
    Ok(())
}

/// Closes `window` and drops its payload so a reopen starts from fresh data.
///
/// Returns `true` when the window was open.
pub fn close_window(state: &mut DesktopState, window: WindowKind) -> bool {
    let descriptor = state.window_mut(window);
    let was_open = descriptor.is_open;
    descriptor.is_open = false;
    descriptor.data = None;
    was_open
}

/// Raises `window` to the top without touching its open flag or payload.
pub fn focus_window(state: &mut DesktopState, window: WindowKind) -> Result<(), ReducerError> {
    let z_index = state.z_order.next()?;
    state.window_mut(window).z_index = z_index;
    Ok(())
}

/// Closes an open window, opens a closed one.
pub fn toggle_window(state: &mut DesktopState, window: WindowKind) -> Result<(), ReducerError> {
    if state.window(window).is_open {
        close_window(state, window);
        Ok(())
    } else {
        open_window(state, window, None)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        catalog::{FileType, LocationNode},
        model::WindowDescriptor,
        z_order::{ZOrderAllocator, ZOrderExhausted},
    };

    fn payload(name: &str) -> WindowPayload {
        Arc::new(LocationNode::file(1, name, FileType::Txt))
    }

    fn max_z_except(state: &DesktopState, window: WindowKind) -> u32 {
        state
            .windows()
            .filter(|w| w.id != window)
            .map(|w| w.z_index)
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn opening_closed_window_sets_payload_and_raises() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowKind::TxtFile, Some(payload("a.txt"))).unwrap();

        let window = state.window(WindowKind::TxtFile);
        assert!(window.is_open);
        assert_eq!(window.z_index, 1001);
        assert_eq!(window.data.as_ref().map(|n| n.name.as_str()), Some("a.txt"));
    }

    #[test]
    fn reopening_without_payload_keeps_existing_data() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowKind::TxtFile, Some(payload("a.txt"))).unwrap();
        open_window(&mut state, WindowKind::TxtFile, None).unwrap();

        let window = state.window(WindowKind::TxtFile);
        assert_eq!(window.z_index, 1002);
        assert_eq!(window.data.as_ref().map(|n| n.name.as_str()), Some("a.txt"));
    }

    #[test]
    fn reopening_with_payload_replaces_data() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowKind::ImgFile, Some(payload("a.png"))).unwrap();
        open_window(&mut state, WindowKind::ImgFile, Some(payload("b.png"))).unwrap();

        let window = state.window(WindowKind::ImgFile);
        assert_eq!(window.data.as_ref().map(|n| n.name.as_str()), Some("b.png"));
    }

    #[test]
    fn reopening_closed_window_without_payload_clears_stale_data() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowKind::TxtFile, Some(payload("a.txt"))).unwrap();
        close_window(&mut state, WindowKind::TxtFile);
        open_window(&mut state, WindowKind::TxtFile, None).unwrap();

        assert_eq!(state.window(WindowKind::TxtFile).data, None);
    }

    #[test]
    fn close_touches_only_the_target() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowKind::Finder, None).unwrap();
        open_window(&mut state, WindowKind::Terminal, None).unwrap();
        let before: Vec<WindowDescriptor> = state.windows().cloned().collect();

        assert!(close_window(&mut state, WindowKind::Finder));

        for (old, new) in before.iter().zip(state.windows()) {
            if new.id == WindowKind::Finder {
                assert!(!new.is_open);
                assert_eq!(new.z_index, old.z_index);
            } else {
                assert_eq!(new, old);
            }
        }
        assert!(!close_window(&mut state, WindowKind::Finder));
    }

    #[test]
    fn every_open_or_focus_puts_target_strictly_on_top() {
        let mut state = DesktopState::default();
        let sequence = [
            (WindowKind::Finder, true),
            (WindowKind::Safari, true),
            (WindowKind::Finder, false),
            (WindowKind::Photos, true),
            (WindowKind::Safari, false),
            (WindowKind::Finder, true),
            (WindowKind::Finder, false),
        ];

        let mut last_seen = std::collections::HashMap::new();
        for (window, open) in sequence {
            if open {
                open_window(&mut state, window, None).unwrap();
            } else {
                focus_window(&mut state, window).unwrap();
            }
            let z = state.window(window).z_index;
            assert!(z > max_z_except(&state, window), "{window} is on top");
            if let Some(previous) = last_seen.insert(window, z) {
                assert!(z > previous, "{window} z grows");
            }
        }
        assert_eq!(state.windows().count(), WindowKind::COUNT);
    }

    #[test]
    fn focus_preserves_relative_order_of_others() {
        let mut state = DesktopState::default();
        for window in [WindowKind::Finder, WindowKind::Resume, WindowKind::Contact] {
            open_window(&mut state, window, None).unwrap();
        }
        focus_window(&mut state, WindowKind::Finder).unwrap();

        assert_eq!(
            state.open_windows_in_stack_order(),
            vec![WindowKind::Resume, WindowKind::Contact, WindowKind::Finder]
        );
    }

    #[test]
    fn focus_leaves_open_flag_and_payload_alone() {
        let mut state = DesktopState::default();
        focus_window(&mut state, WindowKind::Photos).unwrap();
        let photos = state.window(WindowKind::Photos);
        assert!(!photos.is_open);
        assert_eq!(photos.z_index, 1001);
        assert_eq!(photos.data, None);
    }

    #[test]
    fn toggle_flips_open_state() {
        let mut state = DesktopState::default();
        toggle_window(&mut state, WindowKind::Terminal).unwrap();
        assert!(state.window(WindowKind::Terminal).is_open);
        toggle_window(&mut state, WindowKind::Terminal).unwrap();
        assert!(!state.window(WindowKind::Terminal).is_open);
    }

    #[test]
    fn exhausted_allocator_leaves_window_untouched() {
        let mut state = DesktopState::default();
        state.z_order = ZOrderAllocator::new(u32::MAX);
        assert_eq!(
            open_window(&mut state, WindowKind::Finder, None),
            Err(ReducerError::StackingExhausted(ZOrderExhausted(u32::MAX)))
        );
        assert!(!state.window(WindowKind::Finder).is_open);
    }
}

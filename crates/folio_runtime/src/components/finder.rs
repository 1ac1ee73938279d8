use super::*;

#[derive(Debug, Clone, PartialEq)]
/// Sidebar row: the folder it highlights and the action a click dispatches.
pub(crate) struct SidebarEntry {
    pub(crate) node: Arc<LocationNode>,
    pub(crate) action: DesktopAction,
}

/// "Favorites": the named roots, selected by root.
pub(crate) fn favorite_entries() -> Vec<SidebarEntry> {
    let locations = &desktop_config().locations;
    LocationRoot::ALL
        .into_iter()
        .map(|root| SidebarEntry {
            node: locations.root(root).clone(),
            action: DesktopAction::SelectRoot { root },
        })
        .collect()
}

/// "My Projects": the folders under the work root.
pub(crate) fn project_entries() -> Vec<SidebarEntry> {
    desktop_config()
        .locations
        .projects()
        .iter()
        .map(|node| SidebarEntry {
            node: node.clone(),
            action: DesktopAction::SetActiveLocation { node: node.clone() },
        })
        .collect()
}

/// Content-pane key. Sibling ids repeat across folders, so rows are keyed by node identity.
pub(crate) fn finder_item_key(item: &Arc<LocationNode>) -> usize {
    Arc::as_ptr(item) as usize
}

#[component]
pub(super) fn Finder() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let can_go_back = Signal::derive(move || runtime.state.get().location.can_go_back());
    let items = Signal::derive(move || runtime.state.get().location.visible_items().to_vec());

    view! {
        <div class="finder">
            <nav class="finder-sidebar" aria-label="Locations">
                <SidebarSection title="Favorites" entries=favorite_entries() />
                <SidebarSection title="My Projects" entries=project_entries() />
            </nav>
            <div class="finder-main">
                <div class="finder-toolbar">
                    <button
                        class="finder-back"
                        aria-label="Back"
                        disabled=move || !can_go_back.get()
                        on:click=move |_| runtime.dispatch_action(DesktopAction::NavigateBack)
                    >
                        "‹"
                    </button>
                    <span class="finder-path">
                        {move || {
                            runtime
                                .state
                                .get()
                                .location
                                .active()
                                .map(|folder| folder.name.clone())
                                .unwrap_or_default()
                        }}
                    </span>
                </div>
                <ul class="finder-content">
                    <For each=move || items.get() key=finder_item_key let:item>
                        <FinderItem item=item />
                    </For>
                </ul>
            </div>
        </div>
    }
}

#[component]
fn SidebarSection(title: &'static str, entries: Vec<SidebarEntry>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <section class="finder-sidebar-section">
            <h3>{title}</h3>
            <ul>
                {entries
                    .into_iter()
                    .map(|SidebarEntry { node, action }| {
                        let active_node = node.clone();
                        let is_active = Signal::derive(move || {
                            runtime.state.get().location.is_active(&active_node)
                        });
                        view! {
                            <li
                                class=move || if is_active.get() { "active" } else { "" }
                                on:click=move |_| runtime.dispatch_action(action.clone())
                            >
                                <img src=node.icon.clone() alt="" class="sidebar-icon" />
                                <span>{node.name.clone()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn FinderItem(item: Arc<LocationNode>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let target = item.clone();
    let position = item.position.clone().unwrap_or_default();

    view! {
        <li
            class=format!("finder-item {position}")
            on:click=move |_| {
                runtime.dispatch_action(DesktopAction::OpenItem {
                    node: target.clone(),
                });
            }
        >
            <img src=item.icon.clone() alt=item.name.clone() />
            <p>{item.name.clone()}</p>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::DesktopState, reducer::reduce_desktop};

    fn keys(folder: &LocationNode) -> HashSet<usize> {
        folder.children.iter().map(finder_item_key).collect()
    }

    #[test]
    fn sibling_project_folders_never_share_content_keys() {
        let projects = desktop_config().locations.projects();
        let first = &projects[0];
        let second = &projects[1];
        assert_eq!(
            first.children.iter().map(|item| item.id).collect::<Vec<_>>(),
            second.children.iter().map(|item| item.id).collect::<Vec<_>>(),
            "catalog reuses sibling ids across projects"
        );

        let first_keys = keys(first);
        let second_keys = keys(second);
        assert_eq!(first_keys.len(), first.children.len());
        assert!(first_keys.is_disjoint(&second_keys));
    }

    #[test]
    fn favorites_select_roots_and_land_on_them() {
        let entries = favorite_entries();
        assert_eq!(entries.len(), LocationRoot::ALL.len());

        for entry in entries {
            assert!(matches!(entry.action, DesktopAction::SelectRoot { .. }));
            let mut state = DesktopState::default();
            reduce_desktop(&mut state, entry.action).expect("select root");
            assert!(state.location.is_active(&entry.node));
        }
    }

    #[test]
    fn project_entries_navigate_to_their_folder() {
        let entries = project_entries();
        assert_eq!(entries.len(), desktop_config().locations.projects().len());

        for entry in entries {
            assert_eq!(
                entry.action,
                DesktopAction::SetActiveLocation {
                    node: entry.node.clone()
                }
            );
        }
    }
}

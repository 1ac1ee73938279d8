use folio_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="A macOS-style desktop portfolio running in the browser." />

        <div class="site-root">
            <DesktopEntry />
        </div>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=platform_host_web::build_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}

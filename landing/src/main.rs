// E9TH landing page - browser entry point (Leptos 0.8, csr)

use e9th_site::components::AppLayout;
use e9th_site::styles::stylesheet;
use e9th_site::LayoutContext;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

/// Current `window.innerWidth` in CSS pixels, desktop-sized when unavailable.
fn window_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w as u32)
        .unwrap_or(e9th_site::layout::MOBILE_BREAKPOINT)
}

#[component]
fn App() -> impl IntoView {
    let layout = RwSignal::new(LayoutContext::for_width(window_width()));

    let resize = window_event_listener(leptos::ev::resize, move |_| {
        layout.update(|ctx| *ctx = ctx.with_width(window_width()));
    });
    on_cleanup(move || resize.remove());

    view! {
        <style>{stylesheet()}</style>
        <AppLayout layout=layout />
    }
}

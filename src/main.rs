// SoloCalificados landing page, Leptos 0.8 CSR edition

mod scroll;
mod sections;
mod state;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use scroll::use_scroll_shadow;
use sections::*;
use state::{PageState, SectionId};

fn main() {
    console_error_panic_hook::set_once();
    log_boot_banner();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let page = RwSignal::new(PageState::default());
    provide_context(page);
    use_scroll_shadow(page);

    let shows = move |section: SectionId| move || page.with(|s| s.is_visible(section));

    view! {
        <Nav />
        <main>
            <Show when=shows(SectionId::Hero)><Hero /></Show>
            <Show when=shows(SectionId::About)><About /></Show>
            <Show when=shows(SectionId::Services)><Services /></Show>
            <Show when=shows(SectionId::Plans)><Plans /></Show>
            <Show when=shows(SectionId::Partners)><Partners /></Show>
            <Show when=shows(SectionId::Contact)><Contact /></Show>
            <Show when=shows(SectionId::Faq)><Faq /></Show>
        </main>
        <Footer />
        <FloatingWhatsApp />
    }
}

/// Short console banner so the page identifies itself in devtools.
fn log_boot_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{BRAND} landing")),
        &JsValue::from_str("color: #fb923c; font-weight: bold;"),
    );
}

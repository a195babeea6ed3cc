use leptos::prelude::*;

use super::WHATSAPP_URL;
use super::icons::{ICON_WHATSAPP, Icon};

/// Fixed-position WhatsApp contact button, visible on every scroll position.
#[component]
pub fn FloatingWhatsApp() -> impl IntoView {
    view! {
        <a
            href=WHATSAPP_URL
            target="_blank"
            rel="noopener noreferrer"
            class="whatsapp-fab"
            aria-label="Contactar por WhatsApp"
        >
            <Icon path=ICON_WHATSAPP size="28" />
        </a>
    }
}

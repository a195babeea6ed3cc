use leptos::prelude::*;

use super::BRAND;
use crate::scroll::{anchors, navigate_to};
use crate::state::use_page;

#[component]
pub fn Hero() -> impl IntoView {
    let page = use_page();
    let image_alt = format!(
        "Personas mirando la plataforma {BRAND} que muestra los valores principales: \
         Calidad, Seguridad, Eficiencia y Confianza"
    );

    view! {
        <section id=anchors::HERO class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">"TÍTULO"</h1>
                    <p class="hero-subtitle">"Bajada de título"</p>
                    <div class="hero-actions">
                        <button
                            class=move || page.with(|s| s.segment.cta_class())
                            on:click=move |_| navigate_to(page, anchors::CONTACT)
                        >
                            "CTA"
                        </button>
                    </div>
                </div>
                <div class="hero-media">
                    <img
                        src="images/hero-image.png"
                        alt=image_alt
                        width="600"
                        height="450"
                        class="hero-image"
                    />
                </div>
            </div>
        </section>
    }
}

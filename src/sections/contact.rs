use leptos::prelude::*;

use crate::scroll::anchors;
use crate::state::use_page;

/// Contact form, display only. Submission wiring is out of scope, so the
/// handler just stops the browser from navigating.
#[component]
pub fn Contact() -> impl IntoView {
    let page = use_page();

    view! {
        <section id=anchors::CONTACT class="contact">
            <div class="container contact-inner">
                <h2 class="section-title">"Formulario"</h2>
                <form class="contact-form" on:submit=move |ev| ev.prevent_default()>
                    <input type="text" placeholder="Nombre" class="form-input" />
                    <input type="email" placeholder="Email" class="form-input" />
                    <input type="tel" placeholder="Teléfono" class="form-input" />
                    <textarea placeholder="Mensaje" class="form-textarea"></textarea>
                    <button
                        type="submit"
                        class=move || {
                            page.with(|s| format!("{} form-submit", s.segment.cta_class()))
                        }
                    >
                        "Enviar"
                    </button>
                </form>
            </div>
        </section>
    }
}

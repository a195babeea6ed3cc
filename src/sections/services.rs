use leptos::prelude::*;

use crate::scroll::anchors;
use crate::state::use_page;

const CATEGORY_COUNT: usize = 5;

#[component]
pub fn Services() -> impl IntoView {
    let page = use_page();

    view! {
        <section id=anchors::SERVICES class="services">
            <div class="container">
                <h2 class="section-title">"TÍTULO"</h2>
                <p class="section-subtitle">"Bajada de título"</p>

                // Search UI only; there is no backend to query yet.
                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Buscar..."
                        class="search-input"
                    />
                    <button class=move || {
                        page.with(|s| format!("search-btn {}", s.segment.accent_class()))
                    }>
                        "Buscar"
                    </button>
                </div>

                <div class="category-grid">
                    {(1..=CATEGORY_COUNT)
                        .map(|_| {
                            view! {
                                <div class="category-tile">
                                    <div class="category-placeholder"></div>
                                    <span class="category-label">"Títulos"</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

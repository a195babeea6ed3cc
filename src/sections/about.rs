use leptos::prelude::*;

use crate::scroll::{anchors, navigate_to};
use crate::state::use_page;

const CARDS: &[(&str, &str)] = &[
    (
        "Imagen representativa 1",
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor \
         incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
         exercitation ullamco laboris.",
    ),
    (
        "Imagen representativa 2",
        "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip \
         ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit \
         esse cillum dolore.",
    ),
    (
        "Imagen representativa 3",
        "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu \
         fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in \
         culpa qui officia deserunt.",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    let page = use_page();

    view! {
        <section id=anchors::ABOUT class="about">
            <div class="container">
                <h2 class="section-title">"QUIENES SOMOS"</h2>
                <div class="about-grid">
                    {CARDS
                        .iter()
                        .map(|(alt, body)| {
                            view! {
                                <article class="about-card">
                                    <img
                                        src="images/placeholder.svg"
                                        alt=*alt
                                        width="280"
                                        height="280"
                                        class="about-card-image"
                                    />
                                    <p class="about-card-body">{*body}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="about-actions">
                    <button
                        class=move || page.with(|s| s.segment.cta_class())
                        on:click=move |_| navigate_to(page, anchors::FAQ)
                    >
                        "FAQ"
                    </button>
                </div>
            </div>
        </section>
    }
}

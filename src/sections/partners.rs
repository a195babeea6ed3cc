use leptos::prelude::*;

const PARTNER_COUNT: usize = 8;

/// Partner logo strip, shown for the owners segment only.
#[component]
pub fn Partners() -> impl IntoView {
    view! {
        <section class="partners">
            <div class="container">
                <h2 class="section-title">"Confían en nosotros"</h2>
                <div class="partners-grid">
                    {(1..=PARTNER_COUNT)
                        .map(|n| {
                            view! {
                                <div class="partner-tile">
                                    <img
                                        src="images/placeholder.svg"
                                        alt=format!("Logo de socio {n}")
                                        width="120"
                                        height="60"
                                        class="partner-logo"
                                    />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

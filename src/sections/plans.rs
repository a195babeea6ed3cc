use leptos::prelude::*;

use super::icons::{ICON_CHECK, Icon};

struct Plan {
    label: &'static str,
    tier: &'static str,
    intro: Option<&'static str>,
    features: &'static [&'static str],
    highlighted: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        label: "Plan 1",
        tier: "PRO",
        intro: None,
        features: &[
            "Mensajes",
            "Reportes",
            "Roles y permisos",
            "Encuestas",
            "Soporte online",
        ],
        highlighted: false,
    },
    Plan {
        label: "Plan 2",
        tier: "PREMIUM",
        intro: Some("Todo lo que tiene el plan Pro +"),
        features: &[
            "Sistema de Liquidación de expensas",
            "Denuncias y multas",
            "Seguridad para porterías",
            "Reservas amenities",
            "Botón de emergencias",
        ],
        highlighted: true,
    },
    Plan {
        label: "Plan 3",
        tier: "HARDWARE",
        intro: Some("Todo lo que tiene el plan Premium +"),
        features: &[
            "Sistema instalable",
            "Face Id",
            "Control de barreras",
            "Plataforma offline",
        ],
        highlighted: false,
    },
];

#[component]
pub fn Plans() -> impl IntoView {
    view! {
        <section class="plans">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Nuestros planes y herramientas"</p>
                    <h2 class="section-title">"90 días de garantía o devolución de dinero"</h2>
                </div>
                <div class="plans-grid">
                    {PLANS.iter().map(|plan| view! { <PlanCard plan=plan /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static Plan) -> impl IntoView {
    view! {
        <article class=if plan.highlighted { "plan-card highlighted" } else { "plan-card" }>
            <header class="plan-header">
                <div class="plan-label">{plan.label}</div>
                <div class="plan-tier">{plan.tier}</div>
            </header>
            <div class="plan-body">
                {plan.intro.map(|intro| view! { <p class="plan-intro">{intro}</p> })}
                <ul class="plan-features">
                    {plan
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="plan-feature">
                                    <Icon path=ICON_CHECK size="20" class="plan-check" />
                                    <span>{*feature}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </article>
    }
}

use leptos::prelude::*;

use super::BRAND;
use super::icons::{ICON_FACEBOOK, ICON_INSTAGRAM, ICON_LINKEDIN, ICON_TWITTER, Icon};
use crate::scroll::{anchors, navigate_to};
use crate::state::use_page;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <img src="images/logo.png" alt=BRAND width="160" height="40" />
                        <p class="footer-tagline">
                            "Conectando profesionales calificados con clientes exigentes."
                        </p>
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-heading">"Enlaces rápidos"</h3>
                        <ul class="footer-links">
                            <li><FooterLink target=anchors::HERO label="Inicio" /></li>
                            <li><FooterLink target=anchors::ABOUT label="Quienes somos" /></li>
                            <li><FooterLink target=anchors::SERVICES label="Servicios" /></li>
                            <li><FooterLink target=anchors::CONTACT label="Contacto" /></li>
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-heading">"Soporte"</h3>
                        <ul class="footer-links">
                            <li><FooterLink target=anchors::FAQ label="FAQ" /></li>
                            <li>
                                <a href="#" class="footer-link">"Política de privacidad"</a>
                            </li>
                            <li>
                                <a href="#" class="footer-link">"Términos de servicio"</a>
                            </li>
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-heading">"Síguenos"</h3>
                        <div class="footer-social">
                            <a href="#" class="footer-social-link" aria-label="Facebook">
                                <Icon path=ICON_FACEBOOK />
                            </a>
                            <a href="#" class="footer-social-link" aria-label="Twitter">
                                <Icon path=ICON_TWITTER />
                            </a>
                            <a href="#" class="footer-social-link" aria-label="Instagram">
                                <Icon path=ICON_INSTAGRAM />
                            </a>
                            <a href="#" class="footer-social-link" aria-label="LinkedIn">
                                <Icon path=ICON_LINKEDIN />
                            </a>
                        </div>
                    </div>
                </div>

                <p class="footer-copyright">
                    {format!("© 2025 {BRAND}. Todos los derechos reservados.")}
                </p>
            </div>
        </footer>
    }
}

#[component]
fn FooterLink(target: &'static str, label: &'static str) -> impl IntoView {
    let page = use_page();
    view! {
        <a
            href=format!("#{target}")
            class="footer-link"
            on:click=move |ev| {
                ev.prevent_default();
                navigate_to(page, target);
            }
        >
            {label}
        </a>
    }
}

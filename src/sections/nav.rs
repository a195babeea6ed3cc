use leptos::prelude::*;

use super::icons::{ICON_CLOSE, ICON_MENU, ICON_WHATSAPP, Icon};
use super::{BRAND, WHATSAPP_URL};
use crate::scroll::{HEADER_OFFSET_PX, anchors, navigate_to};
use crate::state::{Segment, use_page};

#[component]
pub fn Nav() -> impl IntoView {
    let page = use_page();

    view! {
        <div class=move || {
            if page.with(|s| s.scrolled) { "site-header stuck" } else { "site-header" }
        }>
            <header class="header-bar">
                <div class="container header-inner">
                    <a
                        href="#hero"
                        class="header-logo"
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate_to(page, anchors::HERO);
                        }
                    >
                        <img src="images/logo.png" alt=BRAND width="160" height="40" />
                    </a>

                    <nav class=move || {
                        if page.with(|s| s.menu_open) { "header-nav open" } else { "header-nav" }
                    }>
                        <NavLink target=anchors::ABOUT label="Quienes somos" />
                        <NavLink target=anchors::SERVICES label="Servicios" />
                        <NavLink target=anchors::CONTACT label="Formulario" />
                        <NavLink target=anchors::FAQ label="FAQ" />
                    </nav>

                    <div class="header-actions">
                        <a
                            href=WHATSAPP_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="header-whatsapp"
                            aria-label="WhatsApp"
                        >
                            <Icon path=ICON_WHATSAPP />
                        </a>
                        <button
                            class="menu-toggle"
                            aria-label="Menú"
                            on:click=move |_| page.update(|s| s.toggle_menu())
                        >
                            {move || {
                                if page.with(|s| s.menu_open) {
                                    view! { <Icon path=ICON_CLOSE /> }.into_any()
                                } else {
                                    view! { <Icon path=ICON_MENU /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </header>

            <SegmentSwitch />
        </div>

        // Spacer so content starts below the fixed header block.
        <div class="header-spacer" style=format!("height: {HEADER_OFFSET_PX}px;")></div>
    }
}

#[component]
fn NavLink(target: &'static str, label: &'static str) -> impl IntoView {
    let page = use_page();
    view! {
        <a
            href=format!("#{target}")
            class="nav-link"
            on:click=move |ev| {
                ev.prevent_default();
                navigate_to(page, target);
            }
        >
            {label}
        </a>
    }
}

/// Two-way audience toggle shown directly under the header bar.
#[component]
fn SegmentSwitch() -> impl IntoView {
    view! {
        <div class="segment-bar">
            <div class="container segment-inner">
                <div class="segment-switch">
                    <SegmentPill segment=Segment::Proveedores />
                    <SegmentPill segment=Segment::Duenos />
                </div>
            </div>
        </div>
    }
}

#[component]
fn SegmentPill(segment: Segment) -> impl IntoView {
    let page = use_page();
    view! {
        <button
            class=move || segment.switch_class(page.with(|s| s.segment))
            on:click=move |_| page.update(|s| s.set_segment(segment))
        >
            {segment.label()}
        </button>
    }
}

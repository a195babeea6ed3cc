//! Inline SVG icon components.
//!
//! Outline icons in the Feather/Lucide style, rendered from path data
//! strings so sections never pull in an icon font.

use leptos::prelude::*;

/// Renders an inline stroke SVG icon from a path data string.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

/// WhatsApp speech bubble
pub const ICON_WHATSAPP: &str = "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z";

/// Checkmark for plan feature lists
pub const ICON_CHECK: &str = "M20 6L9 17l-5-5";

/// Hamburger menu (three bars)
pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

/// Close cross for the open mobile menu
pub const ICON_CLOSE: &str = "M6 18L18 6M6 6l12 12";

/// Facebook
pub const ICON_FACEBOOK: &str =
    "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z";

/// Twitter
pub const ICON_TWITTER: &str = "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-10.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z";

/// Instagram (frame, lens and flash as one path)
pub const ICON_INSTAGRAM: &str = "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zM16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37zM17.5 6.5h.01";

/// LinkedIn (bar, dot and hook as one path)
pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4V8h4v2.68A6 6 0 0 1 16 8zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z";

// Landing page sections

/// Brand name used across the page (single source of truth)
pub const BRAND: &str = "SoloCalificados";

/// WhatsApp deep link shared by the header icon and the floating button.
/// Placeholder number until marketing assigns the business line.
pub const WHATSAPP_URL: &str = "https://wa.me/5491100000000";

mod about;
mod contact;
mod faq;
mod footer;
mod hero;
mod icons;
mod nav;
mod partners;
mod plans;
mod services;
mod whatsapp;

pub use about::About;
pub use contact::Contact;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use partners::Partners;
pub use plans::Plans;
pub use services::Services;
pub use whatsapp::FloatingWhatsApp;

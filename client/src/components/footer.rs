//! Site footer with brand mark and credits.

use leptos::prelude::*;

use crate::util::guide_content::{
    BRAND, COPYRIGHT, CREDIT_PREFIX, DEVELOPER_LINK, FooterLink, SOURCE_LINK, TAGLINE,
};

fn external_link(link: FooterLink) -> impl IntoView {
    view! {
        <a class="footer__link" href=link.href target="_blank" rel="noopener noreferrer">
            {link.label}
        </a>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <p class="footer__name">{BRAND}</p>
                    <p class="footer__tagline">{TAGLINE}</p>
                </div>
                <div class="footer__legal">
                    <p class="footer__copyright">{COPYRIGHT}</p>
                    <p class="footer__credit">
                        {CREDIT_PREFIX} " " {external_link(DEVELOPER_LINK)} " | "
                        {external_link(SOURCE_LINK)}
                    </p>
                </div>
            </div>
        </footer>
    }
}

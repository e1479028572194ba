//! Parts of the page that surround every view.

use leptos::prelude::*;
use xmode_core::config::SocialLink;
use xmode_core::{NavItem, PageId, ThemeState};

use crate::icons::{nav_icon, MoonIcon, SunIcon};

#[component]
pub fn ThemeToggleButton(theme: RwSignal<ThemeState>) -> impl IntoView {
    let mode = Memo::new(move |_| theme.with(ThemeState::mode));

    view! {
        <button
            class="theme-toggle"
            aria-label=move || mode.get().toggle_label()
            on:click=move |_| theme.update(|state| {
                state.toggle();
            })
        >
            {move || {
                if mode.get().is_dark() {
                    view! { <SunIcon/> }.into_any()
                } else {
                    view! { <MoonIcon/> }.into_any()
                }
            }}
        </button>
    }
}

/// Pulsing placeholder shown until the skeleton gate opens.
#[component]
pub fn LoadingSkeleton() -> impl IntoView {
    view! {
        <div class="container skeleton" aria-busy="true">
            <div class="skeleton-block skeleton-hero"></div>
            <div class="skeleton-lines">
                <div class="skeleton-block skeleton-line w-3-4"></div>
                <div class="skeleton-block skeleton-line"></div>
                <div class="skeleton-block skeleton-line w-5-6"></div>
            </div>
            <div class="skeleton-grid">
                {(0..6).map(|_| view! { <div class="skeleton-block skeleton-card"></div> }).collect_view()}
            </div>
        </div>
    }
}

/// Sticky navigation bar at the bottom of the viewport.
#[component]
pub fn FooterNav(
    current: Memo<PageId>,
    on_navigate: Callback<PageId>,
    on_channel: Callback<()>,
) -> impl IntoView {
    let items = NavItem::FOOTER
        .into_iter()
        .map(|item| {
            let state_class = move || {
                if item.is_active(current.get()) {
                    "nav-item text-primary"
                } else {
                    "nav-item text-secondary"
                }
            };
            let on_click = move |_| match item {
                NavItem::Page(page) => on_navigate.run(page),
                NavItem::Channel => on_channel.run(()),
            };

            view! {
                <button class=state_class data-nav=item.key() on:click=on_click>
                    <span class="nav-icon">{nav_icon(item)}</span>
                    <span class="nav-label">{item.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="footer-nav">
            <div class="container footer-nav-items">{items}</div>
        </nav>
    }
}

#[component]
pub fn MainFooter(
    brand: String,
    tagline: String,
    copyright: String,
    socials: Vec<SocialLink>,
) -> impl IntoView {
    let links = socials
        .into_iter()
        .map(|social| {
            let class = format!("social-link social-{}", social.name.to_lowercase());
            view! {
                <a class=class href=social.url target="_blank" rel="noopener noreferrer">
                    {social.name}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="main-footer">
            <div class="container">
                <h3 class="footer-brand">{brand}</h3>
                <p class="footer-tagline">{tagline}</p>
                <div class="social-links">{links}</div>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}

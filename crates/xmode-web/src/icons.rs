//! Lucide outline icons used across the site.

use leptos::prelude::*;
use xmode_core::{NavItem, PageId};

#[component]
fn Outline(children: Children, #[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn SunIcon() -> impl IntoView {
    view! {
        <Outline>
            <circle cx="12" cy="12" r="4"/>
            <path d="M12 2v2"/>
            <path d="M12 20v2"/>
            <path d="M4.93 4.93l1.41 1.41"/>
            <path d="M17.66 17.66l1.41 1.41"/>
            <path d="M2 12h2"/>
            <path d="M20 12h2"/>
            <path d="M4.93 19.07l1.41-1.41"/>
            <path d="M17.66 6.34l1.41-1.41"/>
        </Outline>
    }
}

#[component]
pub fn MoonIcon() -> impl IntoView {
    view! {
        <Outline>
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>
        </Outline>
    }
}

#[component]
pub fn YouTubeIcon() -> impl IntoView {
    view! {
        <Outline>
            <path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 2-2h15a2 2 0 0 1 2 2 24.12 24.12 0 0 1 0 10 2 2 0 0 1-2 2h-15a2 2 0 0 1-2-2Z"/>
            <path d="m10 15 5-3-5-3v6Z"/>
        </Outline>
    }
}

#[component]
pub fn MailIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <Outline size=size>
            <rect width="20" height="16" x="2" y="4" rx="2"/>
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>
        </Outline>
    }
}

#[component]
pub fn FolderIcon() -> impl IntoView {
    view! {
        <Outline>
            <path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h3.93a2 2 0 0 1 1.66.9l.82 1.2a2 2 0 0 0 1.66.9H20a2 2 0 0 1 2 2Z"/>
            <path d="M2 12h20"/>
        </Outline>
    }
}

#[component]
pub fn StoreIcon() -> impl IntoView {
    view! {
        <Outline>
            <path d="m2 7 4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7"/>
            <path d="M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8"/>
            <path d="M15 22v-4a2 2 0 0 0-2-2h-2a2 2 0 0 0-2 2v4"/>
            <path d="M2 7h20"/>
            <path d="M12 7v15"/>
        </Outline>
    }
}

/// Icon for an entry of the footer navigation bar
pub fn nav_icon(item: NavItem) -> AnyView {
    match item {
        NavItem::Channel => view! { <YouTubeIcon/> }.into_any(),
        NavItem::Page(PageId::About) => view! {
            <Outline>
                <path d="M18 20a6 6 0 0 0-12 0"/>
                <circle cx="12" cy="10" r="4"/>
                <circle cx="12" cy="12" r="10"/>
            </Outline>
        }
        .into_any(),
        NavItem::Page(PageId::Home) => view! {
            <Outline>
                <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
                <polyline points="9 22 9 12 15 12 15 22"/>
            </Outline>
        }
        .into_any(),
        NavItem::Page(PageId::Projects) => view! {
            <Outline>
                <rect width="20" height="14" x="2" y="7" rx="2" ry="2"/>
                <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>
            </Outline>
        }
        .into_any(),
        NavItem::Page(PageId::Store) => view! {
            <Outline>
                <path d="M6 2L3 7v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V7l-3-5Z"/>
                <path d="M3 7h18"/>
                <path d="M16 10a4 4 0 0 1-8 0"/>
            </Outline>
        }
        .into_any(),
    }
}

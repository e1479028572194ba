use leptos::prelude::*;
use leptos_meta::*;
use xmode_core::config::SkillConfig;
use xmode_core::{DeepLinkDispatcher, Navigator, PageId, SiteConfig, SkeletonGate, ThemeState};

use crate::browser::{self, BrowserLauncher, WindowViewport};
use crate::chrome::{FooterNav, LoadingSkeleton, MainFooter, ThemeToggleButton};
use crate::pages::{AboutPage, HomePage, ProjectsPage, StorePage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = match SiteConfig::load() {
        Ok(config) => view! { <Site config=config/> }.into_any(),
        Err(err) => {
            log::error!("{:#}", err);
            view! {
                <main class="config-error">
                    <h1>"Config load failed"</h1>
                    <p>{format!("{:#}", err)}</p>
                </main>
            }
            .into_any()
        }
    };

    view! {
        <Html attr:lang="ar" attr:dir="rtl"/>
        <Title text="X-MODE"/>
        <Meta name="description" content="المنصة الرسمية لـ X-MODE: مشاريع برمجية، تحليلات ألعاب، ومتجر قادم."/>
        {site}
    }
}

#[component]
fn Site(config: SiteConfig) -> impl IntoView {
    let theme = RwSignal::new(ThemeState::new());
    let navigator = RwSignal::new(Navigator::new());
    let gate = RwSignal::new(SkeletonGate::new());
    arm_skeleton_gate(gate);

    let current = Memo::new(move |_| navigator.with(Navigator::current));
    let loaded = Memo::new(move |_| !gate.with(SkeletonGate::is_loading));

    let on_navigate = Callback::new(move |page: PageId| {
        navigator.update(|nav| nav.navigate_to(page, &WindowViewport));
    });

    let dispatcher = DeepLinkDispatcher::new(config.channel.clone());
    let on_channel = Callback::new(move |_: ()| {
        let plan = dispatcher.open_channel(&browser::user_agent(), &BrowserLauncher);
        if plan.may_open_redundant_context() {
            log::debug!("web fallback scheduled after native attempt on {}", plan.platform);
        }
    });

    let root_class = move || format!("site custom-scrollbar {}", theme.with(ThemeState::root_class));
    let pages_config = config.clone();

    view! {
        <div class=root_class>
            <ThemeToggleButton theme=theme/>

            <main class="site-main">
                <Show when=move || loaded.get() fallback=|| view! { <LoadingSkeleton/> }>
                    <div class="container page-container">
                        {
                            let pages_config = pages_config.clone();
                            move || render_page(current.get(), pages_config.clone(), on_navigate, on_channel)
                        }
                    </div>
                </Show>
                <MainFooter
                    brand=config.brand.clone()
                    tagline=config.tagline.clone()
                    copyright=config.copyright.clone()
                    socials=config.socials.clone()
                />
            </main>

            <FooterNav current=current on_navigate=on_navigate on_channel=on_channel/>
        </div>
    }
}

fn render_page(
    page: PageId,
    config: SiteConfig,
    on_navigate: Callback<PageId>,
    on_channel: Callback<()>,
) -> AnyView {
    match page {
        PageId::Home => view! {
            <HomePage config=config on_navigate=on_navigate on_channel=on_channel/>
        }
        .into_any(),
        PageId::Projects => view! { <ProjectsPage/> }.into_any(),
        PageId::Store => view! { <StorePage brand=config.brand/> }.into_any(),
        PageId::About => {
            let contact_uri = config.contact_uri();
            let skills = config.skills.iter().map(SkillConfig::bar).collect::<Vec<_>>();
            view! {
                <AboutPage
                    brand=config.brand
                    contact_email=config.contact_email
                    contact_uri=contact_uri
                    skills=skills
                />
            }
            .into_any()
        }
    }
}

/// Open the gate after its delay; disarm it if the site is torn down first.
fn arm_skeleton_gate(gate: RwSignal<SkeletonGate>) {
    let delay = gate.with_untracked(SkeletonGate::delay);
    let opened = set_timeout_with_handle(
        move || {
            gate.try_update(|gate| {
                gate.complete();
            });
        },
        delay,
    );

    match opened {
        Ok(handle) => on_cleanup(move || {
            handle.clear();
            gate.try_update(SkeletonGate::cancel);
        }),
        Err(err) => {
            log::warn!("failed to arm skeleton timer, showing content now: {:?}", err);
            gate.update(|gate| {
                gate.complete();
            });
        }
    }
}

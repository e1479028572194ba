use leptos::html::{Div, Span};
use leptos::prelude::*;
use xmode_core::config::StatConfig;
use xmode_core::{CountUp, PageId, SiteConfig, Threshold};

use super::fade_class;
use crate::browser;
use crate::icons::{FolderIcon, MailIcon, StoreIcon, YouTubeIcon};
use crate::reveal::RevealScope;

#[component]
pub fn HomePage(
    config: SiteConfig,
    on_navigate: Callback<PageId>,
    on_channel: Callback<()>,
) -> impl IntoView {
    let sections = RevealScope::new(Threshold::SECTION);
    let hero_ref = NodeRef::<Div>::new();
    let links_ref = NodeRef::<Div>::new();
    let summary_ref = NodeRef::<Div>::new();
    let stats_ref = NodeRef::<Div>::new();
    let social_ref = NodeRef::<Div>::new();

    let hero = sections.track(hero_ref);
    let links = sections.track(links_ref);
    let summary = sections.track(summary_ref);
    let stats = sections.track(stats_ref);
    let social = sections.track(social_ref);

    let brand = config.brand.clone();
    let counters = config
        .stats
        .into_iter()
        .map(|stat| {
            let label = stat.label.clone();
            view! {
                <div class="stat-card">
                    <p class="stat-value"><AnimatedCounter stat=stat/>"+"</p>
                    <p class="stat-label">{label}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="home">
            <div node_ref=hero_ref class=move || fade_class("hero", hero.get())>
                <h1 class="hero-title">"مرحباً بك في " <span class="text-accent-blue">{brand}</span></h1>
                <p class="hero-intro">
                    "مرحباً بك في الموقع الرسمي لمسلم، الشاب العراقي الطموح الذي يجمع بكل احتراف بين شغف البرمجة وعمق عالم الألعاب. "
                    "أسستُ هذه المنصة كواجهة موحدة لإبراز مشاريعي البرمجية، أفكاري التطبيقية، ومستقبل مشوّق ينبض بالإبداع. "
                    "كما تدعوك قناة X‑MODE على YouTube للاستمتاع بتحليلات تقنية ومحتوى ترفيهي يعكس روح الشباب والحماس."
                </p>
                <p class="hero-motto">"هنا، أصمم المستقبل، أحلل الألعاب، وأشارك شغفي بكل ما هو تقني ومثير."</p>
                <NewsTicker items=config.news/>
            </div>

            <div node_ref=links_ref class=move || fade_class("feature-links", links.get())>
                <FeatureLink text="قناة X-MODE للألعاب" on_click=on_channel>
                    <YouTubeIcon/>
                </FeatureLink>
                <FeatureLink text="معرض مشاريعنا" on_click=Callback::new(move |_| on_navigate.run(PageId::Projects))>
                    <FolderIcon/>
                </FeatureLink>
                <FeatureLink text="متجرنا الإلكتروني" on_click=Callback::new(move |_| on_navigate.run(PageId::Store))>
                    <StoreIcon/>
                </FeatureLink>
                <FeatureLink text="تواصل معنا" on_click=Callback::new(move |_| on_navigate.run(PageId::About))>
                    <MailIcon/>
                </FeatureLink>
            </div>

            <div node_ref=summary_ref class=move || fade_class("card", summary.get())>
                <h2 class="section-title">"نبذة سريعة"</h2>
                <p>
                    "أنا مسلم، شاب عراقي طموح، أجمع بين شغفي العميق بالبرمجة وعالم الألعاب. "
                    "في هذه المنصة، أشارك رحلتي في بناء مشاريع برمجية مبتكرة، وأقدم تحليلات شيقة لمختلف الألعاب على قناتي X-MODE على يوتيوب."
                </p>
                <hr/>
                <p>
                    <strong class="text-accent-blue">"الرؤية:"</strong>
                    " أن أكون جسراً بين أحدث التقنيات وعالم الشباب العربي، مقدماً محتوىً هادفاً ومشاريع ملهمة تدفع نحو مستقبل رقمي واعد."
                </p>
                <hr/>
                <p>
                    <strong class="text-accent-blue">"الرسالة:"</strong>
                    " تمكين الشباب من خلال مشاركة المعرفة والخبرة في مجالات البرمجة والألعاب، وتشجيعهم على الابتكار والتعبير عن إبداعاتهم الرقمية."
                </p>
                <button class="button-accent" on:click=move |_| on_navigate.run(PageId::About)>
                    "اكتشف المزيد عني"
                </button>
            </div>

            <div node_ref=stats_ref class=move || fade_class("card stats", stats.get())>
                <h2 class="section-title">"إنجازاتنا بالأرقام"</h2>
                <div class="stats-grid">{counters}</div>
            </div>

            <div node_ref=social_ref class=move || fade_class("social-cta", social.get())>
                <h2 class="section-title">"تواصلوا معنا عبر منصات التواصل الاجتماعي"</h2>
                <p class="text-secondary">"تابعوا آخر التحديثات والمحتوى الحصري. الروابط متوفرة في الأسفل!"</p>
            </div>
        </section>
    }
}

#[component]
fn FeatureLink(text: &'static str, on_click: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <button class="feature-link" on:click=move |_| on_click.run(())>
            <div class="feature-icon">{children()}</div>
            <span class="feature-text">{text}</span>
        </button>
    }
}

/// Marquee of news items. The list is rendered twice so the CSS loop has
/// no gap.
#[component]
fn NewsTicker(items: Vec<String>) -> impl IntoView {
    let entries = items
        .iter()
        .chain(items.iter())
        .map(|item| view! { <span class="news-item">{item.clone()}</span> })
        .collect_view();

    view! {
        <div class="news-ticker">
            <div class="news-ticker-content">{entries}</div>
        </div>
    }
}

/// Number that counts up from zero once half of it is on screen.
#[component]
fn AnimatedCounter(stat: StatConfig) -> impl IntoView {
    let scope = RevealScope::new(Threshold::COUNTER);
    let node = NodeRef::<Span>::new();
    let revealed = scope.track(node);
    let (value, set_value) = signal(0u64);
    let counter = stat.counter();

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !revealed.get() {
            return false;
        }
        run_count_up(counter, set_value);
        true
    });

    view! { <span node_ref=node>{value}</span> }
}

fn run_count_up(mut counter: CountUp, set_value: WriteSignal<u64>) {
    request_animation_frame(move || {
        let Some(now) = browser::now_ms() else {
            set_value.try_set(counter.end_value());
            return;
        };
        let shown = counter.tick(now);
        // Stop once the counter has been unmounted
        if set_value.try_set(shown).is_some() {
            return;
        }
        if !counter.is_finished() {
            run_count_up(counter, set_value);
        }
    });
}

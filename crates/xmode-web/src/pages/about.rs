use leptos::html::Div;
use leptos::prelude::*;
use xmode_core::{Launcher, SkillBar, Threshold};

use super::fade_class;
use crate::browser::BrowserLauncher;
use crate::icons::MailIcon;
use crate::reveal::RevealScope;

#[component]
pub fn AboutPage(
    brand: String,
    contact_email: String,
    contact_uri: String,
    skills: Vec<SkillBar>,
) -> impl IntoView {
    let scope = RevealScope::new(Threshold::SECTION);
    let page_ref = NodeRef::<Div>::new();
    let contact_ref = NodeRef::<Div>::new();
    let page = scope.track(page_ref);
    let contact = scope.track(contact_ref);

    let bars = skills
        .into_iter()
        .map(|bar| view! { <SkillItem bar=bar scope=scope/> })
        .collect_view();

    let on_email = move |_| BrowserLauncher.navigate(&contact_uri);

    view! {
        <section class="page">
            <div node_ref=page_ref class=move || fade_class("page-body about", page.get())>
                <h1 class="page-title">"من أنا؟"</h1>

                <div class="card">
                    <h2 class="section-title">"👤 نبذة عني"</h2>
                    <p>
                        "أنا مسلم، شاب عراقي من ذي قار، مبرمج ومحلل تقني مهتم بصناعة محتوى شبابي احترافي يجمع بين التقنية والإعلام. "
                        "أؤمن أن البرمجة ليست مجرد أكواد، بل وسيلة للتعبير، للتحليل، ولصناعة واقع رقمي يليق بطموحات الجيل القادم. "
                        {format!("أعمل على بناء هوية رقمية تجمع بين مشاريعي البرمجية، محتواي التحليلي، ومتجري الإلكتروني، ضمن منصة واحدة: {brand}.")}
                    </p>
                    <h2 class="section-title">"🌌 الرؤية"</h2>
                    <p>
                        "أن أكون من أوائل الشباب العرب الذين يجمعون بين البرمجة، التحليل التقني، وصناعة المحتوى الشبابي، "
                        "عبر منصة ذكية مؤثرة، تجعل من كل مشروع خطوة نحو التميّز، ومن كل فكرة واقع رقمي فعّال."
                    </p>
                    <h2 class="section-title">"🎯 الرسالة"</h2>
                    <p>
                        "بناء منصة رقمية شخصية تعكس هويتي كمبرمج ومحلل، توثّق مشاريعي، تعزز قناتي، وتفتح أبوابًا للتواصل المهني مع جمهوري، "
                        "مع توفير تجربة رقمية فريدة تليق بتطلعات الشباب العربي الطموح في عالم التقنية والميديا."
                    </p>
                </div>

                <div class="card">
                    <h2 class="section-title centered">"مهاراتي"</h2>
                    <div class="skills">{bars}</div>
                </div>

                <div node_ref=contact_ref class=move || fade_class("card contact", contact.get())>
                    <h2 class="section-title">"تواصل معنا"</h2>
                    <p class="text-secondary">"يمكنك التواصل معي مباشرة عبر البريد الإلكتروني:"</p>
                    <button class="button-accent contact-button" on:click=on_email>
                        <MailIcon size=20/>
                        {contact_email}
                    </button>
                </div>
            </div>
        </section>
    }
}

/// Skill name, level and a bar that fills once the row is revealed.
#[component]
fn SkillItem(bar: SkillBar, scope: RevealScope) -> impl IntoView {
    let row_ref = NodeRef::<Div>::new();
    let revealed = scope.track(row_ref);
    let name = bar.name().to_string();
    let level = bar.level();
    let level_label = bar.level_label();

    view! {
        <div node_ref=row_ref class=move || fade_class("skill-item", revealed.get())>
            <div class="skill-header">
                <span class="skill-name">{name}</span>
                <span class="skill-level">{level_label}</span>
            </div>
            <div class="skill-progress-bar">
                <div
                    class="skill-progress-fill"
                    data-level=level.to_string()
                    style:width=move || bar.fill_width(revealed.get())
                ></div>
            </div>
        </div>
    }
}

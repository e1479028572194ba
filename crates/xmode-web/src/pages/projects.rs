use leptos::html::Div;
use leptos::prelude::*;
use xmode_core::Threshold;

use super::fade_class;
use crate::reveal::RevealScope;

/// A finished project shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
}

/// Gallery contents; empty until the first project ships
const PROJECTS: &[Project] = &[];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let scope = RevealScope::new(Threshold::SECTION);
    let page_ref = NodeRef::<Div>::new();
    let revealed = scope.track(page_ref);

    let cards = PROJECTS
        .iter()
        .map(|project| {
            view! {
                <article class="project-card">
                    <h3>{project.title}</h3>
                    <p class="text-secondary">{project.summary}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="page">
            <div node_ref=page_ref class=move || fade_class("page-body", revealed.get())>
                <h1 class="page-title">"معرض مشاريعنا"</h1>
                <p class="page-lead">"ترقبوا المزيد من المشاريع المبتكرة قريباً!"</p>

                <Show when=|| PROJECTS.is_empty()>
                    <div class="card empty-state">
                        <p>"لا توجد مشاريع لعرضها حاليًا."</p>
                        <p class="text-secondary">
                            "اعمل بجد على مشاريع جديدة ومثيرة، وسأضيفها هنا فور انتهائي منها."
                        </p>
                    </div>
                </Show>

                <div class="project-grid">{cards}</div>
            </div>
        </section>
    }
}

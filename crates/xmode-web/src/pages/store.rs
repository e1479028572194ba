use leptos::ev::SubmitEvent;
use leptos::html::{Div, Input};
use leptos::prelude::*;
use xmode_core::{notify, Threshold};

use super::fade_class;
use crate::browser;
use crate::reveal::RevealScope;

#[component]
pub fn StorePage(brand: String) -> impl IntoView {
    let scope = RevealScope::new(Threshold::SECTION);
    let page_ref = NodeRef::<Div>::new();
    let revealed = scope.track(page_ref);
    let email_ref = NodeRef::<Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(input) = email_ref.get() else { return };

        let outcome = notify::submit(&input.value());
        browser::alert(outcome.message());
        if outcome.clears_input() {
            input.set_value("");
        }
    };

    view! {
        <section class="page">
            <div node_ref=page_ref class=move || fade_class("page-body", revealed.get())>
                <h1 class="page-title">"متجرنا الإلكتروني"</h1>
                <p class="page-lead">"قريباً جداً! احرص على متابعة آخر التحديثات عبر وسائل التواصل."</p>

                <div class="card notify-card">
                    <h2 class="section-title">"أعلمني عند الإطلاق"</h2>
                    <p class="text-secondary">{format!("كن أول من يعلم بفتح أبواب متجر {brand}!")}</p>
                    <form class="notify-form" novalidate=true on:submit=on_submit>
                        <input
                            node_ref=email_ref
                            type="email"
                            name="email"
                            placeholder="أدخل بريدك الإلكتروني هنا"
                            required=true
                        />
                        <button type="submit" class="button-accent">"أعلمني عند الإطلاق"</button>
                    </form>
                </div>
            </div>
        </section>
    }
}

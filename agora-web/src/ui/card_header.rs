use agora_client::{
    api::{Author, Time},
    time_ago,
};
use chrono::Utc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CardHeaderProps {
    pub author: Author,
    pub posted_at: Time,
    pub on_more: Callback<()>,
}

#[function_component(CardHeader)]
pub fn card_header(p: &CardHeaderProps) -> Html {
    let a = &p.author;
    let badge = a.badge.as_ref().map(|b| {
        html! {
            <span class="badge rounded-pill text-bg-light ms-2">
                { for b.emoji.as_ref().map(|e| html! { <span class="me-1">{ e }</span> }) }
                { &b.text }
            </span>
        }
    });
    let subtitle = [
        a.username.as_ref().map(|u| format!("@{u}")),
        a.category.clone(),
        Some(time_ago(p.posted_at, Utc::now())),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");
    html! {
        <div class="card-header d-flex align-items-center">
            <img class="avatar rounded-circle me-2" src={ a.avatar.clone() } alt={ a.name.clone() } />
            <div class="flex-fill">
                <div class="fw-semibold">
                    { &a.name }
                    { for a.emoji.as_ref().map(|e| html! { <span class="ms-1">{ e }</span> }) }
                    { for badge }
                </div>
                <div class="text-muted small" title={ p.posted_at.to_rfc2822() }>{ subtitle }</div>
            </div>
            <button
                type="button"
                class="btn btn-light btn-circle bi-btn bi-three-dots"
                title="More"
                onclick={ p.on_more.reform(|e: MouseEvent| e.stop_propagation()) }
            >
            </button>
        </div>
    }
}

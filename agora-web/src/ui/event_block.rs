use std::rc::Rc;

use agora_client::{
    api::{Event, EventStatus},
    compact_count, truncate, CardConfig, EventLayout, Interaction,
};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct EventBlockProps {
    pub event: Event,
    pub layout: EventLayout,
    pub config: Rc<CardConfig>,
    pub on_interact: Callback<Interaction>,
}

fn status_badge(status: EventStatus) -> Html {
    match status {
        EventStatus::Upcoming => html! { <span class="badge text-bg-primary">{ "Upcoming" }</span> },
        EventStatus::Ongoing => html! {
            <span class="badge text-bg-danger">
                <span class="live-indicator me-1" aria-hidden="true"></span>
                { "Live" }
            </span>
        },
        EventStatus::Completed => html! { <span class="badge text-bg-secondary">{ "Ended" }</span> },
    }
}

fn details(e: &Event) -> Html {
    let host = e.host.as_ref().map(|h| {
        html! {
            <div class="d-flex align-items-center my-2">
                <img class="avatar avatar-sm rounded-circle me-2" src={ h.avatar.clone() } alt={ h.name.clone() } />
                <span class="small">{ "Hosted by " }<span class="fw-semibold">{ &h.name }</span></span>
            </div>
        }
    });
    let roster = (!e.roster.is_empty()).then(|| {
        html! {
            <div class="event-roster d-flex flex-wrap gap-1 my-2">
                { for e.roster.iter().map(|a| html! {
                    <img class="avatar avatar-sm rounded-circle" src={ a.avatar.clone() } alt={ a.name.clone() } title={ a.name.clone() } />
                }) }
            </div>
        }
    });
    let map = e.location.as_deref().and_then(util::map_url).map(|url| {
        html! {
            <a class="btn btn-light btn-sm my-2" href={ url.to_string() } target="_blank" rel="noopener noreferrer">
                <span class="bi bi-map me-1"></span>
                { "View map" }
            </a>
        }
    });
    html! {
        <div class="event-details">
            { for e.description.as_ref().map(|d| html! { <p>{ d }</p> }) }
            { for host }
            { for roster }
            { for map }
        </div>
    }
}

#[function_component(EventBlock)]
pub fn event_block(p: &EventBlockProps) -> Html {
    let e = &p.event;
    let place = match (&e.location, e.is_online) {
        (Some(l), _) => html! { <><span class="bi bi-geo-alt me-1"></span>{ l }</> },
        (None, true) => html! { <><span class="bi bi-camera-video me-1"></span>{ "Online" }</> },
        (None, false) => html! {},
    };
    let body = match p.layout {
        EventLayout::Collapsed => e
            .description
            .as_ref()
            .map(|d| {
                html! {
                    <p class="small text-muted">{ truncate(d, p.config.preview_description_chars).into_owned() }</p>
                }
            })
            .unwrap_or_default(),
        EventLayout::ModalCollapsed => html! {
            <button
                type="button"
                class="btn btn-link btn-sm p-0"
                onclick={ p.on_interact.reform(|_| Interaction::ToggleEventExpanded) }
            >
                { "Show details" }
            </button>
        },
        EventLayout::Expanded => html! {
            <>
                { details(e) }
                <button
                    type="button"
                    class="btn btn-link btn-sm p-0"
                    onclick={ p.on_interact.reform(|_| Interaction::ToggleEventExpanded) }
                >
                    { "Hide details" }
                </button>
            </>
        },
    };
    html! {
        <div class={ classes!("event", (e.status == EventStatus::Ongoing).then(|| "is-live")) }>
            { for e.image.as_ref().map(|src| html! {
                <img class="event-image w-100 rounded mb-2" src={ src.clone() } alt={ e.title.clone() } />
            }) }
            <div class="d-flex align-items-center gap-2 mb-1">
                { status_badge(e.status) }
                <span class="badge text-bg-light">{ &e.category }</span>
            </div>
            <div class="fw-semibold">{ &e.title }</div>
            <div class="small text-muted">
                <span class="bi bi-calendar-event me-1"></span>
                { util::event_date(&e.starts_at) }
            </div>
            <div class="small text-muted">{ place }</div>
            <div class="small text-muted mb-2">
                <span class="bi bi-people me-1"></span>
                { format!("{} attending", compact_count(e.attendees)) }
            </div>
            { body }
        </div>
    }
}

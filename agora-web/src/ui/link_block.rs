use std::rc::Rc;

use agora_client::{api::Link, truncate, CardConfig, PresentationMode};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct LinkBlockProps {
    pub link: Link,
    pub mode: PresentationMode,
    pub config: Rc<CardConfig>,
}

#[function_component(LinkBlock)]
pub fn link_block(p: &LinkBlockProps) -> Html {
    let l = &p.link;
    let icon = match &l.icon {
        Some(src) => html! { <img class="link-icon rounded me-2" src={ src.clone() } alt="" /> },
        None => html! { <span class="bi bi-link-45deg fs-4 me-2"></span> },
    };
    let description = l.description.as_ref().map(|d| {
        let d = match p.mode.is_preview {
            true => truncate(d, p.config.preview_description_chars).into_owned(),
            false => d.clone(),
        };
        html! { <div class="small text-muted">{ d }</div> }
    });
    let body = html! {
        <div class="d-flex align-items-center">
            { icon }
            <div>
                <div class="fw-semibold">{ &l.title }</div>
                { for description }
            </div>
        </div>
    };
    match &l.url {
        Some(url) => html! {
            <a
                class="link-preview d-block border rounded p-2 text-reset text-decoration-none"
                href={ url.clone() }
                target="_blank"
                rel="noopener noreferrer"
                onclick={ Callback::from(|e: MouseEvent| e.stop_propagation()) }
            >
                { body }
            </a>
        },
        None => html! { <div class="link-preview border rounded p-2">{ body }</div> },
    }
}

use std::rc::Rc;

use agora_client::{
    api::{CommentId, ReactionKey},
    time_ago, CardConfig, CommentList, CommentNode, Interaction,
};
use chrono::Utc;
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentsSectionProps {
    pub comments: CommentList,
    pub config: Rc<CardConfig>,
    pub on_interact: Callback<Interaction>,
}

#[function_component(CommentsSection)]
pub fn comments_section(p: &CommentsSectionProps) -> Html {
    html! {
        <div class="comments p-3">
            <div class="fw-semibold mb-2">{ format!("Comments ({})", p.comments.total()) }</div>
            { for p.comments.sorted().into_iter().map(|c| comment_item(p, c, 0)) }
            { draft_input(p) }
        </div>
    }
}

fn reaction_chips(p: &CommentsSectionProps, c: &CommentNode) -> Html {
    c.reactions
        .iter()
        .map(|(key, count)| {
            let emoji = p
                .config
                .emoji_for(key)
                .map(|r| r.emoji.clone())
                .unwrap_or_else(|| key.to_string());
            let (id, key) = (c.id.clone(), key.clone());
            html! {
                <button
                    type="button"
                    class={ classes!("btn", "btn-sm", "reaction-chip", count.has_user_reacted.then(|| "is-active")) }
                    onclick={ p.on_interact.reform(move |_| Interaction::CommentReact(id.clone(), key.clone())) }
                >
                    { emoji }<span class="ms-1">{ count.count }</span>
                </button>
            }
        })
        .collect()
}

fn picker(p: &CommentsSectionProps, id: &CommentId) -> Html {
    let id = id.clone();
    html! {
        <ui::ReactionPalette
            reactions={ p.config.palette.clone() }
            on_pick={ p.on_interact.reform(move |k: ReactionKey| Interaction::CommentReact(id.clone(), k)) }
            on_dismiss={ p.on_interact.reform(|_| Interaction::DismissPicker) }
        />
    }
}

fn comment_item(p: &CommentsSectionProps, c: &CommentNode, depth: usize) -> Html {
    let indent = depth.min(p.config.max_reply_depth_indent);
    let picker_open = p.comments.active_picker() == Some(&c.id);
    let toggle_picker = {
        let id = c.id.clone();
        p.on_interact.reform(move |_: MouseEvent| Interaction::TogglePicker(id.clone()))
    };
    html! {
        <div
            class={ classes!("comment", c.is_pinned.then(|| "is-pinned")) }
            style={ format!("margin-left: {}rem", indent * 2) }
        >
            <div class="d-flex">
                <img class="avatar avatar-sm rounded-circle me-2" src={ c.author.avatar.clone() } alt={ c.author.name.clone() } />
                <div class="flex-fill">
                    <div class="small">
                        <span class="fw-semibold">{ &c.author.name }</span>
                        <span class="text-muted ms-2">{ time_ago(c.posted_at, Utc::now()) }</span>
                        { for c.is_pinned.then(|| html! {
                            <span class="bi bi-pin-angle-fill text-primary ms-2" title="Pinned"></span>
                        }) }
                    </div>
                    <div>{ &c.content }</div>
                    <div class="d-flex flex-wrap align-items-center gap-1 mt-1 position-relative">
                        { reaction_chips(p, c) }
                        <button
                            type="button"
                            class={ classes!("btn", "btn-sm", "btn-light", "bi", "bi-emoji-smile", picker_open.then(|| "is-active")) }
                            aria-label="Add reaction"
                            onclick={ toggle_picker }
                        >
                        </button>
                        { for picker_open.then(|| picker(p, &c.id)) }
                    </div>
                </div>
            </div>
            { for c.children.iter().map(|r| comment_item(p, r, depth + 1)) }
        </div>
    }
}

fn draft_input(p: &CommentsSectionProps) -> Html {
    let on_input = p.on_interact.reform(|e: InputEvent| {
        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        Interaction::EditDraft(input.value())
    });
    let on_key = {
        let on_interact = p.on_interact.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                on_interact.emit(Interaction::SubmitComment)
            }
        })
    };
    html! {
        <div class="d-flex gap-2 mt-3">
            <textarea
                class="form-control"
                rows="1"
                placeholder="Write a comment..."
                value={ p.comments.draft().to_string() }
                oninput={ on_input }
                onkeydown={ on_key }
            />
            <button
                type="button"
                class="btn btn-primary"
                disabled={ p.comments.draft().trim().is_empty() }
                onclick={ p.on_interact.reform(|_| Interaction::SubmitComment) }
            >
                { "Post" }
            </button>
        </div>
    }
}

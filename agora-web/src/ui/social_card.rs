use std::rc::Rc;

use agora_client::{
    api::{Comment, CommentAuthor, CommentId, FeedEntry, Notification, PostId, Uuid},
    CardConfig, Interaction, PresentationMode, SocialCard,
};
use chrono::Utc;
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct SocialCardProps {
    pub entry: FeedEntry,
    pub config: Rc<CardConfig>,

    /// Author of the comments typed in this page
    pub viewer: CommentAuthor,

    pub on_notify: Callback<(PostId, Notification)>,
}

pub enum SocialCardMsg {
    Interact(Interaction, PresentationMode),
}

/// One post of the feed, and its detail modal when opened.
///
/// Both surfaces render the same `SocialCard`. The card is built once from
/// the `entry` received at creation.
pub struct SocialCardView {
    card: SocialCard,
}

impl SocialCardView {
    fn append_own_comment(&mut self, ctx: &Context<Self>, text: String) {
        self.card.comments_mut().push_root(Comment {
            id: CommentId::new(Uuid::new_v4().to_string()),
            author: ctx.props().viewer.clone(),
            content: text,
            posted_at: Utc::now(),
            reactions: Default::default(),
            is_pinned: false,
            children: Vec::new(),
        });
    }

    fn render(&self, ctx: &Context<Self>, mode: PresentationMode) -> Html {
        let config = &ctx.props().config;
        let on_interact = ctx
            .link()
            .callback(move |i| SocialCardMsg::Interact(i, mode));
        let text = self.card.text().map(|t| {
            html! { <p class="card-text post-text">{ t }</p> }
        });
        let comments = (mode.is_in_modal && self.card.is_comments_open()).then(|| {
            html! {
                <ui::CommentsSection
                    comments={ self.card.comments().clone() }
                    config={ config.clone() }
                    on_interact={ on_interact.clone() }
                />
            }
        });
        let open_modal = on_interact.reform(|_: MouseEvent| Interaction::OpenModal);
        html! {
            <>
                <ui::CardHeader
                    author={ self.card.author.clone() }
                    posted_at={ self.card.posted_at }
                    on_more={ on_interact.reform(|_| Interaction::More) }
                />
                <div
                    class={ classes!("card-body", mode.is_preview.then(|| "is-clickable")) }
                    onclick={ mode.is_preview.then(|| open_modal) }
                >
                    { for text }
                    { ui::content_blocks(&self.card, mode, config, &on_interact) }
                </div>
                <ui::EngagementBar
                    engagement={ self.card.engagement().clone() }
                    comment_count={ self.card.comments().total() }
                    comments_open={ self.card.is_comments_open() }
                    config={ config.clone() }
                    on_interact={ on_interact.clone() }
                />
                { for comments }
            </>
        }
    }
}

impl Component for SocialCardView {
    type Message = SocialCardMsg;
    type Properties = SocialCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        SocialCardView {
            card: SocialCard::new(ctx.props().entry.clone()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SocialCardMsg::Interact(interaction, mode) => {
                if let Some(n) = self.card.apply(interaction, mode) {
                    if let Notification::AddComment(text) = &n {
                        self.append_own_comment(ctx, text.clone());
                    }
                    ctx.props().on_notify.emit((self.card.id, n));
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let modal = self.card.is_modal_open().then(|| {
            let on_close = ctx
                .link()
                .callback(|_| SocialCardMsg::Interact(Interaction::CloseModal, PresentationMode::modal()));
            html! {
                <ui::Overlay on_dismiss={ on_close.clone() } dimmed={ true } class="social-card-modal">
                    <div class="card social-card is-in-modal" role="dialog" aria-modal="true">
                        <button
                            type="button"
                            class="btn-close modal-close"
                            aria-label="Close"
                            onclick={ on_close.reform(|_| ()) }
                        >
                        </button>
                        { self.render(ctx, PresentationMode::modal()) }
                    </div>
                </ui::Overlay>
            }
        });
        html! {
            <>
                <div class="card social-card mb-3">
                    { self.render(ctx, PresentationMode::feed()) }
                </div>
                { for modal }
            </>
        }
    }
}

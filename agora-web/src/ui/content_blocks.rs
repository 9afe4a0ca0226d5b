use std::rc::Rc;

use agora_client::{Block, CardConfig, Interaction, PresentationMode, SocialCard};
use yew::prelude::*;

use crate::ui;

/// Every populated content slot of `card`, in display order
pub fn content_blocks(
    card: &SocialCard,
    mode: PresentationMode,
    config: &Rc<CardConfig>,
    on_interact: &Callback<Interaction>,
) -> Html {
    card.blocks()
        .into_iter()
        .map(|b| {
            let kind = b.kind();
            let condensed = mode.is_preview && kind.has_preview_variant();
            let body = match b {
                Block::Poll(poll) => html! {
                    <ui::PollBlock poll={ poll.clone() } {mode} on_interact={ on_interact.clone() } />
                },
                Block::Video(video) => html! {
                    <ui::VideoBlock video={ video.clone() } />
                },
                Block::Form(form) => html! {
                    <ui::FormBlock
                        form={ form.clone() }
                        {mode}
                        layout={ card.form_layout(mode) }
                        on_interact={ on_interact.clone() }
                    />
                },
                Block::Event(event) => html! {
                    <ui::EventBlock
                        event={ event.clone() }
                        layout={ card.event_layout(mode) }
                        config={ config.clone() }
                        on_interact={ on_interact.clone() }
                    />
                },
                Block::Link(link) => html! {
                    <ui::LinkBlock link={ link.clone() } {mode} config={ config.clone() } />
                },
                Block::Images(images) => html! {
                    <ui::ImagesBlock images={ images.to_vec() } />
                },
            };
            html! {
                <div class={ classes!(
                    "content-block",
                    format!("content-block-{}", kind.as_str()),
                    condensed.then(|| "content-block-condensed"),
                ) }>
                    { body }
                </div>
            }
        })
        .collect()
}

use std::rc::Rc;

use agora_client::{
    api::RsvpChoice, compact_count, CardConfig, EngagementController, Interaction, PrimaryAction,
    SecondaryAction,
};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct EngagementBarProps {
    pub engagement: EngagementController,
    pub comment_count: usize,
    pub comments_open: bool,
    pub config: Rc<CardConfig>,
    pub on_interact: Callback<Interaction>,
}

#[function_component(EngagementBar)]
pub fn engagement_bar(p: &EngagementBarProps) -> Html {
    let palette = p.engagement.is_palette_open().then(|| {
        html! {
            <ui::ReactionPalette
                reactions={ p.config.palette.clone() }
                on_pick={ p.on_interact.reform(Interaction::React) }
                on_dismiss={ p.on_interact.reform(|_| Interaction::DismissPalette) }
            />
        }
    });
    html! {
        <div class="card-footer engagement-bar d-flex align-items-center gap-1">
            <div class="d-flex align-items-center gap-1 flex-wrap position-relative">
                { for p.engagement.primary_actions(&p.config).into_iter().map(|a| primary(p, a)) }
                { for palette }
            </div>
            <div class="ms-auto d-flex align-items-center gap-1">
                { for p.engagement.secondary_actions().into_iter().map(|a| secondary(p, a)) }
            </div>
        </div>
    }
}

fn action_button(
    icon: Html,
    count: Option<u64>,
    active: bool,
    label: String,
    onclick: Callback<MouseEvent>,
) -> Html {
    html! {
        <button
            type="button"
            class={ classes!("btn", "btn-sm", "engagement-action", active.then(|| "is-active")) }
            aria-label={ label.clone() }
            aria-pressed={ if active { "true" } else { "false" } }
            title={ label }
            { onclick }
        >
            { icon }
            { for count.map(|c| html! { <span class="ms-1">{ compact_count(c) }</span> }) }
        </button>
    }
}

fn rsvp_label(c: RsvpChoice) -> &'static str {
    match c {
        RsvpChoice::Yes => "Going",
        RsvpChoice::No => "Can't go",
        RsvpChoice::Maybe => "Maybe",
    }
}

fn primary(p: &EngagementBarProps, action: PrimaryAction) -> Html {
    let s = p.engagement.state();
    let icon = |class: &'static str| html! { <span class={ classes!("bi", class) }></span> };
    match action {
        PrimaryAction::Like => action_button(
            icon(if s.is_liked { "bi-heart-fill" } else { "bi-heart" }),
            Some(s.likes),
            s.is_liked,
            String::from("Like"),
            p.on_interact.reform(|_| Interaction::Like),
        ),
        PrimaryAction::Upvote => action_button(
            icon("bi-arrow-up"),
            Some(s.upvotes),
            s.is_upvoted,
            String::from("Upvote"),
            p.on_interact.reform(|_| Interaction::Upvote),
        ),
        PrimaryAction::Downvote => action_button(
            icon("bi-arrow-down"),
            Some(s.downvotes),
            s.is_downvoted,
            String::from("Downvote"),
            p.on_interact.reform(|_| Interaction::Downvote),
        ),
        PrimaryAction::React(key) => {
            let (emoji, label) = match p.config.emoji_for(&key) {
                Some(r) => (r.emoji.clone(), r.label.clone()),
                None => (key.to_string(), key.to_string()),
            };
            let active = s.user_reaction.as_ref() == Some(&key);
            let count = p.engagement.reaction_count(&key);
            action_button(
                html! { <span>{ emoji }</span> },
                (count > 0).then_some(count),
                active,
                label,
                p.on_interact.reform(move |_| Interaction::React(key.clone())),
            )
        }
        PrimaryAction::MoreReactions => {
            // the user may have picked a reaction from the palette
            let extra = s
                .user_reaction
                .as_ref()
                .filter(|k| !p.config.quick_reactions.iter().any(|r| r.key == **k))
                .and_then(|k| p.config.emoji_for(k))
                .map(|r| r.emoji.clone());
            action_button(
                match extra {
                    Some(e) => html! { <span>{ e }</span> },
                    None => icon("bi-emoji-smile"),
                },
                None,
                p.engagement.is_palette_open(),
                String::from("More reactions"),
                p.on_interact.reform(|_| Interaction::TogglePalette),
            )
        }
        PrimaryAction::Rsvp(choice) => action_button(
            html! { <span>{ rsvp_label(choice) }</span> },
            Some(s.rsvp.get(choice)),
            s.user_rsvp == Some(choice),
            format!("RSVP {choice}"),
            p.on_interact.reform(move |_| Interaction::Rsvp(choice)),
        ),
    }
}

fn secondary(p: &EngagementBarProps, action: SecondaryAction) -> Html {
    let s = p.engagement.state();
    match action {
        SecondaryAction::ToggleComments => action_button(
            html! { <span class="bi bi-chat"></span> },
            Some(p.comment_count as u64),
            p.comments_open,
            String::from("Comments"),
            p.on_interact.reform(|_| Interaction::ToggleComments),
        ),
        SecondaryAction::Share => action_button(
            html! { <span class="bi bi-share"></span> },
            (s.shares > 0).then_some(s.shares),
            false,
            String::from("Share"),
            p.on_interact.reform(|_| Interaction::Share),
        ),
        SecondaryAction::Bookmark => action_button(
            html! {
                <span class={ classes!("bi", if s.is_bookmarked { "bi-bookmark-fill" } else { "bi-bookmark" }) }></span>
            },
            None,
            s.is_bookmarked,
            String::from("Bookmark"),
            p.on_interact.reform(|_| Interaction::ToggleBookmark),
        ),
    }
}

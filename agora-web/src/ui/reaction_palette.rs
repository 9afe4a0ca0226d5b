use agora_client::{api::ReactionKey, ReactionEmoji};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct ReactionPaletteProps {
    pub reactions: Vec<ReactionEmoji>,
    pub on_pick: Callback<ReactionKey>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ReactionPalette)]
pub fn reaction_palette(p: &ReactionPaletteProps) -> Html {
    html! {
        <ui::Overlay on_dismiss={ p.on_dismiss.clone() } class="reaction-palette">
            <div class="d-flex flex-wrap gap-1 p-2" role="menu">
                { for p.reactions.iter().map(|r| {
                    let key = r.key.clone();
                    html! {
                        <button
                            type="button"
                            class="btn btn-light reaction-palette-item"
                            title={ r.label.clone() }
                            aria-label={ r.label.clone() }
                            onclick={ p.on_pick.reform(move |_| key.clone()) }
                        >
                            { &r.emoji }
                        </button>
                    }
                }) }
            </div>
        </ui::Overlay>
    }
}

use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct FeedBannerProps {
    pub state: ui::FeedState,
    pub on_retry: Callback<()>,
}

#[function_component(FeedBanner)]
pub fn feed_banner(p: &FeedBannerProps) -> Html {
    let hidden = matches!(p.state, ui::FeedState::Loaded);
    let body = match &p.state {
        ui::FeedState::Loading | ui::FeedState::Loaded => html! {
            <>
                <div class="spinner-border spinner-border-sm m-2" role="status"></div>
                <div>{ "Loading feed..." }</div>
            </>
        },
        ui::FeedState::Failed(e) => html! {
            <>
                <div class="m-2">{ format!("Could not load the feed: {e}") }</div>
                <button
                    type="button"
                    class="btn btn-sm btn-light ms-auto"
                    onclick={ p.on_retry.reform(|_| ()) }
                >
                    { "Retry" }
                </button>
            </>
        },
    };

    html! {
        <div
            class={ classes!(
                "feed-banner", hidden.then(|| "is-hidden"),
                "d-flex", "align-items-center"
            ) }
            aria-hidden={ if hidden { "true" } else { "false" } }
        >
            { body }
        </div>
    }
}

use agora_client::{Interaction, PollEngine, PresentationMode};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct PollBlockProps {
    pub poll: PollEngine,
    pub mode: PresentationMode,
    pub on_interact: Callback<Interaction>,
}

#[function_component(PollBlock)]
pub fn poll_block(p: &PollBlockProps) -> Html {
    let poll = &p.poll;
    let body = match poll.results() {
        Some(results) => results
            .into_iter()
            .map(|r| {
                html! {
                    <div class={ classes!("poll-result", r.is_user_vote.then(|| "is-user-vote")) }>
                        <div
                            class="poll-result-bar"
                            style={ format!("width: {}%", r.percentage) }
                        >
                        </div>
                        <div class="poll-result-label d-flex">
                            <span class="flex-fill">
                                { &r.text }
                                { for r.is_user_vote.then(|| html! {
                                    <span class="bi bi-check-circle-fill ms-1" aria-label="Your vote"></span>
                                }) }
                            </span>
                            <span class="fw-semibold">{ format!("{}%", r.percentage) }</span>
                        </div>
                    </div>
                }
            })
            .collect::<Html>(),
        None => poll
            .options()
            .iter()
            .map(|o| {
                let id = o.id.clone();
                html! {
                    <button
                        type="button"
                        class="btn btn-outline-secondary w-100 mb-2 poll-option"
                        disabled={ p.mode.is_preview }
                        onclick={ p.on_interact.reform(move |e: MouseEvent| {
                            e.stop_propagation();
                            Interaction::PollVote(id.clone())
                        }) }
                    >
                        { &o.text }
                    </button>
                }
            })
            .collect::<Html>(),
    };
    let footer = [
        Some(format!("{} votes", poll.total_votes())),
        poll.has_voted()
            .then(|| poll.time_left.as_ref().map(|t| format!("{t} left")))
            .flatten(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");
    html! {
        <div class="poll">
            <div class="d-flex align-items-center mb-2">
                <div class="fw-semibold flex-fill">{ &poll.question }</div>
                <span class={ classes!("badge", if poll.has_voted() { "text-bg-success" } else { "text-bg-primary" }) }>
                    { if poll.has_voted() { "Voted" } else { "Active" } }
                </span>
            </div>
            { body }
            <div class="text-muted small mt-2">{ footer }</div>
        </div>
    }
}

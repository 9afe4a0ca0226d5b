use agora_client::api::Video;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct VideoBlockProps {
    pub video: Video,
}

/// Same rendering in the feed and in the modal
#[function_component(VideoBlock)]
pub fn video_block(p: &VideoBlockProps) -> Html {
    let v = &p.video;
    html! {
        <div class="video">
            <div class="ratio ratio-16x9 mb-2">
                <iframe
                    src={ v.embed_url.clone() }
                    title={ v.title.clone() }
                    allow="accelerometer; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                    loading="lazy"
                >
                </iframe>
            </div>
            <div class="d-flex align-items-center gap-2">
                <span class="fw-semibold flex-fill">{ &v.title }</span>
                <span class="badge text-bg-light">{ &v.platform }</span>
                <span class="small text-muted">{ &v.duration }</span>
            </div>
            <p class="small text-muted">{ &v.description }</p>
        </div>
    }
}

use agora_client::{
    api::{AspectRatio, Image},
    ImageLayout,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ImagesBlockProps {
    pub images: Vec<Image>,
}

fn layout_class(l: &ImageLayout) -> &'static str {
    match l {
        ImageLayout::Single => "images-single",
        ImageLayout::SideBySide => "images-side-by-side",
        ImageLayout::LargeAndStacked => "images-large-and-stacked",
        ImageLayout::Grid => "images-grid",
        ImageLayout::Mosaic { .. } => "images-mosaic",
    }
}

fn ratio_class(r: Option<AspectRatio>) -> Option<&'static str> {
    r.map(|r| match r {
        AspectRatio::Square => "ratio-1x1",
        AspectRatio::Landscape => "ratio-16x9",
        AspectRatio::Portrait => "ratio-3x4",
    })
}

#[function_component(ImagesBlock)]
pub fn images_block(p: &ImagesBlockProps) -> Html {
    let layout = match ImageLayout::for_count(p.images.len()) {
        None => return html! {},
        Some(l) => l,
    };
    let visible = layout.visible();
    html! {
        <div class={ classes!("images", layout_class(&layout)) }>
            { for p.images.iter().take(visible).enumerate().map(|(i, img)| {
                let badge = (i + 1 == visible).then(|| layout.badge()).flatten();
                html! {
                    <div class={ classes!("image-tile", "position-relative", ratio_class(img.aspect_ratio)) }>
                        <img class="w-100 h-100 rounded" src={ img.src.clone() } alt={ img.alt.clone() } loading="lazy" />
                        { for badge.map(|b| html! { <div class="image-more-badge">{ b }</div> }) }
                    </div>
                }
            }) }
        </div>
    }
}

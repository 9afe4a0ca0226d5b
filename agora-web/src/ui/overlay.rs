use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct OverlayProps {
    pub on_dismiss: Callback<()>,

    /// Dims the page behind the content
    #[prop_or_default]
    pub dimmed: bool,

    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub children: Children,
}

/// Floating content closed by a click outside of it or by Escape.
///
/// The backdrop is a sibling of the content, so clicks inside the content
/// never reach it.
#[function_component(Overlay)]
pub fn overlay(p: &OverlayProps) -> Html {
    let on_click = p.on_dismiss.reform(|_: MouseEvent| ());
    let on_key = {
        let on_dismiss = p.on_dismiss.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_dismiss.emit(())
            }
        })
    };
    html! {
        <>
            <div
                class={ classes!("overlay-backdrop", p.dimmed.then(|| "is-dimmed")) }
                tabindex="-1"
                onclick={ on_click }
                onkeydown={ on_key.clone() }
            >
            </div>
            <div class={ classes!("overlay-content", p.class.clone()) } onkeydown={ on_key }>
                { for p.children.iter() }
            </div>
        </>
    }
}

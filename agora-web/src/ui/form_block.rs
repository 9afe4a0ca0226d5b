use agora_client::{
    api::{FieldType, Form, FormField},
    compact_count, FormLayout, Interaction, PresentationMode,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct FormBlockProps {
    pub form: Form,
    pub mode: PresentationMode,
    pub layout: FormLayout,
    pub on_interact: Callback<Interaction>,
}

fn field(f: &FormField) -> Html {
    let label = html! {
        <label class="form-label" for={ f.id.clone() }>
            { &f.label }
            { for f.required.then(|| html! { <span class="text-danger ms-1">{ "*" }</span> }) }
        </label>
    };
    let placeholder = f.placeholder.clone().unwrap_or_default();
    let input = match f.field_type {
        FieldType::Text => html! {
            <input type="text" class="form-control" id={ f.id.clone() } {placeholder} required={ f.required } />
        },
        FieldType::Textarea => html! {
            <textarea class="form-control" id={ f.id.clone() } rows="3" {placeholder} required={ f.required } />
        },
        FieldType::Select => html! {
            <select class="form-select" id={ f.id.clone() } required={ f.required }>
                <option value="" selected={ true } disabled={ true }>{ placeholder }</option>
                { for f.options.iter().map(|o| html! { <option value={ o.clone() }>{ o }</option> }) }
            </select>
        },
        FieldType::Radio => html! {
            <div>
                { for f.options.iter().enumerate().map(|(i, o)| {
                    let id = format!("{}-{i}", f.id);
                    html! {
                        <div class="form-check">
                            <input class="form-check-input" type="radio" name={ f.id.clone() } id={ id.clone() } value={ o.clone() } />
                            <label class="form-check-label" for={ id }>{ o }</label>
                        </div>
                    }
                }) }
            </div>
        },
    };
    html! {
        <div class="mb-3">
            { label }
            { input }
        </div>
    }
}

#[function_component(FormBlock)]
pub fn form_block(p: &FormBlockProps) -> Html {
    let form = &p.form;
    let mode = p.mode;
    let body = match p.layout {
        FormLayout::Full => html! {
            <form onsubmit={ p.on_interact.reform(|e: SubmitEvent| {
                e.prevent_default();
                Interaction::SubmitForm
            }) }>
                { for form.fields.iter().map(field) }
                <div class="d-flex gap-2">
                    <button type="submit" class="btn btn-primary">{ &form.submit_text }</button>
                    <button
                        type="button"
                        class="btn btn-light"
                        onclick={ p.on_interact.reform(|_| Interaction::ToggleFormOpen) }
                    >
                        { "Cancel" }
                    </button>
                </div>
            </form>
        },
        FormLayout::Summary => html! {
            <div class="d-flex align-items-center">
                <span class="small text-muted flex-fill">
                    { format!("{} questions · {} responses", form.fields.len(), compact_count(form.responses)) }
                </span>
                <button
                    type="button"
                    class="btn btn-primary btn-sm"
                    onclick={ p.on_interact.reform(move |_| FormLayout::call_to_action(mode)) }
                >
                    { "Fill out form" }
                </button>
            </div>
        },
    };
    html! {
        <div class="form-card">
            <div class="fw-semibold">{ &form.title }</div>
            <p class="small text-muted">{ &form.description }</p>
            { body }
        </div>
    }
}

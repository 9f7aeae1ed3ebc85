use leptos::prelude::*;

/// Checkbox with a label next to it
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the checkbox element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form-ext-control form-ext-checkbox">
            <input
                id=id
                type="checkbox"
                class="form-ext-input"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form-ext-label" for=label_for>
                {move || label.get()}
            </label>
        </div>
    }
}

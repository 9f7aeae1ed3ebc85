use leptos::prelude::*;

/// Labelled `<select>`; `options` are `(value, label)` pairs
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <div class="frame__subtitle">{l}</div> })}
            <div class="input-control">
                <select
                    class="select"
                    required=required
                    prop:value=move || value.get()
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_value(&ev));
                        }
                    }
                >
                    <For
                        each=move || options.get()
                        key=|(val, _)| val.clone()
                        children=move |(val, label)| {
                            let val_clone = val.clone();
                            let is_selected = move || value.get() == val_clone;
                            view! {
                                <option value=val selected=is_selected>
                                    {label}
                                </option>
                            }
                        }
                    />
                </select>
            </div>
        </div>
    }
}

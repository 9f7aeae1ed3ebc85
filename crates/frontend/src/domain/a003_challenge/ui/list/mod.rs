pub mod state;

use contracts::domain::a003_challenge::aggregate::Challenge;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use self::state::{create_state, persist_state};
use crate::domain::a003_challenge::api::{fetch_challenges, fetch_solves};
use crate::domain::a003_challenge::solves::{format_solve_time, SolvesDialog, SOLVES_PAGE_SIZE};
use crate::shared::components::modal_frame::ModalFrame;
use crate::shared::components::not_started::NotStarted;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Checkbox;
use crate::shared::config::{set_document_title, use_client_config};
use crate::shared::load_state::LoadState;

#[component]
fn SolvesModal(
    challenge_name: String,
    solve_count: i64,
    dialog: RwSignal<SolvesDialog>,
) -> impl IntoView {
    let on_close = Callback::new(move |_: ()| dialog.update(|d| d.close()));
    let on_page_change = Callback::new(move |page: usize| dialog.update(|d| d.set_page(page)));

    view! {
        <ModalFrame on_close=on_close modal_class="solves-dialog">
            <div class="modal-header">
                <div class="modal-title">{format!("Solves for {}", challenge_name)}</div>
                <button class="btn-close" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            <div class="modal-body">
                <Show
                    when=move || { solve_count > 0 }
                    fallback=|| view! { <p class="frame__subtitle">"No solves yet."</p> }
                >
                    <table class="table small">
                        <thead>
                            <tr>
                                <th style="width: 3.5em">"#"</th>
                                <th>"Team"</th>
                                <th>"Solve time"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || dialog.with(|d| d.visible())
                                key=|row| (row.entry.id.clone(), row.rank)
                                children=move |row| view! {
                                    <tr>
                                        <td>{row.rank}</td>
                                        <td>
                                            <A href=format!("/profile/{}", row.entry.user_id)>
                                                {row.entry.user_name.clone()}
                                            </A>
                                        </td>
                                        <td>{format_solve_time(row.entry.created_at)}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=move || dialog.with(|d| d.shows_pagination())>
                        <PaginationControls
                            page=Signal::derive(move || dialog.with(|d| d.page()))
                            total_items=Signal::derive(move || dialog.with(|d| d.total_items()))
                            page_size=SOLVES_PAGE_SIZE
                            on_page_change=on_page_change
                        />
                    </Show>
                </Show>
            </div>
        </ModalFrame>
    }
}

#[component]
fn ChallengeCard(challenge: Challenge) -> impl IntoView {
    let config = use_client_config();
    let dialog = RwSignal::new(SolvesDialog::default());

    let counter = format!(
        "{} / {}",
        match challenge.solves {
            1 => "1 solve".to_string(),
            n => format!("{} solves", n),
        },
        match challenge.points {
            1 => "1 point".to_string(),
            n => format!("{} points", n),
        }
    );

    let challenge_id = challenge.id.clone();
    let on_solves_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if !dialog.try_update(|d| d.request_open()).unwrap_or(false) {
            return;
        }
        let api_base = config.api_base.clone();
        let challenge_id = challenge_id.clone();
        spawn_local(async move {
            let result = fetch_solves(&api_base, &challenge_id).await;
            dialog.try_update(|d| d.resolve(result));
        });
    };

    let challenge_name = challenge.name.clone();
    let solve_count = challenge.solves;

    view! {
        <div class="frame challenge">
            <div class="frame__body">
                <div class="challenge__header">
                    <div class="frame__title title">
                        {format!("{}/{}", challenge.category, challenge.name)}
                    </div>
                    <a
                        href="#"
                        class=move || {
                            if dialog.with(|d| d.is_pending()) {
                                "challenge__points challenge__points--pending"
                            } else {
                                "challenge__points"
                            }
                        }
                        on:click=on_solves_click
                    >
                        {counter}
                    </a>
                </div>
                <div class="frame__subtitle challenge__author">{format!("by {}", challenge.author)}</div>
                <div class="challenge__description">{challenge.description}</div>
                <div class="challenge__files">
                    {challenge.files.into_iter().map(|f| view! {
                        <a class="tag" href=f.url target="_blank" rel="noopener noreferrer">{f.name}</a>
                    }).collect_view()}
                </div>
            </div>
            <Show when=move || dialog.with(|d| d.is_open())>
                <SolvesModal
                    challenge_name=challenge_name.clone()
                    solve_count=solve_count
                    dialog=dialog
                />
            </Show>
        </div>
    }
}

#[component]
pub fn ChallengeList() -> impl IntoView {
    let config = use_client_config();
    set_document_title("Challenges", &config);

    let settings = config.challenges.clone();
    let model = create_state(&settings);

    let preferences = Memo::new(move |_| model.with(|m| m.preferences().clone()));
    Effect::new(move |_| {
        preferences.with(|p| persist_state(p, &settings));
    });

    let api_base = config.api_base.clone();
    spawn_local(async move {
        let result = fetch_challenges(&api_base).await;
        model.try_update(|m| m.resolve(result));
    });

    let screen = Memo::new(move |_| model.with(|m| m.load_state()));

    view! {
        {move || match screen.get() {
            LoadState::Pending => view! { <></> }.into_any(),
            LoadState::NotStarted => view! { <NotStarted /> }.into_any(),
            LoadState::Ready => view! {
                <div class="row challenges">
                    <aside class="frame challenges__categories">
                        <div class="frame__body">
                            <div class="frame__title title">"Categories"</div>
                            <For
                                each=move || model.with(|m| m.category_counts())
                                key=|(category, total)| (category.clone(), *total)
                                children=move |(category, total)| {
                                    let for_checked = category.clone();
                                    let for_change = category.clone();
                                    view! {
                                        <Checkbox
                                            id=format!("category-{}", category)
                                            label=format!("{} ({})", category, total)
                                            checked=Signal::derive(move || model.with(|m| m.is_checked(&for_checked)))
                                            on_change=Callback::new(move |checked: bool| {
                                                model.update(|m| m.set_category(&for_change, checked));
                                            })
                                        />
                                    }
                                }
                            />
                        </div>
                    </aside>
                    <div class="challenges__list">
                        <For
                            each=move || model.with(|m| m.problems_to_display())
                            key=|challenge| challenge.id.clone()
                            children=move |challenge| view! { <ChallengeCard challenge=challenge /> }
                        />
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}

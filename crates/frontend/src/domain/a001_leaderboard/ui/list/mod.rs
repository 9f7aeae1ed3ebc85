pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;

use self::state::{create_state, persist_state};
use crate::domain::a001_leaderboard::api::{HttpScoreboardPort, ScoreboardPort};
use crate::domain::a001_leaderboard::ui::graph::ScoreGraph;
use crate::domain::a001_leaderboard::view_state::{DivisionFilter, ALL_DIVISIONS};
use crate::shared::components::not_started::NotStarted;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::config::{set_document_title, use_client_config};
use crate::shared::load_state::LoadState;

const NUM_VISIBLE_PAGES: usize = 9;

#[component]
pub fn ScoreboardList() -> impl IntoView {
    let config = use_client_config();
    set_document_title("Scoreboard", &config);

    let settings = config.scoreboard.clone();
    let model = create_state(&settings);
    let port = HttpScoreboardPort::new(config.api_base.clone());

    // localStorage + адресная строка: только после того, как состояние устоялось
    let view_state = Memo::new(move |_| model.with(|m| m.view().clone()));
    {
        let settings = settings.clone();
        Effect::new(move |_| {
            view_state.with(|v| persist_state(v, &settings));
        });
    }

    // Leaderboard: once per activation, filtered locally afterwards
    {
        let port = port.clone();
        spawn_local(async move {
            let result = port.fetch_leaderboard().await;
            model.try_update(|m| m.resolve_leaderboard(result));
        });
    }

    // Graph: again on every division change, stale responses are dropped by the model
    let division = Memo::new(move |_| model.with(|m| m.view_state().division.clone()));
    Effect::new(move |_| {
        division.track();
        let request = model.with_untracked(|m| m.begin_graph_request());
        let port = port.clone();
        spawn_local(async move {
            let result = port.fetch_graph(request.division.code()).await;
            model.try_update(|m| m.resolve_graph(&request, result));
        });
    });

    let division_options: Vec<(String, String)> =
        std::iter::once((ALL_DIVISIONS.to_string(), "All".to_string()))
            .chain(
                config
                    .divisions
                    .iter()
                    .map(|d| (d.code.clone(), d.name.clone())),
            )
            .collect();
    let page_size_options: Vec<(String, String)> = settings
        .page_size_options
        .iter()
        .map(|size| (size.to_string(), size.to_string()))
        .collect();

    let on_division_change = Callback::new(move |value: String| {
        model.update(|m| m.set_division(DivisionFilter::parse(&value)));
    });
    let on_page_size_change = Callback::new(move |value: String| match value.parse::<usize>() {
        Ok(size) => model.update(|m| m.set_page_size(size)),
        Err(_) => log::warn!("Ignoring page size '{}'", value),
    });
    let on_page_change = Callback::new(move |page: usize| {
        model.update(|m| m.set_page(page));
    });

    let screen = Memo::new(move |_| model.with(|m| m.screen_state()));
    let graph = Signal::derive(move || model.with(|m| m.graph().cloned()));
    let current_division = Signal::derive(move || model.with(|m| m.view_state().division.as_str().to_string()));
    let current_page_size = Signal::derive(move || model.with(|m| m.view_state().page_size.to_string()));

    view! {
        {move || match screen.get() {
            LoadState::Pending => view! { <></> }.into_any(),
            LoadState::NotStarted => view! { <NotStarted /> }.into_any(),
            LoadState::Ready => {
                let division_options = division_options.clone();
                let page_size_options = page_size_options.clone();
                view! {
                    <div class="scoreboard">
                        <div class="scoreboard__graph">
                            <ScoreGraph graph=graph />
                        </div>
                        <div class="scoreboard__body">
                            <aside class="frame scoreboard__filters">
                                <Select
                                    label="Filter by division".to_string()
                                    value=current_division
                                    options=division_options
                                    on_change=on_division_change
                                    required=true
                                />
                                <Select
                                    label="Teams per page".to_string()
                                    value=current_page_size
                                    options=page_size_options
                                    on_change=on_page_size_change
                                    required=true
                                />
                            </aside>
                            <div class="frame scoreboard__table-frame">
                                <table class="table small scoreboard__table">
                                    <thead>
                                        <tr>
                                            <th style="width: 3.5em">"#"</th>
                                            <th>"Team"</th>
                                            <th style="width: 5em">"Points"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || model.with(|m| m.rendered_page())
                                            key=|row| (row.entry.id.clone(), row.rank)
                                            children=move |row| {
                                                view! {
                                                    <tr>
                                                        <td>{row.rank}</td>
                                                        <td>
                                                            <a href=format!("/profile/{}", row.entry.id)>
                                                                {row.entry.name.clone()}
                                                            </a>
                                                        </td>
                                                        <td>{row.entry.score}</td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                                <Show when=move || model.with(|m| m.shows_pagination())>
                                    <PaginationControls
                                        page=Signal::derive(move || model.with(|m| m.view_state().page))
                                        total_items=Signal::derive(move || model.with(|m| m.total_items()))
                                        page_size=Signal::derive(move || model.with(|m| m.view_state().page_size))
                                        on_page_change=on_page_change
                                        num_visible_pages=NUM_VISIBLE_PAGES
                                    />
                                </Show>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

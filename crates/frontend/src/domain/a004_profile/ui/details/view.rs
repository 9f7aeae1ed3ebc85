use contracts::domain::a004_profile::aggregate::{ProfileSolve, PublicProfile};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::view_model::ProfileDetailsViewModel;
use crate::domain::a004_profile::model::{ProfileScreen, ProfileSummary};
use crate::shared::config::{set_document_title, use_client_config};
use crate::shared::icons::icon;

#[component]
fn SummaryCard(summary: ProfileSummary) -> impl IntoView {
    view! {
        <div class="frame profile__summary">
            <div class="frame__body">
                <div class="profile__header">
                    <h5 class="title profile__name" title=summary.name.clone()>{summary.name.clone()}</h5>
                    {summary.ctftime_url.map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer">"CTFtime"</a>
                    })}
                </div>
                <p>{icon("trophy")}" "{summary.score}</p>
                <p>{icon("scoreboard")}" "{summary.division_place}</p>
                <p>{icon("scoreboard")}" "{summary.global_place}</p>
                <p>{icon("flag")}" "{summary.division}</p>
            </div>
        </div>
    }
}

#[component]
fn SolvesCard(solves: Vec<ProfileSolve>) -> impl IntoView {
    if solves.is_empty() {
        return view! {
            <div class="frame profile__solves">
                <div class="frame__body">
                    <div class="frame__title title">"Solves"</div>
                    <p class="frame__subtitle">"This team has no solves."</p>
                </div>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="frame profile__solves">
            <div class="frame__body">
                <div class="frame__title title">"Solves"</div>
                <table class="table small">
                    <thead>
                        <tr>
                            <th>"Category"</th>
                            <th>"Challenge"</th>
                            <th>"Solves"</th>
                            <th>"Points"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {solves.into_iter().map(|solve| view! {
                            <tr>
                                <td>{solve.category}</td>
                                <td>{solve.name}</td>
                                <td>{solve.solves}</td>
                                <td>{solve.points}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn ProfileDetails() -> impl IntoView {
    let config = use_client_config();
    set_document_title("Profile", &config);

    let vm = ProfileDetailsViewModel::new();
    let params = use_params_map();
    let team_id = Memo::new(move |_| params.with(|p| p.get("uuid").unwrap_or_default()));

    {
        let api_base = config.api_base.clone();
        Effect::new(move |_| {
            vm.load(api_base.clone(), team_id.get());
        });
    }

    let render_ready = move |profile: PublicProfile| {
        let summary = ProfileSummary::new(&profile, &config);
        view! {
            <div class="profile">
                <SummaryCard summary=summary />
                <SolvesCard solves=profile.solves />
            </div>
        }
    };

    view! {
        {move || match vm.screen() {
            ProfileScreen::Loading => view! { <></> }.into_any(),
            ProfileScreen::Error(message) => view! {
                <div class="row u-center">
                    <div class="frame profile__error">
                        <div class="frame__body">
                            <p class="title">"There was an error"</p>
                            <p class="font-thin">{message}</p>
                        </div>
                    </div>
                </div>
            }
            .into_any(),
            ProfileScreen::Ready(profile) => render_ready(profile).into_any(),
        }}
    }
}

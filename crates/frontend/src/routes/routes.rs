use crate::domain::a001_leaderboard::ui::list::ScoreboardList;
use crate::domain::a003_challenge::ui::list::ChallengeList;
use crate::domain::a004_profile::ui::details::ProfileDetails;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="row u-center">
            <h3>"404 | Page not found"</h3>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ScoreboardList />
                    <Route path=path!("/scores") view=ScoreboardList />
                    <Route path=path!("/challs") view=ChallengeList />
                    <Route path=path!("/profile/:uuid") view=ProfileDetails />
                </Routes>
            </Shell>
        </Router>
    }
}

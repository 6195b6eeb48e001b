use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{A, Route, Router, Routes},
    hooks::use_params_map,
};

pub mod plan_trip;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Plan Your Trip"/>

        <Router>
            <main class="min-h-screen bg-dark-950">
                <Routes fallback=|| "Page not found.">
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("plan-trip") view=plan_trip::PlanTripPage/>
                    <Route path=(StaticSegment("trip"), ParamSegment("id")) view=TripPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    view! {
        <div class="text-center py-10">
            <h1 class="text-4xl font-display font-bold gradient-text mb-4">"Your Trips"</h1>
            <p class="text-dark-400 mb-8">"Start planning your next journey"</p>
            <A href="/plan-trip" attr:class="btn-primary">
                "Plan a New Trip"
            </A>
        </div>
    }
}

#[component]
fn TripPage() -> impl IntoView {
    let params = use_params_map();
    let trip_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <div class="max-w-4xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-display font-bold gradient-text mb-2">"Trip Plan"</h1>
            <p class="text-dark-400">"Trip reference: " <span class="font-mono">{trip_id}</span></p>
            <A href="/dashboard" attr:class="mt-6 inline-block text-dark-400 hover:text-dark-200">
                "Back to Dashboard"
            </A>
        </div>
    }
}

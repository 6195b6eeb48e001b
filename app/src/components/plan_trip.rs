use crate::api::{ServerFnTripService, get_destinations};
use crate::components_impl::{
    FieldUpdate, PlanTripForm, SuggestionField, no_results_text, place_label, place_placeholder,
    plan_type_card_class, plan_type_tagline, submit_button_label, travel_type_button_class,
};
use crate::submission::{
    DASHBOARD_PATH, Navigator, SubmissionHandle, cancellable_submission, complete_submission,
};
use crate::suggestions::SuggestionSource;
use crate::types::{PlanType, TravelType};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use std::sync::Arc;
use tracing::debug;

type SourceMemo = Memo<Option<Arc<SuggestionSource>>>;

/// [`Navigator`] over the router's navigate function.
struct RouterNavigator<F>(F);

impl<F: Fn(&str, NavigateOptions)> Navigator for RouterNavigator<F> {
    fn go_to(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

#[component]
pub fn PlanTripPage() -> impl IntoView {
    let form = RwSignal::new(PlanTripForm::new());
    let catalog = LocalResource::new(|| async { get_destinations().await });
    let source: SourceMemo = Memo::new(move |_| {
        catalog
            .get()
            .map(|result| Arc::new(SuggestionSource::from_catalog(result)))
    });

    let in_flight = StoredValue::new(None::<SubmissionHandle>);
    on_cleanup(move || {
        in_flight.try_with_value(|handle| {
            if let Some(handle) = handle {
                handle.cancel();
            }
        });
    });

    let navigate = use_navigate();
    let go_back = {
        let navigate = navigate.clone();
        move |_| RouterNavigator(navigate.clone()).go_to(DASHBOARD_PATH)
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let draft = match form.try_update(PlanTripForm::begin_submit) {
            Some(Ok(draft)) => draft,
            Some(Err(blocked)) => {
                debug!("Submission not started: {}", blocked);
                return;
            }
            None => return,
        };

        let (handle, task) = cancellable_submission(ServerFnTripService, draft);
        in_flight.set_value(Some(handle));
        let navigator = RouterNavigator(navigate.clone());

        leptos::task::spawn_local(async move {
            let outcome = task.await;
            in_flight.try_update_value(|handle| *handle = None);
            form.try_update(|f| complete_submission(f, outcome, &navigator));
        });
    };

    let loading = move || form.with(PlanTripForm::loading);

    view! {
        <div class="relative z-10 max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="mb-8">
                <button
                    type="button"
                    class="flex items-center text-dark-400 hover:text-dark-200 mb-6 transition-colors"
                    on:click=go_back
                >
                    <svg class="w-5 h-5 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 19l-7-7m0 0l7-7m-7 7h18"/>
                    </svg>
                    "Back to Dashboard"
                </button>

                <h1 class="text-4xl font-display font-bold gradient-text">"Plan Your Trip"</h1>
                <p class="text-dark-400">"Tell us about your travel plans"</p>
            </div>

            <div class="card">
                <form class="space-y-6" on:submit=handle_submit>
                    <PlaceField form=form source=source field=SuggestionField::StartCity name="startCity"/>
                    <PlaceField
                        form=form
                        source=source
                        field=SuggestionField::Destination
                        name="destination"
                        hint="We'll calculate travel costs from your starting city to this destination"
                    />

                    <div class="grid md:grid-cols-2 gap-6">
                        <div>
                            <label class="form-label">"Start Date"</label>
                            <input
                                type="date"
                                name="startDate"
                                class="input-field"
                                required
                                prop:value=move || form.with(|f| f.fields().start_date.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.update_field(FieldUpdate::StartDate(value)));
                                }
                            />
                        </div>
                        <div>
                            <label class="form-label">"End Date"</label>
                            <input
                                type="date"
                                name="endDate"
                                class="input-field"
                                required
                                prop:value=move || form.with(|f| f.fields().end_date.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.update_field(FieldUpdate::EndDate(value)));
                                }
                            />
                        </div>
                    </div>

                    <div>
                        <label class="form-label">"Number of Travelers"</label>
                        <input
                            type="number"
                            name="numberOfTravelers"
                            class="input-field"
                            min="1"
                            required
                            prop:value=move || form.with(|f| f.fields().number_of_travelers.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.update_field(FieldUpdate::NumberOfTravelers(value)));
                            }
                        />
                    </div>

                    <div>
                        <label class="form-label">"Travel Type"</label>
                        <div class="grid grid-cols-3 gap-4">
                            {TravelType::ALL
                                .into_iter()
                                .map(|travel_type| {
                                    view! {
                                        <button
                                            type="button"
                                            class=move || travel_type_button_class(
                                                form.with(|f| f.fields().travel_type == travel_type),
                                            )
                                            on:click=move |_| {
                                                form.update(|f| f.update_field(FieldUpdate::TravelType(travel_type)));
                                            }
                                        >
                                            {travel_type.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <label class="form-label">"Total Budget (₹)"</label>
                        <input
                            type="number"
                            name="totalBudget"
                            class="input-field"
                            placeholder="e.g., 50000"
                            min="1"
                            required
                            prop:value=move || form.with(|f| f.fields().total_budget.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.update_field(FieldUpdate::TotalBudget(value)));
                            }
                        />
                    </div>

                    <div>
                        <label class="form-label">"Plan Type"</label>
                        <div class="grid grid-cols-3 gap-4">
                            {PlanType::ALL
                                .into_iter()
                                .map(|plan_type| {
                                    view! {
                                        <button
                                            type="button"
                                            class=move || plan_type_card_class(
                                                plan_type,
                                                form.with(|f| f.fields().plan_type == plan_type),
                                            )
                                            on:click=move |_| {
                                                form.update(|f| f.update_field(FieldUpdate::PlanType(plan_type)));
                                            }
                                        >
                                            <div class="font-semibold text-dark-100 mb-1">{plan_type.label()}</div>
                                            <div class="text-xs text-dark-400">{plan_type_tagline(plan_type)}</div>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <Show when=move || form.with(|f| f.error().is_some())>
                        <div class="alert-danger">
                            {move || form.with(|f| f.error().unwrap_or_default().to_string())}
                        </div>
                    </Show>

                    <button type="submit" class="w-full btn-primary" disabled=loading>
                        <Show when=loading>
                            <svg class="w-4 h-4 animate-spin" fill="none" viewBox="0 0 24 24">
                                <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"/>
                                <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"/>
                            </svg>
                        </Show>
                        {move || submit_button_label(loading())}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Text input with an autocomplete overlay.
///
/// Rows commit on `mousedown` with the default prevented, so the selection
/// lands before the input's `blur` dismisses the overlay.
#[component]
fn PlaceField(
    form: RwSignal<PlanTripForm>,
    source: SourceMemo,
    field: SuggestionField,
    name: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div>
            <label class="form-label">{place_label(field)}</label>
            <div class="relative">
                <input
                    type="text"
                    name=name
                    class="input-field"
                    placeholder=place_placeholder(field)
                    required
                    autocomplete="off"
                    prop:value=move || form.with(|f| f.fields().place(field).to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.update_field(FieldUpdate::place(field, value)));
                    }
                    on:focus=move |_| form.update(|f| f.focus(field))
                    on:blur=move |_| form.update(PlanTripForm::dismiss_suggestions)
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            form.update(PlanTripForm::dismiss_suggestions);
                        }
                    }
                />
                <Show when=move || form.with(|f| f.shows_suggestions(field))>
                    <SuggestionList form=form source=source field=field/>
                </Show>
            </div>
            {hint.map(|text| view! { <p class="mt-2 text-xs text-dark-400">{text}</p> })}
        </div>
    }
}

#[component]
fn SuggestionList(
    form: RwSignal<PlanTripForm>,
    source: SourceMemo,
    field: SuggestionField,
) -> impl IntoView {
    let candidates = move || {
        source
            .get()
            .map(|source| form.with(|f| f.suggestions(&source, field)))
    };

    view! {
        <div class="suggestion-list">
            {move || match candidates() {
                None => view! {
                    <div class="px-4 py-3 text-dark-400 text-sm">"Loading suggestions..."</div>
                }
                .into_any(),
                Some(items) if items.is_empty() => view! {
                    <div class="px-4 py-3 text-dark-400 text-sm">{no_results_text(field)}</div>
                }
                .into_any(),
                Some(items) => items
                    .into_iter()
                    .map(|item| {
                        let value = item.clone();
                        view! {
                            <button
                                type="button"
                                class="suggestion-item"
                                on:mousedown=move |ev| {
                                    ev.prevent_default();
                                    form.update(|f| f.select_suggestion(field, value.clone()));
                                }
                            >
                                <span>{item}</span>
                            </button>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

//! Business logic extracted from Leptos components for testability.
//!
//! The plan-trip page keeps a single [`PlanTripForm`] in a signal and only
//! calls the methods below from its event handlers. Nothing in here touches
//! the DOM, so every transition the page can make is covered by plain unit
//! tests.

use crate::submission::{SubmissionController, SubmitBlocked, SubmitFailure};
use crate::suggestions::{SuggestionSource, filter_candidates};
use crate::types::{PlanType, TravelType, TripCreated, TripDraft};
use chrono::NaiveDate;
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

// === Fields ===

/// The two text fields backed by an autocomplete overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionField {
    StartCity,
    Destination,
}

/// A single edit to the form: which field, and its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    StartCity(String),
    Destination(String),
    StartDate(String),
    EndDate(String),
    NumberOfTravelers(String),
    TotalBudget(String),
    TravelType(TravelType),
    PlanType(PlanType),
}

impl FieldUpdate {
    /// Text update for one of the autocomplete fields.
    pub fn place(field: SuggestionField, value: String) -> Self {
        match field {
            SuggestionField::StartCity => Self::StartCity(value),
            SuggestionField::Destination => Self::Destination(value),
        }
    }

    /// The autocomplete field this update targets, if any.
    pub const fn suggestion_field(&self) -> Option<SuggestionField> {
        match self {
            Self::StartCity(_) => Some(SuggestionField::StartCity),
            Self::Destination(_) => Some(SuggestionField::Destination),
            _ => None,
        }
    }
}

/// Raw input values, as the browser delivers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripFormFields {
    pub start_city: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub number_of_travelers: String,
    pub total_budget: String,
    pub travel_type: TravelType,
    pub plan_type: PlanType,
}

impl Default for TripFormFields {
    fn default() -> Self {
        Self {
            start_city: String::new(),
            destination: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            number_of_travelers: "1".to_string(),
            total_budget: String::new(),
            travel_type: TravelType::default(),
            plan_type: PlanType::default(),
        }
    }
}

impl TripFormFields {
    fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::StartCity(v) => self.start_city = v,
            FieldUpdate::Destination(v) => self.destination = v,
            FieldUpdate::StartDate(v) => self.start_date = v,
            FieldUpdate::EndDate(v) => self.end_date = v,
            FieldUpdate::NumberOfTravelers(v) => self.number_of_travelers = v,
            FieldUpdate::TotalBudget(v) => self.total_budget = v,
            FieldUpdate::TravelType(t) => self.travel_type = t,
            FieldUpdate::PlanType(p) => self.plan_type = p,
        }
    }

    /// Current text of an autocomplete field.
    pub fn place(&self, field: SuggestionField) -> &str {
        match field {
            SuggestionField::StartCity => &self.start_city,
            SuggestionField::Destination => &self.destination,
        }
    }
}

// === Draft Building ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    StartCity,
    Destination,
    StartDate,
    EndDate,
    NumberOfTravelers,
    TotalBudget,
}

impl DraftField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartCity => "Starting city",
            Self::Destination => "Destination",
            Self::StartDate => "Start date",
            Self::EndDate => "End date",
            Self::NumberOfTravelers => "Number of travelers",
            Self::TotalBudget => "Total budget",
        }
    }
}

/// Why the edit buffer does not satisfy the form's input constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    Missing(DraftField),
    InvalidDate(DraftField, String),
    InvalidNumber(DraftField, String),
    BelowMinimum(DraftField),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "{} is required", field.label()),
            Self::InvalidDate(field, value) => {
                write!(f, "{} '{value}' is not a valid date", field.label())
            }
            Self::InvalidNumber(field, value) => {
                write!(f, "{} '{value}' is not a valid number", field.label())
            }
            Self::BelowMinimum(field) => write!(f, "{} must be at least 1", field.label()),
        }
    }
}

impl std::error::Error for DraftError {}

/// Build a [`TripDraft`] from the raw form values.
///
/// Only the constraints the page's inputs declare are checked: required
/// fields, valid dates, and `min="1"` on travelers and budget. The date order
/// and the budget amount are left to the planner backend.
pub fn build_trip_draft(fields: &TripFormFields) -> Result<TripDraft, DraftError> {
    Ok(TripDraft {
        start_city: required_text(&fields.start_city, DraftField::StartCity)?,
        destination: required_text(&fields.destination, DraftField::Destination)?,
        start_date: parse_date(&fields.start_date, DraftField::StartDate)?,
        end_date: parse_date(&fields.end_date, DraftField::EndDate)?,
        number_of_travelers: parse_travelers(&fields.number_of_travelers)?,
        travel_type: fields.travel_type,
        total_budget: parse_budget(&fields.total_budget)?,
        plan_type: fields.plan_type,
    })
}

fn required_text(value: &str, field: DraftField) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_date(value: &str, field: DraftField) -> Result<NaiveDate, DraftError> {
    let value = required_text(value, field)?;
    NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|_| DraftError::InvalidDate(field, value))
}

fn parse_travelers(value: &str) -> Result<u32, DraftError> {
    let field = DraftField::NumberOfTravelers;
    let value = required_text(value, field)?;
    let count: i64 = value
        .parse()
        .map_err(|_| DraftError::InvalidNumber(field, value.clone()))?;
    if count < 1 {
        return Err(DraftError::BelowMinimum(field));
    }
    u32::try_from(count).map_err(|_| DraftError::InvalidNumber(field, value))
}

fn parse_budget(value: &str) -> Result<f64, DraftError> {
    let field = DraftField::TotalBudget;
    let value = required_text(value, field)?;
    let amount: f64 = value
        .parse()
        .ok()
        .filter(|amount: &f64| amount.is_finite())
        .ok_or_else(|| DraftError::InvalidNumber(field, value.clone()))?;
    if amount < 1.0 {
        return Err(DraftError::BelowMinimum(field));
    }
    Ok(amount)
}

// === Form State ===

/// Field values plus the transient UI state of the plan-trip page.
///
/// At most one suggestion overlay is open at a time. It opens on focus or
/// typing, and closes on an explicit selection or dismissal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanTripForm {
    fields: TripFormFields,
    open_suggestions: Option<SuggestionField>,
    submission: SubmissionController,
}

impl PlanTripForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &TripFormFields {
        &self.fields
    }

    /// Apply a user edit. Typing acknowledges any previous error, so the
    /// error message is cleared; editing a place field opens its overlay.
    pub fn update_field(&mut self, update: FieldUpdate) {
        let opens = update.suggestion_field();
        self.fields.apply(update);
        self.submission.clear_error();
        if let Some(field) = opens {
            self.open_suggestions = Some(field);
        }
    }

    /// Commit a suggestion: the field takes exactly `value` and its overlay closes.
    pub fn select_suggestion(&mut self, field: SuggestionField, value: impl Into<String>) {
        self.fields.apply(FieldUpdate::place(field, value.into()));
        if self.open_suggestions == Some(field) {
            self.open_suggestions = None;
        }
    }

    pub fn focus(&mut self, field: SuggestionField) {
        self.open_suggestions = Some(field);
    }

    /// Outside click, blur or Escape.
    pub fn dismiss_suggestions(&mut self) {
        self.open_suggestions = None;
    }

    pub fn shows_suggestions(&self, field: SuggestionField) -> bool {
        self.open_suggestions == Some(field)
    }

    pub fn open_suggestions(&self) -> Option<SuggestionField> {
        self.open_suggestions
    }

    /// Candidates for `field`, filtered by its current text.
    pub fn suggestions(&self, source: &SuggestionSource, field: SuggestionField) -> Vec<String> {
        filter_candidates(source.candidates(field), self.fields.place(field))
    }

    pub fn submission(&self) -> &SubmissionController {
        &self.submission
    }

    pub fn loading(&self) -> bool {
        self.submission.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.submission.error()
    }

    /// Start a submission attempt and hand back the draft to send.
    ///
    /// A draft that cannot be built is refused with its reason shown as the
    /// form error.
    pub fn begin_submit(&mut self) -> Result<TripDraft, SubmitBlocked> {
        self.submission.ensure_ready()?;
        let draft = match build_trip_draft(&self.fields) {
            Ok(draft) => draft,
            Err(e) => {
                self.submission.refuse(&e);
                return Err(SubmitBlocked::Invalid(e));
            }
        };
        self.submission.begin()?;
        Ok(draft)
    }

    /// Record the outcome of the attempt started by [`Self::begin_submit`].
    /// Returns the path to navigate to on success.
    pub fn finish_submit(&mut self, result: Result<TripCreated, SubmitFailure>) -> Option<String> {
        self.submission.resolve(result)
    }
}

// === UI Helpers ===

pub fn submit_button_label(loading: bool) -> &'static str {
    if loading {
        "Creating Your Trip Plan..."
    } else {
        "Generate Trip Plan"
    }
}

/// Text shown in place of an empty suggestion list.
pub fn no_results_text(field: SuggestionField) -> &'static str {
    match field {
        SuggestionField::StartCity => "No cities found",
        SuggestionField::Destination => "No destinations found",
    }
}

pub fn place_placeholder(field: SuggestionField) -> &'static str {
    match field {
        SuggestionField::StartCity => "e.g., Mumbai, Delhi, Bangalore",
        SuggestionField::Destination => "e.g., Goa, Jaipur, Kerala",
    }
}

pub fn place_label(field: SuggestionField) -> &'static str {
    match field {
        SuggestionField::StartCity => "Starting City (Source)",
        SuggestionField::Destination => "Destination",
    }
}

pub fn plan_type_tagline(plan_type: PlanType) -> &'static str {
    match plan_type {
        PlanType::Budget => "Save more",
        PlanType::Balanced => "Best value",
        PlanType::Comfort => "Premium stay",
    }
}

pub fn travel_type_button_class(selected: bool) -> &'static str {
    if selected {
        "choice-button choice-button-selected"
    } else {
        "choice-button"
    }
}

pub fn plan_type_card_class(plan_type: PlanType, selected: bool) -> &'static str {
    match (plan_type, selected) {
        (_, false) => "plan-card",
        (PlanType::Budget, true) => "plan-card plan-card-accent",
        (PlanType::Balanced, true) => "plan-card plan-card-primary",
        (PlanType::Comfort, true) => "plan-card plan-card-secondary",
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelType {
    #[default]
    Solo,
    Couple,
    Family,
}

impl TravelType {
    pub const ALL: [Self; 3] = [Self::Solo, Self::Couple, Self::Family];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Solo => "SOLO",
            Self::Couple => "COUPLE",
            Self::Family => "FAMILY",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    Budget,
    #[default]
    Balanced,
    Comfort,
}

impl PlanType {
    pub const ALL: [Self; 3] = [Self::Budget, Self::Balanced, Self::Comfort];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Budget => "BUDGET",
            Self::Balanced => "BALANCED",
            Self::Comfort => "COMFORT",
        }
    }
}

/// A complete set of trip parameters, ready to be sent to the planner backend.
///
/// Built from the form's edit buffer at submit time, see
/// [`build_trip_draft`](crate::components_impl::build_trip_draft).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    pub start_city: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_travelers: u32,
    pub travel_type: TravelType,
    pub total_budget: f64,
    pub plan_type: PlanType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCreated {
    pub trip_id: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_draft() -> TripDraft {
        TripDraft {
            start_city: "Mumbai".to_string(),
            destination: "Goa".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 12, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 24).unwrap(),
            number_of_travelers: 2,
            travel_type: TravelType::Couple,
            total_budget: 50000.0,
            plan_type: PlanType::Balanced,
        }
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        assert_eq!(TravelType::default(), TravelType::Solo);
        assert_eq!(PlanType::default(), PlanType::Balanced);
    }

    #[test]
    fn test_draft_serializes_in_backend_shape() {
        let value = serde_json::to_value(sample_draft()).unwrap();

        assert_eq!(
            value,
            json!({
                "startCity": "Mumbai",
                "destination": "Goa",
                "startDate": "2026-12-20",
                "endDate": "2026-12-24",
                "numberOfTravelers": 2,
                "travelType": "COUPLE",
                "totalBudget": 50000.0,
                "planType": "BALANCED"
            })
        );
    }

    #[test]
    fn test_labels_match_wire_names() {
        for travel_type in TravelType::ALL {
            let wire = serde_json::to_value(travel_type).unwrap();
            assert_eq!(wire, json!(travel_type.label()));
        }
        for plan_type in PlanType::ALL {
            let wire = serde_json::to_value(plan_type).unwrap();
            assert_eq!(wire, json!(plan_type.label()));
        }
    }

    #[test]
    fn test_trip_created_from_camel_case() {
        let created: TripCreated = serde_json::from_value(json!({ "tripId": "abc123" })).unwrap();
        assert_eq!(created.trip_id, "abc123");
    }
}

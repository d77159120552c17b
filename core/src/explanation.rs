//! Template-driven explanations of which factors moved a recommendation.

use crate::{pricing::PriceFactors, staffing::StaffingFactors};

pub fn pricing_explanation(hotel_name: &str, factors: &PriceFactors) -> String {
    let mut phrases = Vec::new();

    if factors.season_factor > 1.1 {
        phrases.push("high season demand");
    } else if factors.season_factor < 0.95 {
        phrases.push("low season adjustments");
    }

    if factors.demand_factor > 1.1 {
        phrases.push("strong current booking trends");
    } else if factors.demand_factor < 0.95 {
        phrases.push("softer than usual demand");
    }

    if factors.event_factor > 1.0 {
        phrases.push("local events increasing demand");
    }

    if factors.competitor_factor > 1.05 {
        phrases.push("competitor hotels raising their rates");
    } else if factors.competitor_factor < 0.95 {
        phrases.push("competitive pressure from nearby properties");
    }

    let body = if phrases.is_empty() {
        "standard pricing aligned with market conditions".to_string()
    } else {
        join_phrases(&phrases)
    };
    format!("The recommended rate for {hotel_name} is based on several factors: {body}.")
}

pub fn staffing_explanation(hotel_name: &str, factors: &StaffingFactors) -> String {
    let mut phrases = Vec::new();

    if factors.occupancy_factor > 1.1 {
        phrases.push("high projected occupancy rates");
    } else if factors.occupancy_factor < 0.9 {
        phrases.push("lower than average occupancy");
    }

    if factors.event_factor > 1.1 {
        phrases.push("increased demand due to local events");
    }

    if factors.weekend_factor > 1.0 {
        phrases.push("weekend staffing requirements");
    }

    let body = if phrases.is_empty() {
        "standard operating levels".to_string()
    } else {
        phrases.join(", ")
    };

    let advisory = if factors.occupancy_factor > 1.1 && factors.event_factor > 1.1 {
        " We recommend particular attention to concierge and restaurant staffing \
         to maintain service levels during this high-demand period."
    } else if factors.occupancy_factor < 0.9 {
        " This provides an opportunity to optimize labor costs while maintaining \
         essential service levels."
    } else {
        ""
    };

    format!("Staffing recommendations for {hotel_name} are based on: {body}.{advisory}")
}

/// "a", "a and b", "a, b, and c".
fn join_phrases(phrases: &[&str]) -> String {
    match phrases {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

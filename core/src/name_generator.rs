//! Deterministic hotel, city and event naming from curated word lists.
//!
//! All generation is deterministic (same RNG seed = same names).

use crate::rng::StreamRng;

/// Deterministic name generator using curated word lists
pub struct NameGenerator;

impl NameGenerator {
    /// Hotel name, e.g. "Reed Partners Hotel" or "Reed and Bell Hotel".
    pub fn generate_hotel_name(rng: &mut StreamRng) -> String {
        let surname = *rng.choose(Self::surnames());
        let suffix = *rng.choose(Self::company_suffixes());

        // Format: "Surname Suffix Hotel" or "Surname and Surname Hotel"
        if rng.chance(0.7) {
            format!("{surname} {suffix} Hotel")
        } else {
            let partner = *rng.choose(Self::surnames());
            format!("{surname} and {partner} Hotel")
        }
    }

    pub fn generate_city(rng: &mut StreamRng) -> &'static str {
        *rng.choose(Self::cities())
    }

    pub fn generate_event_type(rng: &mut StreamRng) -> &'static str {
        *rng.choose(Self::event_types())
    }

    fn surnames() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Garcia", "Miller", "Davis",
            "Martinez", "Anderson", "Taylor", "Moore", "Jackson", "Martin", "Lee",
            "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson", "Walker",
            "Young", "Allen", "King", "Wright", "Scott", "Hill", "Green", "Adams",
            "Baker", "Nelson", "Carter", "Mitchell", "Roberts", "Turner", "Parker",
            "Collins", "Stewart", "Morris", "Murphy", "Cook", "Rogers", "Morgan",
            "Cooper", "Peterson", "Reed", "Bailey", "Bell", "Howard", "Ward",
            "Watson", "Brooks", "Wood", "Bennett", "Gray", "Hughes", "Price",
            "Sanders", "Myers", "Long", "Ross", "Foster", "Powell", "Russell",
        ]
    }

    fn company_suffixes() -> &'static [&'static str] {
        &[
            "Group", "Holdings", "Partners", "Ventures", "Collection", "Estates",
            "Hospitality", "Resorts", "International", "Brothers", "& Sons",
        ]
    }

    /// Curated list of city names. Kept deliberately short so mock events
    /// and hotels share locations often enough for the join to matter.
    fn cities() -> &'static [&'static str] {
        &[
            "Lake Susan", "Port Daniel", "North Jessica", "East Michael",
            "South Karen", "West Brian", "New Emily", "Jamesville",
            "Millerton", "Greenhaven", "Riverside", "Fairview", "Springfield",
            "Clearwater", "Oakridge", "Maple Grove", "Stonebridge", "Brookfield",
            "Ashford", "Kingsport", "Bayview", "Highland Park", "Westfield",
            "Lakewood", "Silver Springs", "Cedar Falls", "Pine Bluff", "Elmwood",
            "Harborview", "Summit City",
        ]
    }

    fn event_types() -> &'static [&'static str] {
        &["Conference", "Concert", "Festival", "Sports Event"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StreamSlot};

    #[test]
    fn hotel_name_generation_is_deterministic() {
        let mut rng1 = RngBank::new(12345).for_stream(StreamSlot::MockData);
        let mut rng2 = RngBank::new(12345).for_stream(StreamSlot::MockData);

        let name1 = NameGenerator::generate_hotel_name(&mut rng1);
        let name2 = NameGenerator::generate_hotel_name(&mut rng2);

        assert_eq!(name1, name2, "Same seed should produce same name");
    }

    #[test]
    fn hotel_names_end_with_hotel() {
        let mut rng = RngBank::new(12345).for_stream(StreamSlot::MockData);

        for _ in 0..100 {
            let name = NameGenerator::generate_hotel_name(&mut rng);
            assert!(name.ends_with(" Hotel"), "unexpected hotel name: {name}");
            assert!(name.split_whitespace().count() >= 3, "too short: {name}");
        }
    }

    #[test]
    fn hotel_names_start_with_a_listed_surname() {
        let mut rng = RngBank::new(99).for_stream(StreamSlot::MockData);

        for _ in 0..100 {
            let name = NameGenerator::generate_hotel_name(&mut rng);
            let first = name.split_whitespace().next().unwrap_or_default();
            assert!(NameGenerator::surnames().contains(&first), "unknown surname in {name}");
        }
    }
}

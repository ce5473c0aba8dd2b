//! Property-based tests for recommendation ranking.
//!
//! # Invariants tested
//!
//! - **Bounded output:** at most three listings, never more than the number
//!   of positively scored listings.
//! - **Ordering:** scores are non-increasing along the output.
//! - **Relevance:** no zero-score listing is returned.
//! - **Purity:** repeated calls agree.
//! - **Empty inputs:** an empty profile or catalog yields nothing.

use proptest::prelude::*;
use staysuite_core::{Category, Listing, ListingBuilder, PreferenceProfile, Price, Scorer};
use staysuite_scorer::{PreferenceScorer, RECOMMENDATION_LIMIT, recommend};

const VOCABULARY: &[&str] = &[
    "Luxury",
    "Boutique",
    "Resort",
    "Business",
    "Family",
    "Spa",
    "Pool",
    "Heated Pool",
    "Valet",
    "Free Wi-Fi",
    "Free Breakfast",
    "Coworking Space",
    "Smart Rooms",
    "Gym",
    "Nightlife",
];

fn tag_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(VOCABULARY).prop_map(str::to_owned)
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Listing>> {
    prop::collection::vec(
        (
            category_strategy(),
            1_u64..100_000,
            prop::collection::vec(tag_strategy(), 0..6),
        ),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (category, price, amenities))| {
                ListingBuilder::new(format!("l{index}"))
                    .category(category)
                    .price(Price::from_cents(price).unwrap_or_default())
                    .amenities(amenities)
                    .build()
            })
            .collect()
    })
}

fn profile_strategy() -> impl Strategy<Value = PreferenceProfile> {
    prop::collection::vec(tag_strategy(), 0..4).prop_map(PreferenceProfile::from_tags)
}

fn score_of(listing: &Listing, profile: &PreferenceProfile) -> u32 {
    PreferenceScorer::default().score(listing, profile)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn output_is_bounded(profile in profile_strategy(), catalog in catalog_strategy()) {
        let picks = recommend(&profile, &catalog);
        let positive = catalog.iter().filter(|l| score_of(l, &profile) > 0).count();
        prop_assert!(picks.len() <= RECOMMENDATION_LIMIT);
        prop_assert!(picks.len() <= positive);
        prop_assert_eq!(picks.len(), positive.min(RECOMMENDATION_LIMIT));
    }

    #[test]
    fn scores_are_positive_and_non_increasing(
        profile in profile_strategy(),
        catalog in catalog_strategy(),
    ) {
        let scores: Vec<u32> = recommend(&profile, &catalog)
            .iter()
            .map(|l| score_of(l, &profile))
            .collect();
        prop_assert!(scores.iter().all(|&s| s > 0));
        prop_assert!(scores.windows(2).all(|pair| pair.first() >= pair.last()));
    }

    #[test]
    fn recommendation_is_idempotent(profile in profile_strategy(), catalog in catalog_strategy()) {
        prop_assert_eq!(recommend(&profile, &catalog), recommend(&profile, &catalog));
    }

    #[test]
    fn empty_profile_yields_nothing(catalog in catalog_strategy()) {
        prop_assert!(recommend(&PreferenceProfile::new(), &catalog).is_empty());
    }

    #[test]
    fn empty_catalog_yields_nothing(profile in profile_strategy()) {
        prop_assert!(recommend(&profile, &[]).is_empty());
    }
}

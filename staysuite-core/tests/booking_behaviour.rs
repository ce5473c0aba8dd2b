//! Behaviour tests for catalog search, stay quotes and advice fallback.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use staysuite_core::{
    ALL_LOCATIONS, Catalog, Category, DEFAULT_NIGHTS, DestinationAdvice, Price, QuoteError,
    SearchQuery, StayQuote,
};
use std::cell::RefCell;

#[derive(Default)]
struct BookingWorld {
    catalog: RefCell<Option<Catalog>>,
    matches: RefCell<Vec<String>>,
    quote: RefCell<Option<Result<StayQuote, QuoteError>>>,
    advice: RefCell<Option<DestinationAdvice>>,
}

impl BookingWorld {
    fn search(&self, query: &SearchQuery) {
        let seeded = self.catalog.borrow();
        let catalog = seeded.as_ref().expect("catalog should be seeded");
        let ids = catalog
            .search(query)
            .into_iter()
            .map(|listing| listing.id.clone())
            .collect();
        self.matches.replace(ids);
    }

    fn quote(&self, id: &str, nights: u32) {
        let seeded = self.catalog.borrow();
        let catalog = seeded.as_ref().expect("catalog should be seeded");
        let listing = catalog.get(id).expect("listing should exist");
        self.quote
            .replace(Some(StayQuote::for_listing(listing, nights)));
    }
}

#[fixture]
fn world() -> BookingWorld {
    BookingWorld::default()
}

#[given("the featured catalog")]
fn featured_catalog(#[from(world)] world: &BookingWorld) {
    world.catalog.replace(Some(Catalog::featured()));
}

#[when("I search for boutique stays in all locations")]
fn search_boutique(#[from(world)] world: &BookingWorld) {
    let query = SearchQuery::new()
        .with_location(ALL_LOCATIONS)
        .with_category(Category::Boutique);
    world.search(&query);
}

#[when("I search for stays in \"miami\"")]
fn search_miami(#[from(world)] world: &BookingWorld) {
    world.search(&SearchQuery::new().with_location("miami"));
}

#[when("I quote the default stay at h1")]
fn quote_default(#[from(world)] world: &BookingWorld) {
    world.quote("h1", DEFAULT_NIGHTS);
}

#[when("I quote zero nights at h4")]
fn quote_zero(#[from(world)] world: &BookingWorld) {
    world.quote("h4", 0);
}

#[when("advice for h5 arrives as unparseable text")]
fn garbled_advice(#[from(world)] world: &BookingWorld) {
    let seeded = world.catalog.borrow();
    let catalog = seeded.as_ref().expect("catalog should be seeded");
    let listing = catalog.get("h5").expect("listing should exist");
    let advice = DestinationAdvice::from_model_reply("Sorry, I cannot help with that.", listing);
    world.advice.replace(Some(advice));
}

#[then("the matching listings are h3 and h6")]
fn matches_boutique(#[from(world)] world: &BookingWorld) {
    assert_eq!(*world.matches.borrow(), ["h3", "h6"]);
}

#[then("the matching listings are h2")]
fn matches_miami(#[from(world)] world: &BookingWorld) {
    assert_eq!(*world.matches.borrow(), ["h2"]);
}

#[then("the quote subtotal is 1350 and the total is 1395")]
fn quote_totals(#[from(world)] world: &BookingWorld) {
    let computed = world.quote.borrow();
    let quote = computed
        .as_ref()
        .expect("quote should be computed")
        .as_ref()
        .expect("quote should succeed");
    assert_eq!(quote.nights, DEFAULT_NIGHTS);
    assert_eq!(quote.subtotal, Price::whole(1350));
    assert_eq!(quote.total, Price::whole(1395));
}

#[then("the quote is rejected for having no nights")]
fn quote_rejected(#[from(world)] world: &BookingWorld) {
    let computed = world.quote.borrow();
    assert_eq!(
        computed.as_ref().expect("quote should be computed"),
        &Err(QuoteError::NoNights)
    );
}

#[then("the advice mentions Aspen and the lodge name")]
fn advice_fallback(#[from(world)] world: &BookingWorld) {
    let produced = world.advice.borrow();
    let advice = produced.as_ref().expect("advice should be produced");
    assert_eq!(
        advice.summary,
        "Discover the beauty of Aspen, CO with a stay at Alpine Lodge & Spa."
    );
}

#[scenario(path = "tests/features/booking.feature", index = 0)]
fn filter_by_category(world: BookingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/booking.feature", index = 1)]
fn filter_by_location(world: BookingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/booking.feature", index = 2)]
fn quote_default_stay(world: BookingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/booking.feature", index = 3)]
fn quote_zero_nights(world: BookingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/booking.feature", index = 4)]
fn advice_falls_back(world: BookingWorld) {
    let _ = world;
}

use crate::catalog::{Catalog, StaticCatalog};

use super::*;

#[test]
fn starts_on_the_unfiltered_listing() {
    let catalog = StaticCatalog::seeded();
    let state = State::new(catalog.all(), Theme::Emerald, true);

    assert_eq!(state.screen, Screen::Listing);
    assert_eq!(state.screen.view_id(), ViewID::Deals);
    assert!(state.category.is_none());
    assert!(state.query.is_empty());
    assert_eq!(state.deals.len(), 3);
    assert_eq!(state.cursor, 0);
    assert_eq!(state.theme, Theme::Emerald);
}

#[test]
fn screen_priority_maps_to_views() {
    let deal = StaticCatalog::seeded().by_id(1).unwrap();

    let viewing = Screen::Viewing {
        deal: deal.clone(),
        quantity: 1,
    };
    assert_eq!(viewing.view_id(), ViewID::Reservation);
    assert_eq!(viewing.deal(), Some(&deal));
    assert!(!viewing.is_confirmed());

    let confirmed = Screen::Confirmed(Reservation::new(deal.clone(), 2));
    assert_eq!(confirmed.view_id(), ViewID::Confirmation);
    assert_eq!(confirmed.deal(), Some(&deal));
    assert!(confirmed.is_confirmed());

    assert_eq!(Screen::Listing.deal(), None);
}

#[test]
fn reservation_total_is_discounted_price_times_quantity() {
    let deal = StaticCatalog::seeded().by_id(1).unwrap();
    let reservation = Reservation::new(deal, 3);

    assert_eq!(reservation.total, Price::from_cents(1080));
    assert_eq!(reservation.total.to_string(), "$10.80");
}

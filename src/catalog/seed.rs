use super::{
    deal::{Category, Deal},
    price::Price,
};

pub fn deals() -> Vec<Deal> {
    vec![
        Deal {
            id: 1,
            business: "Sweet Treats Bakery".to_string(),
            category: Category::Food,
            description: "70% off all remaining pastries".to_string(),
            details: "Assorted fresh pastries - chocolate croissants, fruit tarts, and apple danishes"
                .to_string(),
            original_price: Price::from_cents(1200),
            discounted_price: Price::from_cents(360),
            time_remaining: "45 mins".to_string(),
            distance: "0.3 mi".to_string(),
        },
        Deal {
            id: 2,
            business: "Urban Yoga Studio".to_string(),
            category: Category::Fitness,
            description: "Last-minute yoga class - 50% off".to_string(),
            details: "Remaining spots in evening vinyasa flow class".to_string(),
            original_price: Price::from_cents(2000),
            discounted_price: Price::from_cents(1000),
            time_remaining: "30 mins".to_string(),
            distance: "0.5 mi".to_string(),
        },
        Deal {
            id: 3,
            business: "Curl Up Salon".to_string(),
            category: Category::Beauty,
            description: "Surprise haircut special".to_string(),
            details: "Walk-in haircut with experienced stylists".to_string(),
            original_price: Price::from_cents(4500),
            discounted_price: Price::from_cents(2500),
            time_remaining: "1 hr".to_string(),
            distance: "0.7 mi".to_string(),
        },
    ]
}

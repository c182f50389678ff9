//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use gallery_core::{Artwork, ArtworkStatus, Category, EntityId, PaymentProvider, UserRole};
use gallery_service::dto::{
    EditArtworkRequest, PaymentAccountInput, PublishArtworkRequest, SignUpRequest,
};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Artist id owning every fixture artwork
pub const FIXTURE_ARTIST: &str = "a1";

/// Five artworks over two categories and three tags, priced
/// 100, 500, 2000, 9999 and 50
pub fn fixture_artworks() -> Vec<Artwork> {
    let rows: [(&str, Category, &[&str], u64); 5] = [
        ("f1", Category::Paintings, &["abstract", "blue"], 100),
        ("f2", Category::Paintings, &["blue"], 500),
        ("f3", Category::Sculptures, &["blue", "bronze"], 2000),
        ("f4", Category::Paintings, &["abstract"], 9999),
        ("f5", Category::Sculptures, &["abstract", "blue"], 50),
    ];
    rows.into_iter()
        .map(|(id, category, tags, price)| Artwork {
            id: EntityId::from(id),
            artist_id: EntityId::from(FIXTURE_ARTIST),
            artist_name: "Elena Vance".to_string(),
            title: format!("Fixture {id}"),
            description: "Fixture work".to_string(),
            category,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            price,
            image_url: format!("https://img.test/{id}.jpg"),
            status: ArtworkStatus::Available,
            created_at: Utc::now(),
        })
        .collect()
}

/// Signup request with a unique email; artists get a PayPal account
pub fn sign_up_request(role: UserRole) -> SignUpRequest {
    let suffix = unique_suffix();
    let payment_account = (role == UserRole::Artist).then(|| PaymentAccountInput {
        provider: PaymentProvider::PayPal,
        identifier: format!("payout{suffix}@paypal.test"),
    });
    SignUpRequest {
        name: format!("Tester {suffix}"),
        email: format!("tester{suffix}@example.com"),
        role,
        payment_account,
    }
}

/// Publish request with an explicit image
pub fn publish_request(title: &str, tags: &str, price: i64) -> PublishArtworkRequest {
    PublishArtworkRequest {
        title: title.to_string(),
        description: "Oil on canvas".to_string(),
        category: Category::Paintings,
        tags: tags.to_string(),
        price,
        image_url: Some("https://img.test/new.jpg".to_string()),
    }
}

/// Edit request replacing every mutable field but the image
pub fn edit_request(title: &str, price: i64) -> EditArtworkRequest {
    EditArtworkRequest {
        title: title.to_string(),
        description: "Reworked".to_string(),
        category: Category::MixedMedia,
        tags: "revised".to_string(),
        price,
        image_url: None,
    }
}

//! Marketplace Integration Tests
//!
//! End-to-end scenarios over the service layer and a real store.
//!
//! Run with: cargo test -p integration-tests --test marketplace_tests

use std::sync::Arc;

use gallery_core::{
    ArtworkQuery, ArtworkStatus, Category, DomainError, EntityId, OrderStatus, PaymentProvider,
    UserRole,
};
use gallery_service::dto::{LogInRequest, PaymentAccountInput, UpdateProfileRequest};
use gallery_service::{
    AdminService, ArtworkService, AuthService, CatalogService, CheckoutService, GenerationService,
    UserService,
};
use gallery_store::{FileBackend, MemoryBackend, Store};
use integration_tests::{
    context_on, context_with_artworks, edit_request, fixture_artworks, publish_request,
    sign_up_request, signed_in, test_context, ScriptedGenerator,
};

// ============================================================================
// Publishing
// ============================================================================

#[tokio::test]
async fn test_publish_prepends_exactly_one() {
    let ctx = test_context().unwrap();
    signed_in(&ctx, UserRole::Artist).await.unwrap();
    let before = ctx.store().read_all().artworks;

    let artwork = ArtworkService::new(&ctx)
        .publish(publish_request("Harbor Fog", "sea", 300))
        .await
        .unwrap();

    let after = ctx.store().read_all().artworks;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0], artwork);
    assert_eq!(&after[1..], &before[..]);
    assert_eq!(artwork.status, ArtworkStatus::Available);
}

#[tokio::test]
async fn test_publish_rejections_leave_collection_unchanged() {
    let ctx = context_on(Arc::new(MemoryBackend::new()), ScriptedGenerator::broken()).unwrap();
    let artworks = ArtworkService::new(&ctx);
    let before = ctx.store().read_all().artworks;

    // Not an artist
    signed_in(&ctx, UserRole::Buyer).await.unwrap();
    let err = artworks
        .publish(publish_request("Buyer Work", "", 100))
        .await
        .unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::NotAnArtist)));

    // Artist without a payment account (seeded artist)
    AuthService::new(&ctx)
        .log_in(LogInRequest {
            email: "julian@art.com".to_string(),
        })
        .await
        .unwrap();
    let err = artworks
        .publish(publish_request("No Payout", "", 100))
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_domain(),
        Some(DomainError::PaymentAccountRequired)
    ));

    // Non-positive price
    signed_in(&ctx, UserRole::Artist).await.unwrap();
    for price in [0, -5] {
        let err = artworks
            .publish(publish_request("Free", "", price))
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::NonPositivePrice(_))
        ));
    }

    // No image supplied and the generator is down
    let mut request = publish_request("Blank", "", 100);
    request.image_url = None;
    let err = artworks.publish(request).await.unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::ImageRequired)));

    assert_eq!(ctx.store().read_all().artworks, before);
}

#[tokio::test]
async fn test_publish_generates_missing_image() {
    let ctx = test_context().unwrap();
    signed_in(&ctx, UserRole::Artist).await.unwrap();

    let mut request = publish_request("Generated", "", 100);
    request.image_url = Some("   ".to_string());
    let artwork = ArtworkService::new(&ctx).publish(request).await.unwrap();

    assert!(artwork.image_url.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_tag_normalization_lowercases_and_deduplicates() {
    let ctx = test_context().unwrap();
    signed_in(&ctx, UserRole::Artist).await.unwrap();

    let artwork = ArtworkService::new(&ctx)
        .publish(publish_request("Tagged", " Abstract, , blue ,Blue", 100))
        .await
        .unwrap();

    // Duplicates differing only in case collapse to the first occurrence
    assert_eq!(artwork.tags, vec!["abstract", "blue"]);
}

// ============================================================================
// Editing
// ============================================================================

#[tokio::test]
async fn test_edit_unknown_id_is_not_found() {
    let ctx = test_context().unwrap();
    signed_in(&ctx, UserRole::Artist).await.unwrap();
    let before = ctx.store().read_all().artworks;

    let err = ArtworkService::new(&ctx)
        .edit(&EntityId::from("w-missing"), edit_request("Ghost", 10))
        .await
        .unwrap_err();

    assert!(matches!(err.as_domain(), Some(DomainError::ArtworkNotFound(_))));
    assert_eq!(ctx.store().read_all().artworks, before);
}

#[tokio::test]
async fn test_edit_replaces_fields_and_keeps_identity() {
    let ctx = test_context().unwrap();
    signed_in(&ctx, UserRole::Artist).await.unwrap();
    let service = ArtworkService::new(&ctx);
    let original = service
        .publish(publish_request("Draft", "sketch", 100))
        .await
        .unwrap();

    let edited = service
        .edit(&original.id, edit_request("Final", 450))
        .await
        .unwrap();

    assert_eq!(edited.id, original.id);
    assert_eq!(edited.created_at, original.created_at);
    assert_eq!(edited.image_url, original.image_url);
    assert_eq!(edited.title, "Final");
    assert_eq!(edited.category, Category::MixedMedia);
    assert_eq!(edited.tags, vec!["revised"]);
    assert_eq!(edited.price, 450);
}

// ============================================================================
// Accounts
// ============================================================================

#[tokio::test]
async fn test_duplicate_signup_keeps_one_record() {
    let ctx = test_context().unwrap();
    let auth = AuthService::new(&ctx);
    let request = sign_up_request(UserRole::Buyer);

    auth.sign_up(request.clone()).await.unwrap();
    let before = ctx.store().read_all();

    let mut again = request.clone();
    again.email = format!("  {}  ", request.email.to_uppercase());
    let err = auth.sign_up(again).await.unwrap_err();

    assert!(matches!(
        err.as_domain(),
        Some(DomainError::EmailAlreadyExists(_))
    ));
    let after = ctx.store().read_all();
    assert_eq!(after, before);
    assert_eq!(
        after.users.iter().filter(|u| u.email == request.email).count(),
        1
    );
}

#[tokio::test]
async fn test_admin_signup_is_refused() {
    let ctx = test_context().unwrap();
    let before = ctx.store().read_all();

    let err = AuthService::new(&ctx)
        .sign_up(sign_up_request(UserRole::Admin))
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_domain(),
        Some(DomainError::InvalidValue { field: "role", .. })
    ));
    assert_eq!(ctx.store().read_all(), before);
}

#[tokio::test]
async fn test_profile_edit_does_not_rewrite_snapshots() {
    let ctx = test_context().unwrap();
    let artist = signed_in(&ctx, UserRole::Artist).await.unwrap();
    let artwork = ArtworkService::new(&ctx)
        .publish(publish_request("Snapshot", "", 100))
        .await
        .unwrap();

    let updated = UserService::new(&ctx)
        .update_profile(UpdateProfileRequest {
            name: "Renamed Artist".to_string(),
            bio: Some("Works in oil.".to_string()),
            payment_account: Some(PaymentAccountInput {
                provider: PaymentProvider::Revolut,
                identifier: "@renamed".to_string(),
            }),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, artist.id);
    let current = AuthService::new(&ctx).current_user().await.unwrap().unwrap();
    assert_eq!(current.name, "Renamed Artist");

    let stored = CatalogService::new(&ctx).artwork(&artwork.id).unwrap();
    assert_eq!(stored.artist_name, artist.name);
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
async fn test_double_purchase_creates_one_order() {
    let ctx = test_context().unwrap();
    signed_in(&ctx, UserRole::Buyer).await.unwrap();
    let checkout = CheckoutService::new(&ctx);
    let id = EntityId::from("w1");

    checkout.purchase(&id, PaymentProvider::PayPal).await.unwrap();
    let after_first = ctx.store().read_all();

    let err = checkout
        .purchase(&id, PaymentProvider::PayPal)
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_domain(),
        Some(DomainError::ArtworkNotAvailable {
            status: ArtworkStatus::Sold,
            ..
        })
    ));
    assert_eq!(ctx.store().read_all(), after_first);
    assert_eq!(after_first.orders.len(), 1);
}

#[tokio::test]
async fn test_concurrent_purchases_sell_once() {
    let ctx = test_context().unwrap();
    signed_in(&ctx, UserRole::Buyer).await.unwrap();
    let id = EntityId::from("w2");

    let first = CheckoutService::new(&ctx);
    let second = CheckoutService::new(&ctx);
    let (a, b) = tokio::join!(
        first.purchase(&id, PaymentProvider::PayPal),
        second.purchase(&id, PaymentProvider::Revolut)
    );

    assert_eq!(usize::from(a.is_ok()) + usize::from(b.is_ok()), 1);
    assert_eq!(ctx.store().read_all().orders.len(), 1);
}

#[tokio::test]
async fn test_cancel_after_sale_reopens_artwork() {
    let ctx = test_context().unwrap();
    signed_in(&ctx, UserRole::Buyer).await.unwrap();
    let order = CheckoutService::new(&ctx)
        .purchase(&EntityId::from("w1"), PaymentProvider::PayPal)
        .await
        .unwrap();

    signed_in(&ctx, UserRole::Admin).await.unwrap();
    let canceled = AdminService::new(&ctx)
        .force_cancel_order(&order.id)
        .await
        .unwrap();

    assert_eq!(canceled.status, OrderStatus::Canceled);
    let snapshot = ctx.store().read_all();
    assert_eq!(
        snapshot.find_artwork(&order.artwork_id).unwrap().status,
        ArtworkStatus::Available
    );
}

// ============================================================================
// Administration
// ============================================================================

#[tokio::test]
async fn test_suspending_session_user_clears_session() {
    let ctx = test_context().unwrap();
    let admin = signed_in(&ctx, UserRole::Admin).await.unwrap();

    assert!(AdminService::new(&ctx).suspend_user(&admin.id).await.unwrap());

    let snapshot = ctx.store().read_all();
    assert!(snapshot.session.is_none());
    assert!(snapshot.find_user(&admin.id).is_none());
    let err = AdminService::new(&ctx).overview().await.unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::NotAuthenticated)));
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_filter_composition_on_fixture() {
    let fixture = fixture_artworks();
    let ctx = context_with_artworks(&fixture).unwrap();
    let catalog = CatalogService::new(&ctx);

    let query = ArtworkQuery::new()
        .with_category(Category::Paintings)
        .with_max_price(600)
        .with_tag("blue");
    let page = catalog.browse(&query);

    let expected: Vec<_> = fixture
        .iter()
        .filter(|a| {
            a.category == Category::Paintings
                && a.price <= 600
                && a.tags.iter().any(|t| t == "blue")
        })
        .cloned()
        .collect();
    let ids: Vec<&str> = page.artworks.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["f1", "f2"]);
    assert_eq!(page.artworks, expected);
    assert_eq!(page.tags, vec!["abstract", "blue", "bronze"]);

    let cheap_sculptures = catalog.browse(
        &ArtworkQuery::new()
            .with_category(Category::Sculptures)
            .with_max_price(100),
    );
    assert_eq!(cheap_sculptures.artworks.len(), 1);
    assert_eq!(cheap_sculptures.artworks[0].id.as_str(), "f5");
}

#[tokio::test]
async fn test_generation_failure_uses_fallback() {
    let ctx = context_on(Arc::new(MemoryBackend::new()), ScriptedGenerator::broken()).unwrap();

    let text = GenerationService::new(&ctx)
        .describe("Untitled", Category::Paintings)
        .await
        .unwrap();

    assert_eq!(text, "A beautiful original artwork for your collection.");
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn test_file_store_round_trip_all_collections() {
    let dir = tempfile::tempdir().unwrap();
    let backend = Arc::new(FileBackend::open(dir.path()).unwrap());
    let ctx = context_on(backend, ScriptedGenerator::working()).unwrap();

    signed_in(&ctx, UserRole::Artist).await.unwrap();
    ArtworkService::new(&ctx)
        .publish(publish_request("Persisted", "durable", 700))
        .await
        .unwrap();
    signed_in(&ctx, UserRole::Buyer).await.unwrap();
    CheckoutService::new(&ctx)
        .purchase(&EntityId::from("w2"), PaymentProvider::Revolut)
        .await
        .unwrap();
    let written = ctx.store().try_read_all().unwrap();

    // A fresh store over the same directory sees the same state
    let reopened = Store::new(Arc::new(FileBackend::open(dir.path()).unwrap()));
    reopened.initialize().unwrap();
    let read = reopened.try_read_all().unwrap();

    assert_eq!(read, written);
    assert_eq!(read.users.len(), 4);
    assert_eq!(read.artworks.len(), 3);
    assert_eq!(read.orders.len(), 1);
    assert!(read.session.is_some());
}

#[tokio::test]
async fn test_corrupt_collection_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context_on(
        Arc::new(FileBackend::open(dir.path()).unwrap()),
        ScriptedGenerator::working(),
    )
    .unwrap();

    std::fs::write(dir.path().join("as_artworks.json"), "{not json").unwrap();

    let catalog = CatalogService::new(&ctx);
    assert!(catalog.browse(&ArtworkQuery::new()).artworks.is_empty());
    assert_eq!(ctx.store().read_all().users.len(), 2);

    // Writes refuse to build on top of unreadable data
    signed_in(&ctx, UserRole::Artist).await.unwrap_err();
}

#[tokio::test]
async fn test_write_to_full_backend_keeps_previous_state() {
    // Room for the seed plus timestamp jitter, not for more artworks
    let sizing = Arc::new(MemoryBackend::new());
    Store::new(sizing.clone()).initialize().unwrap();
    let quota = sizing.used_bytes() + 64;
    let backend = Arc::new(MemoryBackend::with_quota(quota));
    let store = Store::new(backend.clone());
    store.initialize().unwrap();
    let before = store.read_all().artworks;

    let mut grown = before.clone();
    grown.extend(fixture_artworks());
    let err = store.write_artworks(&grown).unwrap_err();

    assert!(matches!(err, DomainError::StorageQuotaExceeded { .. }));
    assert_eq!(store.read_all().artworks, before);
    assert!(backend.used_bytes() <= quota);
}

#[tokio::test]
async fn test_publish_over_quota_leaves_collection_unchanged() {
    // Measure a seeded store with one artist, then allow 600 more bytes
    let sizing = Arc::new(MemoryBackend::new());
    let sizing_ctx = context_on(sizing.clone(), ScriptedGenerator::working()).unwrap();
    signed_in(&sizing_ctx, UserRole::Artist).await.unwrap();
    let quota = sizing.used_bytes() + 600;

    let ctx = context_on(
        Arc::new(MemoryBackend::with_quota(quota)),
        ScriptedGenerator::working(),
    )
    .unwrap();
    signed_in(&ctx, UserRole::Artist).await.unwrap();
    let before = ctx.store().read_all().artworks;

    let mut request = publish_request("Long Story", "epic", 500);
    request.description = "x".repeat(4000);
    let err = ArtworkService::new(&ctx).publish(request).await.unwrap_err();

    assert!(matches!(
        err.as_domain(),
        Some(DomainError::StorageQuotaExceeded { .. })
    ));
    assert_eq!(ctx.store().read_all().artworks, before);
}

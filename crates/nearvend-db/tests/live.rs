//! Live integration tests for nearvend-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/nearvend-db/`).

use chrono::NaiveTime;
use nearvend_core::{NewVendor, Picture, SaleCardDraft, SaleCardInput, SeedEntry, VendorProfileUpdate};
use nearvend_db::{
    delete_sale_card, get_vendor, insert_vendor, scan_geohash_range, seed_vendors,
    update_vendor_profile, upsert_sale_card, DbError, GeohashRange,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_vendor(id: &str) -> NewVendor {
    NewVendor {
        id: id.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        email: format!("{id}@example.com"),
        phone_number: "5550100".to_string(),
    }
}

fn draft(offset: f64, has_delivery: bool, closed: bool) -> SaleCardDraft {
    SaleCardInput {
        business_name: "Tamales".to_string(),
        description: "Corn and masa".to_string(),
        has_delivery,
        is_temporarily_closed: closed,
        start_time: "08:00".to_string(),
        end_time: "16:00".to_string(),
        latitude: offset,
        longitude: offset,
        radius: 500,
        picture: None,
    }
    .validate()
    .expect("valid draft")
}

fn range(prefix: &str, require_delivery: bool, exclude_closed: bool) -> GeohashRange {
    GeohashRange {
        lower: prefix.to_string(),
        upper: format!("{prefix}\u{fffd}"),
        require_delivery,
        exclude_closed,
    }
}

async fn vendor_with_card(pool: &sqlx::PgPool, id: &str, card: &SaleCardDraft) {
    insert_vendor(pool, &new_vendor(id))
        .await
        .unwrap_or_else(|e| panic!("insert_vendor failed for '{id}': {e}"));
    upsert_sale_card(pool, id, card)
        .await
        .unwrap_or_else(|e| panic!("upsert_sale_card failed for '{id}': {e}"));
}

fn ids(vendors: &[nearvend_core::Vendor]) -> Vec<&str> {
    let mut ids: Vec<&str> = vendors.iter().map(|v| v.id.as_str()).collect();
    ids.sort_unstable();
    ids
}

// ---------------------------------------------------------------------------
// Section 1: Vendors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn insert_then_get_vendor_without_card(pool: sqlx::PgPool) {
    insert_vendor(&pool, &new_vendor("ana")).await.unwrap();

    let vendor = get_vendor(&pool, "ana").await.unwrap();
    assert_eq!(vendor.first_name, "Ana");
    assert_eq!(vendor.email, "ana@example.com");
    assert!(vendor.sale_card.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_vendor_id_is_unique_violation(pool: sqlx::PgPool) {
    insert_vendor(&pool, &new_vendor("ana")).await.unwrap();
    let err = insert_vendor(&pool, &new_vendor("ana")).await.unwrap_err();
    match err {
        DbError::Sqlx(sqlx::Error::Database(db)) => {
            assert_eq!(db.code().as_deref(), Some("23505"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_missing_vendor_is_not_found(pool: sqlx::PgPool) {
    assert!(matches!(
        get_vendor(&pool, "ghost").await,
        Err(DbError::NotFound)
    ));
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_profile_overwrites_fields(pool: sqlx::PgPool) {
    insert_vendor(&pool, &new_vendor("ana")).await.unwrap();
    let update = VendorProfileUpdate {
        first_name: "Anita".to_string(),
        last_name: "Lopez".to_string(),
        phone_number: "5559999".to_string(),
        profile_picture: Some(Picture {
            blob_key: "blob-9".to_string(),
            alt_text: "portrait".to_string(),
        }),
    };
    update_vendor_profile(&pool, "ana", &update).await.unwrap();

    let vendor = get_vendor(&pool, "ana").await.unwrap();
    assert_eq!(vendor.first_name, "Anita");
    assert_eq!(vendor.phone_number, "5559999");
    assert_eq!(vendor.profile_picture.unwrap().blob_key, "blob-9");

    assert!(matches!(
        update_vendor_profile(&pool, "ghost", &update).await,
        Err(DbError::NotFound)
    ));
}

// ---------------------------------------------------------------------------
// Section 2: Sale cards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_sale_card_stores_hash_and_replaces(pool: sqlx::PgPool) {
    vendor_with_card(&pool, "ana", &draft(0.003_179, false, false)).await;

    let card = get_vendor(&pool, "ana").await.unwrap().sale_card.unwrap();
    assert_eq!(card.location.geo_hash, "s00000d6d");
    assert_eq!(card.start_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());

    let first_id = card.id;
    let second_id = upsert_sale_card(&pool, "ana", &draft(0.004_769, true, false))
        .await
        .unwrap();
    assert_eq!(first_id, second_id, "card is replaced in place");

    let card = get_vendor(&pool, "ana").await.unwrap().sale_card.unwrap();
    assert_eq!(card.location.geo_hash, "s00000g7z");
    assert!(card.has_delivery);
}

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_sale_card_for_missing_vendor_is_not_found(pool: sqlx::PgPool) {
    assert!(matches!(
        upsert_sale_card(&pool, "ghost", &draft(0.0, false, false)).await,
        Err(DbError::NotFound)
    ));
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_sale_card_removes_card_once(pool: sqlx::PgPool) {
    vendor_with_card(&pool, "ana", &draft(0.003_179, false, false)).await;

    delete_sale_card(&pool, "ana").await.unwrap();
    assert!(get_vendor(&pool, "ana").await.unwrap().sale_card.is_none());

    let locations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sale_card_locations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(locations, 0);

    assert!(matches!(
        delete_sale_card(&pool, "ana").await,
        Err(DbError::NotFound)
    ));
}

// ---------------------------------------------------------------------------
// Section 3: Geohash range scans
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn range_scan_matches_prefix_only(pool: sqlx::PgPool) {
    vendor_with_card(&pool, "near", &draft(0.003_179, false, false)).await;
    vendor_with_card(&pool, "far", &draft(0.095_299, false, false)).await;

    let found = scan_geohash_range(&pool, &range("s00000", false, false))
        .await
        .unwrap();
    assert_eq!(ids(&found), ["near"]);

    let found = scan_geohash_range(&pool, &range("s000", false, false))
        .await
        .unwrap();
    assert_eq!(ids(&found), ["far", "near"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn range_scan_pushes_down_boolean_filters(pool: sqlx::PgPool) {
    vendor_with_card(&pool, "plain", &draft(0.003_179, false, false)).await;
    vendor_with_card(&pool, "delivers", &draft(0.003_179, true, false)).await;
    vendor_with_card(&pool, "closed", &draft(0.003_179, false, true)).await;
    vendor_with_card(&pool, "delivers-closed", &draft(0.003_179, true, true)).await;

    let all = scan_geohash_range(&pool, &range("s00000", false, false)).await.unwrap();
    assert_eq!(all.len(), 4);

    let delivering = scan_geohash_range(&pool, &range("s00000", true, false)).await.unwrap();
    assert_eq!(ids(&delivering), ["delivers", "delivers-closed"]);

    let open = scan_geohash_range(&pool, &range("s00000", false, true)).await.unwrap();
    assert_eq!(ids(&open), ["delivers", "plain"]);

    let both = scan_geohash_range(&pool, &range("s00000", true, true)).await.unwrap();
    assert_eq!(ids(&both), ["delivers"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn range_scan_skips_vendors_without_cards(pool: sqlx::PgPool) {
    insert_vendor(&pool, &new_vendor("cardless")).await.unwrap();
    let found = scan_geohash_range(&pool, &range("s", false, false)).await.unwrap();
    assert!(found.is_empty());
}

// ---------------------------------------------------------------------------
// Section 4: Seeding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn seed_vendors_is_idempotent(pool: sqlx::PgPool) {
    let entries = vec![
        SeedEntry {
            vendor: new_vendor("ana"),
            sale_card: Some(draft(0.003_179, true, false)),
        },
        SeedEntry {
            vendor: new_vendor("luis"),
            sale_card: None,
        },
    ];

    assert_eq!(seed_vendors(&pool, &entries).await.unwrap(), 2);
    assert_eq!(seed_vendors(&pool, &entries).await.unwrap(), 2);

    let vendors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vendors")
        .fetch_one(&pool)
        .await
        .unwrap();
    let cards: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sale_cards")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(vendors, 2);
    assert_eq!(cards, 1);
}

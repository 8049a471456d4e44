use super::fixture::{valid_draft, BrandBuilder};
use super::*;
use chrono::TimeZone;
use serde_json::json;

fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{}@example.com", id),
    }
}

fn record() -> serde_json::Value {
    json!({
        "id": "1700000000000",
        "user_id": "u1",
        "name": "Patagonia",
        "country": "US",
        "category": "Clothing",
        "price_range": "$$$",
        "material": "Recycled Polyester",
        "sustainability_score": 92,
        "rating": 4.7,
        "ethical_practices": "Fair Trade"
    })
}

// ========================================
// from_record
// ========================================

#[test]
fn test_from_record_decodes_valid_record() {
    let brand = Brand::from_record(record()).unwrap();
    assert_eq!(brand.id, "1700000000000");
    assert_eq!(brand.user_id.as_deref(), Some("u1"));
    assert_eq!(brand.sustainability_score, 92);
    assert!(brand.description.is_none());
}

#[test]
fn test_from_record_accepts_numeric_id() {
    let mut value = record();
    value["id"] = json!(7);
    let brand = Brand::from_record(value).unwrap();
    assert_eq!(brand.id, "7");
}

#[test]
fn test_from_record_rejects_score_above_100() {
    let mut value = record();
    value["sustainability_score"] = json!(150);
    assert!(matches!(
        Brand::from_record(value),
        Err(CatalogError::Validation(_))
    ));
}

#[test]
fn test_from_record_rejects_negative_score() {
    let mut value = record();
    value["sustainability_score"] = json!(-5);
    assert!(matches!(
        Brand::from_record(value),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn test_from_record_rejects_rating_out_of_range() {
    let mut value = record();
    value["rating"] = json!(5.5);
    assert!(Brand::from_record(value).is_err());
}

#[test]
fn test_from_record_rejects_missing_field() {
    let mut value = record();
    value.as_object_mut().unwrap().remove("name");
    assert!(matches!(
        Brand::from_record(value),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn test_from_record_keeps_unknown_category() {
    let mut value = record();
    value["category"] = json!("Swimwear");
    let brand = Brand::from_record(value).unwrap();
    assert_eq!(brand.category, "Swimwear");
}

#[test]
fn test_serialize_omits_absent_optionals() {
    let brand = BrandBuilder::new("1", "Alpha").build();
    let value = serde_json::to_value(&brand).unwrap();
    assert!(value.get("user_id").is_none());
    assert!(value.get("description").is_none());
    assert_eq!(value["sustainability_score"], json!(50));
}

// ========================================
// ownership
// ========================================

#[test]
fn test_guest_brand_is_editable_by_anyone() {
    let brand = BrandBuilder::new("1", "Alpha").owner(GUEST_OWNER).build();
    assert!(brand.can_edit(None));
    assert!(brand.can_edit(Some(&user("u1"))));
}

#[test]
fn test_unowned_brand_is_editable_by_anyone() {
    let brand = BrandBuilder::new("1", "Alpha").build();
    assert_eq!(brand.owner(), GUEST_OWNER);
    assert!(brand.can_edit(None));
}

#[test]
fn test_owned_brand_is_editable_only_by_owner() {
    let brand = BrandBuilder::new("1", "Alpha").owner("u1").build();
    assert!(brand.can_edit(Some(&user("u1"))));
    assert!(!brand.can_edit(Some(&user("u2"))));
    assert!(!brand.can_edit(None));
}

#[test]
fn test_ensure_editable_returns_not_owner() {
    let brand = BrandBuilder::new("9", "Alpha").owner("u1").build();
    let err = brand.ensure_editable(Some(&user("u2"))).unwrap_err();
    assert!(matches!(err, CatalogError::NotOwner { id } if id == "9"));
}

// ========================================
// score tier
// ========================================

#[test]
fn test_score_tier_boundaries() {
    assert_eq!(ScoreTier::from_score(100), ScoreTier::High);
    assert_eq!(ScoreTier::from_score(80), ScoreTier::High);
    assert_eq!(ScoreTier::from_score(79), ScoreTier::Medium);
    assert_eq!(ScoreTier::from_score(60), ScoreTier::Medium);
    assert_eq!(ScoreTier::from_score(59), ScoreTier::Low);
    assert_eq!(ScoreTier::from_score(0), ScoreTier::Low);
}

// ========================================
// BrandDraft
// ========================================

#[test]
fn test_draft_default_values() {
    let draft = BrandDraft::default();
    assert_eq!(draft.sustainability_score, 50);
    assert_eq!(draft.rating, 0.0);
}

#[test]
fn test_valid_draft_passes() {
    assert!(valid_draft().validate().is_ok());
}

#[test]
fn test_draft_requires_name() {
    let draft = BrandDraft {
        name: "  ".to_string(),
        ..valid_draft()
    };
    let err = draft.validate().unwrap_err();
    assert_eq!(err.to_string(), "Invalid brand: name is required");
}

#[test]
fn test_draft_rejects_unknown_category() {
    let draft = BrandDraft {
        category: "clothing".to_string(),
        ..valid_draft()
    };
    assert!(draft.validate().is_err());
}

#[test]
fn test_draft_rejects_unknown_price_range() {
    let draft = BrandDraft {
        price_range: "$$$$$".to_string(),
        ..valid_draft()
    };
    assert!(draft.validate().is_err());
}

#[test]
fn test_draft_rejects_score_over_100() {
    let draft = BrandDraft {
        sustainability_score: 101,
        ..valid_draft()
    };
    assert!(draft.validate().is_err());
}

#[test]
fn test_draft_rejects_nan_rating() {
    let draft = BrandDraft {
        rating: f64::NAN,
        ..valid_draft()
    };
    assert!(draft.validate().is_err());
}

#[test]
fn test_into_new_brand_assigns_timestamp_id_and_owner() {
    let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
    let brand = valid_draft()
        .into_new_brand(Some(&user("u1")), now)
        .unwrap();
    assert_eq!(brand.id, "1700000000123");
    assert_eq!(brand.user_id.as_deref(), Some("u1"));
}

#[test]
fn test_into_new_brand_without_user_is_guest() {
    let brand = valid_draft().into_new_brand(None, Utc::now()).unwrap();
    assert_eq!(brand.user_id.as_deref(), Some(GUEST_OWNER));
}

#[test]
fn test_into_new_brand_drops_blank_description() {
    let draft = BrandDraft {
        description: Some("   ".to_string()),
        ..valid_draft()
    };
    let brand = draft.into_new_brand(None, Utc::now()).unwrap();
    assert!(brand.description.is_none());
}

#[test]
fn test_replaced_with_keeps_id_and_owner() {
    let original = BrandBuilder::new("42", "Old").owner("u1").build();
    let draft = BrandDraft {
        name: "New".to_string(),
        ..valid_draft()
    };
    let replaced = original.replaced_with(draft).unwrap();
    assert_eq!(replaced.id, "42");
    assert_eq!(replaced.user_id.as_deref(), Some("u1"));
    assert_eq!(replaced.name, "New");
}

#[test]
fn test_replaced_with_keeps_unmodelled_fields() {
    let mut record = serde_json::to_value(BrandBuilder::new("42", "Old").build()).unwrap();
    record["created_at"] = json!("2024-01-01T00:00:00Z");
    let original = Brand::from_record(record).unwrap();
    assert_eq!(original.extra.get("created_at"), Some(&json!("2024-01-01T00:00:00Z")));

    let draft = BrandDraft {
        name: "New".to_string(),
        ..BrandDraft::from(&original)
    };
    let updated = original.replaced_with(draft).unwrap();

    let value = serde_json::to_value(&updated).unwrap();
    assert_eq!(value["name"], json!("New"));
    assert_eq!(value["created_at"], json!("2024-01-01T00:00:00Z"));
}

#[test]
fn test_new_brand_has_no_extra_fields() {
    let brand = valid_draft().into_new_brand(None, Utc::now()).unwrap();
    assert!(brand.extra.is_empty());
}

#[test]
fn test_draft_from_brand_roundtrips_fields() {
    let brand = BrandBuilder::new("1", "Alpha").score(77).rating(3.5).build();
    let draft = BrandDraft::from(&brand);
    assert_eq!(draft.name, "Alpha");
    assert_eq!(draft.sustainability_score, 77);
    assert_eq!(draft.rating, 3.5);
}

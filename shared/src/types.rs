use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Types
// ============================================================================

/// A single shoe listing as shown in the catalog grid.
///
/// Prices are integer minor units (cents). A present `sale_price` means the
/// listing is discounted. `release_date` is `None` when the source data had
/// no usable date; display code treats that the same as an old release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: i64,
    pub sale_price: Option<i64>,
    pub release_date: Option<NaiveDate>,
    pub num_of_colors: u32,
}

impl ShoeListing {
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Path of the listing's detail page.
    pub fn detail_path(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> ShoeListing {
        ShoeListing {
            slug: "court-classic".to_string(),
            name: "Court Classic".to_string(),
            image_src: "/assets/shoes/court-classic.jpg".to_string(),
            price: 10000,
            sale_price: None,
            release_date: NaiveDate::from_ymd_opt(2026, 7, 20),
            num_of_colors: 3,
        }
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(listing().detail_path(), "/shoe/court-classic");
    }

    #[test]
    fn test_is_on_sale() {
        let mut l = listing();
        assert!(!l.is_on_sale());
        l.sale_price = Some(5000);
        assert!(l.is_on_sale());
    }

    #[test]
    fn test_deserialize_full_listing() {
        let json = r#"{
            "slug": "court-classic",
            "name": "Court Classic",
            "image_src": "/assets/shoes/court-classic.jpg",
            "price": 10000,
            "sale_price": 5000,
            "release_date": "2026-07-20",
            "num_of_colors": 3
        }"#;

        let l: ShoeListing = serde_json::from_str(json).unwrap();
        assert_eq!(l.slug, "court-classic");
        assert_eq!(l.price, 10000);
        assert_eq!(l.sale_price, Some(5000));
        assert_eq!(l.release_date, NaiveDate::from_ymd_opt(2026, 7, 20));
        assert_eq!(l.num_of_colors, 3);
    }

    #[test]
    fn test_deserialize_missing_optionals() {
        // Absent sale_price and release_date deserialize to None
        let json = r#"{
            "slug": "trail-runner",
            "name": "Trail Runner",
            "image_src": "/assets/shoes/trail-runner.jpg",
            "price": 14500,
            "num_of_colors": 1
        }"#;

        let l: ShoeListing = serde_json::from_str(json).unwrap();
        assert_eq!(l.sale_price, None);
        assert_eq!(l.release_date, None);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let original = listing();
        let json = serde_json::to_string(&original).unwrap();
        let back: ShoeListing = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}

use shared::ShoeListing;

/// Embedded demo catalog, standing in for the storefront's data layer.
pub fn demo_catalog() -> Vec<ShoeListing> {
    serde_json::from_str(include_str!("shoes.json")).unwrap_or_default()
}

/// Look up a listing by slug.
pub fn find_listing(slug: &str) -> Option<ShoeListing> {
    demo_catalog().into_iter().find(|l| l.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_not_empty() {
        assert!(!demo_catalog().is_empty());
    }

    #[test]
    fn test_catalog_covers_sale_and_plain_listings() {
        let catalog = demo_catalog();
        assert!(catalog.iter().any(|l| l.is_on_sale()));
        assert!(catalog.iter().any(|l| !l.is_on_sale()));
        assert!(catalog.iter().any(|l| l.release_date.is_none()));
    }

    #[test]
    fn test_find_listing_by_slug() {
        let found = find_listing("court-classic-low").unwrap();
        assert_eq!(found.name, "Court Classic Low");
        assert_eq!(found.sale_price, Some(5000));
    }

    #[test]
    fn test_find_listing_unknown_slug() {
        assert!(find_listing("does-not-exist").is_none());
    }
}

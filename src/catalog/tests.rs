//! Catalog Module Tests
//!
//! Validates cell classification, document assembly and CSV loading.
//!
//! ## Test Scopes
//! - **FieldValue**: Type inference for raw cells and their textual rendering.
//! - **Product**: Field order and normalization of the corpus document.
//! - **Loader**: Column lookup, row order and the failure modes that abort startup.

#[cfg(test)]
mod tests {
    use crate::catalog::loader::{load_catalog, load_catalog_from_reader};
    use crate::catalog::types::{Catalog, FieldValue, Product};
    use crate::error::RecommendError;
    use crate::search::normalizer::normalize;
    use serde_json::json;

    const HEADER: &str = "product-brand,product-discountedPrice,product-sizeInventoryPresent,product-category,product-ratingsContainer,product-base href";

    fn csv_with(rows: &[&str]) -> String {
        let mut text = HEADER.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    // ============================================================
    // FIELD VALUE TESTS - classify
    // ============================================================

    #[test]
    fn test_classify_empty_is_missing() {
        assert_eq!(FieldValue::classify(""), FieldValue::Missing);
        assert_eq!(FieldValue::classify("   "), FieldValue::Missing);
    }

    #[test]
    fn test_classify_booleans() {
        assert_eq!(FieldValue::classify("True"), FieldValue::Boolean(true));
        assert_eq!(FieldValue::classify("false"), FieldValue::Boolean(false));
        assert_eq!(FieldValue::classify("TRUE"), FieldValue::Boolean(true));
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(FieldValue::classify("499"), FieldValue::Number(499.0));
        assert_eq!(FieldValue::classify("1299.5"), FieldValue::Number(1299.5));
        assert_eq!(FieldValue::classify(" 42 "), FieldValue::Number(42.0));
    }

    #[test]
    fn test_classify_nan_and_inf_are_text() {
        // Rust parses these as floats, but they are not finite prices
        assert_eq!(
            FieldValue::classify("nan"),
            FieldValue::Text("nan".to_string())
        );
        assert_eq!(
            FieldValue::classify("inf"),
            FieldValue::Text("inf".to_string())
        );
    }

    #[test]
    fn test_classify_structured() {
        match FieldValue::classify(r#"{"rating": 4.2, "count": 120}"#) {
            FieldValue::Structured { raw, value } => {
                assert_eq!(raw, r#"{"rating": 4.2, "count": 120}"#);
                assert_eq!(value, json!({"rating": 4.2, "count": 120}));
            }
            other => panic!("Expected Structured, got {:?}", other),
        }
        assert!(matches!(
            FieldValue::classify("[1, 2]"),
            FieldValue::Structured { value, .. } if value == json!([1, 2])
        ));
    }

    #[test]
    fn test_structured_tokens_follow_cell_text() {
        // Keys and values stay separate terms, in the order written
        let cell = FieldValue::classify(r#"{"rating": 4.3, "count": 120}"#);
        assert_eq!(normalize(&cell.to_display_string()), "rating 43 count 120");
    }

    #[test]
    fn test_classify_broken_json_is_text() {
        assert_eq!(
            FieldValue::classify("{not json"),
            FieldValue::Text("{not json".to_string())
        );
    }

    #[test]
    fn test_classify_text_is_verbatim() {
        assert_eq!(
            FieldValue::classify("4.1|2.3k"),
            FieldValue::Text("4.1|2.3k".to_string())
        );
    }

    // ============================================================
    // FIELD VALUE TESTS - to_display_string
    // ============================================================

    #[test]
    fn test_display_strings() {
        assert_eq!(FieldValue::Missing.to_display_string(), "");
        assert_eq!(FieldValue::Boolean(true).to_display_string(), "True");
        assert_eq!(FieldValue::Boolean(false).to_display_string(), "False");
        assert_eq!(FieldValue::Number(499.0).to_display_string(), "499");
        assert_eq!(FieldValue::Number(12.75).to_display_string(), "12.75");
        assert_eq!(
            FieldValue::classify(r#"{"count": 3}"#).to_display_string(),
            r#"{"count": 3}"#
        );
        assert_eq!(
            FieldValue::Text("Slim Fit".to_string()).to_display_string(),
            "Slim Fit"
        );
    }

    // ============================================================
    // PRODUCT TESTS - document
    // ============================================================

    #[test]
    fn test_document_field_order_and_normalization() {
        let product = Product {
            brand: FieldValue::Text("Levi's".to_string()),
            discounted_price: FieldValue::Number(1299.0),
            size_inventory_present: FieldValue::Boolean(true),
            category: FieldValue::Text("T-Shirts".to_string()),
            ratings: FieldValue::classify(r#"{"stars": 4}"#),
            link: "https://shop.example/levis".to_string(),
        };

        assert_eq!(product.document(), "levis 1299 true tshirts stars 4");
    }

    #[test]
    fn test_document_keeps_separators_for_missing_fields() {
        let product = Product {
            brand: FieldValue::Text("Nike".to_string()),
            discounted_price: FieldValue::Missing,
            size_inventory_present: FieldValue::Missing,
            category: FieldValue::Text("Shoes".to_string()),
            ratings: FieldValue::Missing,
            link: "https://shop.example/nike".to_string(),
        };

        // Five fields, four separators
        assert_eq!(product.document(), "nike   shoes ");
        assert_eq!(
            product.document().split_whitespace().collect::<Vec<_>>(),
            vec!["nike", "shoes"]
        );
    }

    #[test]
    fn test_link_is_not_part_of_document() {
        let product = Product {
            brand: FieldValue::Text("Puma".to_string()),
            discounted_price: FieldValue::Missing,
            size_inventory_present: FieldValue::Missing,
            category: FieldValue::Missing,
            ratings: FieldValue::Missing,
            link: "https://shop.example/unique-link-token".to_string(),
        };

        assert!(!product.document().contains("unique"));
    }

    #[test]
    fn test_catalog_alignment() {
        let catalog = load_catalog_from_reader(
            csv_with(&["A,1,True,X,,link-a", "B,2,False,Y,,link-b"]).as_bytes(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.documents().len(), catalog.products().len());
        assert_eq!(catalog.documents()[1], catalog.products()[1].document());
        assert_eq!(catalog.link(0), Some("link-a"));
        assert_eq!(catalog.link(1), Some("link-b"));
        assert_eq!(catalog.link(2), None);
    }

    #[test]
    fn test_default_catalog_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.documents().is_empty());
    }

    // ============================================================
    // LOADER TESTS
    // ============================================================

    #[test]
    fn test_load_preserves_row_order() {
        let catalog = load_catalog_from_reader(
            csv_with(&[
                "Nike,,,Shoes,,https://shop.example/0",
                "Nike,,,Shirt,,https://shop.example/1",
                "Adidas,,,Shoes,,https://shop.example/2",
            ])
            .as_bytes(),
        )
        .unwrap();

        let links: Vec<&str> = (0..catalog.len()).filter_map(|i| catalog.link(i)).collect();
        assert_eq!(
            links,
            vec![
                "https://shop.example/0",
                "https://shop.example/1",
                "https://shop.example/2"
            ]
        );
        assert_eq!(catalog.documents()[2], "adidas   shoes ");
    }

    #[test]
    fn test_load_typed_cells() {
        let catalog = load_catalog_from_reader(
            csv_with(&[r#"Roadster,799,True,Jeans,"{""rating"": 4.3}",https://shop.example/r"#])
                .as_bytes(),
        )
        .unwrap();

        let product = &catalog.products()[0];
        assert_eq!(product.discounted_price, FieldValue::Number(799.0));
        assert_eq!(product.size_inventory_present, FieldValue::Boolean(true));
        assert!(matches!(
            &product.ratings,
            FieldValue::Structured { value, .. } if *value == json!({"rating": 4.3})
        ));
        assert_eq!(catalog.documents()[0], "roadster 799 true jeans rating 43");
    }

    #[test]
    fn test_load_ignores_extra_columns_and_order() {
        let text = "product-base href,extra,product-category,product-ratingsContainer,product-sizeInventoryPresent,product-discountedPrice,product-brand\n\
                    https://shop.example/x,ignored,Shoes,,False,999,Nike";
        let catalog = load_catalog_from_reader(text.as_bytes()).unwrap();

        assert_eq!(catalog.link(0), Some("https://shop.example/x"));
        assert_eq!(catalog.documents()[0], "nike 999 false shoes ");
    }

    #[test]
    fn test_load_missing_column_fails() {
        let text = "product-brand,product-category,product-base href\nNike,Shoes,link";
        let err = load_catalog_from_reader(text.as_bytes()).unwrap_err();

        match err {
            RecommendError::Load(msg) => assert!(msg.contains("product-discountedPrice")),
            other => panic!("Expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_ragged_row_fails() {
        let err = load_catalog_from_reader(csv_with(&["Nike,,,Shoes"]).as_bytes()).unwrap_err();
        assert!(matches!(err, RecommendError::Load(_)));
    }

    #[test]
    fn test_load_empty_link_fails() {
        let err = load_catalog_from_reader(csv_with(&["Nike,,,Shoes,,"]).as_bytes()).unwrap_err();

        match err {
            RecommendError::Load(msg) => assert!(msg.contains("product-base href")),
            other => panic!("Expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_header_only_is_empty() {
        let catalog = load_catalog_from_reader(HEADER.as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let path = std::env::temp_dir().join(format!(
            "cloth_similarity_catalog_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, csv_with(&["Nike,,,Shoes,,https://shop.example/0"])).unwrap();

        let catalog = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_catalog_missing_file_fails() {
        let path = std::env::temp_dir().join("cloth_similarity_does_not_exist.csv");
        let err = load_catalog(&path).unwrap_err();

        assert!(matches!(err, RecommendError::Load(_)));
    }
}

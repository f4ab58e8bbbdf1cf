//! Prompt builders for the listing operations
//!
//! Pure functions from structured input to instruction text. Fields are
//! embedded verbatim, with no validation or escaping; absent optional fields
//! render as empty strings.

use crate::types::ProductInfo;

/// Build the prompt for a complete marketplace listing.
pub fn build_listing_prompt(product: &ProductInfo) -> String {
    format!(
        "Create a compelling marketplace listing for the following product:

Product Information:
- Name: {}
- Category: {}
- Description: {}
- Features: {}
- Target Audience: {}
- Price Range: {}

Please provide:
1. An attention-grabbing title
2. A detailed product description
3. Key features/benefits bullet points
4. Suggested keywords/tags
5. Pricing recommendations
6. Any additional optimization tips",
        product.name,
        product.category,
        product.description,
        product.features.join(", "),
        product.target_audience,
        product.price_range
    )
}

/// Build the prompt for optimizing an existing product title.
pub fn build_title_prompt(current_title: &str, category: &str) -> String {
    format!(
        "Optimize this product title for better marketplace visibility:

Current Title: {}
Product Category: {}

Please provide:
1. An optimized title that's more searchable
2. Explanation of the improvements made
3. Alternative title suggestions",
        current_title, category
    )
}

/// Build the prompt for generating listing keywords.
pub fn build_keyword_prompt(description: &str, category: &str) -> String {
    format!(
        "Generate a list of relevant keywords for this product:

Product Description: {}
Category: {}

Please provide:
1. Primary keywords (high search volume)
2. Long-tail keywords (more specific)
3. Seasonal keywords (if applicable)
4. Competitor keywords to consider

Return as a comma-separated list.",
        description, category
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> ProductInfo {
        ProductInfo {
            name: "Vintage Leather Handbag".to_string(),
            category: "Fashion Accessories".to_string(),
            description: "Beautiful vintage leather handbag.".to_string(),
            features: vec!["Genuine leather".to_string(), "Brass hardware".to_string()],
            target_audience: "Fashion-conscious buyers".to_string(),
            price_range: "$50-$100".to_string(),
        }
    }

    #[test]
    fn listing_prompt_embeds_all_fields() {
        let prompt = build_listing_prompt(&product());

        assert!(prompt.contains("Name: Vintage Leather Handbag"));
        assert!(prompt.contains("Category: Fashion Accessories"));
        assert!(prompt.contains("Features: Genuine leather, Brass hardware"));
        assert!(prompt.contains("Target Audience: Fashion-conscious buyers"));
        assert!(prompt.contains("Price Range: $50-$100"));
        // All six requested sections are enumerated
        assert!(prompt.contains("6. Any additional optimization tips"));
    }

    #[test]
    fn listing_prompt_renders_missing_optionals_as_empty() {
        let mut p = product();
        p.target_audience = String::new();
        p.price_range = String::new();

        let prompt = build_listing_prompt(&p);

        assert!(prompt.contains("- Target Audience: \n"));
        assert!(prompt.contains("- Price Range: \n\n"));
    }

    #[test]
    fn title_prompt_embeds_title_and_category() {
        let prompt = build_title_prompt("Old Leather Bag", "Fashion Accessories");

        assert!(prompt.contains("Current Title: Old Leather Bag"));
        assert!(prompt.contains("Product Category: Fashion Accessories"));
        assert!(prompt.contains("3. Alternative title suggestions"));
    }

    #[test]
    fn keyword_prompt_requests_comma_separated_list() {
        let prompt = build_keyword_prompt("vintage leather handbag", "Fashion Accessories");

        assert!(prompt.contains("Product Description: vintage leather handbag"));
        assert!(prompt.contains("1. Primary keywords"));
        assert!(prompt.contains("4. Competitor keywords"));
        assert!(prompt.ends_with("Return as a comma-separated list."));
    }

    #[test]
    fn prompts_are_deterministic() {
        let p = product();
        assert_eq!(build_listing_prompt(&p), build_listing_prompt(&p));
        assert_eq!(
            build_keyword_prompt("desc", "cat"),
            build_keyword_prompt("desc", "cat")
        );
    }
}

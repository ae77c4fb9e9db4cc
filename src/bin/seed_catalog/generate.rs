//! Random catalog records.
//!
//! Everything here is pure: given an RNG, build a record. Nothing talks to
//! the network, so the shapes can be checked with a seeded RNG.

use bigcommerce_api::rest::resources::{
    Brand, Category, CustomField, OptionValue, PricingRule, Product, ProductImage,
    ProductOption, ProductType, ProductVideo, Review, Variant,
};
use rand::seq::SliceRandom;
use rand::Rng;

pub const IMAGE_URL: &str =
    "https://images.pexels.com/photos/45201/kitty-cat-kitten-pet-45201.jpeg";

const WORDS: &[&str] = &[
    "amber", "breeze", "canyon", "delta", "ember", "fjord", "granite", "harbor", "island",
    "juniper", "kestrel", "lagoon", "meadow", "nimbus", "orchard", "prairie", "quartz",
    "ridge", "summit", "timber", "umber", "valley", "willow", "zephyr",
];

const CATEGORY_NAMES: &[&str] = &[
    "Apparel", "Accessories", "Bags", "Books", "Camping", "Electronics", "Footwear",
    "Furniture", "Garden", "Home Decor", "Kitchen", "Lighting", "Outdoor", "Pets", "Sports",
    "Stationery", "Tools", "Toys", "Travel", "Wellness",
];

const COMPANY_PREFIXES: &[&str] = &[
    "North", "Blue", "Iron", "Silver", "Red", "Bright", "Stone", "Oak", "Swift", "Golden",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Works", "Supply Co.", "Goods", "Labs", "Outfitters", "Trading", "Collective", "Makers",
];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Classic", "Compact", "Deluxe", "Ergonomic", "Handmade", "Lightweight", "Modern",
    "Portable", "Rugged", "Sleek", "Vintage", "Waterproof",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Backpack", "Blender", "Candle", "Chair", "Jacket", "Kettle", "Lamp", "Mug", "Notebook",
    "Speaker", "Tent", "Watch",
];

const COLORS: &[&str] = &[
    "Black", "White", "Red", "Navy", "Olive", "Teal", "Mustard", "Charcoal", "Coral", "Ivory",
];

const SIZES: &[&str] = &["Small", "Medium", "Large", "X-Large", "XX-Large"];

const MATERIALS: &[&str] = &["Cotton", "Polyester", "Wool", "Leather", "Silk"];

pub const OPTION_TYPES: &[&str] = &["dropdown", "radio", "checkbox", "swatch"];

pub const OPTION_NAMES: &[&str] = &["Color", "Size", "Material", "Style"];

const FIRST_NAMES: &[&str] = &["Alex", "Sam", "Jordan", "Taylor", "Casey", "Riley", "Morgan"];

const LAST_NAMES: &[&str] = &["Nguyen", "Smith", "Garcia", "Okafor", "Kowalski", "Tanaka"];

/// `(quantity_min, quantity_max, amount)`; `None` is an open upper bound.
pub const PRICING_TIERS: [(u32, Option<u32>, f64); 3] =
    [(2, Some(9), 5.0), (10, Some(19), 10.0), (20, None, 15.0)];

fn pick<R: Rng>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

fn word<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, WORDS)
}

fn words<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| word(rng).to_string()).collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn sentence<R: Rng>(rng: &mut R, count: usize) -> String {
    format!("{}.", capitalize(&words(rng, count).join(" ")))
}

fn paragraph<R: Rng>(rng: &mut R, sentences: usize) -> String {
    (0..sentences)
        .map(|_| {
            let count = rng.gen_range(4..=9);
            sentence(rng, count)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn digits<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn hex_id<R: Rng>(rng: &mut R) -> String {
    format!("{:016x}", rng.gen::<u64>())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn product_name<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, PRODUCT_ADJECTIVES),
        capitalize(word(rng)),
        pick(rng, PRODUCT_NOUNS)
    )
}

/// A category; `sort_order` is its position in the run.
pub fn category<R: Rng>(rng: &mut R, sort_order: i64, parent_id: u64) -> Category {
    Category {
        parent_id,
        name: format!("{} {}", capitalize(word(rng)), pick(rng, CATEGORY_NAMES)),
        description: Some(paragraph(rng, 2)),
        sort_order: Some(sort_order),
        page_title: Some(sentence(rng, 3)),
        meta_keywords: Some(words(rng, 3)),
        meta_description: Some(paragraph(rng, 1)),
        layout_file: Some("category.html".to_string()),
        is_visible: Some(sort_order == 0 || rng.gen_bool(0.9)),
        image_url: Some(IMAGE_URL.to_string()),
        ..Default::default()
    }
}

pub fn brand<R: Rng>(rng: &mut R) -> Brand {
    let name = format!(
        "{} {}",
        pick(rng, COMPANY_PREFIXES),
        pick(rng, COMPANY_SUFFIXES)
    );
    let mut meta_keywords = vec![name.clone()];
    meta_keywords.extend(words(rng, 2));

    Brand {
        page_title: Some(format!("{name} Products")),
        meta_keywords: Some(meta_keywords),
        meta_description: Some(paragraph(rng, 1)),
        image_url: Some(IMAGE_URL.to_string()),
        search_keywords: Some(format!("{}, {}", word(rng), word(rng))),
        name,
        ..Default::default()
    }
}

/// Up to three distinct IDs from `category_ids`, at least one.
pub fn product_categories<R: Rng>(rng: &mut R, category_ids: &[u64]) -> Vec<u64> {
    let draws = rng.gen_range(1..=3);
    let mut picked: Vec<u64> = Vec::with_capacity(draws);
    for _ in 0..draws {
        if let Some(&id) = category_ids.choose(rng) {
            if !picked.contains(&id) {
                picked.push(id);
            }
        }
    }
    picked
}

/// A physical product priced between 10 and 1000.
pub fn product<R: Rng>(
    rng: &mut R,
    sort_order: i64,
    category_ids: &[u64],
    brand_ids: &[u64],
) -> Product {
    let name = product_name(rng);
    let price = round_cents(rng.gen_range(10.0..=1000.0));

    Product {
        product_type: ProductType::Physical,
        sku: Some(hex_id(rng)),
        description: Some(paragraph(rng, 3)),
        weight: round_cents(rng.gen_range(0.1..=25.0)),
        width: Some(round_cents(rng.gen_range(1.0..=50.0))),
        depth: Some(round_cents(rng.gen_range(1.0..=50.0))),
        height: Some(round_cents(rng.gen_range(1.0..=50.0))),
        price,
        cost_price: Some(round_cents(price * 0.6)),
        retail_price: Some(round_cents(price * 1.2)),
        sale_price: Some(round_cents(price * 0.9)),
        categories: Some(product_categories(rng, category_ids)),
        brand_id: brand_ids.choose(rng).copied(),
        inventory_level: Some(rng.gen_range(0..100)),
        inventory_warning_level: Some(10),
        inventory_tracking: Some("product".to_string()),
        is_visible: Some(true),
        is_featured: Some(rng.gen_bool(0.2)),
        warranty: Some(sentence(rng, 10)),
        bin_picking_number: Some(digits(rng, 6)),
        upc: Some(digits(rng, 12)),
        mpn: Some(format!("MPN-{}", digits(rng, 8))),
        gtin: Some(digits(rng, 14)),
        search_keywords: Some(words(rng, 3).join(", ")),
        availability: Some("available".to_string()),
        availability_description: Some("Usually ships in 1-2 business days".to_string()),
        sort_order: Some(sort_order),
        condition: Some("New".to_string()),
        is_condition_shown: Some(true),
        order_quantity_minimum: Some(1),
        order_quantity_maximum: Some(10),
        page_title: Some(name.clone()),
        meta_keywords: Some(words(rng, 3)),
        meta_description: Some(paragraph(rng, 1)),
        open_graph_type: Some("product".to_string()),
        open_graph_title: Some(name.clone()),
        open_graph_description: Some(sentence(rng, 5)),
        name,
        ..Default::default()
    }
}

pub fn custom_field<R: Rng>(rng: &mut R) -> CustomField {
    CustomField {
        name: format!("{} Info", capitalize(word(rng))),
        value: sentence(rng, 5),
        ..Default::default()
    }
}

/// The first image of a product is its thumbnail.
pub fn image<R: Rng>(rng: &mut R, sort_order: i64) -> ProductImage {
    ProductImage {
        image_url: Some(IMAGE_URL.to_string()),
        is_thumbnail: Some(sort_order == 0),
        sort_order: Some(sort_order),
        description: Some(sentence(rng, 5)),
        ..Default::default()
    }
}

pub fn video<R: Rng>(rng: &mut R, sort_order: i64) -> ProductVideo {
    ProductVideo {
        title: Some(format!("{} Video", product_name(rng))),
        description: Some(sentence(rng, 10)),
        sort_order: Some(sort_order),
        video_type: Some("youtube".to_string()),
        video_id: Some(hex_id(rng)[..11].to_string()),
        ..Default::default()
    }
}

/// An option named `OPTION_NAMES[index % 4]` with a random display type.
pub fn option<R: Rng>(rng: &mut R, index: usize) -> ProductOption {
    ProductOption {
        display_name: OPTION_NAMES[index % OPTION_NAMES.len()].to_string(),
        option_type: pick(rng, OPTION_TYPES).to_string(),
        ..Default::default()
    }
}

/// Label for value `index` of the option called `option_name`.
pub fn option_label<R: Rng>(rng: &mut R, option_name: &str, index: usize) -> String {
    match option_name {
        "Color" => pick(rng, COLORS).to_string(),
        "Size" => SIZES[index % SIZES.len()].to_string(),
        "Material" => MATERIALS[index % MATERIALS.len()].to_string(),
        _ => capitalize(word(rng)),
    }
}

/// Value `index` of option `option_id`; the first value is the default.
pub fn option_value<R: Rng>(
    rng: &mut R,
    option_id: u64,
    option_name: &str,
    index: usize,
) -> OptionValue {
    let label = option_label(rng, option_name, index);
    OptionValue {
        option_id: Some(option_id),
        label: Some(label),
        sort_order: i64::try_from(index).ok(),
        is_default: Some(index == 0),
        ..Default::default()
    }
}

/// A variant taking one value from each entry of `values_per_option`.
pub fn variant<R: Rng>(rng: &mut R, values_per_option: &[Vec<OptionValue>]) -> Variant {
    let option_values = values_per_option
        .iter()
        .filter_map(|values| values.choose(rng))
        .map(|value| OptionValue {
            id: value.id,
            option_id: value.option_id,
            label: value.label.clone(),
            ..Default::default()
        })
        .collect();

    Variant {
        sku: Some(hex_id(rng)),
        price: Some(round_cents(rng.gen_range(10.0..=1000.0))),
        weight: Some(round_cents(rng.gen_range(0.1..=25.0))),
        width: Some(round_cents(rng.gen_range(1.0..=50.0))),
        height: Some(round_cents(rng.gen_range(1.0..=50.0))),
        depth: Some(round_cents(rng.gen_range(1.0..=50.0))),
        inventory_level: Some(rng.gen_range(0..100)),
        inventory_warning_level: Some(10),
        option_values: Some(option_values),
        ..Default::default()
    }
}

/// An approved review rated 2 to 5.
pub fn review<R: Rng>(rng: &mut R) -> Review {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let sentences = rng.gen_range(1..=3);
    Review {
        title: sentence(rng, 3),
        text: paragraph(rng, sentences),
        status: Some("approved".to_string()),
        rating: rng.gen_range(2..=5),
        name: Some(format!("{first} {last}")),
        email: Some(format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        )),
        ..Default::default()
    }
}

pub fn pricing_rules() -> Vec<PricingRule> {
    PRICING_TIERS
        .iter()
        .map(|&(quantity_min, quantity_max, amount)| PricingRule {
            quantity_min,
            quantity_max,
            rule_type: "price".to_string(),
            amount,
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_product_prices_follow_list_price() {
        let mut rng = rng();
        for i in 0..20 {
            let product = product(&mut rng, i, &[1, 2, 3], &[9]);
            assert!((10.0..=1000.0).contains(&product.price));
            assert_eq!(product.cost_price, Some(round_cents(product.price * 0.6)));
            assert_eq!(product.retail_price, Some(round_cents(product.price * 1.2)));
            assert_eq!(product.sale_price, Some(round_cents(product.price * 0.9)));
            assert_eq!(product.brand_id, Some(9));
            assert_eq!(product.order_quantity_minimum, Some(1));
            assert_eq!(product.order_quantity_maximum, Some(10));
            assert_eq!(product.page_title.as_deref(), Some(product.name.as_str()));
        }
    }

    #[test]
    fn test_product_categories_are_distinct() {
        let mut rng = rng();
        for _ in 0..50 {
            let ids = product_categories(&mut rng, &[4, 5]);
            assert!(!ids.is_empty() && ids.len() <= 2);
            assert!(ids.len() == 1 || ids[0] != ids[1]);
        }
        assert!(product_categories(&mut rng, &[]).is_empty());
    }

    #[test]
    fn test_first_category_is_visible() {
        let mut rng = rng();
        let top = category(&mut rng, 0, 0);
        assert_eq!(top.parent_id, 0);
        assert_eq!(top.is_visible, Some(true));
        assert_eq!(top.layout_file.as_deref(), Some("category.html"));
    }

    #[test]
    fn test_option_labels() {
        let mut rng = rng();
        assert_eq!(option_label(&mut rng, "Size", 1), "Medium");
        assert_eq!(option_label(&mut rng, "Material", 6), "Polyester");
        assert!(COLORS.contains(&option_label(&mut rng, "Color", 0).as_str()));

        let value = option_value(&mut rng, 14, "Size", 0);
        assert_eq!(value.option_id, Some(14));
        assert_eq!(value.is_default, Some(true));
        assert_eq!(value.label.as_deref(), Some("Small"));
    }

    #[test]
    fn test_variant_takes_one_value_per_option() {
        let mut rng = rng();
        let values = vec![
            vec![
                OptionValue {
                    id: Some(1),
                    option_id: Some(10),
                    label: Some("Red".to_string()),
                    ..Default::default()
                },
                OptionValue {
                    id: Some(2),
                    option_id: Some(10),
                    label: Some("Blue".to_string()),
                    ..Default::default()
                },
            ],
            vec![OptionValue {
                id: Some(3),
                option_id: Some(11),
                label: Some("Large".to_string()),
                ..Default::default()
            }],
        ];

        let variant = variant(&mut rng, &values);
        let chosen = variant.option_values.unwrap();
        assert_eq!(chosen.len(), 2);
        assert_eq!(chosen[0].option_id, Some(10));
        assert_eq!(chosen[1].id, Some(3));
    }

    #[test]
    fn test_review_rating_range() {
        let mut rng = rng();
        for _ in 0..30 {
            let review = review(&mut rng);
            assert!((2..=5).contains(&review.rating));
            assert_eq!(review.status.as_deref(), Some("approved"));
        }
    }

    #[test]
    fn test_pricing_rules_tiers() {
        let rules = pricing_rules();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].quantity_max, Some(9));
        assert_eq!(rules[2].quantity_min, 20);
        assert_eq!(rules[2].quantity_max, None);
        assert!(rules.iter().all(|rule| rule.rule_type == "price"));
    }

    #[test]
    fn test_image_thumbnail_is_first() {
        let mut rng = rng();
        assert_eq!(image(&mut rng, 0).is_thumbnail, Some(true));
        assert_eq!(image(&mut rng, 1).is_thumbnail, Some(false));
    }
}

//! seed-catalog - Fill a BigCommerce store with fake catalog data.
//!
//! # Usage
//!
//! ```bash
//! export BIGCOMMERCE_STORE_HASH=abc123
//! export BIGCOMMERCE_AUTH_TOKEN=...
//! seed-catalog
//!
//! # Against a sandbox or mock server
//! seed-catalog --api-root http://localhost:8080
//! ```
//!
//! Creates categories, brands, and products one request at a time, then
//! decorates each product with custom fields, images, videos, options and
//! variants, reviews, and bulk pricing rules. A failure while creating a
//! category, brand, or product stops the run; any other failure is logged
//! and the run moves on.

#![forbid(unsafe_code)]

use bigcommerce_api::rest::resources::OptionValue;
use bigcommerce_api::{
    ApiRoot, AuthToken, BigCommerceClient, BigCommerceConfig, ResourceError, StoreHash,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

mod generate;

const NUM_CATEGORIES: usize = 10;
const NUM_BRANDS: usize = 5;
const NUM_PRODUCTS: usize = 30;
const NUM_CUSTOM_FIELDS: usize = 2;
const MAX_VARIANTS: usize = 3;
const MAX_OPTIONS: usize = 2;
const MAX_IMAGES: usize = 3;
const MAX_VIDEOS: usize = 1;
const MAX_REVIEWS: usize = 5;

/// Share of products that get bulk pricing rules.
const BULK_PRICING_RATIO: f64 = 0.3;

#[derive(Parser)]
#[command(name = "seed-catalog")]
#[command(author, version, about = "Fill a BigCommerce store with fake catalog data")]
struct Cli {
    /// Store hash from the API path (`/stores/{hash}/v3`)
    #[arg(long, env = "BIGCOMMERCE_STORE_HASH")]
    store_hash: String,

    /// X-Auth-Token of a store-level API account
    #[arg(long, env = "BIGCOMMERCE_AUTH_TOKEN", hide_env_values = true)]
    auth_token: String,

    /// API root, for sandboxes and mock servers
    #[arg(long, env = "BIGCOMMERCE_API_ROOT")]
    api_root: Option<String>,

    /// Seed for the random generator, to repeat a run
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Seeding failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = BigCommerceConfig::builder()
        .store_hash(StoreHash::new(cli.store_hash)?)
        .auth_token(AuthToken::new(cli.auth_token)?);
    if let Some(root) = cli.api_root {
        builder = builder.api_root(ApiRoot::new(root)?);
    }
    let client = BigCommerceClient::new(&builder.build()?)?;

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let category_ids = create_categories(&client, &mut rng).await?;
    tracing::info!("Created {} categories", category_ids.len());

    let brand_ids = create_brands(&client, &mut rng).await?;
    tracing::info!("Created {} brands", brand_ids.len());

    let product_ids = create_products(&client, &mut rng, &category_ids, &brand_ids).await?;
    tracing::info!("Created {} products", product_ids.len());

    for &product_id in &product_ids {
        decorate_product(&client, &mut rng, product_id).await;
    }

    tracing::info!("Finished creating store catalog data");
    Ok(())
}

async fn create_categories(
    client: &BigCommerceClient,
    rng: &mut StdRng,
) -> Result<Vec<u64>, ResourceError> {
    let mut ids: Vec<u64> = Vec::with_capacity(NUM_CATEGORIES);

    for i in 0..NUM_CATEGORIES {
        // The first three stay top-level; later ones may nest under any earlier one.
        let parent_id = if i > 2 { ids[rng.gen_range(0..i)] } else { 0 };
        let sort_order = i64::try_from(i).unwrap_or_default();
        let category = generate::category(rng, sort_order, parent_id);

        let created = client.categories().create(&category).await?;
        let id = created.id.unwrap_or_default();
        tracing::info!(id, parent_id, "Created category: {}", category.name);
        ids.push(id);
    }

    Ok(ids)
}

async fn create_brands(
    client: &BigCommerceClient,
    rng: &mut StdRng,
) -> Result<Vec<u64>, ResourceError> {
    let mut ids = Vec::with_capacity(NUM_BRANDS);

    for _ in 0..NUM_BRANDS {
        let brand = generate::brand(rng);
        let created = client.brands().create(&brand).await?;
        let id = created.id.unwrap_or_default();
        tracing::info!(id, "Created brand: {}", brand.name);
        ids.push(id);
    }

    Ok(ids)
}

async fn create_products(
    client: &BigCommerceClient,
    rng: &mut StdRng,
    category_ids: &[u64],
    brand_ids: &[u64],
) -> Result<Vec<u64>, ResourceError> {
    let mut ids = Vec::with_capacity(NUM_PRODUCTS);

    for i in 0..NUM_PRODUCTS {
        let sort_order = i64::try_from(i).unwrap_or_default();
        let product = generate::product(rng, sort_order, category_ids, brand_ids);
        let created = client.products().create(&product).await?;
        let id = created.id.unwrap_or_default();
        tracing::info!(id, "Created product: {}", product.name);
        ids.push(id);
    }

    Ok(ids)
}

/// Adds the optional data to one product, logging failures.
///
/// Without its custom fields the product is left as created.
async fn decorate_product(client: &BigCommerceClient, rng: &mut StdRng, product_id: u64) {
    if let Err(e) = add_custom_fields(client, rng, product_id).await {
        tracing::warn!(product_id, "Failed to add custom fields: {e}");
        return;
    }
    if let Err(e) = add_images(client, rng, product_id).await {
        tracing::warn!(product_id, "Failed to add images: {e}");
    }
    if let Err(e) = add_videos(client, rng, product_id).await {
        tracing::warn!(product_id, "Failed to add videos: {e}");
    }
    if let Err(e) = add_options_and_variants(client, rng, product_id).await {
        tracing::warn!(product_id, "Failed to add options and variants: {e}");
    }
    if let Err(e) = add_reviews(client, rng, product_id).await {
        tracing::warn!(product_id, "Failed to add reviews: {e}");
    }
    if let Err(e) = add_bulk_pricing_rules(client, rng, product_id).await {
        tracing::warn!(product_id, "Failed to add bulk pricing rules: {e}");
    }
}

async fn add_custom_fields(
    client: &BigCommerceClient,
    rng: &mut StdRng,
    product_id: u64,
) -> Result<(), ResourceError> {
    for _ in 0..NUM_CUSTOM_FIELDS {
        let field = generate::custom_field(rng);
        client.custom_fields().create(product_id, &field).await?;
    }
    Ok(())
}

async fn add_images(
    client: &BigCommerceClient,
    rng: &mut StdRng,
    product_id: u64,
) -> Result<(), ResourceError> {
    let count = rng.gen_range(1..=MAX_IMAGES);
    for i in 0..count {
        let image = generate::image(rng, i64::try_from(i).unwrap_or_default());
        client.product_images().create(product_id, &image).await?;
    }
    Ok(())
}

async fn add_videos(
    client: &BigCommerceClient,
    rng: &mut StdRng,
    product_id: u64,
) -> Result<(), ResourceError> {
    let count = rng.gen_range(0..=MAX_VIDEOS);
    for i in 0..count {
        let video = generate::video(rng, i64::try_from(i).unwrap_or_default());
        client.product_videos().create(product_id, &video).await?;
    }
    Ok(())
}

async fn add_options_and_variants(
    client: &BigCommerceClient,
    rng: &mut StdRng,
    product_id: u64,
) -> Result<(), ResourceError> {
    let option_count = rng.gen_range(0..=MAX_OPTIONS);
    if option_count == 0 {
        return Ok(());
    }

    let mut values_per_option: Vec<Vec<OptionValue>> = Vec::with_capacity(option_count);
    for i in 0..option_count {
        let option = generate::option(rng, i);
        let created = client.options().create(product_id, &option).await?;
        let option_id = created.id.unwrap_or_default();

        let value_count = rng.gen_range(2..=4);
        let mut values = Vec::with_capacity(value_count);
        for j in 0..value_count {
            let value = generate::option_value(rng, option_id, &option.display_name, j);
            let created = client
                .options()
                .create_value(product_id, option_id, &value)
                .await?;
            values.push(OptionValue {
                id: created.id,
                ..value
            });
        }
        values_per_option.push(values);
    }

    let variant_count = rng.gen_range(1..=MAX_VARIANTS);
    for _ in 0..variant_count {
        let variant = generate::variant(rng, &values_per_option);
        client.variants().create(product_id, &variant).await?;
    }
    Ok(())
}

async fn add_reviews(
    client: &BigCommerceClient,
    rng: &mut StdRng,
    product_id: u64,
) -> Result<(), ResourceError> {
    let count = rng.gen_range(0..=MAX_REVIEWS);
    for _ in 0..count {
        let review = generate::review(rng);
        client.reviews().create(product_id, &review).await?;
    }
    Ok(())
}

async fn add_bulk_pricing_rules(
    client: &BigCommerceClient,
    rng: &mut StdRng,
    product_id: u64,
) -> Result<(), ResourceError> {
    if !rng.gen_bool(BULK_PRICING_RATIO) {
        return Ok(());
    }
    for rule in generate::pricing_rules() {
        client.bulk_pricing_rules().create(product_id, &rule).await?;
    }
    Ok(())
}

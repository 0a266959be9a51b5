use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Recommendation, RecommendationResult};

/// Static outfit catalog keyed by style, used whenever the remote model is
/// unavailable or its output is rejected.
const CATALOG: &[(&str, &[&str])] = &[
    (
        "casual",
        &["Jeans + T-shirt", "Sneakers + Hoodie", "Denim Jacket + White Tee"],
    ),
    (
        "formal",
        &["Suit + Formal Shoes", "Blazer + Trousers", "Saree / Kurti Set"],
    ),
    (
        "party",
        &["Black Dress", "Stylish Kurti + Jewelry", "Designer Shirt + Jeans"],
    ),
    ("traditional", &["Saree", "Lehenga", "Kurta Pyjama"]),
];

const PLACEHOLDER_OUTFIT: &str = "Smart Casual Outfit";

const TOP_TIP: &str = "Choose one statement accessory and keep the rest minimal.";

/// Generates three outfit recommendations from the static catalog.
///
/// The candidate pool is shuffled so repeated requests vary, but the shape is
/// fixed: exactly three recommendations plus the constant top tip.
pub fn generate(
    style: Option<&str>,
    color: Option<&str>,
    occasion: Option<&str>,
) -> RecommendationResult {
    generate_with_rng(style, color, occasion, &mut rand::thread_rng())
}

/// Rng-generic core of [`generate`], seedable from tests.
pub fn generate_with_rng<R: Rng + ?Sized>(
    style: Option<&str>,
    color: Option<&str>,
    occasion: Option<&str>,
    rng: &mut R,
) -> RecommendationResult {
    let mut pool = candidate_pool(style);
    pool.shuffle(rng);
    build_result(&pool, color, occasion)
}

/// Selects and deduplicates the candidate outfits for a style.
///
/// A known style key yields that style's list; an unknown or absent style
/// yields the union of all catalog lists. Deduplication preserves
/// first-occurrence order.
fn candidate_pool(style: Option<&str>) -> Vec<&'static str> {
    let known = style.and_then(|s| {
        CATALOG
            .iter()
            .find(|(key, _)| *key == s)
            .map(|(_, outfits)| *outfits)
    });

    let candidates: Vec<&'static str> = match known {
        Some(outfits) => outfits.to_vec(),
        None => CATALOG
            .iter()
            .flat_map(|(_, outfits)| outfits.iter().copied())
            .collect(),
    };

    let mut pool = Vec::with_capacity(candidates.len());
    for outfit in candidates {
        if !pool.contains(&outfit) {
            pool.push(outfit);
        }
    }
    pool
}

/// Emits exactly three recommendations from an already-shuffled pool,
/// padding with the placeholder outfit when the pool is short.
fn build_result(
    pool: &[&str],
    color: Option<&str>,
    occasion: Option<&str>,
) -> RecommendationResult {
    let recommendations = (0..3)
        .map(|i| match pool.get(i) {
            Some(outfit) => {
                let color = color.unwrap_or("neutral/black");
                Recommendation {
                    outfit: outfit.to_string(),
                    color: color.to_string(),
                    explanation: format!(
                        "{} in {} suits {} by keeping the look polished and appropriate.",
                        outfit,
                        color,
                        occasion.unwrap_or("many occasions"),
                    ),
                }
            }
            None => {
                let color = color.unwrap_or("neutral");
                Recommendation {
                    outfit: PLACEHOLDER_OUTFIT.to_string(),
                    color: color.to_string(),
                    explanation: format!(
                        "A {} smart casual outfit works well for {} settings.",
                        color,
                        occasion.unwrap_or("general"),
                    ),
                }
            }
        })
        .collect();

    RecommendationResult {
        recommendations,
        top_tip: TOP_TIP.to_string(),
    }
}

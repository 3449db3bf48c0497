use super::domain::{Dosha, ResolvedCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Recommendation text shown for a resolved category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRecord {
    pub diet: String,
    pub lifestyle: String,
    pub avoid: String,
}

impl AdviceRecord {
    fn new(diet: &str, lifestyle: &str, avoid: &str) -> Self {
        Self {
            diet: diet.to_string(),
            lifestyle: lifestyle.to_string(),
            avoid: avoid.to_string(),
        }
    }
}

/// Advice table keyed by canonical category.
///
/// Pairs are stored once, with members in canonical order, and every lookup is
/// normalized the same way, so `Vata-Pitta` and `Pitta-Vata` share one record.
#[derive(Debug, Clone)]
pub struct AdviceBook {
    records: HashMap<ResolvedCategory, AdviceRecord>,
    fallback: AdviceRecord,
}

impl AdviceBook {
    pub fn standard() -> Self {
        use Dosha::{Kapha, Pitta, Vata};

        let unknown = AdviceRecord::new(
            "Could not determine specifics. Generally: eat fresh, seasonal foods.",
            "Maintain balance.",
            "Processed foods.",
        );

        let records = HashMap::from([
            (
                ResolvedCategory::Single(Vata),
                AdviceRecord::new(
                    "Warm, oily, heavy foods. Sweet, sour, and salty tastes.",
                    "Routine, warmth, oil massage (Abhyanga), gentle yoga.",
                    "Cold, dry, raw foods. Irregular schedules.",
                ),
            ),
            (
                ResolvedCategory::Single(Pitta),
                AdviceRecord::new(
                    "Cool, slightly dry, heavy foods. Sweet, bitter, and astringent tastes.",
                    "Stay cool, avoid direct sun, non-competitive activities.",
                    "Hot, spicy, oily, sour, and salty foods. Excessive heat.",
                ),
            ),
            (
                ResolvedCategory::Single(Kapha),
                AdviceRecord::new(
                    "Warm, light, dry foods. Pungent, bitter, and astringent tastes.",
                    "Vigorous exercise, variety, rising early, dry massage.",
                    "Heavy, oily, sweet, sour, and salty foods. Excessive sleep.",
                ),
            ),
            (
                pair(Vata, Pitta),
                AdviceRecord::new(
                    "Warm but not hot, nourishing foods. Sweet taste is best. Avoid very spicy or very dry foods.",
                    "Gentle exercise, meditation to calm the mind (Vata) and cool the emotions (Pitta).",
                    "Chili peppers, raw onions, fasting, running in hot sun.",
                ),
            ),
            (
                pair(Pitta, Kapha),
                AdviceRecord::new(
                    "Light, dry, and cool foods. Bitter and astringent tastes. Lots of leafy greens.",
                    "Active exercise but avoid overheating. Competitive sports are okay in moderation.",
                    "Oily, heavy, sour, and salty foods. Deep fried items.",
                ),
            ),
            (
                pair(Vata, Kapha),
                AdviceRecord::new(
                    "Warm, light, and dry foods. Pungent and astringent tastes. Ginger tea is excellent.",
                    "Stay active and warm. Avoid napping during the day. Variety in routine.",
                    "Cold, heavy, and oily foods. Ice cream, yogurt, cheese.",
                ),
            ),
            (ResolvedCategory::Unknown, unknown.clone()),
            (
                ResolvedCategory::Unscored,
                AdviceRecord::new("Balanced.", "Healthy.", "Junk."),
            ),
        ]);

        Self {
            records,
            fallback: unknown,
        }
    }

    pub fn lookup(&self, category: ResolvedCategory) -> &AdviceRecord {
        self.records
            .get(&category.canonical())
            .unwrap_or(&self.fallback)
    }

    /// Lookup by display name; unrecognized names get the "Unknown" record.
    pub fn lookup_label(&self, label: &str) -> &AdviceRecord {
        match label.parse::<ResolvedCategory>() {
            Ok(category) => self.lookup(category),
            Err(_) => &self.fallback,
        }
    }
}

impl Default for AdviceBook {
    fn default() -> Self {
        Self::standard()
    }
}

fn pair(primary: Dosha, secondary: Dosha) -> ResolvedCategory {
    ResolvedCategory::Dual { primary, secondary }
}

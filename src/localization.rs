//! Localization table
//!
//! Static, per-locale directives and tone lexicon. Lookups never fail:
//! unsupported country codes resolve to the English/international entry.

use crate::budget::BudgetTier;
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the user's own words in neutral empathy phrases.
const FEELING_PLACEHOLDER: &str = "{feeling}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    Indonesian,
    Chinese,
    English,
}

/// Coarse bucket for a free-text feeling, used to pick an empathy phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeelingCategory {
    Sad,
    Excited,
    Stressed,
    Neutral,
}

impl FeelingCategory {
    /// Keyword detection, case-insensitive. First matching bucket wins.
    pub fn detect(feeling: &str) -> Self {
        let lower = feeling.to_lowercase();
        let has_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if has_any(&["sad", "upset", "down"]) {
            FeelingCategory::Sad
        } else if has_any(&["excited", "happy", "amazing"]) {
            FeelingCategory::Excited
        } else if has_any(&["stress", "overwhelm", "tired"]) {
            FeelingCategory::Stressed
        } else {
            FeelingCategory::Neutral
        }
    }
}

#[derive(Debug)]
pub struct BudgetLexicon {
    pub ultra_low: &'static str,
    pub low: &'static str,
    pub mid: &'static str,
    pub high: &'static str,
    pub ultra_high: &'static str,
}

#[derive(Debug)]
pub struct FeelingLexicon {
    pub sad: &'static str,
    pub excited: &'static str,
    pub stressed: &'static str,
    /// Contains `{feeling}`
    pub neutral: &'static str,
}

/// Everything a prompt or local fallback needs to speak to one locale.
#[derive(Debug)]
pub struct LocaleEntry {
    pub locale: Locale,
    pub language_directive: &'static str,
    pub cultural_directive: &'static str,
    pub feelings: FeelingLexicon,
    pub budgets: BudgetLexicon,
}

impl LocaleEntry {
    pub fn budget_phrase(&self, tier: BudgetTier) -> &'static str {
        match tier {
            BudgetTier::UltraLow => self.budgets.ultra_low,
            BudgetTier::Low => self.budgets.low,
            BudgetTier::Mid => self.budgets.mid,
            BudgetTier::High => self.budgets.high,
            BudgetTier::UltraHigh => self.budgets.ultra_high,
        }
    }

    pub fn empathy_phrase(&self, category: FeelingCategory, feeling: &str) -> String {
        match category {
            FeelingCategory::Sad => self.feelings.sad.to_string(),
            FeelingCategory::Excited => self.feelings.excited.to_string(),
            FeelingCategory::Stressed => self.feelings.stressed.to_string(),
            FeelingCategory::Neutral => self.feelings.neutral.replace(FEELING_PLACEHOLDER, feeling),
        }
    }
}

static INDONESIAN: LocaleEntry = LocaleEntry {
    locale: Locale::Indonesian,
    language_directive: "Respond in Indonesian (Bahasa Indonesia) with Gen Z slang and expressions commonly used by Indonesian youth.",
    cultural_directive: "Consider Indonesian travel culture, local destinations, and IDR currency context.",
    feelings: FeelingLexicon {
        sad: "bestie, aku ngerti banget dan perasaan ini valid banget, tapi lowkey trip ini mungkin exactly what your soul needs rn",
        excited: "YES bestie! energy ini absolutely everything dan kita bakal bikin memorable moments yang iconic",
        stressed: "honestly bestie, kamu deserve break ini banget dan kita bakal cari perfect healing vibes",
        neutral: "\"{feeling}\" is such a valid vibe dan kita totally gonna work with that energy",
    },
    budgets: BudgetLexicon {
        ultra_low: "dan fr kita mungkin harus agak kreatif sama budget itu tapi itu totally valid!",
        low: "dan honestly, kita bisa bikin magic happen dengan budget kamu kalau kreatif!",
        mid: "dan budget kamu totally workable buat dapetin vibes yang keren!",
        high: "dan budget kamu tuh solid banget buat bikin trip yang special!",
        ultra_high: "dan bestie, dengan budget segitu kamu bisa benar-benar hidup dalam kemewahan - gak bohong!",
    },
};

static CHINESE: LocaleEntry = LocaleEntry {
    locale: Locale::Chinese,
    language_directive: "Respond in Simplified Chinese (简体中文) with contemporary internet slang and expressions used by Chinese Gen Z.",
    cultural_directive: "Consider Chinese travel preferences, popular destinations for Chinese travelers, and yuan/travel budget considerations.",
    feelings: FeelingLexicon {
        sad: "姐妹，我完全理解你，这种感觉完全有效，但说不定这次旅行正是你的灵魂现在需要的",
        excited: "YES姐妹！这种能量绝对是一切，我们要创造一些标志性的回忆",
        stressed: "说实话姐妹，你完全值得这次休息，我们会找到完美的治愈氛围",
        neutral: "\"{feeling}\" 是如此有效的氛围，我们完全要配合这种能量",
    },
    budgets: BudgetLexicon {
        ultra_low: "真的，我们可能需要对这个预算有点创意，但这完全没问题！",
        low: "说实话，如果我们有创意的话，你的预算可以创造奇迹！",
        mid: "你的预算完全够用，能有很好的体验！",
        high: "你的预算很棒，可以让这次旅行变得特别！",
        ultra_high: "姐妹，这个预算你真的可以过最奢华的生活 - 不开玩笑！",
    },
};

static ENGLISH: LocaleEntry = LocaleEntry {
    locale: Locale::English,
    language_directive: "Respond in English with authentic Gen Z slang and expressions.",
    cultural_directive: "Consider international travel context with diverse destination options.",
    feelings: FeelingLexicon {
        sad: "bestie, I see you and this feeling is so valid, but lowkey a trip might be exactly what your soul needs rn",
        excited: "YES bestie! this energy is absolutely everything and we're about to make some iconic memories",
        stressed: "honestly bestie, you deserve this break so much and we're gonna find the perfect healing vibes",
        neutral: "\"{feeling}\" is such a valid vibe and we're totally gonna work with that energy",
    },
    budgets: BudgetLexicon {
        ultra_low: "and fr we might need to get a little creative with that budget but that's totally valid!",
        low: "and honestly, we can make magic happen with your budget if we're creative!",
        mid: "and your budget is totally workable for some real good vibes!",
        high: "and your budget is giving solid opportunities to make this special!",
        ultra_high: "and bestie, with that budget you can literally live your luxury dreams - no cap!",
    },
};

/// Resolve a country code to its locale entry.
pub fn resolve(country: &str) -> &'static LocaleEntry {
    match country.trim().to_ascii_uppercase().as_str() {
        "ID" => &INDONESIAN,
        "ZH" => &CHINESE,
        _ => &ENGLISH,
    }
}

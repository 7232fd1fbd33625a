//! Scoring key for the HEXACO-PI-R 100-item form.
//!
//! Domain item lists are ordered facet by facet: each consecutive run of four
//! items is one facet, in the order the facets are declared in [`FACETS`].

/// Items phrased against their scale; scored as `6 - v`
pub const REVERSED_ITEMS: [u8; 50] = [
    6, 54, 12, 36, 84, 42, 66, 90, 72, 96, 29, 77, 35, 59, 41, 89, 95, 52, 76, 10, 82, 16, 70, 94,
    51, 75, 9, 15, 63, 87, 21, 93, 50, 74, 56, 80, 38, 20, 44, 92, 1, 25, 55, 79, 13, 85, 19, 91,
    99, 100,
];

const HONESTY_HUMILITY: [u8; 16] = [6, 30, 54, 78, 12, 36, 60, 84, 18, 42, 66, 90, 24, 48, 72, 96];
const EMOTIONALITY: [u8; 16] = [5, 29, 53, 77, 11, 35, 59, 83, 17, 41, 65, 89, 23, 47, 71, 95];
const EXTRAVERSION: [u8; 16] = [4, 28, 52, 76, 10, 34, 58, 82, 16, 40, 64, 88, 22, 46, 70, 94];
const AGREEABLENESS: [u8; 16] = [3, 27, 51, 75, 9, 33, 57, 81, 15, 39, 63, 87, 21, 45, 69, 93];
const CONSCIENTIOUSNESS: [u8; 16] = [2, 26, 50, 74, 8, 32, 56, 80, 14, 38, 62, 86, 20, 44, 68, 92];
const OPENNESS: [u8; 16] = [1, 25, 49, 73, 7, 31, 55, 79, 13, 37, 61, 85, 19, 43, 67, 91];
const ALTRUISM: [u8; 4] = [97, 98, 99, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    /// One of the six broad traits, or the Altruism interstitial scale
    Domain,
    /// A four-item facet; carries the name of its parent domain
    Facet(&'static str),
}

/// A named group of items whose (reversal-applied) mean is one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub name: &'static str,
    /// Short header used when the summary table does not fit the terminal
    pub abbreviation: &'static str,
    pub kind: ScaleKind,
    pub items: &'static [u8],
}

const fn domain(name: &'static str, abbreviation: &'static str, items: &'static [u8]) -> Scale {
    Scale {
        name,
        abbreviation,
        kind: ScaleKind::Domain,
        items,
    }
}

const fn facet(
    name: &'static str,
    abbreviation: &'static str,
    parent: &'static str,
    items: &'static [u8],
) -> Scale {
    Scale {
        name,
        abbreviation,
        kind: ScaleKind::Facet(parent),
        items,
    }
}

/// Domain-level scales in output column order
pub const DOMAINS: [Scale; 7] = [
    domain("Honesty-Humility", "H", &HONESTY_HUMILITY),
    domain("Emotionality", "E", &EMOTIONALITY),
    domain("Extraversion", "X", &EXTRAVERSION),
    domain("Agreeableness", "A", &AGREEABLENESS),
    domain("Conscientiousness", "C", &CONSCIENTIOUSNESS),
    domain("Openness to Experience", "O", &OPENNESS),
    domain("Altruism", "Alt", &ALTRUISM),
];

/// The 24 facet scales, grouped by domain
pub const FACETS: [Scale; 24] = [
    facet("Sincerity", "Sinc", "Honesty-Humility", &[6, 30, 54, 78]),
    facet("Fairness", "Fair", "Honesty-Humility", &[12, 36, 60, 84]),
    facet("Greed-Avoidance", "Gree", "Honesty-Humility", &[18, 42, 66, 90]),
    facet("Modesty", "Mode", "Honesty-Humility", &[24, 48, 72, 96]),
    facet("Fearfulness", "Fear", "Emotionality", &[5, 29, 53, 77]),
    facet("Anxiety", "Anxi", "Emotionality", &[11, 35, 59, 83]),
    facet("Dependence", "Depe", "Emotionality", &[17, 41, 65, 89]),
    facet("Sentimentality", "Sent", "Emotionality", &[23, 47, 71, 95]),
    facet("Social Self-Esteem", "SSE", "Extraversion", &[4, 28, 52, 76]),
    facet("Social Boldness", "SocB", "Extraversion", &[10, 34, 58, 82]),
    facet("Sociability", "Soci", "Extraversion", &[16, 40, 64, 88]),
    facet("Liveliness", "Live", "Extraversion", &[22, 46, 70, 94]),
    facet("Forgivingness", "Forg", "Agreeableness", &[3, 27, 51, 75]),
    facet("Gentleness", "Gent", "Agreeableness", &[9, 33, 57, 81]),
    facet("Flexibility", "Flex", "Agreeableness", &[15, 39, 63, 87]),
    facet("Patience", "Pati", "Agreeableness", &[21, 45, 69, 93]),
    facet("Organization", "Orga", "Conscientiousness", &[2, 26, 50, 74]),
    facet("Diligence", "Dili", "Conscientiousness", &[8, 32, 56, 80]),
    facet("Perfectionism", "Perf", "Conscientiousness", &[14, 38, 62, 86]),
    facet("Prudence", "Prud", "Conscientiousness", &[20, 44, 68, 92]),
    facet("Aesthetic Appreciation", "AesA", "Openness to Experience", &[1, 25, 49, 73]),
    facet("Inquisitiveness", "Inqu", "Openness to Experience", &[7, 31, 55, 79]),
    facet("Creativity", "Crea", "Openness to Experience", &[13, 37, 61, 85]),
    facet("Unconventionality", "Unco", "Openness to Experience", &[19, 43, 67, 91]),
];

/// Scales to score for a run: the seven domains, then facets if requested
pub fn all_scales(include_facets: bool) -> Vec<Scale> {
    let mut scales = DOMAINS.to_vec();
    if include_facets {
        scales.extend_from_slice(&FACETS);
    }
    scales
}

pub fn is_reversed(item: u8) -> bool {
    REVERSED_ITEMS.contains(&item)
}

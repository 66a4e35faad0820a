//! Artist style descriptions used in generation prompts.
//!
//! The style name itself is user-selected from a closed UI set, but the
//! lookup degrades to [`GENERIC_STYLE_DESCRIPTION`] for anything it does not
//! recognize: an unknown style must never block image generation.

/// Fallback phrase for styles with no dedicated description.
pub const GENERIC_STYLE_DESCRIPTION: &str =
    "artistic style with expressive brushwork and rich colors";

/// Descriptive phrase per supported artist style, applied to every month of
/// a calendar so the twelve images read as one consistent set.
const STYLE_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Impressionist",
        "loose, expressive brushstrokes and soft, dappled light filtering through trees, creating a dreamy atmosphere with warm earth tones and cool shadows",
    ),
    (
        "Cubist",
        "geometric forms and fragmented perspectives, breaking down the landscape into angular planes and bold, contrasting colors",
    ),
    (
        "Pop Art",
        "vibrant, saturated colors and bold outlines, with high contrast and graphic elements that make the scene pop with energy",
    ),
    (
        "Watercolor",
        "soft, flowing washes of color that blend seamlessly, with delicate transparency and gentle gradations",
    ),
    (
        "Renaissance",
        "precise detail and balanced composition, with rich, deep colors and masterful use of light and shadow",
    ),
    (
        "Modern",
        "clean lines and simplified forms, with a focus on composition and color relationships over fine detail",
    ),
    (
        "Minimalist",
        "simple, clean composition with essential elements only, using a limited color palette and plenty of negative space",
    ),
    (
        "Abstract",
        "non-representational forms and bold color combinations, emphasizing emotion and movement over realistic depiction",
    ),
    (
        "Surrealist",
        "dreamlike quality with unexpected elements and mysterious atmosphere, blending reality with imagination",
    ),
    (
        "Cartoon",
        "stylized, exaggerated features with bright, cheerful colors and a playful, animated quality",
    ),
    (
        "Van Gogh",
        "Van Gogh's vivid colors, defined and expressive brushstrokes, and swirling textures",
    ),
];

/// Look up the descriptive phrase for an artist style.
///
/// Unknown styles return [`GENERIC_STYLE_DESCRIPTION`] rather than an error.
pub fn style_description(style: &str) -> &'static str {
    STYLE_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, desc)| *desc)
        .unwrap_or(GENERIC_STYLE_DESCRIPTION)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

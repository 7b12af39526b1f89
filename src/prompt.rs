//! Prompt construction for the image generation provider.
//!
//! Expands the categorical form inputs into a descriptive scene prompt.
//! The palette and style vocabularies are ordered tables scanned
//! first-match-wins; entry order is part of the output contract.

/// Recognized color palette families, scanned in order against the
/// lowercased input. The first entry with a matching phrase wins.
const COLOR_CLAUSES: &[(&[&str], &str)] = &[
    (
        &["natural", "earthy"],
        " The color palette is natural and earthy: warm beige, soft terracotta, olive green, \
         and walnut brown, grounded by linen, jute, and unvarnished wood textures.",
    ),
    (
        &["vibrant", "energetic"],
        " The color palette is vibrant and energetic: saturated teal, mustard yellow, and \
         coral accents set against crisp white walls and polished brass details.",
    ),
    (
        &["neutral", "sophisticated", "calming"],
        " The color palette is a sophisticated, calming neutral: soft greys, warm whites, \
         and muted taupe with matte black accents and pale oak surfaces.",
    ),
];

/// Recognized style families, scanned the same way.
const STYLE_CLAUSES: &[(&[&str], &str)] = &[
    (
        &["japandi"],
        " Japandi aesthetic: Japanese minimalism fused with Scandinavian warmth, low-profile \
         wooden furniture, clean lines, wabi-sabi ceramics, and uncluttered surfaces.",
    ),
    (
        &["industrial"],
        " Industrial aesthetic: exposed brick, raw concrete, blackened steel fixtures, Edison \
         bulb lighting, and reclaimed wood shelving.",
    ),
    (
        &["minimal"],
        " Soft minimalist aesthetic: pared-back furnishings with rounded silhouettes, plush \
         boucle textures, and generous negative space.",
    ),
    (
        &["boho", "bohemian"],
        " Bohemian aesthetic: layered patterned rugs, rattan and macrame accents, trailing \
         houseplants, and collected global decor.",
    ),
    (
        &["classic"],
        " Classic aesthetic: balanced symmetry, crown molding, tufted upholstery, antique \
         brass hardware, and timeless hardwood furniture.",
    ),
];

/// Fixed closing clause steering the provider toward photorealism.
const QUALITY_SUFFIX: &str = " Photorealistic, ultra-detailed, natural window lighting, \
     professional interior photography, 8k render quality.";

fn matching_clause<'a>(input: &str, table: &'a [(&[&str], &str)]) -> Option<&'a str> {
    table
        .iter()
        .find(|(phrases, _)| phrases.iter().any(|phrase| input.contains(phrase)))
        .map(|(_, clause)| *clause)
}

/// Build the scene prompt from the four categorical inputs.
///
/// Pure and total: unrecognized palette or style values simply add no
/// clause beyond the base sentence.
pub fn build_prompt(room_type: &str, style: &str, color_palette: &str, room_size: &str) -> String {
    let room_type = room_type.to_lowercase();
    let style = style.to_lowercase();
    let color_palette = color_palette.to_lowercase();
    let room_size = room_size.to_lowercase();

    let mut prompt = format!(
        "A photorealistic interior design of a {} {}, embodying the {} style.",
        room_size, room_type, style
    );

    if let Some(clause) = matching_clause(&color_palette, COLOR_CLAUSES) {
        prompt.push_str(clause);
    }

    if let Some(clause) = matching_clause(&style, STYLE_CLAUSES) {
        prompt.push_str(clause);
    }

    prompt.push_str(QUALITY_SUFFIX);
    prompt
}

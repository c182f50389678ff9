//! Prompt templates

use gallery_core::Category;

/// Prompt for a three-sentence gallery description
pub fn description_prompt(title: &str, category: Category) -> String {
    format!(
        "Write a sophisticated, poetic, and professional 3-sentence art gallery description \
         for an artwork titled \"{title}\" in the category of \"{category}\". \
         Highlight its emotional impact and technical beauty."
    )
}

/// Prompt for a square illustration of the work
pub fn illustration_prompt(title: &str, category: Category, tags: &[String]) -> String {
    format!(
        "A professional, high-resolution {category} masterpiece titled \"{title}\".\n\
         Style: fine art.\n\
         Themes: {themes}.\n\
         Lighting: gallery lighting.\n\
         Composition: centered, artistic.",
        themes = tags.join(", ")
    )
}

//! Built-in knowledge-base fallback.
//!
//! The knowledge endpoint serves rows from the `knowledge_articles` table;
//! when the table is empty it falls back to this fixed set of three
//! articles so the knowledge page is never blank on a fresh install.

/// A built-in article served when the remote store has none.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinArticle {
    pub title: &'static str,
    pub category: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
    pub slug: &'static str,
}

pub const FALLBACK_ARTICLES: &[BuiltinArticle] = &[
    BuiltinArticle {
        title: "Understanding Common Tomato Diseases",
        category: "Disease Guide",
        excerpt: "Learn about the most common diseases affecting tomato plants, including \
                  early blight, late blight, and septoria leaf spot, with detailed \
                  identification and treatment information.",
        content: "Tomatoes are susceptible to a range of fungal and bacterial diseases. \
                  Early blight shows as dark spots with concentric rings; late blight as \
                  water-soaked lesions that spread rapidly in cool, wet weather; septoria \
                  leaf spot as many small circular spots with gray centers. Accurate \
                  identification drives the right treatment choice.",
        image_url: "https://images.unsplash.com/photo-1601383835394-c8679d76a254",
        image_alt: "Tomato plants",
        slug: "understanding-tomato-diseases",
    },
    BuiltinArticle {
        title: "Organic Methods for Controlling Aphids",
        category: "Pest Control",
        excerpt: "Discover natural and organic methods to control aphid infestations on \
                  your crops without resorting to harmful chemical pesticides.",
        content: "Aphids can be managed without synthetic pesticides: encourage ladybirds \
                  and lacewings, use insecticidal soap or neem oil sprays, plant trap \
                  crops such as nasturtiums, and control the ants that farm aphid \
                  colonies. Repeated light interventions beat one heavy one.",
        image_url: "https://images.unsplash.com/photo-1556012018-50c5c0da73bf",
        image_alt: "Plant with aphids",
        slug: "organic-aphid-control",
    },
    BuiltinArticle {
        title: "Best Practices for Crop Rotation",
        category: "Farming Guide",
        excerpt: "Explore the benefits of crop rotation and learn how to implement an \
                  effective rotation schedule to improve soil health and reduce disease \
                  pressure.",
        content: "Rotating crop families breaks pest and disease cycles and balances \
                  nutrient demand on the soil. Group crops by family, keep a 3-4 year \
                  gap before a family returns to a bed, and follow heavy feeders with \
                  legumes to restore nitrogen.",
        image_url: "https://images.unsplash.com/photo-1500651230702-0e2d8a49d4ad",
        image_alt: "Farm field with different crops",
        slug: "crop-rotation-best-practices",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_three_articles() {
        assert_eq!(FALLBACK_ARTICLES.len(), 3);
    }

    #[test]
    fn fallback_slugs_are_unique() {
        let mut slugs: Vec<_> = FALLBACK_ARTICLES.iter().map(|a| a.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), FALLBACK_ARTICLES.len());
    }
}

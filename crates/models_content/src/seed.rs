//! The content the site ships with before an operator has saved anything.

use crate::{
    Branding, ContentBundle, HeroAsset, HeroAssetKind, Highlight, Villa, VillaCategory,
};

fn villa(
    id: &str,
    title: &str,
    category: VillaCategory,
    size: &str,
    features: &[&str],
    image: &str,
) -> Villa {
    Villa {
        id: id.to_string(),
        title: title.to_string(),
        category,
        size: size.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        image: image.to_string(),
        description: None,
    }
}

pub(crate) fn initial_content() -> ContentBundle {
    ContentBundle {
        revision: 0,
        hero_assets: vec![
            HeroAsset {
                kind: HeroAssetKind::Video,
                src: "https://maldives-serenitytravels.com/assets/videos/villa-haven-cinematic.mp4"
                    .to_string(),
            },
            HeroAsset {
                kind: HeroAssetKind::Image,
                src: "https://images.unsplash.com/photo-1514282401047-d79a71a590e8?q=80&w=2400"
                    .to_string(),
            },
            HeroAsset {
                kind: HeroAssetKind::Image,
                src: "https://images.unsplash.com/photo-1544550581-5f7ceaf7f992?q=80&w=2400"
                    .to_string(),
            },
        ],
        highlights: vec![
            Highlight {
                title: "Marwari Ranch".to_string(),
                category: "Unique Experience".to_string(),
                img: "https://www.sunsiyam.com/media/0gvjfscq/siyam-world-horse-9.jpg".to_string(),
            },
            Highlight {
                title: "Floating Park".to_string(),
                category: "Adventure".to_string(),
                img: "https://globetrender.com/wp-content/uploads/2021/08/water-world-aerial.jpg"
                    .to_string(),
            },
            Highlight {
                title: "Siyam Speed".to_string(),
                category: "Go-Karting".to_string(),
                img: "https://www.traveltrademaldives.com/assets/2024/05/karting.jpg".to_string(),
            },
        ],
        villas: vec![
            villa(
                "pool-beach-villa",
                "Pool Beach Villa",
                VillaCategory::Beach,
                "190m²",
                &["Private Pool", "Direct Beach Access", "Outdoor Shower"],
                "https://www.sunsiyam.com/media/pool-beach-villa.jpg",
            ),
            villa(
                "sunset-pool-beach-villa",
                "Sunset Pool Beach Villa",
                VillaCategory::Beach,
                "250m²",
                &["Sunset Facing", "Private Pool", "Beachfront Deck"],
                "https://www.sunsiyam.com/media/sunset-pool-beach-villa.jpg",
            ),
            villa(
                "beach-suite-pool",
                "Beach Suite with Pool",
                VillaCategory::Beach,
                "280m²",
                &["Separate Living Room", "Private Pool", "Butler Service"],
                "https://www.sunsiyam.com/media/beach-suite-pool.jpg",
            ),
            villa(
                "water-villa-slide",
                "Water Villa with Pool + Slide",
                VillaCategory::Water,
                "89m²",
                &["Overwater Slide", "Private Pool", "Lagoon Access"],
                "https://www.sunsiyam.com/media/water-villa-slide.jpg",
            ),
            villa(
                "lagoon-villa-slide",
                "Lagoon Villa with Pool + Slide",
                VillaCategory::Water,
                "98m²",
                &["Overwater Slide", "Lagoon Views", "Sun Deck"],
                "https://www.sunsiyam.com/media/lagoon-villa-slide.jpg",
            ),
            villa(
                "water-pavilion-slide",
                "Water Pavilion with Pool + Slide",
                VillaCategory::Water,
                "185m²",
                &["Overwater Slide", "Infinity Pool", "Panoramic Ocean Views"],
                "https://www.sunsiyam.com/media/water-pavilion-slide.jpg",
            ),
        ],
        packages: vec![],
        branding: Branding {
            resort_name: "Siyam World".to_string(),
            partner_name: "Maldives Serenity Travels".to_string(),
            hero_headline: "Siyam World Maldives".to_string(),
            hero_subheadline: "A bold playground with an infinite collection of experiences \
                              across land, ocean, and sky."
                .to_string(),
            trust_signal: "Official Partner | Best Rates | Speedboat Included".to_string(),
            primary_cta: "Request Bespoke Quote".to_string(),
        },
    }
}

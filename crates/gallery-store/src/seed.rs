//! Demo dataset written on first start

use chrono::{DateTime, Utc};

use gallery_core::{Artwork, ArtworkStatus, Category, EntityId, User, UserRole};

struct SeedArtist {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    bio: &'static str,
    avatar: &'static str,
}

const ARTISTS: [SeedArtist; 2] = [
    SeedArtist {
        id: "a1",
        name: "Elena Vance",
        email: "elena@art.com",
        bio: "Contemporary abstract painter exploring the intersection of light and emotion.",
        avatar: "https://picsum.photos/seed/elena/200",
    },
    SeedArtist {
        id: "a2",
        name: "Julian Thorne",
        email: "julian@art.com",
        bio: "Sculptor specializing in sustainable materials and organic forms.",
        avatar: "https://picsum.photos/seed/julian/200",
    },
];

struct SeedArtwork {
    id: &'static str,
    artist: usize,
    title: &'static str,
    description: &'static str,
    category: Category,
    tags: [&'static str; 3],
    price: u64,
    image_url: &'static str,
}

const ARTWORKS: [SeedArtwork; 2] = [
    SeedArtwork {
        id: "w1",
        artist: 0,
        title: "Ethereal Dawn",
        description: "A study of morning light using heavy impasto techniques.",
        category: Category::Paintings,
        tags: ["abstract", "light", "impasto"],
        price: 1200,
        image_url: "https://picsum.photos/seed/ethereal/800/1000",
    },
    SeedArtwork {
        id: "w2",
        artist: 0,
        title: "Midnight Echo",
        description: "Deep blues and charcoal textures exploring silence.",
        category: Category::Paintings,
        tags: ["blue", "moody", "modern"],
        price: 950,
        image_url: "https://picsum.photos/seed/midnight/800/1000",
    },
];

/// Seed artists, stamped with `now`
pub fn users(now: DateTime<Utc>) -> Vec<User> {
    ARTISTS
        .iter()
        .map(|a| User {
            avatar: Some(a.avatar.to_string()),
            bio: Some(a.bio.to_string()),
            joined_at: now,
            ..User::new(
                EntityId::from(a.id),
                a.name.to_string(),
                a.email.to_string(),
                UserRole::Artist,
            )
        })
        .collect()
}

/// Seed artworks, newest first, stamped with `now`
pub fn artworks(now: DateTime<Utc>) -> Vec<Artwork> {
    ARTWORKS
        .iter()
        .map(|w| {
            let artist = &ARTISTS[w.artist];
            Artwork {
                id: EntityId::from(w.id),
                artist_id: EntityId::from(artist.id),
                artist_name: artist.name.to_string(),
                title: w.title.to_string(),
                description: w.description.to_string(),
                category: w.category,
                tags: w.tags.iter().map(ToString::to_string).collect(),
                price: w.price,
                image_url: w.image_url.to_string(),
                status: ArtworkStatus::Available,
                created_at: now,
            }
        })
        .collect()
}

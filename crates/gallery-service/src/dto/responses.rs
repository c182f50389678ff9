//! Response views assembled from store snapshots

use serde::Serialize;

use gallery_core::{Artwork, Order, User};

/// Filtered catalog plus the tag vocabulary for filter controls
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub artworks: Vec<Artwork>,
    /// Distinct tags across the whole collection, sorted
    pub tags: Vec<String>,
}

/// Public artist page
#[derive(Debug, Clone, Serialize)]
pub struct ArtistProfile {
    pub artist: User,
    pub artworks: Vec<Artwork>,
}

/// Studio overview for the current artist
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDashboard {
    pub artist: User,
    pub artworks: Vec<Artwork>,
    /// Orders where the artist is the seller
    pub sales: Vec<Order>,
    /// Completed sales only
    pub sales_count: usize,
    /// Sum of completed sale amounts
    pub revenue: u64,
}

impl ArtistDashboard {
    pub fn new(artist: User, artworks: Vec<Artwork>, sales: Vec<Order>) -> Self {
        let completed = sales.iter().filter(|o| o.is_completed());
        let sales_count = completed.clone().count();
        let revenue = completed.map(|o| o.amount).sum();
        Self {
            artist,
            artworks,
            sales,
            sales_count,
            revenue,
        }
    }
}

/// Everything the admin console lists
#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    pub users: Vec<User>,
    pub artworks: Vec<Artwork>,
    pub orders: Vec<Order>,
}

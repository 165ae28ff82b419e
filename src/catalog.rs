//! The TripCraft destination catalog
//!
//! A single owned table of every package the site sells. It is built into the
//! binary, ordered weekend, domestic then international, and only exposed
//! through read-only accessors.

use crate::models::{Category, Package, Theme};

static PACKAGES: [Package; 9] = [
    Package {
        id: "ooty",
        title: "Ooty Hill Station",
        country: "Tamil Nadu, India",
        duration_label: "2-3 Days",
        description: "Scenic hill station with tea gardens and cool climate",
        price_min: 8000,
        price_max: 15000,
        themes: &[Theme::Nature, Theme::Romantic, Theme::Adventure],
        category: Category::Weekend,
        image: "https://images.pexels.com/photos/1132047/pexels-photo-1132047.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        hero_image: "https://images.pexels.com/photos/1132047/pexels-photo-1132047.jpeg?auto=compress&cs=tinysrgb&w=1200&h=600&fit=crop",
        overview: "Nestled in the Nilgiri Hills, Ooty is a charming hill station known for its pleasant climate, tea gardens, and colonial architecture. Often called the \"Queen of Hill Stations,\" it offers a perfect escape from the heat with its misty mountains and scenic beauty.",
        highlights: &["Botanical Gardens", "Ooty Lake", "Nilgiri Mountain Railway", "Tea Gardens", "Doddabetta Peak"],
        best_time: "April to June, September to November",
        ideal_for: "Couples, Families, Nature Lovers",
        activities: &["Boating", "Toy Train Ride", "Tea Plantation Tours", "Trekking", "Photography"],
        rating: 4.8,
        reviews: 1247,
    },
    Package {
        id: "goa",
        title: "Goa Beach Paradise",
        country: "Goa, India",
        duration_label: "2-3 Days",
        description: "Sun, sand, and vibrant nightlife by the Arabian Sea",
        price_min: 10000,
        price_max: 20000,
        themes: &[Theme::Beach, Theme::Adventure, Theme::Romantic],
        category: Category::Weekend,
        image: "https://images.pexels.com/photos/1450353/pexels-photo-1450353.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        hero_image: "https://images.pexels.com/photos/1450353/pexels-photo-1450353.jpeg?auto=compress&cs=tinysrgb&w=1200&h=600&fit=crop",
        overview: "Goa is India's beach capital, offering golden sandy beaches, vibrant nightlife, and Portuguese colonial charm. From peaceful beaches to bustling markets, Goa provides the perfect blend of relaxation and adventure.",
        highlights: &["Baga Beach", "Old Goa Churches", "Anjuna Flea Market", "Dudhsagar Falls", "Spice Plantations"],
        best_time: "November to March",
        ideal_for: "Beach Lovers, Party Enthusiasts, Couples",
        activities: &["Water Sports", "Beach Parties", "Dolphin Watching", "Heritage Tours", "Sunset Cruises"],
        rating: 4.6,
        reviews: 2156,
    },
    Package {
        id: "pondicherry",
        title: "Pondicherry French Quarter",
        country: "Puducherry, India",
        duration_label: "2-3 Days",
        description: "French colonial charm with beautiful beaches",
        price_min: 7000,
        price_max: 14000,
        themes: &[Theme::Cultural, Theme::Beach, Theme::Romantic],
        category: Category::Weekend,
        image: "https://images.pexels.com/photos/3889742/pexels-photo-3889742.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        hero_image: "https://images.pexels.com/photos/3889742/pexels-photo-3889742.jpeg?auto=compress&cs=tinysrgb&w=1200&h=600&fit=crop",
        overview: "Pondicherry, also known as Puducherry, is a unique blend of French colonial heritage and Indian culture. With its charming streets, beautiful beaches, and spiritual atmosphere, it offers a tranquil getaway.",
        highlights: &["French Quarter", "Auroville", "Promenade Beach", "Sri Aurobindo Ashram", "Paradise Beach"],
        best_time: "October to March",
        ideal_for: "Culture Enthusiasts, Spiritual Seekers, Photographers",
        activities: &["Heritage Walks", "Beach Relaxation", "Yoga & Meditation", "Cycling Tours", "French Cuisine"],
        rating: 4.7,
        reviews: 892,
    },
    Package {
        id: "manali",
        title: "Manali Adventure",
        country: "Himachal Pradesh, India",
        duration_label: "4-6 Days",
        description: "Snow-capped mountains and thrilling activities",
        price_min: 15000,
        price_max: 25000,
        themes: &[Theme::Adventure, Theme::Nature, Theme::Romantic],
        category: Category::Domestic,
        image: "https://images.pexels.com/photos/1562058/pexels-photo-1562058.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        hero_image: "https://images.pexels.com/photos/1562058/pexels-photo-1562058.jpeg?auto=compress&cs=tinysrgb&w=1200&h=600&fit=crop",
        overview: "Manali is a high-altitude Himalayan resort town known for its cool climate, snow-capped mountains, and adventure activities. It's a perfect destination for thrill-seekers and nature lovers alike.",
        highlights: &["Rohtang Pass", "Solang Valley", "Hadimba Temple", "Old Manali", "Manu Temple"],
        best_time: "March to June, October to February",
        ideal_for: "Adventure Seekers, Honeymooners, Mountain Lovers",
        activities: &["Paragliding", "River Rafting", "Skiing", "Trekking", "Mountain Biking"],
        rating: 4.9,
        reviews: 1834,
    },
    Package {
        id: "kerala",
        title: "Kerala Backwaters",
        country: "Kerala, India",
        duration_label: "4-6 Days",
        description: "Serene backwaters and lush green landscapes",
        price_min: 18000,
        price_max: 30000,
        themes: &[Theme::Nature, Theme::Spiritual, Theme::Romantic],
        category: Category::Domestic,
        image: "https://images.pexels.com/photos/962464/pexels-photo-962464.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        hero_image: "https://images.pexels.com/photos/962464/pexels-photo-962464.jpeg?auto=compress&cs=tinysrgb&w=1200&h=600&fit=crop",
        overview: "Kerala, known as \"God's Own Country,\" offers serene backwaters, lush green landscapes, and rich cultural heritage. The backwater cruises through palm-fringed canals provide a unique and peaceful experience.",
        highlights: &["Alleppey Backwaters", "Munnar Tea Gardens", "Kochi Fort", "Thekkady Wildlife", "Kovalam Beach"],
        best_time: "September to March",
        ideal_for: "Nature Lovers, Couples, Wellness Seekers",
        activities: &["Houseboat Cruises", "Ayurvedic Treatments", "Wildlife Safari", "Tea Plantation Tours", "Kathakali Shows"],
        rating: 4.8,
        reviews: 1567,
    },
    Package {
        id: "rajasthan",
        title: "Rajasthan Royal Tour",
        country: "Rajasthan, India",
        duration_label: "5-6 Days",
        description: "Palaces, forts, and desert landscapes",
        price_min: 20000,
        price_max: 35000,
        themes: &[Theme::Cultural, Theme::Luxury, Theme::Adventure],
        category: Category::Domestic,
        image: "https://images.pexels.com/photos/1603650/pexels-photo-1603650.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        hero_image: "https://images.pexels.com/photos/1603650/pexels-photo-1603650.jpeg?auto=compress&cs=tinysrgb&w=1200&h=600&fit=crop",
        overview: "Rajasthan, the \"Land of Kings,\" showcases India's royal heritage through magnificent palaces, imposing forts, and vibrant culture. Experience the grandeur of maharajas and the beauty of the Thar Desert.",
        highlights: &["Amber Fort", "City Palace Udaipur", "Jaisalmer Fort", "Mehrangarh Fort", "Lake Pichola"],
        best_time: "October to March",
        ideal_for: "History Buffs, Culture Enthusiasts, Luxury Travelers",
        activities: &["Palace Tours", "Camel Safari", "Desert Camping", "Folk Dance Shows", "Heritage Walks"],
        rating: 4.7,
        reviews: 2341,
    },
    Package {
        id: "bali",
        title: "Bali Indonesia",
        country: "Indonesia",
        duration_label: "7-10 Days",
        description: "Tropical paradise with temples and rice terraces",
        price_min: 60000,
        price_max: 100000,
        themes: &[Theme::Beach, Theme::Spiritual, Theme::Adventure, Theme::Romantic],
        category: Category::International,
        image: "https://images.pexels.com/photos/2474690/pexels-photo-2474690.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        hero_image: "https://images.pexels.com/photos/2474690/pexels-photo-2474690.jpeg?auto=compress&cs=tinysrgb&w=1200&h=600&fit=crop",
        overview: "Bali is a tropical paradise known for its stunning beaches, ancient temples, lush rice terraces, and vibrant culture. This Indonesian island offers the perfect blend of relaxation, adventure, and spiritual experiences.",
        highlights: &["Tanah Lot Temple", "Ubud Rice Terraces", "Mount Batur", "Seminyak Beach", "Uluwatu Temple"],
        best_time: "April to October",
        ideal_for: "Beach Lovers, Spiritual Seekers, Adventure Enthusiasts",
        activities: &["Temple Hopping", "Volcano Trekking", "Surfing", "Yoga Retreats", "Cultural Tours"],
        rating: 4.9,
        reviews: 3456,
    },
    Package {
        id: "singapore",
        title: "Singapore City",
        country: "Singapore",
        duration_label: "7-8 Days",
        description: "Modern cityscape with gardens and cultural diversity",
        price_min: 80000,
        price_max: 120000,
        themes: &[Theme::Urban, Theme::Cultural, Theme::Luxury],
        category: Category::International,
        image: "https://images.pexels.com/photos/2044434/pexels-photo-2044434.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        hero_image: "https://images.pexels.com/photos/2044434/pexels-photo-2044434.jpeg?auto=compress&cs=tinysrgb&w=1200&h=600&fit=crop",
        overview: "Singapore is a modern city-state that seamlessly blends cultures, cuisines, and attractions. From futuristic gardens to historic neighborhoods, Singapore offers world-class experiences in a compact setting.",
        highlights: &["Gardens by the Bay", "Marina Bay Sands", "Sentosa Island", "Chinatown", "Universal Studios"],
        best_time: "February to April",
        ideal_for: "Families, Foodies, Urban Explorers",
        activities: &["City Tours", "Theme Parks", "Shopping", "Food Tours", "Night Safari"],
        rating: 4.6,
        reviews: 2789,
    },
    Package {
        id: "paris",
        title: "Paris Romance",
        country: "France",
        duration_label: "8-10 Days",
        description: "City of light with iconic landmarks and cuisine",
        price_min: 150000,
        price_max: 250000,
        themes: &[Theme::Romantic, Theme::Cultural, Theme::Luxury, Theme::Urban],
        category: Category::International,
        image: "https://images.pexels.com/photos/161853/eiffel-tower-paris-france-tower-161853.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        hero_image: "https://images.pexels.com/photos/161853/eiffel-tower-paris-france-tower-161853.jpeg?auto=compress&cs=tinysrgb&w=1200&h=600&fit=crop",
        overview: "Paris, the \"City of Light,\" is synonymous with romance, art, and culture. From iconic landmarks to charming cafés, Paris offers an unforgettable experience filled with history, cuisine, and timeless beauty.",
        highlights: &["Eiffel Tower", "Louvre Museum", "Notre-Dame Cathedral", "Champs-Élysées", "Montmartre"],
        best_time: "April to June, September to November",
        ideal_for: "Couples, Art Lovers, Culture Enthusiasts",
        activities: &["Museum Tours", "Seine River Cruise", "Wine Tasting", "Shopping", "Café Culture"],
        rating: 4.8,
        reviews: 4567,
    },
];

/// Every package in catalog order
pub fn all() -> &'static [Package] {
    &PACKAGES
}

/// Look up a package by its identifier
pub fn find(id: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|package| package.id == id)
}

/// Packages authored under the given category, in catalog order
pub fn in_category(category: Category) -> Vec<&'static Package> {
    PACKAGES
        .iter()
        .filter(|package| package.category == category)
        .collect()
}

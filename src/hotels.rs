//! Mock hotel catalog
//!
//! Hotel lookup is backed by curated mock data rather than a real booking
//! upstream. Results have a deterministic shape: a fixed five-record list
//! per known destination (generic fallback otherwise), prices derived
//! from star rating and budget multiplier, and a fresh opaque id per
//! record per call. The randomness source is injectable so tests can
//! assert deterministic output.

use crate::config::HotelsConfig;
use crate::error::{Result, WayfarerError};
use crate::trip::BudgetTier;

use async_trait::async_trait;
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Nightly base price per hotel star
const BASE_PRICE_PER_STAR: f64 = 40.0;

/// Length of the opaque record id
const RECORD_ID_LEN: usize = 8;

/// A hotel search result
///
/// Records are ephemeral: regenerated on every request, with ids that do
/// not persist across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    /// Opaque token, unique within one response
    pub id: String,
    pub name: String,
    /// Guest rating, 0-5
    pub rating: f32,
    /// Star class, 3-5
    pub stars: u8,
    pub location: String,
    /// Nightly price in `currency`
    pub price: u32,
    /// ISO currency code
    pub currency: String,
    /// Illustrative image URL
    pub image: String,
    /// Deep link into the booking site
    pub booking_url: String,
}

/// Parameters for a hotel lookup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelQuery {
    pub destination: String,
    /// Check-in date as supplied by the client; presence-checked only
    pub check_in: String,
    /// Check-out date as supplied by the client; presence-checked only
    pub check_out: String,
    #[serde(default)]
    pub budget: BudgetTier,
}

/// Source of hotel records
///
/// The session store depends on this trait rather than the concrete
/// catalog so tests can substitute failing or canned lookups.
#[async_trait]
pub trait HotelSource: Send + Sync {
    /// Look up hotels for a query
    async fn lookup(&self, query: &HotelQuery) -> Result<Vec<HotelRecord>>;
}

/// Base data for one curated hotel
struct BaseHotel {
    name: &'static str,
    rating: f32,
    stars: u8,
    location: &'static str,
}

static PARIS_HOTELS: [BaseHotel; 5] = [
    BaseHotel {
        name: "Grand Hôtel du Palais Royal",
        rating: 4.8,
        stars: 5,
        location: "Le Marais",
    },
    BaseHotel {
        name: "Hôtel Le Relais Montmartre",
        rating: 4.5,
        stars: 4,
        location: "Montmartre",
    },
    BaseHotel {
        name: "Citadines Tour Eiffel Paris",
        rating: 4.2,
        stars: 3,
        location: "Eiffel Tower",
    },
    BaseHotel {
        name: "Hôtel Atmosphères",
        rating: 4.6,
        stars: 4,
        location: "Latin Quarter",
    },
    BaseHotel {
        name: "ibis Paris Bastille Opéra",
        rating: 4.0,
        stars: 3,
        location: "Bastille",
    },
];

static TOKYO_HOTELS: [BaseHotel; 5] = [
    BaseHotel {
        name: "Park Hyatt Tokyo",
        rating: 4.9,
        stars: 5,
        location: "Shinjuku",
    },
    BaseHotel {
        name: "Hotel Ryumeikan Ochanomizu Honten",
        rating: 4.7,
        stars: 4,
        location: "Tokyo Station",
    },
    BaseHotel {
        name: "Mitsui Garden Hotel Ginza Premier",
        rating: 4.5,
        stars: 4,
        location: "Ginza",
    },
    BaseHotel {
        name: "Shibuya Stream Excel Hotel Tokyu",
        rating: 4.4,
        stars: 4,
        location: "Shibuya",
    },
    BaseHotel {
        name: "Richmond Hotel Premier Asakusa International",
        rating: 4.3,
        stars: 3,
        location: "Asakusa",
    },
];

static NEW_YORK_HOTELS: [BaseHotel; 5] = [
    BaseHotel {
        name: "The Langham, New York, Fifth Avenue",
        rating: 4.8,
        stars: 5,
        location: "Midtown",
    },
    BaseHotel {
        name: "Arlo SoHo",
        rating: 4.4,
        stars: 4,
        location: "SoHo",
    },
    BaseHotel {
        name: "The William Vale",
        rating: 4.7,
        stars: 5,
        location: "Williamsburg",
    },
    BaseHotel {
        name: "citizenM New York Bowery",
        rating: 4.5,
        stars: 4,
        location: "Lower East Side",
    },
    BaseHotel {
        name: "MOXY NYC Times Square",
        rating: 4.2,
        stars: 3,
        location: "Times Square",
    },
];

static DEFAULT_HOTELS: [BaseHotel; 5] = [
    BaseHotel {
        name: "Grand Central Hotel",
        rating: 4.7,
        stars: 5,
        location: "City Center",
    },
    BaseHotel {
        name: "Harbor View Inn",
        rating: 4.4,
        stars: 4,
        location: "Waterfront",
    },
    BaseHotel {
        name: "Urban Boutique Hotel",
        rating: 4.2,
        stars: 3,
        location: "Downtown",
    },
    BaseHotel {
        name: "Park Plaza Resort",
        rating: 4.6,
        stars: 4,
        location: "Park District",
    },
    BaseHotel {
        name: "Sunset Beach Hotel",
        rating: 4.3,
        stars: 3,
        location: "Coastal Area",
    },
];

/// Curated list for a destination, or the generic fallback
fn base_hotels_for(destination: &str) -> &'static [BaseHotel; 5] {
    match destination {
        "Paris" => &PARIS_HOTELS,
        "Tokyo" => &TOKYO_HOTELS,
        "New York" => &NEW_YORK_HOTELS,
        _ => &DEFAULT_HOTELS,
    }
}

/// Mock hotel lookup backed by curated data
///
/// # Examples
///
/// ```
/// use wayfarer::config::HotelsConfig;
/// use wayfarer::hotels::{HotelCatalog, HotelQuery};
/// use wayfarer::trip::BudgetTier;
///
/// let catalog = HotelCatalog::new(&HotelsConfig::default());
/// let query = HotelQuery {
///     destination: "Paris".to_string(),
///     check_in: "2026-06-01".to_string(),
///     check_out: "2026-06-05".to_string(),
///     budget: BudgetTier::Luxury,
/// };
/// let hotels = catalog.lookup_with_rng(&query, &mut rand::rng()).unwrap();
/// assert_eq!(hotels.len(), 5);
/// ```
pub struct HotelCatalog {
    affiliate_id: String,
    delay: Duration,
}

impl HotelCatalog {
    /// Creates a catalog from configuration
    pub fn new(config: &HotelsConfig) -> Self {
        Self {
            affiliate_id: config.affiliate_id.clone(),
            delay: Duration::from_millis(config.delay_ms),
        }
    }

    /// Look up hotels with an explicit randomness source
    ///
    /// Record ids come from `rng`; everything else is a pure function of
    /// the query. Seed the rng to make the full result deterministic.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::Validation` when the destination or either
    /// date is missing.
    pub fn lookup_with_rng<R: Rng>(
        &self,
        query: &HotelQuery,
        rng: &mut R,
    ) -> Result<Vec<HotelRecord>> {
        if query.destination.trim().is_empty()
            || query.check_in.trim().is_empty()
            || query.check_out.trim().is_empty()
        {
            return Err(
                WayfarerError::Validation("Missing required parameters".to_string()).into(),
            );
        }

        let multiplier = query.budget.multiplier();
        tracing::debug!(
            "Hotel lookup: destination={}, budget={} (multiplier {})",
            query.destination,
            query.budget,
            multiplier
        );

        let records = base_hotels_for(&query.destination)
            .iter()
            .map(|base| {
                let price = (f64::from(base.stars) * BASE_PRICE_PER_STAR * multiplier).round();
                HotelRecord {
                    id: record_id(rng),
                    name: base.name.to_string(),
                    rating: base.rating,
                    stars: base.stars,
                    location: base.location.to_string(),
                    price: price as u32,
                    currency: "USD".to_string(),
                    image: image_url(base.name),
                    booking_url: self.booking_url(&query.destination),
                }
            })
            .collect();

        Ok(records)
    }

    /// Deep link into the booking site for a destination
    fn booking_url(&self, destination: &str) -> String {
        match Url::parse_with_params(
            "https://www.booking.com/hotel/search.html",
            &[("ss", destination), ("affiliate_id", &self.affiliate_id)],
        ) {
            Ok(url) => url.into(),
            // The base URL is a constant and always parses; keep a usable
            // link even if the params are somehow unencodable.
            Err(_) => "https://www.booking.com/hotel/search.html".to_string(),
        }
    }
}

#[async_trait]
impl HotelSource for HotelCatalog {
    async fn lookup(&self, query: &HotelQuery) -> Result<Vec<HotelRecord>> {
        // Emulate a real upstream's latency when configured
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.lookup_with_rng(query, &mut rand::rng())
    }
}

/// Fresh opaque id for one record
fn record_id<R: Rng>(rng: &mut R) -> String {
    std::iter::repeat_with(|| rng.sample(Alphanumeric) as char)
        .take(RECORD_ID_LEN)
        .collect()
}

/// Illustrative image URL keyed to the hotel name
fn image_url(name: &str) -> String {
    let compact: String = name.split_whitespace().collect();
    format!("https://source.unsplash.com/random/300x200/?hotel,{compact}")
}

// src/domain/estate.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a listing. Stored in the database by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstateType {
    Flat,
    House,
    Duplex,
    Penthouse,
    Loft,
}

impl EstateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstateType::Flat => "Flat",
            EstateType::House => "House",
            EstateType::Duplex => "Duplex",
            EstateType::Penthouse => "Penthouse",
            EstateType::Loft => "Loft",
        }
    }
}

impl fmt::Display for EstateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EstateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Flat" => Ok(EstateType::Flat),
            "House" => Ok(EstateType::House),
            "Duplex" => Ok(EstateType::Duplex),
            "Penthouse" => Ok(EstateType::Penthouse),
            "Loft" => Ok(EstateType::Loft),
            other => Err(format!("unknown estate type '{other}'")),
        }
    }
}

/// One photo of a listing: a caption shown over the image and the image URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub caption: String,
    pub uri: String,
}

impl Picture {
    pub fn new(caption: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            uri: uri.into(),
        }
    }
}

/// A property listing as stored in the `estates` table.
///
/// `id` is assigned by the store on insert; records built in memory carry `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Estate {
    pub id: i64,
    pub district: String,
    pub estate_type: EstateType,
    pub description: String,
    /// Whole US dollars.
    pub price: i64,
    pub surface: f64,
    pub number_of_rooms: u32,
    pub number_of_bathrooms: u32,
    pub number_of_bedrooms: u32,
    pub address: String,
    pub pictures: Vec<Picture>,
}

impl Default for Estate {
    fn default() -> Self {
        Self {
            id: 0,
            district: String::new(),
            estate_type: EstateType::Flat,
            description: String::new(),
            price: 0,
            surface: 0.0,
            number_of_rooms: 0,
            number_of_bathrooms: 0,
            number_of_bedrooms: 0,
            address: String::new(),
            pictures: Vec::new(),
        }
    }
}

impl Estate {
    /// First picture, used as the list thumbnail. `None` when the listing has
    /// no pictures, which callers must handle before rendering.
    pub fn thumbnail(&self) -> Option<&Picture> {
        self.pictures.first()
    }

    /// Price in USD with thousands separators and no fraction digits.
    pub fn formatted_price(&self) -> String {
        format_usd(self.price)
    }
}

/// Formats whole dollars as `$1,234,567` (`-$1,234` for negatives).
pub fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

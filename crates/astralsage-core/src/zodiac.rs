//! Sun-sign resolution from a calendar date.
//!
//! Signs are approximated by fixed `MM-DD` upper boundaries. Because every
//! boundary has the same width, plain string comparison matches calendar order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve western zodiac signs. Order: Aries=0 .. Pisces=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Exact, case-sensitive match on the capitalized sign name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Upper boundary (inclusive) of each sign, ascending. Dec 23–31 wraps to Capricorn.
const SIGN_BOUNDARIES: &[(&str, ZodiacSign)] = &[
    ("01-20", ZodiacSign::Capricorn),
    ("02-19", ZodiacSign::Aquarius),
    ("03-20", ZodiacSign::Pisces),
    ("04-20", ZodiacSign::Aries),
    ("05-21", ZodiacSign::Taurus),
    ("06-21", ZodiacSign::Gemini),
    ("07-22", ZodiacSign::Cancer),
    ("08-23", ZodiacSign::Leo),
    ("09-23", ZodiacSign::Virgo),
    ("10-23", ZodiacSign::Libra),
    ("11-22", ZodiacSign::Scorpio),
    ("12-22", ZodiacSign::Sagittarius),
    ("12-31", ZodiacSign::Capricorn),
];

/// Resolves the sun sign for an ISO `YYYY-MM-DD` birth date.
///
/// Input is not validated: the `MM-DD` part is whatever follows the first five
/// bytes, and a string that sorts after every boundary resolves to Aries.
pub fn sun_sign(birth_date: &str) -> ZodiacSign {
    let month_day = birth_date.get(5..).unwrap_or("");
    SIGN_BOUNDARIES
        .iter()
        .find(|(end, _)| month_day <= *end)
        .map(|(_, sign)| *sign)
        .unwrap_or(ZodiacSign::Aries)
}

/// True when `birth_date` has the `YYYY-MM-DD` digit layout (no calendar check).
pub fn looks_like_iso_date(birth_date: &str) -> bool {
    let b = birth_date.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

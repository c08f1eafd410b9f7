//! Static content tables keyed by sign name.
//!
//! Lookups take the raw sign string from the request. Unknown names never fail:
//! planet/color/number fall back to a generic value, while horoscope content
//! falls back to the Aries entry.

use crate::zodiac::ZodiacSign;

pub const DEFAULT_RULING_PLANET: &str = "Sun";
pub const DEFAULT_LUCKY_COLOR: &str = "Blue";
pub const DEFAULT_LUCKY_NUMBER: u8 = 7;

/// Headline plus three `"<label>: <text>"` bullets for one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoroscopeContent {
    pub headline: &'static str,
    pub bullets: [&'static str; 3],
}

pub fn ruling_planet(sign: &str) -> &'static str {
    ZodiacSign::from_name(sign)
        .map(|s| match s {
            ZodiacSign::Aries => "Mars",
            ZodiacSign::Taurus => "Venus",
            ZodiacSign::Gemini => "Mercury",
            ZodiacSign::Cancer => "Moon",
            ZodiacSign::Leo => "Sun",
            ZodiacSign::Virgo => "Mercury",
            ZodiacSign::Libra => "Venus",
            ZodiacSign::Scorpio => "Pluto",
            ZodiacSign::Sagittarius => "Jupiter",
            ZodiacSign::Capricorn => "Saturn",
            ZodiacSign::Aquarius => "Uranus",
            ZodiacSign::Pisces => "Neptune",
        })
        .unwrap_or(DEFAULT_RULING_PLANET)
}

pub fn lucky_color(sign: &str) -> &'static str {
    ZodiacSign::from_name(sign)
        .map(|s| match s {
            ZodiacSign::Aries => "Red",
            ZodiacSign::Taurus => "Green",
            ZodiacSign::Gemini => "Yellow",
            ZodiacSign::Cancer => "Silver",
            ZodiacSign::Leo => "Gold",
            ZodiacSign::Virgo => "Navy Blue",
            ZodiacSign::Libra => "Pink",
            ZodiacSign::Scorpio => "Maroon",
            ZodiacSign::Sagittarius => "Purple",
            ZodiacSign::Capricorn => "Brown",
            ZodiacSign::Aquarius => "Electric Blue",
            ZodiacSign::Pisces => "Sea Green",
        })
        .unwrap_or(DEFAULT_LUCKY_COLOR)
}

pub fn lucky_number(sign: &str) -> u8 {
    ZodiacSign::from_name(sign)
        .map(|s| match s {
            ZodiacSign::Aries => 9,
            ZodiacSign::Taurus => 6,
            ZodiacSign::Gemini => 5,
            ZodiacSign::Cancer => 2,
            ZodiacSign::Leo => 1,
            ZodiacSign::Virgo => 5,
            ZodiacSign::Libra => 6,
            ZodiacSign::Scorpio => 8,
            ZodiacSign::Sagittarius => 3,
            ZodiacSign::Capricorn => 4,
            ZodiacSign::Aquarius => 7,
            ZodiacSign::Pisces => 7,
        })
        .unwrap_or(DEFAULT_LUCKY_NUMBER)
}

/// Horoscope content for `sign`; unrecognized names get the Aries block.
pub fn horoscope(sign: &str) -> HoroscopeContent {
    horoscope_for(ZodiacSign::from_name(sign).unwrap_or(ZodiacSign::Aries))
}

pub fn horoscope_for(sign: ZodiacSign) -> HoroscopeContent {
    let (headline, bullets) = match sign {
        ZodiacSign::Aries => (
            "Bold moves lead to breakthrough moments! 🔥",
            [
                "Career: Take initiative in group projects",
                "Social: Reconnect with an old friend",
                "Self: Channel energy into sports or exercise",
            ],
        ),
        ZodiacSign::Taurus => (
            "Steady progress brings sweet rewards! 🌿",
            [
                "Studies: Focus on one subject deeply today",
                "Money: Good day for saving, not spending",
                "Self: Enjoy some comfort food guilt-free",
            ],
        ),
        ZodiacSign::Gemini => (
            "Your words have extra power today! 💬",
            [
                "Communication: Express your ideas clearly",
                "Learning: Pick up that book you've been eyeing",
                "Social: Great day for meaningful conversations",
            ],
        ),
        ZodiacSign::Cancer => (
            "Home and heart take center stage! 🏠",
            [
                "Family: Quality time creates lasting memories",
                "Creative: Try cooking or crafting",
                "Emotional: Journal your feelings tonight",
            ],
        ),
        ZodiacSign::Leo => (
            "Time to shine and inspire others! ✨",
            [
                "Leadership: Others look to you for guidance",
                "Creative: Your artistic side is strong today",
                "Social: You're the life of the party",
            ],
        ),
        ZodiacSign::Virgo => (
            "Organization leads to opportunities! 📚",
            [
                "Studies: Perfect day for detailed work",
                "Health: Start a new wellness habit",
                "Practical: Organize your space, clear your mind",
            ],
        ),
        ZodiacSign::Libra => (
            "Balance and beauty guide your day! ⚖️",
            [
                "Relationships: Resolve any lingering conflicts",
                "Artistic: Appreciate beauty around you",
                "Decision: Trust your sense of fairness",
            ],
        ),
        ZodiacSign::Scorpio => (
            "Deep insights surface today! 🦂",
            [
                "Research: Dig deeper into topics that fascinate you",
                "Intuition: Trust your gut feelings",
                "Transformation: Let go of what no longer serves you",
            ],
        ),
        ZodiacSign::Sagittarius => (
            "Adventure calls your name! 🏹",
            [
                "Learning: Explore new ideas and cultures",
                "Social: Plan something fun with friends",
                "Growth: Step outside your comfort zone",
            ],
        ),
        ZodiacSign::Capricorn => (
            "Hard work pays off today! 🏔️",
            [
                "Goals: Make progress on long-term plans",
                "Responsibility: Others count on you",
                "Career: Leadership qualities shine through",
            ],
        ),
        ZodiacSign::Aquarius => (
            "Innovation and friendship align! 💡",
            [
                "Ideas: Your unique perspective is valuable",
                "Technology: Good day for tech projects",
                "Community: Connect with like-minded people",
            ],
        ),
        ZodiacSign::Pisces => (
            "Creativity and intuition flow freely! 🌊",
            [
                "Artistic: Express yourself through art or music",
                "Dreams: Pay attention to nighttime messages",
                "Compassion: Help someone who needs it",
            ],
        ),
    };
    HoroscopeContent { headline, bullets }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_signs_resolve() {
        assert_eq!(ruling_planet("Scorpio"), "Pluto");
        assert_eq!(lucky_color("Virgo"), "Navy Blue");
        assert_eq!(lucky_number("Leo"), 1);
    }

    #[test]
    fn unknown_signs_use_generic_defaults() {
        assert_eq!(ruling_planet("Ophiuchus"), "Sun");
        assert_eq!(lucky_color("Ophiuchus"), "Blue");
        assert_eq!(lucky_number("Ophiuchus"), 7);
        assert_eq!(ruling_planet("aries"), "Sun");
    }

    #[test]
    fn unknown_horoscope_falls_back_to_aries() {
        assert_eq!(horoscope("Unknown"), horoscope_for(ZodiacSign::Aries));
        assert_ne!(horoscope("Pisces"), horoscope_for(ZodiacSign::Aries));
    }

    #[test]
    fn every_bullet_has_a_label() {
        for sign in ZodiacSign::ALL {
            for bullet in horoscope_for(sign).bullets {
                assert!(bullet.contains(':'), "{}: {}", sign, bullet);
            }
        }
    }
}

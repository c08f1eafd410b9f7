//! Deterministic mock readings used whenever the model gateway yields nothing.
//!
//! Apart from `request_id` and `meta.generated_at`, every field is a pure
//! function of the request. The content is illustrative, not computed.

use crate::reading::{fields, new_request_id, Fields, Reading, ReadingMeta, Section};
use crate::request::{
    CompatibilityRequest, NatalChartRequest, Period, QuickHoroscopeRequest, ReadingRequest,
    TransitForecastRequest,
};
use crate::tables;
use crate::zodiac::sun_sign;
use serde_json::{json, Value};

pub const NATAL_CONFIDENCE_KNOWN_TIME: f64 = 0.85;
pub const NATAL_CONFIDENCE_UNKNOWN_TIME: f64 = 0.65;
pub const HOROSCOPE_CONFIDENCE: f64 = 0.75;
pub const COMPATIBILITY_CONFIDENCE: f64 = 0.72;

const BIRTH_TIME_REQUIRED: &str = "Unknown (birth time required)";

/// Mock reading for any request kind.
pub fn generate(request: &ReadingRequest) -> Reading {
    match request {
        ReadingRequest::NatalChart(r) => natal_chart(r),
        ReadingRequest::QuickHoroscope(r) => quick_horoscope(r),
        ReadingRequest::Compatibility(r) => compatibility(r),
        ReadingRequest::TransitForecast(r) => transit_forecast(r),
    }
}

pub fn natal_chart(request: &NatalChartRequest) -> Reading {
    let sun = sun_sign(&request.birth_date);
    let time_known = request.birth_time_known();

    let name = request
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or("Anonymous");

    let (moon, ascendant) = if time_known {
        ("Libra 8°", "Gemini 12°")
    } else {
        (BIRTH_TIME_REQUIRED, BIRTH_TIME_REQUIRED)
    };

    let notes = if time_known {
        "exact time provided"
    } else {
        "time unknown - approximate reading"
    };

    let (confidence_score, warnings) = if time_known {
        (NATAL_CONFIDENCE_KNOWN_TIME, Vec::new())
    } else {
        (
            NATAL_CONFIDENCE_UNKNOWN_TIME,
            vec![
                "Birth time unknown - Moon and Ascendant calculations are approximate".to_string(),
            ],
        )
    };

    Reading {
        meta: ReadingMeta::now(),
        request_id: new_request_id(),
        input_summary: fields(json!({
            "name": name,
            "birth_date": request.birth_date,
            "birth_time": request.birth_time,
            "birth_place": {
                "city": request.birth_place.city,
                "country": request.birth_place.country,
            },
            "notes": notes,
        })),
        analysis: fields(json!({
            "sun": format!("{} 15°", sun),
            "moon": moon,
            "ascendant": ascendant,
            "dominant_planets": ["Venus", "Mercury"],
            "major_aspects": [
                { "type": "conjunction", "between": "Sun-Mercury", "orb": "2.5°" },
                { "type": "trine", "between": "Moon-Jupiter", "orb": "3.1°" },
                { "type": "square", "between": "Mars-Saturn", "orb": "1.8°" },
            ],
        })),
        interpretation: format!(
            "As a {}, you possess natural determination and a practical approach to life. \
             Your personality blends creativity with groundedness. You excel when you have clear \
             goals and steady progress. Your challenge is balancing ambition with patience. The \
             cosmic energies suggest this is a great time for learning and personal growth!",
            sun
        ),
        sections: vec![
            Section::new(
                "Personality",
                format!(
                    "Your {} Sun gives you a strong core identity. You're known for being reliable, \
                     determined, and having a good sense of aesthetics. Friends see you as someone \
                     who follows through on commitments.",
                    sun
                ),
            ),
            Section::new(
                "Career & Studies",
                "Your analytical mind and creative spark make you well-suited for subjects that \
                 blend logic with creativity. Consider exploring technology, design, or \
                 communication fields. Group projects bring out your best!",
            ),
            Section::new(
                "Relationships",
                "You value deep, meaningful connections over superficial friendships. You're loyal \
                 and supportive, but need intellectual stimulation. Communication is your love \
                 language.",
            ),
            Section::new(
                "Growth Areas",
                "Practice flexibility when plans change. Your perfectionist tendencies can \
                 sometimes slow you down. Remember: done is better than perfect!",
            ),
        ],
        remedies: strings(&[
            "Start a morning routine: 5 minutes of planning your day's priorities",
            "Try a new creative hobby this month - art, music, or writing",
            "Practice active listening: ask 2 questions before sharing your opinion",
            "Take 3 deep breaths before reacting to stressful situations",
        ]),
        confidence_score,
        warnings: Some(warnings),
        extra: Fields::new(),
    }
}

pub fn quick_horoscope(request: &QuickHoroscopeRequest) -> Reading {
    let sign = request.sign.as_str();
    let content = tables::horoscope(sign);

    Reading {
        meta: ReadingMeta::now(),
        request_id: new_request_id(),
        input_summary: fields(json!({
            "sign": sign,
            "period": request.period.as_str(),
        })),
        analysis: fields(json!({
            "sign": sign,
            "period": request.period.as_str(),
            "ruling_planet": tables::ruling_planet(sign),
        })),
        interpretation: content.headline.to_string(),
        sections: content.bullets.iter().map(|b| labelled_section(b)).collect(),
        remedies: vec![
            format!("Lucky color: {}", tables::lucky_color(sign)),
            format!("Lucky number: {}", tables::lucky_number(sign)),
            "Best time for important tasks: Morning hours".to_string(),
        ],
        confidence_score: HOROSCOPE_CONFIDENCE,
        warnings: Some(Vec::new()),
        extra: Fields::new(),
    }
}

/// Always describes a Taurus/Cancer pairing; the birth dates are not used.
pub fn compatibility(request: &CompatibilityRequest) -> Reading {
    let focus = request.focus.as_str();

    Reading {
        meta: ReadingMeta::now(),
        request_id: new_request_id(),
        input_summary: fields(json!({
            "person_a": display_name(request.person_a_name.as_deref(), "Person A"),
            "person_b": display_name(request.person_b_name.as_deref(), "Person B"),
            "focus": focus,
        })),
        analysis: fields(json!({
            "person_a_sun": "Taurus",
            "person_b_sun": "Cancer",
            "compatibility_score": 78,
            "element_harmony": "Earth + Water = Fertile Ground",
        })),
        interpretation: format!(
            "This {} connection shows strong potential! Both individuals value loyalty and \
             emotional security. The combination creates a nurturing dynamic where each person's \
             strengths complement the other's needs.",
            focus
        ),
        sections: vec![
            Section::new(
                "Top 3 Strengths",
                "1. Deep emotional understanding\n2. Shared values of loyalty and commitment\n\
                 3. Complementary communication styles",
            ),
            Section::new(
                "Potential Friction Points",
                "1. Different approaches to change (one prefers stability, other seeks growth)\n\
                 2. Communication timing - one processes feelings slowly\n\
                 3. Social energy levels may differ",
            ),
            Section::new(
                "Making It Work",
                "Schedule regular check-ins to share feelings. Respect each other's pace. \
                 Celebrate differences as strengths, not obstacles.",
            ),
        ],
        remedies: strings(&[
            "Practice patience: allow each other processing time",
            "Create shared rituals: weekly hangouts or activities",
            "Learn each other's love languages",
            "Celebrate small wins together",
        ]),
        confidence_score: COMPATIBILITY_CONFIDENCE,
        warnings: Some(vec![
            "Birth times unknown - analysis based on Sun signs only".to_string(),
        ]),
        extra: Fields::new(),
    }
}

/// Today's horoscope for the natal sun sign, re-labelled with the forecast's
/// own range and focus. No transits are computed.
pub fn transit_forecast(request: &TransitForecastRequest) -> Reading {
    let sign = sun_sign(&request.birth_date);
    let mut reading = quick_horoscope(&QuickHoroscopeRequest {
        sign: sign.name().to_string(),
        period: Period::Today,
    });
    reading
        .input_summary
        .insert("focus".into(), Value::from(request.focus.as_str()));
    reading
        .input_summary
        .insert("range".into(), Value::from(request.range.as_str()));
    reading
}

/// Splits `"<label>: <text>"` at the first colon only.
fn labelled_section(bullet: &str) -> Section {
    match bullet.split_once(':') {
        Some((title, content)) => Section::new(title, content.trim_start()),
        None => Section::new(bullet, ""),
    }
}

fn display_name<'a>(name: Option<&'a str>, fallback: &'a str) -> &'a str {
    name.filter(|n| !n.trim().is_empty()).unwrap_or(fallback)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{BirthPlace, ForecastFocus, ForecastRange, RelationshipFocus, Tone};

    fn natal(birth_time: &str) -> NatalChartRequest {
        NatalChartRequest {
            name: Some("Maya".into()),
            birth_date: "2006-05-02".into(),
            birth_time: birth_time.into(),
            birth_timezone: "+05:30".into(),
            birth_place: BirthPlace::new("Mumbai", "India"),
            tone: Tone::Mystical,
        }
    }

    fn compat(a: Option<&str>, b: Option<&str>) -> CompatibilityRequest {
        CompatibilityRequest {
            person_a_name: a.map(String::from),
            person_a_birth_date: "2001-01-01".into(),
            person_a_birth_time: "unknown".into(),
            person_a_birth_place: BirthPlace::new("Oslo", "Norway"),
            person_b_name: b.map(String::from),
            person_b_birth_date: "2002-08-30".into(),
            person_b_birth_time: "08:15".into(),
            person_b_birth_place: BirthPlace::new("Lima", "Peru"),
            focus: RelationshipFocus::Work,
        }
    }

    #[test]
    fn bullet_splits_at_first_colon() {
        let s = labelled_section("Career: Take initiative in group projects");
        assert_eq!(s.title, "Career");
        assert_eq!(s.content, "Take initiative in group projects");

        let s = labelled_section("Plan: Meet at 10:30 sharp");
        assert_eq!(s.title, "Plan");
        assert_eq!(s.content, "Meet at 10:30 sharp");

        let s = labelled_section("No label here");
        assert_eq!(s.title, "No label here");
        assert_eq!(s.content, "");
    }

    #[test]
    fn natal_unknown_time_lowers_confidence() {
        let r = natal_chart(&natal("unknown"));
        assert_eq!(r.confidence_score, 0.65);
        assert_eq!(r.warnings().len(), 1);
        assert_eq!(r.analysis["moon"], BIRTH_TIME_REQUIRED);
        assert_eq!(r.analysis["ascendant"], BIRTH_TIME_REQUIRED);
        assert_eq!(r.input_summary["notes"], "time unknown - approximate reading");
    }

    #[test]
    fn natal_known_time_has_no_warnings() {
        let r = natal_chart(&natal("14:45"));
        assert_eq!(r.confidence_score, 0.85);
        assert!(r.warnings().is_empty());
        assert_eq!(r.analysis["moon"], "Libra 8°");
        assert_eq!(r.analysis["sun"], "Taurus 15°");
        assert!(r.sections[0].content.starts_with("Your Taurus Sun"));
    }

    #[test]
    fn natal_blank_name_is_anonymous() {
        let mut req = natal("unknown");
        req.name = Some("   ".into());
        assert_eq!(natal_chart(&req).input_summary["name"], "Anonymous");
        req.name = None;
        assert_eq!(natal_chart(&req).input_summary["name"], "Anonymous");
    }

    #[test]
    fn horoscope_uses_sign_tables() {
        let r = quick_horoscope(&QuickHoroscopeRequest {
            sign: "Aries".into(),
            period: Period::Tomorrow,
        });
        assert_eq!(r.sections.len(), 3);
        assert_eq!(r.sections[0].title, "Career");
        assert_eq!(r.sections[0].content, "Take initiative in group projects");
        assert_eq!(r.analysis["ruling_planet"], "Mars");
        assert_eq!(r.input_summary["period"], "tomorrow");
        assert_eq!(r.remedies[0], "Lucky color: Red");
        assert_eq!(r.remedies[1], "Lucky number: 9");
        assert_eq!(r.confidence_score, 0.75);
        assert!(r.warnings().is_empty());
    }

    #[test]
    fn unknown_sign_gets_aries_content_with_generic_extras() {
        let r = quick_horoscope(&QuickHoroscopeRequest {
            sign: "Unknown".into(),
            period: Period::Today,
        });
        assert_eq!(r.interpretation, tables::horoscope("Aries").headline);
        assert_eq!(r.input_summary["sign"], "Unknown");
        assert_eq!(r.analysis["ruling_planet"], "Sun");
        assert_eq!(r.remedies[0], "Lucky color: Blue");
        assert_eq!(r.remedies[1], "Lucky number: 7");
    }

    #[test]
    fn compatibility_defaults_blank_names() {
        let r = compatibility(&compat(None, Some("")));
        assert_eq!(r.input_summary["person_a"], "Person A");
        assert_eq!(r.input_summary["person_b"], "Person B");
        assert_eq!(r.input_summary["focus"], "work");
        assert!(r.interpretation.starts_with("This work connection"));
        assert_eq!(r.confidence_score, 0.72);
        assert_eq!(r.warnings().len(), 1);
    }

    #[test]
    fn compatibility_ignores_birth_dates() {
        let r = compatibility(&compat(Some("Ana"), Some("Ben")));
        assert_eq!(r.input_summary["person_a"], "Ana");
        assert_eq!(r.analysis["person_a_sun"], "Taurus");
        assert_eq!(r.analysis["person_b_sun"], "Cancer");
    }

    #[test]
    fn transit_forecast_relabels_horoscope() {
        let r = transit_forecast(&TransitForecastRequest {
            birth_date: "1998-11-05".into(),
            birth_time: "unknown".into(),
            birth_timezone: "+00:00".into(),
            birth_place: BirthPlace::new("Accra", "Ghana"),
            range: ForecastRange::ThreeDay,
            focus: ForecastFocus::Career,
        });
        assert_eq!(r.input_summary["focus"], "career");
        assert_eq!(r.input_summary["range"], "3-day");
        assert_eq!(r.input_summary["sign"], "Scorpio");
        assert_eq!(r.input_summary["period"], "today");
        assert_eq!(r.interpretation, tables::horoscope("Scorpio").headline);
    }

    #[test]
    fn output_is_reproducible_except_id_and_timestamp() {
        let req = ReadingRequest::NatalChart(natal("09:00"));
        let mut a = generate(&req);
        let mut b = generate(&req);
        assert_ne!(a.request_id, b.request_id);
        a.request_id.clear();
        b.request_id.clear();
        a.meta.generated_at = None;
        b.meta.generated_at = None;
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

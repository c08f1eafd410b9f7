//! Instruction text sent to the generative model.

use crate::request::ReadingRequest;

/// Fixed instruction block prepended to every task prompt.
pub const SYSTEM_PROMPT: &str = r#"You are "AstralSage", an expert astrology assistant. Always behave as an informational/entertainment service, not a substitute for professional advice. When given birth data (date, time, place) compute or interpret standard western astrological elements (sun, moon, rising/ascendant, houses, major aspects, transits). When asked for compatibility, compare key placements and explain strengths/risks. When asked for daily/weekly forecasts, use transits relative to natal placements.

Output MUST be valid JSON exactly matching the schema provided. Do not include any extra text outside the JSON. Keep language clear, practical, and give short actionable suggestions called "remedies" (e.g., focus actions, reflection prompts) - avoid medical/legal prescriptions. Provide a confidence_score (0-1). If any required input is missing or invalid, return an error object per schema. If geolocation is approximate or birth time unknown, clearly label interpretations as "approximate".

Follow privacy best practices: never invent precise times/locations. If asked to predict events like death, elections, crimes, or illegal/harmful acts, refuse and instead give general, ethical guidance.

response_schema:
{
  "type":"object",
  "properties":{
    "meta":{"type":"object","properties":{"model_version":{"type":"string"},"generated_at":{"type":"string","format":"date-time"}}},
    "request_id":{"type":"string"},
    "input_summary":{"type":"object"},
    "analysis":{"type":"object"},
    "interpretation":{"type":"string"},
    "sections":{"type":"array","items":{"type":"object","properties":{"title":{"type":"string"},"content":{"type":"string"}},"required":["title","content"]}},
    "remedies":{"type":"array","items":{"type":"string"}},
    "confidence_score":{"type":"number"},
    "warnings":{"type":"array","items":{"type":"string"}}
  },
  "required":["meta","request_id","input_summary","analysis","interpretation","sections","remedies","confidence_score"]
}"#;

/// System block and task prompt, joined the way the model expects them.
pub fn full_prompt(task_prompt: &str) -> String {
    format!("{}\n\n{}", SYSTEM_PROMPT, task_prompt)
}

/// Task-specific prompt embedding `trace_id` and the request fields.
pub fn task_prompt(request: &ReadingRequest, trace_id: &str) -> String {
    match request {
        ReadingRequest::NatalChart(r) => format!(
            r#"Task: natal_chart
request_id: "{trace_id}"

Data:
- name: "{name}"
- birth_date: "{date}"
- birth_time: "{time}"
- birth_timezone: "{tz}"
- birth_place: {{ city: "{city}", country: "{country}" }}
- tone: "{tone}"

Instructions:
1) Summarize input.
2) Compute Sun, Moon, Ascendant (if birth_time known). If time unknown, note limitations.
3) List top 8 placements and 4 major aspects.
4) Provide concise interpretation (max 250 words).
5) Provide 3-4 practical remedies/actions suitable for students.
6) Provide confidence_score.
Return JSON matching schema."#,
            name = r.name.as_deref().unwrap_or(""),
            date = r.birth_date,
            time = r.birth_time,
            tz = r.birth_timezone,
            city = r.birth_place.city,
            country = r.birth_place.country,
            tone = r.tone.as_str(),
        ),
        ReadingRequest::QuickHoroscope(r) => format!(
            r#"Task: quick_horoscope
request_id: "{trace_id}"
Data:
- sign: "{sign}"
- period: "{period}"
- tone: "friendly"

Instructions: Give a 1-line headline + 3 actionable bullets (studies/social/self for students). Keep it fun and positive. Return JSON matching schema."#,
            sign = r.sign,
            period = r.period.as_str(),
        ),
        ReadingRequest::Compatibility(r) => format!(
            r#"Task: compatibility
request_id: "{trace_id}"
Data:
- person_a: {{name: "{a_name}", birth_date: "{a_date}"}}
- person_b: {{name: "{b_name}", birth_date: "{b_date}"}}
- focus: "{focus}"

Instructions: Compare sun signs. Give top 3 strengths, top 3 friction points, 3 practical tips for friendship/teamwork. Keep it appropriate for students. Return JSON."#,
            a_name = r.person_a_name.as_deref().unwrap_or(""),
            a_date = r.person_a_birth_date,
            b_name = r.person_b_name.as_deref().unwrap_or(""),
            b_date = r.person_b_birth_date,
            focus = r.focus.as_str(),
        ),
        ReadingRequest::TransitForecast(r) => format!(
            r#"Task: transit_forecast
request_id: "{trace_id}"
Data:
- birth_date: "{date}"
- birth_time: "{time}"
- range: "{range}"
- focus: "{focus}"

Instructions: Identify relevant transits and give practical guidance for students. Return JSON."#,
            date = r.birth_date,
            time = r.birth_time,
            range = r.range.as_str(),
            focus = r.focus.as_str(),
        ),
    }
}

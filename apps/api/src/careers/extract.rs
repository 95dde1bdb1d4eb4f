//! Decoding provider output into careers.
//!
//! The provider answers in free text that should contain a JSON array. We
//! take the first bracket-balanced array (brackets inside string literals do
//! not count), decode it strictly as `Vec<Career>`, then check shape. Every
//! failure is a `CareerParseError`; callers treat all of them the same way.

use thiserror::Error;

use crate::models::career::Career;

/// Number of careers a recommendation always carries.
pub const CAREERS_PER_RECOMMENDATION: usize = 3;

#[derive(Debug, Error)]
pub enum CareerParseError {
    #[error("no JSON array found in provider output")]
    NoArray,

    #[error("provider output does not match the career schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("expected exactly 3 careers, got {0}")]
    WrongCount(usize),

    #[error("career {index} has an empty '{field}'")]
    EmptyField { index: usize, field: &'static str },
}

/// Returns the first balanced `[...]` slice in `text`, or `None` if the first
/// opening bracket is never closed.
pub fn find_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extracts, decodes and validates exactly three careers from raw provider text.
pub fn parse_careers(raw: &str) -> Result<Vec<Career>, CareerParseError> {
    let array = find_json_array(raw).ok_or(CareerParseError::NoArray)?;
    let careers: Vec<Career> = serde_json::from_str(array)?;
    validate_careers(&careers)?;
    Ok(careers)
}

pub fn validate_careers(careers: &[Career]) -> Result<(), CareerParseError> {
    if careers.len() != CAREERS_PER_RECOMMENDATION {
        return Err(CareerParseError::WrongCount(careers.len()));
    }

    for (index, career) in careers.iter().enumerate() {
        let text_fields = [
            ("name", &career.name),
            ("suitability", &career.suitability),
            ("course", &career.course),
            ("duration", &career.duration),
            ("estimated_cost", &career.estimated_cost),
            ("job_prospects", &career.job_prospects),
            ("starting_salary", &career.starting_salary),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                return Err(CareerParseError::EmptyField { index, field });
            }
        }
        if !has_non_blank(&career.top_colleges) {
            return Err(CareerParseError::EmptyField {
                index,
                field: "top_colleges",
            });
        }
        if !has_non_blank(&career.roadmap) {
            return Err(CareerParseError::EmptyField {
                index,
                field: "roadmap",
            });
        }
    }
    Ok(())
}

fn has_non_blank(items: &[String]) -> bool {
    items.iter().any(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career_json(name: &str) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "suitability": "Good fit for analytical students.",
            "course": "B.Tech",
            "duration": "4 years",
            "estimated_cost": "₹4-8 Lakhs",
            "top_colleges": ["IIT Bombay", "NIT Trichy"],
            "job_prospects": "Strong hiring across IT services.",
            "starting_salary": "₹5-9 LPA",
            "roadmap": ["Clear JEE", "Join B.Tech", "Intern", "Get placed"]
        })
    }

    fn three_careers() -> String {
        serde_json::to_string(&vec![
            career_json("Software Engineering"),
            career_json("Commercial Pilot"),
            career_json("MBBS"),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_json_array_inside_prose() {
        let text = "Here you go:\n[1, [2, 3]] and that's all [ignored]";
        assert_eq!(find_json_array(text), Some("[1, [2, 3]]"));
    }

    #[test]
    fn test_find_json_array_ignores_brackets_in_strings() {
        let text = r#"[{"name": "B.Tech ] CSE", "note": "say \"[hi\""}] trailing"#;
        assert_eq!(
            find_json_array(text),
            Some(r#"[{"name": "B.Tech ] CSE", "note": "say \"[hi\""}]"#)
        );
    }

    #[test]
    fn test_find_json_array_unbalanced_returns_none() {
        assert_eq!(find_json_array("[1, 2"), None);
        assert_eq!(find_json_array("no array here"), None);
    }

    #[test]
    fn test_parse_careers_accepts_fenced_output() {
        let raw = format!("```json\n{}\n```", three_careers());
        let careers = parse_careers(&raw).unwrap();
        assert_eq!(careers.len(), 3);
        assert_eq!(careers[1].name, "Commercial Pilot");
    }

    #[test]
    fn test_parse_careers_rejects_wrong_count() {
        let raw = serde_json::to_string(&vec![career_json("Only One")]).unwrap();
        assert!(matches!(
            parse_careers(&raw),
            Err(CareerParseError::WrongCount(1))
        ));
    }

    #[test]
    fn test_parse_careers_rejects_missing_field() {
        let mut first = career_json("Data Science");
        first.as_object_mut().unwrap().remove("roadmap");
        let raw =
            serde_json::to_string(&vec![first, career_json("B"), career_json("C")]).unwrap();
        assert!(matches!(parse_careers(&raw), Err(CareerParseError::Schema(_))));
    }

    #[test]
    fn test_parse_careers_rejects_numeric_duration() {
        let mut first = career_json("Aviation");
        first["duration"] = serde_json::json!(4);
        let raw =
            serde_json::to_string(&vec![first, career_json("B"), career_json("C")]).unwrap();
        assert!(matches!(parse_careers(&raw), Err(CareerParseError::Schema(_))));
    }

    #[test]
    fn test_parse_careers_rejects_empty_roadmap() {
        let mut last = career_json("Hotel Management");
        last["roadmap"] = serde_json::json!([]);
        let raw =
            serde_json::to_string(&vec![career_json("A"), career_json("B"), last]).unwrap();
        assert!(matches!(
            parse_careers(&raw),
            Err(CareerParseError::EmptyField {
                index: 2,
                field: "roadmap"
            })
        ));
    }

    #[test]
    fn test_parse_careers_no_array() {
        assert!(matches!(
            parse_careers("I cannot help with that."),
            Err(CareerParseError::NoArray)
        ));
    }
}

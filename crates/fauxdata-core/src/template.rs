//! Parsing of template strings into literal, reference and pattern segments.

use crate::error::{Error, Result};

const OPEN: &str = "#{";
const CLOSE: char = '}';

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output as-is.
    Literal(String),
    /// Another key to resolve, already normalized (`Name.firstName` → `name.first_name`).
    Reference(String),
    /// Character-class mask: `#` is a digit, `?` is a letter.
    Pattern(String),
}

/// A template string broken into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `text`, the value stored under `key`.
    pub fn parse(key: &str, text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = text;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after = &rest[start + OPEN.len()..];
            let Some(end) = after.find(CLOSE) else {
                return Err(Error::MalformedTemplate {
                    key: key.to_string(),
                    message: format!("unterminated placeholder in '{text}'"),
                });
            };
            let content = after[..end].trim();
            if content.is_empty() {
                return Err(Error::MalformedTemplate {
                    key: key.to_string(),
                    message: format!("empty placeholder in '{text}'"),
                });
            }
            segments.push(placeholder(key, content)?);
            rest = &after[end + 1..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the template has no placeholders at all.
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Literal(_)))
    }
}

fn placeholder(key: &str, content: &str) -> Result<Segment> {
    if content.chars().all(|c| c == '#' || c == '?') {
        return Ok(Segment::Pattern(content.to_string()));
    }

    let mut parts = Vec::new();
    for part in content.split('.') {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::MalformedTemplate {
                key: key.to_string(),
                message: format!("invalid reference '{content}'"),
            });
        }
        parts.push(snake_case(part));
    }

    let reference = if parts.len() == 1 {
        match key.rsplit_once('.') {
            Some((section, _)) => format!("{section}.{}", parts[0]),
            None => parts[0].clone(),
        }
    } else {
        parts.join(".")
    };
    Ok(Segment::Reference(reference))
}

fn snake_case(part: &str) -> String {
    let mut out = String::with_capacity(part.len() + 4);
    let mut previous_lower = false;
    for c in part.chars() {
        if c.is_ascii_uppercase() {
            if previous_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            previous_lower = false;
        } else {
            previous_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_single_literal() {
        let template = Template::parse("internet.free_email", "gmail.com").expect("parse");
        assert_eq!(
            template.segments(),
            &[Segment::Literal("gmail.com".to_string())]
        );
        assert!(template.is_literal());
    }

    #[test]
    fn splits_references_and_literals() {
        let template =
            Template::parse("name.name", "#{first_name} #{Name.lastName}").expect("parse");
        assert_eq!(
            template.segments(),
            &[
                Segment::Reference("name.first_name".to_string()),
                Segment::Literal(" ".to_string()),
                Segment::Reference("name.last_name".to_string()),
            ]
        );
        assert!(!template.is_literal());
    }

    #[test]
    fn digit_and_letter_runs_are_patterns() {
        let template = Template::parse("internet.avatar", "user#{###}/#{??}.jpg").expect("parse");
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("user".to_string()),
                Segment::Pattern("###".to_string()),
                Segment::Literal("/".to_string()),
                Segment::Pattern("??".to_string()),
                Segment::Literal(".jpg".to_string()),
            ]
        );
    }

    #[test]
    fn bare_hash_outside_braces_stays_literal() {
        let template = Template::parse("lorem.words", "# {x}").expect("parse");
        assert!(template.is_literal());
    }

    #[test]
    fn unterminated_and_empty_placeholders_are_errors() {
        assert!(matches!(
            Template::parse("name.name", "#{first_name"),
            Err(Error::MalformedTemplate { .. })
        ));
        assert!(matches!(
            Template::parse("name.name", "a #{ } b"),
            Err(Error::MalformedTemplate { .. })
        ));
        assert!(matches!(
            Template::parse("name.name", "#{first name}"),
            Err(Error::MalformedTemplate { .. })
        ));
    }

    #[test]
    fn snake_case_keeps_existing_underscores() {
        assert_eq!(snake_case("firstName"), "first_name");
        assert_eq!(snake_case("Internet"), "internet");
        assert_eq!(snake_case("free_email"), "free_email");
        assert_eq!(snake_case("ipV4"), "ip_v4");
    }
}

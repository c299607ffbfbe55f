//! Genre text codec
//!
//! Genres are persisted as a single TEXT column holding a brace-wrapped,
//! comma-joined tag list (`{Rock,Jazz}`), matching data written by earlier
//! deployments. The display-side parser strips the wrapping braces and
//! splits on commas; that exact rule is what keeps stored rows readable.

/// Encode a genre list into the stored text form
pub fn encode(genres: &[String]) -> String {
    format!("{{{}}}", genres.join(","))
}

/// Parse stored genre text back into a list.
///
/// Strips brace characters and splits on commas; empty segments are
/// dropped so the empty encoding `{}` parses to an empty list.
pub fn parse(text: &str) -> Vec<String> {
    text.replace('{', "")
        .replace('}', "")
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}

/// Split a comma-separated form field into a genre list.
///
/// Form inputs arrive as one text field; segments are trimmed and blanks
/// dropped before encoding.
pub fn from_form_field(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(|segment| segment.trim())
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn encode_wraps_in_braces() {
        assert_eq!(encode(&list(&["Rock", "Jazz"])), "{Rock,Jazz}");
        assert_eq!(encode(&list(&["Classical"])), "{Classical}");
        assert_eq!(encode(&[]), "{}");
    }

    #[test]
    fn parse_strips_braces_and_splits() {
        assert_eq!(parse("{Rock,Jazz}"), list(&["Rock", "Jazz"]));
        assert_eq!(parse("{Classical}"), list(&["Classical"]));
    }

    #[test]
    fn parse_of_empty_encoding_is_empty() {
        assert_eq!(parse("{}"), Vec::<String>::new());
        assert_eq!(parse(""), Vec::<String>::new());
    }

    #[test]
    fn parse_tolerates_unwrapped_text() {
        // Rows written by hand without braces still split on commas
        assert_eq!(parse("Rock,Jazz"), list(&["Rock", "Jazz"]));
    }

    #[test]
    fn round_trip_preserves_list() {
        let genres = list(&["Hip-Hop", "R&B", "Soul"]);
        assert_eq!(parse(&encode(&genres)), genres);
    }

    #[test]
    fn form_field_trims_and_drops_blanks() {
        assert_eq!(from_form_field("Rock, Jazz , ,Blues"), list(&["Rock", "Jazz", "Blues"]));
        assert_eq!(from_form_field(""), Vec::<String>::new());
    }
}

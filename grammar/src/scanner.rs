use span::Span;

use crate::table::TagVariant;

/// A successfully bounded statement body
#[derive(Debug, PartialEq, Eq)]
pub struct BodyScan {
    /// Everything strictly between the opening and closing sequences, or
    /// [None] when they are adjacent
    pub body: Option<Span>,
    pub end_tag: Span,
}

/// Scan forward from `from` for the matched variant's own closing sequence
///
/// Scanning is category-bound: only `variant.closing` can end the statement.
/// Accepting any category's closer here would let `{!! a }}` terminate a raw
/// echo early, so a mismatched closer is plain body text instead.
///
/// `None` means the input ended first; the caller must return every consumed
/// character to host tokenization as plain text.
pub fn scan_body(source: &str, from: usize, variant: &TagVariant) -> Option<BodyScan> {
    let closing = variant.closing.as_bytes();
    let haystack = source.as_bytes();

    let mut at = from;
    while at + closing.len() <= haystack.len() {
        if &haystack[at..at + closing.len()] == closing {
            let body = (at > from).then_some(from..at);

            return Some(BodyScan {
                body,
                end_tag: at..at + closing.len(),
            });
        }

        at += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::TagCategory;
    use pretty_assertions::assert_eq;

    fn variant(category: TagCategory, opening: &str, closing: &str) -> TagVariant {
        TagVariant {
            category,
            opening: opening.to_string(),
            closing: closing.to_string(),
            priority: 0,
        }
    }

    #[test]
    fn finds_closer_after_body() {
        let regular = variant(TagCategory::Regular, "{{", "}}");

        assert_eq!(
            Some(BodyScan {
                body: Some(2..7),
                end_tag: 7..9,
            }),
            scan_body("{{ abc }}", 2, &regular)
        );
    }

    #[test]
    fn adjacent_closer_yields_no_body() {
        let regular = variant(TagCategory::Regular, "{{", "}}");

        assert_eq!(
            Some(BodyScan {
                body: None,
                end_tag: 2..4,
            }),
            scan_body("{{}}", 2, &regular)
        );
    }

    #[test]
    fn stops_at_first_closer_occurrence() {
        let regular = variant(TagCategory::Regular, "{{", "}}");

        assert_eq!(
            Some(BodyScan {
                body: Some(2..3),
                end_tag: 3..5,
            }),
            scan_body("{{a}}b}}", 2, &regular)
        );
    }

    #[test]
    fn scanning_is_category_bound() {
        let raw = variant(TagCategory::Raw, "{!!", "!!}");

        // `}}` inside the body does not end a raw echo
        assert_eq!(
            Some(BodyScan {
                body: Some(3..11),
                end_tag: 11..14,
            }),
            scan_body("{!! a }} b !!}", 3, &raw)
        );
    }

    #[test]
    fn body_may_contain_partial_closer_prefixes() {
        let comment = variant(TagCategory::Comment, "{{--", "--}}");

        assert_eq!(
            Some(BodyScan {
                body: Some(4..11),
                end_tag: 11..15,
            }),
            scan_body("{{-- a-b-} --}}", 4, &comment)
        );
    }

    #[test]
    fn input_exhausted_without_closer_fails() {
        let regular = variant(TagCategory::Regular, "{{", "}}");

        assert_eq!(None, scan_body("{{ hello", 2, &regular));
        assert_eq!(None, scan_body("{{ almost }", 2, &regular));
        assert_eq!(None, scan_body("{{", 2, &regular));
    }
}

use span::Span;

use crate::table::{DelimiterTable, TagVariant};

/// A successful opening-tag match
///
/// Cursor advancement past `span` is the caller's responsibility.
#[derive(Debug, PartialEq, Eq)]
pub struct OpeningMatch<'table> {
    pub variant: &'table TagVariant,
    pub span: Span,
}

/// Match the input at byte position `at` against every opening sequence
///
/// Maximal munch: the longest matching opening wins, so `{{{` beats `{{` when
/// both are declared. Equal lengths break by declaration order. The `@`-prefixed
/// escaped form is a single literal sequence, which makes strict adjacency
/// (`@` immediately followed by the braces) hold by construction.
///
/// `None` means "no statement here" and routes the caller back to host
/// tokenization; it is not an error.
pub fn match_opening<'table>(
    source: &str,
    at: usize,
    table: &'table DelimiterTable,
) -> Option<OpeningMatch<'table>> {
    let rest = &source.as_bytes()[at.min(source.len())..];

    table
        .variants()
        .iter()
        .filter(|variant| rest.starts_with(variant.opening.as_bytes()))
        .max_by_key(|variant| (variant.opening.len(), std::cmp::Reverse(variant.priority)))
        .map(|variant| OpeningMatch {
            variant,
            span: at..at + variant.opening.len(),
        })
}

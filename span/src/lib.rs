use std::ops::Range;

/// A pair of T and the span in the original source code
pub type Spanned<T> = (T, Span);

/// A range representing a location in the original source code
pub type Span = Range<usize>;

/// A span representing no location in the original source code
pub const NO_SPAN: Span = 0..0;

/// Shift a span produced against a sub-slice back into whole-source indices
pub fn offset(span: &Span, by: usize) -> Span {
    span.start + by..span.end + by
}

/// The source text a span covers
pub fn text_of<'s>(source: &'s str, span: &Span) -> &'s str {
    &source[span.clone()]
}

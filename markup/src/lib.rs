use ast::MarkupNode;
use logos::Logos;
use span::{offset, Spanned};

/// Raw markup tokens
///
/// Unterminated tags and comments fail their patterns and degrade to text via
/// the stray `Lt` token, so tokenization never errors on malformed markup.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
enum MarkupToken {
    #[regex(r"<!--([^-]|-[^-]|--[^>])*-->")]
    Comment,
    #[regex(r"<[!/]?[a-zA-Z][^<>]*>")]
    Tag,
    #[regex(r"[^<]+")]
    Text,
    #[token("<")]
    Lt,
}

/// Tokenize the first node of `source`
///
/// Adjacent text-like tokens (text runs, stray `<`) coalesce into a single
/// [MarkupNode::Text]. Returns [None] on empty input.
pub fn next_node(source: &str) -> Option<Spanned<MarkupNode>> {
    let mut lexer = MarkupToken::lexer(source);
    let first = lexer.next()?;
    let span = lexer.span();

    match first {
        Ok(MarkupToken::Comment) => Some((MarkupNode::Comment(lexer.slice().to_string()), span)),
        Ok(MarkupToken::Tag) => Some((MarkupNode::Tag(lexer.slice().to_string()), span)),
        _ => {
            let mut end = span.end;

            while let Some(token) = lexer.next() {
                match token {
                    Ok(MarkupToken::Text) | Ok(MarkupToken::Lt) | Err(_) => {
                        end = lexer.span().end;
                    }
                    _ => break,
                }
            }

            Some((
                MarkupNode::Text(source[span.start..end].to_string()),
                span.start..end,
            ))
        }
    }
}

/// Iterator over the nodes of a markup source
pub struct Tokenizer<'input> {
    source: &'input str,
    cursor: usize,
}

impl<'input> Tokenizer<'input> {
    pub fn new(source: &'input str) -> Self {
        Self { source, cursor: 0 }
    }
}

impl<'input> Iterator for Tokenizer<'input> {
    type Item = Spanned<MarkupNode>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, span) = next_node(&self.source[self.cursor..])?;
        let span = offset(&span, self.cursor);

        self.cursor = span.end;

        Some((node, span))
    }
}

/// Tokenize an entire markup source
pub fn tokenize(source: &str) -> Vec<Spanned<MarkupNode>> {
    Tokenizer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    macro_rules! tokenize_test {
        ($test_name:ident, $source:expr, $nodes:expr) => {
            #[test]
            fn $test_name() {
                let exp: Vec<Spanned<MarkupNode>> = $nodes;
                let got = tokenize($source);
                assert_eq!(exp, got);
            }
        };
    }

    tokenize_test!(tokenize_empty_input, "", vec![]);

    tokenize_test!(
        tokenize_plain_text,
        "hello world",
        vec![(MarkupNode::Text("hello world".to_string()), 0..11)]
    );

    tokenize_test!(
        tokenize_element_with_text,
        "<p>hi</p>",
        vec![
            (MarkupNode::Tag("<p>".to_string()), 0..3),
            (MarkupNode::Text("hi".to_string()), 3..5),
            (MarkupNode::Tag("</p>".to_string()), 5..9),
        ]
    );

    tokenize_test!(
        tokenize_comment,
        "a<!-- note -->b",
        vec![
            (MarkupNode::Text("a".to_string()), 0..1),
            (MarkupNode::Comment("<!-- note -->".to_string()), 1..14),
            (MarkupNode::Text("b".to_string()), 14..15),
        ]
    );

    tokenize_test!(
        tokenize_doctype_as_tag,
        "<!DOCTYPE html>",
        vec![(MarkupNode::Tag("<!DOCTYPE html>".to_string()), 0..15)]
    );

    tokenize_test!(
        tokenize_stray_angle_bracket_degrades_to_text,
        "1 < 2",
        vec![(MarkupNode::Text("1 < 2".to_string()), 0..5)]
    );

    tokenize_test!(
        tokenize_unterminated_tag_degrades_to_text,
        "<div class=",
        vec![(MarkupNode::Text("<div class=".to_string()), 0..11)]
    );

    tokenize_test!(
        tokenize_unterminated_comment_degrades_to_text,
        "<!-- open",
        vec![(MarkupNode::Text("<!-- open".to_string()), 0..9)]
    );

    tokenize_test!(
        tokenize_comment_with_inner_dashes,
        "<!-- a--b -->",
        vec![(MarkupNode::Comment("<!-- a--b -->".to_string()), 0..13)]
    );

    #[test]
    fn next_node_only_consumes_one_node() {
        assert_eq!(
            Some((MarkupNode::Tag("<b>".to_string()), 0..3)),
            next_node("<b>text")
        );
    }

    #[test]
    fn spans_cover_the_whole_input() {
        let source = "<ul><li>one</li><!-- two --></ul> three < four";
        let nodes = tokenize(source);

        let mut cursor = 0;
        for (_, span) in &nodes {
            assert_eq!(cursor, span.start);
            cursor = span.end;
        }
        assert_eq!(cursor, source.len());
    }
}

use ast::{EchoStatement, MarkupNode, Node, Tree};
use errors::{ScanError, TemplateError};
use span::{offset, text_of, Spanned};

use crate::matcher::{match_opening, OpeningMatch};
use crate::scanner::{scan_body, BodyScan};
use crate::table::DelimiterTable;

/// The host grammar the echo statement composes over
///
/// Implementations tokenize the first node of `source` with spans relative to
/// `source`. The composition layer never alters host output; it only decides
/// where the host gets to run.
pub trait HostGrammar {
    fn next_node(&self, source: &str) -> Option<Spanned<MarkupNode>>;
}

/// The default host: the markup crate's HTML tokenizer
#[derive(Clone, Copy, Debug, Default)]
pub struct Html;

impl HostGrammar for Html {
    fn next_node(&self, source: &str) -> Option<Spanned<MarkupNode>> {
        markup::next_node(source)
    }
}

/// Everything a parse produces
///
/// Tokenization is infallible; unterminated statements surface here as
/// spanned warnings, never as an `Err`.
#[derive(Debug, PartialEq)]
pub struct ParseResult {
    pub tree: Tree,
    pub warnings: Vec<Spanned<TemplateError>>,
}

/// A host grammar extended with the echo statement alternative
pub struct ComposedGrammar<H: HostGrammar> {
    host: H,
    table: DelimiterTable,
}

impl ComposedGrammar<Html> {
    /// The standard blade grammar over the default HTML host
    pub fn blade() -> Self {
        Self::new(Html, DelimiterTable::blade())
    }
}

impl<H: HostGrammar> ComposedGrammar<H> {
    pub fn new(host: H, table: DelimiterTable) -> Self {
        Self { host, table }
    }

    /// Tokenize `source` into a tree of markup and echo nodes
    ///
    /// At every node position the echo alternative is tried first; when no
    /// opening delimiter matches there, the host's own node is taken
    /// unchanged. Host text runs are bounded at the next position where a
    /// full opening sequence matches, so a lone `{` or `@` stays inside text.
    pub fn parse(&self, source: &str) -> ParseResult {
        let mut tree = Tree::default();
        let mut warnings: Vec<Spanned<TemplateError>> = vec![];
        let mut cursor = 0usize;

        while cursor < source.len() {
            if let Some(opening) = match_opening(source, cursor, &self.table) {
                match scan_body(source, opening.span.end, opening.variant) {
                    Some(scan) => {
                        let span = opening.span.start..scan.end_tag.end;
                        let statement = assemble(source, opening, scan);

                        cursor = span.end;
                        tree.push(Node::echo(statement, span));
                    }
                    None => {
                        // Input exhausted with no closer: everything from the
                        // opening delimiter onward goes back to the host as
                        // plain input.
                        warnings.push((
                            ScanError::UnterminatedStatement {
                                start_tag: opening.variant.opening.clone(),
                                expected_closing: opening.variant.closing.clone(),
                            }
                            .into(),
                            cursor..source.len(),
                        ));

                        self.drain_host(source, cursor, &mut tree);
                        cursor = source.len();
                    }
                }

                continue;
            }

            let Some((node, span)) = self.host.next_node(&source[cursor..]) else {
                break;
            };
            let span = offset(&span, cursor);

            match node {
                MarkupNode::Text(_) => {
                    // Never re-enter the matcher at `cursor` itself; that
                    // position already failed to open a statement.
                    let end = self
                        .next_opening(source, cursor + 1, span.end)
                        .unwrap_or(span.end);

                    tree.push(Node::text(&source[cursor..end], cursor..end));
                    cursor = end;
                }
                _ => {
                    cursor = span.end;
                    tree.push((Node::Markup(node), span));
                }
            }
        }

        ParseResult { tree, warnings }
    }

    /// First position in `from..until` where a full opening sequence matches
    fn next_opening(&self, source: &str, from: usize, until: usize) -> Option<usize> {
        let bytes = source.as_bytes();

        (from..until)
            .filter(|&at| self.table.is_candidate(bytes[at]))
            .find(|&at| match_opening(source, at, &self.table).is_some())
    }

    /// Tokenize `source[from..]` with the host grammar alone
    fn drain_host(&self, source: &str, from: usize, tree: &mut Tree) {
        let mut cursor = from;

        while cursor < source.len() {
            let Some((node, span)) = self.host.next_node(&source[cursor..]) else {
                break;
            };
            let span = offset(&span, cursor);

            cursor = span.end;
            tree.push((Node::Markup(node), span));
        }
    }
}

/// Compose a matched opening, optional body, and closer into one statement
fn assemble(source: &str, opening: OpeningMatch, scan: BodyScan) -> EchoStatement {
    EchoStatement {
        category: opening.variant.category,
        start_tag: (text_of(source, &opening.span).to_string(), opening.span),
        body: scan
            .body
            .map(|span| (text_of(source, &span).to_string(), span)),
        end_tag: (text_of(source, &scan.end_tag).to_string(), scan.end_tag),
    }
}

/// Parse `source` with the standard blade grammar
pub fn parse(source: &str) -> ParseResult {
    ComposedGrammar::blade().parse(source)
}

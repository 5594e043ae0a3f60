use serde::{Deserialize, Serialize};
use span::{Span, Spanned};

/// Semantic category of an echo statement's delimiter pair
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagCategory {
    /// Standard interpolation: `{{ ... }}`
    Regular,
    /// Unescaped interpolation: `{!! ... !!}`
    Raw,
    /// Literal-output marker: `@{{ ... }}`
    ///
    /// The engine must not evaluate the body, but the body is still a raw
    /// text span rather than a no-op.
    Escaped,
    /// Non-emitting annotation: `{{-- ... --}}`
    Comment,
}

/// A recognized interpolation region
///
/// `start_tag` and `end_tag` are named uniformly across categories so
/// downstream consumers (highlighters, structural queries) see one node shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoStatement {
    pub category: TagCategory,
    pub start_tag: Spanned<String>,
    pub body: Option<Spanned<String>>,
    pub end_tag: Spanned<String>,
}

/// A node produced by the host markup grammar
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupNode {
    /// A run of ordinary text
    Text(String),
    /// An element tag: `<div ...>`, `</div>`, `<br/>`
    Tag(String),
    /// A markup comment: `<!-- ... -->`
    Comment(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Markup(MarkupNode),
    Echo(EchoStatement),
}

impl Node {
    /// Utility function to create a [Spanned] [MarkupNode::Text] node.
    pub fn text(text: impl AsRef<str>, span: Span) -> Spanned<Self> {
        (Self::Markup(MarkupNode::Text(text.as_ref().to_string())), span)
    }

    /// Utility function to create a [Spanned] [MarkupNode::Tag] node.
    pub fn tag(text: impl AsRef<str>, span: Span) -> Spanned<Self> {
        (Self::Markup(MarkupNode::Tag(text.as_ref().to_string())), span)
    }

    /// Utility function to create a [Spanned] [MarkupNode::Comment] node.
    pub fn comment(text: impl AsRef<str>, span: Span) -> Spanned<Self> {
        (
            Self::Markup(MarkupNode::Comment(text.as_ref().to_string())),
            span,
        )
    }

    /// Utility function to create a [Spanned] [Node::Echo] node.
    pub fn echo(statement: EchoStatement, span: Span) -> Spanned<Self> {
        (Self::Echo(statement), span)
    }
}

/// An ordered list of spanned nodes covering the tokenized source
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree(Vec<Spanned<Node>>);

impl Tree {
    pub fn new(nodes: Vec<Spanned<Node>>) -> Self {
        Self(nodes)
    }

    pub fn push(&mut self, node: Spanned<Node>) {
        self.0.push(node);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the [nodes](Node)
    pub fn iter(&self) -> impl Iterator<Item = &Spanned<Node>> {
        self.0.iter()
    }

    /// Get every [EchoStatement] in the tree, in source order
    pub fn echoes(&self) -> Vec<(&EchoStatement, &Span)> {
        self.iter()
            .filter_map(|(node, span)| match node {
                Node::Echo(statement) => Some((statement, span)),
                _ => None,
            })
            .collect()
    }

    /// Get every text run in the tree, in source order
    pub fn texts(&self) -> Vec<(&str, &Span)> {
        self.iter()
            .filter_map(|(node, span)| match node {
                Node::Markup(MarkupNode::Text(text)) => Some((text.as_str(), span)),
                _ => None,
            })
            .collect()
    }
}

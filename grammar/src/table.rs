use ast::TagCategory;

/// One opening/closing delimiter pair
///
/// `priority` is the variant's declaration index in its table; lower wins when
/// two openings of equal length match at the same position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagVariant {
    pub category: TagCategory,
    pub opening: String,
    pub closing: String,
    pub priority: usize,
}

/// The set of delimiter pairs a grammar revision recognizes
///
/// Built once at grammar construction time and read-only afterwards, so it is
/// safe to share across unsynchronized parallel parses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelimiterTable {
    variants: Vec<TagVariant>,
    opening_first_bytes: Vec<u8>,
}

impl DelimiterTable {
    /// Build a table from `(category, opening, closing)` entries
    ///
    /// Declaration order becomes tie-break priority.
    pub fn new<S: Into<String>>(entries: Vec<(TagCategory, S, S)>) -> Self {
        let variants: Vec<TagVariant> = entries
            .into_iter()
            .enumerate()
            .map(|(priority, (category, opening, closing))| {
                let variant = TagVariant {
                    category,
                    opening: opening.into(),
                    closing: closing.into(),
                    priority,
                };
                debug_assert!(!variant.opening.is_empty() && !variant.closing.is_empty());
                variant
            })
            .collect();

        let mut opening_first_bytes: Vec<u8> = variants
            .iter()
            .filter_map(|variant| variant.opening.bytes().next())
            .collect();
        opening_first_bytes.sort_unstable();
        opening_first_bytes.dedup();

        Self {
            variants,
            opening_first_bytes,
        }
    }

    /// The standard blade revision of the table
    pub fn blade() -> Self {
        Self::new(vec![
            (TagCategory::Comment, "{{--", "--}}"),
            (TagCategory::Escaped, "@{{", "}}"),
            (TagCategory::Raw, "{!!", "!!}"),
            (TagCategory::Regular, "{{", "}}"),
        ])
    }

    pub fn variants(&self) -> &[TagVariant] {
        &self.variants
    }

    /// Whether `byte` can begin any opening sequence
    ///
    /// Lets scanning code skip positions that cannot possibly start a
    /// statement without consulting every variant.
    pub fn is_candidate(&self, byte: u8) -> bool {
        self.opening_first_bytes.contains(&byte)
    }
}

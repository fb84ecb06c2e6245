//! Typed value constructors recognized in YSON documents.

/// The fixed set of YSON type constructors.
///
/// Compound constructors (`Text`, `Tree`) may contain nested structure
/// and indent like objects and arrays. The remaining constructors are
/// atomic leaves and are never split across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YsonType {
    Counter,
    Text,
    Tree,
    Int,
    Long,
    BinData,
    Date,
}

impl YsonType {
    /// Every recognized constructor.
    pub const ALL: [Self; 7] = [
        Self::Counter,
        Self::Text,
        Self::Tree,
        Self::Int,
        Self::Long,
        Self::BinData,
        Self::Date,
    ];

    /// The identifier as it appears in serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Counter => "Counter",
            Self::Text => "Text",
            Self::Tree => "Tree",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::BinData => "BinData",
            Self::Date => "Date",
        }
    }

    /// Whether the constructor's contents may hold nested structure.
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::Text | Self::Tree)
    }

    /// Recognize a constructor at the start of `rest`.
    ///
    /// The identifier must be immediately followed by `(`; a bare
    /// identifier is an ordinary value.
    pub fn recognize(rest: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| {
            let name = t.name();
            rest.len() > name.len()
                && rest.starts_with(name)
                && rest.as_bytes()[name.len()] == b'('
        })
    }
}

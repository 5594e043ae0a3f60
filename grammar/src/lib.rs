pub use compose::{parse, ComposedGrammar, Html, HostGrammar, ParseResult};
pub use matcher::{match_opening, OpeningMatch};
pub use scanner::{scan_body, BodyScan};
pub use table::{DelimiterTable, TagVariant};

mod compose;
mod matcher;
mod scanner;
mod table;

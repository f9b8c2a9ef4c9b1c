//! Rewindable, position-tagged UTF-8 scanning over an in-memory buffer.
//!
//! The crate exposes a small surface: [`Scanner`] walks a fully buffered
//! source one Unicode character at a time, [`Pos`] records where each
//! character sits as byte offsets, and [`Token`] snapshots the cursor so the
//! scan can later be rewound with [`Scanner::goto`]. Malformed byte
//! sequences never abort the scan; they are recorded as [`EncodingError`]s
//! and the cursor stays put until the caller repositions it.
//!
//! # Scanning
//!
//! The usual shape is a `while` loop over [`Scanner::scan`]:
//!
//! ```
//! use charscan::Scanner;
//!
//! let mut scanner = Scanner::new("Hello!");
//! let mut rendered = String::new();
//! while scanner.scan().advanced() {
//!     rendered.push_str(&scanner.token().to_string());
//!     rendered.push(' ');
//! }
//! assert_eq!(
//!     rendered.trim_end(),
//!     "{ H 0:1 } { e 1:2 } { l 2:3 } { l 3:4 } { o 4:5 } { ! 5:6 }",
//! );
//! ```
//!
//! Or a one-shot drain with [`Scanner::scan_all`]:
//!
//! ```
//! use charscan::Scanner;
//!
//! let mut scanner = Scanner::new(".tests[].value");
//! let (tokens, ok) = scanner.scan_all();
//! assert!(ok);
//! assert_eq!(tokens.len(), 14);
//! ```
//!
//! # Rewinding
//!
//! Tokens double as bookmarks. [`Scanner::goto`] moves the cursor back to a
//! previously captured token; [`Scanner::reset`] returns to the very start
//! and clears any recorded errors:
//!
//! ```
//! use charscan::Scanner;
//!
//! let mut scanner = Scanner::new("Hello!");
//! let mut bookmark = scanner.token();
//! while scanner.scan().advanced() {
//!     if scanner.cursor().ch == 'e' {
//!         bookmark = scanner.token();
//!     }
//! }
//! scanner.goto(&bookmark);
//! assert_eq!(scanner.token().to_string(), "{ e 1:2 }");
//!
//! scanner.reset();
//! assert_eq!(scanner.cursor(), charscan::Pos::ZERO);
//! ```
//!
//! # Lookahead
//!
//! [`Scanner::peek`] checks the bytes directly after the cursor without
//! consuming them:
//!
//! ```
//! use charscan::Scanner;
//!
//! let mut scanner = Scanner::new("There's a match!");
//! while scanner.scan().advanced() {
//!     if scanner.cursor().ch == 's' {
//!         break;
//!     }
//! }
//! assert!(scanner.peek(" a match!"));
//! ```

mod error;
mod pos;
mod scanner;
mod token;

pub use error::{EncodingError, SourceError};
pub use pos::Pos;
pub use scanner::{Scanner, Step};
pub use token::Token;

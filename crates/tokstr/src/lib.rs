//! Tokenized string views.
//!
//! A [`TokenizedString`] owns one backing buffer and an ordered sequence of
//! [`Token`] references into it. Lookups borrow from the buffer and never
//! copy token text.
//!
//! ```
//! use tokstr::{Token, TokenizedString};
//!
//! let ts = TokenizedString::from_parts(
//!     "width=800;height=600",
//!     [Token::new(0, 9), Token::new(10, 10)],
//! )?;
//! assert_eq!(ts.get_u32(0, "width"), Some(800));
//! assert_eq!(ts.get_u32(0, "height"), None);
//! assert_eq!(ts.get_u32(1, "height"), Some(600));
//! # Ok::<(), tokstr::TokenError>(())
//! ```
//!
//! # Tracing
//!
//! Rejected keyed lookups and construction failures emit `tracing` events.
//! Call [`init_tracing`] and set `RUST_LOG=tokstr=trace` to see them.

mod lookup;
mod tokenized;

pub use tokenized::{Iter, TokenizedString};
pub use tokstr_core::{parse_saturating_u32, Token, TokenError, SATURATION_LIMIT};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

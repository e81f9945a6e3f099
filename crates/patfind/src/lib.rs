// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact substring search.
//!
//! Two independent matchers, each compiled once per pattern and reusable
//! across any number of texts:
//!
//! - [`PrefixFunctionMatcher`]: Knuth-Morris-Pratt. Single left-to-right
//!   scan driven by a precomputed failure table; never backtracks over
//!   the text.
//! - [`RollingHashMatcher`]: Rabin-Karp. Slides a rolling-hash window and
//!   confirms every candidate with a direct byte compare.
//!
//! Both report every occurrence (overlapping ones included) in ascending
//! order and produce identical results on identical inputs.
//!
//! ```
//! use patfind::PrefixFunctionMatcher;
//!
//! let matcher = PrefixFunctionMatcher::new("aa")?;
//! assert_eq!(matcher.search("aaaa"), vec![0, 1, 2]);
//! # Ok::<(), patfind::PatternError>(())
//! ```

pub mod error;
pub mod prefix;
pub mod rolling;

pub use error::PatternError;
pub use prefix::PrefixFunctionMatcher;
pub use rolling::RollingHashMatcher;

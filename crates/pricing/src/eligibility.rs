//! Marketplace eligibility gaps.

use thiserror::Error;

/// Why a catalog position cannot currently be offered.
///
/// A gap is not a failure. It suppresses the price task for the position and
/// forces the stock target to zero so the marketplace stops selling it; the
/// caller reports it as a warning, once per triggering event per article.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EligibilityGap {
    /// No positive base price recorded.
    #[error("no base price recorded")]
    MissingPrice,

    /// One or more packaging parameters missing.
    #[error("packaging parameters incomplete")]
    MissingPackaging,
}

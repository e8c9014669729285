// Rust guideline compliant 2026-10-16

//! Request-scoped visibility flag.
//!
//! The flag decides whether server-class errors reveal their raw text to
//! the client. It travels in the request's [`Extensions`] under a private
//! key type, so no other code can read or overwrite it by accident.

use http::Extensions;

#[derive(Debug, Clone, Copy)]
struct ShowError(bool);

/// Returns a copy of `ctx` with the visibility flag set to `show`.
///
/// The input extensions are left untouched, so contexts derived from a
/// shared ancestor do not observe each other's flag.
#[must_use]
pub fn with_show_error(ctx: &Extensions, show: bool) -> Extensions {
    let mut derived = ctx.clone();
    set_show_error(&mut derived, show);
    derived
}

/// Sets the visibility flag on extensions the caller owns.
pub fn set_show_error(ctx: &mut Extensions, show: bool) {
    ctx.insert(ShowError(show));
}

/// Reads the visibility flag. An absent flag reads as `false`.
#[must_use]
pub fn show_error(ctx: &Extensions) -> bool {
    ctx.get::<ShowError>().is_some_and(|flag| flag.0)
}

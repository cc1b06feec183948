#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod layout;
pub mod literal;
pub mod mixing;
pub mod paddle;

pub use layout::TableLayout;
pub use literal::HexLiteral;

/// Renders a table into a freshly allocated string.
///
/// `render` is one of the generator `render` functions, e.g.
/// [`paddle::render`] or [`mixing::render`].
pub fn render_to_string<F>(render: F) -> alloc::string::String
where
    F: FnOnce(&mut alloc::string::String) -> core::fmt::Result,
{
    let mut out = alloc::string::String::new();

    // Writing into a `String` never fails.
    render(&mut out).ok();

    out
}

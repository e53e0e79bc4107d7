//! Receipt presentation - value formatting and the printable HTML page.

/// Currency, dimension, date and id formatting helpers
pub mod format;
/// HTML rendering of a receipt
pub mod render;

pub use render::render_receipt;

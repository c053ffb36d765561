//! Pure presentation-state logic, split by behavior.
//!
//! DESIGN
//! ======
//! Each module owns one decision problem (theme resolution, reveal staggering,
//! active-section selection) with no browser types, so the rules are unit
//! testable natively. The `util` glue feeds these functions with values read
//! from web-sys and writes their answers back to the DOM.

pub mod reveal;
pub mod sections;
pub mod theme;

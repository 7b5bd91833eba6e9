//! Measurement units
//!
//! Paragraph indents and tab stops are expressed in twentieths of a point
//! ("twips"), picture extents in English Metric Units (EMU).

/// EMUs per centimeter
pub const EMU_PER_CENTIMETER: u32 = 360_000;

/// Convert centimeters to EMUs, rounding half away from zero
pub fn cm_to_emu(centimeters: f64) -> u32 {
    (EMU_PER_CENTIMETER as f64 * centimeters.max(0.0)).round() as u32
}

//! The page format used for every exported document.
//!
//! Output is always ISO A4 in portrait orientation. The size is kept in both
//! units: millimetres for layout and points for the `MediaBox`.

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// Page dimensions as (width, height) in millimetres.
pub type PageSizeMm = (Mm, Mm);

pub const A4_MM: PageSizeMm = (Mm(210.0), Mm(297.0));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));

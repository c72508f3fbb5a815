//! Algebraic data types and pattern matching.
//!
//! Variants carry named fields, positional fields, or nothing. Patterns nest
//! through enums, take guards, combine with `|` when both sides bind the
//! same names at the same types, and fall back to wildcards.
//!
//! Every match must be exhaustive:
//!
//! ```compile_fail
//! use lang_cmp::adt::{Height, Imperial};
//!
//! let h = Height::Imperial(Imperial::Mixed { feet: 5, inches: 3 });
//! let n = match h {
//!     Height::Imperial(Imperial::Mixed { .. }) => 1,
//!     Height::Metric { .. } => 2,
//! };
//! ```
//!
//! and all arms must agree on a type:
//!
//! ```compile_fail
//! use lang_cmp::adt::Imperial;
//!
//! let h = Imperial::NoHeight;
//! let n = match h {
//!     Imperial::NoHeight => 1,
//!     _ => println!("not an integer"),
//! };
//! ```

use crate::diagnostics::CheckError;
use crate::ensure_eq;

pub const IMPERIAL_INCHES: &str = "imperial_inches";
pub const HEIGHT_DESCRIPTION: &str = "height_description";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imperial {
    Mixed { feet: i32, inches: i32 },
    Inches(i32),
    NoHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    Imperial(Imperial),
    Metric { centimeters: i32 },
}

impl Imperial {
    pub fn total_inches(&self) -> Option<i32> {
        match *self {
            Imperial::Mixed { feet, inches } => Some(feet * 12 + inches),
            Imperial::Inches(i) => Some(i),
            Imperial::NoHeight => None,
        }
    }
}

impl Height {
    pub fn describe(&self) -> String {
        match self {
            Height::Imperial(Imperial::Mixed { feet, inches }) if *feet > 7 => {
                format!("a {feet} foot {inches} inch giant")
            }
            Height::Imperial(Imperial::Mixed { feet, inches }) => {
                format!("{feet} feet {inches} inches")
            }
            Height::Metric { centimeters: n } | Height::Imperial(Imperial::Inches(n)) => {
                format!("{n} height units")
            }
            Height::Imperial(_) => "no height".to_string(),
        }
    }
}

pub fn imperial_inches() -> Result<(), CheckError> {
    let h = Imperial::Mixed { feet: 5, inches: 3 };

    ensure_eq!(IMPERIAL_INCHES, h.total_inches(), Some(63));
    ensure_eq!(IMPERIAL_INCHES, Imperial::Inches(70).total_inches(), Some(70));
    ensure_eq!(IMPERIAL_INCHES, Imperial::NoHeight.total_inches(), None);
    Ok(())
}

pub fn height_description() -> Result<(), CheckError> {
    let regular = Height::Imperial(Imperial::Mixed { feet: 5, inches: 3 });
    let giant = Height::Imperial(Imperial::Mixed { feet: 8, inches: 1 });

    ensure_eq!(HEIGHT_DESCRIPTION, regular.describe(), "5 feet 3 inches");
    ensure_eq!(HEIGHT_DESCRIPTION, giant.describe(), "a 8 foot 1 inch giant");
    ensure_eq!(
        HEIGHT_DESCRIPTION,
        Height::Metric { centimeters: 160 }.describe(),
        "160 height units"
    );
    ensure_eq!(
        HEIGHT_DESCRIPTION,
        Height::Imperial(Imperial::Inches(63)).describe(),
        "63 height units"
    );
    ensure_eq!(
        HEIGHT_DESCRIPTION,
        Height::Imperial(Imperial::NoHeight).describe(),
        "no height"
    );
    Ok(())
}

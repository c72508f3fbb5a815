use serde::Serialize;

use crate::diagnostics::CheckError;
use crate::{adt, assign};

/// Compare an observed value against the expected one inside a check body.
///
/// Returns `CheckError::Mismatch` from the enclosing function on inequality,
/// using the stringified observed expression as the location.
#[macro_export]
macro_rules! ensure_eq {
    ($check:expr, $actual:expr, $expected:expr $(,)?) => {
        match (&$actual, &$expected) {
            (actual, expected) => {
                if *actual != *expected {
                    return Err($crate::diagnostics::CheckError::mismatch(
                        $check,
                        stringify!($actual),
                        format!("{:?}", expected),
                        format!("{:?}", actual),
                    ));
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Assignment through the location's own name.
    Direct,
    /// Assignment through a reference handed to a helper.
    Indirect,
    /// Assignment into a freshly constructed literal or call result.
    Anomaly,
    /// Pattern matching over algebraic data types.
    Pattern,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Direct => "direct",
            Category::Indirect => "indirect",
            Category::Anomaly => "anomaly",
            Category::Pattern => "pattern",
        }
    }
}

/// A single parameterless check.
pub struct Check {
    pub name: &'static str,
    pub category: Category,
    run: fn() -> Result<(), CheckError>,
}

impl Check {
    pub const fn new(
        name: &'static str,
        category: Category,
        run: fn() -> Result<(), CheckError>,
    ) -> Self {
        Self { name, category, run }
    }

    pub fn run(&self) -> Result<(), CheckError> {
        (self.run)()
    }
}

pub static CHECKS: &[Check] = &[
    Check::new(assign::scalar::LOCAL, Category::Direct, assign::scalar::local_scalar),
    Check::new(assign::scalar::INDIRECT, Category::Indirect, assign::scalar::indirect_scalar),
    Check::new(assign::scalar::BY_VALUE, Category::Indirect, assign::scalar::scalar_by_value),
    Check::new(assign::sequence::LOCAL, Category::Direct, assign::sequence::local_sequence),
    Check::new(assign::sequence::INDIRECT, Category::Indirect, assign::sequence::indirect_sequence),
    Check::new(assign::sequence::DETACHED, Category::Indirect, assign::sequence::sequence_copy_is_detached),
    Check::new(assign::record::LOCAL, Category::Direct, assign::record::local_record),
    Check::new(assign::record::INDIRECT, Category::Indirect, assign::record::indirect_record),
    Check::new(assign::record::BY_VALUE, Category::Indirect, assign::record::record_by_value),
    Check::new(assign::shared::SHARED_CELL, Category::Indirect, assign::shared::shared_cell),
    Check::new(assign::literal::SEQUENCE, Category::Anomaly, assign::literal::sequence_literal),
    Check::new(assign::literal::RECORD, Category::Anomaly, assign::literal::record_literal),
    Check::new(assign::literal::CALL_RESULT, Category::Anomaly, assign::literal::call_result_place),
    Check::new(adt::IMPERIAL_INCHES, Category::Pattern, adt::imperial_inches),
    Check::new(adt::HEIGHT_DESCRIPTION, Category::Pattern, adt::height_description),
];

/// Look up a check by exact name.
pub fn find(name: &str) -> Result<&'static Check, CheckError> {
    CHECKS
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| CheckError::unknown_check(name))
}

/// All checks whose name contains `filter`, in registry order.
pub fn select(filter: Option<&str>) -> Vec<&'static Check> {
    CHECKS
        .iter()
        .filter(|c| filter.is_none_or(|f| c.name.contains(f)))
        .collect()
}

/// Resolve the checks to run: explicit `names` if any were given, otherwise
/// the `filter` selection, minus anything listed in `skip`.
pub fn resolve(
    names: &[String],
    filter: Option<&str>,
    skip: &[String],
) -> Result<Vec<&'static Check>, CheckError> {
    let mut checks = if names.is_empty() {
        select(filter)
    } else {
        names.iter().map(|n| find(n)).collect::<Result<Vec<_>, _>>()?
    };
    checks.retain(|c| !skip.iter().any(|s| s == c.name));
    Ok(checks)
}

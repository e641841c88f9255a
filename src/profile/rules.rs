//! Construction-time rules for profile nodes.
//!
//! Checked once when the tree is built, never per populate pass.

use crate::embellish::Embellishment;
use crate::error::ConfigError;
use crate::profile::node::Child;

/// Output keys every node claims for itself.
pub(crate) const STRUCTURAL_KEYS: &[&str] = &["name", "children"];

/// Tolerance for floating-point width summation (1/3 + 2/3 must pass).
pub(crate) const WIDTH_EPSILON: f64 = 1e-6;

/// Rejects a row whose chart children claim more than one full row.
///
/// Nested container nodes stack vertically and occupy no column width, so
/// only chart children count toward the total.
pub(crate) fn check_row_width<C>(name: &str, children: &[Child<C>]) -> Result<(), ConfigError> {
    let total: f64 = children
        .iter()
        .filter_map(|child| match child {
            Child::Chart(chart) => Some(chart.width().fraction()),
            Child::Node(_) => None,
        })
        .sum();

    if total > 1.0 + WIDTH_EPSILON {
        return Err(ConfigError::RowOverflow {
            name: name.to_string(),
            total,
            excess: total - 1.0,
        });
    }
    Ok(())
}

/// Rejects static embellishment keys that shadow a structural key or repeat
/// within one node. Computed keys are unknowable here; the populate pass
/// checks those.
pub(crate) fn check_embellishment_keys<C>(
    name: &str,
    embellishments: &[Embellishment<C>],
) -> Result<(), ConfigError> {
    let mut seen: Vec<&str> = Vec::new();
    for embellishment in embellishments {
        let Some(key) = embellishment.static_key() else {
            continue;
        };
        if STRUCTURAL_KEYS.contains(&key) {
            return Err(ConfigError::ReservedKey {
                node: name.to_string(),
                key: key.to_string(),
            });
        }
        if seen.contains(&key) {
            return Err(ConfigError::DuplicateKey {
                node: name.to_string(),
                key: key.to_string(),
            });
        }
        seen.push(key);
    }
    Ok(())
}

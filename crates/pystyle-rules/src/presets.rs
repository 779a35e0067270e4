//! Default rule sets.

use crate::{BlankLines, LineClassifier, NamingWalker};
use pystyle_core::{LineRuleBox, TreeRuleBox};

/// Returns the textual rules: layout checks and blank-line runs.
///
/// Includes:
/// - `line-classifier` - S001, S002, S003, S004, S005, S007
/// - `blank-lines` - S006
#[must_use]
pub fn line_rules() -> Vec<LineRuleBox> {
    vec![Box::new(LineClassifier::new()), Box::new(BlankLines::new())]
}

/// Returns the structural rules.
///
/// Includes:
/// - `naming` - S008, S009, S010, S011, S012
#[must_use]
pub fn tree_rules() -> Vec<TreeRuleBox> {
    vec![Box::new(NamingWalker::new())]
}

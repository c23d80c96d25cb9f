//! Commit message synthesis.

use crate::changeset::ChangeSet;

const GROUP_SEPARATOR: &str = " , ";
const PATH_SEPARATOR: &str = ", ";

/// Renders a one-line summary of the change set.
///
/// Consecutive entries of the same kind form a group introduced by the kind's
/// label, e.g. `add a.txt, b.txt , update c.txt`. Entries are rendered in the
/// set's canonical order.
#[must_use]
pub fn render(changes: &ChangeSet) -> String {
    let mut message = String::new();
    let mut current_kind = None;

    for entry in changes {
        if current_kind == Some(entry.kind()) {
            message.push_str(PATH_SEPARATOR);
        } else {
            if current_kind.is_some() {
                message.push_str(GROUP_SEPARATOR);
            }
            message.push_str(entry.kind().label());
            current_kind = Some(entry.kind());
        }
        message.push_str(entry.path());
    }

    message
}

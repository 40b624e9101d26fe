use uuid::Uuid;

use crate::models::UserId;

/// One selection-to-render attempt
///
/// Minted when a user is selected and passed by value into the fetch task, so
/// a completed fetch can be checked for staleness against an identifier
/// instead of reading shared selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalCycle {
    pub id: Uuid,
    pub user: UserId,
}

/// Single owner of the current selection and its retrieval cycle
///
/// Selecting a real identifier supersedes whatever cycle was pending; the
/// superseded cycle's eventual response must be ignored, but nothing is
/// cancelled over the wire. The unselected sentinel issues nothing and leaves
/// the pending cycle in place.
#[derive(Debug, Default)]
pub struct SelectionController {
    current: Option<RetrievalCycle>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a selector change
    ///
    /// Returns the freshly minted cycle for a real identifier, `None` for the
    /// sentinel (no request, current cycle untouched). The empty string is
    /// the sentinel too.
    pub fn on_user_selected(&mut self, selection: Option<UserId>) -> Option<RetrievalCycle> {
        let user = selection.filter(|u| !u.as_str().is_empty())?;

        let cycle = RetrievalCycle {
            id: Uuid::new_v4(),
            user,
        };
        self.current = Some(cycle.clone());
        Some(cycle)
    }

    /// Whether the given cycle is still the one whose result may render
    pub fn is_current(&self, cycle_id: Uuid) -> bool {
        self.current.as_ref().is_some_and(|c| c.id == cycle_id)
    }

    pub fn current(&self) -> Option<&RetrievalCycle> {
        self.current.as_ref()
    }

    pub fn selected_user(&self) -> Option<&UserId> {
        self.current.as_ref().map(|c| &c.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_selection_mints_a_cycle() {
        let mut controller = SelectionController::new();
        let cycle = controller.on_user_selected(Some(UserId::new("42"))).unwrap();

        assert_eq!(cycle.user, UserId::new("42"));
        assert!(controller.is_current(cycle.id));
        assert_eq!(controller.selected_user(), Some(&UserId::new("42")));
    }

    #[test]
    fn test_sentinel_issues_nothing() {
        let mut controller = SelectionController::new();

        assert!(controller.on_user_selected(None).is_none());
        assert!(controller.on_user_selected(Some(UserId::new(""))).is_none());
        assert!(controller.current().is_none());
    }

    #[test]
    fn test_sentinel_leaves_pending_cycle_in_place() {
        let mut controller = SelectionController::new();
        let cycle = controller.on_user_selected(Some(UserId::new("7"))).unwrap();

        controller.on_user_selected(None);

        assert!(controller.is_current(cycle.id));
    }

    #[test]
    fn test_reselection_supersedes_pending_cycle() {
        let mut controller = SelectionController::new();
        let first = controller.on_user_selected(Some(UserId::new("7"))).unwrap();
        let second = controller.on_user_selected(Some(UserId::new("42"))).unwrap();

        assert!(!controller.is_current(first.id));
        assert!(controller.is_current(second.id));
    }

    #[test]
    fn test_reselecting_same_user_starts_a_new_cycle() {
        let mut controller = SelectionController::new();
        let first = controller.on_user_selected(Some(UserId::new("7"))).unwrap();
        let second = controller.on_user_selected(Some(UserId::new("7"))).unwrap();

        // Reselection is the retry path, so the old cycle goes stale even for
        // the same user.
        assert_ne!(first.id, second.id);
        assert!(!controller.is_current(first.id));
        assert!(controller.is_current(second.id));
    }
}

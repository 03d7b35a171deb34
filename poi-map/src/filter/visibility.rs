use super::category::CategoryTag;
use super::point_store::Point;
use std::collections::BTreeSet;

/// Side effect produced by a visibility transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityCommand {
    ShowMarkers(CategoryTag),
    HideMarkers(CategoryTag),
    SetAffordance { category: CategoryTag, active: bool },
}

/// Set of categories currently shown on the map.
///
/// Transitions are pure: [`VisibilityState::toggle`] returns the next state
/// and the commands that bring markers and buttons in line with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityState {
    visible: BTreeSet<CategoryTag>,
}

impl VisibilityState {
    /// All categories present in `points`.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        Self {
            visible: points.into_iter().map(|p| p.category.clone()).collect(),
        }
    }

    pub fn contains(&self, category: &CategoryTag) -> bool {
        self.visible.contains(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTag> {
        self.visible.iter()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Flip membership of `category`.
    pub fn toggle(&self, category: &CategoryTag) -> (Self, Vec<VisibilityCommand>) {
        let mut next = self.clone();
        let now_visible = !next.visible.remove(category);
        if now_visible {
            next.visible.insert(category.clone());
        }

        let markers = if now_visible {
            VisibilityCommand::ShowMarkers(category.clone())
        } else {
            VisibilityCommand::HideMarkers(category.clone())
        };
        let affordance = VisibilityCommand::SetAffordance {
            category: category.clone(),
            active: now_visible,
        };

        (next, vec![markers, affordance])
    }

    /// Affordance commands for every known category, matching this state.
    pub fn sync_affordances(&self) -> Vec<VisibilityCommand> {
        CategoryTag::KNOWN
            .into_iter()
            .map(|category| VisibilityCommand::SetAffordance {
                active: self.contains(&category),
                category,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::point_store::point;

    #[test]
    fn initial_state_is_derived_from_data() {
        let points = [point("A", "CAFE", 1.0, 1.0), point("B", "FOOD", 2.0, 2.0)];
        let state = VisibilityState::from_points(&points);
        assert_eq!(state.len(), 2);
        assert!(state.contains(&CategoryTag::Cafe));
        assert!(state.contains(&CategoryTag::Food));
        assert!(!state.contains(&CategoryTag::Mart));
    }

    #[test]
    fn toggle_hides_a_visible_category() {
        let points = [point("A", "CAFE", 1.0, 1.0)];
        let state = VisibilityState::from_points(&points);

        let (next, commands) = state.toggle(&CategoryTag::Cafe);

        assert!(!next.contains(&CategoryTag::Cafe));
        assert_eq!(
            commands,
            vec![
                VisibilityCommand::HideMarkers(CategoryTag::Cafe),
                VisibilityCommand::SetAffordance {
                    category: CategoryTag::Cafe,
                    active: false
                },
            ]
        );
        // The source state is untouched.
        assert!(state.contains(&CategoryTag::Cafe));
    }

    #[test]
    fn double_toggle_restores_the_exact_state() {
        let points = [point("A", "CAFE", 1.0, 1.0), point("B", "FOOD", 2.0, 2.0)];
        let state = VisibilityState::from_points(&points);

        for category in CategoryTag::KNOWN {
            let (once, _) = state.toggle(&category);
            assert_ne!(once, state);
            let (twice, commands) = once.toggle(&category);
            assert_eq!(twice, state);
            assert!(commands.contains(&VisibilityCommand::SetAffordance {
                active: state.contains(&category),
                category: category.clone(),
            }));
        }
    }

    #[test]
    fn toggle_of_absent_category_adds_it() {
        let state = VisibilityState::default();
        let (next, commands) = state.toggle(&CategoryTag::Pharmacy);
        assert!(next.contains(&CategoryTag::Pharmacy));
        assert_eq!(commands[0], VisibilityCommand::ShowMarkers(CategoryTag::Pharmacy));
    }

    #[test]
    fn sync_affordances_covers_known_categories_only() {
        let points = [point("A", "CAFE", 1.0, 1.0), point("Z", "ATM", 0.0, 0.0)];
        let state = VisibilityState::from_points(&points);
        let commands = state.sync_affordances();

        assert_eq!(commands.len(), 4);
        assert!(commands.contains(&VisibilityCommand::SetAffordance {
            category: CategoryTag::Cafe,
            active: true
        }));
        assert!(commands.contains(&VisibilityCommand::SetAffordance {
            category: CategoryTag::Mart,
            active: false
        }));
    }
}

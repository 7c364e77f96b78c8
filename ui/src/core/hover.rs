//! Hover focus shared between the map and the dependent views.

use super::dataset::RegionRecord;
use super::geo::join;

/// What a hovered shape resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Focus {
    Known(RegionRecord),
    /// The shape has no dataset record; only its name is known.
    Unknown { name: String },
}

impl Focus {
    pub fn name(&self) -> &str {
        match self {
            Focus::Known(record) => &record.name,
            Focus::Unknown { name } => name,
        }
    }

    pub fn record(&self) -> Option<&RegionRecord> {
        match self {
            Focus::Known(record) => Some(record),
            Focus::Unknown { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum HoverState {
    #[default]
    Idle,
    Focused(Focus),
}

impl HoverState {
    /// Pointer entered the shape called `shape_name`. Replaces any current focus.
    pub fn enter(&mut self, shape_name: &str, records: &[RegionRecord]) {
        let focus = match join(shape_name, records) {
            Some(record) => Focus::Known(record.clone()),
            None => Focus::Unknown {
                name: shape_name.to_string(),
            },
        };
        *self = HoverState::Focused(focus);
    }

    pub fn leave(&mut self) {
        *self = HoverState::Idle;
    }

    pub fn focus(&self) -> Option<&Focus> {
        match self {
            HoverState::Idle => None,
            HoverState::Focused(focus) => Some(focus),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, HoverState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RegionRecord> {
        vec![
            RegionRecord::from_counts("Kerala", 85, 100),
            RegionRecord::from_counts("Tamil Nadu", 77, 100),
        ]
    }

    #[test]
    fn starts_idle() {
        assert!(HoverState::default().is_idle());
    }

    #[test]
    fn enter_resolves_through_join() {
        let mut state = HoverState::default();
        state.enter("TamilNadu", &records());
        let focus = state.focus().unwrap();
        assert_eq!(focus.name(), "Tamil Nadu");
        assert_eq!(focus.record().map(|r| r.vaccinated), Some(77));
    }

    #[test]
    fn unmatched_shape_is_unknown() {
        let mut state = HoverState::default();
        state.enter("Unknownistan", &records());
        assert_eq!(
            state,
            HoverState::Focused(Focus::Unknown {
                name: "Unknownistan".into()
            })
        );
        assert!(state.focus().unwrap().record().is_none());
    }

    #[test]
    fn enter_supersedes_without_idle() {
        let mut state = HoverState::default();
        state.enter("Kerala", &records());
        state.enter("Tamil Nadu", &records());
        assert_eq!(state.focus().map(Focus::name), Some("Tamil Nadu"));
    }

    #[test]
    fn leave_returns_to_idle() {
        let mut state = HoverState::default();
        state.enter("Kerala", &records());
        state.leave();
        assert!(state.is_idle());
    }
}

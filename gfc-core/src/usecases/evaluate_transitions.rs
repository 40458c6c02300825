use std::collections::HashSet;

use super::prelude::*;

/// Outcome of evaluating one observed position against the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// All regions containing the position, regardless of their
    /// notification flags.
    pub current_inside: HashSet<RegionId>,
    pub events: Vec<TransitionEvent>,
}

/// Decide which regions were entered or exited since the previous
/// evaluation.
///
/// Pure and deterministic: the observation time is an input and the
/// same inputs always yield the same outputs. Containment is a
/// closed disk, so a point exactly at the radius counts as inside.
pub fn evaluate_transitions(
    position: MapPoint,
    registry: &GeofenceRegistry,
    previous_inside: &HashSet<RegionId>,
    observed_at: Timestamp,
) -> Evaluation {
    let mut current_inside = HashSet::new();
    let mut events = Vec::new();
    for region in registry {
        let was_inside = previous_inside.contains(&region.id);
        if region.contains_point(position) {
            current_inside.insert(region.id.clone());
            if !was_inside && region.notify_on_enter {
                events.push(TransitionEvent {
                    region: region.id.clone(),
                    kind: TransitionKind::Enter,
                    observed_at,
                });
            }
        } else if was_inside && region.notify_on_exit {
            events.push(TransitionEvent {
                region: region.id.clone(),
                kind: TransitionKind::Exit,
                observed_at,
            });
        }
    }
    Evaluation {
        current_inside,
        events,
    }
}

//! Components and resources for the interaction detector.
use std::collections::HashMap;
use std::fmt;

use bevy::prelude::*;

/// Classification of what pressing the interact key will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionKind {
    #[default]
    None,
    PickUp,
    Cook,
    Talk,
}

impl InteractionKind {
    /// Verb shown on the contextual prompt. `None` has no prompt.
    pub fn verb(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::PickUp => Some("Pick up"),
            Self::Cook => Some("Cook"),
            Self::Talk => Some("Talk"),
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::PickUp => "pick up",
            Self::Cook => "cook",
            Self::Talk => "talk",
        };
        write!(f, "{}", name)
    }
}

/// Resource tracking the interactable object the player is currently near.
///
/// Tracks at most one target: any proximity exit resets the detector and any
/// enter overwrites the tracked target, even when trigger volumes overlap.
/// Last overlap wins; there is no per-object multiplicity tracking.
#[derive(Resource, Debug, Default)]
pub struct InteractionDetector {
    potential_kind: InteractionKind,
    current_kind: InteractionKind,
    current_target: Option<Entity>,
}

impl InteractionDetector {
    /// Classification of the object currently in the trigger volume.
    pub fn potential_kind(&self) -> InteractionKind {
        self.potential_kind
    }

    /// Kind of the most recently activated interaction. Retains its value
    /// after the player leaves the trigger volume; only activation writes it.
    pub fn current_kind(&self) -> InteractionKind {
        self.current_kind
    }

    /// The object currently overlapping the proximity volume, if any.
    pub fn current_target(&self) -> Option<Entity> {
        self.current_target
    }

    /// Records a proximity enter. The target is always overwritten; the
    /// potential kind only changes when the object classified to something
    /// actionable (unrecognized tags leave the previous classification alone).
    pub fn record_enter(&mut self, kind: InteractionKind, target: Entity) {
        if kind != InteractionKind::None {
            self.potential_kind = kind;
        }
        self.current_target = Some(target);
    }

    /// Resets to idle. Called on every proximity exit, no matter which
    /// object left the volume.
    pub fn reset(&mut self) {
        self.potential_kind = InteractionKind::None;
        self.current_target = None;
    }

    /// Marks an interaction as activated for external state-machine readers.
    pub fn mark_activated(&mut self, kind: InteractionKind) {
        self.current_kind = kind;
    }
}

/// Resource mapping interactable tags to interaction kinds.
///
/// Built from `config/interaction.toml`; tags are matched lowercase.
#[derive(Resource, Debug, Clone, Default)]
pub struct InteractionRuleset {
    by_tag: HashMap<String, InteractionKind>,
}

impl InteractionRuleset {
    pub fn new(entries: impl IntoIterator<Item = (String, InteractionKind)>) -> Self {
        let by_tag = entries
            .into_iter()
            .map(|(tag, kind)| (tag.trim().to_lowercase(), kind))
            .filter(|(tag, _)| !tag.is_empty())
            .collect();
        Self { by_tag }
    }

    /// Classifies a tag. Unknown tags classify to `InteractionKind::None`.
    pub fn classify(&self, tag: &str) -> InteractionKind {
        self.by_tag
            .get(&tag.trim().to_lowercase())
            .copied()
            .unwrap_or(InteractionKind::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruleset() -> InteractionRuleset {
        InteractionRuleset::new([
            ("pickable".to_string(), InteractionKind::PickUp),
            ("cooking_pot".to_string(), InteractionKind::Cook),
            ("npc".to_string(), InteractionKind::Talk),
        ])
    }

    fn entities<const N: usize>(world: &mut World) -> [Entity; N] {
        std::array::from_fn(|_| world.spawn_empty().id())
    }

    #[test]
    fn classify_maps_known_tags_and_ignores_case() {
        let rules = ruleset();
        assert_eq!(rules.classify("pickable"), InteractionKind::PickUp);
        assert_eq!(rules.classify("Cooking_Pot"), InteractionKind::Cook);
        assert_eq!(rules.classify(" npc "), InteractionKind::Talk);
        assert_eq!(rules.classify("bench"), InteractionKind::None);
    }

    #[test]
    fn enter_overwrites_target_and_classification() {
        let mut world = World::new();
        let mut detector = InteractionDetector::default();
        let [first, second] = entities(&mut world);

        detector.record_enter(InteractionKind::PickUp, first);
        assert_eq!(detector.potential_kind(), InteractionKind::PickUp);
        assert_eq!(detector.current_target(), Some(first));

        // Last overlap wins, even without an intervening exit.
        detector.record_enter(InteractionKind::Cook, second);
        assert_eq!(detector.potential_kind(), InteractionKind::Cook);
        assert_eq!(detector.current_target(), Some(second));
    }

    #[test]
    fn unrecognized_enter_keeps_previous_classification() {
        let mut world = World::new();
        let mut detector = InteractionDetector::default();
        let [npc, bench] = entities(&mut world);

        detector.record_enter(InteractionKind::Talk, npc);
        detector.record_enter(InteractionKind::None, bench);

        assert_eq!(detector.potential_kind(), InteractionKind::Talk);
        // The target still follows the most recent overlap.
        assert_eq!(detector.current_target(), Some(bench));
    }

    #[test]
    fn reset_clears_classification_and_target_but_not_current_kind() {
        let mut world = World::new();
        let mut detector = InteractionDetector::default();
        let [pot] = entities(&mut world);
        detector.record_enter(InteractionKind::Cook, pot);
        detector.mark_activated(InteractionKind::Cook);

        detector.reset();

        assert_eq!(detector.potential_kind(), InteractionKind::None);
        assert_eq!(detector.current_target(), None);
        assert_eq!(detector.current_kind(), InteractionKind::Cook);
    }
}

//! Transition systems for the interaction detector.
use bevy::prelude::*;

use crate::controls::{
    components::{ActiveInputMode, InputMode},
    events::InteractPressedEvent,
};
use crate::proximity::events::{ProximityEnteredEvent, ProximityExitedEvent};

use super::{
    components::{InteractionDetector, InteractionKind, InteractionRuleset},
    events::{
        CookingStartedEvent, InteractionEndedEvent, ItemPickedUpEvent, PromptChangedEvent,
        TalkStartedEvent,
    },
};

/// Applies proximity enter/exit messages to the detector.
///
/// Exits are consumed first so a same-frame handover between volumes ends up
/// tracking the newly entered object. Any exit resets the detector, no matter
/// which object left; enters classify by tag and raise the prompt when the
/// tag is recognized.
pub fn apply_proximity_transitions(
    mut detector: ResMut<InteractionDetector>,
    ruleset: Res<InteractionRuleset>,
    mut exited: MessageReader<ProximityExitedEvent>,
    mut entered: MessageReader<ProximityEnteredEvent>,
    mut prompts: MessageWriter<PromptChangedEvent>,
) {
    for _ in exited.read() {
        detector.reset();
        prompts.write(PromptChangedEvent {
            visible: false,
            kind: InteractionKind::None,
        });
    }

    for enter in entered.read() {
        let kind = ruleset.classify(&enter.tag);
        detector.record_enter(kind, enter.entity);
        if kind != InteractionKind::None {
            debug!("Potential interaction: {} with {:?}", kind, enter.entity);
            prompts.write(PromptChangedEvent {
                visible: true,
                kind,
            });
        }
    }
}

/// Dispatches an interact press on the current potential kind.
///
/// Every branch is a silent no-op when its precondition is unmet; there is no
/// failure path here. Picking up requests despawn of the target and relies on
/// the proximity diff to observe the despawn and reset the detector.
pub fn handle_interact_pressed(
    mut commands: Commands,
    mut detector: ResMut<InteractionDetector>,
    mut mode: ResMut<ActiveInputMode>,
    mut presses: MessageReader<InteractPressedEvent>,
    mut pickups: MessageWriter<ItemPickedUpEvent>,
    mut cooking: MessageWriter<CookingStartedEvent>,
    mut talks: MessageWriter<TalkStartedEvent>,
) {
    for _ in presses.read() {
        match detector.potential_kind() {
            InteractionKind::None => {}
            InteractionKind::PickUp => {
                if let Some(item) = detector.current_target() {
                    info!("Picking up {:?}", item);
                    pickups.write(ItemPickedUpEvent { item });
                    detector.mark_activated(InteractionKind::PickUp);
                    // The destroy request tolerates an already-dead target.
                    if let Ok(mut item_commands) = commands.get_entity(item) {
                        item_commands.despawn();
                    }
                }
            }
            InteractionKind::Cook => {
                info!("Cooking started");
                cooking.write(CookingStartedEvent);
                mode.set(InputMode::UiInteraction);
                detector.mark_activated(InteractionKind::Cook);
            }
            InteractionKind::Talk => {
                if let Some(actor) = detector.current_target() {
                    info!("Talking to {:?}", actor);
                    talks.write(TalkStartedEvent { actor });
                    mode.set(InputMode::Dialogue);
                    detector.mark_activated(InteractionKind::Talk);
                }
            }
        }
    }
}

/// Restores the gameplay bindings when a cooking or talking session ends,
/// and re-raises the prompt if the player is still in a trigger volume.
///
/// The re-shown prompt uses the live potential kind, not the stale kind that
/// triggered the session; if the player walked out in the meantime there is
/// nothing to show. Pick-ups never re-show, the object is gone.
pub fn handle_interaction_ended(
    detector: Res<InteractionDetector>,
    mut mode: ResMut<ActiveInputMode>,
    mut ended: MessageReader<InteractionEndedEvent>,
    mut prompts: MessageWriter<PromptChangedEvent>,
) {
    for _ in ended.read() {
        mode.set(InputMode::Gameplay);
        let resumable = matches!(
            detector.current_kind(),
            InteractionKind::Cook | InteractionKind::Talk
        );
        if resumable && detector.potential_kind() != InteractionKind::None {
            debug!("Re-showing interaction prompt: {}", detector.potential_kind());
            prompts.write(PromptChangedEvent {
                visible: true,
                kind: detector.potential_kind(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use super::*;
    use crate::interaction::config::InteractionConfig;

    #[derive(Resource, Default)]
    struct Broadcasts {
        pickups: Vec<Entity>,
        cook_starts: usize,
        talk_starts: Vec<Entity>,
        prompts: Vec<(bool, InteractionKind)>,
    }

    fn capture_broadcasts(
        mut broadcasts: ResMut<Broadcasts>,
        mut pickups: MessageReader<ItemPickedUpEvent>,
        mut cooking: MessageReader<CookingStartedEvent>,
        mut talks: MessageReader<TalkStartedEvent>,
        mut prompts: MessageReader<PromptChangedEvent>,
    ) {
        for msg in pickups.read() {
            broadcasts.pickups.push(msg.item);
        }
        broadcasts.cook_starts += cooking.read().count();
        for msg in talks.read() {
            broadcasts.talk_starts.push(msg.actor);
        }
        for msg in prompts.read() {
            broadcasts.prompts.push((msg.visible, msg.kind));
        }
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_message::<ProximityEnteredEvent>()
            .add_message::<ProximityExitedEvent>()
            .add_message::<InteractPressedEvent>()
            .add_message::<ItemPickedUpEvent>()
            .add_message::<CookingStartedEvent>()
            .add_message::<TalkStartedEvent>()
            .add_message::<PromptChangedEvent>()
            .add_message::<InteractionEndedEvent>()
            .init_resource::<InteractionDetector>()
            .init_resource::<ActiveInputMode>()
            .init_resource::<Broadcasts>()
            .insert_resource(InteractionConfig::default().ruleset)
            .add_systems(
                Update,
                (
                    apply_proximity_transitions,
                    handle_interact_pressed,
                    handle_interaction_ended,
                    capture_broadcasts,
                )
                    .chain(),
            );
        app
    }

    fn enter(app: &mut App, entity: Entity, tag: &str) {
        app.world_mut()
            .resource_mut::<Messages<ProximityEnteredEvent>>()
            .write(ProximityEnteredEvent {
                entity,
                tag: tag.to_string(),
            });
    }

    fn exit(app: &mut App, entity: Entity) {
        app.world_mut()
            .resource_mut::<Messages<ProximityExitedEvent>>()
            .write(ProximityExitedEvent { entity });
    }

    fn press_interact(app: &mut App) {
        app.world_mut()
            .resource_mut::<Messages<InteractPressedEvent>>()
            .write(InteractPressedEvent);
    }

    fn end_interaction(app: &mut App) {
        app.world_mut()
            .resource_mut::<Messages<InteractionEndedEvent>>()
            .write(InteractionEndedEvent);
    }

    fn detector(app: &App) -> &InteractionDetector {
        app.world().resource::<InteractionDetector>()
    }

    fn mode(app: &App) -> InputMode {
        app.world().resource::<ActiveInputMode>().mode()
    }

    #[test]
    fn enter_classifies_and_shows_prompt() {
        let mut app = test_app();
        let pot = app.world_mut().spawn_empty().id();

        enter(&mut app, pot, "cooking_pot");
        app.update();

        assert_eq!(detector(&app).potential_kind(), InteractionKind::Cook);
        assert_eq!(detector(&app).current_target(), Some(pot));
        let broadcasts = app.world().resource::<Broadcasts>();
        assert_eq!(broadcasts.prompts, vec![(true, InteractionKind::Cook)]);
    }

    #[test]
    fn unrecognized_tag_keeps_classification_but_takes_target() {
        let mut app = test_app();
        let npc = app.world_mut().spawn_empty().id();
        let bench = app.world_mut().spawn_empty().id();

        enter(&mut app, npc, "npc");
        app.update();
        enter(&mut app, bench, "bench");
        app.update();

        assert_eq!(detector(&app).potential_kind(), InteractionKind::Talk);
        assert_eq!(detector(&app).current_target(), Some(bench));
        // No second prompt for the unrecognized object.
        let broadcasts = app.world().resource::<Broadcasts>();
        assert_eq!(broadcasts.prompts, vec![(true, InteractionKind::Talk)]);
    }

    #[test]
    fn any_exit_resets_to_idle() {
        let mut app = test_app();
        let npc = app.world_mut().spawn_empty().id();
        let stranger = app.world_mut().spawn_empty().id();

        enter(&mut app, npc, "npc");
        app.update();
        // An unrelated object exiting still clears the tracked state.
        exit(&mut app, stranger);
        app.update();

        assert_eq!(detector(&app).potential_kind(), InteractionKind::None);
        assert_eq!(detector(&app).current_target(), None);
    }

    #[test]
    fn interact_in_idle_is_a_no_op() {
        let mut app = test_app();
        press_interact(&mut app);
        app.update();

        assert_eq!(detector(&app).current_kind(), InteractionKind::None);
        let broadcasts = app.world().resource::<Broadcasts>();
        assert!(broadcasts.pickups.is_empty());
        assert_eq!(broadcasts.cook_starts, 0);
        assert!(broadcasts.talk_starts.is_empty());
        assert!(broadcasts.prompts.is_empty());
        assert_eq!(mode(&app), InputMode::Gameplay);
    }

    #[test]
    fn pick_up_notifies_once_and_despawns_the_item() {
        let mut app = test_app();
        let mushroom = app.world_mut().spawn_empty().id();

        enter(&mut app, mushroom, "pickable");
        app.update();
        press_interact(&mut app);
        app.update();

        assert_eq!(detector(&app).current_kind(), InteractionKind::PickUp);
        assert_eq!(mode(&app), InputMode::Gameplay);
        let broadcasts = app.world().resource::<Broadcasts>();
        assert_eq!(broadcasts.pickups, vec![mushroom]);
        assert!(app.world().get_entity(mushroom).is_err());
    }

    #[test]
    fn cook_notifies_switches_mode_and_records_kind() {
        let mut app = test_app();
        let pot = app.world_mut().spawn_empty().id();

        enter(&mut app, pot, "cooking_pot");
        app.update();
        press_interact(&mut app);
        app.update();

        assert_eq!(detector(&app).current_kind(), InteractionKind::Cook);
        assert_eq!(mode(&app), InputMode::UiInteraction);
        let broadcasts = app.world().resource::<Broadcasts>();
        assert_eq!(broadcasts.cook_starts, 1);
        // The pot survives, unlike a picked-up item.
        assert!(app.world().get_entity(pot).is_ok());
    }

    #[test]
    fn ended_after_cook_restores_gameplay_and_reshows_prompt() {
        let mut app = test_app();
        let pot = app.world_mut().spawn_empty().id();

        enter(&mut app, pot, "cooking_pot");
        app.update();
        press_interact(&mut app);
        app.update();
        end_interaction(&mut app);
        app.update();

        assert_eq!(mode(&app), InputMode::Gameplay);
        let broadcasts = app.world().resource::<Broadcasts>();
        // Initial prompt on enter, then exactly one re-show on ended.
        assert_eq!(
            broadcasts.prompts,
            vec![(true, InteractionKind::Cook), (true, InteractionKind::Cook)]
        );
    }

    #[test]
    fn ended_after_pick_up_reshows_nothing() {
        let mut app = test_app();
        let mushroom = app.world_mut().spawn_empty().id();

        enter(&mut app, mushroom, "pickable");
        app.update();
        press_interact(&mut app);
        app.update();
        end_interaction(&mut app);
        app.update();

        let broadcasts = app.world().resource::<Broadcasts>();
        assert_eq!(broadcasts.prompts, vec![(true, InteractionKind::PickUp)]);
    }

    #[test]
    fn talk_then_leave_then_ended_reshows_nothing() {
        let mut app = test_app();
        let npc = app.world_mut().spawn_empty().id();

        enter(&mut app, npc, "npc");
        app.update();
        press_interact(&mut app);
        app.update();

        assert_eq!(detector(&app).current_kind(), InteractionKind::Talk);
        assert_eq!(mode(&app), InputMode::Dialogue);
        let talk_starts = app.world().resource::<Broadcasts>().talk_starts.clone();
        assert_eq!(talk_starts, vec![npc]);

        // Player walks away while the conversation UI is still up.
        exit(&mut app, npc);
        app.update();
        assert_eq!(detector(&app).potential_kind(), InteractionKind::None);

        end_interaction(&mut app);
        app.update();

        assert_eq!(mode(&app), InputMode::Gameplay);
        let broadcasts = app.world().resource::<Broadcasts>();
        // Enter prompt, hide on exit, and no re-show after the session.
        assert_eq!(
            broadcasts.prompts,
            vec![
                (true, InteractionKind::Talk),
                (false, InteractionKind::None)
            ]
        );
    }

    #[test]
    fn overlapping_enters_track_the_last_object() {
        let mut app = test_app();
        let mushroom = app.world_mut().spawn_empty().id();
        let pot = app.world_mut().spawn_empty().id();

        enter(&mut app, mushroom, "pickable");
        enter(&mut app, pot, "cooking_pot");
        app.update();

        assert_eq!(detector(&app).potential_kind(), InteractionKind::Cook);
        assert_eq!(detector(&app).current_target(), Some(pot));
    }
}

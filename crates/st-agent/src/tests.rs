//! Unit tests for st-agent.

use st_behavior::{ArriveBands, Behavior, BehaviorMode, MotionParams, MotionState};
use st_core::{AgentId, Vec2};

use crate::{AgentStoreBuilder, Target};

fn seek() -> Behavior {
    Behavior::seek(MotionParams::default(), ArriveBands::default())
}

fn evade() -> Behavior {
    Behavior::evade(MotionParams::default(), 5.0).unwrap()
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn arrays_have_correct_length() {
        let store = AgentStoreBuilder::new()
            .agents(3, seek(), Target::None)
            .agent(evade(), Vec2::new(1.0, 0.0).into())
            .build()
            .unwrap();
        assert_eq!(store.count, 4);
        assert_eq!(store.behavior.len(), 4);
        assert_eq!(store.motion_state.len(), 4);
        assert_eq!(store.distressed.len(), 4);
        assert_eq!(store.target.len(), 4);
    }

    #[test]
    fn initial_state_is_idle_and_calm() {
        let store = AgentStoreBuilder::with_capacity(2)
            .agents(2, seek(), Target::None)
            .build()
            .unwrap();
        assert!(store.motion_state.iter().all(|&s| s == MotionState::Idle));
        assert!(store.distressed.iter().all(|&d| !d));
    }

    #[test]
    fn ids_follow_insertion_order() {
        let b = AgentStoreBuilder::new().agent(seek(), Target::None);
        assert_eq!(b.next_id(), AgentId(1));
        let store = b.agent(evade(), Target::None).build().unwrap();
        assert_eq!(store.mode(AgentId(0)), BehaviorMode::Seek);
        assert_eq!(store.mode(AgentId(1)), BehaviorMode::Evade);
    }

    #[test]
    fn invalid_literal_behavior_is_rejected() {
        let bad = Behavior::Evade { motion: MotionParams::default(), evade_radius: 0.0 };
        let err = AgentStoreBuilder::new()
            .agent(seek(), Target::None)
            .agent(bad, Target::None)
            .build()
            .err()
            .expect("zero evade radius must fail");
        assert!(err.to_string().contains("agent 1"), "{err}");
    }

    #[test]
    fn empty_store() {
        let store = AgentStoreBuilder::new().build().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.agent_ids().count(), 0);
    }
}

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn agent_ids_ascending() {
        let store = AgentStoreBuilder::new().agents(5, seek(), Target::None).build().unwrap();
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, (0..5).map(AgentId).collect::<Vec<_>>());
        assert!(store.contains(AgentId(4)));
        assert!(!store.contains(AgentId(5)));
    }

    #[test]
    fn agents_in_mode_filters() {
        let store = AgentStoreBuilder::new()
            .agent(evade(), Target::None)
            .agent(seek(), Target::None)
            .agent(evade(), Target::None)
            .build()
            .unwrap();
        let evaders: Vec<AgentId> = store.agents_in_mode(BehaviorMode::Evade).collect();
        assert_eq!(evaders, vec![AgentId(0), AgentId(2)]);
    }
}

#[cfg(test)]
mod target {
    use super::*;

    #[test]
    fn resolve_variants() {
        let lookup = |a: AgentId| (a == AgentId(3)).then_some(Vec2::new(7.0, 7.0));
        assert_eq!(Target::None.resolve(lookup), None);
        assert_eq!(Target::Point(Vec2::new(1.0, 2.0)).resolve(lookup), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(Target::Agent(AgentId(3)).resolve(lookup), Some(Vec2::new(7.0, 7.0)));
        assert_eq!(Target::Agent(AgentId(9)).resolve(lookup), None);
    }

    #[test]
    fn conversions_and_bound() {
        assert_eq!(Target::from(AgentId(2)), Target::Agent(AgentId(2)));
        assert!(Target::from(Vec2::ZERO).is_bound());
        assert!(!Target::default().is_bound());
    }
}

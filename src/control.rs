//! Steering decisions.
//!
//! The simulation core only knows about the `DecisionSource` capability:
//! three danger readings in, one discrete steering action out. Keyboard
//! play, the built-in scripted policy, and externally trained models all
//! plug in behind the same trait.

use crate::config::SCRIPTED_CAUTION;
use crate::sensors::SENSOR_COUNT;
use macroquad::prelude::{KeyCode, is_key_down};
use rand::prelude::*;

/// Discrete steering action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steering {
    Left,
    Straight,
    Right,
}

impl Steering {
    /// The kinematics input for this action. Positive steers
    /// counterclockwise (left).
    pub fn input(self) -> f64 {
        match self {
            Steering::Left => 1.0,
            Steering::Straight => 0.0,
            Steering::Right => -1.0,
        }
    }
}

/// Something that can steer a scooter given its sensor state.
pub trait DecisionSource {
    fn choose_action(&mut self, state: [f64; SENSOR_COUNT]) -> Steering;
}

/// Keyboard steering: A/Left and D/Right, both or neither means straight.
pub struct HumanInput;

impl DecisionSource for HumanInput {
    fn choose_action(&mut self, _state: [f64; SENSOR_COUNT]) -> Steering {
        let left = is_key_down(KeyCode::A) || is_key_down(KeyCode::Left);
        let right = is_key_down(KeyCode::D) || is_key_down(KeyCode::Right);
        match (left, right) {
            (true, false) => Steering::Left,
            (false, true) => Steering::Right,
            _ => Steering::Straight,
        }
    }
}

/// Built-in reflex driver: holds course until danger builds, then swerves
/// toward the side with more room, flipping a coin on exact ties.
pub struct ScriptedPolicy {
    rng: ThreadRng,
}

impl ScriptedPolicy {
    pub fn new() -> Self {
        ScriptedPolicy { rng: thread_rng() }
    }
}

impl Default for ScriptedPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionSource for ScriptedPolicy {
    fn choose_action(&mut self, state: [f64; SENSOR_COUNT]) -> Steering {
        let [forward, left, right] = state;
        if forward < SCRIPTED_CAUTION && left < SCRIPTED_CAUTION && right < SCRIPTED_CAUTION {
            return Steering::Straight;
        }
        if (left - right).abs() < f64::EPSILON {
            return if self.rng.gen_bool(0.5) {
                Steering::Left
            } else {
                Steering::Right
            };
        }
        if left < right {
            Steering::Left
        } else {
            Steering::Right
        }
    }
}

/// Adapter for an externally trained policy. The wrapped function gets
/// the raw feature vector the agent was trained on.
#[allow(dead_code)]
pub struct ExternalModel {
    model: Box<dyn FnMut([f64; SENSOR_COUNT]) -> Steering>,
}

impl ExternalModel {
    #[allow(dead_code)]
    pub fn new(model: impl FnMut([f64; SENSOR_COUNT]) -> Steering + 'static) -> Self {
        ExternalModel {
            model: Box::new(model),
        }
    }
}

impl DecisionSource for ExternalModel {
    fn choose_action(&mut self, state: [f64; SENSOR_COUNT]) -> Steering {
        (self.model)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steering_input_mapping() {
        assert_eq!(Steering::Left.input(), 1.0);
        assert_eq!(Steering::Straight.input(), 0.0);
        assert_eq!(Steering::Right.input(), -1.0);
    }

    #[test]
    fn scripted_policy_holds_course_when_clear() {
        let mut policy = ScriptedPolicy::new();
        assert_eq!(policy.choose_action([0.1, 0.2, 0.3]), Steering::Straight);
    }

    #[test]
    fn scripted_policy_swerves_toward_open_side() {
        let mut policy = ScriptedPolicy::new();
        assert_eq!(policy.choose_action([0.9, 0.2, 0.7]), Steering::Left);
        assert_eq!(policy.choose_action([0.9, 0.7, 0.2]), Steering::Right);
        // A blocked side triggers a swerve even with the nose clear.
        assert_eq!(policy.choose_action([0.1, 0.8, 0.2]), Steering::Right);
    }

    #[test]
    fn external_model_delegates_to_closure() {
        let mut model = ExternalModel::new(|state| {
            if state[0] > 0.5 {
                Steering::Right
            } else {
                Steering::Straight
            }
        });
        assert_eq!(model.choose_action([0.9, 0.0, 0.0]), Steering::Right);
        assert_eq!(model.choose_action([0.1, 0.0, 0.0]), Steering::Straight);
    }
}

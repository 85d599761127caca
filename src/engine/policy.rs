use serde::{Deserialize, Serialize};

/// Tunable probabilities and thresholds that drive the event simulator.
///
/// The defaults reproduce the stock match feel; none of them are load-bearing
/// for correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationPolicy {
    /// Chance per minute that the ball moves to a new field zone
    pub zone_change: f64,
    /// Chance per minute in the attacking zone that a shot is taken
    pub shot: f64,
    /// Shot quality above which the shot counts as on target
    pub on_target_quality: f64,
    /// Shot quality above which the shot is a goal
    pub goal_quality: f64,
    pub foul: f64,
    /// Chance that a foul draws a card
    pub card: f64,
    /// Chance that a card is red rather than yellow
    pub red_card: f64,
    /// Chance per minute in the attacking zone that a corner is won
    pub corner: f64,
    pub corner_goal: f64,
    pub substitution: f64,
    /// Substitutions only happen after this minute
    pub substitution_after_minute: u32,
    pub possession_flip: f64,
    pub possession_shift_min: u32,
    pub possession_shift_max: u32,
    /// Chance that general commentary appends the score line
    pub commentary_score_line: f64,
}

impl Default for SimulationPolicy {
    fn default() -> Self {
        Self {
            zone_change: 0.2,
            shot: 0.4,
            on_target_quality: 0.6,
            goal_quality: 0.85,
            foul: 0.1,
            card: 0.3,
            red_card: 0.1,
            corner: 0.15,
            corner_goal: 0.1,
            substitution: 0.03,
            substitution_after_minute: 60,
            possession_flip: 0.3,
            possession_shift_min: 1,
            possession_shift_max: 3,
            commentary_score_line: 0.2,
        }
    }
}

impl SimulationPolicy {
    /// Every probability must be a valid probability and the thresholds ordered
    pub fn is_valid(&self) -> bool {
        let probabilities = [
            self.zone_change,
            self.shot,
            self.foul,
            self.card,
            self.red_card,
            self.corner,
            self.corner_goal,
            self.substitution,
            self.possession_flip,
            self.commentary_score_line,
        ];

        probabilities.iter().all(|p| (0.0..=1.0).contains(p))
            && self.on_target_quality <= self.goal_quality
            && self.possession_shift_min <= self.possession_shift_max
    }
}

use strum::IntoEnumIterator;

use super::commentary::Commentator;
use super::players::{random_goalkeeper, random_player, random_substitute};
use super::policy::SimulationPolicy;
use super::random::RandomSource;
use super::state::{FieldZone, Intensity, MatchState, Side};
use super::team::TeamDescriptor;
use crate::event::{CommentaryEvent, CommentaryKind, MatchEvent, MinuteUpdate};

/// Decides what happens in each simulated minute.
///
/// Draws are taken from the random source in a fixed order so a scripted
/// source can force any branch:
///
/// 1. zone change trial, then the new zone
/// 2. (attack zone) shot trial, shooter, shot quality, keeper on a save
/// 3. foul trial, offender, victim, card trial, red trial
/// 4. (attack zone) corner trial, taker, corner goal trial, scorer
/// 5. (after the substitution minute) substitution trial, side, outgoing, incoming
/// 6. possession flip trial, possession shift
pub struct EventSimulator<'a> {
    home: &'a TeamDescriptor,
    away: &'a TeamDescriptor,
    policy: &'a SimulationPolicy,
    half_time_minute: u32,
}

impl<'a> EventSimulator<'a> {
    pub fn new(
        home: &'a TeamDescriptor,
        away: &'a TeamDescriptor,
        policy: &'a SimulationPolicy,
        half_time_minute: u32,
    ) -> Self {
        Self {
            home,
            away,
            policy,
            half_time_minute,
        }
    }

    fn team(&self, side: Side) -> &'a TeamDescriptor {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    fn commentator(&self) -> Commentator<'a> {
        Commentator::new(self.home, self.away)
    }

    /// Advances the match by one minute and returns the events it produced,
    /// in the order they must be delivered
    pub fn simulate_minute(
        &self,
        state: &mut MatchState,
        rng: &mut dyn RandomSource,
    ) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        state.minute += 1;

        if rng.chance(self.policy.zone_change) {
            let zones: Vec<FieldZone> = FieldZone::iter().collect();
            state.field_zone = zones[rng.pick_index(zones.len())];
        }

        if state.field_zone == FieldZone::Attack && rng.chance(self.policy.shot) {
            self.simulate_shot(state, rng, &mut events);
        }

        if rng.chance(self.policy.foul) {
            self.simulate_foul(state, rng, &mut events);
        }

        if state.field_zone == FieldZone::Attack && rng.chance(self.policy.corner) {
            self.simulate_corner(state, rng, &mut events);
        }

        if state.minute > self.policy.substitution_after_minute
            && rng.chance(self.policy.substitution)
        {
            self.simulate_substitution(state, rng, &mut events);
        }

        if rng.chance(self.policy.possession_flip) {
            let shift = rng.between(
                u64::from(self.policy.possession_shift_min),
                u64::from(self.policy.possession_shift_max),
            ) as u32;
            state.possession = state.possession.opponent();
            state.statistics.shift_possession(state.possession, shift);
        }

        events.push(MatchEvent::Minute(MinuteUpdate {
            minute: state.minute,
            score: state.score,
            statistics: state.statistics.clone(),
        }));

        if state.minute == self.half_time_minute {
            events.push(commentary(
                state.minute,
                CommentaryKind::HalfTime,
                self.commentator().half_time(&state.score),
            ));
        }

        events
    }

    fn simulate_shot(
        &self,
        state: &mut MatchState,
        rng: &mut dyn RandomSource,
        events: &mut Vec<MatchEvent>,
    ) {
        let attacking = state.possession;
        let defending = attacking.opponent();
        let attacker = self.team(attacking);
        let defender = self.team(defending);

        let shooter = random_player(attacker, rng);
        let quality = f64::from(attacker.attack) / defender.effective_defense() * rng.next_unit();

        *state.statistics.shots.get_mut(attacking) += 1;
        events.push(commentary(
            state.minute,
            CommentaryKind::Shot,
            self.commentator().shot(&shooter, attacking),
        ));

        // off target: the shot line is all there is
        if quality <= self.policy.on_target_quality {
            return;
        }
        *state.statistics.shots_on_target.get_mut(attacking) += 1;

        if quality > self.policy.goal_quality {
            events.push(self.score_goal(state, attacking, &shooter, None));
        } else {
            let keeper = random_goalkeeper(defender, rng);
            events.push(commentary(
                state.minute,
                CommentaryKind::Save,
                self.commentator().save(&keeper, defending),
            ));
        }
    }

    fn simulate_foul(
        &self,
        state: &mut MatchState,
        rng: &mut dyn RandomSource,
        events: &mut Vec<MatchEvent>,
    ) {
        let defending = state.defending();
        let offender = random_player(self.team(defending), rng);
        let victim = random_player(self.team(state.possession), rng);

        *state.statistics.fouls.get_mut(defending) += 1;
        events.push(commentary(
            state.minute,
            CommentaryKind::Foul,
            self.commentator().foul(&offender, defending, &victim),
        ));

        if !rng.chance(self.policy.card) {
            return;
        }

        let red = rng.chance(self.policy.red_card);
        let text = self.commentator().card(&offender, defending, red);
        if red {
            *state.statistics.red_cards.get_mut(defending) += 1;
            events.push(MatchEvent::Commentary(
                CommentaryEvent::new(state.minute, CommentaryKind::Card, text).severe(),
            ));
        } else {
            *state.statistics.yellow_cards.get_mut(defending) += 1;
            events.push(commentary(state.minute, CommentaryKind::Card, text));
        }
    }

    fn simulate_corner(
        &self,
        state: &mut MatchState,
        rng: &mut dyn RandomSource,
        events: &mut Vec<MatchEvent>,
    ) {
        let attacking = state.possession;
        let taker = random_player(self.team(attacking), rng);

        *state.statistics.corners.get_mut(attacking) += 1;
        events.push(commentary(
            state.minute,
            CommentaryKind::Corner,
            self.commentator().corner(&taker, attacking),
        ));

        if rng.chance(self.policy.corner_goal) {
            let scorer = random_player(self.team(attacking), rng);
            let context = self.commentator().headed_from_corner(&taker);
            events.push(self.score_goal(state, attacking, &scorer, Some(&context)));
        }
    }

    fn simulate_substitution(
        &self,
        state: &mut MatchState,
        rng: &mut dyn RandomSource,
        events: &mut Vec<MatchEvent>,
    ) {
        let sides: Vec<Side> = Side::iter().collect();
        let side = sides[rng.pick_index(sides.len())];
        let outgoing = random_player(self.team(side), rng);
        let incoming = random_substitute(self.team(side), rng);

        events.push(commentary(
            state.minute,
            CommentaryKind::Substitution,
            self.commentator().substitution(side, &outgoing, &incoming),
        ));
    }

    /// Records a goal for `side`; the conceding side restarts from midfield
    fn score_goal(
        &self,
        state: &mut MatchState,
        side: Side,
        scorer: &str,
        context: Option<&str>,
    ) -> MatchEvent {
        *state.score.get_mut(side) += 1;
        state.possession = side.opponent();
        state.field_zone = FieldZone::Midfield;
        state.intensity = Intensity::High;

        commentary(
            state.minute,
            CommentaryKind::Goal,
            self.commentator().goal(scorer, side, context, &state.score),
        )
    }
}

fn commentary(minute: u32, kind: CommentaryKind, text: String) -> MatchEvent {
    MatchEvent::Commentary(CommentaryEvent::new(minute, kind, text))
}

// Commentary text. Everything here is a pure function of the names and
// score handed in at the call site.

use super::state::{FieldZone, Score, Side};
use super::team::TeamDescriptor;

const DEFENSE_LINES: [&str; 3] = [
    "{team} keep the ball deep in their own half, {player} in no hurry.",
    "{player} plays it around the back for {team}, looking for an opening.",
    "Patient build-up from {team}, {player} recycling possession.",
];

const MIDFIELD_LINES: [&str; 3] = [
    "{team} are controlling the midfield through {player}.",
    "{player} works the ball through the middle for {team}.",
    "{team} probe for space in midfield, {player} on the ball.",
];

const ATTACK_LINES: [&str; 3] = [
    "{team} are pressing high in the final third, {player} leading the charge!",
    "Dangerous moment! {player} has {team} camped around the box.",
    "{player} pushes forward for {team}, looking for a goal.",
];

/// Renders commentary for one fixture
#[derive(Debug, Clone, Copy)]
pub struct Commentator<'a> {
    home: &'a TeamDescriptor,
    away: &'a TeamDescriptor,
}

impl<'a> Commentator<'a> {
    pub fn new(home: &'a TeamDescriptor, away: &'a TeamDescriptor) -> Self {
        Self { home, away }
    }

    pub fn team_name(&self, side: Side) -> &'a str {
        match side {
            Side::Home => &self.home.name,
            Side::Away => &self.away.name,
        }
    }

    pub fn score_line(&self, score: &Score) -> String {
        format!(
            "{} {} - {} {}",
            self.home.name, score.home, score.away, self.away.name
        )
    }

    pub fn kickoff(&self) -> String {
        match &self.home.stadium {
            Some(stadium) => format!(
                "Kick-off at {}! {} take on {}.",
                stadium, self.home.name, self.away.name
            ),
            None => format!(
                "Kick-off! {} take on {}.",
                self.home.name, self.away.name
            ),
        }
    }

    pub fn shot(&self, shooter: &str, side: Side) -> String {
        format!("{} ({}) lets fly at goal!", shooter, self.team_name(side))
    }

    pub fn save(&self, keeper: &str, side: Side) -> String {
        format!(
            "Great save by {}! {} keep it out.",
            keeper,
            self.team_name(side)
        )
    }

    pub fn goal(&self, scorer: &str, side: Side, context: Option<&str>, score: &Score) -> String {
        let mut text = format!("GOAL! {} scores for {}!", scorer, self.team_name(side));
        if let Some(context) = context {
            text.push(' ');
            text.push_str(context);
        }
        text.push(' ');
        text.push_str(&self.score_line(score));
        text
    }

    pub fn foul(&self, offender: &str, offender_side: Side, victim: &str) -> String {
        format!(
            "Foul by {} ({}) on {}.",
            offender,
            self.team_name(offender_side),
            victim
        )
    }

    pub fn card(&self, player: &str, side: Side, red: bool) -> String {
        if red {
            format!(
                "Red card! {} ({}) is sent off!",
                player,
                self.team_name(side)
            )
        } else {
            format!(
                "Yellow card for {} ({}).",
                player,
                self.team_name(side)
            )
        }
    }

    pub fn corner(&self, taker: &str, side: Side) -> String {
        format!(
            "Corner to {}. {} will take it.",
            self.team_name(side),
            taker
        )
    }

    /// Context line for a goal scored from a corner
    pub fn headed_from_corner(&self, taker: &str) -> String {
        format!("Headed in after {}'s corner!", taker)
    }

    pub fn substitution(&self, side: Side, outgoing: &str, incoming: &str) -> String {
        format!(
            "Substitution for {}: {} comes on for {}.",
            self.team_name(side),
            incoming,
            outgoing
        )
    }

    pub fn half_time(&self, score: &Score) -> String {
        format!("Half-time. {}", self.score_line(score))
    }

    pub fn full_time(&self, score: &Score) -> String {
        format!("Full-time! {}", self.score_line(score))
    }

    /// Filler commentary keyed by zone; `variant` indexes the zone's templates
    pub fn general(
        &self,
        zone: FieldZone,
        in_possession: Side,
        player: &str,
        variant: usize,
        score: Option<&Score>,
    ) -> String {
        let templates = general_templates(zone);
        let template = templates[variant % templates.len()];
        let mut text = template
            .replace("{team}", self.team_name(in_possession))
            .replace("{player}", player);
        if let Some(score) = score {
            text.push(' ');
            text.push_str(&self.score_line(score));
        }
        text
    }
}

pub fn general_templates(zone: FieldZone) -> &'static [&'static str] {
    match zone {
        FieldZone::Defense => &DEFENSE_LINES,
        FieldZone::Midfield => &MIDFIELD_LINES,
        FieldZone::Attack => &ATTACK_LINES,
    }
}

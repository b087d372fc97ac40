use serde::{Deserialize, Serialize};

use super::rates::{economy, strike_rate};
use crate::models::{InningsNumber, Match, Player, Team, WicketKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingLine {
    pub player_id: String,
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
    pub dismissal: Option<WicketKind>,
    pub at_crease: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingLine {
    pub player_id: String,
    pub name: String,
    pub overs: String,
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
    pub economy: f64,
    pub dots: u32,
    pub wides: u32,
    pub no_balls: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsCard {
    pub batting_team: String,
    pub bowling_team: String,
    pub runs: u32,
    pub wickets: u32,
    pub overs: String,
    /// Runs not scored off the bat.
    pub extras: u32,
    pub batting: Vec<BattingLine>,
    /// Only players who have bowled a legal ball.
    pub bowling: Vec<BowlingLine>,
}

fn batting_line(player: &Player, at_crease: bool) -> BattingLine {
    BattingLine {
        player_id: player.id.clone(),
        name: player.name.clone(),
        runs: player.runs,
        balls: player.balls,
        fours: player.fours,
        sixes: player.sixes,
        strike_rate: strike_rate(player.runs, player.balls),
        dismissal: player.how_out,
        at_crease,
    }
}

fn bowling_line(player: &Player) -> BowlingLine {
    BowlingLine {
        player_id: player.id.clone(),
        name: player.name.clone(),
        overs: player.overs_bowled.to_string(),
        maidens: player.maidens,
        runs: player.runs_conceded,
        wickets: player.wickets,
        economy: economy(player.runs_conceded, player.overs_bowled.balls()),
        dots: player.dots_bowled,
        wides: player.wides_conceded,
        no_balls: player.no_balls_conceded,
    }
}

fn opponent_of<'a>(m: &'a Match, team: &Team) -> &'a Team {
    if team.id == m.team_a.id {
        &m.team_b
    } else {
        &m.team_a
    }
}

/// Card for one innings. Each side bats once and bowls once, so the
/// players' match figures are the innings figures. `None` when the batting
/// side of that innings is not in the match.
pub fn innings_card(m: &Match, number: InningsNumber) -> Option<InningsCard> {
    let innings = m.innings(number);
    let batting = m.team(&innings.batting_team_id)?;
    let bowling = opponent_of(m, batting);

    let live = number == m.current_innings && !m.is_completed();
    let at_crease = |p: &Player| {
        live && [m.current_striker_id.as_deref(), m.current_non_striker_id.as_deref()]
            .contains(&Some(p.id.as_str()))
    };

    Some(InningsCard {
        batting_team: batting.name.clone(),
        bowling_team: bowling.name.clone(),
        runs: innings.total_runs,
        wickets: innings.total_wickets,
        overs: innings.overs_display(),
        extras: innings.total_runs.saturating_sub(batting.total_runs_off_bat()),
        batting: batting.players.iter().map(|p| batting_line(p, at_crease(p))).collect(),
        bowling: bowling.players.iter().filter(|p| p.has_bowled()).map(bowling_line).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Scorer;
    use crate::models::{BallInput, ExtraKind, MatchSetup, TeamSetup};

    #[test]
    fn test_card_after_a_few_balls() {
        let scorer = Scorer::default();
        let setup = MatchSetup::new(
            TeamSetup::new("Lions", ["Ana", "Ben", "Cy"]),
            TeamSetup::new("Tigers", ["Dev", "Eli", "Fay"]),
            5,
        );
        let m = scorer.create_match(&setup).unwrap();
        let bowler = m.team_b.players[1].id.clone();
        let mut m = scorer.assign_bowler(&m, &bowler).unwrap();
        for ball in [
            BallInput::runs(4),
            BallInput::extra(0, ExtraKind::Wide),
            BallInput::extra(2, ExtraKind::LegBye),
            BallInput::runs(1),
        ] {
            m = scorer.resolve_ball(&m, ball).unwrap().state;
        }

        let card = innings_card(&m, InningsNumber::First).unwrap();
        assert_eq!(card.batting_team, "Lions");
        assert_eq!((card.runs, card.wickets, card.overs.as_str()), (8, 0, "0.3"));
        assert_eq!(card.extras, 3);

        let ana = &card.batting[0];
        assert_eq!((ana.runs, ana.balls, ana.fours), (5, 3, 1));
        assert!(ana.at_crease);
        assert!(!card.batting[2].at_crease);

        assert_eq!(card.bowling.len(), 1);
        let eli = &card.bowling[0];
        assert_eq!(eli.name, "Eli");
        assert_eq!((eli.overs.as_str(), eli.runs, eli.wides), ("0.3", 6, 1));
        assert_eq!(eli.economy, 12.0);
    }

    #[test]
    fn test_second_innings_card_before_chase() {
        let scorer = Scorer::default();
        let setup = MatchSetup::new(
            TeamSetup::numbered("Lions", "L", 2),
            TeamSetup::numbered("Tigers", "T", 2),
            1,
        );
        let m = scorer.create_match(&setup).unwrap();
        let card = innings_card(&m, InningsNumber::Second).unwrap();
        assert_eq!(card.batting_team, "Tigers");
        assert_eq!(card.bowling_team, "Lions");
        assert!(card.bowling.is_empty());
        assert!(card.batting.iter().all(|b| !b.at_crease));
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: u64,
    pub name: String,
    pub team_id: u64,
}

/// Immutable team and player tables supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    teams: Vec<Team>,
    players: Vec<Player>,
}

impl ReferenceData {
    pub fn new(teams: Vec<Team>, players: Vec<Player>) -> Self {
        Self { teams, players }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Team names in alphabetical order.
    pub fn team_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.teams.iter().map(|t| t.full_name.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn team_by_name(&self, full_name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.full_name == full_name)
    }

    /// Roster of a team sorted by player name.
    pub fn players_for_team(&self, team_id: u64) -> Vec<&Player> {
        let mut roster: Vec<&Player> = self.players.iter().filter(|p| p.team_id == team_id).collect();
        roster.sort_by(|a, b| a.name.cmp(&b.name));
        roster
    }

    pub fn find_player(&self, team_id: u64, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.team_id == team_id && p.name == name)
    }
}

/// Index of `preferred` in `names`, or the first entry when it is absent.
pub fn default_player_index<S: AsRef<str>>(names: &[S], preferred: &str) -> usize {
    names.iter().position(|n| n.as_ref() == preferred).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReferenceData {
        ReferenceData::new(
            vec![
                Team { id: 2, full_name: "Oklahoma City Thunder".to_string() },
                Team { id: 1, full_name: "Golden State Warriors".to_string() },
            ],
            vec![
                Player { player_id: 30, name: "Stephen Curry".to_string(), team_id: 1 },
                Player { player_id: 22, name: "Draymond Green".to_string(), team_id: 1 },
                Player { player_id: 2, name: "Shai Gilgeous-Alexander".to_string(), team_id: 2 },
            ],
        )
    }

    #[test]
    fn team_names_are_sorted() {
        assert_eq!(
            sample().team_names(),
            vec!["Golden State Warriors", "Oklahoma City Thunder"]
        );
    }

    #[test]
    fn roster_is_filtered_and_sorted() {
        let data = sample();
        let team = data.team_by_name("Golden State Warriors").unwrap();
        let names: Vec<&str> = data.players_for_team(team.id).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Draymond Green", "Stephen Curry"]);
    }

    #[test]
    fn find_player_respects_team() {
        let data = sample();
        assert_eq!(data.find_player(1, "Stephen Curry").map(|p| p.player_id), Some(30));
        assert!(data.find_player(2, "Stephen Curry").is_none());
    }

    #[test]
    fn default_index_falls_back_to_first() {
        let names = ["Draymond Green", "Stephen Curry"];
        assert_eq!(default_player_index(&names, "Stephen Curry"), 1);
        assert_eq!(default_player_index(&names, "Klay Thompson"), 0);
    }
}

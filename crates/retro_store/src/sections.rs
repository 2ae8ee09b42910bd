//! Year-sectioned game listing for the games list screen

use std::collections::BTreeMap;

use crate::game::{Game, GameId};

/// Games released in one year
#[derive(Clone, Debug, PartialEq)]
pub struct GameSection<'a> {
    pub year: i32,
    pub games: Vec<&'a Game>,
}

/// Group `games` by release year, oldest year first.
///
/// Games keep their relative order inside a year. Games rejected by
/// `include` are left out, and a year with no remaining games produces no
/// section.
pub fn sections_by_year<'a, F>(games: &'a [Game], mut include: F) -> Vec<GameSection<'a>>
where
    F: FnMut(GameId) -> bool,
{
    let mut by_year: BTreeMap<i32, Vec<&'a Game>> = BTreeMap::new();
    for game in games.iter().filter(|game| include(game.id)) {
        by_year.entry(game.release_year()).or_default().push(game);
    }

    by_year
        .into_iter()
        .map(|(year, games)| GameSection { year, games })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ReleaseDate;
    use pretty_assertions::assert_eq;

    fn game(id: GameId, year: i32) -> Game {
        Game::new(id, format!("game-{id}"), ReleaseDate::year(year))
    }

    fn ids(section: &GameSection<'_>) -> Vec<GameId> {
        section.games.iter().map(|g| g.id).collect()
    }

    #[test]
    fn groups_ascending_and_keeps_order_within_year() {
        let games = vec![game(1, 1991), game(2, 1985), game(3, 1991), game(4, 1989)];
        let sections = sections_by_year(&games, |_| true);

        let years: Vec<i32> = sections.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![1985, 1989, 1991]);
        assert_eq!(ids(&sections[2]), vec![1, 3]);
    }

    #[test]
    fn filtered_out_years_disappear() {
        let games = vec![game(1, 1991), game(2, 1985), game(3, 1991)];
        let sections = sections_by_year(&games, |id| id == 3);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].year, 1991);
        assert_eq!(ids(&sections[0]), vec![3]);
    }
}

//! Game records as delivered by the games API

use serde::{Deserialize, Serialize};

/// Externally assigned, stable game identifier
pub type GameId = u64;

/// Release date with a display form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDate {
    pub y: i32,
    /// Unix timestamp in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    /// Human-readable form, e.g. "Aug 23, 1991"
    #[serde(default)]
    pub human: String,
}

impl ReleaseDate {
    pub fn year(year: i32) -> Self {
        Self {
            y: year,
            human: year.to_string(),
            ..Self::default()
        }
    }
}

/// Aggregate user rating, carried as two flat fields on [`Game`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Star count, 0 to 5
    #[serde(rename = "totalRatingStars", default)]
    pub stars: u8,
    /// Number of people who rated
    #[serde(rename = "totalRatingCount", default)]
    pub count: u32,
}

impl Rating {
    pub const MAX_STARS: u8 = 5;

    pub fn new(stars: u8, count: u32) -> Self {
        Self {
            stars: stars.min(Self::MAX_STARS),
            count,
        }
    }
}

/// Cover or screenshot reference
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub image_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvolvedCompany {
    pub company: Company,
}

/// A game in the catalog
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub cover: Option<ImageRef>,
    pub release_date: ReleaseDate,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub involved_companies: Vec<InvolvedCompany>,
    #[serde(flatten)]
    pub rating: Rating,
    #[serde(default)]
    pub screenshots: Vec<ImageRef>,
    #[serde(default)]
    pub summary: String,
}

impl Game {
    pub fn new(id: GameId, name: impl Into<String>, release_date: ReleaseDate) -> Self {
        Self {
            id,
            name: name.into(),
            release_date,
            ..Self::default()
        }
    }

    pub fn release_year(&self) -> i32 {
        self.release_date.y
    }

    /// Studio names, in API order
    pub fn company_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.involved_companies
            .iter()
            .map(|involved| involved.company.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_api_payload() {
        let raw = r#"{
            "id": 1020,
            "name": "Sonic the Hedgehog",
            "cover": { "imageUrl": "https://images.example/sonic.jpg" },
            "releaseDate": { "y": 1991, "date": 677635200, "human": "Jun 23, 1991" },
            "genres": [{ "name": "Platform" }],
            "involvedCompanies": [
                { "company": { "name": "Sega" } },
                { "company": { "name": "Sonic Team" } }
            ],
            "totalRatingStars": 4,
            "totalRatingCount": 812,
            "screenshots": [{ "imageUrl": "https://images.example/shot1.jpg" }],
            "summary": "Gotta go fast."
        }"#;

        let game: Game = serde_json::from_str(raw).unwrap();
        assert_eq!(game.id, 1020);
        assert_eq!(game.release_year(), 1991);
        assert_eq!(game.release_date.date, Some(677_635_200));
        assert_eq!(
            game.cover.as_ref().map(|c| c.image_url.as_str()),
            Some("https://images.example/sonic.jpg")
        );
        assert_eq!(game.genres[0].name, "Platform");
        assert_eq!(game.company_names().collect::<Vec<_>>(), vec!["Sega", "Sonic Team"]);
        assert_eq!(game.rating, Rating::new(4, 812));
        assert_eq!(game.screenshots.len(), 1);
    }

    #[test]
    fn encodes_rating_as_flat_fields() {
        let mut game = Game::new(1, "Pac-Man", ReleaseDate::year(1980));
        game.rating = Rating::new(5, 10);

        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value["totalRatingStars"], 5);
        assert_eq!(value["totalRatingCount"], 10);
        assert!(value.get("rating").is_none());
    }

    #[test]
    fn optional_fields_default() {
        let game: Game =
            serde_json::from_str(r#"{"id": 7, "name": "Tetris", "releaseDate": {"y": 1984}}"#)
                .unwrap();
        assert_eq!(game, Game::new(7, "Tetris", ReleaseDate { y: 1984, ..ReleaseDate::default() }));
    }

    #[test]
    fn rating_stars_are_capped() {
        assert_eq!(Rating::new(9, 1).stars, Rating::MAX_STARS);
    }
}

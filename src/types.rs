use crate::Error;
use crate::Origin;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// The envelope the api wraps every response payload in
#[derive(Debug, serde::Deserialize)]
pub struct ApiResponse<T> {
    /// The result status, `"success"` when the request worked
    pub result: String,

    /// The payload, only meaningful when the result reports success
    pub data: Option<T>,

    /// A human readable message, mainly set on failure
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Check whether the api reported success.
    pub fn is_success(&self) -> bool {
        self.result == crate::RESULT_SUCCESS
    }

    /// Extract the payload, turning an api-reported failure into an error.
    ///
    /// A missing payload on success becomes the empty collection.
    pub(crate) fn into_data(self) -> Result<T, Error>
    where
        T: Default,
    {
        if !self.is_success() {
            return Err(Error::Api {
                message: self.message.unwrap_or_default(),
            });
        }

        Ok(self.data.unwrap_or_default())
    }
}

/// Episode numbers for a single episode, as one origin counts them
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, serde::Deserialize)]
pub struct Episode {
    /// The season number
    pub season: i32,

    /// The episode number within the season
    pub episode: i32,

    /// The episode number ignoring season boundaries
    pub absolute: i32,
}

/// Episode numbers keyed by origin name, for a single episode entry
#[derive(Debug, Clone, Eq, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct Mapping(pub HashMap<String, Episode>);

impl Mapping {
    /// Get the episode numbers a known origin assigned to this entry.
    pub fn get(&self, origin: Origin) -> Option<&Episode> {
        self.0.get(origin.as_str())
    }
}

/// An alternate name for a show and the season it applies to
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AlternateName {
    /// The alternate name
    pub name: String,

    /// The season the name applies to
    pub season: i32,
}

/// Alternate names keyed by show name
///
/// The api sends each alternate name as a single-entry object mapping the
/// name to its season number, this flattens them into [`AlternateName`]s.
#[derive(Debug, Clone, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(from = "HashMap<String, Vec<BTreeMap<String, i32>>>")]
pub struct NameMap(pub HashMap<String, Vec<AlternateName>>);

impl NameMap {
    /// Get the alternate names recorded for a show.
    pub fn get(&self, name: &str) -> Option<&[AlternateName]> {
        self.0.get(name).map(Vec::as_slice)
    }
}

impl From<HashMap<String, Vec<BTreeMap<String, i32>>>> for NameMap {
    fn from(data: HashMap<String, Vec<BTreeMap<String, i32>>>) -> Self {
        Self(
            data.into_iter()
                .map(|(show, names)| {
                    let names = names
                        .into_iter()
                        .flat_map(BTreeMap::into_iter)
                        .map(|(name, season)| AlternateName { name, season })
                        .collect();
                    (show, names)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ATTACK_ON_TITAN: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/test_data/all_attack_on_titan.json"
    ));
    const ALL_FAILURE: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/test_data/all_failure.json"
    ));
    const NAMES_TVDB_EN: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/test_data/names_tvdb_en.json"
    ));

    #[test]
    fn parse_all() {
        let response: ApiResponse<Vec<Mapping>> =
            serde_json::from_str(ALL_ATTACK_ON_TITAN).expect("failed to parse");
        assert!(response.is_success());

        let mappings = response.data.expect("missing data");
        assert_eq!(mappings.len(), 4);

        let episode = mappings[0]
            .get(Origin::Scene)
            .expect("missing scene entry");
        assert_eq!(
            *episode,
            Episode {
                season: 1,
                episode: 1,
                absolute: 1,
            }
        );

        // The last entry crosses a season boundary,
        // its absolute number keeps counting.
        let episode = mappings[3].get(Origin::Tvdb).expect("missing tvdb entry");
        assert_eq!(episode.season, 2);
        assert_eq!(episode.episode, 1);
        assert_eq!(episode.absolute, 26);
    }

    #[test]
    fn parse_all_failure() {
        let response: ApiResponse<Vec<Mapping>> =
            serde_json::from_str(ALL_FAILURE).expect("failed to parse");
        assert!(!response.is_success());
        assert!(response.data.is_none());
        assert_eq!(
            response.message.as_deref(),
            Some("No show with the tvdb id 999999999")
        );
    }

    #[test]
    fn parse_names() {
        let response: ApiResponse<NameMap> =
            serde_json::from_str(NAMES_TVDB_EN).expect("failed to parse");
        assert!(response.is_success());

        let names = response.data.expect("missing data");
        let attack_on_titan = names.get("Attack on Titan").expect("missing show");
        assert_eq!(
            attack_on_titan,
            [
                AlternateName {
                    name: "Shingeki no Kyojin".to_string(),
                    season: 1,
                },
                AlternateName {
                    name: "AoT".to_string(),
                    season: 2,
                },
            ]
        );

        // A multi-entry object flattens into one record per entry.
        let bleach = names.get("Bleach").expect("missing show");
        assert_eq!(bleach.len(), 2);
        assert!(bleach.contains(&AlternateName {
            name: "BLEACH".to_string(),
            season: 1,
        }));
        assert!(bleach.contains(&AlternateName {
            name: "Burîchi".to_string(),
            season: 1,
        }));
    }
}

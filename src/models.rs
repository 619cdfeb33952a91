use serde::Deserialize;
use std::collections::BTreeSet;

/// A single actor as served by the Actor Showcase API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub birth_year: i32,
    pub country: String,
    pub oscars: u32,
}

impl Actor {
    pub fn is_oscar_winner(&self) -> bool {
        self.oscars > 0
    }
}

/// Aggregate figures over a set of actors
#[derive(Debug, Clone, PartialEq)]
pub struct ActorStats {
    pub total_actors: usize,
    pub total_oscars: u64,
    pub unique_countries: usize,
    pub countries: Vec<String>,
    pub average_oscars: f64,
}

impl ActorStats {
    pub fn from_actors(actors: &[Actor]) -> Self {
        let total_actors = actors.len();
        let total_oscars: u64 = actors.iter().map(|a| u64::from(a.oscars)).sum();
        let countries: Vec<String> = actors
            .iter()
            .map(|a| a.country.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let average_oscars = if total_actors > 0 {
            total_oscars as f64 / total_actors as f64
        } else {
            0.0
        };

        Self {
            total_actors,
            total_oscars,
            unique_countries: countries.len(),
            countries,
            average_oscars,
        }
    }
}

/// Client-side filter applied before rendering. Order of the input is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorFilter {
    pub country: Option<String>,
    pub winners_only: bool,
}

impl ActorFilter {
    pub fn is_active(&self) -> bool {
        self.country.is_some() || self.winners_only
    }

    pub fn matches(&self, actor: &Actor) -> bool {
        if self.winners_only && !actor.is_oscar_winner() {
            return false;
        }
        match &self.country {
            Some(country) => actor.country.to_lowercase() == country.to_lowercase(),
            None => true,
        }
    }

    pub fn apply<'a>(&self, actors: &'a [Actor]) -> Vec<&'a Actor> {
        actors.iter().filter(|a| self.matches(a)).collect()
    }

    /// Short human-readable description, e.g. "winners, country=USA"
    pub fn describe(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.winners_only {
            parts.push("winners".to_string());
        }
        if let Some(ref country) = self.country {
            parts.push(format!("country={}", country));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_actors() -> Vec<Actor> {
    vec![
        Actor { id: 1, name: "Meryl Streep".into(), birth_year: 1949, country: "USA".into(), oscars: 3 },
        Actor { id: 2, name: "Daniel Day-Lewis".into(), birth_year: 1957, country: "Storbritannien".into(), oscars: 3 },
        Actor { id: 3, name: "Ingrid Bergman".into(), birth_year: 1915, country: "Sverige".into(), oscars: 3 },
        Actor { id: 4, name: "Jack Nicholson".into(), birth_year: 1937, country: "USA".into(), oscars: 3 },
        Actor { id: 5, name: "Katharine Hepburn".into(), birth_year: 1907, country: "USA".into(), oscars: 4 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_over_sample() {
        let stats = ActorStats::from_actors(&sample_actors());
        assert_eq!(stats.total_actors, 5);
        assert_eq!(stats.total_oscars, 16);
        assert_eq!(stats.unique_countries, 3);
        assert_eq!(stats.countries, vec!["Storbritannien", "Sverige", "USA"]);
        assert!((stats.average_oscars - 3.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_empty() {
        let stats = ActorStats::from_actors(&[]);
        assert_eq!(stats.total_actors, 0);
        assert_eq!(stats.unique_countries, 0);
        assert_eq!(stats.average_oscars, 0.0);
    }

    #[test]
    fn test_filter_country_case_insensitive_keeps_order() {
        let actors = sample_actors();
        let filter = ActorFilter { country: Some("usa".into()), winners_only: false };
        let ids: Vec<i64> = filter.apply(&actors).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 4, 5]);
    }

    #[test]
    fn test_filter_winners_only() {
        let mut actors = sample_actors();
        actors[1].oscars = 0;
        let filter = ActorFilter { country: None, winners_only: true };
        let ids: Vec<i64> = filter.apply(&actors).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
        assert_eq!(filter.describe().as_deref(), Some("winners"));
        assert!(ActorFilter::default().describe().is_none());
    }

    #[test]
    fn test_negative_oscars_rejected() {
        let json = r#"{"id":1,"name":"A","birth_year":1990,"country":"SE","oscars":-1}"#;
        assert!(serde_json::from_str::<Actor>(json).is_err());
    }
}

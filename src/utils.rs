use crate::network::Network;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StationQueryError {
    #[error("Station '{0}' not found.")]
    NotFound(String),
    #[error("Multiple matches found for '{query}': {}.", .matches.join(", "))]
    Ambiguous { query: String, matches: Vec<String> },
    #[error("Invalid station number {0}.")]
    IndexOutOfRange(usize),
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

// Cuts `s` to at most `max_chars` characters, marking the cut with "...".
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_owned();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    kept + "..."
}

pub fn sorted_station_names(network: &Network) -> Vec<&str> {
    let mut names: Vec<_> = network.stations().collect();
    names.sort_unstable();
    names
}

/// Resolves what a person typed into a station name.
///
/// Accepts a 1-based number into [`sorted_station_names`], an exact name (ignoring case), or a
/// fragment matching exactly one station name (ignoring case).
pub fn resolve_station<'a>(network: &'a Network, query: &str) -> Result<&'a str, StationQueryError> {
    let query = query.trim();
    let names = sorted_station_names(network);

    if !query.is_empty() && query.chars().all(|c| c.is_ascii_digit()) {
        let number: usize = query.parse().map_err(|_| StationQueryError::NotFound(query.to_owned()))?;
        return match number.checked_sub(1).and_then(|idx| names.get(idx)) {
            Some(&name) => Ok(name),
            None => Err(StationQueryError::IndexOutOfRange(number)),
        };
    }

    let lowered = query.to_lowercase();
    if let Some(&name) = names.iter().find(|name| name.to_lowercase() == lowered) {
        return Ok(name);
    }

    let matches: Vec<&str> = names.into_iter().filter(|name| name.to_lowercase().contains(&lowered)).collect();
    match matches.as_slice() {
        [name] => Ok(*name),
        [] => Err(StationQueryError::NotFound(query.to_owned())),
        _ => Err(StationQueryError::Ambiguous {
            query: query.to_owned(),
            matches: matches.iter().map(|name| name.to_string()).collect(),
        }),
    }
}

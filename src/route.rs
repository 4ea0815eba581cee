use std::collections::HashMap;
use std::fmt::Display;

use crate::network::{Currency, Minutes};
use crate::optimizer::Score;
use crate::utils;

// Longest path string shown in a table row before it is cut short.
const MAX_PATH_CHARS: usize = 35;

/// The best route found from an origin to one destination.
///
/// Totals are the accumulated, unnormalised connection attributes along `path`, rounded for display
/// (cost and time to 2 places, the composite score to 4).
#[derive(Clone, Debug, PartialEq)]
pub struct RouteResult<'a> {
    pub destination: &'a str,
    pub path: Vec<&'a str>, // Origin first, destination last.
    pub total_cost: Currency,
    pub total_time: Minutes,
    pub total_stops: u32,
    pub composite_score: Score,
}

/// Every reachable destination mapped to its best route. Unreachable stations are absent.
pub type Routes<'a> = HashMap<&'a str, RouteResult<'a>>;

impl RouteResult<'_> {
    pub fn origin(&self) -> &str { self.path.first().copied().unwrap_or(self.destination) }

    pub fn path_str(&self) -> String { self.path.join(" → ") }
}

impl Display for RouteResult<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "-----------------------------------------------")?;
        writeln!(f, "From {} to {}.", self.origin(), self.destination)?;
        writeln!(f, "Route: {}", self.path_str())?;
        writeln!(f, "Total cost: ₹{:.2}", self.total_cost)?;
        writeln!(f, "Total time: {:.2} minutes.", self.total_time)?;
        writeln!(f, "Stops: {}", self.total_stops)?;
        writeln!(f, "Score: {:.4}", self.composite_score)?;
        writeln!(f, "-----------------------------------------------")?;
        Ok(())
    }
}

/// Orders routes best first: ascending composite score, then destination name.
pub fn rank<'r, 'a>(routes: &'r Routes<'a>) -> Vec<&'r RouteResult<'a>> {
    let mut ranked: Vec<_> = routes.values().collect();
    ranked.sort_unstable_by(|a, b| {
        a.composite_score
            .total_cmp(&b.composite_score)
            .then_with(|| a.destination.cmp(b.destination))
    });
    ranked
}

/// Human-readable table of ranked routes from one origin.
pub struct RouteTable<'r, 'a> {
    pub origin: &'r str,
    pub routes: Vec<&'r RouteResult<'a>>,
}

impl<'r, 'a> RouteTable<'r, 'a> {
    pub fn new(origin: &'r str, routes: &'r Routes<'a>) -> Self {
        Self { origin, routes: rank(routes) }
    }
}

impl Display for RouteTable<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "=".repeat(80))?;
        writeln!(f, "OPTIMAL ROUTES FROM: {}", self.origin.to_uppercase())?;
        writeln!(f, "{}", "=".repeat(80))?;
        if self.routes.is_empty() {
            writeln!(f, "No routes found from the selected station.")?;
            return Ok(());
        }
        writeln!(f, "{:<20} {:<8} {:<8} {:<6} ROUTE", "DESTINATION", "COST", "TIME", "STOPS")?;
        writeln!(f, "{}", "-".repeat(80))?;
        for route in &self.routes {
            let cost = format!("₹{:.0}", route.total_cost);
            let time = format!("{:.1}m", route.total_time);
            writeln!(
                f,
                "{:<20} {:<8} {:<8} {:<6} {}",
                route.destination,
                cost,
                time,
                route.total_stops,
                utils::truncate_chars(&route.path_str(), MAX_PATH_CHARS),
            )?;
        }
        Ok(())
    }
}

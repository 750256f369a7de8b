//! Consultas analíticas sobre o snapshot carregado.
//!
//! Todas as funções são puras: recebem a coleção de usuários por referência
//! e nunca a modificam. Agrupamentos preservam a ordem da primeira aparição.

use std::collections::HashMap;

use crate::{
    models::{CountrySuperusers, DailyLogins, LogAction, TeamInsight, User},
    utils::AppError,
};

/// Quantidade máxima de países no ranking
pub const TOP_COUNTRIES_LIMIT: usize = 5;

/// Active superusers (`score >= 900` and `active`), in dataset order.
pub fn find_superusers(users: &[User]) -> Vec<User> {
    users.iter().filter(|u| u.is_superuser()).cloned().collect()
}

/// Top countries by superuser count.
///
/// Countries with no superusers still take part in the ranking. Ties keep
/// first-seen order because `sort_by` is stable.
pub fn rank_countries_by_superusers(users: &[User]) -> Vec<CountrySuperusers> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut countries: Vec<CountrySuperusers> = Vec::new();

    for user in users {
        let slot = *index.entry(user.country.as_str()).or_insert_with(|| {
            countries.push(CountrySuperusers {
                country: user.country.clone(),
                superusers: 0,
            });
            countries.len() - 1
        });

        if user.is_superuser() {
            countries[slot].superusers += 1;
        }
    }

    countries.sort_by(|a, b| b.superusers.cmp(&a.superusers));
    countries.truncate(TOP_COUNTRIES_LIMIT);
    countries
}

#[derive(Default)]
struct TeamTally {
    members: usize,
    leaders: usize,
    active: usize,
    completed_projects: usize,
}

/// Per-team statistics, one entry per distinct `team.name` in first-seen order.
///
/// `completed_projects` sums every member's own project list; projects are
/// not deduplicated across members.
pub fn summarize_teams(users: &[User]) -> Result<Vec<TeamInsight>, AppError> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<(&str, TeamTally)> = Vec::new();

    for user in users {
        let name = user.team.name.as_str();
        let slot = *index.entry(name).or_insert_with(|| {
            tallies.push((name, TeamTally::default()));
            tallies.len() - 1
        });

        let tally = &mut tallies[slot].1;
        tally.members += 1;
        if user.team.leader {
            tally.leaders += 1;
        }
        if user.active {
            tally.active += 1;
        }
        tally.completed_projects += user.completed_projects();
    }

    tallies
        .into_iter()
        .map(|(name, tally)| -> Result<TeamInsight, AppError> {
            Ok(TeamInsight {
                team: name.to_string(),
                total_members: tally.members,
                leader: tally.leaders,
                completed_projects: tally.completed_projects,
                active_percentage: active_percentage(name, tally.active, tally.members)?,
            })
        })
        .collect()
}

/// Formats `active / members * 100` with exactly two decimals.
fn active_percentage(team: &str, active: usize, members: usize) -> Result<String, AppError> {
    if members == 0 {
        return Err(AppError::InvariantViolation(format!(
            "team '{}' has no members",
            team
        )));
    }

    let pct = active as f64 / members as f64 * 100.0;
    Ok(format!("{:.2}", pct))
}

/// Login count per date, dates in first-seen order (user order, then log order).
/// Logout entries are ignored entirely.
pub fn count_logins_by_date(users: &[User]) -> Vec<DailyLogins> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut days: Vec<DailyLogins> = Vec::new();

    let logins = users
        .iter()
        .flat_map(|u| u.logs.iter())
        .filter(|log| log.action == LogAction::Login);

    for log in logins {
        let slot = *index.entry(log.date.as_str()).or_insert_with(|| {
            days.push(DailyLogins {
                date: log.date.clone(),
                total: 0,
            });
            days.len() - 1
        });
        days[slot].total += 1;
    }

    days
}

use serde::{Deserialize, Serialize};

/// Score mínimo para um usuário ativo ser considerado superuser
pub const SUPERUSER_MIN_SCORE: f64 = 900.0;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: u32,
    /// Kept as the uploaded JSON number so `950` is echoed back as `950`
    #[schema(value_type = f64)]
    pub score: serde_json::Number,
    pub active: bool,
    pub country: String,
    pub team: Team,
    pub logs: Vec<LogEntry>,
}

impl User {
    pub fn is_superuser(&self) -> bool {
        self.active
            && self
                .score
                .as_f64()
                .map_or(false, |score| score >= SUPERUSER_MIN_SCORE)
    }

    /// Number of completed projects in this user's own copy of the team.
    pub fn completed_projects(&self) -> usize {
        self.team.projects.iter().filter(|p| p.completed).count()
    }
}

/// Each user carries its own copy of the team, so two members of the same
/// team may disagree on `projects`. Team identity is the `name` string.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct Team {
    pub name: String,
    /// Whether *this user* leads the team
    pub leader: bool,
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct Project {
    pub name: String,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct LogEntry {
    /// Calendar day, kept as an opaque token
    pub date: String,
    pub action: LogAction,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogAction {
    Login,
    Logout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_record() {
        let raw = r#"{
            "id": "u-1",
            "name": "Ana",
            "age": 31,
            "score": 912.5,
            "active": true,
            "country": "Brasil",
            "team": {
                "name": "Alpha",
                "leader": true,
                "projects": [
                    {"name": "Apollo", "completed": true},
                    {"name": "Gemini", "completed": false}
                ]
            },
            "logs": [
                {"date": "2025-03-01", "action": "login"},
                {"date": "2025-03-01", "action": "logout"}
            ]
        }"#;

        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.team.name, "Alpha");
        assert_eq!(user.logs[0].action, LogAction::Login);
        assert_eq!(user.logs[1].action, LogAction::Logout);
        assert_eq!(user.completed_projects(), 1);
        assert!(user.is_superuser());
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let raw = r#"{"date": "2025-03-01", "action": "signup"}"#;
        assert!(serde_json::from_str::<LogEntry>(raw).is_err());
    }

    #[test]
    fn test_integer_score_round_trips_unchanged() {
        let raw = r#"{"id":"1","name":"x","age":20,"score":950,"active":true,"country":"US",
            "team":{"name":"T","leader":false,"projects":[]},"logs":[]}"#;
        let user: User = serde_json::from_str(raw).unwrap();

        let echoed = serde_json::to_value(&user).unwrap();
        assert_eq!(echoed["score"], serde_json::json!(950));
        assert_eq!(serde_json::to_string(&echoed["score"]).unwrap(), "950");
    }

    #[test]
    fn test_superuser_boundary() {
        let raw = r#"{"id":"1","name":"x","age":20,"score":900,"active":true,"country":"US",
            "team":{"name":"T","leader":false,"projects":[]},"logs":[]}"#;
        let mut user: User = serde_json::from_str(raw).unwrap();
        assert!(user.is_superuser());

        user.score = serde_json::Number::from_f64(899.99).unwrap();
        assert!(!user.is_superuser());

        user.score = serde_json::Number::from(950);
        user.active = false;
        assert!(!user.is_superuser());
    }
}

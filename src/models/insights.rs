use serde::{Deserialize, Serialize};

use super::User;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct CountrySuperusers {
    pub country: String,
    pub superusers: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct TeamInsight {
    pub team: String,
    pub total_members: usize,
    pub leader: usize,
    pub completed_projects: usize,
    /// Percentual de membros ativos, sempre com duas casas decimais ("50.00")
    pub active_percentage: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct DailyLogins {
    pub date: String,
    pub total: usize,
}

// Envelopes das respostas: timestamp ISO-8601 + tempo de execução da consulta

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SuperusersResponse {
    pub timestamp: String,
    pub execution_time_ms: f64,
    pub data: Vec<User>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TopCountriesResponse {
    pub timestamp: String,
    pub execution_time_ms: f64,
    pub countries: Vec<CountrySuperusers>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TeamInsightsResponse {
    pub timestamp: String,
    pub execution_time_ms: f64,
    pub teams: Vec<TeamInsight>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActiveUsersPerDayResponse {
    pub timestamp: String,
    pub execution_time_ms: f64,
    pub logins: Vec<DailyLogins>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadResponse {
    pub message: String,
    /// Number of user records in the new snapshot
    pub users: usize,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

use serde::{Deserialize, Serialize};

/// Root of a roster file: the event's shifts, its jobs and any volunteers
/// that are already known.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RosterDto {
    pub shifts: Vec<String>,
    pub jobs: Vec<JobDto>,

    #[serde(default)]
    pub volunteers: Vec<VolunteerDto>,
}

/// A job refers to its shifts by their time labels.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub name: String,
    pub shifts: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerDto {
    pub name: String,

    /// Volunteers without a job are only registered, not signed up.
    #[serde(default)]
    pub job: Option<String>,

    #[serde(default)]
    pub shifts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_without_shifts_is_missing_a_field() {
        let json = r#"{ "shifts": ["Saturday morning"], "jobs": [{ "name": "Childcare" }] }"#;

        let err = serde_json::from_str::<RosterDto>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `shifts`"), "got: {}", err);
    }

    #[test]
    fn test_job_without_name_is_missing_a_field() {
        let json = r#"{ "shifts": [], "jobs": [{ "shifts": [] }] }"#;

        let err = serde_json::from_str::<RosterDto>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"), "got: {}", err);
    }

    #[test]
    fn test_volunteer_fields_are_optional() {
        let json = r#"{ "shifts": [], "jobs": [], "volunteers": [{ "name": "Pat" }] }"#;

        let dto: RosterDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.volunteers.len(), 1);
        assert!(dto.volunteers[0].job.is_none());
        assert!(dto.volunteers[0].shifts.is_empty());
    }
}

use jobboard_test_utils::prelude::*;

use crate::model::job::CreateJobDto;


fn create_job_dto() -> CreateJobDto {
    CreateJobDto {
        title: "  Platform Engineer ".to_string(),
        description: "Build the platform".to_string(),
        company_name: "Initech".to_string(),
        location: "Remote".to_string(),
        job_type: "full_time".to_string(),
        salary_min: Some(90_000),
        salary_max: Some(120_000),
        required_skills: vec!["rust".to_string(), " ".to_string(), "sql ".to_string()],
        experience_required: Some(2),
        status: None,
    }
}

//! Factory functions for in-memory models.
//!
//! These never touch the database and are meant for unit tests of pure logic
//! such as access rules and DTO conversions.

use chrono::Utc;
use entity::{
    sea_orm_active_enums::{ApplicationStatus, JobStatus, UserRole},
    skill_list::SkillList,
};
use uuid::Uuid;

pub fn mock_profile_model(profile_id: Uuid, role: UserRole) -> entity::profile::Model {
    let now = Utc::now().naive_utc();
    entity::profile::Model {
        id: profile_id,
        email: format!("{}@example.com", profile_id.simple()),
        full_name: "Test User".to_string(),
        role,
        phone: None,
        location: None,
        bio: None,
        company_name: None,
        resume_url: None,
        profile_image_url: None,
        skills: None,
        experience_years: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_job_model(recruiter_id: Uuid, status: JobStatus) -> entity::job::Model {
    let now = Utc::now().naive_utc();
    entity::job::Model {
        id: Uuid::new_v4(),
        recruiter_id,
        title: "Backend Engineer".to_string(),
        description: "Build and run the services.".to_string(),
        company_name: "Acme".to_string(),
        location: "Remote".to_string(),
        job_type: "full_time".to_string(),
        salary_min: None,
        salary_max: None,
        required_skills: SkillList(vec!["rust".to_string()]),
        experience_required: None,
        status,
        views_count: 0,
        applications_count: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_application_model(job_id: Uuid, applicant_id: Uuid) -> entity::application::Model {
    let now = Utc::now().naive_utc();
    entity::application::Model {
        id: Uuid::new_v4(),
        job_id,
        applicant_id,
        status: ApplicationStatus::Applied,
        cover_letter: None,
        resume_url: None,
        applied_at: now,
        updated_at: now,
    }
}

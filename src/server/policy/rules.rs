use entity::sea_orm_active_enums::{JobStatus, UserRole};
use uuid::Uuid;

use super::{Caller, EntityKind, Operation, RowPolicy};

pub struct ProfileSubject {
    pub id: Uuid,
}

pub struct JobSubject {
    pub recruiter_id: Uuid,
    pub status: JobStatus,
}

impl From<&entity::job::Model> for JobSubject {
    fn from(job: &entity::job::Model) -> Self {
        Self {
            recruiter_id: job.recruiter_id,
            status: job.status,
        }
    }
}

pub struct ApplicationSubject {
    pub applicant_id: Uuid,
    /// Recruiter owning the job the application was made to
    pub job_recruiter_id: Uuid,
}

pub struct SavedJobSubject {
    pub user_id: Uuid,
}

pub struct ObjectSubject {
    /// Identity named by the first segment of the object path
    pub owner_id: Uuid,
    /// Whether the owner has applied to a job owned by the caller
    pub shared_with_caller: bool,
}

impl RowPolicy for entity::profile::Entity {
    const KIND: EntityKind = EntityKind::Profile;
    type Subject = ProfileSubject;

    fn allows(caller: &Caller, operation: Operation, subject: &ProfileSubject) -> bool {
        match operation {
            Operation::Read => true,
            Operation::Create | Operation::Update => caller.is(subject.id),
            Operation::Delete => false,
        }
    }
}

impl RowPolicy for entity::job::Entity {
    const KIND: EntityKind = EntityKind::Job;
    type Subject = JobSubject;

    fn allows(caller: &Caller, operation: Operation, subject: &JobSubject) -> bool {
        match operation {
            Operation::Read => subject.status == JobStatus::Open || caller.is(subject.recruiter_id),
            Operation::Create => {
                caller.is(subject.recruiter_id) && caller.has_role(UserRole::Recruiter)
            }
            Operation::Update | Operation::Delete => caller.is(subject.recruiter_id),
        }
    }
}

impl RowPolicy for entity::application::Entity {
    const KIND: EntityKind = EntityKind::Application;
    type Subject = ApplicationSubject;

    fn allows(caller: &Caller, operation: Operation, subject: &ApplicationSubject) -> bool {
        match operation {
            Operation::Read => {
                caller.is(subject.applicant_id) || caller.is(subject.job_recruiter_id)
            }
            Operation::Create => {
                caller.is(subject.applicant_id) && caller.has_role(UserRole::JobSeeker)
            }
            Operation::Update => caller.is(subject.job_recruiter_id),
            Operation::Delete => false,
        }
    }
}

impl RowPolicy for entity::saved_job::Entity {
    const KIND: EntityKind = EntityKind::SavedJob;
    type Subject = SavedJobSubject;

    fn allows(caller: &Caller, operation: Operation, subject: &SavedJobSubject) -> bool {
        match operation {
            Operation::Read | Operation::Create | Operation::Delete => caller.is(subject.user_id),
            Operation::Update => false,
        }
    }
}

impl RowPolicy for entity::storage_object::Entity {
    const KIND: EntityKind = EntityKind::StorageObject;
    type Subject = ObjectSubject;

    fn allows(caller: &Caller, operation: Operation, subject: &ObjectSubject) -> bool {
        match operation {
            Operation::Read => {
                caller.is(subject.owner_id)
                    || (subject.shared_with_caller && caller.has_role(UserRole::Recruiter))
            }
            Operation::Create | Operation::Update | Operation::Delete => {
                caller.is(subject.owner_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::{JobStatus, UserRole};
    use jobboard_test_utils::prelude::*;
    use uuid::Uuid;

    use crate::server::{
        error::policy::PolicyError,
        policy::{
            authorize, ApplicationSubject, Caller, EntityKind, JobSubject, ObjectSubject,
            Operation, ProfileSubject, RowPolicy, SavedJobSubject,
        },
    };

    fn recruiter() -> Caller {
        Caller::identity(Uuid::new_v4(), UserRole::Recruiter)
    }

    fn job_seeker() -> Caller {
        Caller::identity(Uuid::new_v4(), UserRole::JobSeeker)
    }

    mod profile {
        use super::*;

        /// Expect anyone, including anonymous callers, to read any profile
        #[test]
        fn anyone_reads() {
            let subject = ProfileSubject { id: Uuid::new_v4() };

            assert!(entity::profile::Entity::allows(&Caller::Anonymous, Operation::Read, &subject));
            assert!(entity::profile::Entity::allows(&job_seeker(), Operation::Read, &subject));
        }

        /// Expect only the owner to update and nobody to delete
        #[test]
        fn owner_updates_nobody_deletes() {
            let caller = job_seeker();
            let own = ProfileSubject {
                id: caller.id().unwrap(),
            };
            let other = ProfileSubject { id: Uuid::new_v4() };

            assert!(entity::profile::Entity::allows(&caller, Operation::Update, &own));
            assert!(!entity::profile::Entity::allows(&caller, Operation::Update, &other));
            assert!(!entity::profile::Entity::allows(&caller, Operation::Delete, &own));
        }
    }

    mod job {
        use super::*;

        /// Expect non-open jobs to be readable only by their owner
        #[test]
        fn hides_non_open_jobs_from_non_owners() {
            let owner = recruiter();
            let job = factory::mock_job_model(owner.id().unwrap(), JobStatus::Paused);
            let subject = JobSubject::from(&job);

            assert!(entity::job::Entity::allows(&owner, Operation::Read, &subject));
            assert!(!entity::job::Entity::allows(&recruiter(), Operation::Read, &subject));
            assert!(!entity::job::Entity::allows(&Caller::Anonymous, Operation::Read, &subject));
        }

        /// Expect open jobs to be readable by anonymous callers
        #[test]
        fn anonymous_reads_open_jobs() {
            let job = factory::mock_job_model(Uuid::new_v4(), JobStatus::Open);

            assert!(entity::job::Entity::allows(
                &Caller::Anonymous,
                Operation::Read,
                &JobSubject::from(&job)
            ));
        }

        /// Expect job creation to require the recruiter role
        #[test]
        fn create_requires_recruiter_role() {
            let seeker = job_seeker();
            let subject = JobSubject {
                recruiter_id: seeker.id().unwrap(),
                status: JobStatus::Open,
            };

            assert!(!entity::job::Entity::allows(&seeker, Operation::Create, &subject));

            let owner = recruiter();
            let subject = JobSubject {
                recruiter_id: owner.id().unwrap(),
                status: JobStatus::Open,
            };

            assert!(entity::job::Entity::allows(&owner, Operation::Create, &subject));
        }

        /// Expect Denied when a recruiter updates another recruiter's job
        #[test]
        fn denies_foreign_recruiter_update() {
            let job = factory::mock_job_model(Uuid::new_v4(), JobStatus::Open);

            let result = authorize::<entity::job::Entity>(
                &recruiter(),
                Operation::Update,
                &JobSubject::from(&job),
            );

            assert_eq!(
                result,
                Err(PolicyError::Denied {
                    entity: EntityKind::Job,
                    operation: Operation::Update
                })
            );
        }

        /// Expect Unauthenticated when an anonymous caller deletes a job
        #[test]
        fn rejects_anonymous_delete() {
            let job = factory::mock_job_model(Uuid::new_v4(), JobStatus::Open);

            let result = authorize::<entity::job::Entity>(
                &Caller::Anonymous,
                Operation::Delete,
                &JobSubject::from(&job),
            );

            assert!(matches!(result, Err(PolicyError::Unauthenticated { .. })));
        }
    }

    mod application {
        use super::*;

        /// Expect applicant and job owner to read, nobody else
        #[test]
        fn applicant_and_job_owner_read() {
            let applicant = job_seeker();
            let owner = recruiter();
            let subject = ApplicationSubject {
                applicant_id: applicant.id().unwrap(),
                job_recruiter_id: owner.id().unwrap(),
            };

            assert!(entity::application::Entity::allows(&applicant, Operation::Read, &subject));
            assert!(entity::application::Entity::allows(&owner, Operation::Read, &subject));
            assert!(!entity::application::Entity::allows(&recruiter(), Operation::Read, &subject));
        }

        /// Expect only the job owner to update status, never the applicant
        #[test]
        fn only_job_owner_updates() {
            let applicant = job_seeker();
            let owner = recruiter();
            let subject = ApplicationSubject {
                applicant_id: applicant.id().unwrap(),
                job_recruiter_id: owner.id().unwrap(),
            };

            assert!(entity::application::Entity::allows(&owner, Operation::Update, &subject));
            assert!(!entity::application::Entity::allows(&applicant, Operation::Update, &subject));
            assert!(!entity::application::Entity::allows(&owner, Operation::Delete, &subject));
        }

        /// Expect recruiters to be unable to apply
        #[test]
        fn create_requires_job_seeker_role() {
            let caller = recruiter();
            let subject = ApplicationSubject {
                applicant_id: caller.id().unwrap(),
                job_recruiter_id: Uuid::new_v4(),
            };

            assert!(!entity::application::Entity::allows(&caller, Operation::Create, &subject));
        }
    }

    mod saved_job {
        use super::*;

        /// Expect saved jobs to never be updated, only created and deleted by their owner
        #[test]
        fn owner_creates_and_deletes() {
            let caller = job_seeker();
            let subject = SavedJobSubject {
                user_id: caller.id().unwrap(),
            };

            assert!(entity::saved_job::Entity::allows(&caller, Operation::Create, &subject));
            assert!(entity::saved_job::Entity::allows(&caller, Operation::Delete, &subject));
            assert!(!entity::saved_job::Entity::allows(&caller, Operation::Update, &subject));
            assert!(!entity::saved_job::Entity::allows(&job_seeker(), Operation::Read, &subject));
        }
    }

    mod storage_object {
        use super::*;

        /// Expect a recruiter to read a resume only when the owner applied to their job
        #[test]
        fn recruiter_reads_shared_resume() {
            let caller = recruiter();
            let owner_id = Uuid::new_v4();

            let shared = ObjectSubject {
                owner_id,
                shared_with_caller: true,
            };
            let unshared = ObjectSubject {
                owner_id,
                shared_with_caller: false,
            };

            assert!(entity::storage_object::Entity::allows(&caller, Operation::Read, &shared));
            assert!(!entity::storage_object::Entity::allows(&caller, Operation::Read, &unshared));
            assert!(!entity::storage_object::Entity::allows(&caller, Operation::Update, &shared));
        }

        /// Expect the owner to write their own objects
        #[test]
        fn owner_writes() {
            let caller = job_seeker();
            let subject = ObjectSubject {
                owner_id: caller.id().unwrap(),
                shared_with_caller: false,
            };

            assert!(entity::storage_object::Entity::allows(&caller, Operation::Create, &subject));
            assert!(entity::storage_object::Entity::allows(&caller, Operation::Read, &subject));
        }
    }
}

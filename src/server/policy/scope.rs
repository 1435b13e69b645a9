use entity::sea_orm_active_enums::JobStatus;
use sea_orm::{sea_query::Query, ColumnTrait, Condition};

use super::{Caller, ReadScope};

impl ReadScope for entity::profile::Entity {
    fn read_scope(_caller: &Caller) -> Condition {
        Condition::all()
    }
}

impl ReadScope for entity::job::Entity {
    fn read_scope(caller: &Caller) -> Condition {
        let open = entity::job::Column::Status.eq(JobStatus::Open);

        match caller.id() {
            None => Condition::all().add(open),
            Some(id) => Condition::any()
                .add(open)
                .add(entity::job::Column::RecruiterId.eq(id)),
        }
    }
}

impl ReadScope for entity::application::Entity {
    fn read_scope(caller: &Caller) -> Condition {
        match caller.id() {
            // Primary keys are never null, this matches no rows
            None => Condition::all().add(entity::application::Column::Id.is_null()),
            Some(id) => {
                let owned_jobs = Query::select()
                    .column(entity::job::Column::Id)
                    .from(entity::job::Entity)
                    .and_where(entity::job::Column::RecruiterId.eq(id))
                    .to_owned();

                Condition::any()
                    .add(entity::application::Column::ApplicantId.eq(id))
                    .add(entity::application::Column::JobId.in_subquery(owned_jobs))
            }
        }
    }
}

impl ReadScope for entity::saved_job::Entity {
    fn read_scope(caller: &Caller) -> Condition {
        match caller.id() {
            None => Condition::all().add(entity::saved_job::Column::Id.is_null()),
            Some(id) => Condition::all().add(entity::saved_job::Column::UserId.eq(id)),
        }
    }
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::curriculum::{
    CreateCurriculumParams, Curriculum, UpdateCurriculumParams,
};

/// Data access for curriculums and the `curriculum_disciplines` join table.
pub struct CurriculumRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CurriculumRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the curriculum row without any discipline links
    pub async fn create(&self, params: &CreateCurriculumParams) -> Result<Curriculum, DbErr> {
        let curriculum = entity::curriculum::ActiveModel {
            course_name: ActiveValue::Set(params.course_name.clone()),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Curriculum::from_entity(curriculum, Vec::new()))
    }

    /// Gets a curriculum by ID with its disciplines
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Curriculum>, DbErr> {
        let Some(curriculum) = entity::prelude::Curriculum::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let disciplines = curriculum
            .find_related(entity::prelude::Discipline)
            .all(self.db)
            .await?;

        Ok(Some(Curriculum::from_entity(curriculum, disciplines)))
    }

    /// Gets all curriculums ordered by id, each with its disciplines
    pub async fn find_all(&self) -> Result<Vec<Curriculum>, DbErr> {
        let curriculums = entity::prelude::Curriculum::find()
            .order_by_asc(entity::curriculum::Column::Id)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(curriculums.len());
        for curriculum in curriculums {
            let disciplines = curriculum
                .find_related(entity::prelude::Discipline)
                .all(self.db)
                .await?;
            result.push(Curriculum::from_entity(curriculum, disciplines));
        }

        Ok(result)
    }

    /// Overwrites the supplied fields, leaving discipline links untouched
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCurriculumParams,
    ) -> Result<Option<Curriculum>, DbErr> {
        let Some(curriculum) = entity::prelude::Curriculum::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if !params.is_empty() {
            let mut active: entity::curriculum::ActiveModel = curriculum.into();

            if let Some(course_name) = params.course_name {
                active.course_name = ActiveValue::Set(course_name);
            }
            if let Some(start_date) = params.start_date {
                active.start_date = ActiveValue::Set(start_date);
            }
            if let Some(end_date) = params.end_date {
                active.end_date = ActiveValue::Set(end_date);
            }

            active.update(self.db).await?;
        }

        self.find_by_id(id).await
    }

    /// Deletes a curriculum, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Curriculum::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Links a discipline to a curriculum
    pub async fn add_discipline(&self, curriculum_id: i32, discipline_id: i32) -> Result<(), DbErr> {
        let link = entity::curriculum_discipline::ActiveModel {
            curriculum_id: ActiveValue::Set(curriculum_id),
            discipline_id: ActiveValue::Set(discipline_id),
        };

        entity::prelude::CurriculumDiscipline::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Curriculum::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

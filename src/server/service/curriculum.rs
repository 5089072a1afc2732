use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::curriculum::CurriculumRepository,
    error::{reference::Association, AppError, EntityKind},
    model::curriculum::{CreateCurriculumParams, Curriculum, UpdateCurriculumParams},
};

pub struct CurriculumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CurriculumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a curriculum and links each supplied discipline in order.
    ///
    /// Runs in a single transaction; on the first failing link nothing is persisted.
    pub async fn create(&self, params: CreateCurriculumParams) -> Result<Curriculum, AppError> {
        let txn = self.db.begin().await?;
        let repo = CurriculumRepository::new(&txn);

        let curriculum = repo.create(&params).await?;

        for discipline_id in &params.discipline_ids {
            repo.add_discipline(curriculum.id, *discipline_id)
                .await
                .map_err(|e| discipline_link(curriculum.id, *discipline_id).classify(e))?;
        }

        txn.commit().await?;

        CurriculumRepository::new(self.db)
            .find_by_id(curriculum.id)
            .await?
            .ok_or(AppError::NotFound {
                entity: EntityKind::Curriculum,
                id: curriculum.id,
            })
    }

    pub async fn get_all(&self) -> Result<Vec<Curriculum>, AppError> {
        let repo = CurriculumRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Curriculum, AppError> {
        let repo = CurriculumRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or(AppError::NotFound {
            entity: EntityKind::Curriculum,
            id,
        })
    }

    /// Applies a partial update and returns the fresh record
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCurriculumParams,
    ) -> Result<Curriculum, AppError> {
        let repo = CurriculumRepository::new(self.db);

        repo.update(id, params).await?.ok_or(AppError::NotFound {
            entity: EntityKind::Curriculum,
            id,
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CurriculumRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            return Err(AppError::NotFound {
                entity: EntityKind::Curriculum,
                id,
            });
        }

        Ok(())
    }

    /// Links one discipline to an existing curriculum
    pub async fn add_discipline(
        &self,
        curriculum_id: i32,
        discipline_id: i32,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = CurriculumRepository::new(&txn);

        if !repo.exists(curriculum_id).await? {
            return Err(AppError::NotFound {
                entity: EntityKind::Curriculum,
                id: curriculum_id,
            });
        }

        repo.add_discipline(curriculum_id, discipline_id)
            .await
            .map_err(|e| discipline_link(curriculum_id, discipline_id).classify(e))?;

        txn.commit().await?;

        Ok(())
    }
}

fn discipline_link(curriculum_id: i32, discipline_id: i32) -> Association {
    Association {
        parent: EntityKind::Curriculum,
        parent_id: curriculum_id,
        child: EntityKind::Discipline,
        child_id: discipline_id,
    }
}

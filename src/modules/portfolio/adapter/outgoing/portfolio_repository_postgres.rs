use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::warn;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    about, achievements, certifications, contacts, custom_categories, educations,
    experience_descriptions, experiences, project_features, project_technologies, projects,
    soft_skills, technical_skills,
};
use crate::modules::portfolio::application::ports::outgoing::{
    RepositoryError, SectionRepository,
};
use crate::modules::portfolio::domain::normalize::level_from_stored;
use crate::modules::portfolio::domain::{
    About, Achievement, Achievements, Certification, Certifications, Contact, CustomCategory,
    EducationItem, Educations, ExperienceItem, Experiences, ProjectItem, Projects, SkillCategory,
    SkillsSection, SoftSkill, TechnicalSkill,
};

/// Every content section, one set of tables each. Saves replace the whole
/// section inside a single transaction.
#[derive(Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn begin(&self) -> Result<DatabaseTransaction, RepositoryError> {
        self.db.begin().await.map_err(map_db_err)
    }
}

// =====================================================
// Helpers
// =====================================================

fn map_db_err(e: DbErr) -> RepositoryError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepositoryError::Unavailable(e.to_string()),
        _ => RepositoryError::DatabaseError(e.to_string()),
    }
}

fn position(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

async fn finish(txn: DatabaseTransaction, result: Result<(), DbErr>) -> Result<(), RepositoryError> {
    match result {
        Ok(()) => txn.commit().await.map_err(map_db_err),
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "Transaction rollback failed");
            }
            Err(map_db_err(e))
        }
    }
}

/// `INSERT` of all rows in one statement; nothing to do for an empty list.
async fn insert_all<A>(txn: &DatabaseTransaction, rows: Vec<A>) -> Result<(), DbErr>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    if rows.is_empty() {
        return Ok(());
    }
    <A::Entity as EntityTrait>::insert_many(rows)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

/// Groups child rows (already ordered by position) under their parent id.
fn group_by_parent<T>(rows: impl IntoIterator<Item = (Uuid, T)>) -> HashMap<Uuid, Vec<T>> {
    let mut grouped: HashMap<Uuid, Vec<T>> = HashMap::new();
    for (parent, value) in rows {
        grouped.entry(parent).or_default().push(value);
    }
    grouped
}

//
// ──────────────────────────────────────────────────────────
// About / Contact
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl SectionRepository<About> for PortfolioRepositoryPostgres {
    async fn fetch(&self) -> Result<Option<About>, RepositoryError> {
        let row = about::Entity::find()
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| About {
            name: m.name,
            title: m.title,
            bio: m.bio,
            location: m.location,
            avatar_url: m.avatar_url,
            resume_url: m.resume_url,
        }))
    }

    async fn replace(&self, content: &About) -> Result<(), RepositoryError> {
        let txn = self.begin().await?;

        let result = async {
            about::Entity::delete_many().exec(&txn).await?;
            insert_all(
                &txn,
                vec![about::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set(content.name.clone()),
                    title: Set(content.title.clone()),
                    bio: Set(content.bio.clone()),
                    location: Set(content.location.clone()),
                    avatar_url: Set(content.avatar_url.clone()),
                    resume_url: Set(content.resume_url.clone()),
                }],
            )
            .await
        }
        .await;

        finish(txn, result).await
    }
}

#[async_trait]
impl SectionRepository<Contact> for PortfolioRepositoryPostgres {
    async fn fetch(&self) -> Result<Option<Contact>, RepositoryError> {
        let row = contacts::Entity::find()
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| Contact {
            email: m.email,
            phone: m.phone,
            location: m.location,
            github_url: m.github_url,
            linkedin_url: m.linkedin_url,
            website_url: m.website_url,
        }))
    }

    async fn replace(&self, content: &Contact) -> Result<(), RepositoryError> {
        let txn = self.begin().await?;

        let result = async {
            contacts::Entity::delete_many().exec(&txn).await?;
            insert_all(
                &txn,
                vec![contacts::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    email: Set(content.email.clone()),
                    phone: Set(content.phone.clone()),
                    location: Set(content.location.clone()),
                    github_url: Set(content.github_url.clone()),
                    linkedin_url: Set(content.linkedin_url.clone()),
                    website_url: Set(content.website_url.clone()),
                }],
            )
            .await
        }
        .await;

        finish(txn, result).await
    }
}

//
// ──────────────────────────────────────────────────────────
// Education / Experience
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl SectionRepository<Educations> for PortfolioRepositoryPostgres {
    async fn fetch(&self) -> Result<Option<Educations>, RepositoryError> {
        let rows = educations::Entity::find()
            .order_by_asc(educations::Column::Position)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(Educations(
            rows.into_iter()
                .map(|m| EducationItem {
                    id: m.id,
                    institution: m.institution,
                    degree: m.degree,
                    field_of_study: m.field_of_study,
                    start_date: m.start_date,
                    end_date: m.end_date,
                    description: m.description,
                })
                .collect(),
        )))
    }

    async fn replace(&self, content: &Educations) -> Result<(), RepositoryError> {
        let rows = content
            .0
            .iter()
            .enumerate()
            .map(|(i, e)| educations::ActiveModel {
                id: Set(e.id),
                position: Set(position(i)),
                institution: Set(e.institution.clone()),
                degree: Set(e.degree.clone()),
                field_of_study: Set(e.field_of_study.clone()),
                start_date: Set(e.start_date.clone()),
                end_date: Set(e.end_date.clone()),
                description: Set(e.description.clone()),
            })
            .collect();

        let txn = self.begin().await?;
        let result = async {
            educations::Entity::delete_many().exec(&txn).await?;
            insert_all(&txn, rows).await
        }
        .await;

        finish(txn, result).await
    }
}

#[async_trait]
impl SectionRepository<Experiences> for PortfolioRepositoryPostgres {
    async fn fetch(&self) -> Result<Option<Experiences>, RepositoryError> {
        let rows = experiences::Entity::find()
            .order_by_asc(experiences::Column::Position)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if rows.is_empty() {
            return Ok(None);
        }

        let ids: Vec<Uuid> = rows.iter().map(|m| m.id).collect();
        let descriptions = experience_descriptions::Entity::find()
            .filter(experience_descriptions::Column::ExperienceId.is_in(ids))
            .order_by_asc(experience_descriptions::Column::Position)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        let mut descriptions =
            group_by_parent(descriptions.into_iter().map(|d| (d.experience_id, d.content)));

        Ok(Some(Experiences(
            rows.into_iter()
                .map(|m| ExperienceItem {
                    descriptions: descriptions.remove(&m.id).unwrap_or_default(),
                    id: m.id,
                    company: m.company,
                    role: m.role,
                    location: m.location,
                    start_date: m.start_date,
                    end_date: m.end_date,
                })
                .collect(),
        )))
    }

    async fn replace(&self, content: &Experiences) -> Result<(), RepositoryError> {
        let mut parents = Vec::with_capacity(content.0.len());
        let mut children = Vec::new();

        for (i, e) in content.0.iter().enumerate() {
            parents.push(experiences::ActiveModel {
                id: Set(e.id),
                position: Set(position(i)),
                company: Set(e.company.clone()),
                role: Set(e.role.clone()),
                location: Set(e.location.clone()),
                start_date: Set(e.start_date.clone()),
                end_date: Set(e.end_date.clone()),
            });
            children.extend(e.descriptions.iter().enumerate().map(|(j, text)| {
                experience_descriptions::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    experience_id: Set(e.id),
                    position: Set(position(j)),
                    content: Set(text.clone()),
                }
            }));
        }

        let txn = self.begin().await?;
        let result = async {
            // descriptions go with their parent (ON DELETE CASCADE)
            experiences::Entity::delete_many().exec(&txn).await?;
            insert_all(&txn, parents).await?;
            insert_all(&txn, children).await
        }
        .await;

        finish(txn, result).await
    }
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl SectionRepository<SkillsSection> for PortfolioRepositoryPostgres {
    async fn fetch(&self) -> Result<Option<SkillsSection>, RepositoryError> {
        let db = self.db.as_ref();

        let categories = custom_categories::Entity::find()
            .order_by_asc(custom_categories::Column::Position)
            .all(db)
            .await
            .map_err(map_db_err)?;
        let technical = technical_skills::Entity::find()
            .order_by_asc(technical_skills::Column::Position)
            .all(db)
            .await
            .map_err(map_db_err)?;
        let soft = soft_skills::Entity::find()
            .order_by_asc(soft_skills::Column::Position)
            .all(db)
            .await
            .map_err(map_db_err)?;

        if categories.is_empty() && technical.is_empty() && soft.is_empty() {
            return Ok(None);
        }

        Ok(Some(SkillsSection {
            technical: technical
                .into_iter()
                .map(|m| TechnicalSkill {
                    id: m.id,
                    name: m.name,
                    level: level_from_stored(m.level),
                    category: SkillCategory::parse(&m.category).unwrap_or(SkillCategory::Other),
                    custom_category_id: m.custom_category_id,
                })
                .collect(),
            soft: soft
                .into_iter()
                .map(|m| SoftSkill {
                    id: m.id,
                    name: m.name,
                    level: level_from_stored(m.level),
                })
                .collect(),
            custom_categories: categories
                .into_iter()
                .map(|m| CustomCategory {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
        }))
    }

    async fn replace(&self, content: &SkillsSection) -> Result<(), RepositoryError> {
        let categories: Vec<_> = content
            .custom_categories
            .iter()
            .enumerate()
            .map(|(i, c)| custom_categories::ActiveModel {
                id: Set(c.id),
                position: Set(position(i)),
                name: Set(c.name.clone()),
            })
            .collect();
        let technical: Vec<_> = content
            .technical
            .iter()
            .enumerate()
            .map(|(i, s)| technical_skills::ActiveModel {
                id: Set(s.id),
                position: Set(position(i)),
                name: Set(s.name.clone()),
                level: Set(i32::from(s.level)),
                category: Set(s.category.as_str().to_string()),
                custom_category_id: Set(s.custom_category_id),
            })
            .collect();
        let soft: Vec<_> = content
            .soft
            .iter()
            .enumerate()
            .map(|(i, s)| soft_skills::ActiveModel {
                id: Set(s.id),
                position: Set(position(i)),
                name: Set(s.name.clone()),
                level: Set(i32::from(s.level)),
            })
            .collect();

        let txn = self.begin().await?;
        let result = async {
            technical_skills::Entity::delete_many().exec(&txn).await?;
            soft_skills::Entity::delete_many().exec(&txn).await?;
            custom_categories::Entity::delete_many().exec(&txn).await?;
            // categories first: technical skills reference them
            insert_all(&txn, categories).await?;
            insert_all(&txn, technical).await?;
            insert_all(&txn, soft).await
        }
        .await;

        finish(txn, result).await
    }
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl SectionRepository<Projects> for PortfolioRepositoryPostgres {
    async fn fetch(&self) -> Result<Option<Projects>, RepositoryError> {
        let db = self.db.as_ref();

        let rows = projects::Entity::find()
            .order_by_asc(projects::Column::Position)
            .all(db)
            .await
            .map_err(map_db_err)?;

        if rows.is_empty() {
            return Ok(None);
        }

        let ids: Vec<Uuid> = rows.iter().map(|m| m.id).collect();
        let technologies = project_technologies::Entity::find()
            .filter(project_technologies::Column::ProjectId.is_in(ids.clone()))
            .order_by_asc(project_technologies::Column::Position)
            .all(db)
            .await
            .map_err(map_db_err)?;
        let features = project_features::Entity::find()
            .filter(project_features::Column::ProjectId.is_in(ids))
            .order_by_asc(project_features::Column::Position)
            .all(db)
            .await
            .map_err(map_db_err)?;

        let mut technologies =
            group_by_parent(technologies.into_iter().map(|t| (t.project_id, t.name)));
        let mut features = group_by_parent(features.into_iter().map(|f| (f.project_id, f.content)));

        Ok(Some(Projects(
            rows.into_iter()
                .map(|m| ProjectItem {
                    technologies: technologies.remove(&m.id).unwrap_or_default(),
                    features: features.remove(&m.id).unwrap_or_default(),
                    id: m.id,
                    title: m.title,
                    description: m.description,
                    image_url: m.image_url,
                    github_url: m.github_url,
                    live_url: m.live_url,
                })
                .collect(),
        )))
    }

    async fn replace(&self, content: &Projects) -> Result<(), RepositoryError> {
        let mut parents = Vec::with_capacity(content.0.len());
        let mut technologies = Vec::new();
        let mut features = Vec::new();

        for (i, p) in content.0.iter().enumerate() {
            parents.push(projects::ActiveModel {
                id: Set(p.id),
                position: Set(position(i)),
                title: Set(p.title.clone()),
                description: Set(p.description.clone()),
                image_url: Set(p.image_url.clone()),
                github_url: Set(p.github_url.clone()),
                live_url: Set(p.live_url.clone()),
            });
            technologies.extend(p.technologies.iter().enumerate().map(|(j, name)| {
                project_technologies::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    project_id: Set(p.id),
                    position: Set(position(j)),
                    name: Set(name.clone()),
                }
            }));
            features.extend(p.features.iter().enumerate().map(|(j, text)| {
                project_features::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    project_id: Set(p.id),
                    position: Set(position(j)),
                    content: Set(text.clone()),
                }
            }));
        }

        let txn = self.begin().await?;
        let result = async {
            projects::Entity::delete_many().exec(&txn).await?;
            insert_all(&txn, parents).await?;
            insert_all(&txn, technologies).await?;
            insert_all(&txn, features).await
        }
        .await;

        finish(txn, result).await
    }
}

//
// ──────────────────────────────────────────────────────────
// Certifications / Achievements
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl SectionRepository<Certifications> for PortfolioRepositoryPostgres {
    async fn fetch(&self) -> Result<Option<Certifications>, RepositoryError> {
        let rows = certifications::Entity::find()
            .order_by_asc(certifications::Column::Position)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(Certifications(
            rows.into_iter()
                .map(|m| Certification {
                    id: m.id,
                    name: m.name,
                    issuer: m.issuer,
                    issue_date: m.issue_date,
                    credential_url: m.credential_url,
                })
                .collect(),
        )))
    }

    async fn replace(&self, content: &Certifications) -> Result<(), RepositoryError> {
        let rows = content
            .0
            .iter()
            .enumerate()
            .map(|(i, c)| certifications::ActiveModel {
                id: Set(c.id),
                position: Set(position(i)),
                name: Set(c.name.clone()),
                issuer: Set(c.issuer.clone()),
                issue_date: Set(c.issue_date.clone()),
                credential_url: Set(c.credential_url.clone()),
            })
            .collect();

        let txn = self.begin().await?;
        let result = async {
            certifications::Entity::delete_many().exec(&txn).await?;
            insert_all(&txn, rows).await
        }
        .await;

        finish(txn, result).await
    }
}

#[async_trait]
impl SectionRepository<Achievements> for PortfolioRepositoryPostgres {
    async fn fetch(&self) -> Result<Option<Achievements>, RepositoryError> {
        let rows = achievements::Entity::find()
            .order_by_asc(achievements::Column::Position)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(Achievements(
            rows.into_iter()
                .map(|m| Achievement {
                    id: m.id,
                    title: m.title,
                    description: m.description,
                    date: m.date,
                })
                .collect(),
        )))
    }

    async fn replace(&self, content: &Achievements) -> Result<(), RepositoryError> {
        let rows = content
            .0
            .iter()
            .enumerate()
            .map(|(i, a)| achievements::ActiveModel {
                id: Set(a.id),
                position: Set(position(i)),
                title: Set(a.title.clone()),
                description: Set(a.description.clone()),
                date: Set(a.date.clone()),
            })
            .collect();

        let txn = self.begin().await?;
        let result = async {
            achievements::Entity::delete_many().exec(&txn).await?;
            insert_all(&txn, rows).await
        }
        .await;

        finish(txn, result).await
    }
}

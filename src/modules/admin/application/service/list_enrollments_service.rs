use async_trait::async_trait;

use crate::admin::application::domain::analytics::{enrich_enrollments, EnrichedEnrollment};
use crate::admin::application::ports::incoming::use_cases::{
    ListEnrollmentsError, ListEnrollmentsUseCase,
};
use crate::admin::application::ports::outgoing::AdminQuery;

pub struct ListEnrollmentsService<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> ListEnrollmentsService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListEnrollmentsUseCase for ListEnrollmentsService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EnrichedEnrollment>, ListEnrollmentsError> {
        let enrollments = self.query.list_enrollments().await?;
        let users = self.query.list_users().await?;
        let courses = self.query.list_courses().await?;

        Ok(enrich_enrollments(enrollments, &users, &courses))
    }
}

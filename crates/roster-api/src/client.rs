//! REST client for the students service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use roster_common::config::RosterConfig;
use roster_common::constants::STUDENTS_PATH;
use roster_common::types::{Student, StudentId};

use crate::error::{ApiError, Result};

/// Read/delete access to the students collection.
///
/// Implemented over HTTP by [`StudentsClient`] and by in-memory fakes in
/// tests. Every call is independent; the client holds no session state.
/// `Debug` is a supertrait so screens holding a `dyn StudentDirectory`
/// can derive `Debug` themselves.
#[async_trait]
pub trait StudentDirectory: Send + Sync + std::fmt::Debug {
    /// Fetches a single record by identifier.
    async fn fetch(&self, id: StudentId) -> Result<Student>;

    /// Lists all records.
    async fn list(&self) -> Result<Vec<Student>>;

    /// Deletes the record with the given identifier.
    async fn remove(&self, id: StudentId) -> Result<()>;
}

/// HTTP implementation of [`StudentDirectory`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct StudentsClient {
    http: reqwest::Client,
    base: String,
}

impl StudentsClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &RosterConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base: config.api_base().to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/{STUDENTS_PATH}", self.base)
    }

    fn record_url(&self, id: StudentId) -> String {
        format!("{}/{STUDENTS_PATH}/{id}", self.base)
    }
}

#[async_trait]
impl StudentDirectory for StudentsClient {
    async fn fetch(&self, id: StudentId) -> Result<Student> {
        let url = self.record_url(id);
        tracing::debug!(%id, url, "fetching student");
        let response = self.http.get(&url).send().await?;
        check_status(response.status(), Some(id))?;
        let student = response.json::<Student>().await?;
        tracing::debug!(%id, name = student.name, "student fetched");
        Ok(student)
    }

    async fn list(&self) -> Result<Vec<Student>> {
        let url = self.collection_url();
        tracing::debug!(url, "listing students");
        let response = self.http.get(&url).send().await?;
        check_status(response.status(), None)?;
        let students = response.json::<Vec<Student>>().await?;
        tracing::debug!(count = students.len(), "students listed");
        Ok(students)
    }

    async fn remove(&self, id: StudentId) -> Result<()> {
        let url = self.record_url(id);
        tracing::info!(%id, url, "deleting student");
        let response = self.http.delete(&url).send().await?;
        check_status(response.status(), Some(id))?;
        Ok(())
    }
}

/// Maps a non-success status into the matching [`ApiError`].
fn check_status(status: StatusCode, id: Option<StudentId>) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(ApiError::NotFound { id });
        }
    }
    Err(ApiError::Status {
        code: status.as_u16(),
    })
}

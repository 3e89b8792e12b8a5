use super::client::{Client, PageProgress, LOG_TARGET};
use crate::error::Result;
use crate::model::{RepositoryHealth, RepositoryRecord};
use reqwest::StatusCode;

const README_PATH: &str = "README.md";
const CI_PATH: &str = ".github/workflows";
const TEST_PATHS: [&str; 2] = ["tests", "test"];

impl Client {
    /// Checks whether `path` exists in the default branch of `repository`.
    pub async fn path_exists(&self, repository: &RepositoryRecord, path: &str) -> Result<bool> {
        let api_path = format!(
            "/repos/{}/{}/contents/{path}",
            repository.owner, repository.name
        );
        let response = self.get(&api_path, &[]).await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                self.check_status(response).map(|_| false)
            }
            status => {
                log::debug!(
                    target: LOG_TARGET,
                    "Treating {status} for {} as absent",
                    response.url()
                );
                Ok(false)
            }
        }
    }

    /// Probes every repository for a README, a CI workflow directory and a
    /// tests directory. The callback receives the 1-based repository index.
    pub async fn probe_health<'a>(
        &self,
        repositories: &[RepositoryRecord],
        mut cb: PageProgress<'a>,
    ) -> Result<Vec<RepositoryHealth>> {
        let mut health = Vec::with_capacity(repositories.len());
        for (index, repository) in repositories.iter().enumerate() {
            cb(index as u32 + 1);
            let has_readme = self.path_exists(repository, README_PATH).await?;
            let has_ci = self.path_exists(repository, CI_PATH).await?;
            let mut has_tests = false;
            for path in TEST_PATHS {
                if self.path_exists(repository, path).await? {
                    has_tests = true;
                    break;
                }
            }
            health.push(RepositoryHealth {
                has_readme,
                has_ci,
                has_tests,
            });
        }
        Ok(health)
    }
}

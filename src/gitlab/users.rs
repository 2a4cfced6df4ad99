use crate::gitlab::{GitlabClient, ResourcePath, Transport};
use crate::model::{Error, Result, User};
use tracing::debug;

pub trait UserRequester {
    async fn find_users(&self, username: &str) -> Result<Vec<User>>;

    async fn validate_username(&self, username: &str) -> Result<()> {
        let users = self.find_users(username).await?;
        let Some(user) = users.first() else {
            return Err(Error::Validation(username.to_string()));
        };
        debug!(id = user.id, name = %user.name, username = %user.username, "username resolved");
        Ok(())
    }
}

impl<T: Transport> UserRequester for GitlabClient<T> {
    async fn find_users(&self, username: &str) -> Result<Vec<User>> {
        self.fetch_all(&ResourcePath::new("users").param("username", username))
            .await
    }
}

use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::{request::RegisterRequest, response::UserDto},
    },
    repositories::UserRepository,
};

pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserDto> {
        request.validate()?;

        let user = User::new(&request.username, &request.email);
        let created = self.user_repository.insert(user).await?;

        log::info!("Registered user '{}'", created.username);
        Ok(created.into())
    }

    pub async fn get_user_by_username(&self, username: &str) -> AppResult<User> {
        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("User with username '{}' not found", username))
            })
    }
}

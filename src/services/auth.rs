use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::user::{
    AuthResponse, ChangePassword, LoginRequest, SignupRequest, UpdateProfile,
};
use crate::models::{NewUser, User};
use crate::storage::{Storage, UserUpdate};

/// Placeholder session token handed out on login and signup.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

fn issue(user: User) -> AuthResponse {
    AuthResponse {
        user,
        token: MOCK_TOKEN.to_string(),
    }
}

pub async fn login(storage: &dyn Storage, req: LoginRequest) -> AppResult<AuthResponse> {
    req.validate()
        .map_err(|_| AppError::BadRequest("Username and password are required".to_string()))?;

    match storage.get_user_by_username(&req.username).await? {
        Some(user) if user.password == req.password => {
            log::info!("user {} logged in", user.id);
            Ok(issue(user))
        }
        _ => {
            log::warn!("failed login for {:?}", req.username);
            Err(AppError::Unauthorized)
        }
    }
}

pub async fn signup(storage: &dyn Storage, req: SignupRequest) -> AppResult<AuthResponse> {
    req.validate()?;

    if storage.get_user_by_username(&req.username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }
    if storage.get_user_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("Email already exists".to_string()));
    }

    let user = storage
        .create_user(NewUser {
            username: req.username,
            password: req.password,
            email: req.email,
            role: req.role.unwrap_or_default(),
            hotel_id: None,
        })
        .await?;
    log::info!("user {} signed up as {:?}", user.id, user.role);
    Ok(issue(user))
}

pub async fn update_profile(
    storage: &dyn Storage,
    user_id: i64,
    req: UpdateProfile,
) -> AppResult<User> {
    req.validate()?;

    if let Some(username) = &req.username {
        if let Some(other) = storage.get_user_by_username(username).await? {
            if other.id != user_id {
                return Err(AppError::Conflict("Username already exists".to_string()));
            }
        }
    }
    if let Some(email) = &req.email {
        if let Some(other) = storage.get_user_by_email(email).await? {
            if other.id != user_id {
                return Err(AppError::Conflict("Email already exists".to_string()));
            }
        }
    }

    storage
        .update_user(
            user_id,
            UserUpdate {
                username: req.username,
                email: req.email,
                hotel_id: None,
            },
        )
        .await?
        .ok_or(AppError::NotFound("User"))
}

pub async fn change_password(
    storage: &dyn Storage,
    user_id: i64,
    req: ChangePassword,
) -> AppResult<()> {
    req.validate()?;

    let user = storage
        .get_user(user_id)
        .await?
        .ok_or(AppError::NotFound("User"))?;
    if user.password != req.current_password {
        return Err(AppError::Unauthorized);
    }
    storage
        .update_user_password(user_id, &req.new_password)
        .await?
        .ok_or(AppError::NotFound("User"))?;
    log::info!("user {} changed password", user_id);
    Ok(())
}

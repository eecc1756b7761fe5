use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::JwtService,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::LoginResponse,
    },
};

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Issues an access token for an existing user. Credential verification is
/// delegated to the identity layer in front of this service.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    jwt_service: web::Data<JwtService>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .user_service
        .get_user_by_username(&request.username)
        .await?;
    let token = jwt_service.create_token(&user)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: user.into(),
    }))
}

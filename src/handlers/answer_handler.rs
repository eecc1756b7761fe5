use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{CorrectAnswerRequest, SubmitAnswerRequest},
};

#[post("/user-answers")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    request: web::Json<SubmitAnswerRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let response = state
        .user_answer_service
        .create_user_answer(
            &auth.0.sub,
            &request.quiz_id,
            request.answer,
            request.attempt_number,
        )
        .await?;
    Ok(HttpResponse::Created().json(response))
}

/// Correction path: re-evaluates an existing attempt in place.
#[put("/user-answers/{id}")]
pub async fn correct_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<CorrectAnswerRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state
        .user_answer_service
        .update_user_answer(&id, &auth.0.sub, request.into_inner().answer)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/quizzes/{quiz_id}/user-answers")]
pub async fn get_user_answers(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let answers = state
        .user_answer_service
        .get_user_answers_by_quiz(&auth.0.sub, &quiz_id)
        .await?;
    Ok(HttpResponse::Ok().json(answers))
}

#[get("/quizzes/{quiz_id}/user-answers/summary")]
pub async fn get_user_quiz_summary(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let summary = state
        .user_answer_service
        .get_user_quiz_summary(&auth.0.sub, &quiz_id)
        .await?;
    Ok(HttpResponse::Ok().json(summary))
}

#[get("/users/me/answer-stats")]
pub async fn get_user_answer_stats(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let stats = state
        .user_answer_service
        .get_user_answer_stats(&auth.0.sub)
        .await?;
    Ok(HttpResponse::Ok().json(stats))
}

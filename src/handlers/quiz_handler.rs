use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{CreateQuizRequest, EvaluateAnswerRequest, QuizSearchParams, UpdateQuizRequest},
        response::{EvaluationDto, QuizDto},
    },
};

#[post("/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.create_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizDto::from(quiz)))
}

#[get("/quizzes")]
pub async fn search_quizzes(
    state: web::Data<AppState>,
    query: web::Query<QuizSearchParams>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let quizzes = state
        .quiz_service
        .search_quizzes(params.kind, params.title)
        .await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[put("/quizzes/{id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .update_quiz(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/books/{book_id}/quizzes")]
pub async fn get_quizzes_by_book(
    state: web::Data<AppState>,
    book_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.get_quizzes_by_book(&book_id).await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

/// Evaluate-only path: returns the evaluation without recording an attempt.
#[post("/quizzes/{id}/evaluate")]
pub async fn evaluate_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<EvaluateAnswerRequest>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let evaluation = state
        .quiz_service
        .evaluate_answer(&id, &request.into_inner().answer)
        .await?;
    Ok(HttpResponse::Ok().json(EvaluationDto::from(evaluation)))
}

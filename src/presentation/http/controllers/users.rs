// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{CreateUserCommand, DeleteUserCommand, UpdateUserCommand},
    dto::UserDto,
    queries::users::{GetUserBySlugQuery, GetUserQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::TransactionResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

/// Fields left out keep their stored value. A new `username` re-derives the slug.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/user/",
    responses(
        (status = 200, description = "All users ordered by id.", body = [UserDto])
    ),
    tag = "Users"
)]
pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user.", body = UserDto),
        (status = 404, description = "No user with this id.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { user_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/user/by-slug/{slug}",
    params(("slug" = String, Path, description = "User slug")),
    responses(
        (status = 200, description = "The user.", body = UserDto),
        (status = 404, description = "No user with this slug.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user_by_slug(GetUserBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/user/create",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created.", body = TransactionResponse),
        (status = 400, description = "Username or slug already taken, or invalid input.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<(StatusCode, Json<TransactionResponse>)> {
    let command = CreateUserCommand {
        username: payload.username,
        firstname: payload.firstname,
        lastname: payload.lastname,
        age: payload.age,
    };

    state
        .services
        .user_commands
        .create_user(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionResponse::new(StatusCode::CREATED, "Successful")),
    ))
}

#[utoipa::path(
    put,
    path = "/user/update/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated.", body = TransactionResponse),
        (status = 400, description = "Invalid input or username taken.", body = ErrorResponse),
        (status = 404, description = "No user with this id.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> HttpResult<Json<TransactionResponse>> {
    let command = UpdateUserCommand {
        user_id: id,
        username: payload.username,
        firstname: payload.firstname,
        lastname: payload.lastname,
        age: payload.age,
    };

    state
        .services
        .user_commands
        .update_user(command)
        .await
        .into_http()?;

    Ok(Json(TransactionResponse::new(
        StatusCode::OK,
        "User update is successful!",
    )))
}

#[utoipa::path(
    delete,
    path = "/user/delete/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted.", body = TransactionResponse),
        (status = 404, description = "No user with this id.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TransactionResponse>> {
    state
        .services
        .user_commands
        .delete_user(DeleteUserCommand { user_id: id })
        .await
        .into_http()?;

    Ok(Json(TransactionResponse::new(
        StatusCode::OK,
        "User was successfully deleted",
    )))
}

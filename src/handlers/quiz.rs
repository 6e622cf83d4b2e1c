// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::Config,
    discovery::{CatalogOverview, discover},
    error::AppError,
    models::{
        discovery::{DiscoveryQuery, ListParams},
        quiz::{Author, CreateQuizRequest},
    },
    store::{Scope, SharedStore},
    utils::{
        html::clean_optional,
        jwt::{Claims, CurrentUser, MaybeUser},
    },
};

/// Maps the `scope` query parameter to a store scope.
///
/// 'mine' and 'saved' need a signed-in user.
fn resolve_scope(raw: Option<&str>, claims: Option<&Claims>) -> Result<Scope, AppError> {
    let scope = raw.map(|s| s.trim().to_ascii_lowercase()).unwrap_or_default();
    let user_id = || {
        claims
            .map(|c| c.sub.clone())
            .ok_or_else(|| AppError::AuthError("Sign in to list your quizzes".to_string()))
    };

    match scope.as_str() {
        "" | "public" => Ok(Scope::Public),
        "mine" => Ok(Scope::Mine(user_id()?)),
        "saved" => Ok(Scope::Saved(user_id()?)),
        other => Err(AppError::BadRequest(format!("Unknown scope '{}'", other))),
    }
}

/// Lists quizzes in the requested scope, filtered, sorted and paginated.
///
/// Malformed filter values fall back to defaults; only an unknown scope,
/// or a private scope without a token, is an error.
pub async fn list_quizzes(
    State(store): State<SharedStore>,
    State(config): State<Config>,
    MaybeUser(claims): MaybeUser,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let scope = resolve_scope(params.scope.as_deref(), claims.as_ref())?;
    let query = DiscoveryQuery::from_params(&params, config.page_limits());

    let quizzes = store.snapshot(&scope).await?;
    let page = discover(&quizzes, &query);

    tracing::debug!(
        ?scope,
        total = page.pagination.total,
        page = page.pagination.page,
        "Discovered quizzes"
    );

    Ok(Json(page))
}

/// Catalog stats and filter options over the public catalog.
pub async fn catalog_stats(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let quizzes = store.snapshot(&Scope::Public).await?;
    Ok(Json(CatalogOverview::of(&quizzes)))
}

/// Retrieves a single quiz. Private quizzes are only visible to their author;
/// everyone else gets the same 404 as for a missing quiz.
pub async fn get_quiz(
    State(store): State<SharedStore>,
    MaybeUser(claims): MaybeUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.as_ref().map(|c| c.sub.as_str());

    let quiz = store
        .find_by_id(&id)
        .await?
        .filter(|q| q.is_visible_to(user_id))
        .ok_or(AppError::NotFound("Quiz not found".to_string()))?;

    Ok(Json(quiz))
}

/// Creates a quiz owned by the caller.
///
/// * Validates the payload.
/// * Sanitizes free text.
/// * Assigns id, creation time and a zero participant count.
pub async fn create_quiz(
    State(store): State<SharedStore>,
    CurrentUser(claims): CurrentUser,
    Json(mut payload): Json<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    payload.description = clean_optional(payload.description.take());
    payload.tags = payload
        .tags
        .iter()
        .map(|t| t.trim().to_string())
        .collect();

    let author = Author {
        id: claims.sub,
        name: claims.name,
    };
    let quiz = payload.into_quiz(uuid::Uuid::new_v4().to_string(), author, Utc::now());
    let quiz = store.insert(quiz).await?;

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Adds a visible quiz to the caller's saved list.
pub async fn save_quiz(
    State(store): State<SharedStore>,
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let visible = store
        .find_by_id(&id)
        .await?
        .is_some_and(|q| q.is_visible_to(Some(claims.sub.as_str())));
    if !visible {
        return Err(AppError::NotFound("Quiz not found".to_string()));
    }

    store.save_for_user(&claims.sub, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Removes a quiz from the caller's saved list.
pub async fn unsave_quiz(
    State(store): State<SharedStore>,
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    store.unsave_for_user(&claims.sub, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            name: None,
            role: "student".to_string(),
            exp: 0,
        }
    }

    #[test]
    fn test_resolve_scope_defaults_to_public() {
        assert_eq!(resolve_scope(None, None).unwrap(), Scope::Public);
        assert_eq!(resolve_scope(Some("PUBLIC"), None).unwrap(), Scope::Public);
    }

    #[test]
    fn test_resolve_scope_private_scopes_need_user() {
        assert!(matches!(
            resolve_scope(Some("mine"), None),
            Err(AppError::AuthError(_))
        ));

        let user = claims("u1");
        assert_eq!(
            resolve_scope(Some("saved"), Some(&user)).unwrap(),
            Scope::Saved("u1".to_string())
        );
    }

    #[test]
    fn test_resolve_scope_unknown_is_bad_request() {
        assert!(matches!(
            resolve_scope(Some("everything"), None),
            Err(AppError::BadRequest(_))
        ));
    }
}

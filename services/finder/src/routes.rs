//! Finder service routes
//!
//! Each handler maps one form submission onto the user or item registry and
//! picks the view to render. Validation failures and lookup misses are
//! rendered in place; only storage and rendering failures become errors.

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    error::AppResult,
    models::{Credentials, EntryForm, FindForm, ItemSearch},
    state::AppState,
    validation::{ITEM_NAME_REQUIRED, validate_credentials, validate_entry},
    views::{
        ChoiceTemplate, EntryFormTemplate, FindTemplate, IndexTemplate, InvalidUserTemplate,
        RegisterTemplate, RegistrationSuccessTemplate, ResultsTemplate, ThankYouTemplate, render,
    },
};

/// Notice shown above the fallback listing
pub const NO_MATCH_NOTICE: &str = "No matching name found.";

/// Create the router for the finder service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/choice/:user_id", get(choice))
        .route("/validate_user", post(validate_user))
        .route("/register", get(register_form).post(register))
        .route("/entry_form/:user_id", get(entry_form).post(submit_entry))
        .route("/find/:user_id", get(find_form).post(find))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let healthy = common::database::health_check(&state.db_pool)
        .await
        .unwrap_or(false);

    if healthy {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "finder"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unavailable",
                "service": "finder"
            })),
        )
    }
}

/// Landing page
pub async fn index() -> AppResult<Html<String>> {
    render(&IndexTemplate)
}

/// Menu for a signed-in user
pub async fn choice(Path(user_id): Path<i64>) -> AppResult<Html<String>> {
    render(&ChoiceTemplate { user_id })
}

/// Sign in with an existing name and enrollment pair
pub async fn validate_user(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> AppResult<Response> {
    if validate_credentials(&credentials).is_err() {
        warn!("Sign-in attempt with incomplete credentials");
        return Ok(render(&InvalidUserTemplate)?.into_response());
    }

    let user = state
        .user_repository
        .find_by_credentials(&credentials.name, &credentials.enrollment)
        .await?;

    match user {
        Some(user) => {
            info!("User {} signed in", user.id);
            Ok(Redirect::to(&format!("/choice/{}", user.id)).into_response())
        }
        None => {
            warn!("Unknown user: {}", credentials.enrollment);
            Ok(render(&InvalidUserTemplate)?.into_response())
        }
    }
}

/// Registration form
pub async fn register_form() -> AppResult<Html<String>> {
    render(&RegisterTemplate { error: None })
}

/// Register a new user
///
/// The existence check and the insert are separate statements. A concurrent
/// registration of the same enrollment is left to the unique constraint and
/// surfaces as a server error.
pub async fn register(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> AppResult<Html<String>> {
    if let Err(message) = validate_credentials(&credentials) {
        warn!("Rejected registration: {}", message);
        return render(&RegisterTemplate {
            error: Some(message),
        });
    }

    let existing = state
        .user_repository
        .find_by_credentials(&credentials.name, &credentials.enrollment)
        .await?;

    if existing.is_some() {
        warn!("Duplicate registration: {}", credentials.enrollment);
        return render(&InvalidUserTemplate);
    }

    let user = state
        .user_repository
        .create(&credentials.name, &credentials.enrollment)
        .await?;

    info!("Registered user {}", user.id);
    render(&RegistrationSuccessTemplate { name: user.name })
}

/// Found-item entry form
pub async fn entry_form(Path(user_id): Path<i64>) -> AppResult<Html<String>> {
    render(&EntryFormTemplate {
        user_id,
        error: None,
    })
}

/// Record a found item
pub async fn submit_entry(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<EntryForm>,
) -> AppResult<Html<String>> {
    let item = match validate_entry(&form) {
        Ok(item) => item,
        Err(message) => {
            warn!("Rejected entry for user {}: {}", user_id, message);
            return render(&EntryFormTemplate {
                user_id,
                error: Some(message),
            });
        }
    };

    let item = state.item_repository.create(user_id, &item).await?;

    info!("Recorded item {} for user {}", item.id, user_id);
    render(&ThankYouTemplate { user_id })
}

/// Item search form
pub async fn find_form(Path(user_id): Path<i64>) -> AppResult<Html<String>> {
    render(&FindTemplate {
        user_id,
        error: None,
    })
}

/// Search found items by name
pub async fn find(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<FindForm>,
) -> AppResult<Html<String>> {
    let search = state
        .item_repository
        .find_items(user_id, form.item_name())
        .await?;

    info!(
        "Search for user {} returned {} items",
        user_id,
        search.items().len()
    );

    match search {
        ItemSearch::MissingName => render(&FindTemplate {
            user_id,
            error: Some(ITEM_NAME_REQUIRED.to_string()),
        }),
        ItemSearch::Matches(items) => render(&ResultsTemplate {
            user_id,
            items,
            notice: None,
        }),
        ItemSearch::NoMatch(items) => render(&ResultsTemplate {
            user_id,
            items,
            notice: Some(NO_MATCH_NOTICE.to_string()),
        }),
    }
}

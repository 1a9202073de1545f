use crate::error::AppError;
use crate::schemas::{
    present_opinioes, CreateOpiniaoRequest, DeleteOpiniaoResponse, OpiniaoSearchQuery,
    OpinioesResponse, UpdateOpiniaoRequest,
};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use database::{DbError, NewOpiniao};
use percent_encoding::percent_decode_str;
use std::sync::Arc;
use tracing;

/// # GET /
/// Sends the visitor to the documentation picker at `/openapi`.
pub async fn home() -> impl IntoResponse {
    // axum's Redirect helpers answer 303 or 307; this endpoint has always
    // answered 302, so the response is assembled by hand.
    (StatusCode::FOUND, [(header::LOCATION, "/openapi")])
}

/// # POST /opiniao
/// Stores the opinion carried by an HTML form and echoes it back inside the
/// usual `opinioes` envelope.
pub async fn create_opiniao(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateOpiniaoRequest>,
) -> Result<Json<OpinioesResponse>, AppError> {
    tracing::debug!(nome = %form.nome, "Adding an opinion.");
    let nova = NewOpiniao {
        nome: form.nome,
        idade: form.idade,
        comentario: form.comentario,
    };

    match state.repo.insert(&nova).await {
        Ok(opiniao) => {
            tracing::debug!(nome = %opiniao.nome, id = opiniao.id, "Opinion stored.");
            Ok(Json(present_opinioes(std::slice::from_ref(&opiniao))))
        }
        Err(DbError::Duplicate) => {
            tracing::warn!(nome = %nova.nome, "Rejected a duplicated nome.");
            Err(AppError::Conflict(
                "Pesquisa de mesmo nome já salvo na base :/".to_string(),
            ))
        }
        Err(error) => {
            tracing::warn!(nome = %nova.nome, error = ?error, "Failed to store an opinion.");
            Err(AppError::BadRequest(
                "Não foi possível salvar novo item :/".to_string(),
            ))
        }
    }
}

/// # GET /opinioes
/// Lists every stored opinion, oldest first. An empty base answers 200 with
/// an empty list rather than an error.
pub async fn list_opinioes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OpinioesResponse>, AppError> {
    let opinioes = state.repo.list_all().await?;
    tracing::debug!(total = opinioes.len(), "Collected stored opinions.");
    Ok(Json(present_opinioes(&opinioes)))
}

/// # DELETE /opiniao?nome=...
/// Removes the opinion stored under the given `nome` and confirms the
/// removal.
///
/// Clients send the `nome` percent-encoded twice. The query extractor undoes
/// one layer, and [`decode_nome`] undoes the rest before the value reaches
/// the database.
pub async fn delete_opiniao(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OpiniaoSearchQuery>,
) -> Result<Json<DeleteOpiniaoResponse>, AppError> {
    let nome = decode_nome(&query.nome);
    tracing::debug!(nome = %nome, "Deleting an opinion.");

    let removed = state.repo.delete_by_nome(&nome).await?;
    if removed > 0 {
        tracing::debug!(nome = %nome, "Opinion deleted.");
        Ok(Json(DeleteOpiniaoResponse {
            message: "Comentario removido".to_string(),
            nome,
        }))
    } else {
        tracing::warn!(nome = %nome, "No opinion stored under this nome.");
        Err(AppError::NotFound(
            "Comentario não encontrada na base :/".to_string(),
        ))
    }
}

/// # PUT /opiniao/:nome
/// Rewrites the `nome` and/or `idade` of the opinion stored under `nome`.
/// Fields missing from the JSON body keep their stored values.
pub async fn update_opiniao(
    State(state): State<Arc<AppState>>,
    Path(nome): Path<String>,
    Json(body): Json<UpdateOpiniaoRequest>,
) -> Result<Json<OpinioesResponse>, AppError> {
    tracing::debug!(nome = %nome, "Updating an opinion.");
    let Some(atual) = state.repo.find_by_nome(&nome).await? else {
        tracing::warn!(nome = %nome, "No opinion stored under this nome.");
        return Err(AppError::NotFound(
            "Comentario não encontrado na base :/".to_string(),
        ));
    };

    match state
        .repo
        .update(atual.id, body.nome.as_deref(), body.idade)
        .await
    {
        Ok(opiniao) => {
            tracing::debug!(nome = %opiniao.nome, "Opinion updated.");
            Ok(Json(present_opinioes(std::slice::from_ref(&opiniao))))
        }
        Err(DbError::NotFound) => Err(AppError::NotFound(
            "Comentario não encontrado na base :/".to_string(),
        )),
        Err(error) => {
            tracing::warn!(nome = %nome, error = ?error, "Failed to update an opinion.");
            Err(AppError::BadRequest(
                "Não foi possível atualizar o comentario :/".to_string(),
            ))
        }
    }
}

/// Undoes the two client-side percent-encoding passes on a `nome`.
fn decode_nome(raw: &str) -> String {
    let once = percent_decode_str(raw).decode_utf8_lossy().into_owned();
    percent_decode_str(&once).decode_utf8_lossy().into_owned()
}

//! Request and response payloads for the opinion endpoints.
//!
//! The wire format keeps the Portuguese field names the service has always
//! exposed (`nome`, `idade`, `comentario`), so the structs here mirror them
//! verbatim. Everything the API returns goes through [`present_opinioes`],
//! which is the single place deciding what a stored opinion looks like to
//! clients. Note that the row id never leaves the service.

use database::Opiniao;
use serde::{Deserialize, Serialize};

/// Form payload accepted by `POST /opiniao`.
#[derive(Debug, Deserialize)]
pub struct CreateOpiniaoRequest {
    pub nome: String,
    pub idade: i64,
    pub comentario: String,
}

/// Query payload accepted by `DELETE /opiniao`: the search runs on `nome` only.
#[derive(Debug, Deserialize)]
pub struct OpiniaoSearchQuery {
    pub nome: String,
}

/// JSON payload accepted by `PUT /opiniao/:nome`.
///
/// Both fields are optional; omitted fields keep their stored value. Unknown
/// keys are rejected so a typo like `"email"` fails loudly instead of being
/// silently dropped.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateOpiniaoRequest {
    pub nome: Option<String>,
    pub idade: Option<i64>,
}

/// A single opinion as clients see it.
#[derive(Debug, Serialize)]
pub struct OpiniaoView {
    pub nome: String,
    pub comentario: String,
    pub idade: i64,
}

/// The `{"opinioes": [...]}` envelope used by every endpoint that returns
/// opinion data, including the single-item responses of create and update.
#[derive(Debug, Serialize)]
pub struct OpinioesResponse {
    pub opinioes: Vec<OpiniaoView>,
}

/// Confirmation returned by a successful `DELETE /opiniao`.
#[derive(Debug, Serialize)]
pub struct DeleteOpiniaoResponse {
    pub message: String,
    pub nome: String,
}

/// Uniform error body: every non-2xx response carries a `message` field.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Builds the client-facing representation of stored opinions.
pub fn present_opinioes(opinioes: &[Opiniao]) -> OpinioesResponse {
    OpinioesResponse {
        opinioes: opinioes
            .iter()
            .map(|opiniao| OpiniaoView {
                nome: opiniao.nome.clone(),
                comentario: opiniao.comentario.clone(),
                idade: opiniao.idade,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored(id: i64, nome: &str, idade: i64, comentario: &str) -> Opiniao {
        Opiniao {
            id,
            nome: nome.to_string(),
            idade,
            comentario: comentario.to_string(),
        }
    }

    #[test]
    fn presenter_wraps_rows_in_the_opinioes_envelope() {
        let rows = [stored(1, "Ana", 30, "Bom")];
        let body = serde_json::to_value(present_opinioes(&rows)).unwrap();

        assert_eq!(
            body,
            json!({
                "opinioes": [
                    {"nome": "Ana", "comentario": "Bom", "idade": 30}
                ]
            })
        );
    }

    #[test]
    fn presenter_never_exposes_the_row_id() {
        let rows = [stored(7, "Ana", 30, "Bom")];
        let body = serde_json::to_value(present_opinioes(&rows)).unwrap();

        let item = &body["opinioes"][0];
        assert_eq!(item.get("id"), None);
        assert_eq!(item.get("pk_opiniao"), None);
    }

    #[test]
    fn presenter_of_no_rows_is_an_empty_list() {
        let body = serde_json::to_value(present_opinioes(&[])).unwrap();
        assert_eq!(body, json!({"opinioes": []}));
    }

    #[test]
    fn update_request_accepts_an_empty_object() {
        let parsed: UpdateOpiniaoRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.nome, None);
        assert_eq!(parsed.idade, None);
    }

    #[test]
    fn update_request_accepts_partial_fields() {
        let parsed: UpdateOpiniaoRequest =
            serde_json::from_value(json!({"idade": 40})).unwrap();
        assert_eq!(parsed.nome, None);
        assert_eq!(parsed.idade, Some(40));
    }

    #[test]
    fn update_request_rejects_unknown_keys() {
        let result: Result<UpdateOpiniaoRequest, _> =
            serde_json::from_value(json!({"nome": "Ana", "email": "ana@example.com"}));
        assert!(result.is_err());
    }

    #[test]
    fn error_body_is_a_single_message_field() {
        let body = serde_json::to_value(ErrorResponse {
            message: "Comentario não encontrada na base :/".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"message": "Comentario não encontrada na base :/"}));
    }
}

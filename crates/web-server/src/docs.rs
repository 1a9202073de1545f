//! The documentation suite served under `/openapi`.
//!
//! `/openapi` itself is a small picker page; `/openapi/swagger`,
//! `/openapi/redoc` and `/openapi/rapidoc` each load their renderer from a
//! CDN and point it at the machine-readable description served by
//! `/openapi/openapi.json`. The description is assembled by hand in
//! [`document`] so it always states exactly what the handlers do.

use axum::{response::Html, Json};
use serde_json::{json, Value};

/// # GET /openapi
/// The picker page linking the three documentation renderers.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// # GET /openapi/swagger
pub async fn swagger() -> Html<&'static str> {
    Html(SWAGGER_HTML)
}

/// # GET /openapi/redoc
pub async fn redoc() -> Html<&'static str> {
    Html(REDOC_HTML)
}

/// # GET /openapi/rapidoc
pub async fn rapidoc() -> Html<&'static str> {
    Html(RAPIDOC_HTML)
}

/// # GET /openapi/openapi.json
pub async fn openapi_json() -> Json<Value> {
    Json(document())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <title>Opiniao de clientes API - Documentação</title>
  <style>
    body { font-family: sans-serif; margin: 3rem auto; max-width: 40rem; }
    li { margin: 0.5rem 0; }
  </style>
</head>
<body>
  <h1>Opiniao de clientes API</h1>
  <p>Seleção de documentação: Swagger, Redoc ou RapiDoc.</p>
  <ul>
    <li><a href="/openapi/swagger">Swagger UI</a></li>
    <li><a href="/openapi/redoc">Redoc</a></li>
    <li><a href="/openapi/rapidoc">RapiDoc</a></li>
  </ul>
  <p>Descrição da API: <a href="/openapi/openapi.json">openapi.json</a></p>
</body>
</html>
"#;

const SWAGGER_HTML: &str = r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <title>Opiniao de clientes API - Swagger UI</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: "/openapi/openapi.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;

const REDOC_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <title>Opiniao de clientes API - Redoc</title>
</head>
<body>
  <redoc spec-url="/openapi/openapi.json"></redoc>
  <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;

const RAPIDOC_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <title>Opiniao de clientes API - RapiDoc</title>
  <script type="module" src="https://unpkg.com/rapidoc/dist/rapidoc-min.js"></script>
</head>
<body>
  <rapi-doc spec-url="/openapi/openapi.json" theme="light"></rapi-doc>
</body>
</html>
"#;

/// Builds the OpenAPI 3.0.3 description of the service.
fn document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Opiniao de clientes API",
            "version": "1.0.0"
        },
        "tags": [
            {
                "name": "Documentação",
                "description": "Seleção de documentação: Swagger, Redoc ou RapiDoc"
            },
            {
                "name": "Adiciona pessoa",
                "description": "Adiciona, visualiza e deleta o comentario de uma pessoa"
            }
        ],
        "paths": {
            "/": {
                "get": {
                    "tags": ["Documentação"],
                    "summary": "Redireciona para /openapi, tela que permite a escolha do tipo de documentação",
                    "responses": {
                        "302": {
                            "description": "Redirecionamento para /openapi"
                        }
                    }
                }
            },
            "/opiniao": {
                "post": {
                    "tags": ["Adiciona pessoa"],
                    "summary": "Adiciona uma nova pessoa à base de dados",
                    "description": "Retorna uma representação dos comentarios.",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/x-www-form-urlencoded": {
                                "schema": {"$ref": "#/components/schemas/CreateOpiniaoRequest"}
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Comentario adicionado",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/OpinioesResponse"}
                                }
                            }
                        },
                        "409": {
                            "description": "Nome já salvo na base",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                }
                            }
                        },
                        "400": {
                            "description": "Não foi possível salvar",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                }
                            }
                        }
                    }
                },
                "delete": {
                    "tags": ["Adiciona pessoa"],
                    "summary": "Deleta um comentario a partir do nome da pessoa informado",
                    "description": "Retorna uma mensagem de confirmação da remoção.",
                    "parameters": [
                        {
                            "name": "nome",
                            "in": "query",
                            "required": true,
                            "schema": {"type": "string"},
                            "example": "Bruno de Souza"
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Comentario removido",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/DeleteOpiniaoResponse"}
                                }
                            }
                        },
                        "404": {
                            "description": "Comentario não encontrado",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                }
                            }
                        }
                    }
                }
            },
            "/opinioes": {
                "get": {
                    "tags": ["Adiciona pessoa"],
                    "summary": "Faz a busca por todos os comentarios",
                    "description": "Retorna uma representação da listagem de comentarios. Uma base vazia responde 200 com a lista vazia.",
                    "responses": {
                        "200": {
                            "description": "Listagem de comentarios",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/OpinioesResponse"}
                                }
                            }
                        }
                    }
                }
            },
            "/opiniao/{nome}": {
                "put": {
                    "tags": ["Adiciona pessoa"],
                    "summary": "Atualiza um comentario existente pelo nome da pessoa",
                    "description": "Retorna uma representação do comentario atualizado.",
                    "parameters": [
                        {
                            "name": "nome",
                            "in": "path",
                            "required": true,
                            "schema": {"type": "string"},
                            "example": "Bruno de Souza"
                        }
                    ],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {"$ref": "#/components/schemas/UpdateOpiniaoRequest"}
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Comentario atualizado",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/OpinioesResponse"}
                                }
                            }
                        },
                        "404": {
                            "description": "Comentario não encontrado",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                }
                            }
                        },
                        "400": {
                            "description": "Não foi possível atualizar",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "CreateOpiniaoRequest": {
                    "type": "object",
                    "required": ["nome", "idade", "comentario"],
                    "properties": {
                        "nome": {"type": "string", "maxLength": 130, "example": "Bruno de Souza"},
                        "idade": {"type": "integer", "example": 25},
                        "comentario": {
                            "type": "string",
                            "maxLength": 300,
                            "example": "Estou adorando a plataforma nova da loja!"
                        }
                    }
                },
                "UpdateOpiniaoRequest": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "nome": {"type": "string", "maxLength": 130},
                        "idade": {"type": "integer"}
                    }
                },
                "OpiniaoView": {
                    "type": "object",
                    "properties": {
                        "nome": {"type": "string", "example": "Bruno de Souza"},
                        "comentario": {
                            "type": "string",
                            "example": "Estou adorando a plataforma nova da loja!"
                        },
                        "idade": {"type": "integer", "example": 25}
                    }
                },
                "OpinioesResponse": {
                    "type": "object",
                    "properties": {
                        "opinioes": {
                            "type": "array",
                            "items": {"$ref": "#/components/schemas/OpiniaoView"}
                        }
                    }
                },
                "DeleteOpiniaoResponse": {
                    "type": "object",
                    "properties": {
                        "message": {"type": "string", "example": "Comentario removido"},
                        "nome": {"type": "string", "example": "Bruno de Souza"}
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": {
                        "message": {"type": "string"}
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::document;

    #[test]
    fn document_describes_every_route() {
        let doc = document();
        let paths = doc["paths"].as_object().unwrap();

        assert!(paths.contains_key("/"));
        assert!(paths["/opiniao"].get("post").is_some());
        assert!(paths["/opiniao"].get("delete").is_some());
        assert!(paths["/opinioes"].get("get").is_some());
        assert!(paths["/opiniao/{nome}"].get("put").is_some());
    }

    #[test]
    fn document_carries_the_service_title() {
        let doc = document();
        assert_eq!(doc["info"]["title"], "Opiniao de clientes API");
        assert_eq!(doc["info"]["version"], "1.0.0");
    }

    #[test]
    fn update_schema_forbids_unknown_properties() {
        let doc = document();
        let schema = &doc["components"]["schemas"]["UpdateOpiniaoRequest"];
        assert_eq!(schema["additionalProperties"], false);
    }
}

//! Test data fixtures for scanlab-api

/// OpenAPI 3.0 document with no security and one open endpoint
pub fn sample_openapi_spec() -> &'static str {
    r#"openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
paths:
  /users:
    get:
      responses:
        '200':
          description: Success
"#
}

/// Document that exercises every analyzer
pub fn sample_vulnerable_spec() -> &'static str {
    r#"openapi: 3.0.0
info:
  title: Users API
  version: 1.0.0
paths:
  /users:
    get:
      parameters:
        - name: id
          in: query
      responses:
        '200':
          description: Success
          content:
            application/json:
              schema:
                type: object
                properties:
                  password:
                    type: string
"#
}

/// Fully secured OpenAPI 3.0 document
pub fn sample_secured_spec() -> &'static str {
    r##"{
  "openapi": "3.0.3",
  "info": { "title": "Secured API", "version": "2.1.0" },
  "security": [{ "bearerAuth": [] }],
  "components": {
    "securitySchemes": {
      "bearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
    },
    "headers": {
      "X-RateLimit-Limit": { "schema": { "type": "integer" } }
    },
    "schemas": {
      "User": {
        "type": "object",
        "properties": { "id": { "type": "integer" }, "name": { "type": "string" } }
      }
    }
  },
  "paths": {
    "/users": {
      "get": {
        "parameters": [
          { "name": "page", "in": "query", "schema": { "type": "integer" } }
        ],
        "responses": {
          "200": {
            "description": "Success",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/User" } }
            }
          }
        }
      },
      "post": {
        "requestBody": {
          "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/User" } }
          }
        },
        "responses": { "201": { "description": "Created" } }
      }
    }
  }
}"##
}

/// Swagger 2.0 document using securityDefinitions and typed parameters
pub fn sample_swagger2_spec() -> &'static str {
    r#"swagger: "2.0"
info:
  title: Legacy API
  version: "1.0"
securityDefinitions:
  api_key:
    type: apiKey
    name: X-API-Key
    in: header
paths:
  /orders/{id}:
    get:
      parameters:
        - name: id
          in: path
          required: true
          type: string
      responses:
        200:
          description: Success
"#
}

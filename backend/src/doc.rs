//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer, the response
//! schemas they reference, and the session cookie security scheme. Swagger UI
//! serves it in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::books::BookResponse;
use crate::inbound::http::users::{LoginRequest, UserResponse};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bookshelf API",
        description = "Session-authenticated access to the book catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::books::list_books,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(BookResponse, UserResponse, LoginRequest, Error, ErrorCode)),
    tags(
        (name = "books", description = "Book catalogue"),
        (name = "session", description = "Login and logout"),
        (name = "users", description = "Account of the signed-in user"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema(name: &str) -> RefOr<Schema> {
        let doc = ApiDoc::openapi();
        doc.components
            .expect("components")
            .schemas
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("schema {name} registered"))
    }

    fn has_field(schema: &RefOr<Schema>, field: &str) -> bool {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.contains_key(field),
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/book")]
    #[case("/user")]
    #[case("/login")]
    #[case("/logout")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "{path} missing");
    }

    #[rstest]
    fn book_schema_uses_camel_case() {
        let book = schema("BookResponse");
        assert!(has_field(&book, "createdAt"));
        assert!(!has_field(&book, "created_at"));
    }

    #[rstest]
    fn user_schema_never_exposes_password() {
        let user = schema("UserResponse");
        for field in ["id", "name", "email"] {
            assert!(has_field(&user, field), "{field} missing");
        }
        assert!(!has_field(&user, "password"));
        assert!(!has_field(&user, "passwordHash"));
    }

    #[rstest]
    fn error_schema_has_envelope_fields() {
        let error = schema("Error");
        assert!(has_field(&error, "code"));
        assert!(has_field(&error, "message"));
        assert!(has_field(&error, "traceId"));
    }

    #[rstest]
    fn session_cookie_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}

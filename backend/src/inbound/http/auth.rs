//! Authentication gate for protected routes.
//!
//! Handlers that take an [`Authenticated`] argument only run once the session
//! cookie has been verified; anonymous requests are answered with `401`
//! before the handler body is entered.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::UserId;
use crate::inbound::http::session::SessionContext;

/// Principal resolved from a verified session cookie.
///
/// # Examples
/// ```
/// use actix_web::{HttpResponse, get};
/// use bookshelf::inbound::http::auth::Authenticated;
///
/// #[get("/whoami")]
/// async fn whoami(user: Authenticated) -> HttpResponse {
///     HttpResponse::Ok().body(user.user_id().to_string())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticated(UserId);

impl Authenticated {
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.0
    }
}

impl FromRequest for Authenticated {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = SessionContext::from_request(req, payload);
        Box::pin(async move {
            let user_id = session.await?.require_user_id()?;
            Ok::<_, actix_web::Error>(Self(user_id))
        })
    }
}

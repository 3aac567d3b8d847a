//! Round-trips against a local stand-in server to check credentialed mode.

use std::net::SocketAddr;

use actix_web::cookie::Cookie;
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use api_client::{ApiClient, ClientConfig, ClientError};
use rstest::rstest;

const SESSION_VALUE: &str = "signed-in";

async fn login(body: web::Json<serde_json::Value>) -> HttpResponse {
    let password = body.get("password").and_then(serde_json::Value::as_str);
    if password == Some("pwdpwd") {
        HttpResponse::Ok()
            .cookie(Cookie::new("session", SESSION_VALUE))
            .finish()
    } else {
        HttpResponse::Unauthorized().json(serde_json::json!({
            "code": "unauthorized",
            "message": "invalid credentials"
        }))
    }
}

fn signed_in(req: &HttpRequest) -> bool {
    req.cookie("session")
        .is_some_and(|cookie| cookie.value() == SESSION_VALUE)
}

async fn books(req: HttpRequest) -> HttpResponse {
    if !signed_in(&req) {
        return HttpResponse::Unauthorized().json(serde_json::json!({
            "code": "unauthorized",
            "message": "login required"
        }));
    }
    HttpResponse::Ok().json(serde_json::json!([{
        "id": 1,
        "title": "Walden.",
        "author": "Henry Thoreau",
        "createdAt": "2024-06-01T00:00:00Z"
    }]))
}

async fn user(req: HttpRequest) -> HttpResponse {
    if !signed_in(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Ok().json(serde_json::json!({
        "id": 1,
        "name": "Alex",
        "email": "alex@alex.com"
    }))
}

async fn logout() -> HttpResponse {
    let mut removal = Cookie::new("session", "");
    removal.make_removal();
    HttpResponse::NoContent().cookie(removal).finish()
}

async fn broken() -> HttpResponse {
    HttpResponse::InternalServerError().body("boom")
}

fn start_server() -> (SocketAddr, ServerHandle) {
    let server = HttpServer::new(|| {
        App::new()
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/book", web::get().to(books))
            .route("/user", web::get().to(user))
            .route("/broken", web::get().to(broken))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind ephemeral port");
    let addr = *server.addrs().first().expect("bound address");
    let server = server.run();
    let handle = server.handle();
    actix_rt::spawn(server);
    (addr, handle)
}

fn client_for(addr: SocketAddr, with_credentials: bool) -> ApiClient {
    ApiClient::new(ClientConfig {
        base_url: format!("http://{addr}"),
        with_credentials,
    })
    .expect("client builds")
}

#[rstest]
#[actix_rt::test]
async fn session_cookie_is_resent_after_login() {
    let (addr, handle) = start_server();
    let client = client_for(addr, true);

    client.login("alex@alex.com", "pwdpwd").await.expect("login");
    let books = client.books().await.expect("books");
    let user = client.current_user().await.expect("user");

    assert_eq!(books.len(), 1);
    assert_eq!(books.first().map(|book| book.title.as_str()), Some("Walden."));
    assert_eq!(user.email, "alex@alex.com");
    handle.stop(true).await;
}

#[rstest]
#[actix_rt::test]
async fn logout_drops_the_cookie() {
    let (addr, handle) = start_server();
    let client = client_for(addr, true);

    client.login("alex@alex.com", "pwdpwd").await.expect("login");
    client.logout().await.expect("logout");
    let err = client.books().await.expect_err("signed out");

    assert!(matches!(err, ClientError::Unauthorised { .. }));
    handle.stop(true).await;
}

#[rstest]
#[actix_rt::test]
async fn uncredentialed_client_forgets_the_session() {
    let (addr, handle) = start_server();
    let client = client_for(addr, false);

    client.login("alex@alex.com", "pwdpwd").await.expect("login");
    let err = client.books().await.expect_err("no cookie jar");

    match err {
        ClientError::Unauthorised { message } => assert_eq!(message, "login required"),
        other => panic!("unexpected error: {other}"),
    }
    handle.stop(true).await;
}

#[rstest]
#[actix_rt::test]
async fn wrong_password_reports_the_server_message() {
    let (addr, handle) = start_server();
    let client = client_for(addr, true);

    let err = client
        .login("alex@alex.com", "nope")
        .await
        .expect_err("rejected");

    match err {
        ClientError::Unauthorised { message } => assert_eq!(message, "invalid credentials"),
        other => panic!("unexpected error: {other}"),
    }
    handle.stop(true).await;
}

#[rstest]
#[actix_rt::test]
async fn raw_requests_resolve_against_the_base_url() {
    let (addr, handle) = start_server();
    let client = client_for(addr, true);

    let response = client.get("/broken").expect("request").send().await.expect("sent");

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(response.text().await.expect("body"), "boom");
    handle.stop(true).await;
}

#[rstest]
#[actix_rt::test]
async fn empty_unauthorised_bodies_still_map_to_unauthorised() {
    let (addr, handle) = start_server();
    let client = client_for(addr, true);

    let err = client.current_user().await.expect_err("no session");

    assert!(matches!(err, ClientError::Unauthorised { message } if message.is_empty()));
    handle.stop(true).await;
}

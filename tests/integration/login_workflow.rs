//! Email one-time-password login against the identity service.

use newsroom_content::error::IdentityError;
use newsroom_content::identity::{
    complete_email_login, start_email_login, IdentityClient, OtpAction, LOGIN_ENDPOINT,
    REGISTER_ENDPOINT, SEND_OTP_ENDPOINT, SESSION_ENDPOINT, USER_INFO_ENDPOINT,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_returning_reader_logs_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(USER_INFO_ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SEND_OTP_ENDPOINT))
        .and(body_partial_json(json!({"action": "login"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(LOGIN_ENDPOINT))
        .and(body_partial_json(json!({"validators": {"email_otp": "123456"}})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SESSION_ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"email": "reader@example.com"})),
        )
        .mount(&server)
        .await;

    let identity = IdentityClient::new(&server.uri()).unwrap();
    let pending = start_email_login(&identity, "reader@example.com")
        .await
        .unwrap();
    assert_eq!(pending.action, OtpAction::Login);

    complete_email_login(&identity, &pending, "123456")
        .await
        .unwrap();

    let session = identity.current_user().await.unwrap().unwrap();
    assert_eq!(session["email"], "reader@example.com");
}

#[tokio::test]
async fn test_new_reader_registers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(USER_INFO_ENDPOINT))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SEND_OTP_ENDPOINT))
        .and(body_partial_json(json!({"action": "register", "method": "email"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REGISTER_ENDPOINT))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let identity = IdentityClient::new(&server.uri()).unwrap();
    let pending = start_email_login(&identity, "new@example.com").await.unwrap();
    assert!(pending.is_registration());

    let err = complete_email_login(&identity, &pending, "999999")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        IdentityError::Rejected {
            endpoint: REGISTER_ENDPOINT.into(),
            status: 400
        }
    );
}

use super::*;

// =============================================================
// User decoding
// =============================================================

#[test]
fn user_decodes_backend_login_payload_without_optional_fields() {
    let raw = r#"{"id":7,"email":"ana@nonitos.cr","fullName":"Ana Mora","role":"CLIENT","isEmailVerified":true}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.full_name, "Ana Mora");
    assert_eq!(user.role, UserRole::Client);
    assert!(user.is_email_verified);
    assert!(user.phone_number.is_none());
    assert!(user.created_at.is_none());
}

#[test]
fn user_missing_verification_flag_defaults_to_unverified() {
    let raw = r#"{"id":1,"email":"a@b.cr","fullName":"A","role":"ADMIN"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, UserRole::Admin);
    assert!(!user.is_email_verified);
}

#[test]
fn user_rejects_unknown_role() {
    let raw = r#"{"id":1,"email":"a@b.cr","fullName":"A","role":"CHEF"}"#;
    assert!(serde_json::from_str::<User>(raw).is_err());
}

#[test]
fn user_encodes_camel_case_and_skips_absent_optionals() {
    let user = User {
        id: 3,
        email: "c@d.cr".to_owned(),
        full_name: "Carla".to_owned(),
        phone_number: None,
        role: UserRole::Client,
        is_email_verified: false,
        created_at: Some("2025-01-02T03:04:05".to_owned()),
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["fullName"], "Carla");
    assert_eq!(value["role"], "CLIENT");
    assert_eq!(value["isEmailVerified"], false);
    assert_eq!(value["createdAt"], "2025-01-02T03:04:05");
    assert!(value.get("phoneNumber").is_none());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn register_request_omits_missing_phone() {
    let req = RegisterRequest {
        email: "e@f.cr".to_owned(),
        password: "Secreta123".to_owned(),
        full_name: "Eva".to_owned(),
        phone_number: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["fullName"], "Eva");
    assert!(value.get("phoneNumber").is_none());
}

#[test]
fn refresh_request_uses_camel_case_key() {
    let req = RefreshRequest { refresh_token: "r1".to_owned() };
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"refreshToken":"r1"}"#);
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_decodes_credential_bundle() {
    let raw = r#"{
        "success": true,
        "message": "Login successful",
        "data": {
            "accessToken": "a1",
            "refreshToken": "r1",
            "tokenType": "Bearer",
            "expiresIn": 1800,
            "user": {"id":1,"email":"a@b.cr","fullName":"A","role":"CLIENT","isEmailVerified":false}
        }
    }"#;
    let env: ApiEnvelope<CredentialBundle> = serde_json::from_str(raw).unwrap();
    assert!(env.success);
    let bundle = env.data.unwrap();
    assert_eq!(bundle.access_token, "a1");
    assert_eq!(bundle.refresh_token, "r1");
    assert_eq!(bundle.user.email, "a@b.cr");
}

#[test]
fn envelope_tolerates_null_data_and_missing_message() {
    let env: ApiEnvelope<RefreshResponse> = serde_json::from_str(r#"{"success":false,"data":null}"#).unwrap();
    assert!(!env.success);
    assert!(env.message.is_empty());
    assert!(env.data.is_none());
}

#[test]
fn role_as_str_matches_wire_name() {
    assert_eq!(UserRole::Client.as_str(), "CLIENT");
    assert_eq!(UserRole::Admin.as_str(), "ADMIN");
}

use super::*;

#[test]
fn rejected_displays_server_message_verbatim() {
    let err = AuthError::Rejected { status: 401, message: "Credenciales inválidas".to_owned() };
    assert_eq!(err.to_string(), "Credenciales inválidas");
    assert_eq!(err.server_message(), Some("Credenciales inválidas"));
}

#[test]
fn user_message_falls_back_without_server_text() {
    assert_eq!(AuthError::Status(500).user_message("Error al crear la cuenta"), "Error al crear la cuenta");
    assert_eq!(AuthError::Network("offline".to_owned()).user_message("x"), "x");
}

#[test]
fn user_message_prefers_server_text() {
    let err = AuthError::Rejected { status: 400, message: "Email already registered".to_owned() };
    assert_eq!(err.user_message("Error al crear la cuenta"), "Email already registered");
}

#[test]
fn storage_error_converts() {
    let err: AuthError = StorageError::Unavailable.into();
    assert!(matches!(err, AuthError::Storage(_)));
}

#[test]
fn status_display_includes_code() {
    assert_eq!(AuthError::Status(503).to_string(), "request failed: 503");
}

use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@nonitos.cr  ", "Secreta123"),
        Ok(LoginRequest { email: "ana@nonitos.cr".to_owned(), password: "Secreta123".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_as_typed() {
    let req = validate_login_input("a@b.cr", " pass with spaces ").unwrap();
    assert_eq!(req.password, " pass with spaces ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "x"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("a@b.cr", ""), Err(MISSING_FIELDS));
}

#[test]
fn login_failure_message_uses_server_text() {
    let err = AuthError::Rejected { status: 401, message: "Cuenta bloqueada".to_owned() };
    assert_eq!(login_failure_message(&err), "Cuenta bloqueada");
}

#[test]
fn login_failure_message_falls_back() {
    assert_eq!(login_failure_message(&AuthError::Network("offline".to_owned())), "Credenciales inválidas");
    assert_eq!(login_failure_message(&AuthError::Status(500)), "Credenciales inválidas");
}

#[test]
fn submit_label_reflects_busy() {
    assert_eq!(submit_label(false), "Ingresar");
    assert_eq!(submit_label(true), "Ingresando...");
}

use super::*;

fn form(full_name: &str, email: &str, phone_number: &str, password: &str) -> RegisterForm {
    RegisterForm {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        phone_number: phone_number.to_owned(),
        password: password.to_owned(),
    }
}

#[test]
fn to_request_trims_text_fields() {
    let req = form("  Ana Mora ", " ana@nonitos.cr ", " +506 8888-8888 ", "Secreta123").to_request().unwrap();
    assert_eq!(req.full_name, "Ana Mora");
    assert_eq!(req.email, "ana@nonitos.cr");
    assert_eq!(req.phone_number.as_deref(), Some("+506 8888-8888"));
    assert_eq!(req.password, "Secreta123");
}

#[test]
fn to_request_omits_blank_phone() {
    let req = form("Ana", "ana@nonitos.cr", "   ", "Secreta123").to_request().unwrap();
    assert!(req.phone_number.is_none());
}

#[test]
fn to_request_requires_name_email_and_password() {
    assert_eq!(form("", "a@b.cr", "", "x").to_request(), Err(MISSING_FIELDS));
    assert_eq!(form("Ana", "  ", "", "x").to_request(), Err(MISSING_FIELDS));
    assert_eq!(form("Ana", "a@b.cr", "+506", "").to_request(), Err(MISSING_FIELDS));
}

#[test]
fn register_failure_message_prefers_server_text() {
    let err = AuthError::Rejected { status: 400, message: "Email already registered".to_owned() };
    assert_eq!(register_failure_message(&err), "Email already registered");
}

#[test]
fn register_failure_message_falls_back() {
    assert_eq!(register_failure_message(&AuthError::Status(500)), "Error al crear la cuenta");
}

#[test]
fn submit_label_reflects_busy() {
    assert_eq!(submit_label(false), "Crear Cuenta");
    assert_eq!(submit_label(true), "Creando cuenta...");
}

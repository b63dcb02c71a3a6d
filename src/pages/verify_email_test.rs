use super::*;

#[test]
fn usable_token_trims_and_rejects_blank() {
    assert_eq!(usable_token(Some(" abc-123 ".to_owned())).as_deref(), Some("abc-123"));
    assert_eq!(usable_token(Some("   ".to_owned())), None);
    assert_eq!(usable_token(None), None);
}

#[test]
fn outcome_success_is_verified() {
    assert_eq!(outcome(&Ok(())), VerifyStatus::Verified);
}

#[test]
fn outcome_uses_server_text() {
    let err = AuthError::Rejected { status: 400, message: "Verification token expired".to_owned() };
    assert_eq!(outcome(&Err(err)), VerifyStatus::Failed("Verification token expired".to_owned()));
}

#[test]
fn outcome_falls_back_without_server_text() {
    let status = outcome(&Err(AuthError::Network("offline".to_owned())));
    assert_eq!(status.text(), "No se pudo verificar tu email");
}

#[test]
fn status_text_per_state() {
    assert_eq!(VerifyStatus::Pending.text(), "Verificando tu email...");
    assert_eq!(VerifyStatus::Verified.text(), "¡Tu email ha sido verificado!");
    assert_eq!(VerifyStatus::Failed(INVALID_LINK.to_owned()).text(), INVALID_LINK);
}

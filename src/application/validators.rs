use validator::ValidateEmail;

/// Validates that the input looks like a deliverable email address.
///
/// On top of the RFC check the domain part must contain a dot, so
/// intranet-style addresses such as `user@localhost` are refused.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || !email.validate_email() {
        return false;
    }

    match email.rsplit_once('@') {
        Some((_, domain)) => {
            let domain = domain.trim_matches('.');
            !domain.is_empty() && domain.contains('.')
        }
        None => false,
    }
}

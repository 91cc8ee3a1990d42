//! Validation for the login form.

/// Checks that `email` looks like an address before it is submitted.
///
/// Mirrors what a browser `type="email"` field enforces: a single `@`, a
/// non-empty local part and a domain of non-empty dot-separated labels.
/// A single-label domain such as `localhost` is accepted.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Ingresa tu correo electrónico");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err("Formato de correo inválido");
    };

    if domain.contains('@') || email.contains(char::is_whitespace) {
        return Err("Formato de correo inválido");
    }

    if local.is_empty() {
        return Err("Falta el usuario antes de @");
    }

    if domain.split('.').any(str::is_empty) {
        return Err("Dominio de correo inválido");
    }

    Ok(())
}

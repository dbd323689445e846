//! PR body rendering errors.

/// Errors raised while building the update PR body.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The body template could not be filled in with the changed paths.
    #[error("Failed to render PR body: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// The built-in body template did not compile.
    #[error("Invalid PR body template: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),
}

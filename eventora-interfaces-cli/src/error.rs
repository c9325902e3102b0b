use thiserror::Error;

use eventora_application::AppError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("not signed in or session expired; run `eventora auth login`")]
    Unauthorized,
    #[error("{0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Backend(String),
    #[error("{0}")]
    Internal(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Unauthorized => 3,
            CliError::BadRequest(_) => 2,
            CliError::NotFound(_) => 4,
            CliError::Backend(_) => 5,
            CliError::Internal(_) => 1,
        }
    }
}

impl From<AppError> for CliError {
    fn from(value: AppError) -> Self {
        match value {
            AppError::Unauthorized => CliError::Unauthorized,
            AppError::BadRequest(msg) => CliError::BadRequest(msg),
            err @ AppError::Validation(_) => CliError::BadRequest(err.to_string()),
            AppError::NotFound(what) => CliError::NotFound(what),
            err @ AppError::Schema(_) => CliError::Backend(err.to_string()),
            err @ AppError::Backend { .. } => CliError::Backend(err.to_string()),
            AppError::Internal(err) => CliError::Internal(format!("{:#}", err)),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        CliError::Internal(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventora_domain::ValidationError;

    #[test]
    fn app_errors_map_to_exit_codes() {
        let validation = CliError::from(AppError::from(ValidationError {
            fields: vec!["title"],
        }));
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(
            validation.to_string(),
            "please fill in the required fields: title"
        );

        let backend = CliError::from(AppError::Backend {
            status: 503,
            message: "maintenance".to_string(),
        });
        assert_eq!(backend.exit_code(), 5);
        assert_eq!(CliError::from(AppError::Unauthorized).exit_code(), 3);
    }
}

use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use serde_derive::Serialize;
use std::error::Error;
use std::fmt;
use utoipa::ToSchema;

pub type HandlerResponse<T> = Result<T, CodeErrorResp>;

pub struct CodeError {
    pub success: bool,
    pub error_code: u16,
    pub http_status_code: StatusCode,
    pub message: &'static str,
}

impl CodeError {
    pub const POOL_ERROR: CodeError = CodeError {
        success: false,
        error_code: 0,
        http_status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Could not get conn out of pool!",
    };
    pub const DB_QUERY_ERROR: CodeError = CodeError {
        success: false,
        error_code: 1,
        http_status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Database query failed!",
    };
    pub const DB_INSERTION_ERROR: CodeError = CodeError {
        success: false,
        error_code: 2,
        http_status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Database insertion failed!",
    };
    pub const DB_UPDATE_ERROR: CodeError = CodeError {
        success: false,
        error_code: 3,
        http_status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Database update failed!",
    };
    pub const DB_DELETION_ERROR: CodeError = CodeError {
        success: false,
        error_code: 4,
        http_status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Database deletion failed!",
    };
    pub const EMAIL_INVALID: CodeError = CodeError {
        success: false,
        error_code: 10,
        http_status_code: StatusCode::BAD_REQUEST,
        message: "Not a valid email address!",
    };
    pub const PASSWORD_INVALID: CodeError = CodeError {
        success: false,
        error_code: 11,
        http_status_code: StatusCode::BAD_REQUEST,
        message: "Password does not meet the requirements!",
    };
    pub const USER_NAME_INVALID: CodeError = CodeError {
        success: false,
        error_code: 12,
        http_status_code: StatusCode::BAD_REQUEST,
        message: "Not a valid display name!",
    };
    pub const EMAIL_TAKEN_LOGIN_INSTEAD: CodeError = CodeError {
        success: false,
        error_code: 13,
        http_status_code: StatusCode::CONFLICT,
        message: "Email already exists, login instead!",
    };
    pub const EMAIL_TAKEN_PICK_ANOTHER: CodeError = CodeError {
        success: false,
        error_code: 14,
        http_status_code: StatusCode::CONFLICT,
        message: "Email already exists, register the new user under a different email!",
    };
    pub const USER_NOT_FOUND: CodeError = CodeError {
        success: false,
        error_code: 15,
        http_status_code: StatusCode::NOT_FOUND,
        message: "No account registered with that email!",
    };
    pub const WRONG_PW: CodeError = CodeError {
        success: false,
        error_code: 16,
        http_status_code: StatusCode::UNAUTHORIZED,
        message: "Incorrect password!",
    };
    pub const COULD_NOT_HASH_PW: CodeError = CodeError {
        success: false,
        error_code: 17,
        http_status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Could not hash password!",
    };
    pub const COULD_NOT_VERIFY_PW: CodeError = CodeError {
        success: false,
        error_code: 18,
        http_status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Could not verify password!",
    };
    pub const LOGIN_REQUIRED: CodeError = CodeError {
        success: false,
        error_code: 19,
        http_status_code: StatusCode::UNAUTHORIZED,
        message: "You need to login or register to do that!",
    };
    pub const FORBIDDEN: CodeError = CodeError {
        success: false,
        error_code: 20,
        http_status_code: StatusCode::FORBIDDEN,
        message: "You are not allowed to perform this action!",
    };
    pub const POST_NOT_FOUND: CodeError = CodeError {
        success: false,
        error_code: 21,
        http_status_code: StatusCode::NOT_FOUND,
        message: "Post not found!",
    };
    pub const COMMENT_NOT_FOUND: CodeError = CodeError {
        success: false,
        error_code: 22,
        http_status_code: StatusCode::NOT_FOUND,
        message: "Comment not found!",
    };
    pub const POST_TITLE_NOT_UNIQUE: CodeError = CodeError {
        success: false,
        error_code: 23,
        http_status_code: StatusCode::CONFLICT,
        message: "A post with that title already exists!",
    };
    pub const SESSION_ID_ALREADY_EXISTS: CodeError = CodeError {
        success: false,
        error_code: 24,
        http_status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Could not establish session!",
    };
    pub const COULD_NOT_BUILD_EMAIL: CodeError = CodeError {
        success: false,
        error_code: 25,
        http_status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Could not compose email message!",
    };
}

pub fn code_err<E: fmt::Display>(cerr: CodeError, e: E) -> CodeErrorResp {
    CodeErrorResp {
        success: cerr.success,
        error_code: cerr.error_code,
        http_status_code: cerr.http_status_code,
        message: cerr.message.to_string(),
        error_message: e.to_string(),
    }
}

impl From<CodeError> for CodeErrorResp {
    fn from(cerr: CodeError) -> Self {
        CodeErrorResp {
            success: cerr.success,
            error_code: cerr.error_code,
            http_status_code: cerr.http_status_code,
            message: cerr.message.to_string(),
            error_message: String::new(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CodeErrorResp {
    pub success: bool,
    pub error_code: u16,
    #[serde(serialize_with = "serialize_status_code")]
    #[schema(value_type = u16)]
    pub http_status_code: StatusCode,
    pub message: String,
    pub error_message: String,
}

fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

impl fmt::Display for CodeErrorResp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.error_message)
    }
}

impl Error for CodeErrorResp {}

impl IntoResponse for CodeErrorResp {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::to_string(&self).unwrap_or_else(|_| "{}".to_string());
        let mut response = (self.http_status_code, body).into_response();

        // Detail headers for the logging middleware; stripped there before
        // the response leaves the server.
        let headers = response.headers_mut();
        headers.insert(
            "x-error-status-code",
            HeaderValue::from_str(self.http_status_code.as_str())
                .unwrap_or(HeaderValue::from_static("")),
        );
        headers.insert(
            "x-error-code",
            HeaderValue::from_str(&self.error_code.to_string())
                .unwrap_or(HeaderValue::from_static("")),
        );
        headers.insert(
            "x-error-message",
            HeaderValue::from_str(&self.message).unwrap_or(HeaderValue::from_static("")),
        );
        headers.insert(
            "x-error-detail",
            HeaderValue::from_str(&self.error_message).unwrap_or(HeaderValue::from_static("")),
        );

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_taxonomy_maps_to_expected_statuses() {
        assert_eq!(CodeError::FORBIDDEN.http_status_code, StatusCode::FORBIDDEN);
        assert_eq!(
            CodeError::LOGIN_REQUIRED.http_status_code,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            CodeError::POST_NOT_FOUND.http_status_code,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CodeError::COMMENT_NOT_FOUND.http_status_code,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CodeError::POST_TITLE_NOT_UNIQUE.http_status_code,
            StatusCode::CONFLICT
        );
        assert_eq!(
            CodeError::EMAIL_TAKEN_LOGIN_INSTEAD.http_status_code,
            StatusCode::CONFLICT
        );
        assert_eq!(
            CodeError::EMAIL_TAKEN_PICK_ANOTHER.http_status_code,
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn code_err_attaches_detail() {
        let resp = code_err(CodeError::DB_QUERY_ERROR, "boom");
        assert_eq!(resp.error_code, 1);
        assert_eq!(resp.error_message, "boom");
        assert_eq!(resp.to_string(), "Database query failed!: boom");
    }
}

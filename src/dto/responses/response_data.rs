use axum::http::{HeaderValue, header};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::Cookie;
use serde_derive::Serialize;
use tracing::error;

use super::response_meta::ResponseMeta;

#[derive(Serialize)]
pub struct Response<D: serde::Serialize, M: serde::Serialize> {
    success: bool,
    data: D,
    meta: ResponseMeta<M>,
}

impl<D: serde::Serialize, M: serde::Serialize> IntoResponse for Response<D, M> {
    fn into_response(self) -> axum::response::Response {
        axum::response::Json(self).into_response()
    }
}

pub fn http_resp<D: serde::Serialize, M: serde::Serialize>(
    data: D,
    meta: M,
    start: tokio::time::Instant,
) -> Response<D, M> {
    Response {
        success: true,
        data,
        meta: ResponseMeta::from(start, meta),
    }
}

pub struct ResponseWithCookies<D: serde::Serialize, M: serde::Serialize> {
    inner: Response<D, M>,
    cookies_to_set: Option<Vec<Cookie<'static>>>,
    cookies_to_unset: Option<Vec<Cookie<'static>>>,
}

impl<D: serde::Serialize, M: serde::Serialize> IntoResponse for ResponseWithCookies<D, M> {
    fn into_response(self) -> axum::response::Response {
        let mut response = self.inner.into_response();

        for cookie in self.cookies_to_set.into_iter().flatten() {
            match HeaderValue::from_str(&cookie.to_string()) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(e) => error!(error = %e, "Could not serialize cookie into header value"),
            }
        }

        for mut cookie in self.cookies_to_unset.into_iter().flatten() {
            cookie.make_removal();
            match HeaderValue::from_str(&cookie.to_string()) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(e) => error!(error = %e, "Could not serialize removal cookie into header value"),
            }
        }

        response
    }
}

pub fn http_resp_with_cookies<D: serde::Serialize, M: serde::Serialize>(
    data: D,
    meta: M,
    start: tokio::time::Instant,
    cookies_to_set: Option<Vec<Cookie<'static>>>,
    cookies_to_unset: Option<Vec<Cookie<'static>>>,
) -> ResponseWithCookies<D, M> {
    ResponseWithCookies {
        inner: http_resp(data, meta, start),
        cookies_to_set,
        cookies_to_unset,
    }
}

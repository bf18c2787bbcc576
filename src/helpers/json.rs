use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde_derive::Serialize;

/// Envelope shared by every JSON endpoint.
#[derive(Serialize, Debug)]
pub(crate) struct JsonResponse<T> {
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) meta: Option<serde_json::Value>,
}

#[derive(Debug)]
pub(crate) struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    message: String,
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
    meta: Option<serde_json::Value>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self {
            message: String::new(),
            id: None,
            item: None,
            list: None,
            meta: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub(crate) fn set_msg<I: Into<String>>(mut self, msg: I) -> Self {
        self.message = msg.into();
        self
    }

    pub(crate) fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub(crate) fn set_meta(mut self, meta: serde_json::Value) -> Self {
        self.meta = Some(meta);
        self
    }

    fn to_json_response(self) -> JsonResponse<T> {
        JsonResponse {
            message: self.message,
            id: self.id,
            item: self.item,
            list: self.list,
            meta: self.meta,
        }
    }

    pub(crate) fn to_string(self) -> String {
        let response = self.to_json_response();
        serde_json::to_string(&response).unwrap_or_else(|_| response.message)
    }

    pub(crate) fn ok<I: Into<String>>(self, msg: I) -> web::Json<JsonResponse<T>> {
        web::Json(self.set_msg(msg).to_json_response())
    }

    pub(crate) fn created<I: Into<String>>(self, msg: I) -> HttpResponse {
        HttpResponse::Created().json(self.set_msg(msg).to_json_response())
    }

    fn error<I: Into<String>>(self, msg: I, status: StatusCode) -> Error {
        let msg = msg.into();
        let body = self.set_msg(msg.clone()).to_json_response();
        InternalError::from_response(msg, HttpResponse::build(status).json(body)).into()
    }

    pub(crate) fn bad_request<I: Into<String>>(self, msg: I) -> Error {
        self.error(msg, StatusCode::BAD_REQUEST)
    }

    pub(crate) fn form_error<I: Into<String>>(self, msg: I) -> Error {
        self.error(msg, StatusCode::BAD_REQUEST)
    }

    pub(crate) fn not_found<I: Into<String>>(self, msg: I) -> Error {
        self.error(msg, StatusCode::NOT_FOUND)
    }

    pub(crate) fn internal_server_error<I: Into<String>>(self, msg: I) -> Error {
        let msg = msg.into();
        if msg.trim().is_empty() {
            self.error("Internal error", StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            self.error(msg, StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::ResponseError;

    #[test]
    fn empty_fields_are_skipped() {
        let body = JsonResponse::<i32>::build().set_msg("OK").to_string();
        assert_eq!(body, r#"{"message":"OK"}"#);
    }

    #[test]
    fn list_and_meta_are_serialized() {
        let body = JsonResponse::build()
            .set_list(vec![1, 2])
            .set_meta(serde_json::json!({"favorites": [2]}))
            .set_msg("OK")
            .to_string();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(value["list"], serde_json::json!([1, 2]));
        assert_eq!(value["meta"]["favorites"], serde_json::json!([2]));
        assert!(value.get("item").is_none());
    }

    #[test]
    fn errors_carry_status_and_envelope() {
        let err = JsonResponse::<i32>::build().not_found("not found");
        let response = err.as_response_error().error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().try_into_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["message"], "not found");
    }

    #[test]
    fn blank_internal_error_gets_a_message() {
        let err = JsonResponse::<i32>::build().internal_server_error("");
        let response = err.as_response_error().error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal error");
    }
}

//! `reqwest` transport for native targets.

use std::future::Future;

use reqwest::{header::CONTENT_TYPE, multipart};

use crate::api::transport::{ApiRequest, Body, Method, RawResponse, Transport};

#[derive(Clone, Debug, Default)]
pub struct NativeTransport {
    client: reqwest::Client,
}

impl NativeTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for NativeTransport {
    fn send(
        &self,
        base_url: &str,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, String>> {
        let url = request.url(base_url);
        let client = self.client.clone();

        async move {
            let builder = match request.method {
                Method::Get => client.get(&url),
                Method::Post => client.post(&url),
            }
            .query(&request.query);

            let builder = match request.body {
                Body::Empty => builder,
                Body::Json(value) => builder.json(&value),
                Body::Multipart(upload) => {
                    let file = multipart::Part::bytes(upload.bytes)
                        .file_name(upload.file_name)
                        .mime_str(&upload.content_type)
                        .map_err(|e| format!("invalid content type: {}", e))?;

                    builder.multipart(
                        multipart::Form::new()
                            .text("student_id", upload.student_id)
                            .text("checklist_step_id", upload.checklist_step_id)
                            .part("file", file),
                    )
                }
            };

            let response = builder.send().await.map_err(|e| e.to_string())?;

            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let body = response.text().await.map_err(|e| e.to_string())?;

            Ok(RawResponse {
                status,
                content_type,
                body,
            })
        }
    }
}

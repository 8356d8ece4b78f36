//! `reqwasm` transport for the browser build.

use std::future::Future;

use reqwasm::http::Request;

use crate::api::transport::{ApiRequest, Body, Method, RawResponse, Transport};

#[derive(Clone, Copy, Debug, Default)]
pub struct WebTransport;

fn url_with_query(base_url: &str, request: &ApiRequest) -> String {
    let mut url = request.url(base_url);
    for (index, (key, value)) in request.query.iter().enumerate() {
        url.push(if index == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&String::from(js_sys::encode_uri_component(value)));
    }
    url
}

fn multipart_body(
    upload: crate::model::document::DocumentUpload,
) -> Result<web_sys::FormData, String> {
    let js_error = |e: wasm_bindgen::JsValue| format!("{:?}", e);

    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_str("student_id", &upload.student_id)
        .map_err(js_error)?;
    form.append_with_str("checklist_step_id", &upload.checklist_step_id)
        .map_err(js_error)?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(upload.bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    form.append_with_blob_and_filename("file", &blob, &upload.file_name)
        .map_err(js_error)?;

    Ok(form)
}

impl Transport for WebTransport {
    fn send(
        &self,
        base_url: &str,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, String>> {
        let url = url_with_query(base_url, &request);

        async move {
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };

            let builder = match request.body {
                Body::Empty => builder,
                Body::Json(value) => builder
                    .header("Content-Type", "application/json")
                    .body(value.to_string()),
                Body::Multipart(upload) => builder.body(multipart_body(upload)?),
            };

            let response = builder
                .send()
                .await
                .map_err(|e| format!("Failed to send request: {}", e))?;

            let status = response.status();
            let content_type = response.headers().get("content-type");
            let body = response
                .text()
                .await
                .map_err(|e| format!("Failed to read response body: {}", e))?;

            Ok(RawResponse {
                status,
                content_type,
                body,
            })
        }
    }
}

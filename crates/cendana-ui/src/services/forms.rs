//! Requests submitted through a hidden form element.
//!
//! Controllers that answer with file downloads (or server-directed
//! redirects) cannot be driven over XHR; the browser has to navigate. The
//! pure [`FormRequest`] describes the submission and the wasm side builds
//! and submits the actual `<form>`.

use cendana_api_models::RedirectSpec;
use serde_json::Value;

/// A navigation request carried by a hidden form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRequest {
    /// Destination URL; `#` when unset.
    pub url: String,
    /// Uppercased HTTP method; `GET` when unset.
    pub method: String,
    /// Field name/value pairs submitted with the form, in order.
    pub fields: Vec<(String, String)>,
}

impl FormRequest {
    /// Build a request, normalizing the method and defaulting the URL.
    #[must_use]
    pub fn new(url: impl Into<String>, method: &str) -> Self {
        let url = url.into();
        Self {
            url: if url.is_empty() { "#".to_string() } else { url },
            method: if method.is_empty() {
                "GET".to_string()
            } else {
                method.to_uppercase()
            },
            fields: Vec::new(),
        }
    }

    /// Append one form field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Build the submission for a server-directed redirect.
    #[must_use]
    pub fn from_redirect(spec: &RedirectSpec) -> Self {
        let mut request = Self::new(spec.location.clone(), &spec.method);
        for (name, value) in &spec.data {
            request.fields.push((name.clone(), display_value(value)));
        }
        request
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Create, attach, and submit the hidden form.
#[cfg(target_arch = "wasm32")]
pub fn submit(request: &FormRequest) -> anyhow::Result<()> {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlFormElement, HtmlInputElement};

    let document = gloo::utils::document();
    let form: HtmlFormElement = document
        .create_element("form")
        .map_err(|err| anyhow::anyhow!("creating form: {err:?}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("form element has unexpected type"))?;
    form.set_method(&request.method);
    form.set_action(&request.url);
    form.set_attribute("style", "display: none")
        .map_err(|err| anyhow::anyhow!("hiding form: {err:?}"))?;

    for (name, value) in &request.fields {
        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(|err| anyhow::anyhow!("creating input: {err:?}"))?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("input element has unexpected type"))?;
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input)
            .map_err(|err| anyhow::anyhow!("appending input: {err:?}"))?;
    }

    gloo::utils::body()
        .append_child(&form)
        .map_err(|err| anyhow::anyhow!("attaching form: {err:?}"))?;
    form.submit()
        .map_err(|err| anyhow::anyhow!("submitting form: {err:?}"))?;
    Ok(())
}

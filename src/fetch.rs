use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpResponse};
use scraper::{Html, Node};

// Their text content is never rendered
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// One GET. Only a 2xx response is returned.
pub fn fetch_page(http: &dyn HttpClient, url: &str) -> Result<HttpResponse> {
    let response = http.get(url)?;

    if !response.is_success() {
        return Err(Error::Network(format!(
            "Unexpected server response: {}",
            response.status
        )));
    }

    Ok(response)
}

/// Visible text of the document in document order. Newlines inside text nodes
/// are preserved so callers can work line by line.
pub fn extract_text(markup: &str) -> String {
    let document = Html::parse_document(markup);

    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let Node::Text(text) = node.value() else {
                return None;
            };

            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
            });

            (!hidden).then_some(&**text)
        })
        .collect()
}

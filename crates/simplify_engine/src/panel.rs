use url::form_urlencoded;

/// Element id the host checks before injecting a second panel.
pub const PANEL_ELEMENT_ID: &str = "simplify-voice-panel";

/// Markup for the voice-agent frame.
///
/// The frame is a fully isolated execution context; the page URL in the query
/// string is the only data that ever crosses the boundary. Microphone and
/// autoplay are granted so the agent can hold a live voice session.
pub fn panel_markup(panel_page: &str, page_url: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("page_url", page_url)
        .finish();
    format!(
        "<iframe id=\"{PANEL_ELEMENT_ID}\" src=\"{panel_page}?{query}\" \
         allow=\"microphone; autoplay\" \
         style=\"position:fixed;bottom:24px;left:24px;width:320px;height:420px;\
         border:none;z-index:2147483647;\"></iframe>"
    )
}

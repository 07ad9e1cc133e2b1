use simplify_engine::{panel_markup, PANEL_ELEMENT_ID};

#[test]
fn panel_frame_targets_local_page_with_encoded_url() {
    let markup = panel_markup("panel.html", "https://example.com/a b?x=1&y=2");

    assert!(markup.contains(&format!("id=\"{PANEL_ELEMENT_ID}\"")));
    assert!(markup.contains("src=\"panel.html?page_url=https%3A%2F%2Fexample.com%2Fa+b%3Fx%3D1%26y%3D2\""));
}

#[test]
fn panel_frame_grants_microphone_and_autoplay() {
    let markup = panel_markup("panel.html", "https://example.com");
    assert!(markup.contains("allow=\"microphone; autoplay\""));
    assert!(markup.contains("position:fixed"));
}

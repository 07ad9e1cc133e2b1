use pretty_assertions::assert_eq;
use simplify_engine::{with_undo_control, UNDO_BUTTON_ID, UNDO_SCRIPT_ID};

#[test]
fn control_is_injected_immediately_before_body_close() {
    let out = with_undo_control("<html><body>X</body></html>");

    let script_start = out.find(UNDO_SCRIPT_ID).expect("script present");
    let body_close = out.rfind("</body>").expect("body close kept");
    assert!(script_start < body_close);

    // Nothing sits between the end of the script and the closing tag.
    let script_end = out.find("</script>").expect("script closed") + "</script>".len();
    assert_eq!(&out[script_end..script_end + "</body>".len()], "</body>");

    // Original content is preserved verbatim around the injection.
    assert!(out.starts_with("<html><body>X"));
    assert!(out.ends_with("</body></html>"));
}

#[test]
fn body_close_tag_is_matched_case_insensitively() {
    let out = with_undo_control("<HTML><BODY>X</BODY></HTML>");
    let script_start = out.find(UNDO_SCRIPT_ID).expect("script present");
    assert!(script_start < out.rfind("</BODY>").unwrap());
    assert!(out.ends_with("</BODY></HTML>"));
}

#[test]
fn injection_targets_the_final_body_close() {
    // A literal "</body>" inside content must not attract the control.
    let html = "<html><body><pre>&lt;/body&gt; is an escape, </body> is not</pre></body></html>";
    let out = with_undo_control(html);

    let script_start = out.find(UNDO_SCRIPT_ID).unwrap();
    let last_close = out.rfind("</body>").unwrap();
    assert!(script_start < last_close);
    assert!(out[script_start..].starts_with("simplify-undo-control"));
    // Only the final closing tag moved; the embedded one stays in place.
    assert_eq!(out.matches("</body>").count(), html.matches("</body>").count());
}

#[test]
fn markup_without_body_close_gets_control_appended() {
    let out = with_undo_control("<p>fragment</p>");
    assert!(out.starts_with("<p>fragment</p>"));
    assert!(out.contains(UNDO_SCRIPT_ID));
    assert!(out.trim_end().ends_with("</script>"));
}

#[test]
fn injected_script_reloads_and_renders_one_button() {
    let out = with_undo_control("<html><body></body></html>");
    assert!(out.contains(UNDO_BUTTON_ID));
    assert!(out.contains("window.location.reload()"));
    // Self-contained: one script block, no external references.
    assert_eq!(out.matches("<script").count(), 1);
    assert!(!out.contains(" src="));
}

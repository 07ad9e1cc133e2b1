/// Element id of the injected script block.
pub const UNDO_SCRIPT_ID: &str = "simplify-undo-control";
/// Element id of the button the script renders inside the new document.
pub const UNDO_BUTTON_ID: &str = "simplify-undo-button";

// Self-contained controller for the replaced document. It shares nothing with
// the outer page: its only behavior is a full reload, which restores the
// original page from the network and discards all in-memory state.
const UNDO_CONTROL_SCRIPT: &str = r#"<script id="simplify-undo-control">
(function () {
  function attach() {
    if (document.getElementById("simplify-undo-button")) { return; }
    var button = document.createElement("button");
    button.id = "simplify-undo-button";
    button.textContent = "Undo";
    button.style.cssText = "position:fixed;bottom:24px;right:24px;z-index:2147483647;" +
      "padding:10px 18px;border:none;border-radius:6px;cursor:pointer;" +
      "background:#d97706;color:#fff;font:14px/1 sans-serif;";
    button.addEventListener("click", function () { window.location.reload(); });
    document.body.appendChild(button);
  }
  if (document.readyState === "loading") {
    document.addEventListener("DOMContentLoaded", attach);
  } else {
    attach();
  }
})();
</script>"#;

/// Augments cleaned markup with the undo control, immediately before the
/// final closing body tag.
///
/// The insertion is string-level: the cleaned document does not exist as a
/// live DOM at this point. Markup without a `</body>` tag gets the control
/// appended at the end; the cleaned content itself is never altered.
pub fn with_undo_control(cleaned_html: &str) -> String {
    match find_last_body_close(cleaned_html) {
        Some(idx) => {
            let mut out = String::with_capacity(cleaned_html.len() + UNDO_CONTROL_SCRIPT.len());
            out.push_str(&cleaned_html[..idx]);
            out.push_str(UNDO_CONTROL_SCRIPT);
            out.push_str(&cleaned_html[idx..]);
            out
        }
        None => {
            let mut out = cleaned_html.to_string();
            out.push_str(UNDO_CONTROL_SCRIPT);
            out
        }
    }
}

/// Byte offset of the last `</body>` tag, matched case-insensitively.
fn find_last_body_close(html: &str) -> Option<usize> {
    html.to_ascii_lowercase().rfind("</body>")
}

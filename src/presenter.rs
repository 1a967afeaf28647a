//! HTML grid of generation results
//!
//! One card per result: provider and model in the header, a button that
//! toggles the raw code, a button that reloads the preview frame, the preview
//! itself and the escaped code. Failed entries carry a visible label.

use crate::core_types::GenerationResult;
use crate::logging::log_debug;
use html_escape::{encode_safe, encode_text};

const GRID_STYLE: &str = r#"<style>
.results-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 24px; }
.result-card { border: 1px solid #e0e0e0; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); }
.result-card.failed { border-color: #e57373; }
.card-header { display: flex; justify-content: space-between; align-items: center; padding: 8px 12px; background: #f5f5f5; border-bottom: 1px solid #e0e0e0; }
.header-buttons { display: flex; gap: 8px; }
.button-icon { background: none; border: 1px solid #404040; border-radius: 4px; cursor: pointer; width: 32px; height: 32px; }
.button-icon svg { width: 20px; height: 20px; }
.failure-label { color: #c62828; font-weight: bold; margin-left: 8px; }
.preview-container { position: relative; min-height: 600px; height: 800px; overflow: auto; }
.code-content { padding: 16px; margin: 16px; border-radius: 4px; max-height: 800px; overflow: auto; background: #f5f5f5; }
.code-content pre { margin: 0; }
</style>"#;

const CODE_ICON: &str = r#"<svg viewBox="0 0 24 24"><path fill="currentColor" d="M9.4 16.6L4.8 12l4.6-4.6L8 6l-6 6 6 6 1.4-1.4zm5.2 0l4.6-4.6-4.6-4.6L16 6l6 6-6 6-1.4-1.4z"/></svg>"#;

const RELOAD_ICON: &str = r#"<svg viewBox="0 0 24 24"><path fill="currentColor" d="M17.65 6.35A7.958 7.958 0 0012 4c-4.42 0-7.99 3.58-7.99 8s3.57 8 7.99 8c3.73 0 6.84-2.55 7.73-6h-2.08A5.99 5.99 0 0112 18c-3.31 0-6-2.69-6-6s2.69-6 6-6c1.66 0 3.14.69 4.22 1.78L13 11h7V4l-2.35 2.35z"/></svg>"#;

/// Render all results, in order, as one HTML document fragment.
pub fn present(results: &[GenerationResult]) -> String {
    let mut html = String::new();
    html.push_str(GRID_STYLE);
    html.push_str("\n<div class='results-container'>\n<div class='results-grid'>\n");
    for result in results {
        html.push_str(&render_card(result));
    }
    html.push_str("</div>\n</div>\n");

    log_debug!(
        cards = results.len(),
        html_length = html.len(),
        "Rendered results grid"
    );
    html
}

/// Card for one result.
pub fn render_card(result: &GenerationResult) -> String {
    let base_id = encode_safe(
        result
            .frame_id
            .strip_suffix("_preview")
            .unwrap_or(&result.frame_id),
    );
    let code_id = format!("{base_id}_code");
    let frame_id = encode_safe(&result.frame_id);
    let provider_upper = result.model_id.provider().to_uppercase();
    let provider = encode_text(&provider_upper);
    let model = encode_text(result.model_id.model());

    let (card_class, failure_label) = match result.failure_kind() {
        None => ("result-card", String::new()),
        Some(kind) => (
            "result-card failed",
            format!(
                "<span class='failure-label' data-failure-kind='{}'>Failed</span>",
                kind.as_str()
            ),
        ),
    };

    format!(
        r#"<div class='{card_class}'>
  <div class='card-header'>
    <div class='header-title'><strong>{provider}</strong> - {model}{failure_label}</div>
    <div class='header-buttons'>
      <button class="button-icon" title="Show/hide code" onclick="(function(){{var el=document.getElementById('{code_id}');if(el){{el.style.display=(el.style.display==='none'?'block':'none');}}}})()">{CODE_ICON}</button>
      <button class="button-icon" title="Reload preview" onclick="(function(){{var f=document.getElementById('{frame_id}');if(f){{var src=f.src;f.src='about:blank';setTimeout(function(){{f.src=src;}},100);}}}})()">{RELOAD_ICON}</button>
    </div>
  </div>
  <div style='position: relative;'>
    <div class='preview-container'>{preview}</div>
    <div id='{code_id}' class='code-content' style='display:none;'><pre><code class="language-html">{code}</code></pre></div>
  </div>
</div>
"#,
        preview = result.preview,
        code = encode_safe(&result.code()),
    )
}

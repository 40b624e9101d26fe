//! The console page, embedded as a string constant
//!
//! No external assets and no template engine: the known user identifiers are
//! spliced into the selector at render time, so the browser needs no extra
//! fetch to populate it. The in-page script mirrors the retrieval protocol
//! (one request per selection, last-selected-wins, all-or-nothing panel
//! updates); the typed implementation lives in `crate::client`.

use axum::{extract::State, response::Html};

use crate::models::UserId;

use super::state::AppState;

/// Serves the console page with the user selector populated inline
pub async fn console_page(State(state): State<AppState>) -> Html<String> {
    Html(render_console_page(&state.dataset.users()))
}

fn render_console_page(users: &[UserId]) -> String {
    let options: String = users
        .iter()
        .map(|user| {
            let id = escape_html(user.as_str());
            format!("<option value=\"{id}\">User {id}</option>")
        })
        .collect();

    CONSOLE_HTML.replace("<!--USER_OPTIONS-->", &options)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const CONSOLE_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Service Advisor</title>
<style>
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; max-width: 860px; margin: 0 auto; padding: 24px; color: #1f2328; }
h1 { font-size: 22px; margin-bottom: 16px; }
select { font-size: 14px; padding: 6px 10px; margin-bottom: 20px; }
.panel { margin-bottom: 24px; }
.panel h2 { font-size: 16px; border-bottom: 1px solid #d0d7de; padding-bottom: 6px; }
.placeholder { color: #656d76; }
#notice { display: none; color: #a40e26; margin-bottom: 16px; }
ol li, ul li { margin: 6px 0; }
.bar-track { background: #eaeef2; border-radius: 4px; height: 10px; width: 280px; }
.bar-fill { background: #218bff; border-radius: 4px; height: 10px; }
.score-label { color: #656d76; font-size: 13px; }
</style>
</head>
<body>
<h1>Service Advisor</h1>
<label for="user-select">Select a user:</label>
<select id="user-select">
<option value="">-- choose --</option>
<!--USER_OPTIONS-->
</select>
<div id="notice"></div>
<div class="panel">
<h2>Interaction History</h2>
<ul id="history"><li class="placeholder">Select a user to see their history.</li></ul>
</div>
<div class="panel">
<h2>Recommended Services</h2>
<ol id="recommendations"><li class="placeholder">Select a user to see recommendations.</li></ol>
</div>
<script>
let currentCycle = 0;

document.getElementById('user-select').addEventListener('change', async (event) => {
  const userId = event.target.value;
  if (!userId) return;

  const cycle = ++currentCycle;
  try {
    const response = await fetch('/get_recommendations', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ user_id: userId }),
    });
    if (!response.ok) throw new Error('status ' + response.status);
    const payload = await response.json();

    if (cycle !== currentCycle) return;
    if (payload.status !== 'success') {
      showNotice('The recommendation service reported an error. Please try again.');
      return;
    }
    hideNotice();
    renderHistory(payload.history);
    renderRecommendations(payload.recommendations);
  } catch (err) {
    if (cycle !== currentCycle) return;
    showNotice('Could not reach the recommendation service. Please try again.');
  }
});

function renderHistory(entries) {
  const list = document.getElementById('history');
  list.innerHTML = '';
  for (const entry of entries) {
    const item = document.createElement('li');
    item.textContent = entry['AWS Service'] + ' / ' + entry['Interaction Type'] + ' / ' + entry['Rating'];
    list.appendChild(item);
  }
}

function renderRecommendations(recommendations) {
  const list = document.getElementById('recommendations');
  list.innerHTML = '';
  recommendations.forEach((rec) => {
    const percent = (rec.score * 100).toFixed(1);
    const item = document.createElement('li');

    const name = document.createElement('div');
    name.textContent = rec.service;
    item.appendChild(name);

    const track = document.createElement('div');
    track.className = 'bar-track';
    const fill = document.createElement('div');
    fill.className = 'bar-fill';
    fill.style.width = percent + '%';
    track.appendChild(fill);
    item.appendChild(track);

    const label = document.createElement('div');
    label.className = 'score-label';
    label.textContent = 'Score: ' + percent + '%';
    item.appendChild(label);

    list.appendChild(item);
  });
}

function showNotice(text) {
  const notice = document.getElementById('notice');
  notice.textContent = text;
  notice.style.display = 'block';
}

function hideNotice() {
  document.getElementById('notice').style.display = 'none';
}
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_inlines_user_options() {
        let page = render_console_page(&[UserId::new("2"), UserId::new("10")]);

        assert!(page.contains(r#"<option value="2">User 2</option>"#));
        assert!(page.contains(r#"<option value="10">User 10</option>"#));
        // The unselected sentinel stays first.
        assert!(page.contains(r#"<option value="">"#));
    }

    #[test]
    fn test_page_escapes_identifiers() {
        let page = render_console_page(&[UserId::new("a<b&\"c\"")]);

        assert!(page.contains("a&lt;b&amp;&quot;c&quot;"));
        assert!(!page.contains("a<b"));
    }

    #[test]
    fn test_escape_html_passes_plain_text() {
        assert_eq!(escape_html("42"), "42");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    }
}

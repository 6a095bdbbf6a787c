use crate::{
    types::{Snapshot, WindowAlbums},
    utils::escape_html,
};

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 60em; margin: 2em auto; }}
    .error {{ color: #b00020; }}
    .window {{ display: inline-block; vertical-align: top; min-width: 18em; margin-right: 1em; }}
  </style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}

pub fn home() -> String {
    layout(
        "Basic Page",
        r#"<h1>Basic Page</h1>
<p>What were you listening to back then?</p>
<form method="post" action="/">
  <label for="username">Last.fm username</label>
  <input type="text" id="username" name="username" autofocus>
  <button type="submit">Show</button>
</form>"#,
    )
}

pub fn not_found() -> String {
    layout(
        "Not Found",
        r#"<h1>Not Found</h1>
<p>No such Last.fm user. <a href="/">Try another name</a>.</p>"#,
    )
}

fn window_section(window: &WindowAlbums) -> String {
    let items = if window.albums.is_empty() {
        "<p>Nothing scrobbled that week.</p>".to_string()
    } else {
        let rows: String = window
            .albums
            .iter()
            .map(|a| {
                format!(
                    "<li>{} &ndash; {}</li>",
                    escape_html(&a.artist),
                    escape_html(&a.album)
                )
            })
            .collect();
        format!("<ol>{}</ol>", rows)
    };

    format!(
        r#"<section class="window" id="{label}">
<h2>{title}</h2>
<p>Week of {target}</p>
{items}
</section>
"#,
        label = window.window.label(),
        title = window.window.title(),
        target = window.target.format("%Y-%m-%d"),
        items = items
    )
}

/// Renders the page of `username`: either the snapshot or an inline error.
pub fn user(username: &str, snapshot: Option<&Snapshot>, error: Option<&str>) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape_html(username));

    if let Some(message) = error {
        body.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(message)
        ));
    }

    if let Some(snapshot) = snapshot {
        for window in &snapshot.windows {
            body.push_str(&window_section(window));
        }
    }

    body.push_str("<p><a href=\"/\">Back</a></p>");
    layout(username, &body)
}

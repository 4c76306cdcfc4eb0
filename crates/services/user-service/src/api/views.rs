//! Server-rendered HTML views.

use std::fmt::Write;

use domain::User;

/// Page heading shown above the user listing
pub const INDEX_TITLE: &str = "All Users";

/// Placeholder shown when no users exist
pub const EMPTY_USERS: &str = "<p>No users!</p>";

/// Escape text for safe inclusion in HTML element content and attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the index page: an add-user form followed by every user.
///
/// `error` is shown above the form when a submission was rejected.
pub fn render_index(users: &[User], error: Option<&str>) -> String {
    let mut body = String::new();

    if let Some(message) = error {
        let _ = writeln!(
            body,
            r#"      <p class="notification is-danger">{}</p>"#,
            escape_html(message)
        );
    }

    body.push_str(
        r#"      <form action="/" method="POST">
        <div class="field">
          <input name="username" class="input" type="text" placeholder="Enter a username" required>
        </div>
        <div class="field">
          <input name="email" class="input" type="email" placeholder="Enter an email address" required>
        </div>
        <input type="submit" class="button is-primary is-fullwidth" value="Submit">
      </form>
      <hr><br>
"#,
    );

    if users.is_empty() {
        let _ = writeln!(body, "      {}", EMPTY_USERS);
    } else {
        body.push_str("      <ul>\n");
        for user in users {
            let _ = writeln!(
                body,
                "        <li><strong>{}</strong> - <em>{}</em></li>",
                escape_html(&user.username),
                escape_html(&user.email)
            );
        }
        body.push_str("      </ul>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Users</title>
  </head>
  <body>
    <section class="section">
      <h1 class="title">{INDEX_TITLE}</h1>
      <hr><br>
{body}    </section>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: i32, username: &str, email: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            active_since: Utc::now(),
        }
    }

    #[test]
    fn empty_index_shows_placeholder() {
        let html = render_index(&[], None);

        assert!(html.contains(INDEX_TITLE));
        assert!(html.contains(EMPTY_USERS));
    }

    #[test]
    fn index_lists_users_in_order() {
        let html = render_index(
            &[user(1, "luis", "luisalcantara@upeu.edu.pe"), user(2, "david", "david@gmail.com")],
            None,
        );

        assert!(!html.contains(EMPTY_USERS));
        let luis = html.find("luis").unwrap();
        let david = html.find("david").unwrap();
        assert!(luis < david);
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render_index(&[user(1, "<script>", "a&b@example.com")], Some("bad \"input\""));

        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a&amp;b@example.com"));
        assert!(html.contains("bad &quot;input&quot;"));
        assert!(!html.contains("<script>"));
    }
}

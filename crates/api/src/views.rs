//! Server-rendered HTML for the admin panel.
//!
//! Pages are tera templates under `templates/admin/`, compiled into the
//! binary and rendered with autoescaping on for `.html` files. Links
//! built from the path constants are passed through `| safe`; every
//! value from the database or a form is escaped by tera.

use homevideo_db::models::home_video::HomeVideo;
use serde::Serialize;
use tera::{Context, Tera};

use crate::handlers::admin::AdminVideoForm;

pub const ADMIN_INDEX_PATH: &str = "/admin";
pub const ADMIN_LIST_PATH: &str = "/admin/homevideo";
pub const ADMIN_NEW_PATH: &str = "/admin/homevideo/new";

const TEMPLATES: [(&str, &str); 4] = [
    ("admin/layout.html", include_str!("../templates/admin/layout.html")),
    ("admin/index.html", include_str!("../templates/admin/index.html")),
    ("admin/list.html", include_str!("../templates/admin/list.html")),
    ("admin/form.html", include_str!("../templates/admin/form.html")),
];

pub fn edit_path(id: i64) -> String {
    format!("{ADMIN_LIST_PATH}/{id}/edit")
}

/// Compile the admin templates.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;
    tera.autoescape_on(vec![".html"]);
    Ok(tera)
}

/// One table row; optional columns are rendered as empty cells.
#[derive(Debug, Serialize)]
struct VideoRow<'a> {
    id: i64,
    name: &'a str,
    category: &'a str,
    year: String,
    director: &'a str,
}

impl<'a> From<&'a HomeVideo> for VideoRow<'a> {
    fn from(video: &'a HomeVideo) -> Self {
        Self {
            id: video.id,
            name: &video.name,
            category: &video.category,
            year: video.year.map(|y| y.to_string()).unwrap_or_default(),
            director: video.director.as_deref().unwrap_or_default(),
        }
    }
}

fn page_context(title: &str) -> Context {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert("index_path", ADMIN_INDEX_PATH);
    context.insert("list_path", ADMIN_LIST_PATH);
    context.insert("new_path", ADMIN_NEW_PATH);
    context
}

pub fn index_page(templates: &Tera, count: i64) -> Result<String, tera::Error> {
    let mut context = page_context("Home");
    context.insert("count", &count);
    templates.render("admin/index.html", &context)
}

pub fn list_page(templates: &Tera, videos: &[HomeVideo]) -> Result<String, tera::Error> {
    let rows: Vec<VideoRow<'_>> = videos.iter().map(VideoRow::from).collect();
    let mut context = page_context("HomeVideo");
    context.insert("videos", &rows);
    templates.render("admin/list.html", &context)
}

pub fn form_page(
    templates: &Tera,
    title: &str,
    action: &str,
    form: &AdminVideoForm,
    error: Option<&str>,
) -> Result<String, tera::Error> {
    let mut context = page_context(title);
    context.insert("action", action);
    context.insert("form", form);
    context.insert("error", &error);
    templates.render("admin/form.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates() -> Tera {
        load_templates().expect("admin templates compile")
    }

    #[test]
    fn index_page_shows_count_and_links() {
        let html = index_page(&templates(), 3).unwrap();
        assert!(html.contains("(3)"));
        assert!(html.contains(r#"href="/admin/homevideo""#));
        assert!(html.contains("bootstrap.min.css"));
    }

    #[test]
    fn list_page_escapes_row_values() {
        let videos = vec![HomeVideo {
            id: 7,
            name: "<b>Bold</b>".to_string(),
            category: "Drama".to_string(),
            year: None,
            director: Some("O'Neil".to_string()),
        }];
        let html = list_page(&templates(), &videos).unwrap();
        assert!(html.contains("&lt;b&gt;Bold&lt;"));
        assert!(html.contains("O&#x27;Neil"));
        assert!(html.contains(r#"href="/admin/homevideo/7/edit""#));
        assert!(html.contains(r#"action="/admin/homevideo/7/delete""#));
        assert!(!html.contains("<b>Bold</b>"));
        assert!(!html.contains("O'Neil"));
    }

    #[test]
    fn list_page_renders_missing_year_as_empty_cell() {
        let videos = vec![HomeVideo {
            id: 1,
            name: "Alien".to_string(),
            category: "Horror".to_string(),
            year: None,
            director: None,
        }];
        let html = list_page(&templates(), &videos).unwrap();
        assert!(html.contains("<td>Alien</td><td>Horror</td><td></td><td></td>"));
    }

    #[test]
    fn form_page_shows_error_and_values() {
        let form = AdminVideoForm {
            name: "Matrix".to_string(),
            year: "abc".to_string(),
            ..Default::default()
        };
        let html = form_page(&templates(), "Create", ADMIN_NEW_PATH, &form, Some("bad year")).unwrap();
        assert!(html.contains("alert-danger"));
        assert!(html.contains("bad year"));
        assert!(html.contains(r#"value="Matrix""#));
        assert!(html.contains(r#"value="abc""#));
        assert!(html.contains(r#"action="/admin/homevideo/new""#));
    }

    #[test]
    fn form_page_escapes_submitted_values() {
        let form = AdminVideoForm {
            name: r#""><script>alert(1)</script>"#.to_string(),
            ..Default::default()
        };
        let html = form_page(&templates(), "Create", ADMIN_NEW_PATH, &form, None).unwrap();
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("alert-danger"));
    }
}

//! Library page: PageState → DomNode tree → HTML document.

use shelf_dom::DomNode;
use shelf_render_html::{render_page, PageOptions};

use crate::library::Book;
use crate::page::{AddFormBox, PageState};

const STYLESHEET: &str = "/style.css";

pub fn render_library(state: &PageState) -> String {
    render_page(&PageOptions {
        root: library_tree(state),
        title: Some("Library".into()),
        styles: vec![STYLESHEET.into()],
        inline_css: None,
    })
}

pub fn library_tree(state: &PageState) -> DomNode {
    let greeting = match &state.user {
        Some(user) => format!("Welcome, {}", user),
        None => "Welcome".to_string(),
    };

    DomNode::el("main")
        .with_key("library")
        .with_child(
            DomNode::el("header")
                .with_child(DomNode::text("h1", "Library"))
                .with_child(DomNode::text("p", &greeting).with_key("user")),
        )
        .with_child(search_form(&state.search_text))
        .with_child(book_table(&state.books))
        .with_child(add_form(&state.add_form_box))
}

fn search_form(search_text: &str) -> DomNode {
    DomNode::el("form")
        .with_key("search")
        .with_attr("method", "post")
        .with_attr("action", "/books/search")
        .with_child(
            DomNode::el("input")
                .with_attr("type", "text")
                .with_attr("name", "query")
                .with_attr("placeholder", "Title, author or ISBN")
                .with_attr("value", search_text),
        )
        .with_child(DomNode::text("button", "Search").with_attr("type", "submit"))
        .with_child(DomNode::text("a", "Show all").with_attr("href", "/library"))
}

fn book_table(books: &[Book]) -> DomNode {
    let head = DomNode::el("tr").with_children(
        ["Title", "Author", "ISBN", "Copies", ""]
            .iter()
            .map(|h| DomNode::text("th", h)),
    );

    let rows = books.iter().map(|b| {
        DomNode::el("tr")
            .with_key(&b.isbn)
            .with_child(DomNode::text("td", &b.title))
            .with_child(DomNode::text("td", &b.author))
            .with_child(DomNode::text("td", &b.isbn))
            .with_child(DomNode::text("td", &b.copies.to_string()))
            .with_child(
                DomNode::el("td").with_child(
                    DomNode::text("a", "Delete")
                        .with_attr("href", &format!("/books/delete/{}", encode_path_segment(&b.isbn))),
                ),
            )
    });

    DomNode::el("table")
        .with_key("books")
        .with_child(DomNode::el("thead").with_child(head))
        .with_child(DomNode::el("tbody").with_children(rows))
}

fn add_form(afb: &AddFormBox) -> DomNode {
    let info = &afb.form_info;
    let field = |label: &str, name: &str, kind: &str, value: &str| {
        DomNode::el("label")
            .with_child(DomNode::text("span", label))
            .with_child(
                DomNode::el("input")
                    .with_attr("type", kind)
                    .with_attr("name", name)
                    .with_attr("value", value),
            )
    };

    let mut details = DomNode::el("details")
        .with_key("add-form")
        .with_flag("open", afb.show)
        .with_child(DomNode::text("summary", "Add a book"));

    if afb.message {
        let class = if afb.message_success { "message success" } else { "message failure" };
        details = details.with_child(
            DomNode::text("p", &afb.message_text)
                .with_key("add-message")
                .with_attr("class", class),
        );
    }

    details.with_child(
        DomNode::el("form")
            .with_attr("method", "post")
            .with_attr("action", "/books/add")
            .with_child(field("Title", "title", "text", &info.title))
            .with_child(field("Author", "author", "text", &info.author))
            .with_child(field("ISBN", "isbn", "text", &info.isbn))
            .with_child(field("Copies", "copies", "number", &info.copies))
            .with_child(DomNode::text("button", "Add").with_attr("type", "submit")),
    )
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn encode_path_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

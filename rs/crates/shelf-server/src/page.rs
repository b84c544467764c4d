//! View model for the library page and the override merge that builds it.
//!
//! Overrides are explicit `Option`s, but a `Some` only wins over the default
//! when its value is truthy: `Some("")`, `Some(false)` and `Some(0)` all fall
//! back to the default. Book lists are always truthy, so an empty search
//! result is rendered as an empty table. Callers cannot force an empty string.

use serde::Serialize;

use crate::library::{Book, Library};

pub const INVALID_ARGUMENT: &str = "An invalid argument was entered";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub add_form_box: AddFormBox,
    pub books: Vec<Book>,
    pub search_text: String,
    pub user: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFormBox {
    pub show: bool,
    pub message: bool,
    pub message_text: String,
    pub message_success: bool,
    pub form_info: FormInfo,
}

/// Values echoed back into the add form. `copies` is text: 0 renders as "".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormInfo {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies: String,
}

#[derive(Debug, Clone, Default)]
pub struct PageStateOverrides {
    pub add_form_box: Option<AddFormBoxOverrides>,
    pub books: Option<Vec<Book>>,
    pub search_text: Option<String>,
    pub user: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AddFormBoxOverrides {
    pub show: Option<bool>,
    pub message: Option<bool>,
    pub message_text: Option<String>,
    pub message_success: Option<bool>,
    pub form_info: Option<FormInfoOverrides>,
}

#[derive(Debug, Clone, Default)]
pub struct FormInfoOverrides {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub copies: Option<i64>,
}

impl PageStateOverrides {
    pub fn search_results(books: Vec<Book>, query: &str) -> Self {
        Self {
            books: Some(books),
            search_text: Some(query.to_string()),
            ..Default::default()
        }
    }

    /// Open add form with the failure message and the submitted values echoed.
    pub fn add_failure(title: &str, author: &str, isbn: &str, copies: i64) -> Self {
        Self {
            add_form_box: Some(AddFormBoxOverrides {
                show: Some(true),
                message: Some(true),
                message_text: Some(INVALID_ARGUMENT.to_string()),
                message_success: Some(false),
                form_info: Some(FormInfoOverrides {
                    title: Some(title.to_string()),
                    author: Some(author.to_string()),
                    isbn: Some(isbn.to_string()),
                    copies: Some(copies),
                }),
            }),
            ..Default::default()
        }
    }
}

trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

fn pick<T: Truthy>(over: Option<T>, default: T) -> T {
    match over {
        Some(v) if v.is_truthy() => v,
        _ => default,
    }
}

pub fn build_page_state(library: &Library, overrides: PageStateOverrides) -> PageState {
    let afb = overrides.add_form_box.unwrap_or_default();
    let fi = afb.form_info.unwrap_or_default();

    PageState {
        add_form_box: AddFormBox {
            show: pick(afb.show, false),
            message: pick(afb.message, false),
            message_text: pick(afb.message_text, String::new()),
            message_success: pick(afb.message_success, false),
            form_info: FormInfo {
                title: pick(fi.title, String::new()),
                author: pick(fi.author, String::new()),
                isbn: pick(fi.isbn, String::new()),
                copies: match fi.copies {
                    Some(n) if n.is_truthy() => n.to_string(),
                    _ => String::new(),
                },
            },
        },
        books: pick(overrides.books, library.books.all().to_vec()),
        search_text: pick(overrides.search_text, String::new()),
        user: match overrides.user {
            Some(u) if u.is_truthy() => Some(u),
            _ => library.session.get().map(String::from),
        },
    }
}

//! In-memory book list and the `Library` that pairs it with the session flag.

use serde::Serialize;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies: i64,
}

impl Book {
    pub fn new(title: &str, author: &str, isbn: &str, copies: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            copies,
        }
    }

    /// Case-sensitive substring match against title, author or isbn.
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.author.contains(query) || self.isbn.contains(query)
    }
}

// (title, author, copies, isbn)
const SEED_BOOKS: &[(&str, &str, i64, &str)] = &[
    ("The Three Musketeers", "Alexandre Dumas", 7, "978-1-56619-909-4"),
    ("Ivanhoe", "Sir Walter Scott", 2, "978-1-46110-482-3"),
    ("The Count of Monte Cristo", "Alexandre Dumas", 3, "978-1-39912-897-1"),
    ("Last of the Mohicans", "James Fenimore Cooper", 2, "978-1-87140-981-4"),
    ("Moby Dick", "Herman Melville", 8, "978-1-09713-891-7"),
    ("A Tale of Two Cities", "Charles Dickens", 14, "978-1-67819-414-4"),
    ("Robin Hood", "Howard Pyle", 1, "978-1-18904-912-4"),
    ("Arabian Nights", "Antony Galland", 6, "978-1-89231-991-4"),
];

/// Ordered book list. Isbn is the lookup key but is not unique.
#[derive(Debug, Default, Clone)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the eight seed books.
    pub fn seed(&mut self) {
        for (title, author, copies, isbn) in SEED_BOOKS {
            self.add(title, author, isbn, *copies);
        }
    }

    /// Append without validation; callers validate.
    pub fn add(&mut self, title: &str, author: &str, isbn: &str, copies: i64) {
        self.books.push(Book::new(title, author, isbn, copies));
    }

    /// Remove the first book with exactly this isbn. Returns whether one was removed.
    pub fn remove_by_isbn(&mut self, isbn: &str) -> bool {
        match self.books.iter().position(|b| b.isbn == isbn) {
            Some(i) => {
                self.books.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<Book>
    where
        P: Fn(&Book) -> bool,
    {
        self.books.iter().filter(|&b| predicate(b)).cloned().collect()
    }

    pub fn search(&self, query: &str) -> Vec<Book> {
        self.filter(|b| b.matches(query))
    }

    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Everything a request can read or mutate. Lives behind one lock in `AppState`.
#[derive(Debug, Default)]
pub struct Library {
    pub books: BookStore,
    pub session: Session,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn seeded() -> Self {
        let mut lib = Self::new();
        lib.books.seed();
        lib
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_seed_order() {
        let mut store = BookStore::new();
        store.seed();
        assert_eq!(store.len(), 8);
        assert_eq!(store.all()[0], Book::new("The Three Musketeers", "Alexandre Dumas", "978-1-56619-909-4", 7));
        assert_eq!(store.all()[5].copies, 14);
        assert_eq!(store.all()[7].title, "Arabian Nights");
        assert_eq!(store.all()[7].isbn, "978-1-89231-991-4");
    }

    #[test]
    fn test_add_and_remove_keep_order() {
        let mut store = BookStore::new();
        store.add("A", "a", "1", 1);
        store.add("B", "b", "2", 1);
        store.add("C", "c", "3", 1);
        store.add("D", "d", "4", 1);
        assert!(store.remove_by_isbn("2"));
        store.add("E", "e", "5", 1);
        assert_eq!(titles(store.all()), vec!["A", "C", "D", "E"]);
    }

    #[test]
    fn test_remove_first_duplicate_only() {
        let mut store = BookStore::new();
        store.add("First", "a", "dup", 1);
        store.add("Other", "b", "x", 1);
        store.add("Second", "c", "dup", 1);

        assert!(store.remove_by_isbn("dup"));
        assert_eq!(titles(store.all()), vec!["Other", "Second"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = BookStore::new();
        store.seed();
        assert!(store.remove_by_isbn("978-1-56619-909-4"));
        assert!(!store.remove_by_isbn("978-1-56619-909-4"));
        assert!(!store.remove_by_isbn("978-1-56619"));
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn test_search_is_case_sensitive_substring() {
        let mut store = BookStore::new();
        store.seed();

        assert_eq!(titles(&store.search("Dumas")), vec!["The Three Musketeers", "The Count of Monte Cristo"]);
        assert!(store.search("dumas").is_empty());
        assert_eq!(titles(&store.search("Moby")), vec!["Moby Dick"]);
        assert_eq!(titles(&store.search("909-4")), vec!["The Three Musketeers"]);
        // "Nights" in a title, "Galland" in the author of the same book
        assert_eq!(store.search("Nights"), store.search("Galland"));
        // filtering does not mutate
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut store = BookStore::new();
        store.seed();
        let few = store.filter(|b| b.copies <= 2);
        assert_eq!(titles(&few), vec!["Ivanhoe", "Last of the Mohicans", "Robin Hood"]);
    }

    #[test]
    fn test_library_seeded() {
        let lib = Library::seeded();
        assert_eq!(lib.books.len(), 8);
        assert!(!lib.session.is_logged_in());
        assert!(Library::new().books.is_empty());
    }
}

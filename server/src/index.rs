//! Server-rendered index page.

use maud::{html, Markup, DOCTYPE};
use todo_core::{Todo, TodoList};

use crate::config::Settings;

pub fn page(settings: &Settings, list: &TodoList) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (settings.title) }
                link rel="stylesheet" href="/styles/main.css";
                script src="/scripts/main.js" defer {}
            }
            body {
                header {
                    h1 { (settings.title) }
                    p class="summary" { (settings.summary) }
                }
                main {
                    h2 { (list.title) }
                    (todo_table(&list.todos))
                }
            }
        }
    }
}

fn todo_table(todos: &[Todo]) -> Markup {
    html! {
        @if todos.is_empty() {
            p class="empty" { "Nothing to do." }
        } @else {
            table id="todos" {
                thead {
                    tr { th { "#" } th { "Title" } th { "Description" } th { "Done" } }
                }
                tbody {
                    @for todo in todos {
                        (todo_row(todo))
                    }
                }
            }
        }
    }
}

fn todo_row(todo: &Todo) -> Markup {
    html! {
        tr data-id=(todo.id) class=[todo.is_done.then_some("done")] {
            td { (todo.id) }
            td { (todo.title) }
            td { (todo.description) }
            td {
                @if todo.is_done {
                    input type="checkbox" checked disabled;
                } @else {
                    input type="checkbox" disabled;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(todos: Vec<Todo>) -> TodoList {
        TodoList {
            title: "Sample TODO List".to_string(),
            todos,
        }
    }

    #[test]
    fn renders_titles_and_rows() {
        let todo = Todo {
            id: 1,
            title: "Setup".to_string(),
            description: "ready".to_string(),
            is_done: true,
        };
        let html = page(&Settings::default(), &list(vec![todo])).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Todo API</title>"));
        assert!(html.contains("Sample TODO List"));
        assert!(html.contains(r#"data-id="1""#));
        assert!(html.contains(r#"class="done""#));
    }

    #[test]
    fn escapes_user_text() {
        let todo = Todo {
            id: 2,
            title: "<script>alert(1)</script>".to_string(),
            description: String::new(),
            is_done: false,
        };
        let html = page(&Settings::default(), &list(vec![todo])).into_string();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let html = page(&Settings::default(), &list(Vec::new())).into_string();
        assert!(html.contains("Nothing to do."));
    }
}

use super::*;

// --- Surrounding text ---

#[test]
fn test_text_around_cursor() {
    let field = field("hello wor", "ld again");
    assert_eq!(field.text_before(3), "wor");
    assert_eq!(field.text_after(2), "ld");
    assert_eq!(field.text_before_default(), "hello wor");
    assert!(!field.is_empty());
}

#[test]
fn test_empty_field() {
    assert!(field("", "").is_empty());
    assert!(!field("", "x").is_empty());
}

#[test]
fn test_missing_connection_is_safe() {
    let mut field: TextField<MockConnection> = TextField::detached();
    assert_eq!(field.text_before(10), "");
    assert_eq!(field.text_after(10), "");
    assert_eq!(field.surrounding_word(None), "");
    assert!(field.is_empty());

    field.commit_text("x");
    field.delete_preceding_space("x");
    assert!(field.connection().is_none());
}

#[test]
fn test_unreadable_host_gives_empty_text() {
    let mut connection = MockConnection::with_text("abc", "def");
    connection.unreadable = true;
    let field = TextField::new(Some(connection), None);
    assert_eq!(field.text_before(2), "");
    assert_eq!(field.surrounding_word(None), "");
}

#[test]
fn test_surrounding_word_uses_language() {
    let ascii = field("пам'", "ять тут");
    let ukrainian = LanguageCollection::builtin().get(7).cloned();
    assert_eq!(ascii.surrounding_word(ukrainian.as_ref()), "пам'ять");
    assert_eq!(ascii.surrounding_word(Some(&Language::english())), "ять");

    let typographic = field("пам\u{2019}", "ять тут");
    assert_eq!(typographic.surrounding_word(ukrainian.as_ref()), "пам\u{2019}ять");
    assert_eq!(typographic.surrounding_word(Some(&Language::english())), "ять");
}

#[test]
fn test_surrounding_word_reads_at_most_50_chars() {
    let before = "x".repeat(120);
    let field = field(&before, "");
    assert_eq!(field.surrounding_word(None).len(), 50);
}

#[test]
fn test_surrounding_emoji_split_by_cursor() {
    let flag = "🇧🇬";
    let (left, right) = flag.split_at("🇧".len());
    let field = field(&format!("go {}", left), &format!("{} now", right));
    assert_eq!(field.surrounding_word(None), flag);
}

// --- Preceding space ---

#[test]
fn test_delete_single_preceding_space() {
    let mut field = field("...a cat", "");
    field.delete_preceding_space("cat");

    let connection = field.connection().unwrap();
    assert_eq!(connection.text(), "...acat");
    assert_eq!(
        connection.calls,
        vec![
            Call::BeginBatch,
            Call::Delete(4, 0),
            Call::Commit("cat".to_string()),
            Call::EndBatch,
        ]
    );
}

#[test]
fn test_double_space_is_kept() {
    let mut field = field("...a  cat", "");
    field.delete_preceding_space("cat");

    let connection = field.connection().unwrap();
    assert_eq!(connection.text(), "...a  cat");
    assert_eq!(connection.calls, vec![Call::BeginBatch, Call::EndBatch]);
}

#[test]
fn test_triple_space_is_kept() {
    let mut field = field("a   cat", "");
    field.delete_preceding_space("cat");
    assert_eq!(field.connection().unwrap().text(), "a   cat");
}

#[test]
fn test_no_space_or_start_of_field() {
    let mut at_start = field(" cat", "");
    // not enough context: the space is the first character in the field
    at_start.delete_preceding_space("cat");
    assert_eq!(at_start.connection().unwrap().text(), " cat");

    let mut no_space = field("a,cat", "");
    no_space.delete_preceding_space("cat");
    assert_eq!(no_space.connection().unwrap().text(), "a,cat");
}

#[test]
fn test_delete_space_counts_characters() {
    let mut field = field("на кот", " дальше");
    field.delete_preceding_space("кот");
    assert_eq!(field.connection().unwrap().text(), "накот дальше");
}

// --- Commit ---

#[test]
fn test_commit_text() {
    let mut field = field("ab", "");
    field.commit_text("cd");
    assert_eq!(field.connection().unwrap().text(), "abcd");
    assert_eq!(calls(&field), &[Call::Commit("cd".to_string())]);
}

#[test]
fn test_is_same_field() {
    let editor = EditorInfo::new(3).with_action_label("Go");
    let field = TextField::new(Some(MockConnection::default()), Some(editor.clone()));
    assert!(field.is_same_field(&editor));
    assert!(!field.is_same_field(&EditorInfo::default()));

    let detached: TextField<MockConnection> = TextField::new(None, Some(editor.clone()));
    assert!(!detached.is_same_field(&editor));
}

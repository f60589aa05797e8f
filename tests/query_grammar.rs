//! A toy `select <columns> from <table>;` grammar

use pretty_assertions::assert_eq;
use seekcomb::prelude::*;
use seekcomb::{Cursor, parse_text};

#[derive(Debug, PartialEq)]
enum Column {
    Name(String),
    Quoted(String),
}

#[derive(Debug, PartialEq)]
struct Select {
    columns: Vec<Column>,
    table: String,
}

fn quoted() -> impl for<'src> Parser<'src, Output = String> {
    between(
        match_literal("\""),
        until_string(match_literal("\""), any_rune()),
        match_literal("\""),
    )
}

fn column() -> impl for<'src> Parser<'src, Output = Column> {
    choice_of((
        quoted().map(Column::Quoted),
        match_letters().map(Column::Name),
    ))
}

fn columns() -> impl for<'src> Parser<'src, Output = Vec<Column>> {
    let next = sequence_of((&IGNORE_WHITESPACE, match_literal(","), &IGNORE_WHITESPACE, column()))
        .map(|(_, _, _, column)| column);

    column().and(many(next)).map(|(first, rest)| {
        let mut columns = vec![first];
        columns.extend(rest);
        columns
    })
}

fn select() -> impl for<'src> Parser<'src, Output = Select> {
    let terminator = sequence_of((
        &IGNORE_WHITESPACE,
        match_literal(";").map_error(|_| "expected ';' after table name"),
        &IGNORE_WHITESPACE,
        end_of_input(),
    ));

    sequence_of((
        match_literal_insensitive("select"),
        &IGNORE_WHITESPACE1,
        columns(),
        &IGNORE_WHITESPACE1,
        match_literal_insensitive("from"),
        &IGNORE_WHITESPACE1,
        match_letters(),
        terminator,
    ))
    .map(|(_, _, columns, _, _, _, table, _)| Select { columns, table })
}

#[test]
fn single_column() {
    let outcome = parse_text(&select(), "select a from t;");
    assert_eq!(
        outcome.into_result().unwrap(),
        Select {
            columns: vec![Column::Name("a".into())],
            table: "t".into(),
        }
    );
}

#[test]
fn mixed_case_keywords_and_quoted_columns() {
    let query = "SeLeCt name,\n  \"full name\" , age\nFROM people ;\n";
    let outcome = parse_text(&select(), query);

    assert_eq!(outcome.offset(), query.len());
    assert_eq!(
        outcome.into_result().unwrap(),
        Select {
            columns: vec![
                Column::Name("name".into()),
                Column::Quoted("full name".into()),
                Column::Name("age".into()),
            ],
            table: "people".into(),
        }
    );
}

#[test]
fn quoted_column_keeps_punctuation() {
    let outcome = parse_text(&select(), r#"select "a;b, c" from t;"#);
    let select = outcome.into_result().unwrap();
    assert_eq!(select.columns, vec![Column::Quoted("a;b, c".into())]);
}

#[test]
fn missing_semicolon_is_reported_where_detected() {
    let query = "SELECT name FROM users";
    let outcome = parse_text(&select(), query);

    assert!(outcome.is_failure());
    // The failed sequence is anchored at its start, the error where it was found
    assert_eq!(outcome.offset(), 0);
    let error = outcome.error().unwrap();
    assert_eq!(error.message(), "expected ';' after table name");
    assert_eq!(error.offset(), 22);
}

#[test]
fn rendered_error_points_at_problem() {
    let query = "select name\nfrom users";
    let failure = select().parse(Cursor::from_text(query)).unwrap_err();

    let rendered = failure.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec![
            "error at line 2, column 11: expected ';' after table name",
            "  > 2 | from users",
            format!("{}^--- here", " ".repeat(18)).as_str(),
        ]
    );
}

#[test]
fn keyword_as_column_fails() {
    let outcome = parse_text(&select(), "select from t;");
    assert!(outcome.is_failure());
}

#[test]
fn trailing_input_fails() {
    let outcome = parse_text(&select(), "select a from t; drop");
    assert!(outcome.is_failure());
    assert_eq!(outcome.error().map(|error| error.offset()), Some(17));
}

//! Line-oriented grammar for a small markup format: `§` sections, `---` rules
//! and `•`/`#`/`1.` list items, each line followed by a blank line or the end
//! of the input.

use pretty_assertions::assert_eq;
use rstest::rstest;
use seekcomb::prelude::*;
use seekcomb::parse_text;
use std::borrow::Cow;

#[derive(Debug, PartialEq)]
struct Section {
    level: usize,
    title: String,
    index: usize,
}

#[derive(Debug, PartialEq)]
struct Rule {
    count: usize,
    extra: String,
    index: usize,
}

#[derive(Debug, PartialEq)]
struct Item {
    level: usize,
    markers: Vec<String>,
    text: String,
    index: usize,
}

#[derive(Debug, PartialEq)]
enum Line {
    Section(Section),
    Rule(Rule),
    Item(Item),
}

fn line_start() -> impl for<'src> Parser<'src, Output = ()> {
    sequence_of((many(match_literal("\n")), start_of_line())).discard()
}

fn line_end() -> impl for<'src> Parser<'src, Output = ()> {
    sequence_of((
        match_literal("\n"),
        choice_of((end_of_input(), match_literal("\n").discard())),
    ))
    .discard()
}

fn line<B, T>(body: B) -> impl for<'src> Parser<'src, Output = T>
where
    B: for<'src> Parser<'src, Output = T>,
{
    between(line_start(), body, line_end())
}

fn rest_of_line() -> impl for<'src> Parser<'src, Output = String> {
    match_runes(|ch| ch != '\n', "any rune other than newline")
        .map(|runes| runes.into_iter().collect::<String>().trim().to_string())
}

fn section() -> impl for<'src> Parser<'src, Output = Section> {
    line(
        sequence_of((up_to_n(6, match_literal("§")), &IGNORE_WHITESPACE, rest_of_line()))
            .map_indexed(|(marks, _, title), index| Section {
                level: marks.len(),
                title,
                index,
            })
            .map_error(|_| "unable to match a section"),
    )
}

fn rule() -> impl for<'src> Parser<'src, Output = Rule> {
    line(
        sequence_of((match_literal("---"), many(match_literal("-")), optional(rest_of_line())))
            .map_indexed(|(_, dashes, extra), index| Rule {
                count: dashes.len() + 3,
                extra: extra.unwrap_or_default(),
                index,
            }),
    )
}

fn checkbox() -> impl for<'src> Parser<'src, Output = String> {
    sequence_of_no_nil((
        match_literal("•[").map(Some),
        &IGNORE_WHITESPACE,
        optional(match_literal_insensitive("X")),
        &IGNORE_WHITESPACE,
        match_literal("]").map(Some),
    ))
    .map(|kept: Vec<Cow<'static, str>>| {
        if kept.len() == 3 {
            "•[X]".to_string()
        } else {
            "•[]".to_string()
        }
    })
}

fn list_marker() -> impl for<'src> Parser<'src, Output = String> {
    choice_of((
        checkbox(),
        match_literal("•").map(|text| text.into_owned()),
        match_literal("#").map(|text| text.into_owned()),
        sequence_of((many1(match_digit()), match_literal(".")))
            .map(|(digits, _)| format!("{}.", digits.into_iter().collect::<String>())),
    ))
}

fn item() -> impl for<'src> Parser<'src, Output = Item> {
    line(
        sequence_of((many1(list_marker()), rest_of_line())).map_indexed(
            |(markers, text), index| Item {
                level: markers.len() - 1,
                markers,
                text,
                index,
            },
        ),
    )
}

fn document() -> impl for<'src> Parser<'src, Output = Vec<Line>> {
    let lines = many(choice_of((
        section().map(Line::Section),
        rule().map(Line::Rule),
        item().map(Line::Item),
    )));

    sequence_of((lines, end_of_input())).map(|(lines, ())| lines)
}

#[rstest]
#[case("§ Intro\n", 1, "Intro", 0)]
#[case("§§§   Deep title  \n", 3, "Deep title", 0)]
#[case("§§§§§§§ Too deep\n", 6, "§ Too deep", 0)]
#[case("\n\n§§ After blank lines\n\n", 2, "After blank lines", 2)]
fn section_line(
    #[case] input: &str,
    #[case] level: usize,
    #[case] title: &str,
    #[case] index: usize,
) {
    let outcome = parse_text(&section(), input);
    assert_eq!(
        outcome.into_result().unwrap(),
        Section {
            level,
            title: title.to_string(),
            index,
        }
    );
}

#[test]
fn section_without_marker() {
    let outcome = parse_text(&section(), "Intro\n");
    assert!(outcome.is_failure());
    assert_eq!(outcome.offset(), 0);
    assert_eq!(
        outcome.error().map(|error| error.message()),
        Some("unable to match a section")
    );
}

#[test]
fn section_must_end_with_blank_line() {
    let outcome = parse_text(&section(), "§ Intro\nbody");
    assert!(outcome.is_failure());
    assert_eq!(outcome.offset(), 0);
}

#[test]
fn rule_with_trailing_text() {
    let outcome = parse_text(&rule(), "----- the end\n");
    assert_eq!(
        outcome.into_result().unwrap(),
        Rule {
            count: 5,
            extra: "the end".to_string(),
            index: 0,
        }
    );
}

#[test]
fn nested_list_markers() {
    let outcome = parse_text(&item(), "##• deep item\n");
    let item = outcome.into_result().unwrap();
    assert_eq!(item.level, 2);
    assert_eq!(item.markers, vec!["#", "#", "•"]);
    assert_eq!(item.text, "deep item");
}

#[rstest]
#[case("•[x] milk\n", "•[X]")]
#[case("•[ X ] milk\n", "•[X]")]
#[case("•[] milk\n", "•[]")]
#[case("12. milk\n", "12.")]
fn list_marker_kinds(#[case] input: &str, #[case] marker: &str) {
    let item = parse_text(&item(), input).into_result().unwrap();
    assert_eq!(item.markers, vec![marker.to_string()]);
    assert_eq!(item.text, "milk");
}

#[test]
fn whole_document() {
    let text = "§ Shopping\n\n•[x] milk\n\n---\n\n1. eggs\n";
    let outcome = parse_text(&document(), text);

    assert_eq!(outcome.offset(), text.len());
    assert_eq!(
        outcome.into_result().unwrap(),
        vec![
            Line::Section(Section {
                level: 1,
                title: "Shopping".to_string(),
                index: 0,
            }),
            Line::Item(Item {
                level: 0,
                markers: vec!["•[X]".to_string()],
                text: "milk".to_string(),
                index: 13,
            }),
            Line::Rule(Rule {
                count: 3,
                extra: String::new(),
                index: 26,
            }),
            Line::Item(Item {
                level: 0,
                markers: vec!["1.".to_string()],
                text: "eggs".to_string(),
                index: 31,
            }),
        ]
    );
}

#[test]
fn document_with_stray_text_fails() {
    let outcome = parse_text(&document(), "§ Title\n\njust words\n");
    assert!(outcome.is_failure());
    assert_eq!(
        outcome.error().map(|error| error.message()),
        Some("expected end of input")
    );
}

//! Codec Tests
//!
//! Tests for script line parsing and report block writing.

use genequery::engine::SearchHit;
use genequery::protocol::{
    describe, parse_command_line, write_block, write_header, Command, CommandLine,
    CommandType, Response,
};
use genequery::Config;

// =============================================================================
// Helper Functions
// =============================================================================

fn line(text: &str) -> CommandLine {
    parse_command_line(text).unwrap()
}

fn render_block(number: usize, text: &str, response: &Response) -> String {
    let mut out = Vec::new();
    write_block(&mut out, number, &line(text), response, "----").unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Line Parsing Tests
// =============================================================================

#[test]
fn test_parse_blank_line() {
    assert!(parse_command_line("").is_none());
    assert!(parse_command_line("  \t ").is_none());
}

#[test]
fn test_parse_trims_fields() {
    let parsed = line(" Search \t 3A \r");
    assert_eq!(parsed.operation, "Search");
    assert_eq!(parsed.args, vec!["3A".to_string()]);
}

#[test]
fn test_keyword_case_insensitive() {
    assert_eq!(CommandType::from_keyword("SEARCH"), Some(CommandType::Search));
    assert_eq!(CommandType::from_keyword("Diff"), Some(CommandType::Diff));
    assert_eq!(CommandType::from_keyword(" mode "), Some(CommandType::Mode));
    assert_eq!(CommandType::from_keyword("count"), None);
}

#[test]
fn test_search_pattern_is_decoded() {
    assert_eq!(
        line("search\t3A2B").to_command(),
        Some(Command::Search {
            pattern: "AAABB".to_string()
        })
    );
}

#[test]
fn test_diff_and_mode_names_are_literal() {
    assert_eq!(
        line("diff\t2AB\t3C").to_command(),
        Some(Command::Diff {
            first: "2AB".to_string(),
            second: "3C".to_string(),
        })
    );
    assert_eq!(
        line("MODE\t3P").to_command(),
        Some(Command::Mode {
            protein: "3P".to_string()
        })
    );
}

#[test]
fn test_too_few_args_is_not_a_command() {
    assert_eq!(line("diff\tP1").to_command(), None);
    assert_eq!(line("search").to_command(), None);
}

#[test]
fn test_unknown_operation_is_not_a_command() {
    let parsed = line("count\tP1");
    assert_eq!(parsed.command_type(), None);
    assert_eq!(parsed.to_command(), None);
}

// =============================================================================
// Description Tests
// =============================================================================

#[test]
fn test_describe_uses_raw_arguments() {
    assert_eq!(describe(&line("search\t3A")), "3A organism protein");
    assert_eq!(
        describe(&line("diff\tP1\tP2")),
        "P1 P2 amino-acids difference:"
    );
    assert_eq!(describe(&line("Mode\tP1")), "P1 amino-acid occurs:");
}

#[test]
fn test_describe_fallbacks() {
    assert_eq!(describe(&line("DIFF\tP1")), "diff");
    assert_eq!(describe(&line("Frobnicate\tx")), "Frobnicate");
}

// =============================================================================
// Response Rendering Tests
// =============================================================================

#[test]
fn test_response_lines() {
    let hits = Response::Hits(vec![SearchHit {
        organism: "Homo sapiens".to_string(),
        protein: "P1".to_string(),
    }]);
    assert_eq!(hits.lines(), vec![" Homo sapiens (P1) "]);
    assert_eq!(Response::Hits(vec![]).lines(), vec![" NOT FOUND"]);
    assert_eq!(Response::Distance(2).lines(), vec![" 2 "]);
    assert_eq!(
        Response::Missing(vec!["Px".to_string(), "Py".to_string()]).lines(),
        vec![" MISSING: Px Py "]
    );
    assert_eq!(
        Response::Mode { symbol: 'B', count: 3 }.lines(),
        vec![" B 3 "]
    );
    assert_eq!(Response::NoSymbol.lines(), vec!["   0 "]);
    assert!(Response::Empty.lines().is_empty());
}

// =============================================================================
// Block Writing Tests
// =============================================================================

#[test]
fn test_write_block_layout() {
    let text = render_block(7, "diff\tP1\tP2", &Response::Distance(2));
    assert_eq!(
        text,
        "Command: DIFF\n 007 P1 P2 amino-acids difference: \n 2 \n----\n"
    );
}

#[test]
fn test_write_block_empty_response() {
    let text = render_block(12, "launch\tP1", &Response::Empty);
    assert_eq!(text, "Command: LAUNCH\n 012 launch \n----\n");
}

#[test]
fn test_write_header_with_author() {
    let config = Config::builder()
        .author("Ivan Ivanov")
        .separator_width(5)
        .build();
    let mut out = Vec::new();
    write_header(&mut out, &config).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Ivan Ivanov\nGenetic Searching\n-----\n"
    );
}

#[test]
fn test_write_header_without_author() {
    let config = Config::builder().title("Report").separator_width(3).build();
    let mut out = Vec::new();
    write_header(&mut out, &config).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Report\n---\n");
}

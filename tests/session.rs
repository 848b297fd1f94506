mod common;

use common::{MockPlatform, MockSerial, quiet_cli, run, take_captured};
use kbcli::cli::config::INPUT_STAGING_SIZE;
use kbcli::cli::vt100;
use kbcli::cli::{Cli, Config, Error, Status};

fn history(cli: &Cli<MockPlatform>) -> Vec<String> {
    cli.history()
        .iter()
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect()
}

#[test]
fn test_help_lists_every_dictionary() {
    let mut cli = quiet_cli();
    let out = run(&mut cli, b"help\r");

    assert!(out.contains("General Commands"));
    assert!(out.contains("Matrix Commands"));
    assert!(out.contains("keys"));
    assert_eq!(cli.line(), "");
    assert_eq!(history(&cli), ["help"]);
}

#[test]
fn test_command_without_arguments_gets_empty_tail() {
    let mut cli = quiet_cli();
    run(&mut cli, b"keys\r");
    assert_eq!(take_captured(), [("keys".to_string(), String::new())]);
}

#[test]
fn test_complete_then_accept_with_argument() {
    let mut cli = quiet_cli();

    run(&mut cli, b"per\t");
    assert_eq!(cli.line(), "periodic");
    assert_eq!(cli.editor().cursor(), "periodic".len());

    let out = run(&mut cli, b" 5000\r");
    assert_eq!(cli.platform().cycles, 5000);
    assert!(out.contains("Period Clock Cycles: "));
    assert!(out.contains("5000"));
    assert_eq!(history(&cli), ["periodic 5000"]);
}

#[test]
fn test_completion_discards_arguments() {
    let mut cli = quiet_cli();
    run(&mut cli, b"per 5000\t");
    assert_eq!(cli.line(), "periodic");
}

#[test]
fn test_whitespace_line_is_not_committed() {
    let mut cli = quiet_cli();
    let out = run(&mut cli, b"   \r");

    assert!(cli.history().is_empty());
    assert!(out.is_empty());
    assert_eq!(cli.line(), "");
}

#[test]
fn test_browsing_restores_unsaved_line() {
    let mut cli = quiet_cli();

    run(&mut cli, b"foo\x1b[A\x1b[B");
    assert_eq!(cli.line(), "foo");

    let mut cli = quiet_cli();
    run(&mut cli, b"keys\r");
    run(&mut cli, b"foo\x1b[A");
    assert_eq!(cli.line(), "keys");
    run(&mut cli, b"\x1b[B");
    assert_eq!(cli.line(), "foo");
}

#[test]
fn test_history_walk_with_control_keys() {
    let mut cli = quiet_cli();
    run(&mut cli, b"keys\r");
    run(&mut cli, b"layer 1\r");
    let _ = take_captured();

    let steps: [(&[u8], &str); 5] = [
        (b"\x10", "layer 1"),
        (b"\x10", "keys"),
        (b"\x10", "keys"),
        (b"\x0e", "layer 1"),
        (b"\x0e", ""),
    ];
    for (input, expected) in steps {
        run(&mut cli, input);
        assert_eq!(cli.line(), expected);
    }
}

#[test]
fn test_recalled_line_can_be_run_again() {
    let mut cli = quiet_cli();
    run(&mut cli, b"layer 3\r");
    run(&mut cli, b"\x1b[A\r");

    assert_eq!(
        take_captured(),
        [
            ("layer".to_string(), "3".to_string()),
            ("layer".to_string(), "3".to_string())
        ]
    );
    assert_eq!(history(&cli), ["layer 3", "layer 3"]);
}

#[test]
fn test_ambiguous_prefix_leaves_line_alone() {
    let mut cli = quiet_cli();
    let out = run(&mut cli, b"l\t");

    assert_eq!(cli.line(), "l");
    assert!(out.contains("  latency\r\n"));
    assert!(out.contains("  led\r\n"));
    assert!(out.contains("  layer\r\n"));
}

#[test]
fn test_unknown_command_diagnostic() {
    let mut cli = quiet_cli();
    let out = run(&mut cli, b"foo bar\r");

    assert!(out.contains("\"foo\" is not a valid command...type "));
    assert!(out.contains("help"));
    assert_eq!(history(&cli), ["foo bar"]);
    assert_eq!(cli.line(), "");
}

#[test]
fn test_builtin_shadows_later_registration() {
    let mut cli = quiet_cli();
    run(&mut cli, b"led\r");

    assert_eq!(cli.platform().led, Some(true));
    assert!(take_captured().is_empty());
}

#[test]
fn test_accept_uses_whole_line_not_text_before_cursor() {
    let mut cli = quiet_cli();
    run(&mut cli, b"layer 2\x1b[D\x1b[D\x1b[D\r");
    assert_eq!(take_captured(), [("layer".to_string(), "2".to_string())]);
}

#[test]
fn test_staging_overflow_drops_everything() {
    let mut cli = quiet_cli();
    run(&mut cli, b"keys");

    let flood = vec![b'a'; INPUT_STAGING_SIZE + 1];
    let mut out = String::new();
    assert_eq!(cli.input(&flood, &mut out), Err(Error::InputOverflow));
    assert!(out.contains("Serial line buffer is full, dropping character and resetting..."));
    assert_eq!(cli.line(), "");

    // Still usable afterwards
    run(&mut cli, b"keys\r");
    assert_eq!(take_captured().len(), 1);
}

#[test]
fn test_staging_area_fills_exactly() {
    let mut cli = quiet_cli();
    let chunk = vec![b'a'; INPUT_STAGING_SIZE];
    let mut out = String::new();
    assert_eq!(cli.input(&chunk, &mut out), Ok(Status::Running));
    assert_eq!(cli.line().len(), INPUT_STAGING_SIZE);
}

#[test]
fn test_full_line_drops_extra_characters() {
    let mut cli = quiet_cli();
    let chunk = vec![b'k'; 60];
    run(&mut cli, &chunk);
    run(&mut cli, &chunk);

    let capacity = cli.editor().capacity();
    assert_eq!(cli.line().len(), capacity);
    assert_eq!(cli.editor().cursor(), capacity);
}

#[test]
fn test_escape_split_across_polls() {
    let mut cli = quiet_cli();
    let mut serial = MockSerial::default();
    let mut out = String::new();

    serial.push(b"ab\x1b");
    cli.poll(&mut serial, &mut out).unwrap();
    serial.push(b"[");
    cli.poll(&mut serial, &mut out).unwrap();
    serial.push(b"DX");
    cli.poll(&mut serial, &mut out).unwrap();

    assert_eq!(cli.line(), "aXb");
}

#[test]
fn test_empty_poll_writes_nothing() {
    let mut cli = Cli::new(MockPlatform::default());
    let mut serial = MockSerial::default();
    let mut out = String::new();
    assert_eq!(cli.poll(&mut serial, &mut out), Ok(Status::Running));
    assert!(out.is_empty());
}

#[test]
fn test_control_bytes_are_not_inserted() {
    let mut cli = quiet_cli();
    run(&mut cli, b"a\x00\x07\x1a\xffb");
    assert_eq!(cli.line(), "ab");
}

#[test]
fn test_interrupt_discards_line() {
    let mut cli = quiet_cli();
    let out = run(&mut cli, b"layer 9\x03");

    assert_eq!(cli.line(), "");
    assert_eq!(out, vt100::NL);
    assert!(cli.history().is_empty());
    assert!(take_captured().is_empty());
}

#[test]
fn test_clear_screen_key() {
    let mut cli = quiet_cli();
    let out = run(&mut cli, b"abc\x0c");

    assert_eq!(cli.line(), "");
    assert!(out.starts_with(vt100::CLEAR_ALL));
    assert!(out.contains(vt100::CURSOR_HOME));
}

#[test]
fn test_clear_screen_stops_browsing() {
    let mut cli = quiet_cli();
    run(&mut cli, b"keys\r");
    run(&mut cli, b"\x1b[A");
    assert_eq!(cli.line(), "keys");

    run(&mut cli, b"\x0cfoo\x1b[A");
    assert_eq!(cli.line(), "keys");
    run(&mut cli, b"\x1b[B");
    assert_eq!(cli.line(), "foo");
}

#[test]
fn test_staging_overflow_stops_browsing() {
    let mut cli = quiet_cli();
    run(&mut cli, b"keys\r");
    run(&mut cli, b"\x1b[A");

    let flood = vec![b'a'; INPUT_STAGING_SIZE + 1];
    let mut out = String::new();
    assert_eq!(cli.input(&flood, &mut out), Err(Error::InputOverflow));

    run(&mut cli, b"bar\x1b[A");
    assert_eq!(cli.line(), "keys");
    run(&mut cli, b"\x1b[B");
    assert_eq!(cli.line(), "bar");
}

#[test]
fn test_redraw_positions_cursor() {
    let mut cli = Cli::new(MockPlatform::default());
    let mut out = String::new();
    cli.input(b"ab\x1b[D", &mut out).unwrap();

    let expected = format!(
        "{}\r{}ab{}\x1b[1D",
        vt100::CLEAR_LINE,
        vt100::PROMPT,
        vt100::NORMAL
    );
    assert!(out.ends_with(&expected));
}

#[test]
fn test_redraw_of_empty_line() {
    let cli = Cli::new(MockPlatform::default());
    let mut out = String::new();
    cli.redraw(&mut out);
    assert_eq!(out, format!("{}\r{}{}", vt100::CLEAR_LINE, vt100::PROMPT, vt100::NORMAL));
}

#[test]
fn test_prompt_from_json_config() {
    let config = Config::from_json(r#"{"prompt":"kbd> "}"#).unwrap();
    let mut cli = Cli::with_config(MockPlatform::default(), config);
    let mut out = String::new();
    cli.input(b"x", &mut out).unwrap();
    assert!(out.contains("\rkbd> x"));
}

#[test]
fn test_hex_debug_echo() {
    let config = Config {
        echo: false,
        hex_debug: true,
        ..Config::default()
    };
    let mut cli = Cli::with_config(MockPlatform::default(), config);
    let mut out = String::new();
    cli.input(b"a\x7f", &mut out).unwrap();

    assert_eq!(
        out,
        format!(
            "{}{}{}0x61 0x7F {}",
            vt100::CURSOR_SAVE,
            vt100::NL,
            vt100::CLEAR_LINE,
            vt100::CURSOR_RESTORE
        )
    );
}

#[test]
fn test_cli_debug_toggles_hex_echo() {
    let mut cli = quiet_cli();

    let out = run(&mut cli, b"cliDebug\r");
    assert!(cli.session().hex_debug);
    assert!(out.contains("Hex debug mode enabled..."));

    let out = run(&mut cli, b"x");
    assert!(out.contains("0x78 "));

    let out = run(&mut cli, b"\x15cliDebug\r");
    assert!(!cli.session().hex_debug);
    assert!(out.contains("Hex debug mode disabled..."));
}

#[test]
fn test_register_dictionary_errors() {
    let mut cli = quiet_cli();
    assert_eq!(
        cli.register_dictionary(common::MATRIX_COMMANDS, ""),
        Err(Error::EmptyName)
    );

    let mut result = Ok(());
    while result.is_ok() {
        result = cli.register_dictionary(common::MATRIX_COMMANDS, "More");
    }
    assert_eq!(result, Err(Error::DictionaryTableFull));
    assert_eq!(cli.registry().len(), kbcli::cli::config::MAX_DICTIONARIES);
}

#[cfg(feature = "host")]
#[test]
fn test_exit_stops_polling() {
    let mut cli = quiet_cli();
    let mut out = String::new();

    assert_eq!(cli.input(b"exit\rkeys\r", &mut out), Ok(Status::Exit));
    assert_eq!(cli.line(), "");
    assert!(take_captured().is_empty());
    assert!(!cli.session().exit);

    assert_eq!(cli.input(b"keys\r", &mut out), Ok(Status::Running));
}

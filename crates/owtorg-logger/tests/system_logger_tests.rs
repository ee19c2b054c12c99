#![allow(clippy::unwrap_used, clippy::expect_used)]
// System-log backend observed through the tracing capture layer

mod common;

use common::SharedBuffer;
use owtorg_core_types::schema::{EVENT_END, TARGET_SYSLOG};
use owtorg_logger::init::callback;
use owtorg_logger::{Initializable, Logger, Severity, Stack, StreamLogger, SystemLogger};
use owtorg_logging::test_capture::init_test_capture;
use tracing::Level;

fn syslog_lines_containing(needle: &str) -> Vec<String> {
    init_test_capture()
        .messages_for_target(TARGET_SYSLOG)
        .into_iter()
        .filter(|m| m.contains(needle))
        .collect()
}

#[test]
fn test_generic_log_emits_one_line() {
    let _capture = init_test_capture();
    let logger = SystemLogger::new();

    logger
        .log("Emergency", &[&"This is a Log message (sys-1)"])
        .unwrap();

    assert_eq!(
        syslog_lines_containing("(sys-1)"),
        vec!["Emergency [This is a Log message (sys-1)]".to_string()]
    );
}

#[test]
fn test_arbitrary_label_passes_through() {
    let _capture = init_test_capture();
    let logger = SystemLogger::new();

    logger
        .log("Arbitrary", &[&"This is a generic message (sys-2)"])
        .unwrap();

    assert_eq!(
        syslog_lines_containing("(sys-2)"),
        vec!["Arbitrary [This is a generic message (sys-2)]".to_string()]
    );
}

#[test]
fn test_every_severity_method() {
    let capture = init_test_capture();
    let logger = SystemLogger::new();

    for severity in Severity::ALL {
        logger.log_at(severity, &[&"This is a message (sys-3)"]).unwrap();
    }

    let expected: Vec<String> = Severity::ALL
        .iter()
        .map(|s| format!("{} [This is a message (sys-3)]", s.label()))
        .collect();
    assert_eq!(syslog_lines_containing("(sys-3)"), expected);

    let levels: Vec<Level> = capture
        .events()
        .into_iter()
        .filter(|e| e.message.as_deref().is_some_and(|m| m.contains("(sys-3)")))
        .map(|e| e.level)
        .collect();
    assert_eq!(
        levels,
        vec![
            Level::ERROR,
            Level::ERROR,
            Level::ERROR,
            Level::ERROR,
            Level::WARN,
            Level::INFO,
            Level::INFO,
            Level::DEBUG,
        ]
    );
}

#[test]
fn test_severity_and_ident_fields() {
    let capture = init_test_capture();
    let mut logger = SystemLogger::new();
    logger.register_init_callbacks(vec![callback(|s: &mut SystemLogger| {
        s.set_ident("billing");
        Ok(())
    })]);
    logger.init().unwrap();

    logger.notice(&[&"(sys-4)"]).unwrap();

    let events = capture.events();
    let event = events
        .iter()
        .find(|e| e.message.as_deref() == Some("Notice [(sys-4)]"))
        .expect("Should have system-log event");
    assert_eq!(event.target, TARGET_SYSLOG);
    assert_eq!(event.fields.get("severity"), Some(&"Notice".to_string()));
    assert_eq!(event.fields.get("ident"), Some(&"billing".to_string()));
}

#[test]
fn test_stack_of_stream_and_system_logger() {
    let capture = init_test_capture();
    let buffer = SharedBuffer::default();
    let sink = buffer.clone();

    let mut stream = StreamLogger::new();
    stream.register_init_callbacks(vec![callback(move |s: &mut StreamLogger| {
        s.set_writer("captured", sink.clone());
        Ok(())
    })]);

    let mut stack = Stack::new();
    stack.push(stream).unwrap();
    stack.push(SystemLogger::new()).unwrap();

    stack.log("custom level", &[&"x (sys-5)"]).unwrap();

    assert_eq!(
        syslog_lines_containing("(sys-5)"),
        vec!["custom level [x (sys-5)]".to_string()]
    );
    assert_eq!(buffer.contents(), "custom level [x (sys-5)]\n");

    // The stack brackets membership changes with diagnostic events
    capture.assert_event_exists("stack_add", EVENT_END);
}

#[test]
fn test_stack_severity_methods_reach_system_logger() {
    let _capture = init_test_capture();
    let mut stack = Stack::new();
    stack.push(SystemLogger::new()).unwrap();

    for severity in Severity::ALL {
        stack.log_at(severity, &[&"This is a message (sys-6)"]).unwrap();
    }

    let expected: Vec<String> = Severity::ALL
        .iter()
        .map(|s| format!("{} [This is a message (sys-6)]", s.label()))
        .collect();
    assert_eq!(syslog_lines_containing("(sys-6)"), expected);
}

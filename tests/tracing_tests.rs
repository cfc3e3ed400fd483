//! Events emitted by the scene core when the `tracing` feature is on.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use vecscene::{Element, Group, Path, RecordingCanvas, RecordingPlatform, RenderOptions, Size, render};

/// Collects formatted log lines in memory
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

#[test]
fn drawing_emits_element_and_canvas_events() {
    let logs = with_captured_logs(|| {
        let path = Path::parse("M 0 0 L 10 0").unwrap();
        let scene = Element::from(Group::new().with_child(path));
        let mut canvas = RecordingCanvas::new();
        scene.draw(&mut canvas).unwrap();
    });

    assert!(logs.contains("parsed path data"), "{logs}");
    assert!(logs.contains("draw element"), "{logs}");
    assert!(logs.contains("kind=\"group\""), "{logs}");
    assert!(logs.contains("draw group"), "{logs}");
    assert!(logs.contains("record"), "{logs}");
    assert!(logs.contains("TRACE"), "{logs}");
}

#[test]
fn render_logs_the_platform() {
    let logs = with_captured_logs(|| {
        let scene = Element::from(Group::new());
        render(&RecordingPlatform, &scene, &RenderOptions::new(Size::square(10.0))).unwrap();
    });

    assert!(logs.contains("render"), "{logs}");
    assert!(logs.contains("platform=\"recording\""), "{logs}");
    assert!(logs.contains("DEBUG"), "{logs}");
}

#[test]
fn nothing_is_logged_above_the_subscriber_level() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let mut canvas = RecordingCanvas::new();
        Element::from(Group::new()).draw(&mut canvas).unwrap();
    });
    assert!(capture.contents().is_empty());
}

use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::controller::Completion;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A backend request finished.
    Completed(Completion),
    /// The input thread stopped after a terminal error; no more keys will arrive.
    InputClosed(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    running: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let running = Arc::new(AtomicBool::new(true));
        let thread_running = Arc::clone(&running);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            while thread_running.load(Ordering::Relaxed) {
                // Short poll timeout so the running flag is checked frequently
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            report_input_error(&event_tx, "read", &err);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        report_input_error(&event_tx, "poll", &err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, running }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn report_input_error(tx: &mpsc::Sender<AppEvent>, stage: &str, err: &io::Error) {
    tracing::error!(error = %err, stage, "terminal input failed");
    let _ = tx.send(AppEvent::InputClosed(format!("terminal {} failed: {}", stage, err)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_is_forwarded_to_ui_loop() {
        let (tx, rx) = mpsc::channel();
        report_input_error(&tx, "read", &io::Error::other("tty gone"));
        match rx.try_recv() {
            Ok(AppEvent::InputClosed(reason)) => {
                assert_eq!(reason, "terminal read failed: tty gone");
            }
            _ => panic!("expected InputClosed"),
        }
    }
}

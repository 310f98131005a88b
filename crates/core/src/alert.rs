//! Out-of-range alert presentation.
//!
//! An [`AlertPresenter`] is handed to the range validator explicitly so the
//! blocking console animation can be swapped for a silent or recording
//! implementation in tests.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Number of blink cycles shown for every out-of-range alert.
pub const ALERT_REPEAT_COUNT: u32 = 6;

/// Pause after each blink frame.
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_secs(1);

/// The two frames alternated on the same line. The leading carriage return
/// rewinds the cursor so each frame overwrites the previous one.
const BLINK_FRAMES: [&str; 2] = ["\r* ", "\r *"];

/// Something that can show an alert message to the operator.
pub trait AlertPresenter {
    /// Show `message`, then blink `repeat_count` times.
    ///
    /// Blocks until the whole presentation is done.
    fn present(&mut self, repeat_count: u32, message: &str) -> io::Result<()>;
}

impl<P: AlertPresenter + ?Sized> AlertPresenter for &mut P {
    fn present(&mut self, repeat_count: u32, message: &str) -> io::Result<()> {
        (**self).present(repeat_count, message)
    }
}

/// Console alert: prints the message once, then blinks an asterisk in place.
///
/// With the default interval the caller is blocked for
/// `2 * repeat_count` seconds.
#[derive(Debug)]
pub struct BlinkAlert<W> {
    out: W,
    interval: Duration,
}

impl BlinkAlert<io::Stdout> {
    /// Blink alert on the process standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BlinkAlert<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            interval: DEFAULT_BLINK_INTERVAL,
        }
    }

    /// Override the pause after each frame.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Consume the alert and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AlertPresenter for BlinkAlert<W> {
    fn present(&mut self, repeat_count: u32, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;

        for _ in 0..repeat_count {
            for frame in BLINK_FRAMES {
                self.out.write_all(frame.as_bytes())?;
                self.out.flush()?;
                if !self.interval.is_zero() {
                    thread::sleep(self.interval);
                }
            }
        }

        Ok(())
    }
}

/// Presenter that shows nothing. For callers that only want the verdict.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlert;

impl AlertPresenter for SilentAlert {
    fn present(&mut self, _repeat_count: u32, _message: &str) -> io::Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

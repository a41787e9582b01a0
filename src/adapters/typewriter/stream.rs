//! Typewriter output as an async stream.
//!
//! Alternative to [`TypewriterRunner`](super::TypewriterRunner) for hosts that
//! pull rather than get called: each item is the next displayed text, yielded
//! when it is due. Dropping the stream cancels the pending timer.

use std::time::Duration;

use futures::stream::{self, Stream};
use tokio::time;

use crate::domain::typewriter::TypewriterCycler;

/// Streams every distinct displayed text, starting with the initial `""`.
///
/// The stream never ends.
pub fn typewriter_stream(cycler: TypewriterCycler) -> impl Stream<Item = String> + Send {
    stream::unfold(
        (cycler.frames(), None::<Duration>),
        |(mut frames, wait)| async move {
            if let Some(wait) = wait {
                time::sleep(wait).await;
            }
            let frame = frames.next()?;
            let hold = frame.hold;
            Some((frame.text, (frames, Some(hold))))
        },
    )
}

use std::{panic::AssertUnwindSafe, sync::Arc, time::Duration};

use futures::FutureExt;
use tokio::time;

use crate::{map::MapSurface, Enroute};

/// Upstream rate limits make one giant request slow enough to time out, so
/// feeds are queried at most this many at a time.
pub const MAX_CHUNK: usize = 5;

/// Personal trackers are polled on this period, one request per chunk.
pub const PERSONAL_PERIOD: Duration = Duration::from_secs(2 * 60);

/// The rental feed is aggregated upstream, so all its trackers go out as a
/// single query on a shorter period.
pub const RENTAL_PERIOD: Duration = Duration::from_secs(60);

/// Which provider namespace a poll cycle queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderClass {
    Personal,
    Rental,
}

/// Partitions `feeds` into the minimum number of contiguous chunks of at
/// most `max_size` elements, preserving order. No chunk is empty; an empty
/// input yields no chunks.
pub fn chunk_feeds(feeds: &[String], max_size: usize) -> Vec<Vec<String>> {
    feeds.chunks(max_size).map(|chunk| chunk.to_vec()).collect()
}

/// Spawns the two repeating poll timers. Each firing enqueues one task per
/// chunk without waiting for the previous cycle, so a slow response from
/// cycle N may still be in flight when cycle N+1 goes out; whichever lands
/// last wins.
pub(crate) fn spawn_polls<S: MapSurface>(tracker: &Arc<Enroute<S>>) {
    if tracker.personal_chunks.is_empty() {
        log::info!("no personal feeds configured");
    } else {
        spawn_cycle(
            Arc::clone(tracker),
            ProviderClass::Personal,
            tracker.personal_chunks.clone(),
            PERSONAL_PERIOD,
        );
    }
    if tracker.rental_feeds.is_empty() {
        log::info!("no rental feeds configured");
    } else {
        spawn_cycle(
            Arc::clone(tracker),
            ProviderClass::Rental,
            vec![tracker.rental_feeds.clone()],
            RENTAL_PERIOD,
        );
    }
}

fn spawn_cycle<S: MapSurface>(
    tracker: Arc<Enroute<S>>,
    provider: ProviderClass,
    chunks: Vec<Vec<String>>,
    period: Duration,
) {
    tokio::spawn(async move {
        let mut interval = time::interval(period);
        loop {
            // First tick fires immediately, giving the initial poll.
            interval.tick().await;
            log::debug!(
                "{:?} cycle: {} chunk(s)",
                provider,
                chunks.len()
            );
            for chunk in &chunks {
                let tracker = Arc::clone(&tracker);
                let chunk = chunk.clone();
                tokio::spawn(async move {
                    let result = AssertUnwindSafe(tracker.poll(provider, &chunk))
                        .catch_unwind()
                        .await;
                    match result {
                        Ok(Ok(())) => {}
                        Ok(Err(why)) => log::warn!(
                            "{:?} poll of {} feed(s) failed: {}",
                            provider,
                            chunk.len(),
                            why
                        ),
                        Err(_) => log::error!("{:?} poll task panicked", provider),
                    }
                });
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feeds(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("feed-{}", i)).collect()
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk_feeds(&[], MAX_CHUNK).is_empty());
    }

    #[test]
    fn partition_is_minimal_ordered_and_bounded() {
        for n in 1..=23 {
            let input = feeds(n);
            let chunks = chunk_feeds(&input, MAX_CHUNK);
            assert_eq!(chunks.len(), n.div_ceil(MAX_CHUNK), "n = {}", n);
            assert!(chunks.iter().all(|chunk| !chunk.is_empty()));
            assert!(chunks.iter().all(|chunk| chunk.len() <= MAX_CHUNK));
            let rejoined: Vec<String> =
                chunks.into_iter().flatten().collect();
            assert_eq!(rejoined, input);
        }
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let chunks = chunk_feeds(&feeds(10), MAX_CHUNK);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|chunk| chunk.len() == MAX_CHUNK));
    }
}

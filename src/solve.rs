use crate::{Course, Path};

const ROOT: usize = !0usize; // Sentinel.

#[derive(Debug, Clone, Copy)]
struct Entry {
    pos: usize,
    parent: usize,
}

/// Finds a path with the fewest hops from position 0 out past the end of the
/// course, or `None` if every reachable position is exhausted first.
///
/// An empty course is already cleared, which gives an empty path.
pub fn bfs(course: &Course) -> Option<Path> {
    if course.is_empty() {
        return Some(Path::default());
    }

    // Discovered entries double as the FIFO queue: `cursor` walks them in order.
    let mut entries = Vec::with_capacity(course.len());
    let mut visited = vec![false; course.len()];
    entries.push(Entry { pos: 0, parent: ROOT });
    visited[0] = true;

    let mut cursor = 0;
    let mut hops = 1;
    let (last, cleared_from) = 'bfs: loop {
        #[cfg(feature = "coz")]
        coz::scope!("Round");

        let round_end = entries.len();
        if cursor >= round_end {
            tracing::debug!(visited = entries.len(), hops, "No way out");
            return None;
        }
        tracing::trace!(frontier = round_end - cursor, hops, "Round");

        while cursor < round_end {
            let Entry { pos, .. } = entries[cursor];
            // A blocked position has no budget and expands to nothing.
            for len in (1..=course[pos] as usize).rev() {
                #[cfg(feature = "coz")]
                coz::progress!("Jump");

                let next = pos + len;
                if next >= course.len() {
                    break 'bfs (cursor, pos);
                }
                if !visited[next] {
                    visited[next] = true;
                    entries.push(Entry {
                        pos: next,
                        parent: cursor,
                    });
                }
            }
            cursor += 1;
        }
        hops += 1;
    };

    let mut positions = std::iter::successors(Some(&entries[last]), |entry| {
        (entry.parent != ROOT).then(|| &entries[entry.parent])
    })
    .map(|entry| entry.pos)
    .collect::<Vec<_>>();
    positions.reverse();
    debug_assert_eq!(positions.len(), hops);
    tracing::debug!(hops, visited = entries.len(), cleared_from, "Cleared course");
    Some(positions.into())
}

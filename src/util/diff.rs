//! Myers O(ND) edit script over symbol slices.
//!
//! The classic greedy forward construction: explore an expanding envelope
//! of diagonals, follow snakes of equal symbols, finish on the first path
//! that consumes both inputs. Symbols are whatever unit the caller
//! measures in (the document diff feeds grapheme clusters or raw bytes);
//! the script is returned run-length encoded.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DiffTag {
    /// Present only in the source.
    Del,
    /// Present in both.
    Eql,
    /// Present only in the destination.
    Ins,
}

/// Run-length encoded edit script, in source-to-destination order.
pub(crate) type Script = Vec<(DiffTag, usize)>;

#[derive(Clone)]
struct Path {
    /// Destination progress used to pick between candidate paths; unlike
    /// `dst_pos` it keeps growing on down-moves past the end.
    y: usize,
    src_pos: usize,
    dst_pos: usize,
    edits: Script,
}

/// Shortest edit script turning `src` into `dst`.
pub(crate) fn diff<T: PartialEq>(src: &[T], dst: &[T]) -> Script {
    let start = Path {
        y: 0,
        src_pos: 0,
        dst_pos: 0,
        edits: Vec::new(),
    };
    let mut paths = vec![start];
    for envelope in 0..=(src.len() + dst.len()) {
        match each_diagonal(envelope as isize, &paths, src, dst) {
            Ok(done) => return done,
            Err(next) => paths = next,
        }
    }
    Vec::new()
}

fn each_diagonal<T: PartialEq>(
    limit: isize,
    paths: &[Path],
    src: &[T],
    dst: &[T],
) -> Result<Script, Vec<Path>> {
    let mut next_paths = Vec::with_capacity(paths.len() + 1);
    let mut idx = 0usize;
    let mut diag = -limit;
    while diag <= limit {
        let mut path = if limit == 0 {
            paths[idx].clone()
        } else if diag == -limit {
            move_down(paths[idx].clone(), dst.len())
        } else if diag == limit {
            move_right(paths[idx].clone(), src.len())
        } else {
            let first = &paths[idx];
            let second = &paths[idx + 1];
            let chosen = if first.y > second.y {
                move_right(first.clone(), src.len())
            } else {
                move_down(second.clone(), dst.len())
            };
            idx += 1;
            chosen
        };
        if follow_snake(&mut path, src, dst) {
            return Ok(path.edits);
        }
        next_paths.push(path);
        diag += 2;
    }
    Err(next_paths)
}

fn move_down(mut path: Path, dst_len: usize) -> Path {
    if path.dst_pos < dst_len {
        push_edit(&mut path.edits, DiffTag::Ins, 1);
        path.dst_pos += 1;
    }
    path.y += 1;
    path
}

fn move_right(mut path: Path, src_len: usize) -> Path {
    if path.src_pos < src_len {
        push_edit(&mut path.edits, DiffTag::Del, 1);
        path.src_pos += 1;
    }
    path
}

fn follow_snake<T: PartialEq>(path: &mut Path, src: &[T], dst: &[T]) -> bool {
    while path.src_pos < src.len()
        && path.dst_pos < dst.len()
        && src[path.src_pos] == dst[path.dst_pos]
    {
        push_edit(&mut path.edits, DiffTag::Eql, 1);
        path.src_pos += 1;
        path.dst_pos += 1;
        path.y += 1;
    }
    path.src_pos == src.len() && path.dst_pos == dst.len()
}

fn push_edit(edits: &mut Script, tag: DiffTag, len: usize) {
    match edits.last_mut() {
        Some((last, count)) if *last == tag => *count += len,
        _ => edits.push((tag, len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn src_len(script: &Script) -> usize {
        script
            .iter()
            .filter(|(tag, _)| *tag != DiffTag::Ins)
            .map(|(_, len)| len)
            .sum()
    }

    fn dst_len(script: &Script) -> usize {
        script
            .iter()
            .filter(|(tag, _)| *tag != DiffTag::Del)
            .map(|(_, len)| len)
            .sum()
    }

    #[test]
    fn equal_inputs_are_one_run() {
        let s = chars("hello");
        assert_eq!(diff(&s, &s), vec![(DiffTag::Eql, 5)]);
        let empty: Vec<char> = vec![];
        assert_eq!(diff(&empty, &empty), vec![]);
    }

    #[test]
    fn empty_source_inserts_everything() {
        assert_eq!(diff(&[], &chars("abc")), vec![(DiffTag::Ins, 3)]);
    }

    #[test]
    fn empty_destination_deletes_everything() {
        assert_eq!(diff(&chars("abc"), &[]), vec![(DiffTag::Del, 3)]);
    }

    #[test]
    fn script_reconstructs_both_lengths() {
        for (src, dst) in [
            ("kitten", "sitting"),
            ("abcdef", "abXYef"),
            ("aaabbb", "ab"),
            ("the quick brown fox", "the slow green fox"),
            ("", "x"),
            ("x", ""),
        ] {
            let script = diff(&chars(src), &chars(dst));
            assert_eq!(src_len(&script), src.chars().count(), "src of {src:?}");
            assert_eq!(dst_len(&script), dst.chars().count(), "dst of {dst:?}");
        }
    }

    #[test]
    fn script_is_minimal_for_single_edit() {
        let script = diff(&chars("ac"), &chars("abc"));
        assert_eq!(
            script
                .iter()
                .filter(|(tag, _)| *tag != DiffTag::Eql)
                .map(|(_, len)| len)
                .sum::<usize>(),
            1
        );
    }

    #[test]
    fn common_middle_is_kept() {
        // the lone common symbol anchors an equal run at its first
        // possible alignment
        let script = diff(&chars("Badcat"), &chars("Gooddog"));
        let eqls: Vec<_> = script
            .iter()
            .filter(|(tag, _)| *tag == DiffTag::Eql)
            .collect();
        assert_eq!(eqls, vec![&(DiffTag::Eql, 1)]);
        assert_eq!(src_len(&script), 6);
        assert_eq!(dst_len(&script), 7);
    }

    #[test]
    fn runs_are_compacted() {
        let script = diff(&chars("aaaa"), &chars("bbbb"));
        assert!(script.len() <= 2, "expected compact runs, got {script:?}");
    }
}

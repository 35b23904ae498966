use super::*;

fn segments(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| (*part).to_string()).collect()
}

#[test]
fn test_chunk_drops_leading_and_trailing_slashes() {
    assert_eq!(chunk_path("/alpha/bravo/"), segments(&["alpha", "bravo"]));
}

#[test]
fn test_chunk_empty_input() {
    assert_eq!(chunk_path(""), Vec::<String>::new());
}

#[test]
fn test_chunk_collapses_repeated_slashes() {
    assert_eq!(chunk_path("a//b"), segments(&["a", "b"]));
}

#[test]
fn test_chunk_drops_blank_segments() {
    assert_eq!(chunk_path("/  /alpha/ /bravo"), segments(&["alpha", "bravo"]));
    assert_eq!(chunk_path("   "), Vec::<String>::new());
}

#[test]
fn test_chunk_preserves_order() {
    assert_eq!(
        chunk_path("one/two/three/four"),
        segments(&["one", "two", "three", "four"])
    );
}

#[test]
fn test_positive_indexing() {
    let sequence = segments(&["org", "repo"]);
    assert_eq!(segment_at(&sequence, 0), Some("org"));
    assert_eq!(segment_at(&sequence, 1), Some("repo"));
    assert_eq!(segment_at(&sequence, 2), None);
}

#[test]
fn test_negative_indexing() {
    let sequence = segments(&["org", "repo"]);
    assert_eq!(segment_at(&sequence, -1), Some("repo"));
    assert_eq!(segment_at(&sequence, -2), Some("org"));
    assert_eq!(segment_at(&sequence, -3), None);
}

#[test]
fn test_index_symmetry() {
    let sequence = segments(&["a", "b", "c", "d", "e"]);
    let len = sequence.len() as isize;
    for i in 0..len {
        assert_eq!(
            segment_at(&sequence, i),
            segment_at(&sequence, i - len),
            "positive index {i} and negative index {} disagree",
            i - len
        );
    }
}

#[test]
fn test_empty_sequence_has_no_segments() {
    let sequence: Vec<String> = Vec::new();
    assert_eq!(segment_at(&sequence, 0), None);
    assert_eq!(segment_at(&sequence, -1), None);
}

//! Content hashing utilities.
//!
//! Graph hashes are an equality heuristic, not a security primitive: each
//! statement hashes to 32 bits and a graph hashes to the wrapping sum of its
//! statements, so permutations of the same statements hash identically.

use oxrdf::TripleRef;
use xxhash_rust::xxh3::xxh3_64;

/// Compute a content hash for arbitrary bytes
pub fn content_hash(data: &[u8]) -> u64 {
    xxh3_64(data)
}

/// Stable 32-bit hash of a single statement.
///
/// Hashes the N-Triples rendering, so blank node labels take part in the hash.
pub fn statement_hash(triple: TripleRef<'_>) -> i32 {
    // Low 32 bits of the 64-bit digest.
    content_hash(triple.to_string().as_bytes()) as i32
}

/// Order-independent hash over a set of statements.
pub fn graph_hash<'a>(triples: impl IntoIterator<Item = TripleRef<'a>>) -> i32 {
    triples
        .into_iter()
        .fold(0i32, |acc, t| acc.wrapping_add(statement_hash(t)))
}

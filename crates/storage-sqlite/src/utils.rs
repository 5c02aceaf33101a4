//! Helpers for staying under SQLite's statement parameter limit.

/// Rows per multi-row INSERT.
///
/// Each listing row binds four parameters, so a chunk stays below the
/// 999-parameter limit of older SQLite builds.
pub const SQLITE_MAX_ROWS_CHUNK: usize = 200;

/// Chunk a slice into batches for multi-row SQLite statements.
pub fn chunk_for_sqlite<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    items.chunks(SQLITE_MAX_ROWS_CHUNK)
}

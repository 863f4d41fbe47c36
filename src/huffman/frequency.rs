use std::collections::BTreeMap;

/// Occurrence count of every distinct symbol in a buffer, ordered by symbol value.
pub type FrequencyMap = BTreeMap<u8, usize>;

/// Counts every byte of `data` in a single pass.
///
/// The keys of the returned map are exactly the distinct symbols present in `data`,
/// so an empty buffer yields an empty map.
pub fn build_frequency_map(data: &[u8]) -> FrequencyMap {
    data.iter().copied().fold(FrequencyMap::new(), |mut acc, byte| {
        *acc.entry(byte).or_insert(0) += 1;
        acc
    })
}
